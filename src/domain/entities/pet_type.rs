//! Pet type reference data.

/// A kind of animal the clinic treats ("dog", "cat", ...).
///
/// Pet types form a small lookup table. Within one assembled aggregate every
/// pet of the same kind holds the same `Arc<PetType>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetType {
    pub id: i32,
    pub name: String,
}

impl PetType {
    pub fn new(id: i32, name: String) -> Self {
        Self { id, name }
    }
}
