//! Visit entity and its linked view.

use chrono::NaiveDate;

use super::pet::PetRef;

/// A single veterinary visit.
///
/// `pet_id` is the back-reference to the owning pet. Once linked into a pet,
/// the visit appears in exactly that pet's visit list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    pub id: i32,
    pub pet_id: i32,
    pub date: NaiveDate,
    pub description: String,
}

impl Visit {
    pub fn new(id: i32, pet_id: i32, date: NaiveDate, description: String) -> Self {
        Self {
            id,
            pet_id,
            date,
            description,
        }
    }
}

/// A visit borrowed together with the pet it was reached through.
#[derive(Debug, Clone, Copy)]
pub struct VisitRef<'a> {
    pet: PetRef<'a>,
    visit: &'a Visit,
}

impl<'a> VisitRef<'a> {
    pub(crate) fn new(pet: PetRef<'a>, visit: &'a Visit) -> Self {
        Self { pet, visit }
    }

    /// The owning pet, linked back to its owner.
    pub fn pet(&self) -> PetRef<'a> {
        self.pet
    }

    pub fn visit(&self) -> &'a Visit {
        self.visit
    }
}

impl std::ops::Deref for VisitRef<'_> {
    type Target = Visit;

    fn deref(&self) -> &Visit {
        self.visit
    }
}
