//! Builds pets from rows: resolves the pet type and attaches collated visits.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use super::graph_linker::link_visit;
use super::visit_collator::VisitsByPet;
use crate::domain::entities::{Pet, PetType};
use crate::domain::repositories::PetRow;
use crate::error::LoadError;

/// Pet types of one load, keyed by id.
///
/// Built fresh from the rows of each request. Pets resolving the same type id
/// share one `Arc<PetType>`.
#[derive(Debug, Default, Clone)]
pub struct PetTypeLookup {
    types: HashMap<i32, Arc<PetType>>,
}

impl PetTypeLookup {
    pub fn new(types: impl IntoIterator<Item = PetType>) -> Self {
        let types = types
            .into_iter()
            .map(|t| (t.id, Arc::new(t)))
            .collect();
        Self { types }
    }

    pub fn get(&self, type_id: i32) -> Option<Arc<PetType>> {
        self.types.get(&type_id).cloned()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Turns pet rows into pets with their type and visit history attached.
///
/// Pets keep the order of `rows`; a repeated pet id is assembled once. The
/// owner back-reference is the row's `owner_id`; attaching the pet to an
/// actual owner happens later in [`super::graph_linker::link_pet`].
///
/// # Errors
///
/// Returns [`LoadError::DanglingTypeReference`] if a row names a type id
/// missing from `types`.
/// Returns [`LoadError::LinkMismatch`] if a collated visit does not belong to
/// the pet it was filed under.
pub fn assemble_pets(
    rows: Vec<PetRow>,
    types: &PetTypeLookup,
    visits: &mut VisitsByPet,
) -> Result<Vec<Pet>, LoadError> {
    let mut seen = HashSet::new();

    rows.into_iter()
        .filter(|row| seen.insert(row.id))
        .map(|row| -> Result<Pet, LoadError> {
            let pet_type = types
                .get(row.type_id)
                .ok_or(LoadError::DanglingTypeReference {
                    pet_id: row.id,
                    type_id: row.type_id,
                })?;

            let mut pet = Pet::new(row.id, row.name, row.birth_date, pet_type, row.owner_id);
            for visit in visits.take(row.id) {
                link_visit(&mut pet, visit)?;
            }

            Ok(pet)
        })
        .collect()
}
