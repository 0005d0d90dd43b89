//! Pet entity and its linked view.

use chrono::NaiveDate;
use std::sync::Arc;

use super::owner::Owner;
use super::pet_type::PetType;
use super::visit::{Visit, VisitRef};

/// A pet with its type and visit history.
///
/// `visits` is always present and ordered most recent first; a pet without
/// history carries an empty list. `owner_id` is the back-reference to the
/// owning [`Owner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pet {
    pub id: i32,
    pub name: String,
    pub birth_date: NaiveDate,
    pub pet_type: Arc<PetType>,
    pub owner_id: i32,
    pub visits: Vec<Visit>,
}

impl Pet {
    /// Creates a pet with no visits attached yet.
    pub fn new(
        id: i32,
        name: String,
        birth_date: NaiveDate,
        pet_type: Arc<PetType>,
        owner_id: i32,
    ) -> Self {
        Self {
            id,
            name,
            birth_date,
            pet_type,
            owner_id,
            visits: Vec::new(),
        }
    }
}

/// A pet borrowed together with the owner it was reached through.
///
/// [`PetRef::owner`] returns the exact `&Owner` the view came from, which is
/// how the pet-to-owner back-reference is exposed without a reference cycle.
#[derive(Debug, Clone, Copy)]
pub struct PetRef<'a> {
    owner: &'a Owner,
    pet: &'a Pet,
}

impl<'a> PetRef<'a> {
    pub(crate) fn new(owner: &'a Owner, pet: &'a Pet) -> Self {
        Self { owner, pet }
    }

    pub fn owner(&self) -> &'a Owner {
        self.owner
    }

    pub fn pet(&self) -> &'a Pet {
        self.pet
    }

    /// Visits of this pet, each linked back to this view.
    pub fn visits(&self) -> impl Iterator<Item = VisitRef<'a>> + use<'a> {
        let this = *self;
        let pet = self.pet;
        pet.visits.iter().map(move |v| VisitRef::new(this, v))
    }
}

impl std::ops::Deref for PetRef<'_> {
    type Target = Pet;

    fn deref(&self) -> &Pet {
        self.pet
    }
}
