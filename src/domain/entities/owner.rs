//! Owner aggregate root and the pet/visit graphs resolved through it.

use std::sync::Arc;

use super::pet::{Pet, PetRef};
use super::visit::VisitRef;

/// A pet owner together with all of their pets.
///
/// `Owner` is the unit of construction for every read: pets and visits are
/// rebuilt per load and hang off their owner. `pets` is never absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
    pub pets: Vec<Pet>,
}

impl Owner {
    /// Creates an owner with no pets attached yet.
    pub fn new(
        id: i32,
        first_name: String,
        last_name: String,
        address: String,
        city: String,
        telephone: String,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            address,
            city,
            telephone,
            pets: Vec::new(),
        }
    }

    /// Pets of this owner, each linked back to `self`.
    pub fn pets(&self) -> impl Iterator<Item = PetRef<'_>> {
        self.pets.iter().map(move |p| PetRef::new(self, p))
    }

    /// Finds a pet of this owner by id.
    pub fn pet(&self, pet_id: i32) -> Option<PetRef<'_>> {
        self.pets().find(|p| p.id == pet_id)
    }

    /// Number of visits across all pets.
    pub fn visit_count(&self) -> usize {
        self.pets.iter().map(|p| p.visits.len()).sum()
    }
}

/// A pet resolved through its owner's aggregate.
///
/// Holds the whole aggregate so that [`PetGraph::pet`] can hand out a view
/// whose owner link is live. Graphs of pets of the same owner share it.
#[derive(Debug, Clone)]
pub struct PetGraph {
    owner: Arc<Owner>,
    pet_idx: usize,
}

impl PetGraph {
    /// Locates `pet_id` inside `owner`. Returns `None` when the owner has no
    /// such pet.
    pub fn locate(owner: impl Into<Arc<Owner>>, pet_id: i32) -> Option<Self> {
        let owner = owner.into();
        let pet_idx = owner.pets.iter().position(|p| p.id == pet_id)?;
        Some(Self { owner, pet_idx })
    }

    /// One graph per pet of `owner`, in the owner's pet order.
    pub fn all(owner: impl Into<Arc<Owner>>) -> impl Iterator<Item = Self> {
        let owner = owner.into();
        (0..owner.pets.len()).map(move |pet_idx| Self {
            owner: Arc::clone(&owner),
            pet_idx,
        })
    }

    pub fn pet(&self) -> PetRef<'_> {
        PetRef::new(&self.owner, &self.owner.pets[self.pet_idx])
    }

    pub fn owner(&self) -> &Owner {
        &self.owner
    }
}

/// A visit resolved through its pet and that pet's owner.
#[derive(Debug, Clone)]
pub struct VisitGraph {
    owner: Arc<Owner>,
    pet_idx: usize,
    visit_idx: usize,
}

impl VisitGraph {
    /// Locates `visit_id` among the visits of any pet of `owner`.
    pub fn locate(owner: impl Into<Arc<Owner>>, visit_id: i32) -> Option<Self> {
        let owner = owner.into();
        let (pet_idx, visit_idx) = owner.pets.iter().enumerate().find_map(|(pi, pet)| {
            pet.visits
                .iter()
                .position(|v| v.id == visit_id)
                .map(|vi| (pi, vi))
        })?;

        Some(Self {
            owner,
            pet_idx,
            visit_idx,
        })
    }

    /// One graph per visit of `owner`, pet by pet, each pet's visits most
    /// recent first.
    pub fn all(owner: impl Into<Arc<Owner>>) -> impl Iterator<Item = Self> {
        let owner = owner.into();
        let positions: Vec<(usize, usize)> = owner
            .pets
            .iter()
            .enumerate()
            .flat_map(|(pi, pet)| (0..pet.visits.len()).map(move |vi| (pi, vi)))
            .collect();

        positions
            .into_iter()
            .map(move |(pet_idx, visit_idx)| Self {
                owner: Arc::clone(&owner),
                pet_idx,
                visit_idx,
            })
    }

    pub fn visit(&self) -> VisitRef<'_> {
        let pet = &self.owner.pets[self.pet_idx];
        VisitRef::new(PetRef::new(&self.owner, pet), &pet.visits[self.visit_idx])
    }

    pub fn owner(&self) -> &Owner {
        &self.owner
    }
}
