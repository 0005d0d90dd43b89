//! Owner aggregate loading: one descendant fetch per batch of owners.

use std::collections::{HashMap, HashSet};

use super::graph_linker::link_pet;
use super::pet_assembler::{PetTypeLookup, assemble_pets};
use super::visit_collator::collate_visits;
use crate::domain::entities::{Owner, Pet};
use crate::domain::repositories::{DescendantRows, OwnerRow, ReadSession};
use crate::error::{LinkedEntity, LoadError};

/// Completes a batch of owner rows into full aggregates.
///
/// Issues exactly one [`ReadSession::descendants`] call for the whole batch,
/// or none at all when `owners` is empty. Owners come back in input order.
///
/// # Errors
///
/// Returns [`LoadError::StoreUnavailable`] if the descendant fetch fails, and
/// any error from [`assemble_owners`].
pub async fn load_aggregates(
    session: &mut dyn ReadSession,
    owners: Vec<OwnerRow>,
) -> Result<Vec<Owner>, LoadError> {
    if owners.is_empty() {
        return Ok(Vec::new());
    }

    let mut seen = HashSet::new();
    let owner_ids: Vec<i32> = owners
        .iter()
        .map(|o| o.id)
        .filter(|id| seen.insert(*id))
        .collect();

    let rows = session.descendants(&owner_ids).await?;
    tracing::debug!(
        owners = owner_ids.len(),
        pets = rows.pets.len(),
        visits = rows.visits.len(),
        "descendant rows fetched"
    );

    assemble_owners(owners, rows)
}

/// Builds linked owners from already fetched rows.
///
/// Every pet and visit in `rows` must end up attached to exactly one owner of
/// the batch. Repeated owner rows are assembled once.
///
/// # Errors
///
/// Returns [`LoadError::DanglingTypeReference`] if a pet's type is missing.
/// Returns [`LoadError::LinkMismatch`] if a pet or visit has no parent in the
/// batch.
pub fn assemble_owners(
    owners: Vec<OwnerRow>,
    rows: DescendantRows,
) -> Result<Vec<Owner>, LoadError> {
    let types = PetTypeLookup::new(rows.pet_types);
    let mut visits = collate_visits(rows.visits);
    let pets = assemble_pets(rows.pets, &types, &mut visits)?;
    visits.ensure_drained()?;

    let mut pets_by_owner: HashMap<i32, Vec<Pet>> = HashMap::new();
    for pet in pets {
        pets_by_owner.entry(pet.owner_id).or_default().push(pet);
    }

    let mut seen = HashSet::new();
    let mut assembled = Vec::with_capacity(owners.len());
    for row in owners.into_iter().filter(|o| seen.insert(o.id)) {
        let mut owner = Owner::new(
            row.id,
            row.first_name,
            row.last_name,
            row.address,
            row.city,
            row.telephone,
        );

        for pet in pets_by_owner.remove(&owner.id).unwrap_or_default() {
            link_pet(&mut owner, pet)?;
        }

        assembled.push(owner);
    }

    if let Some(orphan) = pets_by_owner.values().flatten().min_by_key(|p| p.id) {
        return Err(LoadError::LinkMismatch {
            entity: LinkedEntity::Pet,
            id: orphan.id,
            parent_id: orphan.owner_id,
            target_id: None,
        });
    }

    Ok(assembled)
}
