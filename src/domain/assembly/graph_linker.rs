//! Wires children into parents after assembly.
//!
//! Back-references are ids, so linking means checking that the child's id
//! reference names the target parent and then placing the child in the
//! parent's collection exactly once. Re-linking a child with the same id
//! replaces the earlier copy in place.

use crate::domain::entities::{Owner, Pet, Visit};
use crate::error::{LinkedEntity, LoadError};

/// Attaches `pet` to `owner`.
///
/// # Errors
///
/// Returns [`LoadError::LinkMismatch`] if `pet.owner_id` is not `owner.id`.
pub fn link_pet(owner: &mut Owner, pet: Pet) -> Result<(), LoadError> {
    if pet.owner_id != owner.id {
        return Err(LoadError::LinkMismatch {
            entity: LinkedEntity::Pet,
            id: pet.id,
            parent_id: pet.owner_id,
            target_id: Some(owner.id),
        });
    }

    match owner.pets.iter_mut().find(|p| p.id == pet.id) {
        Some(existing) => *existing = pet,
        None => owner.pets.push(pet),
    }

    Ok(())
}

/// Attaches `visit` to `pet`, appending it after visits already linked.
///
/// # Errors
///
/// Returns [`LoadError::LinkMismatch`] if `visit.pet_id` is not `pet.id`.
pub fn link_visit(pet: &mut Pet, visit: Visit) -> Result<(), LoadError> {
    if visit.pet_id != pet.id {
        return Err(LoadError::LinkMismatch {
            entity: LinkedEntity::Visit,
            id: visit.id,
            parent_id: visit.pet_id,
            target_id: Some(pet.id),
        });
    }

    match pet.visits.iter_mut().find(|v| v.id == visit.id) {
        Some(existing) => *existing = visit,
        None => pet.visits.push(visit),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::PetType;
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn owner(id: i32) -> Owner {
        Owner::new(
            id,
            "Betty".to_string(),
            "Davis".to_string(),
            "638 Cardinal Ave.".to_string(),
            "Sun Prairie".to_string(),
            "6085551749".to_string(),
        )
    }

    fn pet(id: i32, owner_id: i32) -> Pet {
        Pet::new(
            id,
            "Basil".to_string(),
            NaiveDate::from_ymd_opt(2012, 8, 6).unwrap(),
            Arc::new(PetType::new(6, "hamster".to_string())),
            owner_id,
        )
    }

    fn visit(id: i32, pet_id: i32) -> Visit {
        Visit::new(
            id,
            pet_id,
            NaiveDate::from_ymd_opt(2013, 1, 1).unwrap(),
            "rabies shot".to_string(),
        )
    }

    #[test]
    fn test_link_pet() {
        let mut o = owner(2);

        link_pet(&mut o, pet(2, 2)).unwrap();

        assert_eq!(o.pets.len(), 1);
        let linked = o.pet(2).unwrap();
        assert!(std::ptr::eq(linked.owner(), &o));
    }

    #[test]
    fn test_link_pet_twice_is_idempotent() {
        let mut o = owner(2);

        link_pet(&mut o, pet(2, 2)).unwrap();
        link_pet(&mut o, pet(2, 2)).unwrap();

        assert_eq!(o.pets.iter().filter(|p| p.id == 2).count(), 1);
    }

    #[test]
    fn test_link_pet_wrong_owner_fails() {
        let mut o = owner(2);

        let err = link_pet(&mut o, pet(5, 3)).unwrap_err();

        assert!(matches!(
            err,
            LoadError::LinkMismatch {
                entity: LinkedEntity::Pet,
                id: 5,
                parent_id: 3,
                target_id: Some(2),
            }
        ));
        assert!(o.pets.is_empty());
    }

    #[test]
    fn test_link_visit() {
        let mut p = pet(7, 1);

        link_visit(&mut p, visit(1, 7)).unwrap();
        link_visit(&mut p, visit(2, 7)).unwrap();
        link_visit(&mut p, visit(1, 7)).unwrap();

        let ids: Vec<i32> = p.visits.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_link_visit_wrong_pet_fails() {
        let mut p = pet(7, 1);

        let err = link_visit(&mut p, visit(1, 8)).unwrap_err();

        assert!(matches!(
            err,
            LoadError::LinkMismatch {
                entity: LinkedEntity::Visit,
                ..
            }
        ));
        assert!(p.visits.is_empty());
    }
}
