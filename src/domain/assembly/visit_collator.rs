//! Groups visit rows by pet and orders each group.

use std::collections::HashMap;

use crate::domain::entities::Visit;
use crate::domain::repositories::VisitRow;
use crate::error::{LinkedEntity, LoadError};

/// Collated visits keyed by pet id.
///
/// Each list is ordered by visit date, most recent first. Visits sharing a
/// date keep the order in which they were fetched.
#[derive(Debug, Default)]
pub struct VisitsByPet {
    by_pet: HashMap<i32, Vec<Visit>>,
}

impl VisitsByPet {
    /// Removes and returns the visits of `pet_id`. A pet without visits gets
    /// an empty list.
    pub fn take(&mut self, pet_id: i32) -> Vec<Visit> {
        self.by_pet.remove(&pet_id).unwrap_or_default()
    }

    #[cfg(test)]
    pub fn get(&self, pet_id: i32) -> &[Visit] {
        self.by_pet.get(&pet_id).map(Vec::as_slice).unwrap_or(&[])
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.by_pet.is_empty()
    }

    /// Fails if any visits were never taken, which means their pet was not
    /// part of the assembled set.
    pub fn ensure_drained(&self) -> Result<(), LoadError> {
        let orphan = self
            .by_pet
            .values()
            .flatten()
            .min_by_key(|v| (v.pet_id, v.id));

        match orphan {
            Some(visit) => Err(LoadError::LinkMismatch {
                entity: LinkedEntity::Visit,
                id: visit.id,
                parent_id: visit.pet_id,
                target_id: None,
            }),
            None => Ok(()),
        }
    }
}

/// Groups `rows` by pet and sorts every group by date descending.
pub fn collate_visits(rows: Vec<VisitRow>) -> VisitsByPet {
    let mut by_pet: HashMap<i32, Vec<Visit>> = HashMap::new();

    for row in rows {
        by_pet
            .entry(row.pet_id)
            .or_default()
            .push(Visit::new(row.id, row.pet_id, row.visit_date, row.description));
    }

    // sort_by is stable: equal dates stay in fetch order
    for visits in by_pet.values_mut() {
        visits.sort_by(|a, b| b.date.cmp(&a.date));
    }

    VisitsByPet { by_pet }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(id: i32, pet_id: i32, date: &str, description: &str) -> VisitRow {
        VisitRow {
            id,
            pet_id,
            visit_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_orders_by_date_descending_with_stable_ties() {
        let rows = vec![
            row(1, 7, "2020-01-01", "row1"),
            row(2, 7, "2021-06-15", "row2"),
            row(3, 7, "2021-06-15", "row3"),
            row(4, 7, "2019-03-01", "row4"),
        ];

        let mut collated = collate_visits(rows);
        let visits = collated.take(7);

        let order: Vec<&str> = visits.iter().map(|v| v.description.as_str()).collect();
        assert_eq!(order, vec!["row2", "row3", "row1", "row4"]);
    }

    #[test]
    fn test_groups_by_pet() {
        let rows = vec![
            row(1, 1, "2020-01-01", "a"),
            row(2, 2, "2020-02-01", "b"),
            row(3, 1, "2020-03-01", "c"),
        ];

        let collated = collate_visits(rows);

        assert_eq!(collated.get(1).len(), 2);
        assert_eq!(collated.get(1)[0].description, "c");
        assert_eq!(collated.get(2).len(), 1);
        assert!(collated.get(2).iter().all(|v| v.pet_id == 2));
    }

    #[test]
    fn test_pet_without_visits_gets_empty_list() {
        let mut collated = collate_visits(vec![row(1, 1, "2020-01-01", "a")]);

        assert!(collated.take(42).is_empty());
        assert!(collated.get(42).is_empty());
    }

    #[test]
    fn test_take_drains_entry() {
        let mut collated = collate_visits(vec![row(1, 1, "2020-01-01", "a")]);

        assert_eq!(collated.take(1).len(), 1);
        assert!(collated.take(1).is_empty());
        assert!(collated.is_empty());
        assert!(collated.ensure_drained().is_ok());
    }

    #[test]
    fn test_ensure_drained_reports_orphan() {
        let collated = collate_visits(vec![row(5, 9, "2020-01-01", "stray")]);

        let err = collated.ensure_drained().unwrap_err();
        assert!(matches!(
            err,
            LoadError::LinkMismatch {
                entity: LinkedEntity::Visit,
                id: 5,
                parent_id: 9,
                target_id: None,
            }
        ));
    }
}
