//! DTO for visits.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::entities::VisitRef;

/// A visit as exposed over the API. `petId` carries the back-reference.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitDto {
    pub id: i32,
    pub date: NaiveDate,
    pub description: String,
    pub pet_id: i32,
}

impl From<VisitRef<'_>> for VisitDto {
    fn from(v: VisitRef<'_>) -> Self {
        Self {
            id: v.id,
            date: v.date,
            description: v.description.clone(),
            pet_id: v.pet().id,
        }
    }
}
