//! DTO for pets.

use chrono::NaiveDate;
use serde::Serialize;

use super::pet_type::PetTypeDto;
use super::visit::VisitDto;
use crate::domain::entities::PetRef;

/// A pet with its type and visit history, most recent visit first.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PetDto {
    pub id: i32,
    pub name: String,
    pub birth_date: NaiveDate,
    #[serde(rename = "type")]
    pub pet_type: PetTypeDto,
    pub owner_id: i32,
    pub visits: Vec<VisitDto>,
}

impl From<PetRef<'_>> for PetDto {
    fn from(p: PetRef<'_>) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            birth_date: p.birth_date,
            pet_type: PetTypeDto::from(p.pet_type.as_ref()),
            owner_id: p.owner().id,
            visits: p.visits().map(VisitDto::from).collect(),
        }
    }
}
