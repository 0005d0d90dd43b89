//! DTO for pet types.

use serde::Serialize;

use crate::domain::entities::PetType;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PetTypeDto {
    pub id: i32,
    pub name: String,
}

impl From<&PetType> for PetTypeDto {
    fn from(t: &PetType) -> Self {
        Self {
            id: t.id,
            name: t.name.clone(),
        }
    }
}
