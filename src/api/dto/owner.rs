//! DTO for owners.

use serde::Serialize;

use super::pet::PetDto;
use crate::domain::entities::Owner;

/// An owner with every pet and visit attached.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
    pub pets: Vec<PetDto>,
}

impl From<&Owner> for OwnerDto {
    fn from(o: &Owner) -> Self {
        Self {
            id: o.id,
            first_name: o.first_name.clone(),
            last_name: o.last_name.clone(),
            address: o.address.clone(),
            city: o.city.clone(),
            telephone: o.telephone.clone(),
            pets: o.pets().map(PetDto::from).collect(),
        }
    }
}
