//! Record store access: raw owner, pet, pet type and visit rows.

use crate::domain::entities::PetType;
use crate::error::LoadError;
use async_trait::async_trait;
use chrono::NaiveDate;

/// An `owners` row, without pets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerRow {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
}

/// A `pets` row. `type_id` and `owner_id` are unresolved foreign keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetRow {
    pub id: i32,
    pub name: String,
    pub birth_date: NaiveDate,
    pub type_id: i32,
    pub owner_id: i32,
}

/// A `visits` row tagged with its owning pet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitRow {
    pub id: i32,
    pub pet_id: i32,
    pub visit_date: NaiveDate,
    pub description: String,
}

/// Everything below a batch of owners, fetched in one round trip.
///
/// - `pets` - distinct pet rows of the requested owners
/// - `pet_types` - the type rows those pets reference, where one exists
/// - `visits` - visit rows of those pets, in fetch order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescendantRows {
    pub pets: Vec<PetRow>,
    pub pet_types: Vec<PetType>,
    pub visits: Vec<VisitRow>,
}

/// A read-only unit of work bound to one store connection.
///
/// Every method is one round trip to the store. Dropping the session releases
/// the connection, whether the caller finished, failed, or was cancelled.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReadSession: Send {
    /// Fetches one owner row.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::StoreUnavailable`] on database errors.
    async fn owner_by_id(&mut self, id: i32) -> Result<Option<OwnerRow>, LoadError>;

    /// Fetches owners whose last name starts with `last_name_prefix`, or all
    /// owners when the prefix is `None`. Ordered by last name, then id.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::StoreUnavailable`] on database errors.
    async fn owners_by_last_name(
        &mut self,
        last_name_prefix: Option<String>,
    ) -> Result<Vec<OwnerRow>, LoadError>;

    /// Fetches the owner of the given pet.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::StoreUnavailable`] on database errors.
    async fn owner_by_pet_id(&mut self, pet_id: i32) -> Result<Option<OwnerRow>, LoadError>;

    /// Fetches the owner of the pet the given visit belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::StoreUnavailable`] on database errors.
    async fn owner_by_visit_id(&mut self, visit_id: i32) -> Result<Option<OwnerRow>, LoadError>;

    /// Fetches pets, their types and their visits for a whole batch of owners
    /// in a single query.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::StoreUnavailable`] on database errors.
    async fn descendants(&mut self, owner_ids: &[i32]) -> Result<DescendantRows, LoadError>;

    /// Fetches all pet types ordered by name.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::StoreUnavailable`] on database errors.
    async fn pet_types(&mut self) -> Result<Vec<PetType>, LoadError>;

    /// Fetches one pet type.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::StoreUnavailable`] on database errors.
    async fn pet_type_by_id(&mut self, id: i32) -> Result<Option<PetType>, LoadError>;
}

/// Source of per-request read sessions.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClinicStore`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClinicStore: Send + Sync {
    /// Acquires a connection and opens a read-only transaction on it.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::StoreUnavailable`] if no connection can be acquired.
    async fn begin_read(&self) -> Result<Box<dyn ReadSession>, LoadError>;

    /// Checks that the store answers queries.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::StoreUnavailable`] if the store does not respond.
    async fn ping(&self) -> Result<(), LoadError>;
}
