//! Read facade over owner aggregates and pet types.

use crate::domain::assembly::load_aggregates;
use crate::domain::entities::{Owner, PetGraph, PetType, VisitGraph};
use crate::domain::repositories::ClinicStore;
use crate::error::LoadError;
use std::sync::Arc;

/// Service answering owner, pet, visit and pet type reads.
///
/// Every call opens its own read session, so concurrent calls share no state
/// beyond the connection pool. An owner load costs two store round trips
/// (owner rows, then descendants) no matter how many owners, pets or visits
/// it returns; a load that finds no owner stops after the first.
///
/// Absent records are `Ok(None)` (or an empty list), never an error.
pub struct ClinicService<S: ClinicStore> {
    store: Arc<S>,
}

impl<S: ClinicStore> ClinicService<S> {
    /// Creates a new clinic service.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Loads one owner with all pets and visits.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::StoreUnavailable`] on database errors.
    /// Returns [`LoadError::DanglingTypeReference`] if a pet's type row is missing.
    /// Returns [`LoadError::LinkMismatch`] if the fetched rows do not form one aggregate.
    #[tracing::instrument(skip(self))]
    pub async fn load_owner(&self, id: i32) -> Result<Option<Owner>, LoadError> {
        let result = self.fetch_owner(id).await;
        observe("owner", &result);
        result
    }

    /// Loads every owner whose last name starts with `last_name_prefix`, or all
    /// owners when it is `None`, each with pets and visits attached.
    ///
    /// # Errors
    ///
    /// Same as [`ClinicService::load_owner`].
    #[tracing::instrument(skip(self))]
    pub async fn load_owners(
        &self,
        last_name_prefix: Option<&str>,
    ) -> Result<Vec<Owner>, LoadError> {
        let result = self.fetch_owners(last_name_prefix).await;
        observe("owners", &result);
        if let Ok(owners) = &result {
            tracing::debug!(count = owners.len(), "owners loaded");
        }
        result
    }

    /// Loads a pet through its owner's aggregate.
    ///
    /// # Errors
    ///
    /// Same as [`ClinicService::load_owner`].
    #[tracing::instrument(skip(self))]
    pub async fn load_pet(&self, id: i32) -> Result<Option<PetGraph>, LoadError> {
        let result = self.fetch_pet(id).await;
        observe("pet", &result);
        result
    }

    /// Loads a visit through its pet and that pet's owner.
    ///
    /// # Errors
    ///
    /// Same as [`ClinicService::load_owner`].
    #[tracing::instrument(skip(self))]
    pub async fn load_visit(&self, id: i32) -> Result<Option<VisitGraph>, LoadError> {
        let result = self.fetch_visit(id).await;
        observe("visit", &result);
        result
    }

    /// Lists every pet, each resolved through its owner's aggregate.
    ///
    /// Runs the unfiltered owner batch, so the cost is the same two round
    /// trips as [`ClinicService::load_owners`]. Pets come grouped by owner in
    /// owner order. Graphs of one owner share that owner's aggregate.
    ///
    /// # Errors
    ///
    /// Same as [`ClinicService::load_owner`].
    #[tracing::instrument(skip(self))]
    pub async fn list_pets(&self) -> Result<Vec<PetGraph>, LoadError> {
        let result: Result<Vec<PetGraph>, LoadError> = self
            .fetch_owners(None)
            .await
            .map(|owners| owners.into_iter().flat_map(PetGraph::all).collect());
        observe("pets", &result);
        result
    }

    /// Lists every visit, each resolved through its pet and that pet's owner.
    ///
    /// Visits come grouped by owner, then by pet, most recent first within a
    /// pet.
    ///
    /// # Errors
    ///
    /// Same as [`ClinicService::load_owner`].
    #[tracing::instrument(skip(self))]
    pub async fn list_visits(&self) -> Result<Vec<VisitGraph>, LoadError> {
        let result: Result<Vec<VisitGraph>, LoadError> = self
            .fetch_owners(None)
            .await
            .map(|owners| owners.into_iter().flat_map(VisitGraph::all).collect());
        observe("visits", &result);
        result
    }

    /// Lists all pet types ordered by name.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::StoreUnavailable`] on database errors.
    pub async fn list_pet_types(&self) -> Result<Vec<PetType>, LoadError> {
        let mut session = self.store.begin_read().await?;
        session.pet_types().await
    }

    /// Retrieves one pet type.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::StoreUnavailable`] on database errors.
    pub async fn get_pet_type(&self, id: i32) -> Result<Option<PetType>, LoadError> {
        let mut session = self.store.begin_read().await?;
        session.pet_type_by_id(id).await
    }

    /// Checks that the record store answers.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::StoreUnavailable`] if it does not.
    pub async fn ping(&self) -> Result<(), LoadError> {
        self.store.ping().await
    }

    async fn fetch_owner(&self, id: i32) -> Result<Option<Owner>, LoadError> {
        let mut session = self.store.begin_read().await?;

        let Some(row) = session.owner_by_id(id).await? else {
            return Ok(None);
        };

        let mut owners = load_aggregates(session.as_mut(), vec![row]).await?;
        Ok(owners.pop())
    }

    async fn fetch_owners(&self, last_name_prefix: Option<&str>) -> Result<Vec<Owner>, LoadError> {
        let mut session = self.store.begin_read().await?;

        let rows = session
            .owners_by_last_name(last_name_prefix.map(str::to_owned))
            .await?;

        load_aggregates(session.as_mut(), rows).await
    }

    async fn fetch_pet(&self, id: i32) -> Result<Option<PetGraph>, LoadError> {
        let mut session = self.store.begin_read().await?;

        let Some(row) = session.owner_by_pet_id(id).await? else {
            return Ok(None);
        };

        let owner = load_aggregates(session.as_mut(), vec![row]).await?.pop();
        Ok(owner.and_then(|o| PetGraph::locate(o, id)))
    }

    async fn fetch_visit(&self, id: i32) -> Result<Option<VisitGraph>, LoadError> {
        let mut session = self.store.begin_read().await?;

        let Some(row) = session.owner_by_visit_id(id).await? else {
            return Ok(None);
        };

        let owner = load_aggregates(session.as_mut(), vec![row]).await?.pop();
        Ok(owner.and_then(|o| VisitGraph::locate(o, id)))
    }
}

fn observe<T>(kind: &'static str, result: &Result<T, LoadError>) {
    metrics::counter!("clinic_aggregate_loads_total", "kind" => kind).increment(1);

    if let Err(e) = result {
        metrics::counter!("clinic_load_errors_total", "kind" => e.kind()).increment(1);
        tracing::warn!(load = kind, error = %e, "aggregate load failed");
    }
}
