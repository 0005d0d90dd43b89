//! Shared application state injected into all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::application::services::ClinicService;
use crate::infrastructure::persistence::PgClinicStore;

/// Cloned into every request; the service is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub clinic_service: Arc<ClinicService<PgClinicStore>>,
}

impl AppState {
    /// Wires the Postgres store into the clinic service.
    pub fn new(pool: Arc<PgPool>) -> Self {
        let store = Arc::new(PgClinicStore::new(pool));

        Self {
            clinic_service: Arc::new(ClinicService::new(store)),
        }
    }
}
