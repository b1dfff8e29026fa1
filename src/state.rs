//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::{
    AutoRepository, CommissionRepository, PgAutoRepository, PgCommissionRepository,
    PgRentalRepository, RentalRepository,
};

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub autos: Arc<dyn AutoRepository>,
    pub rentals: Arc<dyn RentalRepository>,
    pub commissions: Arc<dyn CommissionRepository>,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self {
            config,
            autos: Arc::new(PgAutoRepository::new(pool.clone())),
            rentals: Arc::new(PgRentalRepository::new(pool.clone())),
            commissions: Arc::new(PgCommissionRepository::new(pool)),
        }
    }

    /// Estado con repositorios arbitrarios (tests, almacenamiento alternativo)
    pub fn with_repositories(
        config: EnvironmentConfig,
        autos: Arc<dyn AutoRepository>,
        rentals: Arc<dyn RentalRepository>,
        commissions: Arc<dyn CommissionRepository>,
    ) -> Self {
        Self {
            config,
            autos,
            rentals,
            commissions,
        }
    }
}
