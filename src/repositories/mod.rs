//! Repositorios
//!
//! Acceso a PostgreSQL detrás de traits, para poder ejercitar los
//! controladores sin base de datos.

pub mod auto_repository;
pub mod commission_repository;
pub mod rental_repository;

#[cfg(test)]
pub mod memory;

pub use auto_repository::{AutoRepository, PgAutoRepository};
pub use commission_repository::{CommissionRepository, PgCommissionRepository};
pub use rental_repository::{PgRentalRepository, RentalRepository};
