//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean al schema PostgreSQL
//! del servicio de alquiler (tablas auto, auto_rent, commission y rent_threshold).

pub mod auto;
pub mod auto_rent;
pub mod commission;
pub mod rent_threshold;

pub use auto::Auto;
pub use auto_rent::{AutoRent, RentalWindow};
pub use commission::{Commission, CommissionKind, CommissionRule};
pub use rent_threshold::RentThreshold;
