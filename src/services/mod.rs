//! Services module
//!
//! Lógica de negocio pura: validación de reservas y motor de liquidación.
//! No hacen I/O; los controladores les pasan los datos ya cargados.

pub mod booking;
pub mod settlement;

pub use settlement::{settle, CommissionSchedule, Settlement, SettlementMode};
