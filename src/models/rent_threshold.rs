//! Modelo de RentThreshold
//!
//! Límites de días reservables por categoría, consultados solo al reservar.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct RentThreshold {
    pub auto_type: String,
    pub min_threshold: i32,
    pub max_threshold: i32,
}

impl RentThreshold {
    /// Verificar si `days` cae dentro de `[min, max]`
    pub fn admits(&self, days: i32) -> bool {
        (self.min_threshold..=self.max_threshold).contains(&days)
    }
}
