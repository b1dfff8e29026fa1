//! Modelo de Auto
//!
//! Mapea la tabla `auto`. La disponibilidad se mantiene junto con la fila
//! de alquiler activa dentro de la misma transacción.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Vehículo de la flota
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Auto {
    pub id: String,
    /// Categoría del vehículo; indexa comisiones y umbrales
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub auto_type: String,
    pub availability: bool,
}

impl Auto {
    pub fn new(id: impl Into<String>, auto_type: impl Into<String>, availability: bool) -> Self {
        Self {
            id: id.into(),
            auto_type: auto_type.into(),
            availability,
        }
    }
}
