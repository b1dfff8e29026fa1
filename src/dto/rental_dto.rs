use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{Auto, AutoRent};

/// Duración máxima de una reserva, en días (la misma que el `range` de `BindAutoRequest`)
pub const MAX_RENT_DAYS: i32 = 3650;

// Request para reservar un vehículo
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct BindAutoRequest {
    #[validate(length(min = 1, max = 255))]
    pub auto_id: String,

    #[validate(range(min = 1, max = 3650, message = "days must be between 1 and 3650"))]
    pub days: i32,
}

// Response de vehículo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoResponse {
    pub id: String,
    #[serde(rename = "type")]
    pub auto_type: String,
    pub availability: bool,
}

// Reserva creada
#[derive(Debug, Serialize, Deserialize)]
pub struct BindingResponse {
    pub auto_id: String,
    pub start_date: chrono::DateTime<chrono::Utc>,
    pub end_date: chrono::DateTime<chrono::Utc>,
}

// Liquidación final al devolver el vehículo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutResponse {
    pub checkout: i64,
}

// Saldo actual de un alquiler en curso
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionResponse {
    pub commission: i64,
    pub insurance: i64,
}

impl From<Auto> for AutoResponse {
    fn from(auto: Auto) -> Self {
        Self {
            id: auto.id,
            auto_type: auto.auto_type,
            availability: auto.availability,
        }
    }
}

impl From<AutoRent> for BindingResponse {
    fn from(rent: AutoRent) -> Self {
        Self {
            auto_id: rent.auto_id,
            start_date: rent.start_date,
            end_date: rent.end_date,
        }
    }
}
