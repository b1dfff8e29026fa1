//! Modelo de AutoRent
//!
//! Un registro por vehículo alquilado. `end_date` es la fecha de fin
//! comprometida en la reserva, no la fecha real de devolución.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Alquiler activo - mapea la tabla auto_rent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct AutoRent {
    pub auto_id: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl AutoRent {
    /// Alquiler que empieza en `now` y se compromete por `days` días.
    /// `None` si la fecha de fin queda fuera del rango representable.
    pub fn starting_at(auto_id: impl Into<String>, now: DateTime<Utc>, days: i32) -> Option<Self> {
        let end_date = now.checked_add_signed(Duration::days(i64::from(days)))?;
        Some(Self {
            auto_id: auto_id.into(),
            start_date: now,
            end_date,
        })
    }

    /// Ventana del alquiler en días de calendario (UTC)
    pub fn window(&self) -> RentalWindow {
        RentalWindow {
            start: self.start_date.date_naive(),
            committed_end: self.end_date.date_naive(),
        }
    }
}

/// Inicio y fin comprometido de un alquiler, sin hora del día
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RentalWindow {
    pub start: NaiveDate,
    pub committed_end: NaiveDate,
}

impl RentalWindow {
    pub fn new(start: NaiveDate, committed_end: NaiveDate) -> Self {
        Self { start, committed_end }
    }
}
