//! Validación de reservas
//!
//! Comprobaciones previas a crear un alquiler: que el vehículo no tenga un
//! alquiler activo y que los días pedidos respeten los umbrales de su categoría.

use crate::models::{AutoRent, RentThreshold};
use crate::utils::errors::{AppError, AppResult};

/// Falla con `AlreadyRented` si existe un alquiler activo
pub fn ensure_not_rented(auto_id: &str, active: Option<&AutoRent>) -> AppResult<()> {
    match active {
        Some(_) => Err(AppError::AlreadyRented(auto_id.to_string())),
        None => Ok(()),
    }
}

/// Sin fila de umbral cualquier número positivo de días es válido
pub fn ensure_within_threshold(threshold: Option<&RentThreshold>, days: i32) -> AppResult<()> {
    match threshold {
        Some(threshold) if !threshold.admits(days) => Err(AppError::ThresholdViolation {
            min: threshold.min_threshold,
            max: threshold.max_threshold,
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn threshold(min: i32, max: i32) -> RentThreshold {
        RentThreshold {
            auto_type: "premium".to_string(),
            min_threshold: min,
            max_threshold: max,
        }
    }

    #[test]
    fn test_threshold_bounds_are_inclusive() {
        let limits = threshold(3, 14);
        assert!(ensure_within_threshold(Some(&limits), 3).is_ok());
        assert!(ensure_within_threshold(Some(&limits), 14).is_ok());
        assert!(matches!(
            ensure_within_threshold(Some(&limits), 2),
            Err(AppError::ThresholdViolation { min: 3, max: 14 })
        ));
        assert!(matches!(
            ensure_within_threshold(Some(&limits), 15),
            Err(AppError::ThresholdViolation { .. })
        ));
    }

    #[test]
    fn test_missing_threshold_accepts_any_days() {
        assert!(ensure_within_threshold(None, 1).is_ok());
        assert!(ensure_within_threshold(None, 365).is_ok());
    }

    #[test]
    fn test_active_rental_blocks_booking() {
        let active = AutoRent::starting_at("auto1", Utc::now(), 5).unwrap();
        assert!(matches!(
            ensure_not_rented("auto1", Some(&active)),
            Err(AppError::AlreadyRented(id)) if id == "auto1"
        ));
        assert!(ensure_not_rented("auto1", None).is_ok());
    }
}
