use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::{AutoRent, RentThreshold};
use crate::utils::errors::{not_found_error, AppError, AppResult};

/// Alquileres activos y umbrales de reserva.
///
/// `bind` y `release` escriben la fila de alquiler y la disponibilidad del
/// vehículo como una sola unidad.
#[async_trait]
pub trait RentalRepository: Send + Sync {
    async fn find_by_auto(&self, auto_id: &str) -> AppResult<Option<AutoRent>>;
    async fn find_threshold_by_type(&self, auto_type: &str) -> AppResult<Option<RentThreshold>>;
    /// Crea el alquiler y marca el vehículo como no disponible
    async fn bind(&self, rent: &AutoRent) -> AppResult<()>;
    /// Marca el vehículo como disponible y borra su alquiler
    async fn release(&self, auto_id: &str) -> AppResult<()>;
}

pub struct PgRentalRepository {
    pool: PgPool,
}

impl PgRentalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Bloquear la fila del vehículo hasta el fin de la transacción
async fn lock_auto(tx: &mut Transaction<'_, Postgres>, auto_id: &str) -> AppResult<()> {
    let locked: Option<(String,)> = sqlx::query_as("SELECT id FROM auto WHERE id = $1 FOR UPDATE")
        .bind(auto_id)
        .fetch_optional(&mut **tx)
        .await?;

    match locked {
        Some(_) => Ok(()),
        None => Err(not_found_error("Auto", auto_id)),
    }
}

#[async_trait]
impl RentalRepository for PgRentalRepository {
    async fn find_by_auto(&self, auto_id: &str) -> AppResult<Option<AutoRent>> {
        let rent = sqlx::query_as::<_, AutoRent>(
            "SELECT auto_id, start_date, end_date FROM auto_rent WHERE auto_id = $1"
        )
        .bind(auto_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(rent)
    }

    async fn find_threshold_by_type(&self, auto_type: &str) -> AppResult<Option<RentThreshold>> {
        let threshold = sqlx::query_as::<_, RentThreshold>(
            "SELECT auto_type, min_threshold, max_threshold FROM rent_threshold WHERE auto_type = $1 LIMIT 1"
        )
        .bind(auto_type)
        .fetch_optional(&self.pool)
        .await?;

        Ok(threshold)
    }

    async fn bind(&self, rent: &AutoRent) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;
        lock_auto(&mut tx, &rent.auto_id).await?;

        // Repetir la comprobación bajo el bloqueo: otra reserva pudo ganar la carrera
        let (rented,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM auto_rent WHERE auto_id = $1)")
                .bind(&rent.auto_id)
                .fetch_one(&mut *tx)
                .await?;
        if rented {
            return Err(AppError::AlreadyRented(rent.auto_id.clone()));
        }

        sqlx::query("INSERT INTO auto_rent (auto_id, start_date, end_date) VALUES ($1, $2, $3)")
            .bind(&rent.auto_id)
            .bind(rent.start_date)
            .bind(rent.end_date)
            .execute(&mut *tx)
            .await?;

        sqlx::query("UPDATE auto SET availability = FALSE WHERE id = $1")
            .bind(&rent.auto_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    async fn release(&self, auto_id: &str) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;
        lock_auto(&mut tx, auto_id).await?;

        sqlx::query("UPDATE auto SET availability = TRUE WHERE id = $1")
            .bind(auto_id)
            .execute(&mut *tx)
            .await?;

        let deleted = sqlx::query("DELETE FROM auto_rent WHERE auto_id = $1")
            .bind(auto_id)
            .execute(&mut *tx)
            .await?;
        if deleted.rows_affected() == 0 {
            // La transacción se descarta al salir
            return Err(not_found_error("Rent for auto", auto_id));
        }

        tx.commit().await?;
        Ok(())
    }
}
