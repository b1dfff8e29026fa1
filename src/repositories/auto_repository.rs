use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::Auto;
use crate::utils::errors::AppResult;

/// Acceso de solo lectura a la flota
#[async_trait]
pub trait AutoRepository: Send + Sync {
    async fn find_available_by_type(&self, auto_type: &str) -> AppResult<Vec<Auto>>;
    async fn find_by_id(&self, auto_id: &str) -> AppResult<Option<Auto>>;
}

pub struct PgAutoRepository {
    pool: PgPool,
}

impl PgAutoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AutoRepository for PgAutoRepository {
    async fn find_available_by_type(&self, auto_type: &str) -> AppResult<Vec<Auto>> {
        let autos = sqlx::query_as::<_, Auto>(
            "SELECT id, type, availability FROM auto WHERE type = $1 AND availability = TRUE ORDER BY id"
        )
        .bind(auto_type)
        .fetch_all(&self.pool)
        .await?;

        Ok(autos)
    }

    async fn find_by_id(&self, auto_id: &str) -> AppResult<Option<Auto>> {
        let auto = sqlx::query_as::<_, Auto>("SELECT id, type, availability FROM auto WHERE id = $1")
            .bind(auto_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(auto)
    }
}
