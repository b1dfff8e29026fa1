use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{Commission, CommissionRule};
use crate::utils::errors::AppResult;

/// Reglas de comisión por categoría; gestionadas fuera del servicio
#[async_trait]
pub trait CommissionRepository: Send + Sync {
    async fn find_by_type(&self, auto_type: &str) -> AppResult<Vec<CommissionRule>>;
}

pub struct PgCommissionRepository {
    pool: PgPool,
}

impl PgCommissionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommissionRepository for PgCommissionRepository {
    async fn find_by_type(&self, auto_type: &str) -> AppResult<Vec<CommissionRule>> {
        let rows = sqlx::query_as::<_, Commission>(
            "SELECT auto_type, type, value, min_threshold FROM commission WHERE auto_type = $1"
        )
        .bind(auto_type)
        .fetch_all(&self.pool)
        .await?;

        let rules = rows
            .iter()
            .filter_map(|row| match row.to_rule() {
                Ok(rule) => Some(rule),
                Err(e) => {
                    tracing::warn!("Skipping commission for auto type '{}': {}", row.auto_type, e);
                    None
                }
            })
            .collect();

        Ok(rules)
    }
}
