use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::info;
use validator::Validate;

use crate::dto::api_response::ApiResponse;
use crate::dto::rental_dto::{
    AutoResponse, BindAutoRequest, BindingResponse, CheckoutResponse, CommissionResponse,
};
use crate::models::{AutoRent, CommissionRule};
use crate::repositories::{AutoRepository, CommissionRepository, RentalRepository};
use crate::services::booking::{ensure_not_rented, ensure_within_threshold};
use crate::services::settlement::{self, SettlementMode};
use crate::state::AppState;
use crate::utils::errors::{field_error, not_found_error, AppError, AppResult};

pub struct RentalController {
    autos: Arc<dyn AutoRepository>,
    rentals: Arc<dyn RentalRepository>,
    commissions: Arc<dyn CommissionRepository>,
}

impl RentalController {
    pub fn new(
        autos: Arc<dyn AutoRepository>,
        rentals: Arc<dyn RentalRepository>,
        commissions: Arc<dyn CommissionRepository>,
    ) -> Self {
        Self {
            autos,
            rentals,
            commissions,
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(
            state.autos.clone(),
            state.rentals.clone(),
            state.commissions.clone(),
        )
    }

    pub async fn list_available(&self, auto_type: &str) -> AppResult<Vec<AutoResponse>> {
        let autos = self.autos.find_available_by_type(auto_type).await?;
        if autos.is_empty() {
            return Err(AppError::NotFound(format!(
                "No available autos of type '{}'",
                auto_type
            )));
        }

        Ok(autos.into_iter().map(AutoResponse::from).collect())
    }

    pub async fn bind(
        &self,
        request: BindAutoRequest,
        now: DateTime<Utc>,
    ) -> AppResult<ApiResponse<BindingResponse>> {
        request.validate()?;

        let auto = self
            .autos
            .find_by_id(&request.auto_id)
            .await?
            .ok_or_else(|| not_found_error("Auto", &request.auto_id))?;

        let active = self.rentals.find_by_auto(&auto.id).await?;
        ensure_not_rented(&auto.id, active.as_ref())?;

        let threshold = self.rentals.find_threshold_by_type(&auto.auto_type).await?;
        ensure_within_threshold(threshold.as_ref(), request.days)?;

        let rent = AutoRent::starting_at(auto.id, now, request.days)
            .ok_or_else(|| field_error("days", "range"))?;
        self.rentals.bind(&rent).await?;

        info!(
            "🚗 Auto {} reservado por {} días (hasta {})",
            rent.auto_id,
            request.days,
            rent.end_date.to_rfc3339()
        );

        Ok(ApiResponse::success_with_message(
            BindingResponse::from(rent),
            "Auto reservado exitosamente".to_string(),
        ))
    }

    /// Liquidación final: el importe se descarta si fallan las escrituras
    pub async fn release(&self, auto_id: &str, now: DateTime<Utc>) -> AppResult<CheckoutResponse> {
        let (rent, rules) = self.load_rental(auto_id).await?;

        let settlement = settlement::settle(
            rent.window(),
            &rules,
            now.date_naive(),
            SettlementMode::Checkout,
        );

        self.rentals.release(auto_id).await?;

        info!("✅ Auto {} devuelto, total {}", auto_id, settlement.total);
        Ok(CheckoutResponse {
            checkout: settlement.total,
        })
    }

    /// Saldo actual; solo cuenta días completos, por eso la referencia es ayer
    pub async fn current_commission(
        &self,
        auto_id: &str,
        now: DateTime<Utc>,
    ) -> AppResult<CommissionResponse> {
        let (rent, rules) = self.load_rental(auto_id).await?;

        let reference = (now - Duration::days(1)).date_naive();
        let settlement =
            settlement::settle(rent.window(), &rules, reference, SettlementMode::Estimate);

        Ok(CommissionResponse {
            commission: settlement.total,
            insurance: settlement.insurance,
        })
    }

    async fn load_rental(&self, auto_id: &str) -> AppResult<(AutoRent, Vec<CommissionRule>)> {
        let rent = self
            .rentals
            .find_by_auto(auto_id)
            .await?
            .ok_or_else(|| not_found_error("Rent for auto", auto_id))?;

        let auto = self
            .autos
            .find_by_id(auto_id)
            .await?
            .ok_or_else(|| not_found_error("Auto", auto_id))?;

        let rules = self.commissions.find_by_type(&auto.auto_type).await?;
        Ok((rent, rules))
    }
}
