use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;

use crate::controllers::rental_controller::RentalController;
use crate::dto::api_response::ApiResponse;
use crate::dto::rental_dto::{
    AutoResponse, BindAutoRequest, BindingResponse, CheckoutResponse, CommissionResponse,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_rental_router() -> Router<AppState> {
    Router::new()
        .route("/type/:type", get(list_available))
        .route("/bind", post(bind_auto))
        .route("/release/:auto_id", get(release_auto))
        .route("/commission/:auto_id", get(current_commission))
}

async fn list_available(
    State(state): State<AppState>,
    Path(auto_type): Path<String>,
) -> Result<Json<Vec<AutoResponse>>, AppError> {
    let controller = RentalController::from_state(&state);
    let response = controller.list_available(&auto_type).await?;
    Ok(Json(response))
}

async fn bind_auto(
    State(state): State<AppState>,
    Json(request): Json<BindAutoRequest>,
) -> Result<Json<ApiResponse<BindingResponse>>, AppError> {
    let controller = RentalController::from_state(&state);
    let response = controller.bind(request, Utc::now()).await?;
    Ok(Json(response))
}

async fn release_auto(
    State(state): State<AppState>,
    Path(auto_id): Path<String>,
) -> Result<Json<CheckoutResponse>, AppError> {
    let controller = RentalController::from_state(&state);
    let response = controller.release(&auto_id, Utc::now()).await?;
    Ok(Json(response))
}

async fn current_commission(
    State(state): State<AppState>,
    Path(auto_id): Path<String>,
) -> Result<Json<CommissionResponse>, AppError> {
    let controller = RentalController::from_state(&state);
    let response = controller.current_commission(&auto_id, Utc::now()).await?;
    Ok(Json(response))
}
