//! Rutas HTTP
//!
//! Ensambla el router completo: endpoints de alquiler bajo `/api/v1/auto`,
//! health check, fallback 404 y las capas de CORS, trazas y timeout.

pub mod rental_routes;

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use crate::state::AppState;

pub fn create_app_router(state: AppState) -> Router {
    let cors = if state.config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(state.config.cors_origins.clone())
    };
    let timeout = state.config.request_timeout;

    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health))
        .nest("/api/v1/auto", rental_routes::create_rental_router())
        .fallback(page_not_found)
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn welcome() -> Json<serde_json::Value> {
    Json(json!("welcome home"))
}

/// Endpoint de salud simple
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn page_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "code": "PAGE_NOT_FOUND", "message": "Page not found" })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnvironmentConfig;
    use crate::models::{AutoRent, CommissionKind, CommissionRule};
    use crate::repositories::memory::MemoryStore;
    use axum::body::Body;
    use axum::http::{header, Request};
    use chrono::{Duration, Utc};
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(store: &Arc<MemoryStore>) -> Router {
        let config = EnvironmentConfig::from_lookup(|_| None).unwrap();
        let state = AppState::with_repositories(config, store.clone(), store.clone(), store.clone());
        create_app_router(state)
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, value)
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    }

    fn rented_store() -> Arc<MemoryStore> {
        let store = MemoryStore::new();
        store.add_auto("auto1", "standard", false);
        store.set_commissions(
            "standard",
            vec![
                CommissionRule::new(CommissionKind::Daily, 200),
                CommissionRule::new(CommissionKind::Insurance, 50),
            ],
        );
        store.add_rent(AutoRent::starting_at(
            "auto1",
            Utc::now() - Duration::days(2),
            7,
        )
        .unwrap());
        store
    }

    #[tokio::test]
    async fn test_health_and_fallback() {
        let store = MemoryStore::new();

        let (status, body) = send(app(&store), get_request("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");

        let (status, body) = send(app(&store), get_request("/api/v1/nowhere")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "PAGE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_list_available_route() {
        let store = MemoryStore::new();
        store.add_auto("auto1", "standard", true);
        store.add_auto("auto2", "standard", false);

        let (status, body) = send(app(&store), get_request("/api/v1/auto/type/standard")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().map(Vec::len), Some(1));
        assert_eq!(body[0]["id"], "auto1");
        assert_eq!(body[0]["type"], "standard");

        let (status, body) = send(app(&store), get_request("/api/v1/auto/type/premium")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_bind_route_status_codes() {
        let store = MemoryStore::new();
        store.add_auto("auto1", "premium", true);
        store.add_auto("auto2", "premium", true);
        store.set_threshold("premium", 2, 5);

        let (status, body) = send(
            app(&store),
            post_json("/api/v1/auto/bind", json!({ "auto_id": "auto1", "days": 3 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["auto_id"], "auto1");

        let (status, body) = send(
            app(&store),
            post_json("/api/v1/auto/bind", json!({ "auto_id": "auto1", "days": 3 })),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["code"], "ALREADY_RENTED");

        let (status, body) = send(
            app(&store),
            post_json("/api/v1/auto/bind", json!({ "auto_id": "auto2", "days": 9 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "THRESHOLD_VIOLATION");

        let (status, body) = send(
            app(&store),
            post_json("/api/v1/auto/bind", json!({ "auto_id": "auto2", "days": 0 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");

        let (status, _) = send(
            app(&store),
            post_json("/api/v1/auto/bind", json!({ "auto_id": "ghost", "days": 3 })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_commission_route() {
        let store = rented_store();

        let (status, body) = send(app(&store), get_request("/api/v1/auto/commission/auto1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["commission"], 2 * 200);
        assert_eq!(body["insurance"], 50);
    }

    #[tokio::test]
    async fn test_release_route() {
        let store = rented_store();

        let (status, body) = send(app(&store), get_request("/api/v1/auto/release/auto1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["checkout"], 3 * 200);
        assert!(store.auto("auto1").unwrap().availability);

        let (status, body) = send(app(&store), get_request("/api/v1/auto/release/auto1")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }
}
