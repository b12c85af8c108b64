use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct ServiceMessage {
    message: &'static str,
}

#[derive(Serialize)]
pub struct HealthStatus {
    status: &'static str,
    message: &'static str,
}

/// Liveness banner served at `/`
pub async fn root_handler() -> Json<ServiceMessage> {
    Json(ServiceMessage {
        message: "Dream Story API is running",
    })
}

/// Health check handler
pub async fn health_handler() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        message: "API is working",
    })
}
