use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

use crate::storage::StorageHandle;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    backend: &'static str,
    storage: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Round trip to the configured storage backend
#[get("/ready")]
pub async fn readiness(storage: web::Data<StorageHandle>) -> impl Responder {
    let reachable = storage.ping().await;
    let status = if reachable { "ok" } else { "unhealthy" };

    let body = ReadinessResponse {
        status,
        backend: storage.backend_name(),
        storage: status,
    };

    if reachable {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
