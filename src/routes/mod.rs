// Route exports
pub mod location;
pub mod preferences;
pub mod restaurants;

use crate::models::HealthResponse;
use actix_web::{web, HttpResponse, Responder};
use restaurants::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/v1")
            .route("/health", web::get().to(health_check))
            .configure(location::configure)
            .configure(preferences::configure)
            .configure(restaurants::configure),
    );
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let db_healthy = state.store.health_check().await.unwrap_or(false);

    let status = if db_healthy { "healthy" } else { "degraded" };
    let database = if db_healthy { "connected" } else { "unreachable" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database.to_string(),
        timestamp: chrono::Utc::now(),
    })
}
