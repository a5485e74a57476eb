use crate::models::{AddressRequest, CoordinatesRequest, CoordinatesResponse, ErrorResponse};
use crate::routes::restaurants::AppState;
use crate::services::GeocodingError;
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// Configure location routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/location/geocode", web::post().to(geocode_address))
        .route("/location/reverse-geocode", web::post().to(reverse_geocode));
}

fn geocoding_error_response(e: GeocodingError) -> HttpResponse {
    if e.is_client_error() {
        HttpResponse::BadRequest().json(ErrorResponse {
            error: "Invalid address supplied".to_string(),
            message: e.to_string(),
            status_code: 400,
        })
    } else {
        HttpResponse::BadGateway().json(ErrorResponse {
            error: "Geocoding service unavailable".to_string(),
            message: e.to_string(),
            status_code: 502,
        })
    }
}

/// Convert a text address to geographic coordinates
///
/// POST /v1/location/geocode
async fn geocode_address(
    state: web::Data<AppState>,
    req: web::Json<AddressRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match state.geocoding.geocode(&req.address).await {
        Ok(location) => HttpResponse::Ok().json(CoordinatesResponse {
            latitude: location.latitude,
            longitude: location.longitude,
            formatted_address: location.formatted_address,
        }),
        Err(e) => {
            tracing::info!("Geocoding failed for '{}': {}", req.address, e);
            geocoding_error_response(e)
        }
    }
}

/// Convert geographic coordinates to a decomposed address
///
/// POST /v1/location/reverse-geocode
async fn reverse_geocode(
    state: web::Data<AppState>,
    req: web::Json<CoordinatesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match state.geocoding.reverse_geocode(req.latitude, req.longitude).await {
        Ok(address) => HttpResponse::Ok().json(address),
        Err(e) => {
            tracing::info!(
                "Reverse geocoding failed for ({}, {}): {}",
                req.latitude,
                req.longitude,
                e
            );
            geocoding_error_response(e)
        }
    }
}
