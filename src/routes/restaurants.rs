use crate::core::{build_prompt, Recommender};
use crate::models::{
    ErrorResponse, RecommendationRecord, RecommendationRequest, RecommendationsResponse,
};
use crate::services::{
    GeocodingClient, GoFoodClient, LocalityResolver, OpenRouterClient, TimeseriesStore,
};
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub geocoding: Arc<GeocodingClient>,
    pub gofood: Arc<GoFoodClient>,
    pub locality: Arc<LocalityResolver>,
    pub openrouter: Arc<OpenRouterClient>,
    pub store: Arc<TimeseriesStore>,
    pub recommender: Recommender,
    pub max_limit: u16,
}

/// Configure restaurant routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/restaurants/recommendations", web::post().to(get_recommendations));
}

/// Restaurant recommendations endpoint
///
/// POST /v1/restaurants/recommendations
///
/// Request body:
/// ```json
/// {
///   "coordinates": {"latitude": -6.2088, "longitude": 106.8456},
///   "prompt": "something spicy and vegetarian",
///   "radius": 5.0,
///   "limit": 5,
///   "userId": "user123"
/// }
/// ```
///
/// Pipeline: resolve locality, fetch candidate venues, ask the model to
/// select, extract and assemble, persist the audit record. Soft failures
/// (no venues, unparseable model output) produce an empty-but-successful
/// response; locality resolution and LLM transport failures are fatal.
async fn get_recommendations(
    state: web::Data<AppState>,
    req: web::Json<RecommendationRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommendation request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let session_id = uuid::Uuid::new_v4();
    let limit = req.limit.min(state.max_limit) as usize;

    tracing::info!(
        "Recommendation request {} at ({}, {}), limit {}",
        session_id,
        req.coordinates.latitude,
        req.coordinates.longitude,
        limit
    );

    // Resolve the GoFood locality for the coordinates (fatal on failure)
    let locality_key = match state.locality.resolve(&req.coordinates).await {
        Ok(key) => key,
        Err(e) => {
            tracing::error!("Locality resolution failed for {}: {}", session_id, e);
            return HttpResponse::BadGateway().json(ErrorResponse {
                error: "Service area unresolved".to_string(),
                message: e.to_string(),
                status_code: 502,
            });
        }
    };

    // Fetch candidates; failures degrade to zero candidates
    let venues = state
        .gofood
        .fetch_venues(&locality_key, &req.coordinates, req.radius)
        .await;

    tracing::debug!("Found {} candidate venues for {}", venues.len(), session_id);

    // Single blocking LLM call; transport failure is fatal
    let messages = build_prompt(&req.prompt, &venues, limit);
    let llm_output = match state.openrouter.chat(&messages).await {
        Ok(output) => output,
        Err(e) => {
            tracing::error!("LLM call failed for {}: {}", session_id, e);
            return HttpResponse::BadGateway().json(ErrorResponse {
                error: "Recommendation model unavailable".to_string(),
                message: e.to_string(),
                status_code: 502,
            });
        }
    };

    let result = state.recommender.recommend(&llm_output, &venues, limit);

    tracing::info!(
        "Returning {} recommendations for {} (from {} candidates, score {:.2})",
        result.restaurants.len(),
        session_id,
        result.total_candidates,
        result.match_score
    );

    // Persist the audit record; fire-and-forget, never fails the request
    let record = RecommendationRecord {
        session_id,
        user_id: req.user_id.clone(),
        location: format!("{}/{}", locality_key.service_area, locality_key.locality),
        preference: req.prompt.clone(),
        recommendations: result.restaurants.iter().map(Into::into).collect(),
        match_score: result.match_score,
        created_at: chrono::Utc::now(),
    };

    if let Err(e) = state.store.record_recommendation(&record).await {
        tracing::warn!("Failed to persist recommendation record {}: {}", session_id, e);
    }

    HttpResponse::Ok().json(RecommendationsResponse {
        restaurants: result.restaurants,
        match_score: result.match_score,
    })
}
