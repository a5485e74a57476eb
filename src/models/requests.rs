use crate::models::domain::Coordinates;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request for restaurant recommendations
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendationRequest {
    #[validate(nested)]
    pub coordinates: Coordinates,
    #[validate(length(min = 1))]
    pub prompt: String,
    #[serde(default = "default_radius")]
    pub radius: f64,
    #[serde(default = "default_limit")]
    pub limit: u16,
    #[serde(alias = "user_id", rename = "userId", default)]
    pub user_id: Option<String>,
}

fn default_radius() -> f64 {
    5.0
}

fn default_limit() -> u16 {
    5
}

/// Request to geocode a free-text address
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddressRequest {
    #[validate(length(min = 1))]
    pub address: String,
}

/// Request to reverse-geocode a coordinate pair
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CoordinatesRequest {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

/// Query parameters for preference suggestions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsQuery {
    #[serde(default = "default_suggestion_count")]
    pub count: usize,
}

fn default_suggestion_count() -> usize {
    5
}
