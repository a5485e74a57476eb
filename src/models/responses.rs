use crate::models::domain::{AddressParts, Recommendation};
use serde::{Deserialize, Serialize};

/// Response for the recommendations endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub restaurants: Vec<Recommendation>,
    #[serde(rename = "matchScore")]
    pub match_score: f64,
}

/// Response for forward geocoding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoordinatesResponse {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "formattedAddress")]
    pub formatted_address: String,
}

/// Response for reverse geocoding
pub type AddressResponse = AddressParts;

/// Response for preference suggestions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
