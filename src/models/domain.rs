use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

/// Geographic coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct Coordinates {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

/// Provider-specific locality identifier used to query the GoFood
/// nearby-outlet listing (service area + sub-locality, e.g. "jakarta" +
/// "kelapa-gading").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalityKey {
    pub service_area: String,
    pub locality: String,
}

/// A candidate location returned by the GoFood place search
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceCandidate {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "serviceArea")]
    pub service_area: String,
    pub locality: String,
}

/// Normalized venue record from the GoFood outlet listing
///
/// Produced fresh per fetch, never persisted or cached across requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawVenue {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "cuisineTypes", default)]
    pub cuisine_types: Vec<String>,
    #[serde(rename = "priceLevel", default)]
    pub price_level: u8,
    #[serde(default)]
    pub rating: f64,
    #[serde(rename = "distanceKm", default)]
    pub distance_km: f64,
    #[serde(rename = "openNow", default)]
    pub open_now: Option<bool>,
    #[serde(default)]
    pub hours: Option<HashMap<String, String>>,
}

/// One venue selection recovered from the LLM response text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedSelection {
    #[serde(rename = "venueId")]
    pub venue_id: String,
    pub explanation: String,
    #[serde(rename = "suggestedItems", default)]
    pub suggested_items: Vec<SuggestedItem>,
    #[serde(rename = "matchScore", default)]
    pub match_score: Option<f64>,
}

/// A menu item the model suggested for a selected venue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestedItem {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
}

/// Decomposed reverse-geocoding result
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddressParts {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    #[serde(rename = "postalCode")]
    pub postal_code: String,
    #[serde(rename = "formattedAddress")]
    pub formatted_address: String,
}

/// Final user-facing recommendation: join of a RawVenue and an
/// ExtractedSelection. Constructed once per request, never updated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub name: String,
    pub rating: f64,
    #[serde(rename = "priceRange")]
    pub price_range: String,
    #[serde(rename = "cuisineTypes")]
    pub cuisine_types: Vec<String>,
    pub coordinates: Coordinates,
    pub distance: f64,
    #[serde(rename = "gofoodUrl")]
    pub gofood_url: String,
    #[serde(rename = "aiDescription")]
    pub ai_description: String,
    #[serde(rename = "popularItems")]
    pub popular_items: Vec<SuggestedItem>,
    #[serde(rename = "openNow")]
    pub open_now: Option<bool>,
    pub hours: Option<HashMap<String, String>>,
}

/// Simplified projection of a recommendation persisted in the audit log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedRecommendation {
    pub id: String,
    pub name: String,
    pub rating: f64,
    #[serde(rename = "cuisineTypes")]
    pub cuisine_types: Vec<String>,
}

impl From<&Recommendation> for PersistedRecommendation {
    fn from(value: &Recommendation) -> Self {
        Self {
            id: value.id.clone(),
            name: value.name.clone(),
            rating: value.rating,
            cuisine_types: value.cuisine_types.clone(),
        }
    }
}

/// One append-only audit record per recommendation request
#[derive(Debug, Clone)]
pub struct RecommendationRecord {
    pub session_id: uuid::Uuid,
    pub user_id: Option<String>,
    pub location: String,
    pub preference: String,
    pub recommendations: Vec<PersistedRecommendation>,
    pub match_score: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
