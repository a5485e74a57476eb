use crate::config::GoFoodSettings;
use crate::core::distance::haversine_distance;
use crate::models::{Coordinates, LocalityKey, PlaceCandidate, RawVenue};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the GoFood API
#[derive(Debug, Error)]
pub enum GoFoodError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("invalid response format: {0}")]
    InvalidResponse(String),
}

/// Raw outlet record from the GoFood listing endpoint
///
/// Deserialized per-record so a single malformed entry never poisons the
/// whole batch.
#[derive(Debug, Deserialize)]
struct OutletRecord {
    id: String,
    name: String,
    location: OutletLocation,
    #[serde(rename = "cuisineTypes", default)]
    cuisine_types: Vec<String>,
    #[serde(rename = "priceLevel", default)]
    price_level: u8,
    #[serde(default)]
    rating: f64,
    #[serde(rename = "openNow", default)]
    open_now: Option<bool>,
    #[serde(default)]
    hours: Option<HashMap<String, String>>,
}

#[derive(Debug, Deserialize)]
struct OutletLocation {
    latitude: f64,
    longitude: f64,
}

/// GoFood marketplace client
///
/// Handles place search (for locality resolution) and the nearby-outlet
/// listing keyed by service area + locality.
pub struct GoFoodClient {
    base_url: String,
    page_size: usize,
    client: Client,
}

impl GoFoodClient {
    pub fn new(settings: &GoFoodSettings) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            page_size: settings.page_size,
            client,
        }
    }

    /// Search serviceable places matching a free-text query
    ///
    /// Used by locality resolution; fallible, the resolver applies its own
    /// fallback policy.
    pub async fn search_places(&self, query: &str) -> Result<Vec<PlaceCandidate>, GoFoodError> {
        let url = format!(
            "{}/v1/places/search?query={}",
            self.base_url,
            urlencoding::encode(query)
        );

        tracing::debug!("Searching GoFood places: {}", query);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(GoFoodError::ApiError(format!(
                "place search failed: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let places = json
            .get("places")
            .and_then(Value::as_array)
            .ok_or_else(|| GoFoodError::InvalidResponse("missing places array".into()))?;

        Ok(places
            .iter()
            .filter_map(|place| serde_json::from_value(place.clone()).ok())
            .collect())
    }

    /// Fetch candidate venues for a resolved locality
    ///
    /// Fetch failures are non-fatal: a provider error or non-success status
    /// logs a warning and yields zero candidates, and the recommendation
    /// proceeds with an empty list. Malformed records are skipped.
    pub async fn fetch_venues(
        &self,
        key: &LocalityKey,
        origin: &Coordinates,
        radius_km: f64,
    ) -> Vec<RawVenue> {
        match self.try_fetch_venues(key, origin, radius_km).await {
            Ok(venues) => venues,
            Err(e) => {
                tracing::warn!(
                    "Venue fetch failed for {}/{}, proceeding with zero candidates: {}",
                    key.service_area,
                    key.locality,
                    e
                );
                Vec::new()
            }
        }
    }

    async fn try_fetch_venues(
        &self,
        key: &LocalityKey,
        origin: &Coordinates,
        radius_km: f64,
    ) -> Result<Vec<RawVenue>, GoFoodError> {
        let url = format!(
            "{}/v1/outlets?service_area={}&locality={}&page_size={}",
            self.base_url,
            urlencoding::encode(&key.service_area),
            urlencoding::encode(&key.locality),
            self.page_size
        );

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(GoFoodError::ApiError(format!(
                "outlet listing failed: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let outlets = json
            .get("outlets")
            .and_then(Value::as_array)
            .ok_or_else(|| GoFoodError::InvalidResponse("missing outlets array".into()))?;

        let total = outlets.len();

        let venues: Vec<RawVenue> = outlets
            .iter()
            .filter_map(|outlet| serde_json::from_value::<OutletRecord>(outlet.clone()).ok())
            .map(|record| normalize_outlet(record, origin))
            .filter(|venue| venue.distance_km <= radius_km)
            .collect();

        tracing::debug!(
            "Fetched {} venues within {:.1} km ({} listed) for {}/{}",
            venues.len(),
            radius_km,
            total,
            key.service_area,
            key.locality
        );

        Ok(venues)
    }
}

fn normalize_outlet(record: OutletRecord, origin: &Coordinates) -> RawVenue {
    let distance_km = haversine_distance(
        origin.latitude,
        origin.longitude,
        record.location.latitude,
        record.location.longitude,
    );

    RawVenue {
        id: record.id,
        name: record.name,
        latitude: record.location.latitude,
        longitude: record.location.longitude,
        cuisine_types: record.cuisine_types,
        price_level: record.price_level,
        rating: record.rating,
        distance_km,
        open_now: record.open_now,
        hours: record.hours,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_outlet_computes_distance() {
        let record: OutletRecord = serde_json::from_value(json!({
            "id": "r1",
            "name": "Spice Garden",
            "location": { "latitude": -6.2088, "longitude": 106.8456 },
            "cuisineTypes": ["Indian"],
            "priceLevel": 2,
            "rating": 4.7
        }))
        .unwrap();

        let origin = Coordinates { latitude: -6.2088, longitude: 106.8456 };
        let venue = normalize_outlet(record, &origin);

        assert_eq!(venue.id, "r1");
        assert_eq!(venue.distance_km, 0.0);
        assert_eq!(venue.price_level, 2);
    }

    #[test]
    fn test_outlet_record_missing_location_is_rejected() {
        let malformed = json!({ "id": "r2", "name": "No Location" });
        assert!(serde_json::from_value::<OutletRecord>(malformed).is_err());
    }

    #[test]
    fn test_outlet_record_optional_fields_default() {
        let minimal: OutletRecord = serde_json::from_value(json!({
            "id": "r3",
            "name": "Bare Minimum",
            "location": { "latitude": 0.0, "longitude": 0.0 }
        }))
        .unwrap();

        assert!(minimal.cuisine_types.is_empty());
        assert_eq!(minimal.price_level, 0);
        assert_eq!(minimal.rating, 0.0);
        assert!(minimal.open_now.is_none());
    }
}
