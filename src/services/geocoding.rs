use crate::config::GeocodingSettings;
use crate::models::AddressParts;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when resolving addresses and coordinates
#[derive(Debug, Error)]
pub enum GeocodingError {
    #[error("address must not be empty")]
    EmptyAddress,

    #[error("could not resolve: {0}")]
    NoMatch(String),

    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("geocoding provider returned error: {0}")]
    ApiError(String),

    #[error("invalid response format: {0}")]
    InvalidResponse(String),
}

impl GeocodingError {
    /// Whether the failure is attributable to the caller's input rather than
    /// the provider
    pub fn is_client_error(&self) -> bool {
        matches!(self, GeocodingError::EmptyAddress | GeocodingError::NoMatch(_))
    }
}

/// A forward-geocoded location
#[derive(Debug, Clone)]
pub struct GeocodedLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub formatted_address: String,
}

/// Nominatim record; lat/lon arrive as strings on the wire
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    display_name: String,
    #[serde(default)]
    address: Option<Value>,
}

/// Nominatim (OpenStreetMap) geocoding client
///
/// Handles forward and reverse lookups. Both are fatal on failure: the rest
/// of the pipeline cannot proceed without resolved coordinates.
pub struct GeocodingClient {
    base_url: String,
    client: Client,
}

impl GeocodingClient {
    pub fn new(settings: &GeocodingSettings) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent(settings.user_agent.clone())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Resolve a free-text address to coordinates
    ///
    /// Empty or whitespace input is rejected before any network call.
    pub async fn geocode(&self, address: &str) -> Result<GeocodedLocation, GeocodingError> {
        if address.trim().is_empty() {
            return Err(GeocodingError::EmptyAddress);
        }

        let url = format!(
            "{}/search?q={}&format=json&limit=1",
            self.base_url,
            urlencoding::encode(address.trim())
        );

        tracing::debug!("Geocoding address: {}", address);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(GeocodingError::ApiError(format!(
                "geocode request failed: {}",
                response.status()
            )));
        }

        let places: Vec<NominatimPlace> = response.json().await?;

        let place = places
            .into_iter()
            .next()
            .ok_or_else(|| GeocodingError::NoMatch(address.to_string()))?;

        Ok(GeocodedLocation {
            latitude: parse_coord(&place.lat)?,
            longitude: parse_coord(&place.lon)?,
            formatted_address: place.display_name,
        })
    }

    /// Resolve coordinates to decomposed address parts
    ///
    /// Missing address components default to empty strings rather than
    /// failing; the city field falls back to town, then village.
    pub async fn reverse_geocode(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<AddressParts, GeocodingError> {
        let url = format!(
            "{}/reverse?lat={}&lon={}&format=json",
            self.base_url, latitude, longitude
        );

        tracing::debug!("Reverse geocoding: {}, {}", latitude, longitude);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(GeocodingError::ApiError(format!(
                "reverse geocode request failed: {}",
                response.status()
            )));
        }

        let place: NominatimPlace = response
            .json()
            .await
            .map_err(|e| GeocodingError::InvalidResponse(e.to_string()))?;

        let components = place
            .address
            .ok_or_else(|| GeocodingError::NoMatch(format!("{}, {}", latitude, longitude)))?;

        Ok(address_parts(&components, place.display_name))
    }
}

fn parse_coord(raw: &str) -> Result<f64, GeocodingError> {
    raw.parse::<f64>()
        .map_err(|_| GeocodingError::InvalidResponse(format!("bad coordinate: {}", raw)))
}

fn address_parts(components: &Value, formatted_address: String) -> AddressParts {
    let field = |key: &str| -> String {
        components
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    let house_number = field("house_number");
    let road = field("road");
    let street = format!("{} {}", house_number, road).trim().to_string();

    let mut city = field("city");
    if city.is_empty() {
        city = field("town");
    }
    if city.is_empty() {
        city = field("village");
    }

    AddressParts {
        street,
        city,
        state: field("state"),
        country: field("country"),
        postal_code: field("postcode"),
        formatted_address,
    }
}
