use crate::core::distance::haversine_distance;
use crate::models::{AddressParts, Coordinates, LocalityKey, PlaceCandidate};
use crate::services::geocoding::GeocodingClient;
use crate::services::gofood::GoFoodClient;
use std::sync::Arc;
use thiserror::Error;

/// Locality resolution failed even after all fallbacks
///
/// Fatal to the recommendation request; callers must not substitute an
/// arbitrary fixed region.
#[derive(Debug, Error)]
pub enum LocalityError {
    #[error("no serviceable area found for {latitude}, {longitude}")]
    Unresolved { latitude: f64, longitude: f64 },
}

/// Resolves a coordinate pair to the GoFood locality key used by the
/// nearby-outlet listing
///
/// Policy: reverse-geocode the coordinates to a human-readable area, use it
/// as a place-search term, and take the candidate closest to the input by
/// great-circle distance. When place search yields nothing, fall back to the
/// reverse-geocoded administrative fields. When even reverse geocoding
/// fails, the request cannot proceed.
pub struct LocalityResolver {
    geocoding: Arc<GeocodingClient>,
    gofood: Arc<GoFoodClient>,
}

impl LocalityResolver {
    pub fn new(geocoding: Arc<GeocodingClient>, gofood: Arc<GoFoodClient>) -> Self {
        Self { geocoding, gofood }
    }

    pub async fn resolve(&self, coordinates: &Coordinates) -> Result<LocalityKey, LocalityError> {
        let unresolved = LocalityError::Unresolved {
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
        };

        let address = match self
            .geocoding
            .reverse_geocode(coordinates.latitude, coordinates.longitude)
            .await
        {
            Ok(address) => address,
            Err(e) => {
                tracing::error!("Reverse geocoding failed during locality resolution: {}", e);
                return Err(unresolved);
            }
        };

        let query = search_term(&address);
        if query.is_empty() {
            return Err(unresolved);
        }

        match self.gofood.search_places(&query).await {
            Ok(places) if !places.is_empty() => {
                let nearest = nearest_place(coordinates, places);
                tracing::debug!(
                    "Resolved locality via place search: {}/{} ({})",
                    nearest.service_area,
                    nearest.locality,
                    nearest.name
                );
                Ok(LocalityKey {
                    service_area: nearest.service_area,
                    locality: nearest.locality,
                })
            }
            Ok(_) => {
                tracing::warn!("Place search for '{}' returned no candidates", query);
                key_from_address(&address).ok_or(unresolved)
            }
            Err(e) => {
                tracing::warn!("Place search for '{}' failed: {}", query, e);
                key_from_address(&address).ok_or(unresolved)
            }
        }
    }
}

fn search_term(address: &AddressParts) -> String {
    if !address.city.is_empty() {
        return address.city.clone();
    }
    if !address.state.is_empty() {
        return address.state.clone();
    }
    address.formatted_address.clone()
}

fn nearest_place(origin: &Coordinates, places: Vec<PlaceCandidate>) -> PlaceCandidate {
    places
        .into_iter()
        .min_by(|a, b| {
            let da = haversine_distance(origin.latitude, origin.longitude, a.latitude, a.longitude);
            let db = haversine_distance(origin.latitude, origin.longitude, b.latitude, b.longitude);
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
        .expect("nearest_place called with empty candidate list")
}

/// Derive a key from the administrative fields; both halves must be
/// non-empty or resolution fails outright
fn key_from_address(address: &AddressParts) -> Option<LocalityKey> {
    let service_area = slugify(if address.city.is_empty() {
        &address.state
    } else {
        &address.city
    });
    let locality = slugify(if address.state.is_empty() {
        &address.city
    } else {
        &address.state
    });

    if service_area.is_empty() || locality.is_empty() {
        return None;
    }

    Some(LocalityKey { service_area, locality })
}

fn slugify(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .filter(|c| c.is_alphanumeric() || *c == '-')
        .collect()
}
