// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AddressParts, Coordinates, ExtractedSelection, LocalityKey, PersistedRecommendation,
    PlaceCandidate, RawVenue, Recommendation, RecommendationRecord, SuggestedItem,
};
pub use requests::{AddressRequest, CoordinatesRequest, RecommendationRequest, SuggestionsQuery};
pub use responses::{
    AddressResponse, CoordinatesResponse, ErrorResponse, HealthResponse, RecommendationsResponse,
    SuggestionsResponse,
};
