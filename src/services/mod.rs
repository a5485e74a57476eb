// Service exports
pub mod geocoding;
pub mod gofood;
pub mod locality;
pub mod openrouter;
pub mod timeseries;

pub use geocoding::{GeocodedLocation, GeocodingClient, GeocodingError};
pub use gofood::{GoFoodClient, GoFoodError};
pub use locality::{LocalityError, LocalityResolver};
pub use openrouter::{OpenRouterClient, OpenRouterError};
pub use timeseries::{TimeseriesError, TimeseriesStore};
