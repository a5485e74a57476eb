// Core algorithm exports
pub mod assembler;
pub mod distance;
pub mod extractor;
pub mod prompt;
pub mod recommender;

pub use assembler::{assemble, price_range_symbol};
pub use distance::haversine_distance;
pub use extractor::{extract, Extraction};
pub use prompt::{build_prompt, ChatMessage};
pub use recommender::{RecommendationResult, Recommender};
