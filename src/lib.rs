//! Gourmet Guide - AI-powered restaurant recommendation service
//!
//! This library wires together geocoding, venue discovery, and an LLM
//! selection step behind an HTTP API. The pure recommendation pipeline
//! (prompt construction, response extraction, assembly) lives in `core`
//! and is usable without any network access.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{
    build_prompt, extract, haversine_distance, Extraction, RecommendationResult, Recommender,
};
pub use models::{
    Coordinates, RawVenue, Recommendation, RecommendationRequest, RecommendationsResponse,
};
