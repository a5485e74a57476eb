use crate::core::assembler::assemble;
use crate::core::extractor::extract;
use crate::models::{RawVenue, Recommendation};

/// Result of the recommendation pipeline's pure stages
#[derive(Debug)]
pub struct RecommendationResult {
    pub restaurants: Vec<Recommendation>,
    pub match_score: f64,
    pub total_candidates: usize,
}

/// Couples the response extractor and the assembler behind one call
///
/// Everything network-facing (locality resolution, venue fetch, the LLM
/// call itself) happens before this; the recommender only turns raw model
/// text plus fetched candidates into the final ranked result.
#[derive(Debug, Clone, Copy)]
pub struct Recommender {
    default_match_score: f64,
}

impl Recommender {
    pub fn new(default_match_score: f64) -> Self {
        Self { default_match_score }
    }

    /// Extract selections from the model output and join them to candidates
    ///
    /// Extraction failure and unmatched ids degrade to an empty restaurant
    /// list; this stage never fails a request.
    pub fn recommend(
        &self,
        llm_output: &str,
        candidates: &[RawVenue],
        limit: usize,
    ) -> RecommendationResult {
        let extraction = extract(llm_output, self.default_match_score);
        let restaurants = assemble(&extraction, candidates, limit);

        RecommendationResult {
            restaurants,
            match_score: extraction.match_score,
            total_candidates: candidates.len(),
        }
    }
}
