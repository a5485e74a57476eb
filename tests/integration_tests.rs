// Integration tests for Gourmet Guide
//
// Exercises the full pure pipeline (extraction + assembly) the way the
// recommendation handler drives it, plus the wire shapes of requests and
// responses.

use gourmet_guide::core::Recommender;
use gourmet_guide::models::{RawVenue, RecommendationRequest, RecommendationsResponse};

fn create_test_venue(id: &str, name: &str, price_level: u8, distance_km: f64) -> RawVenue {
    RawVenue {
        id: id.to_string(),
        name: name.to_string(),
        latitude: -6.2088,
        longitude: 106.8456,
        cuisine_types: vec!["Indonesian".to_string(), "Spicy".to_string()],
        price_level,
        rating: 4.6,
        distance_km,
        open_now: Some(true),
        hours: None,
    }
}

#[test]
fn test_end_to_end_fenced_model_output() {
    let recommender = Recommender::new(0.7);
    let candidates = vec![
        create_test_venue("r1", "Warung Sari", 2, 0.8),
        create_test_venue("r2", "Spice Garden", 3, 1.5),
    ];

    let llm_output = "Based on your preferences I picked one place:\n\
        ```json\n\
        {\"selected_restaurants\": [{\"id\": \"r1\", \"explanation\": \"properly spicy\", \
        \"suggested_items\": [{\"name\": \"Ayam Geprek\", \"description\": \"crushed fried chicken\", \"price\": 25000}]}], \
        \"match_score\": 0.9}\n\
        ```\n\
        Enjoy!";

    let result = recommender.recommend(llm_output, &candidates, 5);

    assert_eq!(result.restaurants.len(), 1);
    assert_eq!(result.restaurants[0].id, "r1");
    assert_eq!(result.restaurants[0].name, "Warung Sari");
    assert_eq!(result.restaurants[0].ai_description, "properly spicy");
    assert_eq!(result.restaurants[0].popular_items[0].name, "Ayam Geprek");
    assert_eq!(result.match_score, 0.9);
    assert_eq!(result.total_candidates, 2);
}

#[test]
fn test_end_to_end_zero_candidates() {
    let recommender = Recommender::new(0.7);

    // Whatever the model claims, with no candidates nothing can be joined
    let llm_output = r#"{"selected_restaurants": [{"id": "r1"}], "match_score": 0.9}"#;
    let result = recommender.recommend(llm_output, &[], 5);

    assert!(result.restaurants.is_empty());
    assert_eq!(result.total_candidates, 0);
}

#[test]
fn test_end_to_end_unparseable_prose() {
    let recommender = Recommender::new(0.7);
    let candidates = vec![create_test_venue("r1", "Warung Sari", 2, 0.8)];

    let llm_output = "I'm sorry, I couldn't decide between so many great options!";
    let result = recommender.recommend(llm_output, &candidates, 5);

    assert!(result.restaurants.is_empty());
    assert_eq!(result.match_score, 0.0);
}

#[test]
fn test_end_to_end_hallucinated_ids_only() {
    let recommender = Recommender::new(0.7);
    let candidates = vec![create_test_venue("r1", "Warung Sari", 2, 0.8)];

    let llm_output = r#"{"selected_restaurants": [{"id": "made-up-place"}], "match_score": 0.95}"#;
    let result = recommender.recommend(llm_output, &candidates, 5);

    assert!(result.restaurants.is_empty());
    // The score is still the model's claim; the empty list speaks for itself
    assert_eq!(result.match_score, 0.95);
}

#[test]
fn test_limit_enforcement_over_large_selection() {
    let recommender = Recommender::new(0.7);
    let candidates: Vec<RawVenue> = (0..30)
        .map(|i| create_test_venue(&format!("r{}", i), &format!("Venue {}", i), 2, 1.0))
        .collect();

    let entries: Vec<String> = (0..30).map(|i| format!("{{\"id\": \"r{}\"}}", i)).collect();
    let llm_output = format!(
        "{{\"selected_restaurants\": [{}], \"match_score\": 0.8}}",
        entries.join(", ")
    );

    let result = recommender.recommend(&llm_output, &candidates, 10);

    assert!(result.restaurants.len() <= 10, "Should not exceed limit of 10");
}

#[test]
fn test_recommendation_request_defaults() {
    let raw = r#"{
        "coordinates": {"latitude": -6.2088, "longitude": 106.8456},
        "prompt": "something spicy"
    }"#;

    let request: RecommendationRequest = serde_json::from_str(raw).unwrap();

    assert_eq!(request.radius, 5.0);
    assert_eq!(request.limit, 5);
    assert!(request.user_id.is_none());
}

#[test]
fn test_recommendation_request_accepts_both_user_id_spellings() {
    let camel = r#"{"coordinates": {"latitude": 0.0, "longitude": 0.0}, "prompt": "x", "userId": "u1"}"#;
    let snake = r#"{"coordinates": {"latitude": 0.0, "longitude": 0.0}, "prompt": "x", "user_id": "u2"}"#;

    let a: RecommendationRequest = serde_json::from_str(camel).unwrap();
    let b: RecommendationRequest = serde_json::from_str(snake).unwrap();

    assert_eq!(a.user_id.as_deref(), Some("u1"));
    assert_eq!(b.user_id.as_deref(), Some("u2"));
}

#[test]
fn test_response_serializes_camel_case_wire_fields() {
    let recommender = Recommender::new(0.7);
    let candidates = vec![create_test_venue("r1", "Warung Sari", 3, 0.8)];
    let llm_output = r#"{"selected_restaurants": [{"id": "r1", "explanation": "good"}], "match_score": 0.9}"#;

    let result = recommender.recommend(llm_output, &candidates, 5);
    let response = RecommendationsResponse {
        restaurants: result.restaurants,
        match_score: result.match_score,
    };

    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["matchScore"], 0.9);
    let restaurant = &json["restaurants"][0];
    assert_eq!(restaurant["priceRange"], "$$$");
    assert_eq!(restaurant["gofoodUrl"], "https://gofood.co.id/en/restaurant/r1");
    assert_eq!(restaurant["aiDescription"], "good");
    assert_eq!(restaurant["cuisineTypes"][0], "Indonesian");
    assert_eq!(restaurant["openNow"], true);
    assert!(restaurant.get("price_range").is_none());
}
