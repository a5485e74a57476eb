use crate::models::RawVenue;
use serde::{Deserialize, Serialize};

/// One chat message in the OpenRouter request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: "system".to_string(), content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user".to_string(), content: content.into() }
    }
}

const SYSTEM_PROMPT: &str = "You are a helpful food recommendation assistant. \
Given a list of nearby restaurants, select the ones that best match the \
user's preferences. Consider factors like cuisine type, price range, rating \
and specific dietary needs. Only pick restaurants from the provided list.";

/// Build the system + user message pair for a recommendation request
///
/// The user message embeds the candidate roster and the JSON response
/// contract the extractor expects (`selected_restaurants` array plus a
/// top-level `match_score` in [0,1]). The model is not guaranteed to honor
/// the contract; the extractor's fallback ladder deals with that.
pub fn build_prompt(preference: &str, candidates: &[RawVenue], limit: usize) -> Vec<ChatMessage> {
    let mut roster = String::new();
    for venue in candidates {
        roster.push_str(&format!(
            "- id: {} | name: {} | cuisines: {} | price level: {} | rating: {:.1} | distance: {:.1} km\n",
            venue.id,
            venue.name,
            venue.cuisine_types.join(", "),
            venue.price_level,
            venue.rating,
            venue.distance_km,
        ));
    }

    let user = format!(
        "My preference: {preference}\n\n\
        Nearby restaurants:\n{roster}\n\
        Select at most {limit} restaurants from the list above that best match my preference.\n\
        For each selected restaurant provide a short explanation of why it matches, and a list \
        of suggested menu items with an estimated price for each.\n\n\
        Respond with a JSON object of exactly this shape and nothing else:\n\
        {{\n\
          \"selected_restaurants\": [\n\
            {{\n\
              \"id\": \"<restaurant id from the list>\",\n\
              \"explanation\": \"<why this matches>\",\n\
              \"suggested_items\": [\n\
                {{\"name\": \"<item>\", \"description\": \"<short description>\", \"price\": <estimated price>}}\n\
              ]\n\
            }}\n\
          ],\n\
          \"match_score\": <overall match quality between 0 and 1>\n\
        }}"
    );

    vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(user)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venue(id: &str, name: &str) -> RawVenue {
        RawVenue {
            id: id.to_string(),
            name: name.to_string(),
            latitude: -6.2088,
            longitude: 106.8456,
            cuisine_types: vec!["Indian".to_string(), "Spicy".to_string()],
            price_level: 2,
            rating: 4.7,
            distance_km: 1.2,
            open_now: Some(true),
            hours: None,
        }
    }

    #[test]
    fn test_prompt_has_system_and_user_message() {
        let messages = build_prompt("something spicy", &[venue("r1", "Spice Garden")], 5);

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[1].role, "user");
    }

    #[test]
    fn test_prompt_embeds_candidates_and_contract() {
        let candidates = vec![venue("r1", "Spice Garden"), venue("r2", "Green Plate")];
        let messages = build_prompt("vegetarian lunch", &candidates, 3);

        let user = &messages[1].content;
        assert!(user.contains("vegetarian lunch"));
        assert!(user.contains("id: r1"));
        assert!(user.contains("id: r2"));
        assert!(user.contains("at most 3"));
        assert!(user.contains("selected_restaurants"));
        assert!(user.contains("match_score"));
    }
}
