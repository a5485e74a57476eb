use crate::core::extractor::Extraction;
use crate::models::{Coordinates, RawVenue, Recommendation};

/// Map a provider price level (0-4) to the user-facing symbol string.
///
/// Total over all inputs: unmapped levels fall back to "$$".
pub fn price_range_symbol(price_level: u8) -> &'static str {
    match price_level {
        1 => "$",
        2 => "$$",
        3 => "$$$",
        4 => "$$$$",
        _ => "$$",
    }
}

/// Join extracted selections back to their candidate venues
///
/// Selections are processed in model order, which is treated as the model's
/// own ranking. Selections whose id has no matching candidate are dropped
/// silently (the model may hallucinate ids). The result is capped at `limit`.
pub fn assemble(
    extraction: &Extraction,
    venues: &[RawVenue],
    limit: usize,
) -> Vec<Recommendation> {
    extraction
        .selected
        .iter()
        .filter_map(|selection| {
            let venue = venues.iter().find(|v| v.id == selection.venue_id)?;

            Some(Recommendation {
                id: venue.id.clone(),
                name: venue.name.clone(),
                rating: venue.rating,
                price_range: price_range_symbol(venue.price_level).to_string(),
                cuisine_types: venue.cuisine_types.clone(),
                coordinates: Coordinates {
                    latitude: venue.latitude,
                    longitude: venue.longitude,
                },
                distance: venue.distance_km,
                gofood_url: gofood_url(venue),
                ai_description: selection.explanation.clone(),
                popular_items: selection.suggested_items.clone(),
                open_now: venue.open_now,
                hours: venue.hours.clone(),
            })
        })
        .take(limit)
        .collect()
}

fn gofood_url(venue: &RawVenue) -> String {
    format!("https://gofood.co.id/en/restaurant/{}", venue.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExtractedSelection, SuggestedItem};

    fn venue(id: &str, price_level: u8) -> RawVenue {
        RawVenue {
            id: id.to_string(),
            name: format!("Venue {}", id),
            latitude: -6.2088,
            longitude: 106.8456,
            cuisine_types: vec!["Thai".to_string()],
            price_level,
            rating: 4.5,
            distance_km: 0.8,
            open_now: Some(true),
            hours: None,
        }
    }

    fn selection(id: &str) -> ExtractedSelection {
        ExtractedSelection {
            venue_id: id.to_string(),
            explanation: format!("{} matches your taste", id),
            suggested_items: vec![SuggestedItem {
                name: "Tom Yum Soup".to_string(),
                description: String::new(),
                price: 55000.0,
            }],
            match_score: None,
        }
    }

    fn extraction(ids: &[&str]) -> Extraction {
        Extraction {
            selected: ids.iter().map(|id| selection(id)).collect(),
            match_score: 0.9,
        }
    }

    #[test]
    fn test_joins_by_id_in_model_order() {
        let venues = vec![venue("r1", 2), venue("r2", 3), venue("r3", 1)];
        let result = assemble(&extraction(&["r3", "r1"]), &venues, 10);

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].id, "r3");
        assert_eq!(result[1].id, "r1");
        assert_eq!(result[0].ai_description, "r3 matches your taste");
        assert_eq!(result[0].popular_items[0].name, "Tom Yum Soup");
    }

    #[test]
    fn test_hallucinated_ids_dropped() {
        let venues = vec![venue("r1", 2)];
        let result = assemble(&extraction(&["ghost", "r1"]), &venues, 10);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "r1");
    }

    #[test]
    fn test_only_hallucinated_ids_yields_empty() {
        let venues = vec![venue("r1", 2)];
        let result = assemble(&extraction(&["ghost"]), &venues, 10);

        assert!(result.is_empty());
    }

    #[test]
    fn test_no_candidates_yields_empty() {
        let result = assemble(&extraction(&["r1", "r2"]), &[], 10);

        assert!(result.is_empty());
    }

    #[test]
    fn test_limit_cap_preserves_order() {
        let venues: Vec<RawVenue> = (1..=8).map(|i| venue(&format!("r{}", i), 2)).collect();
        let ids: Vec<String> = (1..=8).map(|i| format!("r{}", i)).collect();
        let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();

        let result = assemble(&extraction(&id_refs), &venues, 3);

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].id, "r1");
        assert_eq!(result[2].id, "r3");
    }

    #[test]
    fn test_price_range_mapping_is_total() {
        assert_eq!(price_range_symbol(1), "$");
        assert_eq!(price_range_symbol(2), "$$");
        assert_eq!(price_range_symbol(3), "$$$");
        assert_eq!(price_range_symbol(4), "$$$$");
        // Out-of-table values fall back to "$$"
        assert_eq!(price_range_symbol(0), "$$");
        assert_eq!(price_range_symbol(5), "$$");
        assert_eq!(price_range_symbol(255), "$$");
    }
}
