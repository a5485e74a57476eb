use crate::models::{ExtractedSelection, SuggestedItem};
use serde_json::Value;

/// Structured selection data recovered from one LLM response
#[derive(Debug, Clone)]
pub struct Extraction {
    pub selected: Vec<ExtractedSelection>,
    pub match_score: f64,
}

impl Extraction {
    /// The documented empty result: nothing usable in the model output
    pub fn empty() -> Self {
        Self { selected: Vec::new(), match_score: 0.0 }
    }
}

/// A single extraction rule: produce a candidate JSON payload from raw text.
///
/// Returning `Some` does not mean the candidate parses; the ladder moves on
/// to the next rule when it doesn't.
type ExtractionRule = fn(&str) -> Option<String>;

/// Fallback ladder, ordered from cheapest/most-specific to most permissive.
/// Ordering matters: the brace scan would happily capture unintended braces
/// in free text that a fenced block rule resolves correctly.
const LADDER: &[(&str, ExtractionRule)] = &[
    ("direct", rule_direct),
    ("fenced", rule_fenced),
    ("braced", rule_braced),
    ("boxed", rule_boxed),
];

/// Recover a structured selection from raw LLM output text
///
/// Tries each ladder rule in order and stops at the first one whose candidate
/// is syntactically valid JSON. When every rule fails the documented empty
/// result is returned; extraction failure is never an error.
///
/// `default_match_score` is used when the payload carries no usable
/// top-level `match_score` (missing, non-numeric, or outside [0,1]).
pub fn extract(text: &str, default_match_score: f64) -> Extraction {
    for (name, rule) in LADDER {
        if let Some(candidate) = rule(text) {
            if let Ok(value) = serde_json::from_str::<Value>(&candidate) {
                tracing::debug!(rule = name, "recovered structured data from model output");
                return from_payload(&value, default_match_score);
            }
        }
    }

    tracing::warn!("no structured data in model output, returning empty extraction");
    Extraction::empty()
}

/// Rule 1: the entire text is the payload
fn rule_direct(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}

/// Rule 2: first Markdown-fenced block (```json ... ``` or ``` ... ```)
fn rule_fenced(text: &str) -> Option<String> {
    let open = text.find("```")?;
    let after_fence = &text[open + 3..];
    // Skip the optional language tag up to the end of the fence line
    let body_start = after_fence.find('\n')?;
    let body = &after_fence[body_start + 1..];
    let close = body.find("```")?;
    Some(body[..close].trim().to_string())
}

/// Rule 3: greedy brace scan, first `{` to last `}`
fn rule_braced(text: &str) -> Option<String> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end <= start {
        return None;
    }
    Some(text[start..=end].trim().to_string())
}

/// Rule 4: `\boxed{...}` wrapper some models emit around final answers;
/// re-applies the fenced-block rule to the inner content
fn rule_boxed(text: &str) -> Option<String> {
    let open = text.find("\\boxed{")?;
    let inner_start = open + "\\boxed{".len();
    let inner_end = text.rfind('}')?;
    if inner_end <= inner_start {
        return None;
    }
    rule_fenced(&text[inner_start..inner_end])
}

/// Map a syntactically valid payload onto the internal extraction type
///
/// Lenient by design: `selected_restaurants` is optional, individual
/// malformed entries are skipped, and missing item fields default to empty.
fn from_payload(value: &Value, default_match_score: f64) -> Extraction {
    let selected: Vec<ExtractedSelection> = value
        .get("selected_restaurants")
        .and_then(Value::as_array)
        .map(|entries| entries.iter().filter_map(selection_from_entry).collect())
        .unwrap_or_default();

    let match_score = value
        .get("match_score")
        .and_then(score_from_value)
        .unwrap_or(default_match_score);

    Extraction { selected, match_score }
}

fn selection_from_entry(entry: &Value) -> Option<ExtractedSelection> {
    let venue_id = entry
        .get("id")
        .or_else(|| entry.get("venue_id"))
        .and_then(Value::as_str)?
        .to_string();

    let explanation = entry
        .get("explanation")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let suggested_items = entry
        .get("suggested_items")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(item_from_entry).collect())
        .unwrap_or_default();

    let match_score = entry.get("match_score").and_then(score_from_value);

    Some(ExtractedSelection { venue_id, explanation, suggested_items, match_score })
}

fn item_from_entry(entry: &Value) -> Option<SuggestedItem> {
    let name = entry.get("name").and_then(Value::as_str)?.to_string();

    let description = entry
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let price = entry
        .get("price")
        .and_then(|v| match v {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        })
        .unwrap_or(0.0);

    Some(SuggestedItem { name, description, price })
}

/// A score is usable only when it parses as a float within [0,1]
fn score_from_value(value: &Value) -> Option<f64> {
    let score = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (0.0..=1.0).contains(&score).then_some(score)
}
