use crate::core::ChatMessage;
use crate::models::{ErrorResponse, SuggestionsQuery, SuggestionsResponse};
use crate::routes::restaurants::AppState;
use actix_web::{web, HttpResponse, Responder};

/// Configure preference routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/preferences/suggestions", web::get().to(get_suggestions));
}

/// Suggested food preferences the user might ask about
///
/// GET /v1/preferences/suggestions?count=5
async fn get_suggestions(
    state: web::Data<AppState>,
    query: web::Query<SuggestionsQuery>,
) -> impl Responder {
    let count = query.count.clamp(1, 20);

    let messages = vec![
        ChatMessage::system(
            "You are a helpful food recommendation assistant. Generate diverse and creative \
             food preference suggestions that users might want to ask about.",
        ),
        ChatMessage::user(format!(
            "Generate {count} different food preference suggestions. These should be phrased \
             as if a user is asking for food recommendations. Make them diverse in terms of \
             cuisine types, dietary restrictions, price ranges, and specific needs (like quick \
             meals, healthy options, etc.). Format your response as a simple list with each \
             suggestion on a new line."
        )),
    ];

    match state.openrouter.chat(&messages).await {
        Ok(output) => {
            let suggestions: Vec<String> = output
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .take(count)
                .collect();

            HttpResponse::Ok().json(SuggestionsResponse { suggestions })
        }
        Err(e) => {
            tracing::error!("Suggestion generation failed: {}", e);
            HttpResponse::BadGateway().json(ErrorResponse {
                error: "Suggestion model unavailable".to_string(),
                message: e.to_string(),
                status_code: 502,
            })
        }
    }
}
