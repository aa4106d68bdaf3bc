//! services/api/src/web/rest.rs
//!
//! Contains the Axum handlers for the REST API endpoints and the master
//! definition for the OpenAPI specification.

use crate::adapters::BugReport;
use crate::web::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use curator_core::domain::Mood;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        health_handler,
        list_moods_handler,
        submit_bug_report_handler,
    ),
    components(
        schemas(MoodSuggestion, BugReportRequest)
    ),
    tags(
        (name = "Museum Mood Curator API", description = "REST endpoints beside the WebSocket chat.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// API Response and Payload Structs
//=========================================================================================

/// One mood chip offered to new visitors.
#[derive(Serialize, ToSchema)]
pub struct MoodSuggestion {
    mood: &'static str,
    label: &'static str,
    emoji: &'static str,
    /// The message the UI submits when the chip is clicked.
    prompt: String,
}

/// Payload for submitting a bug report.
#[derive(Deserialize, ToSchema)]
pub struct BugReportRequest {
    name: String,
    issue: String,
    description: String,
}

//=========================================================================================
// REST API Handlers
//=========================================================================================

/// Service liveness probe.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up")
    )
)]
pub async fn health_handler() -> impl IntoResponse {
    StatusCode::OK
}

/// The mood suggestions shown when a conversation starts.
#[utoipa::path(
    get,
    path = "/moods",
    responses(
        (status = 200, description = "The six mood suggestion chips", body = [MoodSuggestion])
    )
)]
pub async fn list_moods_handler() -> Json<Vec<MoodSuggestion>> {
    let chips = [
        (Mood::Happy, "Make me happy", "😊"),
        (Mood::Peaceful, "I need peace", "🕊️"),
        (Mood::Energized, "Excite me", "🔥"),
        (Mood::Inspired, "Inspire me", "✨"),
        (Mood::Mysterious, "Show me mystery", "🌙"),
        (Mood::Sad, "I feel melancholy", "🌧️"),
    ];

    Json(
        chips
            .into_iter()
            .map(|(mood, label, emoji)| MoodSuggestion {
                mood: mood.as_str(),
                label,
                emoji,
                prompt: format!("I want to feel {mood}"),
            })
            .collect(),
    )
}

/// Accept a bug report.
///
/// The report is handed to the notification side channel best-effort: the
/// endpoint answers 202 as soon as the report is queued, and delivery
/// failures are logged and discarded rather than surfaced.
#[utoipa::path(
    post,
    path = "/bug-reports",
    request_body = BugReportRequest,
    responses(
        (status = 202, description = "Report accepted for delivery"),
        (status = 400, description = "A required field was blank")
    )
)]
pub async fn submit_bug_report_handler(
    State(app_state): State<Arc<AppState>>,
    Json(request): Json<BugReportRequest>,
) -> impl IntoResponse {
    if request.name.trim().is_empty()
        || request.issue.trim().is_empty()
        || request.description.trim().is_empty()
    {
        return (
            StatusCode::BAD_REQUEST,
            "name, issue and description are all required".to_string(),
        )
            .into_response();
    }

    app_state.bug_reporter.notify(BugReport {
        name: request.name,
        issue: request.issue,
        description: request.description,
    });

    StatusCode::ACCEPTED.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lists_all_six_mood_chips_with_submit_prompts() {
        let Json(chips) = list_moods_handler().await;
        assert_eq!(chips.len(), 6);

        let happy = chips
            .iter()
            .find(|chip| chip.mood == "happy")
            .expect("happy chip present");
        assert_eq!(happy.prompt, "I want to feel happy");
        assert_eq!(happy.label, "Make me happy");
    }
}
