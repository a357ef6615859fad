use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;

use crate::error::AppError;
use crate::formatter;
use crate::profile::AssessmentRequest;
use crate::prompt;
use crate::server::AppState;
use crate::tracker::Tracker;

#[derive(Debug, Serialize)]
pub struct AssessmentResponse {
    pub status: &'static str,
    pub issue_id: String,
}

/// Run one assessment: render the prompt, call the completion API, clean up
/// the output, and post it as a comment on the target issue.
pub async fn handle_assessment(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AssessmentRequest>,
) -> Result<Json<AssessmentResponse>, AppError> {
    tracing::info!(issue = %request.issue_id, "Received assessment request");

    if request.profile.is_empty() {
        tracing::warn!(issue = %request.issue_id, "Vendor profile has no fields");
    }

    let prompt = prompt::build_prompt(&request.profile);
    let raw = state.completion.complete(&prompt).await?;

    tracing::debug!(
        issue = %request.issue_id,
        chars = raw.chars().count(),
        "Completion received"
    );

    let comment = formatter::format_response(&raw);
    state
        .tracker
        .post_comment(&request.issue_id, &comment)
        .await?;

    tracing::info!(issue = %request.issue_id, "Assessment posted");

    Ok(Json(AssessmentResponse {
        status: "posted",
        issue_id: request.issue_id,
    }))
}

// A failure at any stage maps to a generic 500 carrying the description.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Assessment request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
