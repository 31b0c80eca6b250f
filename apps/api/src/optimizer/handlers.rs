//! Axum route handlers for the optimizer.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::optimizer::models::{PromptRequest, PromptResponse};
use crate::optimizer::service::optimize_prompt;
use crate::state::AppState;

/// POST /optimize
///
/// Rates the prompt and returns suggestions, issues and rewritten variants.
/// 400 on a blank prompt, 422 on an undecodable body, 500 when generation fails.
pub async fn handle_optimize(
    State(state): State<AppState>,
    payload: Result<Json<PromptRequest>, axum::extract::rejection::JsonRejection>,
) -> Result<Json<PromptResponse>, AppError> {
    let Json(request) = payload?;
    let response = optimize_prompt(
        &request.prompt,
        state.generator.as_ref(),
        state.scores.as_ref(),
    )
    .await?;
    Ok(Json(response))
}
