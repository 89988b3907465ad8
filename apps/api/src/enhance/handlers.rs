//! Axum route handlers for text enhancement.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::enhance::prompts::{build_enhance_prompt, EnhanceTarget};
use crate::errors::AppError;
use crate::input::{non_blank, text_field};
use crate::llm_client::GenerationOptions;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceRequest {
    #[serde(default, deserialize_with = "text_field")]
    pub user_content: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceResponse {
    pub ai_content: String,
}

/// POST /api/ai/enhance-pro-sum
pub async fn handle_enhance_pro_sum(
    State(state): State<AppState>,
    payload: Result<Json<EnhanceRequest>, JsonRejection>,
) -> Result<Json<EnhanceResponse>, AppError> {
    let Json(request) = payload?;
    enhance(&state, EnhanceTarget::ProfessionalSummary, request).await
}

/// POST /api/ai/enhance-job-desc
pub async fn handle_enhance_job_desc(
    State(state): State<AppState>,
    payload: Result<Json<EnhanceRequest>, JsonRejection>,
) -> Result<Json<EnhanceResponse>, AppError> {
    let Json(request) = payload?;
    enhance(&state, EnhanceTarget::JobDescription, request).await
}

async fn enhance(
    state: &AppState,
    target: EnhanceTarget,
    request: EnhanceRequest,
) -> Result<Json<EnhanceResponse>, AppError> {
    let user_content = match non_blank(request.user_content) {
        Some(content) => content,
        None => {
            warn!("{target:?} enhancement rejected: empty userContent");
            return Err(AppError::Validation("Missing required fields".to_string()));
        }
    };

    let prompt = build_enhance_prompt(target, &user_content);
    let text = state
        .ai
        .generate(&prompt, &GenerationOptions::default())
        .await?;

    info!("{target:?} enhanced ({} chars in, {} chars out)", user_content.len(), text.len());

    Ok(Json(EnhanceResponse {
        ai_content: text.trim().to_string(),
    }))
}
