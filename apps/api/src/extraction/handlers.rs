//! Axum route handler for resume upload and extraction.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::normalize::{normalize_ai_json, parse_extracted};
use crate::extraction::prompts::build_extraction_prompt;
use crate::identity::CallerId;
use crate::input::{non_blank, text_field};
use crate::llm_client::GenerationOptions;
use crate::models::resume::{NewResume, ResumeTemplate};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResumeRequest {
    #[serde(default, deserialize_with = "text_field")]
    pub resume_text: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub template: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResumeResponse {
    pub resume_id: Uuid,
}

/// POST /api/ai/upload-resume
///
/// Extracts structured data from pasted resume text and stores it for the caller.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    CallerId(user_id): CallerId,
    payload: Result<Json<UploadResumeRequest>, JsonRejection>,
) -> Result<Json<UploadResumeResponse>, AppError> {
    let Json(request) = payload?;

    let resume_text = match non_blank(request.resume_text) {
        Some(text) => text,
        None => {
            warn!("Upload rejected for user {user_id}: empty resumeText");
            return Err(AppError::Validation(
                "Missing required field 'resumeText'".to_string(),
            ));
        }
    };

    let prompt = build_extraction_prompt(&resume_text);
    let text = state
        .ai
        .generate(&prompt, &GenerationOptions::default())
        .await?;
    let raw = text.trim();

    let content = parse_extracted(normalize_ai_json(raw)).map_err(|parse_error| {
        warn!("AI response for user {user_id} is not valid resume JSON: {parse_error}");
        AppError::Unparseable {
            raw: raw.to_string(),
            parse_error,
        }
    })?;

    let resume_id = state
        .store
        .create(NewResume {
            user_id,
            title: request.title.unwrap_or_default(),
            template: ResumeTemplate::from_name(request.template.as_deref()),
            content,
        })
        .await?;

    info!("Created resume {resume_id} for user {user_id}");

    Ok(Json(UploadResumeResponse { resume_id }))
}
