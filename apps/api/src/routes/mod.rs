pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::enhance::handlers as enhance;
use crate::extraction::handlers as extraction;
use crate::resumes::handlers as resumes;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // AI endpoints
        .route(
            "/api/ai/enhance-pro-sum",
            post(enhance::handle_enhance_pro_sum),
        )
        .route(
            "/api/ai/enhance-job-desc",
            post(enhance::handle_enhance_job_desc),
        )
        .route(
            "/api/ai/upload-resume",
            post(extraction::handle_upload_resume),
        )
        // Resume reads
        .route("/api/resumes/:id", get(resumes::handle_get_resume))
        .with_state(state)
}
