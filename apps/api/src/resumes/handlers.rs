use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::identity::CallerId;
use crate::models::resume::ResumeRecord;
use crate::state::AppState;

/// GET /api/resumes/:id
///
/// Returns the record if it belongs to the caller. Other owners' ids look
/// the same as missing ones.
pub async fn handle_get_resume(
    State(state): State<AppState>,
    CallerId(user_id): CallerId,
    Path(resume_id): Path<Uuid>,
) -> Result<Json<ResumeRecord>, AppError> {
    let record = state
        .store
        .find(user_id, resume_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))?;

    Ok(Json(record))
}

#[cfg(test)]
mod tests {
    use crate::test_support::{app, get, post_json, FakeGenerator, MemoryStore};
    use axum::http::StatusCode;
    use std::sync::atomic::Ordering;
    use std::sync::Arc;
    use uuid::Uuid;

    async fn seeded() -> (Arc<MemoryStore>, Uuid, Uuid) {
        let ai = FakeGenerator::replying(
            r#"{"professional_summary": "Data engineer.", "skills": ["Spark"], "personal_info": {"full_name": "Kai"}}"#,
        );
        let store = Arc::new(MemoryStore::default());
        let owner = Uuid::new_v4();
        let (_, body) = post_json(
            app(ai, store.clone()),
            "/api/ai/upload-resume",
            Some(owner),
            r#"{"resumeText": "Kai, data engineer", "title": "Data CV", "template": "minimal"}"#,
        )
        .await;
        let id = body["resumeId"].as_str().unwrap().parse().unwrap();
        (store, owner, id)
    }

    #[tokio::test]
    async fn test_owner_can_read_record() {
        let (store, owner, id) = seeded().await;
        let (status, body) = get(
            app(FakeGenerator::replying(""), store),
            &format!("/api/resumes/{id}"),
            Some(owner),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], id.to_string());
        assert_eq!(body["title"], "Data CV");
        assert_eq!(body["template"], "minimal");
        assert_eq!(body["skills"][0], "Spark");
        assert_eq!(body["personal_info"]["full_name"], "Kai");
    }

    #[tokio::test]
    async fn test_other_owner_gets_404() {
        let (store, _, id) = seeded().await;
        let (status, body) = get(
            app(FakeGenerator::replying(""), store.clone()),
            &format!("/api/resumes/{id}"),
            Some(Uuid::new_v4()),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["message"].as_str().unwrap().contains(&id.to_string()));
        assert_eq!(store.finds.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_anonymous_read_is_401() {
        let (store, _, id) = seeded().await;
        let (status, _) = get(
            app(FakeGenerator::replying(""), store.clone()),
            &format!("/api/resumes/{id}"),
            None,
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(store.finds.load(Ordering::SeqCst), 0);
    }
}
