//! In-memory fakes for handler tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::Utc;
use serde_json::Value;
use sqlx::types::Json;
use tower::ServiceExt;
use uuid::Uuid;

use crate::errors::AppError;
use crate::identity::USER_ID_HEADER;
use crate::llm_client::{GenerationOptions, LlmError, TextGenerator};
use crate::models::resume::{NewResume, ResumeRecord};
use crate::resumes::store::ResumeStore;
use crate::routes::build_router;
use crate::state::AppState;

/// Returns a canned reply (or error) and records every prompt it receives.
pub struct FakeGenerator {
    reply: Result<String, String>,
    pub prompts: Mutex<Vec<String>>,
}

impl FakeGenerator {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(message.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn last_prompt(&self) -> String {
        self.prompts.lock().unwrap().last().cloned().unwrap_or_default()
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate(&self, prompt: &str, _options: &GenerationOptions) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone().map_err(|message| LlmError::Api {
            status: 503,
            message,
        })
    }
}

#[derive(Default)]
pub struct MemoryStore {
    pub records: Mutex<Vec<ResumeRecord>>,
    pub finds: AtomicUsize,
}

impl MemoryStore {
    pub fn count(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

#[async_trait]
impl ResumeStore for MemoryStore {
    async fn create(&self, resume: NewResume) -> Result<Uuid, AppError> {
        let id = Uuid::new_v4();
        let content = resume.content;
        self.records.lock().unwrap().push(ResumeRecord {
            id,
            user_id: resume.user_id,
            title: resume.title,
            template: resume.template.as_str().to_string(),
            professional_summary: content.professional_summary,
            skills: content.skills,
            personal_info: Json(content.personal_info),
            experience: Json(content.experience),
            projects: Json(content.projects),
            education: Json(content.education),
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn find(&self, user_id: Uuid, id: Uuid) -> Result<Option<ResumeRecord>, AppError> {
        self.finds.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id && r.user_id == user_id)
            .cloned())
    }
}

pub fn app(ai: Arc<FakeGenerator>, store: Arc<MemoryStore>) -> Router {
    build_router(AppState { ai, store })
}

pub async fn post_json(
    app: Router,
    uri: &str,
    user: Option<Uuid>,
    body: &str,
) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(user) = user {
        builder = builder.header(USER_ID_HEADER, user.to_string());
    }
    send(app, builder.body(Body::from(body.to_string())).unwrap()).await
}

pub async fn get(app: Router, uri: &str, user: Option<Uuid>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(user) = user {
        builder = builder.header(USER_ID_HEADER, user.to_string());
    }
    send(app, builder.body(Body::empty()).unwrap()).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}
