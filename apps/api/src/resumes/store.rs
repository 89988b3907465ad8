use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{NewResume, ResumeRecord};

/// Storage for resume records.
#[async_trait]
pub trait ResumeStore: Send + Sync {
    /// Inserts a new record and returns its generated id.
    async fn create(&self, resume: NewResume) -> Result<Uuid, AppError>;

    /// Fetches a record only if it belongs to `user_id`.
    async fn find(&self, user_id: Uuid, id: Uuid) -> Result<Option<ResumeRecord>, AppError>;
}

/// PostgreSQL-backed store. One INSERT per record, no transaction.
#[derive(Clone)]
pub struct PgResumeStore {
    pool: PgPool,
}

impl PgResumeStore {
    /// Opens a connection pool against `database_url`.
    pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<Self> {
        info!("Connecting to PostgreSQL...");

        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        info!("PostgreSQL pool ready ({max_connections} connections max)");
        Ok(Self { pool })
    }
}

#[async_trait]
impl ResumeStore for PgResumeStore {
    async fn create(&self, resume: NewResume) -> Result<Uuid, AppError> {
        let id = Uuid::new_v4();
        let NewResume {
            user_id,
            title,
            template,
            content,
        } = resume;

        sqlx::query(
            r#"
            INSERT INTO resumes
                (id, user_id, title, template, professional_summary, skills,
                 personal_info, experience, projects, education)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(&title)
        .bind(template.as_str())
        .bind(&content.professional_summary)
        .bind(&content.skills)
        .bind(Json(&content.personal_info))
        .bind(Json(&content.experience))
        .bind(Json(&content.projects))
        .bind(Json(&content.education))
        .execute(&self.pool)
        .await?;

        info!("Inserted resume {id} for user {user_id}");
        Ok(id)
    }

    async fn find(&self, user_id: Uuid, id: Uuid) -> Result<Option<ResumeRecord>, AppError> {
        let record = sqlx::query_as::<_, ResumeRecord>(
            "SELECT * FROM resumes WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }
}
