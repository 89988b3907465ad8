use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

// Model output is loosely typed: strings may come back as null or as numbers
// (`"gpa": 3.8`). These deserializers absorb that without accepting
// structurally wrong values like objects in a string slot.

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string, found {other}"
        ))),
    }
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Item(#[serde(deserialize_with = "lenient_string")] String);

    Ok(Option::<Vec<Item>>::deserialize(deserializer)?
        .unwrap_or_default()
        .into_iter()
        .map(|Item(s)| s)
        .collect())
}

fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_struct<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    #[serde(default, deserialize_with = "lenient_string")]
    pub image: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub profession: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub full_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub website: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default, deserialize_with = "lenient_string")]
    pub company: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub position: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub start_date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub end_date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_current: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, rename = "type", deserialize_with = "lenient_string")]
    pub project_type: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default, deserialize_with = "lenient_string")]
    pub institution: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub degree: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub graduation_date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub field: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub gpa: String,
}

/// Structured resume content as returned by the extraction prompt.
/// Unknown keys are ignored; owner and title are never read from here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedResume {
    #[serde(default, deserialize_with = "lenient_string")]
    pub professional_summary: String,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient_struct")]
    pub personal_info: PersonalInfo,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub projects: Vec<ProjectEntry>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub education: Vec<EducationEntry>,
}

/// Rendering template chosen for a resume.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResumeTemplate {
    #[default]
    Classic,
    Modern,
    Minimal,
    MinimalImage,
}

impl ResumeTemplate {
    /// Names match exactly. Anything else, including other casings, is `Classic`.
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("modern") => ResumeTemplate::Modern,
            Some("minimal") => ResumeTemplate::Minimal,
            Some("minimal-image") => ResumeTemplate::MinimalImage,
            _ => ResumeTemplate::Classic,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResumeTemplate::Classic => "classic",
            ResumeTemplate::Modern => "modern",
            ResumeTemplate::Minimal => "minimal",
            ResumeTemplate::MinimalImage => "minimal-image",
        }
    }
}

/// A resume ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewResume {
    pub user_id: Uuid,
    pub title: String,
    pub template: ResumeTemplate,
    pub content: ExtractedResume,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ResumeRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub template: String,
    pub professional_summary: String,
    pub skills: Vec<String>,
    pub personal_info: Json<PersonalInfo>,
    pub experience: Json<Vec<ExperienceEntry>>,
    pub projects: Json<Vec<ProjectEntry>>,
    pub education: Json<Vec<EducationEntry>>,
    pub created_at: DateTime<Utc>,
}
