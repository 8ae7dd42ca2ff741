use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub user_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterRef {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizRef {
    pub id: String,
}

/// Course projection served by the public catalog endpoint.
///
/// The catalog omits or nulls the aggregate fields for some courses, so
/// they fall back to their zero values instead of failing the whole list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseWithProgress {
    #[serde(flatten)]
    pub course: Course,
    #[serde(default, deserialize_with = "null_as_default")]
    pub chapters: Vec<ChapterRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quizzes: Vec<QuizRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub enrollment_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub progress: f64,
}

impl CourseWithProgress {
    pub fn first_chapter(&self) -> Option<&ChapterRef> {
        self.chapters.first()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
