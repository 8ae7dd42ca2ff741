#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use escore::catalog::CatalogClient;
use escore::error::AppError;
use escore::models::CourseWithProgress;
use serde_json::{Value, json};
use tokio::sync::oneshot;

pub fn course_json(id: &str, title: &str, chapters: &[&str], quizzes: usize, enrolled: u64) -> Value {
    json!({
        "id": id,
        "userId": "teacher-1",
        "title": title,
        "description": null,
        "imageUrl": null,
        "price": null,
        "isPublished": true,
        "createdAt": "2025-09-01T10:00:00.000Z",
        "updatedAt": "2025-09-01T10:00:00.000Z",
        "chapters": chapters.iter().map(|c| json!({ "id": c })).collect::<Vec<_>>(),
        "quizzes": (0..quizzes).map(|i| json!({ "id": format!("{}-q{}", id, i) })).collect::<Vec<_>>(),
        "enrollmentCount": enrolled,
        "progress": 0
    })
}

pub fn course(id: &str, title: &str, chapters: &[&str], quizzes: usize, enrolled: u64) -> CourseWithProgress {
    serde_json::from_value(course_json(id, title, chapters, quizzes, enrolled))
        .expect("fixture should decode")
}

pub fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

pub const CARD: &str = r#"class="course-card""#;
pub const SKELETON: &str = r#"class="course-card-skeleton""#;

/// Always answers with the same list.
pub struct StaticCatalog(pub Vec<CourseWithProgress>);

#[async_trait]
impl CatalogClient for StaticCatalog {
    async fn fetch_public_courses(&self) -> Result<Vec<CourseWithProgress>, AppError> {
        Ok(self.0.clone())
    }
}

/// Always fails the way a non-2xx upstream does.
pub struct FailingCatalog;

#[async_trait]
impl CatalogClient for FailingCatalog {
    async fn fetch_public_courses(&self) -> Result<Vec<CourseWithProgress>, AppError> {
        Err(AppError::UpstreamStatus {
            status: 503,
            reason: "Service Unavailable".to_string(),
        })
    }
}

/// Holds the fetch open until the test releases it.
pub struct GatedCatalog {
    gate: Mutex<Option<oneshot::Receiver<Vec<CourseWithProgress>>>>,
}

impl GatedCatalog {
    pub fn new() -> (Self, oneshot::Sender<Vec<CourseWithProgress>>) {
        let (tx, rx) = oneshot::channel();
        (Self { gate: Mutex::new(Some(rx)) }, tx)
    }
}

#[async_trait]
impl CatalogClient for GatedCatalog {
    async fn fetch_public_courses(&self) -> Result<Vec<CourseWithProgress>, AppError> {
        let gate = self.gate.lock().unwrap().take();
        match gate {
            Some(rx) => rx.await.map_err(|_| AppError::InternalServerError),
            None => Err(AppError::InternalServerError),
        }
    }
}

/// Never answers. The returned receiver resolves once the in-flight
/// fetch (and with it this client) has been dropped.
pub struct HangingCatalog {
    _alive: Mutex<Option<oneshot::Sender<()>>>,
}

impl HangingCatalog {
    pub fn new() -> (Self, oneshot::Receiver<()>) {
        let (tx, rx) = oneshot::channel();
        (Self { _alive: Mutex::new(Some(tx)) }, rx)
    }
}

#[async_trait]
impl CatalogClient for HangingCatalog {
    async fn fetch_public_courses(&self) -> Result<Vec<CourseWithProgress>, AppError> {
        std::future::pending::<()>().await;
        Ok(Vec::new())
    }
}

/// Panics inside the fetch task.
pub struct PanickingCatalog;

#[async_trait]
impl CatalogClient for PanickingCatalog {
    async fn fetch_public_courses(&self) -> Result<Vec<CourseWithProgress>, AppError> {
        panic!("catalog client blew up");
    }
}
