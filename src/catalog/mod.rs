use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::CatalogConfig;
use crate::error::AppError;
use crate::models::CourseWithProgress;

pub const PUBLIC_COURSES_PATH: &str = "/api/courses/public";

/// Read side of the course catalog backend.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    async fn fetch_public_courses(&self) -> Result<Vec<CourseWithProgress>, AppError>;
}

pub struct CatalogHttpClient {
    client: Client,
    url: String,
}

impl CatalogHttpClient {
    pub fn new(config: &CatalogConfig) -> Result<Self, AppError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            url: format!("{}{}", config.base_url, PUBLIC_COURSES_PATH),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CatalogClient for CatalogHttpClient {
    /// Single best-effort GET; no retry and no backoff.
    async fn fetch_public_courses(&self) -> Result<Vec<CourseWithProgress>, AppError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::UpstreamStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response.bytes().await?;
        let courses: Vec<CourseWithProgress> = serde_json::from_slice(&body)?;
        debug!("catalog returned {} courses", courses.len());
        Ok(courses)
    }
}

pub struct NoopCatalogClient;

#[async_trait]
impl CatalogClient for NoopCatalogClient {
    async fn fetch_public_courses(&self) -> Result<Vec<CourseWithProgress>, AppError> {
        Ok(Vec::new())
    }
}
