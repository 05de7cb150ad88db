pub mod dto;

use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::AppError;
use crate::models::{Assignment, Course, Discussion, Entry};

const DEFAULT_BASE_URL: &str = "https://dixietech.instructure.com/api/v1";

/// Only submission type the gateway accepts.
const SUBMISSION_TYPE_ONLINE_URL: &str = "online_url";

#[derive(Clone, Debug)]
pub struct CanvasConfig {
    pub base_url: String,
    pub access_token: String,
}

impl CanvasConfig {
    /// Reads the upstream settings once at startup. A missing ACCESS_TOKEN is
    /// not rejected here: calls go out with an unusable header and fail on
    /// the Canvas side.
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("CANVAS_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            access_token: env::var("ACCESS_TOKEN").unwrap_or_default(),
        }
    }
}

#[async_trait]
pub trait CanvasClient: Send + Sync {
    async fn fetch_courses(&self) -> Result<Vec<Course>, AppError>;
    async fn fetch_discussions(&self, course_id: i64) -> Result<Vec<Discussion>, AppError>;
    async fn create_discussion_entry(
        &self,
        course_id: i64,
        topic_id: i64,
        entry: &Entry,
    ) -> Result<(), AppError>;
    async fn fetch_assignments(&self, course_id: i64) -> Result<Vec<Assignment>, AppError>;
    async fn submit_assignment(
        &self,
        course_id: i64,
        assignment_id: i64,
        submission_type: &str,
        url: Option<&str>,
    ) -> Result<(), AppError>;
}

pub struct CanvasHttpClient {
    client: Client,
    config: CanvasConfig,
}

impl CanvasHttpClient {
    pub fn new(config: CanvasConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::UpstreamRequest(format!("Failed to build http client: {}", e)))?;
        Ok(Self { client, config })
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, AppError> {
        let url = format!("{}{}", self.config.base_url, path);

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.config.access_token))
            .send()
            .await
            .map_err(|e| AppError::UpstreamRequest(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::UpstreamRequest(format!(
                "Canvas API error {}",
                response.status()
            )));
        }

        response
            .json::<Vec<T>>()
            .await
            .map_err(|_| AppError::InvalidUpstreamResponse)
    }
}

#[async_trait]
impl CanvasClient for CanvasHttpClient {
    async fn fetch_courses(&self) -> Result<Vec<Course>, AppError> {
        let objects: Vec<dto::CourseObject> = self.get_list("/courses").await?;
        objects.into_iter().map(course_from_object).collect()
    }

    async fn fetch_discussions(&self, course_id: i64) -> Result<Vec<Discussion>, AppError> {
        let objects: Vec<dto::DiscussionTopicObject> = self
            .get_list(&format!("/courses/{}/discussion_topics", course_id))
            .await?;
        objects.into_iter().map(discussion_from_object).collect()
    }

    async fn create_discussion_entry(
        &self,
        course_id: i64,
        topic_id: i64,
        entry: &Entry,
    ) -> Result<(), AppError> {
        let url = format!(
            "{}/courses/{}/discussion_topics/{}/entries",
            self.config.base_url, course_id, topic_id
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.access_token))
            .form(entry)
            .send()
            .await
            .map_err(|e| AppError::UpstreamRequest(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::UpstreamRequest(format!(
                "Canvas API error {}",
                response.status()
            )));
        }

        // Canvas echoes the created entry back; nothing downstream consumes it.
        Ok(())
    }

    async fn fetch_assignments(&self, course_id: i64) -> Result<Vec<Assignment>, AppError> {
        let objects: Vec<dto::AssignmentObject> = self
            .get_list(&format!("/courses/{}/assignments", course_id))
            .await?;
        objects.into_iter().map(assignment_from_object).collect()
    }

    async fn submit_assignment(
        &self,
        course_id: i64,
        assignment_id: i64,
        submission_type: &str,
        url: Option<&str>,
    ) -> Result<(), AppError> {
        let endpoint = format!(
            "{}/courses/{}/assignments/{}/submit",
            self.config.base_url, course_id, assignment_id
        );

        // Canvas is probed once without a payload. The outcome is ignored,
        // failures included; only the second call decides the result.
        if let Err(err) = self
            .client
            .post(&endpoint)
            .header("Authorization", format!("Bearer {}", self.config.access_token))
            .send()
            .await
        {
            debug!("submission probe failed: {}", err);
        }

        if submission_type != SUBMISSION_TYPE_ONLINE_URL {
            return Err(AppError::BadRequest("online_url required".to_string()));
        }

        let form = dto::SubmissionRequest {
            submission_data: submission_type,
            url,
        };

        let response = self
            .client
            .post(&endpoint)
            .header("Authorization", format!("Bearer {}", self.config.access_token))
            .form(&form)
            .send()
            .await
            .map_err(|e| AppError::UpstreamRequest(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::UpstreamRequest(format!(
                "Canvas API error {}",
                response.status()
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| AppError::UpstreamRequest(e.to_string()))?;

        if body.is_empty() {
            return Err(AppError::EmptyUpstreamResponse);
        }

        let outcome: dto::SubmissionOutcome =
            serde_json::from_slice(&body).map_err(|_| AppError::InvalidUpstreamResponse)?;

        if outcome.status.as_deref() == Some("success") {
            Ok(())
        } else {
            Err(AppError::SubmissionRejected)
        }
    }
}

fn course_from_object(object: dto::CourseObject) -> Result<Course, AppError> {
    let id = object.id.ok_or(AppError::MissingKey {
        entity: "course",
        key: "id",
    })?;
    let name = object.name.ok_or(AppError::MissingKey {
        entity: "course",
        key: "name",
    })?;
    Ok(Course { id, name })
}

fn discussion_from_object(object: dto::DiscussionTopicObject) -> Result<Discussion, AppError> {
    let id = object.id.ok_or(AppError::MissingKey {
        entity: "discussion",
        key: "id",
    })?;
    let title = object.title.ok_or(AppError::MissingKey {
        entity: "discussion",
        key: "title",
    })?;
    Ok(Discussion { id, title })
}

fn assignment_from_object(object: dto::AssignmentObject) -> Result<Assignment, AppError> {
    let id = object.id.ok_or(AppError::MissingKey {
        entity: "assignment",
        key: "id",
    })?;
    let name = object.name.ok_or(AppError::MissingKey {
        entity: "assignment",
        key: "name",
    })?;
    Ok(Assignment { id, name })
}
