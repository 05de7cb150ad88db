use axum::Json;
use axum::extract::{Form, Query};
use axum::routing::post;
use axum::{Router, extract::State, http::StatusCode, routing::get};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::{Assignment, Course, Discussion, Entry};
use crate::state::AppState;

#[derive(Deserialize)]
struct CourseScope {
    course_id: i64,
}

#[derive(Deserialize)]
struct TopicScope {
    course_id: i64,
    topic_id: i64,
}

#[derive(Deserialize)]
struct AssignmentScope {
    course_id: i64,
    assignment_id: i64,
}

#[derive(Deserialize)]
struct SubmissionForm {
    submission_type: String,
    url: Option<String>,
}

#[derive(Serialize)]
struct SubmitResponse {
    message: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/courses", get(list_courses))
        .route("/discussions", get(list_discussions))
        .route("/discussions/entries", post(create_discussion_entry))
        .route("/courses/assignments", get(list_assignments))
        .route("/courses/assignments/submit", post(submit_assignment))
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn list_courses(State(state): State<AppState>) -> Result<Json<Vec<Course>>, AppError> {
    let courses = state.canvas.fetch_courses().await?;
    Ok(Json(courses))
}

async fn list_discussions(
    State(state): State<AppState>,
    Query(params): Query<CourseScope>,
) -> Result<Json<Vec<Discussion>>, AppError> {
    let discussions = state.canvas.fetch_discussions(params.course_id).await?;
    Ok(Json(discussions))
}

async fn create_discussion_entry(
    State(state): State<AppState>,
    Query(params): Query<TopicScope>,
    Json(entry): Json<Entry>,
) -> Result<StatusCode, AppError> {
    state
        .canvas
        .create_discussion_entry(params.course_id, params.topic_id, &entry)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_assignments(
    State(state): State<AppState>,
    Query(params): Query<CourseScope>,
) -> Result<Json<Vec<Assignment>>, AppError> {
    let assignments = state.canvas.fetch_assignments(params.course_id).await?;
    Ok(Json(assignments))
}

async fn submit_assignment(
    State(state): State<AppState>,
    Query(params): Query<AssignmentScope>,
    Form(form): Form<SubmissionForm>,
) -> Result<Json<SubmitResponse>, AppError> {
    state
        .canvas
        .submit_assignment(
            params.course_id,
            params.assignment_id,
            &form.submission_type,
            form.url.as_deref(),
        )
        .await?;

    Ok(Json(SubmitResponse {
        message: "Assignment successfully submitted!".to_string(),
    }))
}
