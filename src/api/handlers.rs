use crate::api::errors::{api_error, ApiError};
use crate::db::{Database, Task, TaskRepository};
use axum::http::StatusCode;
use axum::{
    extract::{Extension, Path},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

/// Represents the request payload for submitting a new task
///
/// Both fields are required; they are optional here so that a missing field
/// surfaces as a 400 instead of a body-rejection error.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitTaskRequest {
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub user_question: Option<String>,
}

/// Represents the response payload after successfully submitting a task
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitTaskResponse {
    pub success: bool,
    pub task_id: i32,
}

/// Submits a new scraping task
///
/// The task is inserted with status `pending`; the background worker picks
/// it up on a later tick.
///
/// # Returns
/// * `200` with `{ success, taskId }` on insert
/// * `400` if either field is missing or blank (no task is created)
/// * `500` with `{ error }` on store failure
#[axum::debug_handler]
pub async fn submit_task(
    Extension(database): Extension<Database>,
    Json(payload): Json<SubmitTaskRequest>,
) -> Result<Json<SubmitTaskResponse>, ApiError> {
    let website_url = payload.website_url.filter(|v| !v.trim().is_empty());
    let user_question = payload.user_question.filter(|v| !v.trim().is_empty());
    let (Some(website_url), Some(user_question)) = (website_url, user_question) else {
        return Err(api_error(StatusCode::BAD_REQUEST, "Missing required fields"));
    };

    let mut conn = database
        .get_conn()
        .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()))?;
    let mut repo = TaskRepository::new(&mut conn);

    let task_id = repo
        .insert_task(&website_url, &user_question)
        .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()))?;

    info!("task {} submitted for {}", task_id, website_url);

    Ok(Json(SubmitTaskResponse {
        success: true,
        task_id,
    }))
}

/// Retrieves the full task record by its ID
///
/// # Returns
/// * `200` with the task record
/// * `404` if no such id exists
/// * `500` with `{ error }` on store failure
#[axum::debug_handler]
pub async fn get_task(
    Path(id): Path<i32>,
    Extension(database): Extension<Database>,
) -> Result<Json<Task>, ApiError> {
    let mut conn = database
        .get_conn()
        .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()))?;
    let mut repo = TaskRepository::new(&mut conn);

    let task = repo
        .get_task(id)
        .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()))?;

    match task {
        Some(task) => Ok(Json(task)),
        None => Err(api_error(StatusCode::NOT_FOUND, "Task not found")),
    }
}

/// Liveness check
pub async fn health() -> Json<Value> {
    Json(json!({ "message": "askpage server running" }))
}
