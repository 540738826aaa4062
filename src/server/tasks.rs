//! Task API endpoints
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | GET | /tasks | 200, every task |
//! | GET | /tasks/incomplete | 200, outstanding tasks |
//! | GET | /tasks/{id} | 200, one task |
//! | POST | /tasks | 202, task created |
//! | POST | /tasks/{id} | 202, status toggled |
//! | DELETE | /tasks/{id} | 202, task deleted |

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::tasks::{Task, TaskId, TaskList, TaskStore};

use super::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

/// Body of `POST /tasks`.
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    /// Name of the new task, sent as `"Name"`.
    #[serde(rename = "Name", alias = "name")]
    pub name: String,
}

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// What went wrong.
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, error: impl Into<String>) -> ApiError {
    (status, Json(ErrorResponse { error: error.into() }))
}

fn store_error(err: &Error) -> ApiError {
    let status =
        if err.is_not_found() { StatusCode::NOT_FOUND } else { StatusCode::INTERNAL_SERVER_ERROR };
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(error = %err, "task store failed");
    }
    api_error(status, err.to_string())
}

/// Ids must be positive integers; anything else is a missing task.
fn parse_id(raw: &str) -> Result<TaskId, ApiError> {
    TaskId::parse(raw)
        .ok_or_else(|| api_error(StatusCode::NOT_FOUND, format!("invalid task id: {raw}")))
}

/// Run a task list call on the blocking pool.
async fn with_list<S, T, F>(state: &AppState<S>, f: F) -> Result<T, ApiError>
where
    S: TaskStore + Send + Sync + 'static,
    T: Send + 'static,
    F: FnOnce(&TaskList<S>) -> crate::Result<T> + Send + 'static,
{
    let list = state.task_list();
    tokio::task::spawn_blocking(move || f(&list))
        .await
        .map_err(|e| {
            api_error(StatusCode::INTERNAL_SERVER_ERROR, format!("task worker failed: {e}"))
        })?
        .map_err(|e| store_error(&e))
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /tasks - List all tasks
async fn list_tasks<S>(State(state): State<AppState<S>>) -> Result<Json<Vec<Task>>, ApiError>
where
    S: TaskStore + Send + Sync + 'static,
{
    with_list(&state, TaskList::get_all).await.map(Json)
}

/// GET /tasks/incomplete - List outstanding tasks
async fn list_incomplete<S>(State(state): State<AppState<S>>) -> Result<Json<Vec<Task>>, ApiError>
where
    S: TaskStore + Send + Sync + 'static,
{
    with_list(&state, TaskList::get_outstanding).await.map(Json)
}

/// GET /tasks/{id} - Get a single task
async fn get_task<S>(
    State(state): State<AppState<S>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Task>, ApiError>
where
    S: TaskStore + Send + Sync + 'static,
{
    let id = parse_id(&raw_id)?;
    with_list(&state, move |list| list.get_one(id)).await.map(Json)
}

/// POST /tasks - Create a new task
async fn create_task<S>(
    State(state): State<AppState<S>>,
    body: Bytes,
) -> Result<StatusCode, ApiError>
where
    S: TaskStore + Send + Sync + 'static,
{
    let req: CreateTaskRequest = serde_json::from_slice(&body)
        .map_err(|e| api_error(StatusCode::BAD_REQUEST, format!("invalid request body: {e}")))?;

    let id = with_list(&state, move |list| list.add(&req.name)).await?;
    tracing::info!(%id, "task created");

    Ok(StatusCode::ACCEPTED)
}

/// POST /tasks/{id} - Toggle a task between complete and incomplete
async fn toggle_task<S>(
    State(state): State<AppState<S>>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError>
where
    S: TaskStore + Send + Sync + 'static,
{
    let id = parse_id(&raw_id)?;
    with_list(&state, move |list| list.toggle_status(id)).await?;
    Ok(StatusCode::ACCEPTED)
}

/// DELETE /tasks/{id} - Delete a task
async fn delete_task<S>(
    State(state): State<AppState<S>>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError>
where
    S: TaskStore + Send + Sync + 'static,
{
    let id = parse_id(&raw_id)?;
    with_list(&state, move |list| list.delete(id)).await?;
    tracing::info!(%id, "task deleted");
    Ok(StatusCode::ACCEPTED)
}

/// Routes for the task endpoints.
pub fn router<S>() -> Router<AppState<S>>
where
    S: TaskStore + Send + Sync + 'static,
{
    Router::new()
        .route("/tasks", get(list_tasks::<S>).post(create_task::<S>))
        .route("/tasks/incomplete", get(list_incomplete::<S>))
        .route("/tasks/{id}", get(get_task::<S>).post(toggle_task::<S>).delete(delete_task::<S>))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request},
        response::Response,
    };
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::server::app;
    use crate::tasks::{MemoryTaskStore, SqliteTaskStore};

    fn memory_app() -> (Arc<TaskList<MemoryTaskStore>>, Router) {
        let list = Arc::new(TaskList::new(MemoryTaskStore::new()));
        (Arc::clone(&list), app(list))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                builder = builder.header("Content-Type", "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };
        app.clone().oneshot(builder.body(body).unwrap()).await.unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn content_type(response: &Response) -> &str {
        response.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap()
    }

    #[tokio::test]
    async fn get_tasks_returns_every_task() {
        let (list, app) = memory_app();
        list.add("Task 1").unwrap();
        list.add("Task 2").unwrap();
        list.toggle_status(TaskId::new(2)).unwrap();

        let response = send(&app, "GET", "/tasks", None).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(content_type(&response), "application/json");
        assert_eq!(
            json_body(response).await,
            json!([
                {"id": 1, "name": "Task 1", "complete": false},
                {"id": 2, "name": "Task 2", "complete": true}
            ])
        );
    }

    #[tokio::test]
    async fn get_tasks_on_empty_store_is_empty_array() {
        let (_list, app) = memory_app();
        let response = send(&app, "GET", "/tasks", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!([]));
    }

    #[tokio::test]
    async fn get_incomplete_returns_outstanding_tasks() {
        let (list, app) = memory_app();
        list.add("Task 1").unwrap();
        list.add("Task 2").unwrap();
        list.toggle_status(TaskId::new(2)).unwrap();

        let response = send(&app, "GET", "/tasks/incomplete", None).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!([{"id": 1, "name": "Task 1", "complete": false}]));
    }

    #[tokio::test]
    async fn get_single_task() {
        let (list, app) = memory_app();
        list.add("Task 1").unwrap();

        let response = send(&app, "GET", "/tasks/1", None).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!({"id": 1, "name": "Task 1", "complete": false}));
    }

    #[tokio::test]
    async fn invalid_or_missing_ids_are_not_found() {
        let (list, app) = memory_app();
        list.add("Task 1").unwrap();

        for uri in ["/tasks/0", "/tasks/-1", "/tasks/abc", "/tasks/2"] {
            let response = send(&app, "GET", uri, None).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "GET {uri}");
            assert_eq!(content_type(&response), "application/json");
            assert!(json_body(response).await["error"].is_string());

            let response = send(&app, "POST", uri, None).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "POST {uri}");

            let response = send(&app, "DELETE", uri, None).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "DELETE {uri}");
        }

        // Nothing was touched.
        assert_eq!(list.get_all().unwrap().len(), 1);
        assert!(!list.get_one(TaskId::new(1)).unwrap().complete);
    }

    #[tokio::test]
    async fn create_toggle_and_list() {
        let (_list, app) = memory_app();

        let response = send(&app, "POST", "/tasks", Some(json!({"Name": "New Task"}))).await;
        assert_eq!(response.status(), StatusCode::ACCEPTED);
        assert_eq!(content_type(&response), "application/json");

        let response = send(&app, "GET", "/tasks", None).await;
        assert_eq!(json_body(response).await, json!([{"id": 1, "name": "New Task", "complete": false}]));

        let response = send(&app, "POST", "/tasks/1", None).await;
        assert_eq!(response.status(), StatusCode::ACCEPTED);

        let response = send(&app, "GET", "/tasks", None).await;
        assert_eq!(json_body(response).await, json!([{"id": 1, "name": "New Task", "complete": true}]));
    }

    #[tokio::test]
    async fn create_accepts_lowercase_name() {
        let (list, app) = memory_app();

        let response = send(&app, "POST", "/tasks", Some(json!({"name": "lower"}))).await;

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        assert_eq!(list.get_one(TaskId::new(1)).unwrap().name, "lower");
    }

    #[tokio::test]
    async fn create_with_bad_body_is_bad_request() {
        let (list, app) = memory_app();

        for body in [json!({"Title": "wrong key"}), json!("just a string"), json!({"Name": 5})] {
            let response = send(&app, "POST", "/tasks", Some(body)).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }

        let request =
            Request::builder().method("POST").uri("/tasks").body(Body::from("{not json")).unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(content_type(&response), "application/json");

        assert!(list.get_all().unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_removes_task_without_renumbering() {
        let (list, app) = memory_app();
        for name in ["Task 1", "Task 2", "Task 3"] {
            list.add(name).unwrap();
        }

        let response = send(&app, "DELETE", "/tasks/2", None).await;
        assert_eq!(response.status(), StatusCode::ACCEPTED);

        let response = send(&app, "GET", "/tasks", None).await;
        assert_eq!(
            json_body(response).await,
            json!([
                {"id": 1, "name": "Task 1", "complete": false},
                {"id": 3, "name": "Task 3", "complete": false}
            ])
        );

        let response = send(&app, "DELETE", "/tasks/2", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn storage_failure_is_internal_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let db_path = dir.path().join("tasks.db");
        let list = Arc::new(TaskList::new(SqliteTaskStore::new(&db_path).unwrap()));
        let app = app(list);

        // Replace the database with something SQLite cannot read.
        std::fs::remove_file(&db_path).unwrap();
        std::fs::write(&db_path, "this is not a valid sqlite database").unwrap();

        let response = send(&app, "GET", "/tasks", None).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(content_type(&response), "application/json");
    }
}
