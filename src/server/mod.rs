//! HTTP API over a task list.
//!
//! Every response, errors included, is served as `application/json`.

mod state;
mod tasks;

pub use state::AppState;
pub use tasks::{CreateTaskRequest, ErrorResponse};

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{header, HeaderValue};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::error::Result;
use crate::tasks::{TaskList, TaskStore};

/// Build the application router around a shared task list.
pub fn app<S>(list: Arc<TaskList<S>>) -> Router
where
    S: TaskStore + Send + Sync + 'static,
{
    Router::new()
        .merge(tasks::router())
        .with_state(AppState::new(list))
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        ))
        .layer(TraceLayer::new_for_http())
}

/// Serve the API on `addr` until the process is stopped.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve<S>(list: TaskList<S>, addr: SocketAddr) -> Result<()>
where
    S: TaskStore + Send + Sync + 'static,
{
    let app = app(Arc::new(list));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("task API listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
