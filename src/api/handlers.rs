use std::any::Any;
use std::panic::AssertUnwindSafe;

use async_graphql_axum::{GraphQLRequest, GraphQLResponse, rejection::GraphQLRejection};
use axum::{
    Json, Router,
    extract::State,
    http::Uri,
    response::{IntoResponse, Response},
    routing::get,
};
use futures::FutureExt;
use tracing::{debug, error, warn};

use crate::{
    api::{
        models::{ApiError, MessageResponse},
        schema::AppSchema,
    },
    config::Environment,
    core::{constants::BACKEND_HELLO_MESSAGE, errors::UsergraphError},
};

const LOG_PREVIEW_LEN: usize = 100;

#[derive(Clone)]
pub struct AppState {
    pub schema: AppSchema,
    pub environment: Environment,
}

// Define API routes
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/graphql", get(graphql_handler).post(graphql_handler))
        .route("/api/health", get(health))
        .route("/api/hello", get(hello))
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: BACKEND_HELLO_MESSAGE.to_string(),
    })
}

/// Executes one GraphQL request. Malformed bodies and resolver panics still
/// produce a structured `errors` body.
async fn graphql_handler(
    State(state): State<AppState>,
    uri: Uri,
    request: Result<GraphQLRequest, GraphQLRejection>,
) -> Response {
    let path = uri.path().to_string();
    let request = match request {
        Ok(request) => request.into_inner(),
        Err(rejection) => {
            warn!("Rejected GraphQL request on {}: {}", path, rejection.0);
            return ApiError::new(UsergraphError::InvalidRequest(rejection.0.to_string()), path).into_response();
        }
    };

    if !state.environment.is_production() {
        log_operation(&request);
    }

    execute_guarded(state.schema.execute(request), path).await
}

/// Awaits `execution`, turning a panic into an `INTERNAL_SERVER_ERROR` envelope
/// that carries the request path.
pub(crate) async fn execute_guarded<F>(execution: F, path: String) -> Response
where
    F: Future<Output = async_graphql::Response>,
{
    match AssertUnwindSafe(execution).catch_unwind().await {
        Ok(response) => GraphQLResponse::from(response).into_response(),
        Err(panic) => {
            let message = panic_message(panic.as_ref());
            error!("GraphQL execution panicked on {}: {}", path, message);
            ApiError::new(UsergraphError::InternalServerError(message), path).into_response()
        }
    }
}

fn log_operation(request: &async_graphql::Request) {
    let variables = if request.variables.is_empty() {
        "none".to_string()
    } else {
        let json = serde_json::to_string(&request.variables).unwrap_or_default();
        preview(&json, false)
    };
    debug!(
        query = %preview(&request.query, true),
        operation_name = ?request.operation_name,
        variables = %variables,
        "GraphQL operation received"
    );
}

/// First `LOG_PREVIEW_LEN` characters of `text`, optionally marking the cut.
pub(crate) fn preview(text: &str, mark_truncation: bool) -> String {
    let mut out: String = text.chars().take(LOG_PREVIEW_LEN).collect();
    if mark_truncation && text.chars().count() > LOG_PREVIEW_LEN {
        out.push_str("...");
    }
    out
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown GraphQL error".to_string()
    }
}
