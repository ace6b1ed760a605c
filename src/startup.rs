use std::sync::Arc;
use std::time::Duration;

use axum::{Router, http::header, middleware};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    api::{
        handlers::{AppState, api_routes},
        middleware::log_requests,
        schema::build_schema,
    },
    config::Config,
    core::{constants::DEMO_USERS, models::User, services::UserService},
    infrastructure::storage::in_memory::InMemoryStorage,
};

pub fn build_storage(config: &Config) -> InMemoryStorage {
    if config.seed_demo_data {
        InMemoryStorage::with_users(
            DEMO_USERS
                .iter()
                .map(|(id, name, email)| User::new(*id, *name, *email))
                .collect(),
        )
    } else {
        InMemoryStorage::new()
    }
}

pub fn build_state(config: &Config) -> AppState {
    let service = Arc::new(UserService::new(build_storage(config)));
    AppState {
        schema: build_schema(service),
        environment: config.environment,
    }
}

pub fn build_app(state: AppState) -> Router {
    api_routes(state)
        .layer(middleware::from_fn(log_requests))
        .layer(CompressionLayer::new()) // Gzip compression
        .layer(TimeoutLayer::new(Duration::from_secs(30))) // 30-second timeout
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([http::Method::GET, http::Method::POST])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT]),
        )
        .layer(TraceLayer::new_for_http()) // Request tracing
}
