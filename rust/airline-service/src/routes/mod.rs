use axum::extract::OriginalUri;
use axum::http::{Method, Uri};
use axum::Router;

use crate::errors::AppError;
use crate::state::AppState;

pub mod v1;

/// Compose the whole HTTP surface. Called once before the listener starts;
/// the returned router is never mutated afterwards.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", Router::new().nest("/v1", v1::router()))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("no route for {}", uri.path()))
}

async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> AppError {
    AppError::MethodNotAllowed(format!("{method} is not supported on {}", uri.path()))
}
