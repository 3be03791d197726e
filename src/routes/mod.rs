//! Route tables and the assembled application router.

mod common;
mod docs;
mod pets;

pub use common::common_routes;
pub use docs::docs_routes;
pub use pets::pet_routes;

use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::{Method, Uri},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("no route for {}", uri.path()))
}

async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::MethodNotAllowed(format!("{} {}", method, uri.path()))
}

/// Pet, documentation and operational routes with request logging and a body size limit.
pub fn app_router(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(pet_routes(state.clone()))
        .merge(docs_routes())
        .merge(common_routes(state))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(body_limit)),
        )
}

#[cfg(test)]
mod tests {
    use crate::test_utils::create_memory_test_server;
    use axum::http::StatusCode;
    use serde_json::Value;

    #[tokio::test]
    async fn unknown_route_gets_json_404() {
        let server = create_memory_test_server();
        let response = server.get("/owners").await;
        response.assert_status_not_found();
        let body: Value = response.json();
        assert_eq!(body["error"]["code"], "not_found");
    }

    #[tokio::test]
    async fn wrong_method_on_known_path_gets_json_405() {
        let server = create_memory_test_server();
        let response = server.post("/pets/1").json(&serde_json::json!({"name": "Rex"})).await;
        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
        let body: Value = response.json();
        assert_eq!(body["error"]["code"], "method_not_allowed");

        let response = server.put("/pets").json(&serde_json::json!({"name": "Rex"})).await;
        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
        let body: Value = response.json();
        assert_eq!(body["error"]["code"], "method_not_allowed");
    }

    #[tokio::test]
    async fn oversized_body_is_refused() {
        let server = create_memory_test_server();
        let name = "x".repeat(128 * 1024);
        let response = server.post("/pets").json(&serde_json::json!({"name": name})).await;
        response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
        let body: Value = response.json();
        assert_eq!(body["error"]["code"], "payload_too_large");
    }
}
