//! Documentation routes: UI bundle under /docs/ and the OpenAPI document.

use crate::handlers::docs::{docs_asset, docs_index, docs_redirect, openapi_json};
use axum::{routing::get, Router};

pub fn docs_routes() -> Router {
    Router::new()
        .route("/docs", get(docs_redirect))
        .route("/docs/", get(docs_index))
        .route("/docs/openapi.json", get(openapi_json))
        .route("/docs/*path", get(docs_asset))
}
