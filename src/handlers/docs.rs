//! API documentation: the embedded UI bundle and the generated OpenAPI document.

use crate::api::ApiDoc;
use crate::error::AppError;
use axum::{
    extract::Path,
    http::header,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use rust_embed::RustEmbed;
use utoipa::OpenApi;

#[derive(RustEmbed)]
#[folder = "docs-ui/"]
pub struct DocsAssets;

fn serve_asset(path: &str) -> Response {
    match DocsAssets::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            (
                [
                    (header::CONTENT_TYPE, mime.to_string()),
                    (header::CACHE_CONTROL, "no-cache".to_string()),
                ],
                content.data.into_owned(),
            )
                .into_response()
        }
        None => {
            tracing::debug!(path, "docs asset not found");
            AppError::NotFound(format!("no docs asset at {}", path)).into_response()
        }
    }
}

/// GET /docs: the UI loads its assets relative to `/docs/`.
pub async fn docs_redirect() -> Redirect {
    Redirect::permanent("/docs/")
}

pub async fn docs_index() -> Response {
    serve_asset("index.html")
}

pub async fn docs_asset(Path(path): Path<String>) -> Response {
    serve_asset(&path)
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use crate::test_utils::create_memory_test_server;
    use axum::http::StatusCode;
    use serde_json::Value;

    #[tokio::test]
    async fn serves_openapi_document() {
        let server = create_memory_test_server();
        let response = server.get("/docs/openapi.json").await;
        response.assert_status_ok();
        let doc: Value = response.json();
        assert!(doc["openapi"].as_str().unwrap().starts_with("3."));
        assert!(doc["paths"].get("/pets/{id}").is_some());
    }

    #[tokio::test]
    async fn serves_index_and_assets_verbatim() {
        let server = create_memory_test_server();

        let index = server.get("/docs/").await;
        index.assert_status_ok();
        assert_eq!(index.header("content-type"), "text/html");
        assert!(index.text().contains("<!DOCTYPE html>"));

        let script = server.get("/docs/init.js").await;
        script.assert_status_ok();
        assert!(script.header("content-type").to_str().unwrap().contains("javascript"));
        assert!(script.text().contains("openapi.json"));

        let css = server.get("/docs/docs.css").await;
        assert_eq!(css.header("content-type"), "text/css");
    }

    #[tokio::test]
    async fn missing_asset_is_404_and_bare_prefix_redirects() {
        let server = create_memory_test_server();
        let missing = server.get("/docs/nope.png").await;
        missing.assert_status_not_found();
        let body: Value = missing.json();
        assert_eq!(body["error"]["code"], "not_found");
        assert!(body["error"].get("details").is_none());

        let redirect = server.get("/docs").await;
        redirect.assert_status(StatusCode::PERMANENT_REDIRECT);
        assert_eq!(redirect.header("location"), "/docs/");
    }
}
