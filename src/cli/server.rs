//! HTTP preview server for the listing and post pages

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Locale;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::BlogConfig;
use crate::error::{Error, Result};
use crate::pagination::{first_state, load_next, Page, PaginationState};
use crate::render::{parse_locale, ListingView, PostView};
use crate::source::ContentSource;

/// App state shared across handlers
#[derive(Clone)]
pub struct AppState {
    source: Arc<dyn ContentSource>,
    locale: Locale,
    words_per_minute: u32,
}

impl AppState {
    /// Create server state from a content source and site config
    pub fn new(source: Arc<dyn ContentSource>, config: &BlogConfig) -> Result<Self> {
        Ok(Self {
            source,
            locale: parse_locale(&config.locale)?,
            words_per_minute: config.words_per_minute,
        })
    }
}

/// Query string of the load-more endpoint
#[derive(Debug, Deserialize)]
struct LoadMoreQuery {
    /// Next-page cursor from a previous listing response
    #[serde(default)]
    cursor: Option<String>,
}

/// Response wrapper
#[derive(Debug, Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn error(msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

/// Error returned from handlers
struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            tracing::warn!("Request failed: {}", self.0);
        }
        (
            status,
            Json(ApiResponse::<()>::error(self.0.to_string())),
        )
            .into_response()
    }
}

type ApiResult<T> = std::result::Result<Json<ApiResponse<T>>, ApiError>;

/// Build the router
pub fn router(state: AppState) -> Router {
    // Build CORS layer - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/posts", get(list_posts))
        .route("/posts/more", get(load_more))
        .route("/posts/:uid", get(get_post))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Start the HTTP server
pub async fn serve(state: AppState, port: u16) -> Result<()> {
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::config(format!("Failed to bind to port {port}: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::config(format!("Server error: {e}")))?;

    Ok(())
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// First listing page
async fn list_posts(State(state): State<Arc<AppState>>) -> ApiResult<ListingView> {
    let listing = first_state(state.source.as_ref()).await?;
    let view = ListingView::render(&listing, state.locale)?;
    Ok(Json(ApiResponse::success(view)))
}

/// The page after `cursor`; a missing or empty cursor is `NoMoreResults`
async fn load_more(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LoadMoreQuery>,
) -> ApiResult<ListingView> {
    let start = PaginationState::initialize(Page::new(vec![], query.cursor));
    let listing = load_next(&start, state.source.as_ref()).await?;

    let view = ListingView::render(&listing, state.locale)?;
    Ok(Json(ApiResponse::success(view)))
}

/// A single post page
async fn get_post(
    State(state): State<Arc<AppState>>,
    Path(uid): Path<String>,
) -> ApiResult<PostView> {
    let document = state.source.get_by_uid(&uid).await?;
    let view = PostView::render(&document, state.locale, state.words_per_minute)?;
    Ok(Json(ApiResponse::success(view)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::{RawEntry, RawEntryData, RawPage};
    use crate::types::{Banner, PostDocument, PostDocumentData, Section, TextBlock};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    struct StaticSource;

    fn entry(uid: &str) -> RawEntry {
        RawEntry {
            uid: Some(uid.to_string()),
            first_publication_date: Some("2021-03-19T10:00:00+0000".to_string()),
            data: RawEntryData {
                title: uid.to_uppercase(),
                subtitle: String::new(),
                author: "Ana".to_string(),
            },
        }
    }

    #[async_trait]
    impl ContentSource for StaticSource {
        async fn first_page(&self) -> Result<RawPage> {
            Ok(RawPage::new(
                vec![entry("a")],
                Some("https://cms.example.com/p2".to_string()),
            ))
        }

        async fn fetch_page(&self, cursor: &str) -> Result<RawPage> {
            match cursor {
                "https://cms.example.com/p2" => Ok(RawPage::new(vec![entry("b")], None)),
                _ => Err(Error::http_status(500, "boom")),
            }
        }

        async fn get_by_uid(&self, uid: &str) -> Result<PostDocument> {
            if uid != "a" {
                return Err(Error::not_found(uid));
            }
            Ok(PostDocument {
                uid: Some("a".to_string()),
                first_publication_date: None,
                data: PostDocumentData {
                    title: "A".to_string(),
                    subtitle: None,
                    author: "Ana".to_string(),
                    banner: Banner {
                        url: "https://images.example.com/a.png".to_string(),
                    },
                    content: vec![Section::new("One two", vec![TextBlock::paragraph("three")])],
                },
            })
        }
    }

    fn app() -> Router {
        let mut config = BlogConfig::new("https://cms.example.com/api/v2");
        config.locale = "en-US".to_string();
        router(AppState::new(Arc::new(StaticSource), &config).unwrap())
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_first_page() {
        let (status, body) = get_json("/posts").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["posts"][0]["uid"], "a");
        assert_eq!(body["data"]["posts"][0]["publication_date"], "19 Mar 21");
        assert_eq!(body["data"]["has_more"], true);
        assert_eq!(body["data"]["next_cursor"], "https://cms.example.com/p2");
    }

    #[tokio::test]
    async fn test_next_page() {
        let (status, body) =
            get_json("/posts/more?cursor=https%3A%2F%2Fcms.example.com%2Fp2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["posts"][0]["uid"], "b");
        assert_eq!(body["data"]["has_more"], false);
    }

    #[tokio::test]
    async fn test_first_page_ignores_cursor_param() {
        let (status, body) = get_json("/posts?cursor=https%3A%2F%2Fcms.example.com%2Fp2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["posts"][0]["uid"], "a");
    }

    #[tokio::test]
    async fn test_empty_cursor_is_bad_request() {
        let (status, body) = get_json("/posts/more?cursor=").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_load_more_without_cursor_is_not_a_post_lookup() {
        let (status, body) = get_json("/posts/more").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], Error::NoMoreResults.to_string());
    }

    #[tokio::test]
    async fn test_upstream_failure_is_bad_gateway() {
        let (status, _) = get_json("/posts/more?cursor=https%3A%2F%2Fcms.example.com%2Fp9").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_post_page() {
        let (status, body) = get_json("/posts/a").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["reading_minutes"], 0);
        assert_eq!(body["data"]["sections"][0]["body_html"], "<p>three</p>");
    }

    #[tokio::test]
    async fn test_post_not_found() {
        let (status, body) = get_json("/posts/zzz").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Document 'zzz' not found");
    }
}
