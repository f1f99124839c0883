use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Json, Response};
use tracing::{debug, error, warn};

use crate::gallery::render::{render_error_page, render_page};
use crate::gallery::{self, GalleryError, GalleryItem, View, SCRIPT_NAME};

use super::models::*;
use super::AppState;

// ==================== Health ====================

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

// ==================== Gallery Page ====================

pub async fn gallery_page(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Html<String>, AppError> {
    let view = View::resolve(last_view(&params));
    debug!(view = %view, "rendering gallery");

    let items = spawn_scan(state, view).await?;
    Ok(Html(render_page(SCRIPT_NAME, &items).into_string()))
}

/// A repeated `view` key resolves to its last value.
fn last_view(params: &[(String, String)]) -> Option<&str> {
    params
        .iter()
        .rev()
        .find(|(key, _)| key == "view")
        .map(|(_, value)| value.as_str())
}

// ==================== Static Files ====================

pub async fn serve_file(
    State(state): State<Arc<AppState>>,
    Path(path): Path<String>,
) -> Result<Response, AppError> {
    let output_dir = state.config.output_dir();

    let name = path.rsplit('/').next().unwrap_or_default();
    if gallery::is_excluded(name) {
        return Err(AppError::NotFound);
    }

    // Path traversal protection: canonicalize and verify prefix
    let canonical = output_dir
        .join(&path)
        .canonicalize()
        .map_err(|_| AppError::NotFound)?;

    if !canonical.starts_with(output_dir) {
        warn!(path = %path, "refusing path outside output directory");
        return Ok(StatusCode::FORBIDDEN.into_response());
    }

    // A link with an innocent name may still resolve to an excluded file
    let target_excluded = canonical
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(gallery::is_excluded);
    if target_excluded || !canonical.is_file() {
        return Err(AppError::NotFound);
    }

    let bytes = tokio::fs::read(&canonical)
        .await
        .map_err(|_| AppError::NotFound)?;

    let content_type = mime_guess::from_path(&canonical)
        .first_or_octet_stream()
        .to_string();

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, content_type.as_str()),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        bytes,
    )
        .into_response())
}

// ==================== Helpers ====================

/// Run the directory scan on the blocking pool.
async fn spawn_scan(state: Arc<AppState>, view: View) -> Result<Vec<GalleryItem>, AppError> {
    tokio::task::spawn_blocking(move || gallery::load(&state.config, &view))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
        .map_err(AppError::from)
}

// ==================== Error Type ====================

#[derive(Debug)]
pub enum AppError {
    NotFound,
    Unavailable(String),
    Internal(String),
}

impl From<GalleryError> for AppError {
    fn from(err: GalleryError) -> Self {
        let msg = match std::error::Error::source(&err) {
            Some(source) => format!("{}: {}", err, source),
            None => err.to_string(),
        };
        AppError::Unavailable(msg)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND.into_response(),
            AppError::Unavailable(msg) => {
                error!("gallery unavailable: {}", msg);
                let page = render_error_page().into_string();
                (StatusCode::SERVICE_UNAVAILABLE, Html(page)).into_response()
            }
            AppError::Internal(msg) => {
                error!("internal error: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
