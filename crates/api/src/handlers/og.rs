//! Handler for `GET /api/get-og-data`: Open Graph preview extraction.
//!
//! Fetches a caller-supplied URL (bounded by the configured timeout,
//! 10 seconds by default) and returns the page's Open Graph metadata for
//! link-type news previews.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tecnica_core::opengraph::{extract_og_data, OgData};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the OG endpoint.
#[derive(Debug, Deserialize)]
pub struct OgQuery {
    pub url: Option<String>,
}

/// GET /api/get-og-data?url=
///
/// - 400 when `url` is missing, unparsable, or not http(s)
/// - the upstream status when the fetch returns a non-success status
/// - 504 when the fetch exceeds the configured timeout
pub async fn get_og_data(
    State(state): State<AppState>,
    Query(params): Query<OgQuery>,
) -> AppResult<Json<DataResponse<OgData>>> {
    let raw = params
        .url
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or_else(|| AppError::BadRequest("Missing url parameter".into()))?;

    let url = reqwest::Url::parse(raw)
        .map_err(|_| AppError::BadRequest("Invalid URL format".into()))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(AppError::BadRequest("Invalid URL format".into()));
    }

    let response = state
        .http_client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                AppError::Upstream {
                    status: StatusCode::GATEWAY_TIMEOUT,
                    message: "Upstream fetch timed out".into(),
                }
            } else {
                AppError::Upstream {
                    status: StatusCode::BAD_GATEWAY,
                    message: format!("Upstream fetch failed: {e}"),
                }
            }
        })?;

    let upstream_status = response.status();
    if !upstream_status.is_success() {
        return Err(AppError::Upstream {
            status: StatusCode::from_u16(upstream_status.as_u16())
                .unwrap_or(StatusCode::BAD_GATEWAY),
            message: format!("Upstream returned status {upstream_status}"),
        });
    }

    let html = response.text().await.map_err(|e| AppError::Upstream {
        status: StatusCode::BAD_GATEWAY,
        message: format!("Failed to read upstream body: {e}"),
    })?;

    let data = extract_og_data(&html, url.as_str());
    Ok(Json(DataResponse { data }))
}
