use std::sync::Arc;

use axum::http::StatusCode;
use axum::{Extension, Json};

use super::feed;
use super::types::{IngestConfig, IngestStatusResponse, RefreshResponse};
use crate::catalog::store::CatalogStore;

pub async fn handle_refresh(
    Extension(catalog): Extension<Arc<CatalogStore>>,
    Extension(config): Extension<Arc<IngestConfig>>,
) -> (StatusCode, Json<RefreshResponse>) {
    match feed::refresh(&catalog, &config).await {
        Ok(count) => (
            StatusCode::OK,
            Json(RefreshResponse {
                status: "refreshed".to_string(),
                count,
            }),
        ),
        Err(err) => {
            tracing::error!("Feed refresh failed: {:?}", err);
            (
                StatusCode::BAD_GATEWAY,
                Json(RefreshResponse {
                    status: "fetch_failed".to_string(),
                    count: catalog.len().await,
                }),
            )
        }
    }
}

pub async fn handle_ingest_status(
    Extension(catalog): Extension<Arc<CatalogStore>>,
    Extension(config): Extension<Arc<IngestConfig>>,
) -> Json<IngestStatusResponse> {
    let book_count = catalog.len().await;
    let status = if book_count == 0 { "empty" } else { "ready" };

    Json(IngestStatusResponse {
        status: status.to_string(),
        book_count,
        cache_present: config.cache_path.exists(),
    })
}
