//! Instagram feed endpoints

mod dto;

pub use dto::{FeedResponse, MediaItemResponse, PostResponse};

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use std::sync::Arc;

use crate::AppState;
use crate::constants::FEED_LIMIT;
use crate::domain::posts;
use crate::services::error::{ApiError, LogErr};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/instagram/{username}", get(list_posts))
        .route("/api/instagram/{username}/gform", get(list_gform_posts))
}

/// GET /api/instagram/{username} - Latest posts, carousels annotated with QR targets
async fn list_posts(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<Json<FeedResponse>, ApiError> {
    let edges = state
        .feed
        .fetch_timeline(&username)
        .await
        .log_500("[instagram] Feed fetch failed")?;

    let nodes = posts::latest(edges, FEED_LIMIT);
    let formatted = posts::format_posts(nodes, &state.qr).await;

    Ok(Json(FeedResponse::ok(formatted)))
}

/// GET /api/instagram/{username}/gform - Every post whose caption mentions "gform"
async fn list_gform_posts(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<Json<FeedResponse>, ApiError> {
    let edges = state
        .feed
        .fetch_timeline(&username)
        .await
        .log_500("[instagram] Feed fetch failed")?;

    let nodes = posts::gform_only(edges);
    let formatted = posts::format_posts(nodes, &state.qr).await;

    Ok(Json(FeedResponse::ok(formatted)))
}
