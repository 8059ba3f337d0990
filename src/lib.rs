//! HTTP relay for public Instagram profile feeds.
//!
//! Posts are reshaped into a flat JSON form and carousel images are scanned
//! for QR codes, whose targets are resolved through their redirects.

pub mod config;
pub mod constants;
pub mod domain;
pub mod logging;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(test)]
mod test_support;

use axum::Router;
use reqwest::Client;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use config::Config;
use services::instagram::FeedClient;
use services::qr::QrDecoder;
use services::redirect::RedirectResolver;

#[derive(Clone)]
pub struct AppState {
    pub feed: FeedClient,
    pub qr: QrDecoder,
}

impl AppState {
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        let http = Client::builder().build()?;
        let resolver = RedirectResolver::new()?;

        Ok(Self {
            feed: FeedClient::new(http.clone(), config),
            qr: QrDecoder::new(http, resolver),
        })
    }
}

/// The full application router with CORS open to any origin
pub fn app(state: Arc<AppState>) -> Router {
    routes::build_routes()
        .layer(CorsLayer::permissive())
        .with_state(state)
}
