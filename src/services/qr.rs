//! QR code scanning for carousel images
//!
//! Fetches an image, looks for a QR symbol in it and chases the decoded
//! payload through [`RedirectResolver`]. Every failure along the way is
//! logged and reported as "no QR code".

use image::ImageReader;
use reqwest::{Client, StatusCode};
use std::future::Future;
use std::io::Cursor;
use thiserror::Error;

use super::redirect::RedirectResolver;

#[derive(Debug, Error)]
pub enum QrError {
    #[error("image fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("image fetch returned {0}")]
    Status(StatusCode),
    #[error("image decode failed: {0}")]
    Image(#[from] image::ImageError),
    #[error("detection task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Looks up the QR target embedded in an image, if any
pub trait QrLookup: Send + Sync {
    fn lookup(&self, image_url: &str) -> impl Future<Output = Option<String>> + Send;
}

#[derive(Clone)]
pub struct QrDecoder {
    http: Client,
    resolver: RedirectResolver,
}

impl QrDecoder {
    pub fn new(http: Client, resolver: RedirectResolver) -> Self {
        Self { http, resolver }
    }

    /// Scan the image at `image_url` and resolve the QR payload it carries.
    pub async fn decode(&self, image_url: &str) -> Option<String> {
        let payload = match self.scan(image_url).await {
            Ok(Some(payload)) => payload,
            Ok(None) => {
                log::debug!("[qr] No QR code in {}", image_url);
                return None;
            }
            Err(e) => {
                log::warn!("[qr] Scan failed for {}: {}", image_url, e);
                return None;
            }
        };

        // Payloads are not checked for URL shape; the resolver hands back
        // anything it cannot request.
        Some(self.resolver.resolve(&payload).await)
    }

    async fn scan(&self, image_url: &str) -> Result<Option<String>, QrError> {
        let resp = self.http.get(image_url).send().await?;
        if !resp.status().is_success() {
            return Err(QrError::Status(resp.status()));
        }
        let data = resp.bytes().await?;

        // Decoding and detection are CPU-bound; run them off the reactor
        let payload = tokio::task::spawn_blocking(move || detect(&data)).await??;
        Ok(payload)
    }
}

impl QrLookup for QrDecoder {
    fn lookup(&self, image_url: &str) -> impl Future<Output = Option<String>> + Send {
        self.decode(image_url)
    }
}

/// Decode `data` as an image and return the first non-empty QR payload in it.
pub fn detect(data: &[u8]) -> Result<Option<String>, image::ImageError> {
    let img = ImageReader::new(Cursor::new(data))
        .with_guessed_format()?
        .decode()?
        .to_luma8();

    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
        img.width() as usize,
        img.height() as usize,
        |x, y| img.get_pixel(x as u32, y as u32)[0],
    );

    for grid in prepared.detect_grids() {
        match grid.decode() {
            Ok((_, content)) if !content.is_empty() => return Ok(Some(content)),
            Ok(_) => {}
            Err(e) => log::debug!("[qr] Grid decode failed: {:?}", e),
        }
    }

    Ok(None)
}
