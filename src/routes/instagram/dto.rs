//! API response DTOs for Instagram feeds

use serde::Serialize;

use crate::domain::posts::{MediaItem, Post};

/// Success envelope: `{success: true, data: [...]}`
#[derive(Debug, Serialize)]
pub struct FeedResponse {
    pub success: bool,
    pub data: Vec<PostResponse>,
}

impl FeedResponse {
    pub fn ok(posts: Vec<Post>) -> Self {
        Self {
            success: true,
            data: posts.into_iter().map(PostResponse::from).collect(),
        }
    }
}

/// Carousel child API response
#[derive(Debug, Clone, Serialize)]
pub struct MediaItemResponse {
    pub id: String,
    pub is_video: bool,
    pub image_url: String,
    pub video_url: Option<String>,
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qr_code_url: Option<String>,
}

impl From<MediaItem> for MediaItemResponse {
    fn from(m: MediaItem) -> Self {
        Self {
            id: m.id,
            is_video: m.is_video,
            image_url: m.image_url,
            video_url: m.video_url,
            thumbnail_url: m.thumbnail_url,
            qr_code_url: m.qr_code_url,
        }
    }
}

/// Post API response
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: String,
    pub shortcode: String,
    pub caption: String,
    pub image_url: String,
    pub likes: u64,
    pub comments: u64,
    pub timestamp: i64,
    pub thumbnail_url: Option<String>,
    pub is_video: bool,
    pub video_url: Option<String>,
    pub is_carousel: bool,
    pub carousel_media: Vec<MediaItemResponse>,
}

impl From<Post> for PostResponse {
    fn from(p: Post) -> Self {
        Self {
            id: p.id,
            shortcode: p.shortcode,
            caption: p.caption,
            image_url: p.image_url,
            likes: p.likes,
            comments: p.comments,
            timestamp: p.timestamp,
            thumbnail_url: p.thumbnail_url,
            is_video: p.is_video,
            video_url: p.video_url,
            is_carousel: p.is_carousel,
            carousel_media: p
                .carousel_media
                .into_iter()
                .map(MediaItemResponse::from)
                .collect(),
        }
    }
}
