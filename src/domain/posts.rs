//! Post domain - reshapes timeline nodes and annotates carousel images
//!
//! Formatting fans out: every post of a response and every child of a
//! carousel is processed concurrently with `join_all`, which yields results
//! in input order regardless of completion order.

use futures::future::join_all;

use crate::constants::GFORM_NEEDLE;
use crate::models::{ChildNode, TimelineEdge, TimelineNode};
use crate::services::qr::QrLookup;

#[derive(Debug, Clone, PartialEq)]
pub struct MediaItem {
    pub id: String,
    pub is_video: bool,
    pub image_url: String,
    pub video_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub qr_code_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
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
    /// Always equal to `!carousel_media.is_empty()`
    pub is_carousel: bool,
    pub carousel_media: Vec<MediaItem>,
}

/// Case-insensitive substring match on a caption
pub fn caption_mentions(caption: &str, needle: &str) -> bool {
    caption.to_lowercase().contains(&needle.to_lowercase())
}

/// The first `limit` posts, in upstream order
pub fn latest(edges: Vec<TimelineEdge>, limit: usize) -> Vec<TimelineNode> {
    edges.into_iter().take(limit).map(|edge| edge.node).collect()
}

/// Every post whose caption mentions "gform", in upstream order
pub fn gform_only(edges: Vec<TimelineEdge>) -> Vec<TimelineNode> {
    edges
        .into_iter()
        .map(|edge| edge.node)
        .filter(|node| caption_mentions(node.caption(), GFORM_NEEDLE))
        .collect()
}

pub async fn format_posts<Q: QrLookup>(nodes: Vec<TimelineNode>, qr: &Q) -> Vec<Post> {
    join_all(nodes.into_iter().map(|node| format_post(node, qr))).await
}

pub async fn format_post<Q: QrLookup>(node: TimelineNode, qr: &Q) -> Post {
    let caption = node.caption().to_string();
    let is_carousel_kind = node.is_carousel();

    let children = match node.edge_sidecar_to_children {
        Some(children) if is_carousel_kind => children.edges,
        _ => Vec::new(),
    };
    let carousel_media = join_all(children.into_iter().map(|edge| annotate_child(edge.node, qr))).await;

    Post {
        id: node.id,
        shortcode: node.shortcode,
        caption,
        image_url: node.display_url,
        likes: node.edge_media_preview_like.map(|c| c.count).unwrap_or(0),
        comments: node.edge_media_to_comment.map(|c| c.count).unwrap_or(0),
        timestamp: node.taken_at_timestamp,
        thumbnail_url: node.thumbnail_src,
        is_video: node.is_video,
        video_url: node.video_url,
        is_carousel: !carousel_media.is_empty(),
        carousel_media,
    }
}

async fn annotate_child<Q: QrLookup>(child: ChildNode, qr: &Q) -> MediaItem {
    let qr_code_url = qr.lookup(&child.display_url).await;

    MediaItem {
        id: child.id,
        is_video: child.is_video,
        image_url: child.display_url,
        video_url: child.video_url,
        thumbnail_url: child.thumbnail_src,
        qr_code_url,
    }
}
