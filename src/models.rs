//! Upstream profile payloads (the platform's "edges"/"node" graph)

use serde::Deserialize;

use crate::constants::CAROUSEL_TYPENAME;

/// Body of `/{username}/?__a=1&__d=dis`. `graphql` is missing when the
/// endpoint serves a login wall instead of data.
#[derive(Debug, Deserialize)]
pub struct WebProfileResponse {
    pub graphql: Option<UserEnvelope>,
}

/// Body of `/api/v1/users/web_profile_info/`
#[derive(Debug, Deserialize)]
pub struct ProfileInfoResponse {
    pub data: UserEnvelope,
}

#[derive(Debug, Deserialize)]
pub struct UserEnvelope {
    pub user: ProfileUser,
}

#[derive(Debug, Deserialize)]
pub struct ProfileUser {
    pub edge_owner_to_timeline_media: Connection<TimelineNode>,
}

#[derive(Debug, Deserialize)]
pub struct Connection<T> {
    #[serde(default = "Vec::new")]
    pub edges: Vec<Edge<T>>,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self { edges: Vec::new() }
    }
}

#[derive(Debug, Deserialize)]
pub struct Edge<T> {
    pub node: T,
}

pub type TimelineEdge = Edge<TimelineNode>;

#[derive(Debug, Default, Deserialize)]
pub struct Count {
    #[serde(default)]
    pub count: u64,
}

#[derive(Debug, Default, Deserialize)]
pub struct CaptionNode {
    #[serde(default)]
    pub text: String,
}

/// One post on the profile timeline
#[derive(Debug, Deserialize)]
pub struct TimelineNode {
    pub id: String,
    #[serde(default)]
    pub shortcode: String,
    #[serde(rename = "__typename", default)]
    pub typename: String,
    #[serde(default)]
    pub display_url: String,
    pub thumbnail_src: Option<String>,
    #[serde(default)]
    pub is_video: bool,
    pub video_url: Option<String>,
    #[serde(default)]
    pub taken_at_timestamp: i64,
    #[serde(default)]
    pub edge_media_to_caption: Connection<CaptionNode>,
    pub edge_media_preview_like: Option<Count>,
    pub edge_media_to_comment: Option<Count>,
    pub edge_sidecar_to_children: Option<Connection<ChildNode>>,
}

impl TimelineNode {
    /// Text of the first caption edge, or "" when the post has none
    pub fn caption(&self) -> &str {
        self.edge_media_to_caption
            .edges
            .first()
            .map(|edge| edge.node.text.as_str())
            .unwrap_or("")
    }

    pub fn is_carousel(&self) -> bool {
        self.typename == CAROUSEL_TYPENAME
    }
}

/// One image or video inside a carousel post
#[derive(Debug, Deserialize)]
pub struct ChildNode {
    pub id: String,
    #[serde(default)]
    pub is_video: bool,
    #[serde(default)]
    pub display_url: String,
    pub video_url: Option<String>,
    pub thumbnail_src: Option<String>,
}
