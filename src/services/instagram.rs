use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::{Client, RequestBuilder, StatusCode};
use thiserror::Error;

use crate::config::Config;
use crate::constants::{PROFILE_INFO_HEADERS, WEB_PROFILE_HEADERS};
use crate::models::{ProfileInfoResponse, TimelineEdge, WebProfileResponse};

/// Characters left as-is in a username path segment
const USERNAME_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'.').remove(b'_').remove(b'-');

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Instagram returned status {0}")]
    Status(StatusCode),
    #[error("Invalid response format from Instagram: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Invalid response format from Instagram")]
    Shape,
    #[error("No feed sources configured")]
    NoSources,
}

/// One way of fetching a profile timeline. Sources are tried in order until
/// one returns the expected shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedSource {
    /// Public profile page with the `__a=1` JSON switch
    WebProfile,
    /// `web_profile_info` endpoint used by the web client
    ProfileInfoApi,
}

impl FeedSource {
    pub const DEFAULT_ORDER: [FeedSource; 2] = [FeedSource::WebProfile, FeedSource::ProfileInfoApi];

    pub fn name(&self) -> &'static str {
        match self {
            FeedSource::WebProfile => "web_profile",
            FeedSource::ProfileInfoApi => "profile_info_api",
        }
    }

    fn request(&self, client: &FeedClient, username: &str) -> RequestBuilder {
        let (builder, headers) = match self {
            FeedSource::WebProfile => {
                let url = format!(
                    "{}/{}/",
                    client.web_base_url,
                    utf8_percent_encode(username, USERNAME_SEGMENT)
                );
                let builder = client.http.get(url).query(&[("__a", "1"), ("__d", "dis")]);
                (builder, WEB_PROFILE_HEADERS)
            }
            FeedSource::ProfileInfoApi => {
                let url = format!("{}/api/v1/users/web_profile_info/", client.api_base_url);
                let builder = client.http.get(url).query(&[("username", username)]);
                (builder, PROFILE_INFO_HEADERS)
            }
        };

        headers
            .iter()
            .fold(builder, |builder, (name, value)| builder.header(*name, *value))
    }

    fn extract(&self, body: &[u8]) -> Result<Vec<TimelineEdge>, FeedError> {
        let envelope = match self {
            FeedSource::WebProfile => serde_json::from_slice::<WebProfileResponse>(body)?
                .graphql
                .ok_or(FeedError::Shape)?,
            FeedSource::ProfileInfoApi => serde_json::from_slice::<ProfileInfoResponse>(body)?.data,
        };
        Ok(envelope.user.edge_owner_to_timeline_media.edges)
    }
}

#[derive(Clone)]
pub struct FeedClient {
    http: Client,
    web_base_url: String,
    api_base_url: String,
    sources: Vec<FeedSource>,
}

impl FeedClient {
    pub fn new(http: Client, config: &Config) -> Self {
        Self {
            http,
            web_base_url: config.web_base_url.trim_end_matches('/').to_string(),
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            sources: FeedSource::DEFAULT_ORDER.to_vec(),
        }
    }

    /// Replace the ordered list of sources to try
    pub fn with_sources(mut self, sources: impl IntoIterator<Item = FeedSource>) -> Self {
        self.sources = sources.into_iter().collect();
        self
    }

    pub fn sources(&self) -> &[FeedSource] {
        &self.sources
    }

    /// Fetch `username`'s timeline edges, newest first. Returns the error of
    /// the last source tried when none succeeds.
    pub async fn fetch_timeline(&self, username: &str) -> Result<Vec<TimelineEdge>, FeedError> {
        let mut last_error = FeedError::NoSources;

        for source in &self.sources {
            match self.fetch_from(*source, username).await {
                Ok(edges) => {
                    log::debug!(
                        "[feed] {} returned {} posts for {}",
                        source.name(),
                        edges.len(),
                        username
                    );
                    return Ok(edges);
                }
                Err(e) => {
                    log::warn!("[feed] {} failed for {}: {}", source.name(), username, e);
                    last_error = e;
                }
            }
        }

        Err(last_error)
    }

    async fn fetch_from(
        &self,
        source: FeedSource,
        username: &str,
    ) -> Result<Vec<TimelineEdge>, FeedError> {
        let resp = source.request(self, username).send().await?;
        if !resp.status().is_success() {
            return Err(FeedError::Status(resp.status()));
        }
        let body = resp.bytes().await?;
        source.extract(&body)
    }
}
