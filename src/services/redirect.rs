//! Redirect chasing for QR payloads

use reqwest::{Client, Url, redirect::Policy};

use crate::constants::MAX_REDIRECT_HOPS;

#[derive(Clone)]
pub struct RedirectResolver {
    http: Client,
}

impl RedirectResolver {
    pub fn new() -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .redirect(Policy::limited(MAX_REDIRECT_HOPS))
            .build()?;
        Ok(Self { http })
    }

    /// Follow redirects from `url` and return where they land.
    ///
    /// This never fails. Transport errors, a 4xx/5xx landing page, too many
    /// hops or a `url` that does not parse all hand back the input unchanged,
    /// as does a request that was not redirected at all.
    pub async fn resolve(&self, url: &str) -> String {
        match self.follow(url).await {
            Ok(Some(landing)) => landing,
            Ok(None) => url.to_string(),
            Err(e) => {
                log::warn!("[redirect] Could not follow {}: {}", url, e);
                url.to_string()
            }
        }
    }

    async fn follow(&self, url: &str) -> Result<Option<String>, reqwest::Error> {
        let requested = Url::parse(url).ok();
        let resp = self.http.get(url).send().await?.error_for_status()?;

        if requested.as_ref() == Some(resp.url()) {
            return Ok(None);
        }
        Ok(Some(resp.url().to_string()))
    }
}
