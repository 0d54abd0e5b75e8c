//! HTTP client shared by the feeds.

use std::time::Duration;

use clap::crate_version;
use reqwest::{
    header,
    header::{HeaderMap, HeaderValue},
};
use serde::de::DeserializeOwned;

use crate::prelude::*;

#[must_use]
#[derive(Clone)]
pub struct Client(reqwest::Client);

impl Client {
    pub fn new(timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            HeaderValue::from_static(concat!("disastermap / ", crate_version!(), " (Rust)")),
        );
        reqwest::Client::builder()
            .gzip(true)
            .use_rustls_tls()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map(Self)
            .context("failed to build an HTTP client")
    }

    /// Fetch and deserialize a JSON document.
    #[instrument(skip_all, fields(url = %url), err(level = Level::DEBUG))]
    pub async fn get_json<R: DeserializeOwned>(&self, url: &Url) -> Result<R> {
        debug!("Fetching…");
        self.0
            .get(url.clone())
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .with_context(|| format!("failed to request `{url}`"))?
            .error_for_status()
            .with_context(|| format!("`{url}` responded with an error"))?
            .json()
            .await
            .with_context(|| format!("failed to deserialize the response from `{url}`"))
    }
}
