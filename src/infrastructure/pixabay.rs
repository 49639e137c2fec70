// SPDX-License-Identifier: MPL-2.0
//! Pixabay search adapter.
//!
//! Implements [`ImageSearch`] against the Pixabay REST API:
//! `GET {endpoint}?key=..&q=..&image_type=..&per_page=..&safesearch=..`.
//! Only the `hits` array of the response is used.

use crate::application::port::{ImageSearch, SearchError, SearchFuture};
use crate::config::{self, Config, ImageType};
use crate::domain::gallery::ImageRecord;
use crate::infrastructure::http;
use reqwest::Url;
use serde::Deserialize;

/// Resolved search parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSettings {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub image_type: ImageType,
    pub per_page: u32,
    pub safesearch: bool,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self::from_config(&Config::default(), None)
    }
}

impl SearchSettings {
    /// Builds settings from the config file.
    ///
    /// The API key is taken from, in order: `api_key_override` (the CLI),
    /// the `ICED_GALLERY_API_KEY` environment variable, the config file.
    #[must_use]
    pub fn from_config(config: &Config, api_key_override: Option<String>) -> Self {
        let env_key = std::env::var(config::ENV_API_KEY).ok();
        Self::resolve(config, api_key_override, env_key)
    }

    fn resolve(config: &Config, cli_key: Option<String>, env_key: Option<String>) -> Self {
        let api_key = [cli_key, env_key, config.search.api_key.clone()]
            .into_iter()
            .flatten()
            .map(|key| key.trim().to_string())
            .find(|key| !key.is_empty());

        Self {
            endpoint: config
                .search
                .endpoint
                .clone()
                .filter(|endpoint| !endpoint.trim().is_empty())
                .unwrap_or_else(|| config::DEFAULT_SEARCH_ENDPOINT.to_string()),
            api_key,
            image_type: config.search.image_type.unwrap_or_default(),
            per_page: config.per_page(),
            safesearch: config.search.safesearch.unwrap_or(false),
        }
    }

    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Builds the request URL for `query`. The query is URL-encoded.
    pub fn request_url(&self, query: &str) -> std::result::Result<Url, SearchError> {
        let per_page = self.per_page.to_string();
        let params = [
            ("key", self.api_key.as_deref().unwrap_or_default()),
            ("q", query),
            ("image_type", self.image_type.as_query_value()),
            ("per_page", per_page.as_str()),
            ("safesearch", if self.safesearch { "true" } else { "false" }),
        ];
        Url::parse_with_params(&self.endpoint, &params)
            .map_err(|err| SearchError::Transport(format!("invalid endpoint: {err}")))
    }
}

// =============================================================================
// Response decoding
// =============================================================================

#[derive(Debug, Deserialize)]
struct SearchResponse {
    hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
struct Hit {
    id: u64,
    #[serde(rename = "previewURL", default)]
    preview_url: Option<String>,
    #[serde(rename = "webformatURL")]
    webformat_url: String,
    user: String,
    user_id: u64,
    #[serde(rename = "type")]
    kind: String,
    tags: String,
    views: u64,
    downloads: u64,
    likes: u64,
}

impl From<Hit> for ImageRecord {
    fn from(hit: Hit) -> Self {
        Self {
            id: hit.id,
            preview_url: hit.preview_url.filter(|url| !url.trim().is_empty()),
            display_url: hit.webformat_url,
            uploader: hit.user,
            uploader_id: hit.user_id,
            kind: hit.kind,
            tags: hit.tags,
            views: hit.views,
            downloads: hit.downloads,
            likes: hit.likes,
        }
    }
}

/// Decodes a Pixabay response body into records, keeping provider order.
///
/// Unknown fields are ignored.
pub fn parse_hits(body: &[u8]) -> std::result::Result<Vec<ImageRecord>, SearchError> {
    let response: SearchResponse =
        serde_json::from_slice(body).map_err(|err| SearchError::Decode(err.to_string()))?;
    Ok(response.hits.into_iter().map(ImageRecord::from).collect())
}

// =============================================================================
// PixabayClient
// =============================================================================

/// [`ImageSearch`] implementation backed by the Pixabay API.
#[derive(Debug, Clone)]
pub struct PixabayClient {
    settings: SearchSettings,
}

impl PixabayClient {
    #[must_use]
    pub fn new(settings: SearchSettings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }
}

impl ImageSearch for PixabayClient {
    fn search(&self, query: &str) -> SearchFuture {
        let url = self.settings.request_url(query);
        let query = query.to_string();

        Box::pin(async move {
            let url = url?;
            let client = http::shared_client()
                .map_err(|err| SearchError::Transport(err.to_string()))?;
            tracing::debug!(%query, "sending search request");

            let response = client
                .get(url)
                .send()
                .await
                .map_err(|err| SearchError::Transport(err.without_url().to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(SearchError::Status(status.as_u16()));
            }

            let body = response
                .bytes()
                .await
                .map_err(|err| SearchError::Transport(err.without_url().to_string()))?;
            let records = parse_hits(&body)?;
            tracing::debug!(%query, count = records.len(), "search completed");
            Ok(records)
        })
    }
}
