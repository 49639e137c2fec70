// SPDX-License-Identifier: MPL-2.0
//! Shared HTTP client.
//!
//! One `reqwest::Client` is built lazily and reused for searches, thumbnails
//! and downloads so connections are pooled.

use crate::error::{Error, Result};
use std::sync::OnceLock;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("IcedGallery/", env!("CARGO_PKG_VERSION"));

static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Builds a client with an explicit redirect policy and user agent.
pub fn build_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .build()
        .map_err(Error::from)
}

/// Returns the process-wide client, building it on first use.
pub fn shared_client() -> Result<reqwest::Client> {
    if let Some(client) = CLIENT.get() {
        return Ok(client.clone());
    }
    let client = build_client()?;
    Ok(CLIENT.get_or_init(|| client).clone())
}

/// Sends a GET request and fails on non-success statuses.
pub async fn get(url: &str) -> Result<reqwest::Response> {
    let response = shared_client()?.get(url).send().await?;

    if !response.status().is_success() {
        return Err(Error::Http(format!("HTTP status: {}", response.status())));
    }
    Ok(response)
}

/// Downloads the whole body at `url` into memory.
pub async fn fetch_bytes(url: &str) -> Result<Vec<u8>> {
    let bytes = get(url).await?.bytes().await?;
    Ok(bytes.to_vec())
}
