// SPDX-License-Identifier: MPL-2.0
//! Social share targets.
//!
//! Each provider exposes a web intent URL that takes the shared address as a
//! query parameter. Opening it is handed to the OS default browser.

use crate::error::{Error, Result};
use reqwest::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShareTarget {
    WhatsApp,
    LinkedIn,
    Twitter,
}

impl ShareTarget {
    /// All targets, in display order.
    pub const ALL: [ShareTarget; 3] = [
        ShareTarget::WhatsApp,
        ShareTarget::LinkedIn,
        ShareTarget::Twitter,
    ];

    /// i18n key of the button label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ShareTarget::WhatsApp => "share-whatsapp",
            ShareTarget::LinkedIn => "share-linkedin",
            ShareTarget::Twitter => "share-twitter",
        }
    }

    /// Intent endpoint and the name of its address parameter.
    fn intent(self) -> (&'static str, &'static str) {
        match self {
            ShareTarget::WhatsApp => ("https://api.whatsapp.com/send", "text"),
            ShareTarget::LinkedIn => ("https://www.linkedin.com/sharing/share-offsite/", "url"),
            ShareTarget::Twitter => ("https://twitter.com/intent/tweet", "url"),
        }
    }
}

/// Builds the provider share URL seeded with `address`.
pub fn share_url(target: ShareTarget, address: &str) -> Result<Url> {
    let (endpoint, param) = target.intent();
    Url::parse_with_params(endpoint, &[(param, address)])
        .map_err(|err| Error::Config(format!("invalid share endpoint: {err}")))
}

/// Opens the share flow for `target` in the default browser.
///
/// Runs the OS opener on the blocking pool so the UI thread never waits on it.
pub async fn open_share(target: ShareTarget, address: String) -> Result<()> {
    let url = share_url(target, &address)?;
    tracing::debug!(?target, %url, "opening share url");

    tokio::task::spawn_blocking(move || open::that_detached(url.as_str()))
        .await
        .map_err(|err| Error::Io(err.to_string()))??;
    Ok(())
}
