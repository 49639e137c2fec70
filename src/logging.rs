// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber setup.
//!
//! Log output goes to stderr through `tracing-subscriber`'s fmt layer. The
//! filter directive is resolved from:
//! 1. `ICED_GALLERY_LOG` environment variable
//! 2. `RUST_LOG` environment variable
//! 3. Default: `"info"`

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter directive.
pub const ENV_LOG: &str = "ICED_GALLERY_LOG";

const DEFAULT_DIRECTIVE: &str = "info";

/// Picks the filter directive, preferring the app-specific variable.
fn resolve_directive(app_var: Option<String>, rust_log: Option<String>) -> String {
    app_var
        .filter(|value| !value.trim().is_empty())
        .or_else(|| rust_log.filter(|value| !value.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_DIRECTIVE.to_string())
}

/// Installs the global tracing subscriber.
///
/// Idempotent: only the first call takes effect. An invalid directive falls
/// back to the default level instead of failing start-up.
pub fn init() {
    let directive = resolve_directive(
        std::env::var(ENV_LOG).ok(),
        std::env::var("RUST_LOG").ok(),
    );
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
