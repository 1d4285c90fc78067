// SPDX-License-Identifier: MPL-2.0
//! Structured logging setup with tracing.
//!
//! The filter comes from `ICED_GALLERY_LOG`, then `RUST_LOG`, then
//! [`DEFAULT_DIRECTIVE`]. Invalid directives fall through to the next
//! source.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable read before `RUST_LOG`.
pub const ENV_LOG: &str = "ICED_GALLERY_LOG";

pub const DEFAULT_DIRECTIVE: &str = "info";

/// Installs the global subscriber. Later calls are ignored.
pub fn init() {
    let filter = build_filter(
        std::env::var(ENV_LOG).ok(),
        std::env::var(EnvFilter::DEFAULT_ENV).ok(),
    );

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("logging initialized");
    }
}

fn build_filter(primary: Option<String>, fallback: Option<String>) -> EnvFilter {
    [primary, fallback]
        .into_iter()
        .flatten()
        .find_map(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_variable_wins() {
        let filter = build_filter(Some("debug".into()), Some("warn".into()));
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn rust_log_is_the_fallback() {
        let filter = build_filter(None, Some("warn".into()));
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn invalid_directives_fall_through_to_default() {
        let filter = build_filter(Some("[=".into()), None);
        assert_eq!(filter.to_string(), DEFAULT_DIRECTIVE);
    }
}
