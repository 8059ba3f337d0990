use env_logger::{Builder, DEFAULT_FILTER_ENV};
use std::sync::OnceLock;

static LOGGER_INIT: OnceLock<()> = OnceLock::new();

/// Used when `RUST_LOG` is unset. A set `RUST_LOG` replaces it entirely.
const DEFAULT_FILTERS: &str = "info,hyper=info,reqwest=info";

fn builder(filters: &str) -> Builder {
    let mut builder = Builder::new();
    builder.parse_filters(filters);
    builder
}

/// Install the `env_logger` backend.
pub fn init() {
    LOGGER_INIT.get_or_init(|| {
        let filters =
            std::env::var(DEFAULT_FILTER_ENV).unwrap_or_else(|_| DEFAULT_FILTERS.to_string());
        // Another logger may already be installed (tests)
        let _ = builder(&filters).try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, Log, Metadata};

    fn enabled(filters: &str, target: &str, level: Level) -> bool {
        let logger = builder(filters).build();
        logger.enabled(&Metadata::builder().target(target).level(level).build())
    }

    #[test]
    fn test_default_filters() {
        assert!(enabled(DEFAULT_FILTERS, "feed_relay::services::qr", Level::Info));
        assert!(!enabled(DEFAULT_FILTERS, "feed_relay::services::qr", Level::Debug));
        assert!(enabled(DEFAULT_FILTERS, "hyper", Level::Info));
        assert!(!enabled(DEFAULT_FILTERS, "hyper", Level::Debug));
    }

    #[test]
    fn test_rust_log_module_level_wins() {
        assert!(enabled("info,hyper=debug", "hyper", Level::Debug));
        assert!(enabled("reqwest=trace", "reqwest", Level::Trace));
    }

    #[test]
    fn test_rust_log_global_level_caps_dependencies() {
        assert!(!enabled("error", "hyper", Level::Info));
        assert!(!enabled("error", "reqwest", Level::Warn));
        assert!(enabled("error", "hyper", Level::Error));
    }
}
