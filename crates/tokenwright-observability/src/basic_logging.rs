use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directive used when `RUST_LOG` is not set.
///
/// Tokenwright crates log at `level`; HTTP internals are held at `warn`.
pub fn default_filter(level: &str) -> String {
    format!(
        "tokenwright={level},tokenwright_auth={level},tokenwright_client={level},tokenwright_cli={level},reqwest=warn,hyper=warn,hyper_util=warn"
    )
}

/// Initialize console logging on stderr.
///
/// # Configuration
///
/// - **Log Level**: `LOG_LEVEL` environment variable (default: "info")
/// - **Override**: `RUST_LOG` replaces the whole filter when set
/// - **Format**: Compact, with target, file and line
///
/// Stdout is left alone so command output can be piped.
pub fn init_basic_console_logging() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(&log_level)));

    let console_layer = fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(env_filter);

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry().with(console_layer).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        let filter = default_filter("debug");
        assert!(filter.contains("tokenwright_auth=debug"));
        assert!(EnvFilter::try_new(&filter).is_ok());
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init_basic_console_logging();
        init_basic_console_logging();
    }
}
