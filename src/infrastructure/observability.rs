//! Log filtering shared by the binary's tracing layers.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Build the filter from `RUST_LOG`-style directives.
///
/// Explicit directives win outright, so `RUST_LOG=warn` silences info logs.
pub fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// [`env_filter`] fed from the process environment.
pub fn env_filter_from_env() -> EnvFilter {
    env_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_explicit_level_is_not_raised_to_info() {
        assert_eq!(env_filter(Some("warn")).max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(env_filter(Some("error")).max_level_hint(), Some(LevelFilter::ERROR));
    }

    #[test]
    fn test_verbose_level_is_kept() {
        assert_eq!(env_filter(Some("debug")).max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_missing_or_blank_defaults_to_info() {
        assert_eq!(env_filter(None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(env_filter(Some("  ")).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_invalid_directive_defaults_to_info() {
        assert_eq!(
            env_filter(Some("btcsim=notalevel")).max_level_hint(),
            Some(LevelFilter::INFO)
        );
    }
}
