//! # Runtime Configuration
//!
//! The app has no server-side configuration. The few runtime knobs are read
//! from the page URL when the WASM module starts:
//!
//! | Query parameter | Effect | Default |
//! |---|---|---|
//! | `log` | Log level (`error`, `warn`, `info`, `debug`, `trace`) | `info` |
//!
//! Static settings live in [`crate::utils::constants`].

use log::Level;

use crate::utils::constants::LOG_LEVEL_PARAM;
use crate::utils::url::get_query_param;

/// Configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: Level::Info,
        }
    }
}

impl AppConfig {
    /// Read configuration from the current page URL.
    ///
    /// Unknown values fall back to the defaults.
    pub fn from_location() -> Self {
        let mut config = Self::default();
        if let Some(level) = get_query_param(LOG_LEVEL_PARAM).as_deref().and_then(parse_log_level) {
            config.log_level = level;
        }
        config
    }
}

/// Parse a log level name, case-insensitively.
pub fn parse_log_level(raw: &str) -> Option<Level> {
    raw.trim().parse::<Level>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("debug"), Some(Level::Debug));
        assert_eq!(parse_log_level("WARN"), Some(Level::Warn));
        assert_eq!(parse_log_level(" trace "), Some(Level::Trace));
        assert_eq!(parse_log_level("verbose"), None);
        assert_eq!(parse_log_level(""), None);
    }

    #[test]
    fn test_default_config() {
        assert_eq!(AppConfig::default().log_level, Level::Info);
    }
}
