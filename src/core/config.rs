//! Upstream endpoint configuration.

/// Base path for the MLB stats API (v1).
pub const STATS_BASE_URL: &str = "https://statsapi.mlb.com/api/v1";

/// Base path for the live game feed (v1.1).
pub const LIVE_BASE_URL: &str = "https://statsapi.mlb.com/api/v1.1";

/// Wikipedia REST page summary endpoint; the page title is appended.
pub const WIKI_SUMMARY_BASE_URL: &str = "https://en.wikipedia.org/api/rest_v1/page/summary";

pub const STATS_BASE_URL_ENV_VAR: &str = "MLB_STATS_BASE_URL";
pub const LIVE_BASE_URL_ENV_VAR: &str = "MLB_LIVE_BASE_URL";
pub const WIKI_BASE_URL_ENV_VAR: &str = "WIKI_SUMMARY_BASE_URL";

/// Base URLs for both upstream APIs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub stats_base_url: String,
    pub live_base_url: String,
    pub wiki_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            stats_base_url: STATS_BASE_URL.to_string(),
            live_base_url: LIVE_BASE_URL.to_string(),
            wiki_base_url: WIKI_SUMMARY_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Defaults, overridden by any of the `*_BASE_URL` env vars that are set.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            stats_base_url: env_or(STATS_BASE_URL_ENV_VAR, defaults.stats_base_url),
            live_base_url: env_or(LIVE_BASE_URL_ENV_VAR, defaults.live_base_url),
            wiki_base_url: env_or(WIKI_BASE_URL_ENV_VAR, defaults.wiki_base_url),
        }
    }

    /// Point every endpoint at one server; used with mock servers.
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            stats_base_url: format!("{base}/api/v1"),
            live_base_url: format!("{base}/api/v1.1"),
            wiki_base_url: format!("{base}/api/rest_v1/page/summary"),
        }
    }
}

fn env_or(var: &str, default: String) -> String {
    std::env::var(var)
        .ok()
        .map(|v| v.trim().trim_end_matches('/').to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls() {
        let config = ClientConfig::default();
        assert_eq!(config.stats_base_url, "https://statsapi.mlb.com/api/v1");
        assert_eq!(config.live_base_url, "https://statsapi.mlb.com/api/v1.1");
    }

    #[test]
    fn test_from_env_overrides_and_trims() {
        std::env::set_var(STATS_BASE_URL_ENV_VAR, "http://localhost:9000/api/v1/");
        std::env::remove_var(LIVE_BASE_URL_ENV_VAR);

        let config = ClientConfig::from_env();
        assert_eq!(config.stats_base_url, "http://localhost:9000/api/v1");
        assert_eq!(config.live_base_url, LIVE_BASE_URL);

        std::env::remove_var(STATS_BASE_URL_ENV_VAR);
    }

    #[test]
    fn test_with_base() {
        let config = ClientConfig::with_base("http://127.0.0.1:4000/");
        assert_eq!(config.stats_base_url, "http://127.0.0.1:4000/api/v1");
        assert_eq!(config.live_base_url, "http://127.0.0.1:4000/api/v1.1");
        assert_eq!(
            config.wiki_base_url,
            "http://127.0.0.1:4000/api/rest_v1/page/summary"
        );
    }
}
