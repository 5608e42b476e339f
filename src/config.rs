//! Application configuration loaded from environment variables.

use std::time::Duration;

/// Application configuration.
///
/// Passed explicitly into rendering and the query layer rather than read
/// from ambient globals, so tests can construct arbitrary configurations.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080").
    pub bind_addr: String,

    /// Content store query API base URL.
    pub content_api_url: String,

    /// Content store project identifier.
    pub project_id: String,

    /// Content store dataset name.
    pub dataset: String,

    /// Asset CDN base URL used by the image URL builder.
    pub content_cdn_url: String,

    /// Comment moderation endpoint URL.
    pub moderation_url: String,

    /// Base URL for this service (used in canonical URLs and OG tags).
    pub base_url: String,

    /// Site name shown in page titles and the header.
    pub site_name: String,

    /// Revalidation interval for cached pages: entries older than this are
    /// served stale while a background refresh runs.
    pub revalidate: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables have defaults for local development:
    /// - `PRESSROOM_BIND_ADDR`: bind address (default: "0.0.0.0:8080")
    /// - `CONTENT_API_URL`: query API base URL (default: "http://localhost:3333")
    /// - `CONTENT_PROJECT_ID`: project identifier (default: "demo")
    /// - `CONTENT_DATASET`: dataset name (default: "production")
    /// - `CONTENT_CDN_URL`: asset CDN base URL (default: "https://cdn.sanity.io")
    /// - `MODERATION_URL`: comment moderation endpoint
    ///   (default: "http://localhost:3000/api/createComment")
    /// - `PRESSROOM_BASE_URL`: base URL for links (default: "http://localhost:8080")
    /// - `PRESSROOM_SITE_NAME`: site name (default: "Pressroom")
    /// - `PRESSROOM_REVALIDATE_SECS`: cache revalidation interval (default: 60)
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("PRESSROOM_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let content_api_url = std::env::var("CONTENT_API_URL")
            .unwrap_or_else(|_| "http://localhost:3333".to_string())
            .trim_end_matches('/')
            .to_string();

        let project_id = std::env::var("CONTENT_PROJECT_ID").unwrap_or_else(|_| "demo".to_string());

        let dataset = std::env::var("CONTENT_DATASET").unwrap_or_else(|_| "production".to_string());

        let content_cdn_url = std::env::var("CONTENT_CDN_URL")
            .unwrap_or_else(|_| "https://cdn.sanity.io".to_string())
            .trim_end_matches('/')
            .to_string();

        let moderation_url = std::env::var("MODERATION_URL")
            .unwrap_or_else(|_| "http://localhost:3000/api/createComment".to_string());

        let base_url = std::env::var("PRESSROOM_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string())
            .trim_end_matches('/')
            .to_string();

        let site_name =
            std::env::var("PRESSROOM_SITE_NAME").unwrap_or_else(|_| "Pressroom".to_string());

        let revalidate_secs: u64 = std::env::var("PRESSROOM_REVALIDATE_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(60);

        tracing::info!(
            bind_addr = %bind_addr,
            content_api_url = %content_api_url,
            project_id = %project_id,
            dataset = %dataset,
            base_url = %base_url,
            site_name = %site_name,
            revalidate_secs = revalidate_secs,
            "configuration loaded"
        );

        Ok(Self {
            bind_addr,
            content_api_url,
            project_id,
            dataset,
            content_cdn_url,
            moderation_url,
            base_url,
            site_name,
            revalidate: Duration::from_secs(revalidate_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mutex to serialize config tests that manipulate env vars.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const ENV_KEYS: &[&str] = &[
        "PRESSROOM_BIND_ADDR",
        "CONTENT_API_URL",
        "CONTENT_PROJECT_ID",
        "CONTENT_DATASET",
        "CONTENT_CDN_URL",
        "MODERATION_URL",
        "PRESSROOM_BASE_URL",
        "PRESSROOM_SITE_NAME",
        "PRESSROOM_REVALIDATE_SECS",
    ];

    /// Helper to run config tests with isolated env vars.
    /// Uses a mutex to prevent concurrent env var races.
    fn with_env_vars<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
        let _guard = ENV_MUTEX.lock().unwrap();

        let saved: Vec<_> = ENV_KEYS
            .iter()
            .map(|k| (*k, std::env::var(k).ok()))
            .collect();

        // SAFETY: Serialized by mutex; only test code touches these vars.
        unsafe {
            for k in ENV_KEYS {
                std::env::remove_var(k);
            }
            for (k, v) in vars {
                std::env::set_var(k, v);
            }
        }

        f();

        // SAFETY: Restoring original env state.
        unsafe {
            for (k, v) in &saved {
                match v {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }
    }

    #[test]
    fn config_defaults() {
        with_env_vars(&[], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.bind_addr, "0.0.0.0:8080");
            assert_eq!(config.content_api_url, "http://localhost:3333");
            assert_eq!(config.project_id, "demo");
            assert_eq!(config.dataset, "production");
            assert_eq!(config.content_cdn_url, "https://cdn.sanity.io");
            assert_eq!(config.base_url, "http://localhost:8080");
            assert_eq!(config.site_name, "Pressroom");
            assert_eq!(config.revalidate, Duration::from_secs(60));
        });
    }

    #[test]
    fn config_custom_values() {
        with_env_vars(
            &[
                ("PRESSROOM_BIND_ADDR", "127.0.0.1:9090"),
                ("CONTENT_API_URL", "https://abc.api.sanity.io"),
                ("CONTENT_PROJECT_ID", "abc123"),
                ("CONTENT_DATASET", "staging"),
                ("MODERATION_URL", "https://site.example/api/createComment"),
                ("PRESSROOM_SITE_NAME", "My Blog"),
                ("PRESSROOM_REVALIDATE_SECS", "120"),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.bind_addr, "127.0.0.1:9090");
                assert_eq!(config.content_api_url, "https://abc.api.sanity.io");
                assert_eq!(config.project_id, "abc123");
                assert_eq!(config.dataset, "staging");
                assert_eq!(
                    config.moderation_url,
                    "https://site.example/api/createComment"
                );
                assert_eq!(config.site_name, "My Blog");
                assert_eq!(config.revalidate, Duration::from_secs(120));
            },
        );
    }

    #[test]
    fn config_base_url_trailing_slash_stripped() {
        with_env_vars(&[("PRESSROOM_BASE_URL", "https://blog.example/")], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.base_url, "https://blog.example");
        });
    }

    #[test]
    fn config_invalid_revalidate_falls_back() {
        with_env_vars(&[("PRESSROOM_REVALIDATE_SECS", "not-a-number")], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.revalidate, Duration::from_secs(60));
        });
    }
}
