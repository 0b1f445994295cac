//! Server configuration from environment variables.

use std::time::Duration;

/// Settings for the web binary. Read once at startup.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServerConfig {
    /// `HOST`, default `0.0.0.0` so the app is reachable on a VPS.
    pub host: String,
    /// `PORT`, default `8080`.
    pub port: u16,
    /// `BRACKET_TTL_HOURS`: brackets not accessed for this long are removed. Default 12h.
    pub inactivity_timeout: Duration,
    /// `CLEANUP_INTERVAL_MINUTES`: how often idle brackets are purged. Default 30min.
    pub cleanup_interval: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            inactivity_timeout: Duration::from_secs(12 * 3600),
            cleanup_interval: Duration::from_secs(30 * 60),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from a key lookup. Missing or unparsable values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        // Positive count of `unit` seconds; overflowing values are invalid too.
        let parsed = |key: &str, unit: u64| -> Option<Duration> {
            let raw = lookup(key)?;
            match raw.trim().parse::<u64>() {
                Ok(v) if v > 0 => match v.checked_mul(unit) {
                    Some(secs) => Some(Duration::from_secs(secs)),
                    None => {
                        log::warn!("Ignoring out of range {}={:?}", key, raw);
                        None
                    }
                },
                _ => {
                    log::warn!("Ignoring invalid {}={:?}", key, raw);
                    None
                }
            }
        };

        let host = lookup("HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or(defaults.host);
        let port = lookup("PORT")
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(defaults.port);
        let inactivity_timeout =
            parsed("BRACKET_TTL_HOURS", 3600).unwrap_or(defaults.inactivity_timeout);
        let cleanup_interval =
            parsed("CLEANUP_INTERVAL_MINUTES", 60).unwrap_or(defaults.cleanup_interval);

        Self {
            host,
            port,
            inactivity_timeout,
            cleanup_interval,
        }
    }
}
