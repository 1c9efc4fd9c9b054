//! Configuration management for the weathersync service
//!
//! Values come from `WEATHERSYNC_*` environment variables with compiled-in
//! defaults, so the binary runs with no setup. Everything is validated at
//! startup; the sync path itself never reads the environment.

use std::env;
use std::net::SocketAddr;

use anyhow::{Context, Result, bail};

/// Root configuration for the weathersync service
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Upstream weather API configuration
    pub upstream: UpstreamConfig,
}

/// HTTP server settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address the server binds to
    pub bind: String,
}

/// Upstream weather API settings
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Base URL of the weather API
    pub base_url: String,
    /// Contact identifier carried in the identifying User-Agent header
    pub contact: String,
    /// Outbound request timeout in seconds
    pub timeout_seconds: u64,
}

// Default value functions
fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_base_url() -> String {
    "https://api.weather.gov".to_string()
}

fn default_contact() -> String {
    "ops@weathersync.example".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                bind: default_bind(),
            },
            upstream: UpstreamConfig {
                base_url: default_base_url(),
                contact: default_contact(),
                timeout_seconds: default_timeout(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn load() -> Result<Self> {
        let timeout_seconds = match env::var("WEATHERSYNC_TIMEOUT_SECONDS") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("Invalid WEATHERSYNC_TIMEOUT_SECONDS: {raw}"))?,
            Err(_) => default_timeout(),
        };

        let config = Self {
            server: ServerConfig {
                bind: env::var("WEATHERSYNC_BIND").unwrap_or_else(|_| default_bind()),
            },
            upstream: UpstreamConfig {
                base_url: env::var("WEATHERSYNC_UPSTREAM_BASE_URL")
                    .unwrap_or_else(|_| default_base_url()),
                contact: env::var("WEATHERSYNC_CONTACT").unwrap_or_else(|_| default_contact()),
                timeout_seconds,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.server
            .bind
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid bind address '{}'", self.server.bind))?;

        if !self.upstream.base_url.starts_with("http://")
            && !self.upstream.base_url.starts_with("https://")
        {
            bail!("Upstream base URL must be a valid HTTP or HTTPS URL");
        }

        if self.upstream.timeout_seconds == 0 || self.upstream.timeout_seconds > 300 {
            bail!("Upstream timeout must be between 1 and 300 seconds");
        }

        if self.upstream.contact.trim().is_empty() {
            bail!("Contact identifier cannot be empty");
        }

        Ok(())
    }
}

impl UpstreamConfig {
    /// Identifying User-Agent value sent with every upstream request
    #[must_use]
    pub fn user_agent(&self) -> String {
        format!("(weathersync/{}, {})", crate::VERSION, self.contact)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert_eq!(config.upstream.base_url, "https://api.weather.gov");
        assert_eq!(config.upstream.timeout_seconds, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_user_agent_names_app_and_contact() {
        let config = AppConfig::default();
        let agent = config.upstream.user_agent();
        assert!(agent.starts_with("(weathersync/"));
        assert!(agent.ends_with(", ops@weathersync.example)"));
    }

    #[rstest]
    #[case("ftp://api.weather.gov")]
    #[case("api.weather.gov")]
    #[case("")]
    fn test_validation_rejects_non_http_base_url(#[case] base_url: &str) {
        let mut config = AppConfig::default();
        config.upstream.base_url = base_url.to_string();
        assert!(config.validate().is_err());
    }

    #[rstest]
    #[case(0)]
    #[case(301)]
    fn test_validation_rejects_timeout_out_of_range(#[case] timeout: u64) {
        let mut config = AppConfig::default();
        config.upstream.timeout_seconds = timeout;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_bind_address() {
        let mut config = AppConfig::default();
        config.server.bind = "not-an-address".to_string();
        assert!(config.validate().is_err());
    }
}
