//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `OUTCOME_*` environment variables, or a
//! configuration file, in that order of precedence.

use std::net::{SocketAddr, ToSocketAddrs};

use ortho_config::OrthoConfig;
use outcome_service::inbound::http::state::{PagingPolicy, PagingPolicyError};
use serde::Deserialize;
use thiserror::Error;

use super::ServerConfig;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Errors raised while turning settings into a [`ServerConfig`].
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Host and port did not resolve to a socket address.
    #[error("cannot resolve bind address {host}:{port}: {reason}")]
    BindAddress {
        /// Configured host.
        host: String,
        /// Configured port.
        port: u16,
        /// Resolver failure description.
        reason: String,
    },
    /// Paging limits were inconsistent.
    #[error("invalid paging limits: {0}")]
    Paging(#[from] PagingPolicyError),
}

/// Configuration values controlling the HTTP server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "OUTCOME")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// Page size applied when a client omits `limit`.
    pub default_page_limit: Option<u64>,
    /// Largest page size honoured; bigger requests are capped.
    pub max_page_limit: Option<u64>,
    /// Populate the in-memory store with demo users at start-up.
    #[ortho_config(default = false)]
    pub seed_demo_users: bool,
}

impl ServerSettings {
    /// Return the configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured port, falling back to 8080.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Return the configured default page size.
    pub fn default_page_limit(&self) -> u64 {
        self.default_page_limit
            .unwrap_or(PagingPolicy::DEFAULT_LIMIT)
    }

    /// Return the configured maximum page size.
    pub fn max_page_limit(&self) -> u64 {
        self.max_page_limit.unwrap_or(PagingPolicy::MAX_LIMIT)
    }

    fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let (host, port) = (self.host(), self.port());
        let failure = |reason: String| SettingsError::BindAddress {
            host: host.to_owned(),
            port,
            reason,
        };
        (host, port)
            .to_socket_addrs()
            .map_err(|err| failure(err.to_string()))?
            .next()
            .ok_or_else(|| failure("no addresses found".to_owned()))
    }

    /// Validate the settings and build the server configuration.
    pub fn into_server_config(self) -> Result<ServerConfig, SettingsError> {
        let paging = PagingPolicy::new(self.default_page_limit(), self.max_page_limit())?;
        Ok(ServerConfig::new(self.bind_addr()?)
            .with_paging(paging)
            .with_demo_users(self.seed_demo_users))
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 5] = [
        "OUTCOME_HOST",
        "OUTCOME_PORT",
        "OUTCOME_DEFAULT_PAGE_LIMIT",
        "OUTCOME_MAX_PAGE_LIMIT",
        "OUTCOME_SEED_DEMO_USERS",
    ];

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("outcome-service")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(settings.host(), DEFAULT_HOST);
        assert_eq!(settings.port(), DEFAULT_PORT);
        assert_eq!(settings.default_page_limit(), 20);
        assert_eq!(settings.max_page_limit(), 100);
        assert!(!settings.seed_demo_users);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("OUTCOME_HOST", Some("127.0.0.1".to_owned())),
            ("OUTCOME_PORT", Some("9090".to_owned())),
            ("OUTCOME_DEFAULT_PAGE_LIMIT", Some("5".to_owned())),
            ("OUTCOME_MAX_PAGE_LIMIT", Some("50".to_owned())),
            ("OUTCOME_SEED_DEMO_USERS", Some("true".to_owned())),
        ]);

        let config = load_from_empty_args()
            .into_server_config()
            .expect("valid settings");
        assert_eq!(
            config.bind_addr(),
            "127.0.0.1:9090".parse::<SocketAddr>().expect("address")
        );
        assert_eq!(config.paging.default_limit(), 5);
        assert_eq!(config.paging.max_limit(), 50);
        assert!(config.seed_demo_users);
    }

    #[rstest]
    fn inconsistent_page_limits_are_rejected() {
        let _guard = lock_env([
            ("OUTCOME_HOST", Some("127.0.0.1".to_owned())),
            ("OUTCOME_PORT", None),
            ("OUTCOME_DEFAULT_PAGE_LIMIT", Some("200".to_owned())),
            ("OUTCOME_MAX_PAGE_LIMIT", Some("100".to_owned())),
            ("OUTCOME_SEED_DEMO_USERS", None),
        ]);

        let err = load_from_empty_args()
            .into_server_config()
            .expect_err("default above maximum");
        assert!(matches!(
            err,
            SettingsError::Paging(PagingPolicyError::DefaultAboveMax { default: 200, max: 100 })
        ));
    }
}
