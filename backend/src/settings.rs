//! Service settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `EVENTFORM_*` environment variables and
//! configuration files, in that order of precedence.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_HOST: &str = "0.0.0.0";
const DEFAULT_BIND_PORT: u16 = 8080;
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Runtime settings for the HTTP service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EVENTFORM")]
pub struct AppSettings {
    /// PostgreSQL connection string. Without it the service answers from
    /// in-memory fixtures.
    pub database_url: Option<String>,
    /// Interface to listen on.
    pub bind_host: Option<String>,
    /// Port to listen on.
    pub bind_port: Option<u16>,
    /// Upper bound on pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Apply pending schema migrations before serving.
    #[ortho_config(default = true)]
    pub run_migrations: bool,
}

/// Raised when the host and port do not form a socket address.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid bind address {address}: {message}")]
pub struct InvalidBindAddress {
    pub address: String,
    pub message: String,
}

impl AppSettings {
    pub fn bind_host(&self) -> &str {
        self.bind_host.as_deref().unwrap_or(DEFAULT_BIND_HOST)
    }

    pub fn bind_port(&self) -> u16 {
        self.bind_port.unwrap_or(DEFAULT_BIND_PORT)
    }

    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }

    /// The configured database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Socket address built from the host and port.
    ///
    /// # Errors
    /// Returns [`InvalidBindAddress`] when the host is not an IP literal.
    pub fn bind_addr(&self) -> Result<SocketAddr, InvalidBindAddress> {
        let address = format!("{}:{}", self.bind_host(), self.bind_port());
        address
            .parse()
            .map_err(|err: std::net::AddrParseError| InvalidBindAddress {
                message: err.to_string(),
                address,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 5] = [
        "EVENTFORM_DATABASE_URL",
        "EVENTFORM_BIND_HOST",
        "EVENTFORM_BIND_PORT",
        "EVENTFORM_POOL_MAX_SIZE",
        "EVENTFORM_RUN_MIGRATIONS",
    ];

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("eventform")]).expect("settings should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();

        assert!(settings.database_url().is_none());
        assert_eq!(settings.bind_host(), "0.0.0.0");
        assert_eq!(settings.bind_port(), 8080);
        assert_eq!(settings.pool_max_size(), 10);
        assert!(settings.run_migrations);
        assert_eq!(
            settings.bind_addr().expect("valid address"),
            "0.0.0.0:8080".parse::<SocketAddr>().expect("literal")
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            (
                "EVENTFORM_DATABASE_URL",
                Some("postgres://localhost/eventform".to_owned()),
            ),
            ("EVENTFORM_BIND_HOST", Some("127.0.0.1".to_owned())),
            ("EVENTFORM_BIND_PORT", Some("9090".to_owned())),
            ("EVENTFORM_POOL_MAX_SIZE", Some("4".to_owned())),
            ("EVENTFORM_RUN_MIGRATIONS", Some("false".to_owned())),
        ]);

        let settings = load_from_empty_args();

        assert_eq!(settings.database_url(), Some("postgres://localhost/eventform"));
        assert_eq!(settings.pool_max_size(), 4);
        assert!(!settings.run_migrations);
        assert_eq!(
            settings.bind_addr().expect("valid address"),
            "127.0.0.1:9090".parse::<SocketAddr>().expect("literal")
        );
    }

    #[rstest]
    fn blank_database_url_means_fixtures() {
        let _guard = lock_env([
            ("EVENTFORM_DATABASE_URL", Some("   ".to_owned())),
            ("EVENTFORM_BIND_HOST", None),
            ("EVENTFORM_BIND_PORT", None),
            ("EVENTFORM_POOL_MAX_SIZE", None),
            ("EVENTFORM_RUN_MIGRATIONS", None),
        ]);

        assert!(load_from_empty_args().database_url().is_none());
    }

    #[rstest]
    fn hostnames_are_rejected_as_bind_addresses() {
        let _guard = lock_env([
            ("EVENTFORM_DATABASE_URL", None::<String>),
            ("EVENTFORM_BIND_HOST", Some("localhost".to_owned())),
            ("EVENTFORM_BIND_PORT", None),
            ("EVENTFORM_POOL_MAX_SIZE", None),
            ("EVENTFORM_RUN_MIGRATIONS", None),
        ]);

        let error = load_from_empty_args().bind_addr().expect_err("hostname");
        assert_eq!(error.address, "localhost:8080");
    }
}
