//! Startup configuration resolved from the process environment.
//!
//! Backend selection happens exactly once: either a remote primary/replica
//! pair or the in-memory store. The result is immutable for the lifetime of
//! the process and is handed to the storage and HTTP layers explicitly.

use std::fmt;

use serde::Serialize;

use crate::constants::{
    DEFAULT_PRIMARY_HOST, DEFAULT_REMOTE_PORT, DEFAULT_REPLICA_HOST, ENV_HOSTNAME,
    ENV_MASTER_PORT, ENV_MASTER_SERVICE_HOST, ENV_MASTER_SERVICE_PASSWORD,
    ENV_MASTER_SERVICE_PORT, LISTEN_PORT,
};
use crate::env_config::non_empty_env;
use crate::error::ConfigError;

/// Address of one remote key-value node.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct RemoteTarget {
    pub host: String,
    pub port: u16,
    #[serde(skip)]
    pub password: Option<String>,
}

impl RemoteTarget {
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self { host: host.into(), port, password: None }
    }

    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// `redis://` URL understood by the client library.
    #[must_use]
    pub fn connection_url(&self) -> String {
        match &self.password {
            Some(password) => format!("redis://:{password}@{}:{}/", self.host, self.port),
            None => format!("redis://{}:{}/", self.host, self.port),
        }
    }
}

/// Renders as `host:port`, or `***@host:port` when a password is set.
impl fmt::Display for RemoteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.password.is_some() {
            f.write_str("***@")?;
        }
        write!(f, "{}:{}", self.host, self.port)
    }
}

impl fmt::Debug for RemoteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RemoteTarget({self})")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BackendConfig {
    Remote { primary: RemoteTarget, replica: RemoteTarget },
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppConfig {
    pub backend: BackendConfig,
    /// Reported by `/hello`; empty when `HOSTNAME` is unset.
    pub hostname: String,
    pub listen_port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(non_empty_env)
    }

    /// Resolve configuration through `lookup`, which returns `None` for
    /// unset variables. Empty values are treated as unset.
    ///
    /// Precedence: the full `REMOTE_MASTER_SERVICE_*` triple, then
    /// `REMOTE_MASTER_PORT` (fixed service names), then memory.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let primary = match (
            var(ENV_MASTER_SERVICE_HOST),
            var(ENV_MASTER_SERVICE_PORT),
            var(ENV_MASTER_SERVICE_PASSWORD),
        ) {
            (Some(host), Some(port), Some(password)) => {
                let port = port.parse::<u16>().map_err(|source| ConfigError::InvalidPort {
                    var: ENV_MASTER_SERVICE_PORT,
                    value: port.clone(),
                    source,
                })?;
                Some(RemoteTarget::new(host, port).with_password(password))
            },
            _ if var(ENV_MASTER_PORT).is_some() => {
                Some(RemoteTarget::new(DEFAULT_PRIMARY_HOST, DEFAULT_REMOTE_PORT))
            },
            _ => None,
        };

        let backend = match primary {
            Some(primary) => BackendConfig::Remote {
                primary,
                replica: RemoteTarget::new(DEFAULT_REPLICA_HOST, DEFAULT_REMOTE_PORT),
            },
            None => BackendConfig::Memory,
        };

        Ok(Self {
            backend,
            hostname: lookup(ENV_HOSTNAME).unwrap_or_default(),
            listen_port: LISTEN_PORT,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn resolve(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let env: HashMap<String, String> =
            vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
        AppConfig::from_lookup(|name| env.get(name).cloned())
    }

    #[test]
    fn test_no_remote_vars_selects_memory() {
        let config = resolve(&[]).unwrap();
        assert_eq!(config.backend, BackendConfig::Memory);
        assert_eq!(config.hostname, "");
        assert_eq!(config.listen_port, 3000);
    }

    #[test]
    fn test_service_triple_builds_authenticated_primary() {
        let config = resolve(&[
            ("REMOTE_MASTER_SERVICE_HOST", "10.0.0.5"),
            ("REMOTE_MASTER_SERVICE_PORT", "6380"),
            ("REMOTE_MASTER_SERVICE_PASSWORD", "s3cret"),
        ])
        .unwrap();

        let BackendConfig::Remote { primary, replica } = config.backend else {
            panic!("expected remote backend");
        };
        assert_eq!(primary.host, "10.0.0.5");
        assert_eq!(primary.port, 6380);
        assert_eq!(primary.password.as_deref(), Some("s3cret"));
        assert_eq!(primary.connection_url(), "redis://:s3cret@10.0.0.5:6380/");
        assert_eq!(replica, RemoteTarget::new("remote-replica", 6379));
    }

    #[test]
    fn test_triple_takes_precedence_over_master_port() {
        let config = resolve(&[
            ("REMOTE_MASTER_SERVICE_HOST", "db"),
            ("REMOTE_MASTER_SERVICE_PORT", "7000"),
            ("REMOTE_MASTER_SERVICE_PASSWORD", "pw"),
            ("REMOTE_MASTER_PORT", "tcp://10.0.0.1:6379"),
        ])
        .unwrap();

        let BackendConfig::Remote { primary, .. } = config.backend else {
            panic!("expected remote backend");
        };
        assert_eq!(primary.host, "db");
        assert_eq!(primary.port, 7000);
    }

    #[test]
    fn test_partial_triple_falls_back_to_master_port() {
        let config = resolve(&[
            ("REMOTE_MASTER_SERVICE_HOST", "db"),
            ("REMOTE_MASTER_SERVICE_PORT", "7000"),
            ("REMOTE_MASTER_SERVICE_PASSWORD", ""),
            ("REMOTE_MASTER_PORT", "tcp://10.0.0.1:6379"),
        ])
        .unwrap();

        let BackendConfig::Remote { primary, .. } = config.backend else {
            panic!("expected remote backend");
        };
        assert_eq!(primary, RemoteTarget::new("remote-master", 6379));
        assert_eq!(primary.connection_url(), "redis://remote-master:6379/");
    }

    #[test]
    fn test_partial_triple_without_master_port_selects_memory() {
        let config = resolve(&[
            ("REMOTE_MASTER_SERVICE_HOST", "db"),
            ("REMOTE_MASTER_SERVICE_PASSWORD", "pw"),
        ])
        .unwrap();
        assert_eq!(config.backend, BackendConfig::Memory);
    }

    #[test]
    fn test_invalid_service_port_is_rejected() {
        let err = resolve(&[
            ("REMOTE_MASTER_SERVICE_HOST", "db"),
            ("REMOTE_MASTER_SERVICE_PORT", "not-a-port"),
            ("REMOTE_MASTER_SERVICE_PASSWORD", "pw"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { var: "REMOTE_MASTER_SERVICE_PORT", .. }));
        assert!(err.to_string().contains("not-a-port"));
    }

    #[test]
    fn test_hostname_taken_verbatim() {
        let config = resolve(&[("HOSTNAME", "guestbook-7d9f")]).unwrap();
        assert_eq!(config.hostname, "guestbook-7d9f");
    }

    #[test]
    fn test_display_redacts_password() {
        let target = RemoteTarget::new("db", 6379).with_password("hunter2");
        assert_eq!(target.to_string(), "***@db:6379");
        assert!(!format!("{target:?}").contains("hunter2"));
    }

    #[test]
    fn test_serialized_config_omits_password() {
        let config = resolve(&[
            ("REMOTE_MASTER_SERVICE_HOST", "db"),
            ("REMOTE_MASTER_SERVICE_PORT", "6379"),
            ("REMOTE_MASTER_SERVICE_PASSWORD", "hunter2"),
        ])
        .unwrap();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"kind\":\"remote\""));
        assert!(!json.contains("hunter2"));
    }
}
