//! Shared constants for the guestbook service.

/// Port the HTTP server listens on. Not configurable.
pub const LISTEN_PORT: u16 = 3000;

/// Default bind address for the HTTP server.
pub const DEFAULT_BIND_HOST: &str = "0.0.0.0";

/// Port used for the fixed primary/replica service names.
pub const DEFAULT_REMOTE_PORT: u16 = 6379;

/// Service name of the primary when only `REMOTE_MASTER_PORT` is set.
pub const DEFAULT_PRIMARY_HOST: &str = "remote-master";

/// Service name of the read replica in remote mode.
pub const DEFAULT_REPLICA_HOST: &str = "remote-replica";

pub const ENV_MASTER_SERVICE_HOST: &str = "REMOTE_MASTER_SERVICE_HOST";
pub const ENV_MASTER_SERVICE_PORT: &str = "REMOTE_MASTER_SERVICE_PORT";
pub const ENV_MASTER_SERVICE_PASSWORD: &str = "REMOTE_MASTER_SERVICE_PASSWORD";
pub const ENV_MASTER_PORT: &str = "REMOTE_MASTER_PORT";
pub const ENV_HOSTNAME: &str = "HOSTNAME";

/// Status text reported by `/info` when no remote store is configured.
pub const MEMORY_BACKEND_INFO: &str = "In-memory datastore (not Redis)";
