use std::num::ParseIntError;

use thiserror::Error;

/// Configuration rejected at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{var} must be a port number, got {value:?}")]
    InvalidPort {
        var: &'static str,
        value: String,
        source: ParseIntError,
    },
}
