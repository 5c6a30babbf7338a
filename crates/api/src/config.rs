//! Process configuration read from the environment.
//!
//! | variable | default |
//! |---|---|
//! | `RFP_BIND_ADDR` | `0.0.0.0:8080` |
//! | `RFP_CATALOG_PATH` | `products.json` |
//! | `RFP_MATCHING_CONFIG` | unset (built-in matching defaults) |
//! | `RFP_MAX_UPLOAD_BYTES` | `10485760` |

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_CATALOG_PATH: &str = "products.json";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiConfigError {
    #[error("{var} is invalid: {msg}")]
    Invalid { var: &'static str, msg: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub catalog_path: PathBuf,
    pub matching_config_path: Option<PathBuf>,
    pub max_upload_bytes: usize,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ApiConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests pass a map instead of the env).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ApiConfigError> {
        let bind_raw = lookup("RFP_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw.parse().map_err(|e| ApiConfigError::Invalid {
            var: "RFP_BIND_ADDR",
            msg: format!("{bind_raw:?}: {e}"),
        })?;

        let catalog_path = lookup("RFP_CATALOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH));

        let matching_config_path = lookup("RFP_MATCHING_CONFIG")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let max_upload_bytes = match lookup("RFP_MAX_UPLOAD_BYTES") {
            None => DEFAULT_MAX_UPLOAD_BYTES,
            Some(raw) => raw.trim().parse().map_err(|e| ApiConfigError::Invalid {
                var: "RFP_MAX_UPLOAD_BYTES",
                msg: format!("{raw:?}: {e}"),
            })?,
        };

        Ok(Self {
            bind_addr,
            catalog_path,
            matching_config_path,
            max_upload_bytes,
        })
    }
}
