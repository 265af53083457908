//! Service configuration from environment variables.

use crate::domain::entities::VmConfig;
use std::env;
use tracing::warn;

/// Configuration for the transfer service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Gas limit applied to requests that do not carry one
    pub default_gas_limit: u64,

    /// Upper bound for any request's gas limit
    pub block_gas_limit: u64,

    /// Maximum nesting of call frames
    pub max_call_depth: u16,

    /// Log level filter (trace, debug, info, warn, error)
    pub log_level: String,

    /// Whether to emit JSON formatted logs
    pub json_logs: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_gas_limit: 100_000,
            block_gas_limit: 30_000_000,
            max_call_depth: 1024,
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl ServiceConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `QC_GAS_LIMIT`: Default per-request gas limit (default: 100000)
    /// - `QC_BLOCK_GAS_LIMIT`: Maximum per-request gas limit (default: 30000000)
    /// - `QC_MAX_CALL_DEPTH`: Maximum call depth (default: 1024)
    /// - `QC_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `QC_JSON_LOGS`: Enable JSON logs (default: false)
    ///
    /// Unparseable values fall back to the default. A default gas limit above
    /// the block gas limit is clamped to it.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let parsed = |key: &str| lookup(key).and_then(|v| v.parse().ok());

        let block_gas_limit = parsed("QC_BLOCK_GAS_LIMIT").unwrap_or(defaults.block_gas_limit);
        let mut default_gas_limit = parsed("QC_GAS_LIMIT").unwrap_or(defaults.default_gas_limit);
        if default_gas_limit > block_gas_limit {
            warn!(
                default_gas_limit,
                block_gas_limit, "QC_GAS_LIMIT exceeds QC_BLOCK_GAS_LIMIT, clamping"
            );
            default_gas_limit = block_gas_limit;
        }

        Self {
            default_gas_limit,
            block_gas_limit,

            max_call_depth: lookup("QC_MAX_CALL_DEPTH")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_call_depth),

            log_level: lookup("QC_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or(defaults.log_level),

            json_logs: lookup("QC_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(defaults.json_logs),
        }
    }

    /// Host limits derived from this configuration.
    pub fn vm_config(&self) -> VmConfig {
        VmConfig {
            max_call_depth: self.max_call_depth,
        }
    }
}
