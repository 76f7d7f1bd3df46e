// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Relay configuration
//!
//! All settings come from environment variables, read once at startup.
//! The resulting struct is immutable and shared behind an `Arc`.

use std::env;

/// Default per-file upload limit (10 MB)
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Default outbound request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Configuration for the try-on relay
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Listening port (default: 8080)
    pub api_port: u16,
    /// Base URL of the remote try-on service
    pub tryon_endpoint: String,
    /// Maximum size of a single uploaded file in bytes (default: 10485760)
    pub max_upload_bytes: usize,
    /// Timeout for the outbound try-on call in seconds (default: 120)
    pub tryon_timeout_secs: u64,
}

impl RelayConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            api_port: env::var("API_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            tryon_endpoint: env::var("TRYON_ENDPOINT").unwrap_or_default(),
            max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
            tryon_timeout_secs: env::var("TRYON_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.tryon_endpoint.trim().is_empty() {
            return Err("TRYON_ENDPOINT must be set".to_string());
        }
        if self.max_upload_bytes == 0 {
            return Err("max_upload_bytes must be at least 1".to_string());
        }
        if self.tryon_timeout_secs == 0 {
            return Err("tryon_timeout_secs must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            api_port: 8080,
            tryon_endpoint: String::new(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            tryon_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
