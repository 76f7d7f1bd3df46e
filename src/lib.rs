// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod config;
pub mod tryon;
pub mod version;

// Re-export main types
pub use api::{ApiError, ErrorResponse, TryOnParams, TryOnResponse};
pub use config::RelayConfig;
pub use tryon::{
    EditorCanvas, TryOnBackend, TryOnClient, TryOnClientError, TryOnImages, TryOnJob,
};
