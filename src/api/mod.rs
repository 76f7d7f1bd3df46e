// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod errors;
pub mod http_server;
pub mod try_on;

pub use errors::{ApiError, ErrorResponse};
pub use http_server::{router, start_server, AppState};
pub use try_on::{try_on_handler, TryOnParams, TryOnResponse, UploadedImage};
