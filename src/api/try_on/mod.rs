// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Virtual try-on API endpoint module
//!
//! Provides POST /api/virtual-tryon for relaying a human photo and a
//! garment photo to the remote try-on service.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::try_on_handler;
pub use request::{TryOnParams, UploadedImage, ACCEPTED_MEDIA_TYPES};
pub use response::{TryOnData, TryOnResponse};
