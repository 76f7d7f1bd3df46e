// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Editable-canvas wrapper for the human photo
//!
//! The try-on service expects the human image as an editor structure:
//! a background layer, an (empty) list of mask layers, and a null
//! composite. Images travel as base64 data URLs.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::Serialize;

/// Editor structure wrapping the human photo for the try-on service
#[derive(Debug, Clone, Serialize)]
pub struct EditorCanvas {
    /// Background layer: the human photo as a data URL
    pub background: String,
    /// Mask layers; always empty when auto-masking is delegated remotely
    pub layers: Vec<String>,
    /// Pre-composited image; always null, the service composites
    pub composite: Option<String>,
}

impl EditorCanvas {
    /// Wrap a background data URL with empty mask layers
    pub fn new(background: String) -> Self {
        Self {
            background,
            layers: Vec::new(),
            composite: None,
        }
    }
}

/// Encode raw image bytes as a self-contained data URL
pub fn to_data_url(media_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", media_type, BASE64.encode(bytes))
}
