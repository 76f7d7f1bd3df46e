// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Try-on response types

use serde::{Deserialize, Serialize};

use crate::tryon::TryOnImages;

/// Successful try-on response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TryOnResponse {
    pub success: bool,
    pub data: TryOnData,
}

/// The generated image pair
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TryOnData {
    /// Encoded composite of the garment fitted onto the human photo
    pub output_image: String,
    /// Encoded human photo with the replaced region masked
    pub masked_image: String,
}

impl TryOnResponse {
    pub fn new(images: TryOnImages) -> Self {
        Self {
            success: true,
            data: TryOnData {
                output_image: images.output_image,
                masked_image: images.masked_image,
            },
        }
    }
}
