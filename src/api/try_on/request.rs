// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Try-on request types and validation

use bytes::Bytes;
use image::ImageFormat;
use std::collections::HashMap;

use crate::api::errors::ApiError;

/// Media types accepted for uploaded photos
pub const ACCEPTED_MEDIA_TYPES: &[&str] = &["image/jpeg", "image/png"];

/// Supported masking modes
const SUPPORTED_MASKING_MODES: &[&str] = &["auto", "manual"];

fn default_masking_mode() -> String {
    "auto".to_string()
}

/// One uploaded file part, held in memory for the request only
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub bytes: Bytes,
    pub content_type: Option<String>,
    pub filename: Option<String>,
}

impl UploadedImage {
    /// Validate size and media type; returns the resolved media type.
    ///
    /// A declared content type must be an accepted image type. A part with
    /// no declared type is sniffed from its magic bytes instead.
    pub fn validate(&self, field: &str, max_bytes: usize) -> Result<String, ApiError> {
        if self.bytes.is_empty() {
            return Err(ApiError::ValidationError {
                field: field.to_string(),
                message: "file is empty".to_string(),
            });
        }

        if self.bytes.len() > max_bytes {
            return Err(ApiError::PayloadTooLarge {
                field: field.to_string(),
                limit: max_bytes,
            });
        }

        match self.content_type.as_deref() {
            Some(declared) => {
                let declared = declared.trim().to_lowercase();
                if !ACCEPTED_MEDIA_TYPES.contains(&declared.as_str()) {
                    return Err(ApiError::UnsupportedMediaType {
                        field: field.to_string(),
                        media_type: declared,
                    });
                }
                Ok(declared)
            }
            None => match image::guess_format(&self.bytes) {
                Ok(ImageFormat::Jpeg) => Ok("image/jpeg".to_string()),
                Ok(ImageFormat::Png) => Ok("image/png".to_string()),
                _ => Err(ApiError::UnsupportedMediaType {
                    field: field.to_string(),
                    media_type: "unknown".to_string(),
                }),
            },
        }
    }
}

/// Generation parameters supplied as optional multipart text fields.
/// Missing fields take the documented defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct TryOnParams {
    /// Region-selection instruction (default: "auto")
    pub masking_mode: String,
    /// Diffusion iteration count (default: 3)
    pub denoising_steps: u32,
    /// Reproducibility seed (default: 3)
    pub seed: i64,
    /// Delegate mask computation to the service (default: true)
    pub use_auto_mask: bool,
    /// Run the service's output enhancement pass (default: true)
    pub enhance_output: bool,
}

impl Default for TryOnParams {
    fn default() -> Self {
        Self {
            masking_mode: default_masking_mode(),
            denoising_steps: 3,
            seed: 3,
            use_auto_mask: true,
            enhance_output: true,
        }
    }
}

impl TryOnParams {
    /// Parse the optional text fields of the multipart body.
    ///
    /// Every field is enumerated here; anything absent takes its default,
    /// anything present must parse or the request is rejected.
    pub fn parse(fields: &HashMap<String, String>) -> Result<Self, ApiError> {
        let mut params = TryOnParams::default();

        if let Some(value) = fields.get("maskingMode") {
            let mode = value.trim().to_lowercase();
            if !SUPPORTED_MASKING_MODES.contains(&mode.as_str()) {
                return Err(ApiError::ValidationError {
                    field: "maskingMode".to_string(),
                    message: format!(
                        "unsupported mode '{}', supported: {:?}",
                        value, SUPPORTED_MASKING_MODES
                    ),
                });
            }
            params.masking_mode = mode;
        }

        if let Some(value) = fields.get("denoisingSteps") {
            let steps = value
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|steps| *steps > 0)
                .ok_or_else(|| ApiError::ValidationError {
                    field: "denoisingSteps".to_string(),
                    message: format!("must be a positive integer, got '{}'", value),
                })?;
            params.denoising_steps = steps;
        }

        if let Some(value) = fields.get("seed") {
            params.seed =
                value
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| ApiError::ValidationError {
                        field: "seed".to_string(),
                        message: format!("must be an integer, got '{}'", value),
                    })?;
        }

        if let Some(value) = fields.get("useAutoMask") {
            params.use_auto_mask = parse_bool("useAutoMask", value)?;
        }

        if let Some(value) = fields.get("enhanceOutput") {
            params.enhance_output = parse_bool("enhanceOutput", value)?;
        }

        Ok(params)
    }
}

fn parse_bool(field: &str, value: &str) -> Result<bool, ApiError> {
    match value.trim().to_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ApiError::ValidationError {
            field: field.to_string(),
            message: format!("must be 'true' or 'false', got '{}'", value),
        }),
    }
}
