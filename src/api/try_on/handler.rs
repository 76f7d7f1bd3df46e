// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Try-on relay endpoint handler

use axum::{
    extract::{Multipart, State},
    Json,
};
use std::collections::HashMap;
use std::time::Instant;
use tracing::{debug, error, info};
use uuid::Uuid;

use super::request::{TryOnParams, UploadedImage};
use super::response::TryOnResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::tryon::{to_data_url, EditorCanvas, TryOnJob};

/// Optional text fields of the multipart body; anything else is ignored
const PARAM_FIELDS: &[&str] = &[
    "maskingMode",
    "denoisingSteps",
    "seed",
    "useAutoMask",
    "enhanceOutput",
];

/// POST /api/virtual-tryon - Relay a try-on generation
///
/// Pipeline:
/// 1. Extract `human` and `garment` file parts plus optional parameters
/// 2. Validate sizes and media types (service never contacted on failure)
/// 3. Wrap the human photo as an editor canvas
/// 4. Exactly one call to the try-on service
/// 5. Map the image pair onto the success envelope
pub async fn try_on_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<TryOnResponse>, ApiError> {
    let request_id = Uuid::new_v4();
    debug!("[{}] try-on request received", request_id);

    let mut human: Option<UploadedImage> = None;
    let mut garment: Option<UploadedImage> = None;
    let mut text_fields: HashMap<String, String> = HashMap::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::ValidationError {
            field: "body".to_string(),
            message: format!("malformed multipart body: {}", e),
        })?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "human" | "garment" => {
                let content_type = field.content_type().map(|s| s.to_string());
                let filename = field.file_name().map(|s| s.to_string());
                let bytes = field.bytes().await.map_err(|e| ApiError::ValidationError {
                    field: name.clone(),
                    message: format!("failed to read file part: {}", e),
                })?;
                let upload = UploadedImage {
                    bytes,
                    content_type,
                    filename,
                };
                if name == "human" {
                    human = Some(upload);
                } else {
                    garment = Some(upload);
                }
            }
            name_str if PARAM_FIELDS.contains(&name_str) => {
                let value = field.text().await.map_err(|e| ApiError::ValidationError {
                    field: name_str.to_string(),
                    message: format!("failed to read field: {}", e),
                })?;
                text_fields.insert(name_str.to_string(), value);
            }
            // Unknown parts are drained and dropped
            _ => {
                let _ = field.bytes().await;
            }
        }
    }

    let human = human.ok_or_else(|| ApiError::MissingField("human".to_string()))?;
    let garment = garment.ok_or_else(|| ApiError::MissingField("garment".to_string()))?;

    let max_bytes = state.config.max_upload_bytes;
    let human_type = human.validate("human", max_bytes)?;
    let garment_type = garment.validate("garment", max_bytes)?;

    let params = TryOnParams::parse(&text_fields)?;

    debug!(
        "[{}] dispatching try-on: human={} bytes ({}), garment={} bytes ({}), params={:?}",
        request_id,
        human.bytes.len(),
        human_type,
        garment.bytes.len(),
        garment_type,
        params
    );

    let job = TryOnJob {
        canvas: EditorCanvas::new(to_data_url(&human_type, &human.bytes)),
        garment: to_data_url(&garment_type, &garment.bytes),
        masking_mode: params.masking_mode,
        use_auto_mask: params.use_auto_mask,
        enhance_output: params.enhance_output,
        denoising_steps: params.denoising_steps,
        seed: params.seed,
    };

    let start = Instant::now();
    let images = state.backend.try_on(&job).await.map_err(|e| {
        // Full detail stays in the server log; the caller sees a generic 500
        error!("[{}] try-on generation failed: {}", request_id, e);
        ApiError::CollaboratorError
    })?;

    info!(
        "[{}] try-on generated in {}ms",
        request_id,
        start.elapsed().as_millis()
    );

    Ok(Json(TryOnResponse::new(images)))
}
