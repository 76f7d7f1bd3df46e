// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Reqwest client for the remote try-on synthesis service

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

use super::canvas::EditorCanvas;

/// Errors from the remote try-on call
#[derive(Error, Debug)]
pub enum TryOnClientError {
    /// Network failure or timeout reaching the service
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Service answered with a non-success HTTP status
    #[error("try-on service returned {status}: {body}")]
    RemoteStatus { status: u16, body: String },

    /// Service answered 200 but the payload shape is wrong
    #[error("malformed try-on response: {0}")]
    MalformedResponse(String),
}

/// Invocation payload for one try-on generation.
///
/// The service takes its arguments positionally, in a fixed order:
/// [canvas, garment, masking_mode, use_auto_mask, enhance_output,
/// denoising_steps, seed].
#[derive(Debug, Clone)]
pub struct TryOnJob {
    /// Human photo wrapped as an editor canvas
    pub canvas: EditorCanvas,
    /// Garment photo as a data URL
    pub garment: String,
    /// Region-selection instruction ("auto" or "manual")
    pub masking_mode: String,
    /// Delegate mask computation to the service
    pub use_auto_mask: bool,
    /// Run the service's output enhancement pass
    pub enhance_output: bool,
    /// Diffusion iteration count
    pub denoising_steps: u32,
    /// Reproducibility seed
    pub seed: i64,
}

impl TryOnJob {
    /// Build the positional `data` array the predict route expects
    pub fn to_predict_body(&self) -> serde_json::Value {
        json!({
            "data": [
                &self.canvas,
                self.garment,
                self.masking_mode,
                self.use_auto_mask,
                self.enhance_output,
                self.denoising_steps,
                self.seed,
            ]
        })
    }
}

/// Ordered pair of encoded images returned by the service
#[derive(Debug, Clone, PartialEq)]
pub struct TryOnImages {
    /// The generated composite
    pub output_image: String,
    /// The human photo with the replaced region masked
    pub masked_image: String,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    data: Vec<serde_json::Value>,
}

/// Seam between the HTTP handler and the concrete try-on client, so tests
/// can substitute a stub service.
#[async_trait]
pub trait TryOnBackend: Send + Sync {
    /// Perform one try-on generation. Exactly one remote call; no retries.
    async fn try_on(&self, job: &TryOnJob) -> Result<TryOnImages, TryOnClientError>;

    /// Whether the remote service is reachable
    async fn health_check(&self) -> bool {
        true
    }
}

/// Client for the hosted try-on service
pub struct TryOnClient {
    client: Client,
    endpoint: String,
}

impl TryOnClient {
    /// Create a new TryOnClient with a bounded request timeout
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, TryOnClientError> {
        let client = Client::builder().timeout(timeout).build()?;

        let endpoint = endpoint.trim_end_matches('/').to_string();
        info!("Try-on client configured: endpoint={}", endpoint);

        Ok(Self { client, endpoint })
    }

    /// Get the configured endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TryOnBackend for TryOnClient {
    async fn try_on(&self, job: &TryOnJob) -> Result<TryOnImages, TryOnClientError> {
        let url = format!("{}/api/predict", self.endpoint);
        debug!("Try-on predict POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(&job.to_predict_body())
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(TryOnClientError::RemoteStatus { status, body });
        }

        let predict: PredictResponse = response
            .json()
            .await
            .map_err(|e| TryOnClientError::MalformedResponse(e.to_string()))?;

        if predict.data.len() < 2 {
            return Err(TryOnClientError::MalformedResponse(format!(
                "expected 2 images, got {}",
                predict.data.len()
            )));
        }

        let mut images = predict.data.into_iter();
        let output_image = images
            .next()
            .and_then(|v| v.as_str().map(|s| s.to_string()))
            .ok_or_else(|| {
                TryOnClientError::MalformedResponse("output image is not a string".to_string())
            })?;
        let masked_image = images
            .next()
            .and_then(|v| v.as_str().map(|s| s.to_string()))
            .ok_or_else(|| {
                TryOnClientError::MalformedResponse("masked image is not a string".to_string())
            })?;

        Ok(TryOnImages {
            output_image,
            masked_image,
        })
    }

    async fn health_check(&self) -> bool {
        match self
            .client
            .get(format!("{}/health", self.endpoint))
            .send()
            .await
        {
            Ok(resp) => resp.status().is_success(),
            Err(e) => {
                debug!("Try-on health check failed: {}", e);
                false
            }
        }
    }
}
