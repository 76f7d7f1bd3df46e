// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Tests for TryOnClient and the predict payload shape

use std::time::Duration;

use tryon_relay_node::tryon::{EditorCanvas, TryOnBackend, TryOnClient, TryOnClientError, TryOnJob};

fn sample_job() -> TryOnJob {
    TryOnJob {
        canvas: EditorCanvas::new("data:image/png;base64,aHVtYW4=".to_string()),
        garment: "data:image/jpeg;base64,Z2FybWVudA==".to_string(),
        masking_mode: "auto".to_string(),
        use_auto_mask: true,
        enhance_output: true,
        denoising_steps: 3,
        seed: 3,
    }
}

#[test]
fn test_tryon_client_new() {
    let client = TryOnClient::new("http://localhost:7860", Duration::from_secs(120)).unwrap();
    assert_eq!(client.endpoint(), "http://localhost:7860");
}

#[test]
fn test_tryon_client_trailing_slash_trimmed() {
    let client = TryOnClient::new("http://localhost:7860/", Duration::from_secs(120)).unwrap();
    assert_eq!(client.endpoint(), "http://localhost:7860");
}

#[test]
fn test_predict_body_positional_order() {
    let body = sample_job().to_predict_body();
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 7);

    // Fixed collaborator order: canvas, garment, masking mode, auto-mask
    // flag, enhance flag, steps, seed
    assert_eq!(data[0]["background"], "data:image/png;base64,aHVtYW4=");
    assert!(data[0]["layers"].as_array().unwrap().is_empty());
    assert!(data[0]["composite"].is_null());
    assert_eq!(data[1], "data:image/jpeg;base64,Z2FybWVudA==");
    assert_eq!(data[2], "auto");
    assert_eq!(data[3], true);
    assert_eq!(data[4], true);
    assert_eq!(data[5], 3);
    assert_eq!(data[6], 3);
}

#[test]
fn test_predict_body_carries_custom_params() {
    let mut job = sample_job();
    job.masking_mode = "manual".to_string();
    job.use_auto_mask = false;
    job.enhance_output = false;
    job.denoising_steps = 20;
    job.seed = -1;

    let body = job.to_predict_body();
    let data = body["data"].as_array().unwrap();
    assert_eq!(data[2], "manual");
    assert_eq!(data[3], false);
    assert_eq!(data[4], false);
    assert_eq!(data[5], 20);
    assert_eq!(data[6], -1);
}

#[tokio::test]
async fn test_health_check_unreachable() {
    let client = TryOnClient::new("http://127.0.0.1:59999", Duration::from_secs(1)).unwrap();
    let healthy = client.health_check().await;
    assert!(!healthy);
}

#[tokio::test]
async fn test_try_on_unreachable_is_transport_error() {
    let client = TryOnClient::new("http://127.0.0.1:59999", Duration::from_secs(1)).unwrap();
    let result = client.try_on(&sample_job()).await;
    match result {
        Err(TryOnClientError::Transport(_)) => {}
        other => panic!("expected transport error, got {:?}", other.map(|_| ())),
    }
}
