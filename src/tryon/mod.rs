// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Client for the hosted virtual try-on synthesis service

pub mod canvas;
pub mod client;

pub use canvas::{to_data_url, EditorCanvas};
pub use client::{TryOnBackend, TryOnClient, TryOnClientError, TryOnImages, TryOnJob};
