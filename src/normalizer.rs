// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! External normalization service client.
//!
//! The normalization algorithm itself is an external collaborator with the
//! contract `normalize(molecule, vocabulary, fix) -> normalized string`. The
//! gateway only distinguishes "this attempt succeeded" from "this attempt
//! failed"; it never inspects *why* a call failed.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Error raised by a single normalization attempt.
///
/// The transform gateway treats every variant uniformly as a failed attempt;
/// the variants exist for logging only.
#[derive(Debug, thiserror::Error)]
pub enum NormalizerError {
    #[error("normalizer request failed: {0}")]
    Request(String),

    #[error("normalizer returned HTTP {0}")]
    Status(u16),

    #[error("normalizer rejected molecule: {0}")]
    Rejected(String),

    #[error("normalizer response malformed: {0}")]
    Decode(String),
}

/// A service that can normalize a SMILES string against a token vocabulary.
#[async_trait]
pub trait Normalizer: Send + Sync {
    /// Run one normalization attempt.
    ///
    /// With `fix = false` the service fails outright on any token or
    /// structure it cannot interpret; with `fix = true` it attempts to
    /// repair minor malformations before failing.
    async fn normalize(
        &self,
        molecule: &str,
        vocabulary: &[&str],
        fix: bool,
    ) -> Result<String, NormalizerError>;
}

#[derive(Serialize)]
struct NormalizeRequest<'a> {
    smiles: &'a str,
    vocabulary: &'a [&'a str],
    fix: bool,
}

#[derive(Deserialize)]
struct NormalizeResponse {
    smiles: String,
}

#[derive(Deserialize)]
struct NormalizeErrorBody {
    error: String,
}

/// HTTP client for the normalization service.
pub struct HttpNormalizer {
    base_url: String,
    client: reqwest::Client,
}

impl HttpNormalizer {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .expect("Failed to create HTTP client"),
        }
    }
}

#[async_trait]
impl Normalizer for HttpNormalizer {
    async fn normalize(
        &self,
        molecule: &str,
        vocabulary: &[&str],
        fix: bool,
    ) -> Result<String, NormalizerError> {
        let url = format!("{}/normalize", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .post(&url)
            .json(&NormalizeRequest {
                smiles: molecule,
                vocabulary,
                fix,
            })
            .send()
            .await
            .map_err(|e| NormalizerError::Request(e.to_string()))?;

        let status = response.status();
        if status.is_client_error() {
            // The service reports unparseable molecules as client errors
            // with a JSON reason; fall back to the bare status otherwise.
            let reason = response
                .json::<NormalizeErrorBody>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| format!("HTTP {status}"));
            return Err(NormalizerError::Rejected(reason));
        }
        if !status.is_success() {
            return Err(NormalizerError::Status(status.as_u16()));
        }

        let body: NormalizeResponse = response
            .json()
            .await
            .map_err(|e| NormalizerError::Decode(e.to_string()))?;
        Ok(body.smiles)
    }
}
