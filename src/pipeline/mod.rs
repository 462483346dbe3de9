// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Request Pipeline
//!
//! Composes authentication → payload validation → transform into the
//! per-request flow, with strict short-circuit ordering: the first failing
//! stage wins and no later stage executes. The pipeline is assembled once at
//! startup and shared read-only across requests; it holds no per-request
//! state.

pub mod gateway;
pub mod validate;

use std::sync::Arc;

use axum::response::{IntoResponse, Response};

use crate::auth::{ApiKeyVerifier, AuthError};
use crate::error::ApiError;
use crate::models::TransformResponse;
use crate::normalizer::Normalizer;
use crate::secrets::Secret;
use crate::vocabulary::{MAX_SMILES_LENGTH, SMILES_VOCABULARY};

pub use gateway::{RejectReason, TransformGateway, TransformOutcome};
pub use validate::{PayloadValidator, ValidationError};

/// A stage failure, mapped to a client-facing response.
#[derive(Debug)]
pub enum PipelineError {
    /// Missing or mismatched credential; 403.
    Auth(AuthError),
    /// Malformed payload; 422. Never reaches the transform stage.
    Validation(ValidationError),
    /// Both transform attempts failed; 422, never a 200.
    Rejected(RejectReason),
}

impl PipelineError {
    fn to_api_error(&self) -> ApiError {
        match self {
            // AuthError carries its own uniform 403 mapping.
            PipelineError::Auth(e) => ApiError::new(e.status_code(), e.to_string(), "invalid_api_key"),
            PipelineError::Validation(e) => ApiError::unprocessable(e.to_string(), e.error_code()),
            PipelineError::Rejected(_) => {
                ApiError::unprocessable("Not a valid SMILES!", "invalid_smiles")
            }
        }
    }

    /// HTTP status for this failure.
    pub fn status_code(&self) -> axum::http::StatusCode {
        self.to_api_error().status
    }

    /// JSON body for this failure, shared across substrates.
    pub fn body_json(&self) -> serde_json::Value {
        self.to_api_error().body_json()
    }
}

impl From<AuthError> for PipelineError {
    fn from(e: AuthError) -> Self {
        PipelineError::Auth(e)
    }
}

impl IntoResponse for PipelineError {
    fn into_response(self) -> Response {
        self.to_api_error().into_response()
    }
}

/// The startup-assembled request pipeline.
pub struct RequestPipeline {
    verifier: ApiKeyVerifier,
    validator: PayloadValidator,
    gateway: TransformGateway,
    vocabulary: &'static [&'static str],
}

impl RequestPipeline {
    /// Assemble the pipeline around the fetched secret and the normalizer.
    pub fn new(secret: Secret, normalizer: Arc<dyn Normalizer>) -> Self {
        Self {
            verifier: ApiKeyVerifier::new(secret),
            validator: PayloadValidator::new(MAX_SMILES_LENGTH),
            gateway: TransformGateway::new(normalizer),
            vocabulary: SMILES_VOCABULARY,
        }
    }

    /// Stage 1: authentication.
    ///
    /// Must succeed before any payload work happens.
    pub fn authorize(&self, credential: Option<&str>) -> Result<(), AuthError> {
        match credential {
            None => Err(AuthError::MissingApiKey),
            Some(value) if self.verifier.verify(Some(value)) => Ok(()),
            Some(_) => Err(AuthError::InvalidApiKey),
        }
    }

    /// Stages 2 and 3: validation, then the two-stage transform.
    ///
    /// Callers must have run [`RequestPipeline::authorize`] first; the HTTP
    /// adapter does so via the `Auth` extractor before body extraction.
    pub async fn validate_and_transform(
        &self,
        raw: &serde_json::Value,
    ) -> Result<TransformResponse, PipelineError> {
        let payload = self
            .validator
            .validate(raw)
            .map_err(PipelineError::Validation)?;

        match self.gateway.transform(&payload.smiles, self.vocabulary).await {
            TransformOutcome::Strict(smiles) | TransformOutcome::Repaired(smiles) => {
                Ok(TransformResponse { smiles })
            }
            TransformOutcome::Rejected(reason) => Err(PipelineError::Rejected(reason)),
        }
    }

    /// The full per-request flow, for substrates without extractor support.
    pub async fn handle_transform(
        &self,
        credential: Option<&str>,
        raw: &serde_json::Value,
    ) -> Result<TransformResponse, PipelineError> {
        self.authorize(credential)?;
        self.validate_and_transform(raw).await
    }
}
