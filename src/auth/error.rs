// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Authentication failure.
///
/// The two variants are distinguished internally (they carry different trace
/// events) but serialize to byte-identical responses: a caller must not be
/// able to tell an absent key from a wrong one.
#[derive(Debug, PartialEq, Eq)]
pub enum AuthError {
    /// No `SMILES_API_KEY` header present.
    MissingApiKey,
    /// Credential did not match the stored secret.
    InvalidApiKey,
}

impl AuthError {
    /// Both variants map to 403.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::FORBIDDEN
    }

    /// The JSON body this error serializes to, identical for all variants.
    pub fn body_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": "Invalid API Key",
            "error_code": "invalid_api_key",
        })
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Deliberately uniform; see type-level comment.
        write!(f, "Invalid API Key")
    }
}

impl std::error::Error for AuthError {}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.body_json())).into_response()
    }
}
