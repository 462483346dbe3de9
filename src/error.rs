// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Client-facing API errors.
//!
//! Every failure that crosses the gateway boundary is converted into an
//! [`ApiError`] first; internal error types (secret, normalizer, config) are
//! never serialized to a caller.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub error_code: &'static str,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>, error_code: &'static str) -> Self {
        Self {
            status,
            message: message.into(),
            error_code,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message, "not_found")
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message, "bad_request")
    }

    pub fn unprocessable(message: impl Into<String>, error_code: &'static str) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message, error_code)
    }

    /// The JSON body this error serializes to.
    ///
    /// Shared between the Axum `IntoResponse` path and the serverless
    /// adapter so both substrates emit identical envelopes.
    pub fn body_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": self.message,
            "error_code": self.error_code,
        })
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = self.body_json();
        (self.status, Json(body)).into_response()
    }
}
