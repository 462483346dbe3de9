// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Axum extractor for API-key-gated handlers.
//!
//! Use the `Auth` extractor in handlers to require a valid key:
//!
//! ```rust,ignore
//! async fn my_handler(_auth: Auth) -> impl IntoResponse {
//!     // only reached with a valid SMILES_API_KEY header
//! }
//! ```
//!
//! The extractor runs from request *parts*, before any body bytes are
//! deserialized, so authentication gates payload handling.

use axum::{extract::FromRequestParts, http::request::Parts};

use super::AuthError;
use crate::state::AppState;

/// Header carrying the client credential.
pub const API_KEY_HEADER: &str = "SMILES_API_KEY";

/// Extractor that rejects requests without a valid API key.
pub struct Auth;

impl FromRequestParts<AppState> for Auth {
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        // The credential is request-scoped; it is verified and dropped, never
        // stored or logged.
        let credential = parts
            .headers
            .get(API_KEY_HEADER)
            .and_then(|value| value.to_str().ok());

        state.pipeline.authorize(credential)?;
        Ok(Auth)
    }
}
