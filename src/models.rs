// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! Request and response data structures used by the REST API. All types
//! derive `Serialize`, `Deserialize`, and `ToSchema` for automatic JSON
//! handling and OpenAPI documentation.
//!
//! The inbound [`Payload`] is deliberately *not* deserialized directly by the
//! framework: handlers receive raw JSON and run it through the payload
//! validator so that shape errors map to explicit, typed outcomes.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// =============================================================================
// Transform Models
// =============================================================================

/// A validated transform request body.
///
/// Produced only by the payload validator; `smiles` is guaranteed to be
/// within the configured length bound.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Payload {
    /// The SMILES molecule descriptor to normalize (length ≤ 54).
    pub smiles: String,
}

/// Successful transform response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct TransformResponse {
    /// The normalized SMILES string.
    pub smiles: String,
}

// =============================================================================
// Service Models
// =============================================================================

/// Response for the authenticated index route.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct InfoResponse {
    /// Service banner.
    pub info: String,
}

impl InfoResponse {
    /// The fixed banner returned by `GET /`.
    pub fn up() -> Self {
        InfoResponse {
            info: "SMILES-API up".to_string(),
        }
    }
}

/// Simple health check response for liveness probes.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
}
