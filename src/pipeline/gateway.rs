// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Two-stage transform orchestration.
//!
//! The gateway invokes the external normalizer in strict mode first. If that
//! attempt fails for any reason, it makes exactly one more attempt in
//! lenient-repair mode. There is no backoff, no third attempt, and no
//! distinction between transient and permanent normalizer errors; the second
//! failure rejects the molecule.

use std::sync::Arc;

use crate::normalizer::Normalizer;

/// Why a molecule was rejected after both attempts failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectReason(pub String);

/// Result of the strict-then-lenient transform protocol.
///
/// Produced fresh per request, never cached. `Strict` and `Repaired` map to
/// the same success shape at the external interface; the distinction exists
/// for observability only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformOutcome {
    /// The strict attempt succeeded.
    Strict(String),
    /// The strict attempt failed and the lenient-repair attempt succeeded.
    Repaired(String),
    /// Both attempts failed; the molecule is not valid or repairable.
    Rejected(RejectReason),
}

/// Orchestrates the external normalizer.
pub struct TransformGateway {
    normalizer: Arc<dyn Normalizer>,
}

impl TransformGateway {
    pub fn new(normalizer: Arc<dyn Normalizer>) -> Self {
        Self { normalizer }
    }

    /// Run the strict-then-lenient protocol for one molecule.
    pub async fn transform(&self, molecule: &str, vocabulary: &[&str]) -> TransformOutcome {
        match self.normalizer.normalize(molecule, vocabulary, false).await {
            Ok(normalized) => TransformOutcome::Strict(normalized),
            Err(strict_err) => {
                tracing::debug!(error = %strict_err, "strict normalization failed, retrying with repair");
                match self.normalizer.normalize(molecule, vocabulary, true).await {
                    Ok(repaired) => TransformOutcome::Repaired(repaired),
                    Err(lenient_err) => {
                        tracing::warn!(error = %lenient_err, "molecule rejected after repair attempt");
                        TransformOutcome::Rejected(RejectReason(lenient_err.to_string()))
                    }
                }
            }
        }
    }
}
