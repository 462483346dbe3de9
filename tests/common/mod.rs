// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Shared fixtures for integration tests.

use std::sync::Arc;

use async_trait::async_trait;
use smiles_gateway::normalizer::{Normalizer, NormalizerError};
use smiles_gateway::pipeline::RequestPipeline;
use smiles_gateway::secrets::Secret;
use smiles_gateway::state::AppState;

/// The API key every test state is configured with.
pub const TEST_API_KEY: &str = "integration-test-key";

/// In-process stand-in for the external normalization service.
///
/// Strict mode echoes molecules built purely from vocabulary tokens and
/// fails on anything else. Repair mode drops unknown characters first, and
/// fails if nothing survives. This mirrors the external contract closely
/// enough to drive every pipeline path.
pub struct FakeNormalizer;

fn strip_unknown(molecule: &str, vocabulary: &[&str]) -> String {
    // Greedy longest-token-first scan; unknown characters are dropped.
    let mut tokens: Vec<&str> = vocabulary.to_vec();
    tokens.sort_by_key(|t| std::cmp::Reverse(t.len()));

    let mut out = String::new();
    let mut rest = molecule;
    'outer: while !rest.is_empty() {
        for token in &tokens {
            if let Some(tail) = rest.strip_prefix(token) {
                out.push_str(token);
                rest = tail;
                continue 'outer;
            }
        }
        let mut chars = rest.chars();
        chars.next();
        rest = chars.as_str();
    }
    out
}

#[async_trait]
impl Normalizer for FakeNormalizer {
    async fn normalize(
        &self,
        molecule: &str,
        vocabulary: &[&str],
        fix: bool,
    ) -> Result<String, NormalizerError> {
        let cleaned = strip_unknown(molecule, vocabulary);
        if !fix && cleaned != molecule {
            return Err(NormalizerError::Rejected("unsupported token".to_string()));
        }
        if cleaned.is_empty() {
            return Err(NormalizerError::Rejected("nothing to normalize".to_string()));
        }
        Ok(cleaned)
    }
}

/// Application state wired with the fake normalizer and the test key.
pub fn test_state() -> AppState {
    let secret = Secret::new(TEST_API_KEY.to_string()).expect("non-empty test key");
    AppState::new(RequestPipeline::new(secret, Arc::new(FakeNormalizer)))
}
