// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Timing-safe API key verification.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::secrets::Secret;

/// Verifies inbound credentials against the process-wide secret.
///
/// The secret is set once at startup and read many times; no other component
/// may read or copy it. Verification hashes both sides to a fixed-length
/// digest before comparing, so the comparison time depends only on the digest
/// width, not on the secret's length or the credential's content. Comparing
/// the raw strings, even with a constant-time primitive, would leak length.
pub struct ApiKeyVerifier {
    secret: Secret,
}

impl ApiKeyVerifier {
    pub fn new(secret: Secret) -> Self {
        Self { secret }
    }

    /// Check a supplied credential against the stored secret.
    ///
    /// `None` returns false immediately; no hashing is needed when nothing
    /// was supplied, and a missing header is not an interesting timing
    /// target.
    pub fn verify(&self, credential: Option<&str>) -> bool {
        let Some(credential) = credential else {
            return false;
        };

        let supplied = Sha256::digest(credential.as_bytes());
        let stored = Sha256::digest(self.secret.expose().as_bytes());

        supplied.as_slice().ct_eq(stored.as_slice()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verifier(secret: &str) -> ApiKeyVerifier {
        ApiKeyVerifier::new(Secret::new(secret.to_string()).unwrap())
    }

    #[test]
    fn exact_match_verifies() {
        assert!(verifier("correct-horse").verify(Some("correct-horse")));
    }

    #[test]
    fn wrong_credential_fails() {
        let v = verifier("correct-horse");
        assert!(!v.verify(Some("correct-horsf")));
        assert!(!v.verify(Some("Correct-horse")));
        assert!(!v.verify(Some("correct-hors")));
        assert!(!v.verify(Some("correct-horse-battery")));
    }

    #[test]
    fn empty_credential_fails() {
        assert!(!verifier("correct-horse").verify(Some("")));
    }

    #[test]
    fn absent_credential_fails() {
        assert!(!verifier("correct-horse").verify(None));
    }

    #[test]
    fn verification_is_repeatable() {
        let v = verifier("correct-horse");
        assert!(v.verify(Some("correct-horse")));
        assert!(v.verify(Some("correct-horse")));
        assert!(!v.verify(Some("other")));
    }
}
