// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! Shared-secret API key authentication for the SMILES gateway.
//!
//! ## Auth Flow
//!
//! 1. Client sends `SMILES_API_KEY: <credential>` on every request
//! 2. The gateway:
//!    - Hashes both the supplied credential and the stored secret (SHA-256)
//!    - Compares the digests in constant time
//!    - Rejects with 403 before any other stage runs
//!
//! ## Security
//!
//! - The secret is fetched once at startup; there is no in-process refresh
//! - Digest-before-compare equalizes input length, so comparison time
//!   depends only on the digest width
//! - Responses never reveal whether the key was absent or wrong
//! - Credentials are request-scoped and never logged

pub mod error;
pub mod extractor;
pub mod verifier;

pub use error::AuthError;
pub use extractor::{Auth, API_KEY_HEADER};
pub use verifier::ApiKeyVerifier;
