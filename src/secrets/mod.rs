// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Secret Backends
//!
//! Retrieval of the process-wide API key secret from a backing vault. Exactly
//! one fetch happens, at startup; a failure there is fatal and the process
//! never reaches a serving state. Serving without a comparison secret would
//! make every request either always-reject or compare against an undefined
//! value.
//!
//! ## Backends
//!
//! - [`ParameterStore`] - AWS SSM Parameter Store, value decrypted server-side
//! - [`KeyVaultStore`] - Azure Key Vault via its REST API, authenticated with
//!   a managed-identity token
//! - [`EnvStore`] - plain environment variable, for local runs and tests
//!
//! The backend is selected by configuration, never by conditional source
//! branching at the call sites.

pub mod env;
pub mod key_vault;
pub mod parameter_store;

use std::fmt;

use async_trait::async_trait;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::config::{Config, SecretBackendKind};

pub use env::EnvStore;
pub use key_vault::KeyVaultStore;
pub use parameter_store::ParameterStore;

/// The API key secret.
///
/// Opaque, non-empty, immutable for the lifetime of the process. The memory
/// is zeroed on drop, and `Debug` output is redacted so the value cannot leak
/// through logs or error messages. Access requires an explicit
/// [`Secret::expose`] call, which keeps uses grep-able.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Secret(String);

impl Secret {
    /// Wrap a retrieved secret value.
    ///
    /// Returns `None` for an empty value: the non-empty invariant is
    /// enforced at construction, not at comparison time.
    pub fn new(value: String) -> Option<Self> {
        if value.is_empty() {
            None
        } else {
            Some(Secret(value))
        }
    }

    /// The raw secret bytes, for digest computation only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret([REDACTED])")
    }
}

/// Error raised when the secret cannot be retrieved.
///
/// All variants are fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum SecretError {
    #[error("secret entry not found: {0}")]
    NotFound(String),

    #[error("secret entry {0} is empty")]
    Empty(String),

    #[error("secret backend unavailable: {0}")]
    Unavailable(String),
}

/// A backing vault that can produce the named secret.
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Retrieve one named secret.
    ///
    /// Fails with [`SecretError`] if the entry does not exist, access is
    /// denied, or the backend call errors.
    async fn fetch(&self, name: &str) -> Result<Secret, SecretError>;
}

/// Build the secret store selected by configuration.
pub fn store_for(config: &Config) -> Box<dyn SecretStore> {
    match config.secret_backend {
        SecretBackendKind::ParameterStore => {
            Box::new(ParameterStore::new(config.aws_region.clone()))
        }
        SecretBackendKind::KeyVault => Box::new(KeyVaultStore::new(
            config
                .key_vault_url
                .clone()
                .expect("key-vault backend selected without KEY_VAULT_URL"),
        )),
        SecretBackendKind::Env => Box::new(EnvStore),
    }
}
