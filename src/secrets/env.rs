// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Environment-variable secret backend for local runs and tests.

use async_trait::async_trait;

use super::{Secret, SecretError, SecretStore};

/// Reads the secret from the environment variable named by the entry name.
pub struct EnvStore;

#[async_trait]
impl SecretStore for EnvStore {
    async fn fetch(&self, name: &str) -> Result<Secret, SecretError> {
        let value = std::env::var(name).map_err(|_| SecretError::NotFound(name.to_string()))?;
        Secret::new(value).ok_or_else(|| SecretError::Empty(name.to_string()))
    }
}
