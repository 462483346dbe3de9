// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! AWS SSM Parameter Store secret backend.
//!
//! Retrieves a SecureString parameter with server-side decryption. The
//! parameter value is decrypted by SSM using the KMS key specified at
//! creation; the plaintext only ever exists in this process.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};

use super::{Secret, SecretError, SecretStore};

/// Parameter Store backend bound to one region.
pub struct ParameterStore {
    region: String,
}

impl ParameterStore {
    pub fn new(region: String) -> Self {
        Self { region }
    }
}

#[async_trait]
impl SecretStore for ParameterStore {
    async fn fetch(&self, name: &str) -> Result<Secret, SecretError> {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(self.region.clone()))
            .load()
            .await;
        let client = aws_sdk_ssm::Client::new(&sdk_config);

        let response = client
            .get_parameter()
            .name(name)
            .with_decryption(true)
            .send()
            .await
            .map_err(|e| SecretError::Unavailable(e.to_string()))?;

        let value = response
            .parameter()
            .and_then(|p| p.value())
            .ok_or_else(|| SecretError::NotFound(name.to_string()))?;

        Secret::new(value.to_string()).ok_or_else(|| SecretError::Empty(name.to_string()))
    }
}
