// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Azure Key Vault secret backend.
//!
//! Fetches the secret over the Key Vault REST API, authenticating with an
//! access token from the Azure instance metadata service (managed identity).
//! Both calls are HTTPS-only JSON fetches with a bounded timeout.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use super::{Secret, SecretError, SecretStore};

/// Key Vault REST API version.
const API_VERSION: &str = "7.4";

/// Managed-identity token endpoint on the instance metadata service.
const IMDS_TOKEN_URL: &str = "http://169.254.169.254/metadata/identity/oauth2/token";

/// OAuth resource for Key Vault data-plane access.
const VAULT_RESOURCE: &str = "https://vault.azure.net";

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct SecretBundle {
    value: String,
}

/// Key Vault backend bound to one vault URL.
pub struct KeyVaultStore {
    vault_url: String,
    client: reqwest::Client,
}

impl KeyVaultStore {
    pub fn new(vault_url: String) -> Self {
        Self {
            vault_url,
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Acquire a managed-identity access token for the vault resource.
    async fn acquire_token(&self) -> Result<String, SecretError> {
        let response = self
            .client
            .get(IMDS_TOKEN_URL)
            .query(&[("api-version", "2018-02-01"), ("resource", VAULT_RESOURCE)])
            .header("Metadata", "true")
            .send()
            .await
            .map_err(|e| SecretError::Unavailable(format!("identity endpoint: {e}")))?;

        if !response.status().is_success() {
            return Err(SecretError::Unavailable(format!(
                "HTTP {} from identity endpoint",
                response.status()
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| SecretError::Unavailable(format!("identity endpoint: {e}")))?;
        Ok(token.access_token)
    }
}

#[async_trait]
impl SecretStore for KeyVaultStore {
    async fn fetch(&self, name: &str) -> Result<Secret, SecretError> {
        let token = self.acquire_token().await?;

        let url = format!(
            "{}/secrets/{}",
            self.vault_url.trim_end_matches('/'),
            name
        );
        let response = self
            .client
            .get(&url)
            .query(&[("api-version", API_VERSION)])
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| SecretError::Unavailable(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(SecretError::NotFound(name.to_string()));
        }
        if !response.status().is_success() {
            return Err(SecretError::Unavailable(format!(
                "HTTP {} from vault",
                response.status()
            )));
        }

        let bundle: SecretBundle = response
            .json()
            .await
            .map_err(|e| SecretError::Unavailable(e.to_string()))?;

        Secret::new(bundle.value).ok_or_else(|| SecretError::Empty(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vault_url_trailing_slash_is_tolerated() {
        let store = KeyVaultStore::new("https://rodc-kv.vault.azure.net/".to_string());
        let url = format!("{}/secrets/{}", store.vault_url.trim_end_matches('/'), "smilestoken");
        assert_eq!(url, "https://rodc-kv.vault.azure.net/secrets/smilestoken");
    }
}
