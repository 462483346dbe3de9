// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! This module defines environment variable names and the startup-assembled
//! [`Config`] struct. Configuration is read from the environment exactly once
//! in `main` and passed by reference from there; no module reads ambient
//! environment state at request time.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `SECRET_BACKEND` | Secret backend (`parameter-store`, `key-vault`, `env`) | Required |
//! | `SECRET_NAME` | Name of the API key entry in the backend | Required |
//! | `AWS_REGION` | Region for the parameter-store backend | `eu-north-1` |
//! | `KEY_VAULT_URL` | Vault URL for the key-vault backend | Required for key-vault |
//! | `NORMALIZER_URL` | Base URL of the external normalization service | Required |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::env;

/// Environment variable name for the server bind address.
pub const HOST_ENV: &str = "HOST";

/// Environment variable name for the server bind port.
pub const PORT_ENV: &str = "PORT";

/// Environment variable name selecting the secret backend.
pub const SECRET_BACKEND_ENV: &str = "SECRET_BACKEND";

/// Environment variable name for the secret entry name.
pub const SECRET_NAME_ENV: &str = "SECRET_NAME";

/// Environment variable name for the AWS region (parameter-store backend).
pub const AWS_REGION_ENV: &str = "AWS_REGION";

/// Environment variable name for the Key Vault URL (key-vault backend).
pub const KEY_VAULT_URL_ENV: &str = "KEY_VAULT_URL";

/// Environment variable name for the external normalizer base URL.
pub const NORMALIZER_URL_ENV: &str = "NORMALIZER_URL";

/// Environment variable name for the logging format.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Default AWS region, matching the reference deployment.
pub const DEFAULT_AWS_REGION: &str = "eu-north-1";

/// Which secret backend serves the API key at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretBackendKind {
    /// AWS SSM Parameter Store (value decrypted server-side).
    ParameterStore,
    /// Azure Key Vault (value returned directly).
    KeyVault,
    /// Local environment variable (development and tests).
    Env,
}

impl SecretBackendKind {
    /// Parse the `SECRET_BACKEND` value.
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "parameter-store" => Some(SecretBackendKind::ParameterStore),
            "key-vault" => Some(SecretBackendKind::KeyVault),
            "env" => Some(SecretBackendKind::Env),
            _ => None,
        }
    }
}

/// Configuration error raised during startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {var}: {value}")]
    InvalidVar { var: &'static str, value: String },
}

/// Startup-assembled application configuration.
///
/// Constructed once in `main` via [`Config::from_env`] and handed to the
/// components that need it. Handlers never consult the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub host: String,
    /// Server bind port.
    pub port: u16,
    /// Selected secret backend.
    pub secret_backend: SecretBackendKind,
    /// Name of the API key entry in the backend.
    pub secret_name: String,
    /// AWS region for the parameter-store backend.
    pub aws_region: String,
    /// Key Vault URL for the key-vault backend.
    pub key_vault_url: Option<String>,
    /// Base URL of the external normalization service.
    pub normalizer_url: String,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Required variables that are absent or unparseable produce a
    /// [`ConfigError`]; the caller treats this as fatal.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var(HOST_ENV).unwrap_or_else(|_| "0.0.0.0".to_string());
        let port_raw = env::var(PORT_ENV).unwrap_or_else(|_| "8080".to_string());
        let port: u16 = port_raw.parse().map_err(|_| ConfigError::InvalidVar {
            var: PORT_ENV,
            value: port_raw,
        })?;

        let backend_raw =
            env::var(SECRET_BACKEND_ENV).map_err(|_| ConfigError::MissingVar(SECRET_BACKEND_ENV))?;
        let secret_backend =
            SecretBackendKind::from_str(&backend_raw).ok_or(ConfigError::InvalidVar {
                var: SECRET_BACKEND_ENV,
                value: backend_raw,
            })?;

        let secret_name =
            env::var(SECRET_NAME_ENV).map_err(|_| ConfigError::MissingVar(SECRET_NAME_ENV))?;

        let aws_region =
            env::var(AWS_REGION_ENV).unwrap_or_else(|_| DEFAULT_AWS_REGION.to_string());

        let key_vault_url = env::var(KEY_VAULT_URL_ENV).ok();
        if secret_backend == SecretBackendKind::KeyVault && key_vault_url.is_none() {
            return Err(ConfigError::MissingVar(KEY_VAULT_URL_ENV));
        }

        let normalizer_url =
            env::var(NORMALIZER_URL_ENV).map_err(|_| ConfigError::MissingVar(NORMALIZER_URL_ENV))?;

        Ok(Config {
            host,
            port,
            secret_backend,
            secret_name,
            aws_region,
            key_vault_url,
            normalizer_url,
        })
    }

    /// The socket address string to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
