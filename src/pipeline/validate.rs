// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Payload validation.
//!
//! Runs strictly after authentication succeeds: unauthenticated callers must
//! not receive validation detail, and no validation work happens for them.

use crate::models::Payload;

/// Why a payload was rejected.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("smiles field is required")]
    MissingField,

    #[error("smiles must be a string")]
    WrongType,

    #[error("smiles exceeds maximum length of {max} characters")]
    TooLong { len: usize, max: usize },
}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::MissingField => "missing_field",
            ValidationError::WrongType => "wrong_type",
            ValidationError::TooLong { .. } => "too_long",
        }
    }
}

/// Enforces the shape and length bound of the submitted payload.
pub struct PayloadValidator {
    max_length: usize,
}

impl PayloadValidator {
    pub fn new(max_length: usize) -> Self {
        Self { max_length }
    }

    /// Validate a raw JSON body into a [`Payload`].
    ///
    /// The field must be present, be a string, and its character count must
    /// not exceed the configured maximum.
    pub fn validate(&self, raw: &serde_json::Value) -> Result<Payload, ValidationError> {
        let field = raw.get("smiles").ok_or(ValidationError::MissingField)?;
        let smiles = field.as_str().ok_or(ValidationError::WrongType)?;

        let len = smiles.chars().count();
        if len > self.max_length {
            return Err(ValidationError::TooLong {
                len,
                max: self.max_length,
            });
        }

        Ok(Payload {
            smiles: smiles.to_string(),
        })
    }
}
