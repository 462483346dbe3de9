// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Function-invocation adapter.
//!
//! Translates a hosting substrate's inbound event (method, path, headers,
//! JSON body) into a pipeline invocation and the outcome back into the
//! substrate's response envelope. Stateless and free of business logic; the
//! routing table mirrors the HTTP adapter exactly.

use std::collections::HashMap;

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::auth::API_KEY_HEADER;
use crate::error::ApiError;
use crate::models::{HealthResponse, InfoResponse};
use crate::pipeline::{PipelineError, RequestPipeline};

/// Inbound function-invocation event.
#[derive(Debug, Clone, Deserialize)]
pub struct FunctionEvent {
    /// HTTP method of the proxied request.
    pub method: String,
    /// Request path.
    pub path: String,
    /// Request headers. Lookup is case-insensitive.
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// Parsed JSON body, if the substrate delivered one.
    #[serde(default)]
    pub body: Option<serde_json::Value>,
}

impl FunctionEvent {
    /// Case-insensitive header lookup.
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Outbound response envelope.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FunctionResponse {
    pub status_code: u16,
    pub body: serde_json::Value,
}

impl FunctionResponse {
    fn ok(body: serde_json::Value) -> Self {
        Self {
            status_code: StatusCode::OK.as_u16(),
            body,
        }
    }

    fn from_api_error(error: ApiError) -> Self {
        Self {
            status_code: error.status.as_u16(),
            body: error.body_json(),
        }
    }

    fn from_pipeline_error(error: PipelineError) -> Self {
        Self {
            status_code: error.status_code().as_u16(),
            body: error.body_json(),
        }
    }
}

/// Dispatch one event through the pipeline.
pub async fn handle_event(pipeline: &RequestPipeline, event: FunctionEvent) -> FunctionResponse {
    let credential = event.header(API_KEY_HEADER);

    match (event.method.as_str(), event.path.as_str()) {
        ("POST", "/transform-smiles") => {
            let Some(raw) = event.body.as_ref() else {
                // Auth still gates the error detail: an unauthenticated
                // caller with no body sees 403, not 400.
                if let Err(e) = pipeline.authorize(credential) {
                    return FunctionResponse::from_pipeline_error(e.into());
                }
                return FunctionResponse::from_api_error(ApiError::bad_request(
                    "request body is required",
                ));
            };
            match pipeline.handle_transform(credential, raw).await {
                Ok(response) => FunctionResponse::ok(
                    serde_json::to_value(response).expect("response serializes"),
                ),
                Err(e) => FunctionResponse::from_pipeline_error(e),
            }
        }
        ("GET", "/") => match pipeline.authorize(credential) {
            Ok(()) => FunctionResponse::ok(
                serde_json::to_value(InfoResponse::up()).expect("response serializes"),
            ),
            Err(e) => FunctionResponse::from_pipeline_error(e.into()),
        },
        ("GET", "/health") => FunctionResponse::ok(
            serde_json::to_value(HealthResponse {
                status: "ok".to_string(),
            })
            .expect("response serializes"),
        ),
        _ => FunctionResponse::from_api_error(ApiError::not_found("no such route")),
    }
}
