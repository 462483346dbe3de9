// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::Json;

use crate::{
    auth::Auth,
    models::{HealthResponse, InfoResponse},
};

/// Authenticated index route.
///
/// Returns the service banner; doubles as a key-validity probe for clients.
#[utoipa::path(
    get,
    path = "/",
    tag = "Service",
    responses(
        (status = 200, description = "Service banner", body = InfoResponse),
        (status = 403, description = "Missing or invalid API key")
    )
)]
pub async fn index(_auth: Auth) -> Json<InfoResponse> {
    Json(InfoResponse::up())
}

/// Liveness probe handler.
///
/// Always returns 200 if the process is running. Unauthenticated so
/// orchestrators can probe without the key; carries no data.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Service",
    responses(
        (status = 200, description = "Service is alive", body = HealthResponse)
    )
)]
pub async fn liveness() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
