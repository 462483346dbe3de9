// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    models::{HealthResponse, InfoResponse, Payload, TransformResponse},
    state::AppState,
};

pub mod health;
pub mod transform;

pub fn router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/transform-smiles", post(transform::transform_smiles))
        .route("/", get(health::index))
        .route("/health", get(health::liveness))
        .with_state(state);

    routes
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        // Wide-open CORS is acceptable only because every data route is
        // credential-gated.
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[derive(OpenApi)]
#[openapi(
    paths(transform::transform_smiles, health::index, health::liveness),
    components(schemas(Payload, TransformResponse, InfoResponse, HealthResponse)),
    tags(
        (name = "Transform", description = "SMILES normalization"),
        (name = "Service", description = "Service banner and health")
    )
)]
struct ApiDoc;
