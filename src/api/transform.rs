// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{extract::State, Json};

use crate::{
    auth::Auth,
    models::{Payload, TransformResponse},
    pipeline::PipelineError,
    state::AppState,
};

/// Normalize a SMILES string.
///
/// The `Auth` extractor runs before the body is deserialized, so an invalid
/// key is rejected without the payload ever being parsed. The handler then
/// hands the raw JSON to the pipeline for validation and the two-stage
/// transform.
#[utoipa::path(
    post,
    path = "/transform-smiles",
    request_body = Payload,
    tag = "Transform",
    responses(
        (status = 200, description = "Normalized molecule", body = TransformResponse),
        (status = 403, description = "Missing or invalid API key"),
        (status = 422, description = "Malformed payload or unnormalizable molecule")
    )
)]
pub async fn transform_smiles(
    _auth: Auth,
    State(state): State<AppState>,
    Json(raw): Json<serde_json::Value>,
) -> Result<Json<TransformResponse>, PipelineError> {
    let response = state.pipeline.validate_and_transform(&raw).await?;
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use serde_json::json;

    #[tokio::test]
    async fn transform_returns_normalized_molecule() {
        let state = AppState::for_tests("handler-secret");

        let Json(response) =
            transform_smiles(Auth, State(state), Json(json!({"smiles": "CCO"})))
                .await
                .expect("transform succeeds");
        assert_eq!(response.smiles, "CCO");
    }

    #[tokio::test]
    async fn transform_rejects_overlong_payload() {
        let state = AppState::for_tests("handler-secret");

        let err = transform_smiles(
            Auth,
            State(state),
            Json(json!({"smiles": "C".repeat(60)})),
        )
        .await
        .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
