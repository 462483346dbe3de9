// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::pipeline::RequestPipeline;

/// Shared application state.
///
/// Holds the one startup-assembled [`RequestPipeline`]. Everything inside is
/// write-once-then-immutable (the secret, the vocabulary, the normalizer
/// client), so clones are cheap and no locking is needed.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<RequestPipeline>,
}

impl AppState {
    pub fn new(pipeline: RequestPipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }
}

#[cfg(test)]
impl AppState {
    /// State with the given secret and a stub normalizer that echoes `CCO`.
    pub(crate) fn for_tests(secret: &str) -> Self {
        use crate::normalizer::testing::{StubBehavior, StubNormalizer};
        use crate::secrets::Secret;

        let normalizer = Arc::new(StubNormalizer::new(StubBehavior::StrictOk("CCO")));
        let secret = Secret::new(secret.to_string()).expect("non-empty test secret");
        AppState::new(RequestPipeline::new(secret, normalizer))
    }
}
