//! Canned-response dispatcher for tests and offline runs.

use std::collections::HashMap;

use async_trait::async_trait;

use pogo_proto::RequestKind;

use crate::dispatcher::{DispatchError, RequestDispatcher, ServerRequest};

/// Serves a fixed payload per request kind, ignoring request parameters.
///
/// Useful as a stand-in for the real transport in demos and integration
/// tests. A request kind without a registered payload fails the batch with a
/// network error, matching the all-or-nothing contract.
#[derive(Clone, Debug, Default)]
pub struct StaticDispatcher {
    responses: HashMap<RequestKind, Vec<u8>>,
}

impl StaticDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the payload served for a request kind.
    pub fn with_response(mut self, kind: RequestKind, payload: Vec<u8>) -> Self {
        self.responses.insert(kind, payload);
        self
    }
}

#[async_trait]
impl RequestDispatcher for StaticDispatcher {
    async fn send_batch(&self, requests: &[ServerRequest]) -> Result<Vec<Vec<u8>>, DispatchError> {
        requests
            .iter()
            .map(|request| {
                self.responses.get(&request.kind).cloned().ok_or_else(|| {
                    tracing::debug!(kind = %request.kind, "no canned response registered");
                    DispatchError::Network(format!("no canned response for {}", request.kind))
                })
            })
            .collect()
    }
}
