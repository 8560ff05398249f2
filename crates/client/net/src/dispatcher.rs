//! The dispatcher trait and its error taxonomy.

use async_trait::async_trait;

use pogo_proto::RequestKind;

/// Dispatch failures.
///
/// Both variants fail the whole batch; the sync layer surfaces them as a
/// failed cycle rather than a partial update.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("incomplete batch: expected {expected} responses, got {got}")]
    IncompleteBatch { expected: usize, got: usize },
}

/// One request envelope: a routing discriminator plus encoded payload bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerRequest {
    pub kind: RequestKind,
    pub payload: Vec<u8>,
}

impl ServerRequest {
    pub fn new(kind: RequestKind, payload: Vec<u8>) -> Self {
        Self { kind, payload }
    }
}

/// Submits request batches to the remote service.
///
/// Implementations may pipeline or parallelize the batch internally but must
/// resolve it all-or-nothing: either every request gets a payload, returned
/// in request order, or the whole call fails with one [`DispatchError`].
#[async_trait]
pub trait RequestDispatcher: Send + Sync {
    async fn send_batch(&self, requests: &[ServerRequest]) -> Result<Vec<Vec<u8>>, DispatchError>;
}
