//! Cycle-level error taxonomy.

use pogo_net::DispatchError;
use pogo_proto::{CodecError, RequestKind};

/// Anything that aborts a sync cycle.
///
/// Every variant leaves the previously published generation untouched;
/// callers of the infallible getter observe "no profile available" and may
/// keep using the stale generation they already hold.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("request dispatch failed: {0}")]
    Dispatch(#[from] DispatchError),

    #[error("response codec failure: {0}")]
    Codec(#[from] CodecError),

    #[error("batch response missing payload for {0}")]
    MissingResponse(RequestKind),

    #[error("unknown team ordinal {0}")]
    UnknownTeam(i32),

    #[error("published profile lock poisoned")]
    StatePoisoned,
}
