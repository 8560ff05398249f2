//! Byte-level encoding of request and response payloads.
//!
//! Payloads are bincode-framed serde structures. A payload that fails to
//! decode poisons the whole sync cycle that requested it; there is no
//! partial-decode recovery at this layer.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Codec failures, split by direction so callers can tell a local encoding
/// bug from a malformed server payload.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("payload encoding failed: {0}")]
    Encode(#[source] bincode::Error),

    #[error("malformed payload: {0}")]
    Malformed(#[source] bincode::Error),
}

/// Serializes a request or response structure into payload bytes.
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, CodecError> {
    bincode::serialize(value).map_err(CodecError::Encode)
}

/// Deserializes payload bytes into a structured message.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CodecError> {
    bincode::deserialize(bytes).map_err(CodecError::Malformed)
}
