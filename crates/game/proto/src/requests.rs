//! Request descriptors for the two-request profile batch.

use serde::{Deserialize, Serialize};

/// Request discriminator the dispatcher uses to route a payload.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[strum(serialize_all = "snake_case")]
pub enum RequestKind {
    GetPlayer,
    GetInventory,
}

/// Player-data request. Carries no parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetPlayerRequest;

/// Inventory request, parameterized by the incremental cursor.
///
/// `last_timestamp_ms` is a filter hint: the server decides what
/// "changes since then" means and always answers with a complete batch for
/// that window. Zero requests a full sync.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetInventoryRequest {
    pub last_timestamp_ms: u64,
}

impl GetInventoryRequest {
    pub fn new(last_timestamp_ms: u64) -> Self {
        Self { last_timestamp_ms }
    }
}
