//! Structured response payloads.
//!
//! Wire shapes reuse domain types where the layouts coincide; fields that
//! need a decode step before they are safe to store (team ordinal, currency
//! names) stay raw here and are interpreted by the sync layer.

use serde::{Deserialize, Serialize};

use pogo_core::{DailyBonus, PlayerAvatar};

use crate::record::RawInventoryItem;

/// Response to [`crate::requests::GetPlayerRequest`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GetPlayerResponse {
    pub player_data: PlayerData,
}

/// Player identity and account fields as the server reports them.
///
/// Combat/experience stats are NOT here; they travel in the inventory
/// batch. The sync layer stitches the two responses into one profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerData {
    pub username: String,
    pub creation_timestamp_ms: u64,
    pub equipped_badge: pogo_core::BadgeType,
    /// Raw ordinal into the team enumeration; out-of-range is a fatal
    /// decode error for the cycle.
    pub team: i32,
    pub max_pokemon_storage: u32,
    pub max_item_storage: u32,
    pub currencies: Vec<CurrencyData>,
    pub avatar: PlayerAvatar,
    pub daily_bonus: DailyBonus,
}

/// One named currency balance, name still unvalidated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyData {
    pub name: String,
    pub amount: i64,
}

impl CurrencyData {
    pub fn new(name: impl Into<String>, amount: i64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

/// Response to [`crate::requests::GetInventoryRequest`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GetInventoryResponse {
    pub inventory_delta: InventoryDelta,
}

/// The heterogeneous inventory batch.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryDelta {
    /// Watermark for the next incremental request, when the server supplies
    /// one. The sync layer advances its cursor monotonically from this.
    pub new_timestamp_ms: Option<u64>,
    pub items: Vec<RawInventoryItem>,
}
