//! Wire-level request and response shapes for the game service.
//!
//! The transport layer treats payloads as opaque bytes; this crate is the
//! boundary where those bytes become structured records and back. Inventory
//! records arrive as one undifferentiated batch of [`RawInventoryItem`]
//! values; [`RawInventoryItem::classify`] performs the sentinel checks exactly
//! once and yields a genuine tagged [`InventoryRecord`] union for the
//! reconciler to consume.

pub mod codec;
pub mod record;
pub mod requests;
pub mod responses;

pub use codec::{CodecError, decode, encode};
pub use record::{InventoryRecord, PokemonFamily, RawInventoryItem};
pub use requests::{GetInventoryRequest, GetPlayerRequest, RequestKind};
pub use responses::{
    CurrencyData, GetInventoryResponse, GetPlayerResponse, InventoryDelta, PlayerData,
};
