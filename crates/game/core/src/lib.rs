//! Domain model for the game service client.
//!
//! This crate owns the data structures that describe creatures, inventory
//! holdings, and the player profile. It performs no I/O: the sync layer
//! populates fresh instances of these types each reconciliation cycle and
//! publishes them as one generation.

pub mod ids;
pub mod inventory;
pub mod location;
pub mod player;
pub mod pokemon;

pub use ids::{ItemId, PokemonFamilyId, PokemonId};
pub use inventory::{Bag, CandyJar, ConsumableItem, PokeBank};
pub use location::Location;
pub use player::{
    BadgeType, CurrencyKind, DailyBonus, PlayerAvatar, PlayerProfile, PlayerStats, Team,
};
pub use pokemon::{Pokemon, PokemonInstanceId};
