//! Raw inventory records and their classification into a tagged union.

use serde::{Deserialize, Serialize};

use pogo_core::{ConsumableItem, PlayerStats, Pokemon, PokemonFamilyId};

/// Per-family candy count as it appears on the wire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonFamily {
    pub family_id: PokemonFamilyId,
    pub candy: u32,
}

impl PokemonFamily {
    pub fn new(family_id: PokemonFamilyId, candy: u32) -> Self {
        Self { family_id, candy }
    }
}

/// One record of the undifferentiated inventory batch.
///
/// The server populates at most one sub-field per record; a populated
/// sub-field may still hold its sentinel value, which counts as absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawInventoryItem {
    pub pokemon_data: Option<Pokemon>,
    pub item: Option<ConsumableItem>,
    pub pokemon_family: Option<PokemonFamily>,
    pub player_stats: Option<PlayerStats>,
}

impl RawInventoryItem {
    pub fn with_pokemon(pokemon: Pokemon) -> Self {
        Self {
            pokemon_data: Some(pokemon),
            ..Self::default()
        }
    }

    pub fn with_item(item: ConsumableItem) -> Self {
        Self {
            item: Some(item),
            ..Self::default()
        }
    }

    pub fn with_family(family: PokemonFamily) -> Self {
        Self {
            pokemon_family: Some(family),
            ..Self::default()
        }
    }

    pub fn with_stats(stats: PlayerStats) -> Self {
        Self {
            player_stats: Some(stats),
            ..Self::default()
        }
    }

    /// Resolves which sub-field this record actually carries.
    ///
    /// Sentinel checks happen here and nowhere else: a sub-field holding its
    /// sentinel is treated as absent. Records carrying nothing real classify
    /// to [`InventoryRecord::Unrecognized`], which downstream consumers skip.
    pub fn classify(self) -> InventoryRecord {
        if let Some(pokemon) = self.pokemon_data {
            if !pokemon.species.is_sentinel() {
                return InventoryRecord::Pokemon(pokemon);
            }
        }
        if let Some(item) = self.item {
            if !item.id.is_sentinel() {
                return InventoryRecord::Item(item);
            }
        }
        if let Some(family) = self.pokemon_family {
            if !family.family_id.is_sentinel() {
                return InventoryRecord::Candy {
                    family: family.family_id,
                    count: family.candy,
                };
            }
        }
        if let Some(stats) = self.player_stats {
            return InventoryRecord::Stats(stats);
        }
        InventoryRecord::Unrecognized
    }
}

/// A classified inventory record, ready for routing.
#[derive(Clone, Debug, PartialEq)]
pub enum InventoryRecord {
    Pokemon(Pokemon),
    Item(ConsumableItem),
    Candy {
        family: PokemonFamilyId,
        count: u32,
    },
    Stats(PlayerStats),
    /// Nothing real present; expected noise in a batch, skipped silently.
    Unrecognized,
}
