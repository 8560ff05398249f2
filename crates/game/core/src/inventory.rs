//! Typed inventory collections.
//!
//! Each collection is keyed by a stable identifier and owns its entries. The
//! sync layer rebuilds all three wholesale every reconciliation cycle and
//! publishes them together with the profile as one generation; nothing here
//! is patched incrementally. None of the collections enforce cross-entity
//! referential integrity: a creature whose family has zero candy is legal.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ids::{ItemId, PokemonFamilyId, PokemonId};
use crate::pokemon::{Pokemon, PokemonInstanceId};

/// A consumable item stack: kind plus how many the player holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumableItem {
    pub id: ItemId,
    pub count: u32,
    pub unseen: bool,
}

impl ConsumableItem {
    pub fn new(id: ItemId, count: u32) -> Self {
        Self {
            id,
            count,
            unseen: false,
        }
    }
}

/// Roster of captured creatures, keyed by unique instance id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PokeBank {
    pokemon: HashMap<PokemonInstanceId, Pokemon>,
}

impl PokeBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a creature, replacing any previous entry with the same
    /// instance id (last write wins within a batch).
    pub fn add(&mut self, pokemon: Pokemon) {
        self.pokemon.insert(pokemon.id, pokemon);
    }

    pub fn get(&self, id: PokemonInstanceId) -> Option<&Pokemon> {
        self.pokemon.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pokemon> {
        self.pokemon.values()
    }

    /// All creatures of the given species, in no particular order.
    pub fn by_species(&self, species: PokemonId) -> impl Iterator<Item = &Pokemon> {
        self.pokemon.values().filter(move |p| p.species == species)
    }

    pub fn len(&self) -> usize {
        self.pokemon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pokemon.is_empty()
    }
}

/// Consumable item store, keyed by item kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bag {
    items: HashMap<ItemId, ConsumableItem>,
}

impl Bag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an item stack, replacing any previous stack of the same kind.
    pub fn add(&mut self, item: ConsumableItem) {
        self.items.insert(item.id, item);
    }

    pub fn get(&self, id: ItemId) -> Option<&ConsumableItem> {
        self.items.get(&id)
    }

    /// Held count for the given kind, zero when the kind is absent.
    pub fn count_of(&self, id: ItemId) -> u32 {
        self.items.get(&id).map(|item| item.count).unwrap_or(0)
    }

    /// Sum of all stack counts, for storage-pressure checks against the
    /// profile's item storage limit.
    pub fn total_items(&self) -> u32 {
        self.items.values().map(|item| item.count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConsumableItem> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Per-family candy counter store.
///
/// A total mapping with default zero: families the server never mentioned
/// read as zero. Counts arrive as absolute values, so setting overwrites and
/// never accumulates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CandyJar {
    candies: HashMap<PokemonFamilyId, u32>,
}

impl CandyJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the stored count for a family.
    pub fn set_candy(&mut self, family: PokemonFamilyId, count: u32) {
        self.candies.insert(family, count);
    }

    /// Stored count for a family, zero when unknown.
    pub fn candy(&self, family: PokemonFamilyId) -> u32 {
        self.candies.get(&family).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PokemonFamilyId, u32)> + '_ {
        self.candies.iter().map(|(family, count)| (*family, *count))
    }

    pub fn len(&self) -> usize {
        self.candies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candies.is_empty()
    }
}
