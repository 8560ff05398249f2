//! Owned creature entity as materialized from an inventory batch.

use serde::{Deserialize, Serialize};

use crate::ids::PokemonId;

/// Server-assigned unique identifier for one captured creature instance.
///
/// Stable across sync cycles; two creatures of the same species have distinct
/// instance ids.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct PokemonInstanceId(pub u64);

/// One captured creature. Owned exclusively by the [`crate::PokeBank`] after
/// insertion.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: PokemonInstanceId,
    pub species: PokemonId,
    pub cp: u32,
    pub stamina: u32,
    pub stamina_max: u32,
    pub individual_attack: u32,
    pub individual_defense: u32,
    pub individual_stamina: u32,
    pub move_1: u32,
    pub move_2: u32,
    pub height_m: f32,
    pub weight_kg: f32,
    pub creation_time_ms: u64,
}

impl Pokemon {
    /// Creates a creature with identity fields set and everything else zeroed.
    pub fn new(id: PokemonInstanceId, species: PokemonId) -> Self {
        Self {
            id,
            species,
            ..Self::default()
        }
    }

    pub fn with_cp(mut self, cp: u32) -> Self {
        self.cp = cp;
        self
    }

    pub fn with_stamina(mut self, stamina: u32, stamina_max: u32) -> Self {
        self.stamina = stamina;
        self.stamina_max = stamina_max;
        self
    }
}
