//! Stable identifier enumerations shared between the wire layer and the
//! domain model.
//!
//! Each enumeration reserves variant 0 as a sentinel meaning "no real value
//! present". Server batches routinely carry records whose sub-fields hold the
//! sentinel; classification treats those as absent rather than storing them.

use serde::{Deserialize, Serialize};

/// Species identifier for a creature.
///
/// `Missingno` is the sentinel: a record carrying it holds no creature.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PokemonId {
    #[default]
    Missingno = 0,
    Bulbasaur = 1,
    Ivysaur = 2,
    Venusaur = 3,
    Charmander = 4,
    Charmeleon = 5,
    Charizard = 6,
    Squirtle = 7,
    Wartortle = 8,
    Blastoise = 9,
    Caterpie = 10,
    Weedle = 13,
    Pidgey = 16,
    Rattata = 19,
    Pikachu = 25,
    Raichu = 26,
    Zubat = 41,
    Magikarp = 129,
    Eevee = 133,
    Snorlax = 143,
    Dragonite = 149,
    Mewtwo = 150,
    Mew = 151,
}

impl PokemonId {
    /// Whether this value is the "no species present" sentinel.
    pub fn is_sentinel(self) -> bool {
        self == PokemonId::Missingno
    }
}

/// Consumable item kind.
///
/// `Unknown` is the sentinel: a record carrying it holds no item.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemId {
    #[default]
    Unknown = 0,
    Pokeball = 1,
    GreatBall = 2,
    UltraBall = 3,
    MasterBall = 4,
    Potion = 101,
    SuperPotion = 102,
    HyperPotion = 103,
    MaxPotion = 104,
    Revive = 201,
    MaxRevive = 202,
    LuckyEgg = 301,
    Incense = 401,
    TroyDisk = 501,
    RazzBerry = 701,
    EggIncubator = 902,
}

impl ItemId {
    /// Whether this value is the "no item present" sentinel.
    pub fn is_sentinel(self) -> bool {
        self == ItemId::Unknown
    }
}

/// Candy family key. Evolutionary lines share one family.
///
/// `Unset` is the sentinel: a record carrying it holds no candy count.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PokemonFamilyId {
    #[default]
    Unset = 0,
    Bulbasaur = 1,
    Charmander = 4,
    Squirtle = 7,
    Caterpie = 10,
    Weedle = 13,
    Pidgey = 16,
    Rattata = 19,
    Pikachu = 25,
    Zubat = 41,
    Magikarp = 129,
    Eevee = 133,
    Snorlax = 143,
    Dratini = 147,
    Mewtwo = 150,
    Mew = 151,
}

impl PokemonFamilyId {
    /// Whether this value is the "no family present" sentinel.
    pub fn is_sentinel(self) -> bool {
        self == PokemonFamilyId::Unset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_are_defaults() {
        assert!(PokemonId::default().is_sentinel());
        assert!(ItemId::default().is_sentinel());
        assert!(PokemonFamilyId::default().is_sentinel());
        assert!(!PokemonId::Pikachu.is_sentinel());
        assert!(!ItemId::Pokeball.is_sentinel());
        assert!(!PokemonFamilyId::Pikachu.is_sentinel());
    }
}
