//! Player profile aggregate and its sub-records.
//!
//! A [`PlayerProfile`] is immutable once published: the sync layer assembles a
//! fresh one from the player-data response plus the inventory batch each
//! cycle and swaps it in whole. Combat and experience stats arrive embedded
//! in the inventory batch, not the player-data response; the profile carries
//! them anyway so callers see one coherent aggregate.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Team affiliation, decoded from the server's integer ordinal.
///
/// Variant order matches the server enumeration; an out-of-range ordinal is a
/// fatal decode error for the sync cycle that carried it.
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
    strum::FromRepr,
)]
#[repr(i32)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Team {
    #[default]
    Neutral = 0,
    Mystic = 1,
    Valor = 2,
    Instinct = 3,
}

/// Achievement badge kinds a player can equip.
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
pub enum BadgeType {
    #[default]
    Unset = 0,
    TravelKm = 1,
    PokedexEntries = 2,
    CaptureTotal = 3,
    EvolvedTotal = 5,
    HatchedTotal = 6,
    PokestopsVisited = 8,
    BattleAttackWon = 13,
    BattleTrainingWon = 14,
}

/// Named currency balances the service recognizes.
///
/// Parsed from the server's currency-name strings; entries with a name that
/// does not parse are dropped by the sync layer, never stored half-formed.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum CurrencyKind {
    Pokecoin,
    Stardust,
}

/// Avatar cosmetic selection. All fields are small server-defined ordinals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAvatar {
    pub gender: u32,
    pub backpack: u32,
    pub eyes: u32,
    pub hair: u32,
    pub hat: u32,
    pub pants: u32,
    pub shirt: u32,
    pub shoes: u32,
    pub skin: u32,
}

/// Daily bonus availability timers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyBonus {
    pub next_collection_timestamp_ms: u64,
    pub next_defender_bonus_collect_timestamp_ms: u64,
}

/// Combat and experience statistics.
///
/// These travel in the inventory batch as one record per cycle; repeated
/// occurrences overwrite (last write wins).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub level: u32,
    pub experience: i64,
    pub prev_level_xp: i64,
    pub next_level_xp: i64,
    pub km_walked: f32,
    pub pokemons_encountered: u32,
    pub unique_pokedex_entries: u32,
    pub pokemons_captured: u32,
    pub evolutions: u32,
    pub poke_stop_visits: u32,
    pub pokeballs_thrown: u32,
    pub eggs_hatched: u32,
    pub battle_attack_won: u32,
    pub battle_attack_total: u32,
    pub battle_training_won: u32,
    pub battle_training_total: u32,
}

/// The published player profile: identity, currencies, cosmetics, storage
/// limits, bonus timers, and stats.
///
/// Either fully populated or not published at all; callers never observe a
/// mix of fields from different sync cycles.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub username: String,
    pub creation_timestamp_ms: u64,
    pub equipped_badge: BadgeType,
    pub team: Team,
    pub max_pokemon_storage: u32,
    pub max_item_storage: u32,
    pub currencies: HashMap<CurrencyKind, i64>,
    pub avatar: PlayerAvatar,
    pub daily_bonus: DailyBonus,
    /// Absent only when the inventory batch carried no stats record.
    pub stats: Option<PlayerStats>,
}

impl PlayerProfile {
    /// Balance for a currency, zero when the server reported none.
    pub fn currency(&self, kind: CurrencyKind) -> i64 {
        self.currencies.get(&kind).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_decodes_from_ordinal() {
        assert_eq!(Team::from_repr(0), Some(Team::Neutral));
        assert_eq!(Team::from_repr(1), Some(Team::Mystic));
        assert_eq!(Team::from_repr(3), Some(Team::Instinct));
        assert_eq!(Team::from_repr(4), None);
        assert_eq!(Team::from_repr(-1), None);
    }

    #[test]
    fn currency_names_parse_or_reject() {
        assert_eq!("POKECOIN".parse::<CurrencyKind>(), Ok(CurrencyKind::Pokecoin));
        assert_eq!("STARDUST".parse::<CurrencyKind>(), Ok(CurrencyKind::Stardust));
        assert!("SHELLCOIN".parse::<CurrencyKind>().is_err());
    }

    #[test]
    fn missing_currency_reads_as_zero() {
        let profile = PlayerProfile::default();
        assert_eq!(profile.currency(CurrencyKind::Stardust), 0);
    }
}
