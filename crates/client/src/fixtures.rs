//! Canned server payloads for running the client without a live service.

use anyhow::Result;

use pogo_core::{
    ConsumableItem, ItemId, PlayerStats, Pokemon, PokemonFamilyId, PokemonId, PokemonInstanceId,
};
use pogo_net::StaticDispatcher;
use pogo_proto::{
    CurrencyData, GetInventoryResponse, GetPlayerResponse, InventoryDelta, PlayerData,
    PokemonFamily, RawInventoryItem, RequestKind, codec,
};

/// Builds a dispatcher that serves one trainer's worth of fixture data.
pub fn demo_dispatcher() -> Result<StaticDispatcher> {
    let player = GetPlayerResponse {
        player_data: PlayerData {
            username: "Red".into(),
            creation_timestamp_ms: 1_467_331_200_000,
            team: 2,
            max_pokemon_storage: 250,
            max_item_storage: 350,
            currencies: vec![
                CurrencyData::new("POKECOIN", 120),
                CurrencyData::new("STARDUST", 4_300),
            ],
            ..PlayerData::default()
        },
    };

    let inventory = GetInventoryResponse {
        inventory_delta: InventoryDelta {
            new_timestamp_ms: Some(1_470_000_000_000),
            items: vec![
                RawInventoryItem::with_pokemon(
                    Pokemon::new(PokemonInstanceId(1), PokemonId::Pikachu)
                        .with_cp(320)
                        .with_stamina(35, 35),
                ),
                RawInventoryItem::with_pokemon(
                    Pokemon::new(PokemonInstanceId(2), PokemonId::Snorlax)
                        .with_cp(1_420)
                        .with_stamina(160, 160),
                ),
                RawInventoryItem::with_item(ConsumableItem::new(ItemId::Pokeball, 42)),
                RawInventoryItem::with_item(ConsumableItem::new(ItemId::Potion, 7)),
                RawInventoryItem::with_family(PokemonFamily::new(PokemonFamilyId::Pikachu, 23)),
                RawInventoryItem::with_stats(PlayerStats {
                    level: 12,
                    experience: 92_500,
                    km_walked: 48.2,
                    pokemons_captured: 87,
                    ..PlayerStats::default()
                }),
            ],
        },
    };

    Ok(StaticDispatcher::new()
        .with_response(RequestKind::GetPlayer, codec::encode(&player)?)
        .with_response(RequestKind::GetInventory, codec::encode(&inventory)?))
}
