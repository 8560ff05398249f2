//! The synchronization controller: cache policy, cursor, and atomic commit.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use pogo_core::{Bag, CandyJar, CurrencyKind, Location, PlayerProfile, PlayerStats, PokeBank, Team};
use pogo_net::{RequestDispatcher, ServerRequest};
use pogo_proto::{
    GetInventoryRequest, GetInventoryResponse, GetPlayerRequest, GetPlayerResponse, PlayerData,
    RawInventoryItem, RequestKind, codec,
};

use crate::error::SyncError;
use crate::reconciler::DeltaReconciler;

/// One published generation: the profile plus the three typed collections
/// built from the same reconciliation cycle.
#[derive(Debug)]
pub struct SyncedState {
    pub profile: PlayerProfile,
    pub pokebank: PokeBank,
    pub bag: Bag,
    pub candyjar: CandyJar,
}

/// Incremental-sync watermark. Owned by the cycle lock so cursor reads and
/// advances are serialized with the cycles that use them.
#[derive(Debug, Default)]
struct Cursor {
    last_inventory_update_ms: u64,
}

/// Client-facing synchronization controller.
///
/// Owns the cached generation, the incremental cursor, and the ambient
/// location. The only mutation path for the published state is the commit at
/// the end of a successful cycle: a single reference swap, so concurrent
/// readers always observe a complete generation.
pub struct SyncController<D> {
    dispatcher: D,
    state: RwLock<Option<Arc<SyncedState>>>,
    cycle: Mutex<Cursor>,
    location: RwLock<Location>,
}

impl<D: RequestDispatcher> SyncController<D> {
    /// Creates a controller with an empty cache and a zero cursor, meaning
    /// the first cycle requests a full sync.
    pub fn new(dispatcher: D) -> Self {
        Self {
            dispatcher,
            state: RwLock::new(None),
            cycle: Mutex::new(Cursor::default()),
            location: RwLock::new(Location::default()),
        }
    }

    /// Returns the synchronized profile generation.
    ///
    /// Serves the cached generation unless `force_update` is set or nothing
    /// is cached yet, in which case a sync cycle runs. A failed cycle is
    /// logged and yields `None`, leaving any previously cached generation
    /// untouched; errors never escape this getter.
    ///
    /// Cycles are single-flight: overlapping callers serialize on the cycle
    /// lock, and a non-forced caller that waited re-checks the cache so it
    /// rides on the generation a concurrent cycle just committed instead of
    /// dispatching its own batch.
    pub async fn profile(&self, force_update: bool) -> Option<Arc<SyncedState>> {
        if !force_update {
            if let Some(state) = self.cached() {
                return Some(state);
            }
        }

        let mut cursor = self.cycle.lock().await;

        if !force_update {
            if let Some(state) = self.cached() {
                return Some(state);
            }
        }

        match self.run_cycle(&mut cursor).await {
            Ok(state) => Some(state),
            Err(err) => {
                error!("sync cycle failed: {err}");
                None
            }
        }
    }

    /// Runs a forced sync cycle, surfacing the failure cause.
    ///
    /// Same atomicity guarantees as [`profile`](Self::profile): on error the
    /// previously published generation is untouched.
    pub async fn sync(&self) -> Result<Arc<SyncedState>, SyncError> {
        let mut cursor = self.cycle.lock().await;
        self.run_cycle(&mut cursor).await
    }

    /// Sets the ambient position. No synchronization side effect.
    pub fn set_location(&self, latitude: f64, longitude: f64, altitude: f64) {
        if let Ok(mut location) = self.location.write() {
            *location = Location::new(latitude, longitude, altitude);
        }
    }

    /// Current ambient position.
    pub fn location(&self) -> Location {
        self.location.read().map(|loc| *loc).unwrap_or_default()
    }

    fn cached(&self) -> Option<Arc<SyncedState>> {
        self.state.read().ok().and_then(|guard| guard.clone())
    }

    /// One reconciliation cycle: request, decode, reconcile, assemble,
    /// commit. Any failure before the commit leaves every piece of published
    /// state exactly as it was.
    async fn run_cycle(&self, cursor: &mut Cursor) -> Result<Arc<SyncedState>, SyncError> {
        let requests = [
            ServerRequest::new(RequestKind::GetPlayer, codec::encode(&GetPlayerRequest)?),
            ServerRequest::new(
                RequestKind::GetInventory,
                codec::encode(&GetInventoryRequest::new(cursor.last_inventory_update_ms))?,
            ),
        ];

        let payloads = self.dispatcher.send_batch(&requests).await?;
        let mut payloads = payloads.into_iter();
        let player_payload = payloads
            .next()
            .ok_or(SyncError::MissingResponse(RequestKind::GetPlayer))?;
        let inventory_payload = payloads
            .next()
            .ok_or(SyncError::MissingResponse(RequestKind::GetInventory))?;

        // Both decodes happen before any state is touched; either failure
        // aborts the cycle whole.
        let player: GetPlayerResponse = codec::decode(&player_payload)?;
        let inventory: GetInventoryResponse = codec::decode(&inventory_payload)?;

        let delta = inventory.inventory_delta;
        let mut reconciler = DeltaReconciler::new();
        reconciler.apply_batch(delta.items.into_iter().map(RawInventoryItem::classify));
        let reconciled = reconciler.finish();

        // Stats live in the inventory batch, not the player-data response.
        let profile = assemble_profile(player.player_data, reconciled.stats)?;

        if let Some(new_timestamp_ms) = delta.new_timestamp_ms {
            if new_timestamp_ms >= cursor.last_inventory_update_ms {
                cursor.last_inventory_update_ms = new_timestamp_ms;
            } else {
                debug!(
                    new_timestamp_ms,
                    cursor_ms = cursor.last_inventory_update_ms,
                    "ignoring inventory timestamp older than cursor"
                );
            }
        }

        let generation = Arc::new(SyncedState {
            profile,
            pokebank: reconciled.pokebank,
            bag: reconciled.bag,
            candyjar: reconciled.candyjar,
        });

        let mut guard = self.state.write().map_err(|_| SyncError::StatePoisoned)?;
        *guard = Some(Arc::clone(&generation));
        drop(guard);

        info!(
            username = %generation.profile.username,
            pokemon = generation.pokebank.len(),
            items = generation.bag.len(),
            candy_families = generation.candyjar.len(),
            "committed profile generation"
        );

        Ok(generation)
    }
}

/// Copies player-data fields into a fresh profile and attaches the stats the
/// inventory batch contributed.
///
/// An out-of-range team ordinal aborts the cycle; a currency entry whose
/// name does not parse is dropped with a warning and the cycle proceeds.
fn assemble_profile(
    data: PlayerData,
    stats: Option<PlayerStats>,
) -> Result<PlayerProfile, SyncError> {
    let team = Team::from_repr(data.team).ok_or(SyncError::UnknownTeam(data.team))?;

    let mut currencies = HashMap::new();
    for currency in data.currencies {
        match currency.name.parse::<CurrencyKind>() {
            Ok(kind) => {
                currencies.insert(kind, currency.amount);
            }
            Err(_) => {
                warn!(name = %currency.name, "dropping currency with unrecognized name");
            }
        }
    }

    Ok(PlayerProfile {
        username: data.username,
        creation_timestamp_ms: data.creation_timestamp_ms,
        equipped_badge: data.equipped_badge,
        team,
        max_pokemon_storage: data.max_pokemon_storage,
        max_item_storage: data.max_item_storage,
        currencies,
        avatar: data.avatar,
        daily_bonus: data.daily_bonus,
        stats,
    })
}
