//! Routing of classified inventory records into the in-progress generation.

use pogo_core::{Bag, CandyJar, PlayerStats, PokeBank};
use pogo_proto::InventoryRecord;

/// The collections and profile-level contributions one batch produced.
#[derive(Debug, Default)]
pub struct ReconciledInventory {
    pub pokebank: PokeBank,
    pub bag: Bag,
    pub candyjar: CandyJar,
    pub stats: Option<PlayerStats>,
}

/// Consumes one inventory batch, record by record, into fresh collections.
///
/// Performs no I/O and cannot fail: records that carry nothing real were
/// already classified as [`InventoryRecord::Unrecognized`] and are skipped.
/// Record order carries no semantic weight except last-write-wins for
/// repeated keys.
#[derive(Debug, Default)]
pub struct DeltaReconciler {
    inventory: ReconciledInventory,
}

impl DeltaReconciler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes a single record into the collection it belongs to.
    pub fn apply(&mut self, record: InventoryRecord) {
        match record {
            InventoryRecord::Pokemon(pokemon) => self.inventory.pokebank.add(pokemon),
            InventoryRecord::Item(item) => self.inventory.bag.add(item),
            InventoryRecord::Candy { family, count } => {
                self.inventory.candyjar.set_candy(family, count);
            }
            InventoryRecord::Stats(stats) => self.inventory.stats = Some(stats),
            InventoryRecord::Unrecognized => {
                tracing::debug!("skipping unrecognized inventory record");
            }
        }
    }

    /// Folds an ordered sequence of records.
    pub fn apply_batch(&mut self, records: impl IntoIterator<Item = InventoryRecord>) {
        for record in records {
            self.apply(record);
        }
    }

    /// Surrenders the populated collections.
    pub fn finish(self) -> ReconciledInventory {
        self.inventory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pogo_core::{ConsumableItem, ItemId, Pokemon, PokemonFamilyId, PokemonId, PokemonInstanceId};

    #[test]
    fn each_record_lands_in_exactly_one_collection() {
        let mut reconciler = DeltaReconciler::new();
        reconciler.apply_batch([
            InventoryRecord::Pokemon(Pokemon::new(PokemonInstanceId(1), PokemonId::Pikachu)),
            InventoryRecord::Item(ConsumableItem::new(ItemId::Pokeball, 10)),
            InventoryRecord::Candy {
                family: PokemonFamilyId::Pikachu,
                count: 3,
            },
            InventoryRecord::Stats(PlayerStats {
                level: 5,
                ..PlayerStats::default()
            }),
            InventoryRecord::Unrecognized,
        ]);

        let inventory = reconciler.finish();
        assert_eq!(inventory.pokebank.len(), 1);
        assert_eq!(inventory.bag.len(), 1);
        assert_eq!(inventory.candyjar.len(), 1);
        assert_eq!(inventory.stats.map(|s| s.level), Some(5));
    }

    #[test]
    fn unrecognized_records_land_nowhere() {
        let mut reconciler = DeltaReconciler::new();
        reconciler.apply_batch([InventoryRecord::Unrecognized, InventoryRecord::Unrecognized]);

        let inventory = reconciler.finish();
        assert!(inventory.pokebank.is_empty());
        assert!(inventory.bag.is_empty());
        assert!(inventory.candyjar.is_empty());
        assert!(inventory.stats.is_none());
    }

    #[test]
    fn repeated_candy_family_is_last_write_wins() {
        let mut reconciler = DeltaReconciler::new();
        reconciler.apply_batch([
            InventoryRecord::Candy {
                family: PokemonFamilyId::Pikachu,
                count: 5,
            },
            InventoryRecord::Candy {
                family: PokemonFamilyId::Pikachu,
                count: 12,
            },
        ]);

        let inventory = reconciler.finish();
        assert_eq!(inventory.candyjar.candy(PokemonFamilyId::Pikachu), 12);
    }

    #[test]
    fn repeated_stats_records_overwrite() {
        let mut reconciler = DeltaReconciler::new();
        reconciler.apply_batch([
            InventoryRecord::Stats(PlayerStats {
                level: 4,
                ..PlayerStats::default()
            }),
            InventoryRecord::Stats(PlayerStats {
                level: 5,
                ..PlayerStats::default()
            }),
        ]);

        let inventory = reconciler.finish();
        assert_eq!(inventory.stats.map(|s| s.level), Some(5));
    }
}
