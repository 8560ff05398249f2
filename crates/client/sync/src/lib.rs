//! Inventory delta synchronization and player-profile materialization.
//!
//! [`SyncController`] orchestrates the two-request profile batch against a
//! [`pogo_net::RequestDispatcher`], the [`DeltaReconciler`] demultiplexes the
//! heterogeneous inventory batch into typed collections, and the result is
//! published as one atomically-swapped [`SyncedState`] generation. Callers
//! either see the previous complete generation or the new complete one,
//! never a torn mix.

pub mod controller;
pub mod error;
pub mod reconciler;

pub use controller::{SyncController, SyncedState};
pub use error::SyncError;
pub use reconciler::{DeltaReconciler, ReconciledInventory};
