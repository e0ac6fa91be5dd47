//! A lock-guarded handle for sharing one store between threads.

use crate::error::Result;
use crate::state::Convertible;
use crate::store::{FeatureStateStore, StoreConfig};
use crate::tiles::FeatureStateConsumer;
use crate::types::{LayeredFeatureStates, PropertyMap};
use parking_lot::RwLock;
use std::sync::Arc;

/// Cloneable handle to a [`FeatureStateStore`] behind a read-write lock.
///
/// Updates, removals and coalescing take the write lock; reads and tile
/// seeding take the read lock. Every operation holds the lock only for its
/// own duration.
#[derive(Clone, Debug, Default)]
pub struct SharedFeatureStateStore {
    inner: Arc<RwLock<FeatureStateStore>>,
}

impl SharedFeatureStateStore {
    pub fn new(store: FeatureStateStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self::new(FeatureStateStore::with_config(config))
    }

    pub fn update_state<C: Convertible>(
        &self,
        source_layer: Option<&str>,
        feature_id: &str,
        new_state: &C,
    ) {
        self.inner
            .write()
            .update_state(source_layer, feature_id, new_state);
    }

    pub fn try_update_state<C: Convertible>(
        &self,
        source_layer: Option<&str>,
        feature_id: &str,
        new_state: &C,
    ) -> Result<usize> {
        self.inner
            .write()
            .try_update_state(source_layer, feature_id, new_state)
    }

    pub fn update_state_json(
        &self,
        source_layer: Option<&str>,
        feature_id: &str,
        json: &str,
    ) -> Result<usize> {
        self.inner
            .write()
            .update_state_json(source_layer, feature_id, json)
    }

    pub fn get_state(&self, source_layer: Option<&str>, feature_id: &str) -> PropertyMap {
        self.inner.read().get_state(source_layer, feature_id)
    }

    pub fn has_pending_changes(&self) -> bool {
        self.inner.read().has_pending_changes()
    }

    /// Copy of the committed table.
    pub fn committed_snapshot(&self) -> LayeredFeatureStates {
        self.inner.read().committed().clone()
    }

    pub fn coalesce_changes<I, T>(&self, tiles: I)
    where
        I: IntoIterator<Item = T>,
        T: FeatureStateConsumer,
    {
        self.inner.write().coalesce_changes(tiles);
    }

    pub fn initialize_tile_state<T>(&self, tile: &mut T)
    where
        T: FeatureStateConsumer + ?Sized,
    {
        self.inner.read().initialize_tile_state(tile);
    }

    pub fn remove_state(
        &self,
        source_layer: Option<&str>,
        feature_id: Option<&str>,
        key: Option<&str>,
    ) {
        self.inner
            .write()
            .remove_state(source_layer, feature_id, key);
    }
}
