//! The two-generation feature state store.

use crate::error::{Result, StateError};
use crate::state::{convert_state, Convertible, NestingPolicy};
use crate::tiles::FeatureStateConsumer;
use crate::types::{LayeredFeatureStates, PropertyMap};
use tracing::{debug, error};

/// Layer name used when a source has no named layers.
pub const DEFAULT_SOURCE_LAYER: &str = "";

/// Store configuration.
#[derive(Clone, Debug, Default)]
pub struct StoreConfig {
    /// How object-valued members of an update are flattened.
    pub nesting: NestingPolicy,
}

/// Per-source feature state overlay.
///
/// Holds two generations of the same table:
/// - `committed`: state already delivered to tiles
/// - `pending`: state updated since the last coalesce
///
/// The store does no locking of its own. Updates and removals must not race
/// with [`coalesce_changes`](Self::coalesce_changes); wrap the store in a
/// [`SharedFeatureStateStore`](crate::SharedFeatureStateStore) or keep it on
/// one thread.
#[derive(Clone, Debug, Default)]
pub struct FeatureStateStore {
    config: StoreConfig,
    committed: LayeredFeatureStates,
    pending: LayeredFeatureStates,
}

impl FeatureStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            config,
            committed: LayeredFeatureStates::new(),
            pending: LayeredFeatureStates::new(),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // --- Updates ---

    /// Record new state for a feature, logging invalid input.
    ///
    /// Input that is not an object is logged and ignored.
    pub fn update_state<C: Convertible>(
        &mut self,
        source_layer: Option<&str>,
        feature_id: &str,
        new_state: &C,
    ) {
        if let Err(e) = self.try_update_state(source_layer, feature_id, new_state) {
            error!(error = %e, "Ignoring feature state update");
        }
    }

    /// Record new state for a feature.
    ///
    /// The converted properties are merged into the feature's pending map;
    /// keys absent from `new_state` are left alone. Returns the number of
    /// properties written.
    pub fn try_update_state<C: Convertible>(
        &mut self,
        source_layer: Option<&str>,
        feature_id: &str,
        new_state: &C,
    ) -> Result<usize> {
        let source_layer = source_layer.unwrap_or(DEFAULT_SOURCE_LAYER);

        if !new_state.is_object() {
            return Err(StateError::NotAnObject {
                source_layer: source_layer.to_string(),
                feature_id: feature_id.to_string(),
            });
        }

        let properties = convert_state(new_state, self.config.nesting);
        let written = properties.len();
        if written > 0 {
            self.pending
                .merge_feature(source_layer, feature_id, properties);
        }

        Ok(written)
    }

    /// Parse `json` and record it as new state for a feature.
    pub fn update_state_json(
        &mut self,
        source_layer: Option<&str>,
        feature_id: &str,
        json: &str,
    ) -> Result<usize> {
        let new_state: serde_json::Value = serde_json::from_str(json)?;
        self.try_update_state(source_layer, feature_id, &new_state)
    }

    // --- Reads ---

    /// Effective state of a feature.
    ///
    /// Pending properties form the base; committed properties are laid over
    /// them and win on key collision. Unknown layers and features yield an
    /// empty map.
    pub fn get_state(&self, source_layer: Option<&str>, feature_id: &str) -> PropertyMap {
        let source_layer = source_layer.unwrap_or(DEFAULT_SOURCE_LAYER);

        let mut result = self
            .pending
            .feature(source_layer, feature_id)
            .cloned()
            .unwrap_or_default();

        if let Some(committed) = self.committed.feature(source_layer, feature_id) {
            result.extend(committed.iter().map(|(k, v)| (k.clone(), v.clone())));
        }

        result
    }

    pub fn has_pending_changes(&self) -> bool {
        self.pending.feature_count() > 0
    }

    /// State already delivered to tiles.
    pub fn committed(&self) -> &LayeredFeatureStates {
        &self.committed
    }

    /// State updated since the last coalesce.
    pub fn pending(&self) -> &LayeredFeatureStates {
        &self.pending
    }

    // --- Tile Delivery ---

    /// Commit pending state and deliver the changes to `tiles`.
    ///
    /// Each pending feature map is merged into its committed map, pending
    /// values winning, and the merged map goes into the change batch. Pending
    /// state is cleared. When nothing was pending no tile is touched.
    pub fn coalesce_changes<I, T>(&mut self, tiles: I)
    where
        I: IntoIterator<Item = T>,
        T: FeatureStateConsumer,
    {
        let pending = std::mem::take(&mut self.pending);
        let mut changes = LayeredFeatureStates::new();

        for (source_layer, features) in pending {
            for (feature_id, properties) in features {
                let merged = self
                    .committed
                    .merge_feature(&source_layer, &feature_id, properties);
                changes.set_feature(&source_layer, &feature_id, merged.clone());
            }
        }

        if changes.is_empty() {
            return;
        }

        let mut notified = 0usize;
        for mut tile in tiles {
            tile.set_feature_state(&changes);
            notified += 1;
        }

        debug!(
            layers = changes.layer_count(),
            features = changes.feature_count(),
            tiles = notified,
            "Coalesced feature state"
        );
    }

    /// Seed a newly created tile with the full committed table.
    pub fn initialize_tile_state<T>(&self, tile: &mut T)
    where
        T: FeatureStateConsumer + ?Sized,
    {
        tile.set_feature_state(&self.committed);
    }

    // --- Removal ---

    /// Remove state from both generations.
    ///
    /// - no feature: the whole layer
    /// - feature, no key: that feature
    /// - feature and key: that one property
    ///
    /// Without a feature the key is ignored and the whole layer goes.
    /// Removing absent state is not an error.
    pub fn remove_state(
        &mut self,
        source_layer: Option<&str>,
        feature_id: Option<&str>,
        key: Option<&str>,
    ) {
        let source_layer = source_layer.unwrap_or(DEFAULT_SOURCE_LAYER);

        for states in [&mut self.committed, &mut self.pending] {
            match (feature_id, key) {
                (Some(feature_id), Some(key)) => {
                    states.remove_property(source_layer, feature_id, key);
                }
                (Some(feature_id), None) => {
                    states.remove_feature(source_layer, feature_id);
                }
                (None, _) => {
                    states.remove_layer(source_layer);
                }
            }
        }
    }
}
