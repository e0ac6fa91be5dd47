//! The tile consumer interface and a tile's cached feature state.

use crate::types::{LayeredFeatureStates, PropertyMap};

/// Anything that holds feature state for paint-time evaluation.
pub trait FeatureStateConsumer {
    /// Receive a full table or a change batch.
    fn set_feature_state(&mut self, states: &LayeredFeatureStates);
}

impl<T: FeatureStateConsumer + ?Sized> FeatureStateConsumer for &mut T {
    fn set_feature_state(&mut self, states: &LayeredFeatureStates) {
        (**self).set_feature_state(states);
    }
}

impl<T: FeatureStateConsumer + ?Sized> FeatureStateConsumer for Box<T> {
    fn set_feature_state(&mut self, states: &LayeredFeatureStates) {
        (**self).set_feature_state(states);
    }
}

/// A tile's cached copy of feature state.
///
/// Incoming entries replace the cached map of each feature they name, since
/// every delivery carries merged (not delta) property maps. Features not
/// named by a delivery keep their cached state.
#[derive(Clone, Debug, Default)]
pub struct TileFeatureState {
    states: LayeredFeatureStates,
    /// Number of deliveries received.
    revision: u64,
}

impl TileFeatureState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached properties for a feature.
    pub fn get(&self, source_layer: &str, feature_id: &str) -> Option<&PropertyMap> {
        self.states.feature(source_layer, feature_id)
    }

    pub fn states(&self) -> &LayeredFeatureStates {
        &self.states
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl FeatureStateConsumer for TileFeatureState {
    fn set_feature_state(&mut self, states: &LayeredFeatureStates) {
        for (layer, features) in states.iter() {
            for (feature_id, properties) in features {
                self.states.set_feature(layer, feature_id, properties.clone());
            }
        }
        self.revision += 1;
    }
}
