//! Core types for the feature state store.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A feature state value.
///
/// Numbers keep the representation the input reported: unsigned and signed
/// integers stay exact, everything else is a double. Equality is structural,
/// so `UInt(1)`, `Int(1)` and `Double(1.0)` are distinct values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    UInt(u64),
    Int(i64),
    Double(f64),
    String(String),
    Array(Vec<Value>),
    Object(HashMap<String, Value>),
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl Value {
    /// True for null, booleans, numbers and strings.
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Value::Array(_) | Value::Object(_))
    }

    /// Any numeric variant, widened to a double.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::UInt(n) => Some(*n as f64),
            Value::Int(n) => Some(*n as f64),
            Value::Double(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Value::Object(members) => Some(members),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::UInt(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Double(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<HashMap<String, Value>> for Value {
    fn from(members: HashMap<String, Value>) -> Self {
        Value::Object(members)
    }
}

/// One feature's properties.
pub type PropertyMap = HashMap<String, Value>;

/// Feature ID to properties, within one source layer.
pub type FeatureStates = HashMap<String, PropertyMap>;

/// Source layer to feature states.
///
/// The empty string names the default layer of sources that have no named
/// layers. Both generations of a [`FeatureStateStore`](crate::FeatureStateStore)
/// are instances of this type, so merge and removal share one code path.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayeredFeatureStates {
    layers: HashMap<String, FeatureStates>,
}

impl LayeredFeatureStates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Number of source layers with an entry.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Number of features across all layers.
    pub fn feature_count(&self) -> usize {
        self.layers.values().map(HashMap::len).sum()
    }

    pub fn layer(&self, source_layer: &str) -> Option<&FeatureStates> {
        self.layers.get(source_layer)
    }

    pub fn feature(&self, source_layer: &str, feature_id: &str) -> Option<&PropertyMap> {
        self.layers.get(source_layer)?.get(feature_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FeatureStates)> {
        self.layers.iter()
    }

    /// Merge `properties` into a feature's map, overwriting on key collision.
    ///
    /// Returns the merged map.
    pub fn merge_feature(
        &mut self,
        source_layer: &str,
        feature_id: &str,
        properties: PropertyMap,
    ) -> &PropertyMap {
        let entry = self
            .layers
            .entry(source_layer.to_string())
            .or_default()
            .entry(feature_id.to_string())
            .or_default();
        entry.extend(properties);
        entry
    }

    /// Replace a feature's map wholesale.
    pub fn set_feature(&mut self, source_layer: &str, feature_id: &str, properties: PropertyMap) {
        self.layers
            .entry(source_layer.to_string())
            .or_default()
            .insert(feature_id.to_string(), properties);
    }

    /// Drop a whole layer. Returns whether it existed.
    pub fn remove_layer(&mut self, source_layer: &str) -> bool {
        self.layers.remove(source_layer).is_some()
    }

    /// Drop one feature. Returns whether it existed.
    pub fn remove_feature(&mut self, source_layer: &str, feature_id: &str) -> bool {
        self.layers
            .get_mut(source_layer)
            .is_some_and(|features| features.remove(feature_id).is_some())
    }

    /// Drop one property of one feature. Returns whether it existed.
    ///
    /// The feature's (possibly now empty) map is kept.
    pub fn remove_property(&mut self, source_layer: &str, feature_id: &str, key: &str) -> bool {
        self.layers
            .get_mut(source_layer)
            .and_then(|features| features.get_mut(feature_id))
            .is_some_and(|properties| properties.remove(key).is_some())
    }
}

impl IntoIterator for LayeredFeatureStates {
    type Item = (String, FeatureStates);
    type IntoIter = std::collections::hash_map::IntoIter<String, FeatureStates>;

    fn into_iter(self) -> Self::IntoIter {
        self.layers.into_iter()
    }
}
