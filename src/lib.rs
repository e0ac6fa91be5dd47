//! # Feature State
//!
//! A per-source overlay of transient, style-driven feature attributes
//! ("hover", "selected", ...) for vector tile rendering. Tile data stays
//! immutable; state lives beside it and is pushed to tiles once per frame.
//!
//! ## Core Concepts
//!
//! - **Pending state**: Updates recorded since the last frame
//! - **Committed state**: State already delivered to tiles
//! - **Coalesce**: Merge pending into committed and fan the changes out
//! - **Removal**: Drop a layer, a feature, or one property from both generations
//!
//! ## Example
//!
//! ```ignore
//! use feature_state::{FeatureStateStore, TileFeatureState};
//! use serde_json::json;
//!
//! let mut store = FeatureStateStore::new();
//! store.update_state(Some("poi"), "42", &json!({"hover": true}));
//!
//! // Once per frame, before paint
//! let mut tiles = vec![TileFeatureState::new()];
//! store.coalesce_changes(tiles.iter_mut());
//!
//! store.remove_state(Some("poi"), Some("42"), Some("hover"));
//! ```

pub mod error;
pub mod shared;
pub mod state;
pub mod store;
pub mod tiles;
pub mod types;

// Re-exports
pub use error::{Result, StateError};
pub use shared::SharedFeatureStateStore;
pub use state::{convert_state, Convertible, NestingPolicy};
pub use store::{FeatureStateStore, StoreConfig, DEFAULT_SOURCE_LAYER};
pub use tiles::{drain_into, ChannelConsumer, FeatureStateConsumer, TileFeatureState};
pub use types::*;
