//! Tile-side consumers of feature state.
//!
//! Tiles receive feature state in two shapes, both as a
//! [`LayeredFeatureStates`](crate::LayeredFeatureStates) table:
//! - The full committed table, once, when the tile is created
//! - Change batches after each coalesce, carrying the merged properties of
//!   every feature that changed
//!
//! [`TileFeatureState`] is a tile's cached copy. [`ChannelConsumer`] forwards
//! batches to tiles that live on another thread.
//!
//! # Example
//!
//! ```ignore
//! let (consumer, receiver) = ChannelConsumer::bounded(16);
//! let mut tiles = vec![consumer];
//! store.coalesce_changes(tiles.iter_mut());
//!
//! // On the render thread
//! let mut cache = TileFeatureState::new();
//! drain_into(&receiver, &mut cache);
//! ```

mod channel;
mod consumer;

pub use channel::{drain_into, ChannelConsumer};
pub use consumer::{FeatureStateConsumer, TileFeatureState};
