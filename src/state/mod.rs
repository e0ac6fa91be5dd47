//! Structured input and its conversion into feature state.
//!
//! Callers hand the store any [`Convertible`] value. The store validates the
//! top level and flattens the members into a [`PropertyMap`](crate::PropertyMap)
//! according to a [`NestingPolicy`].

mod convert;
mod convertible;

pub use convert::{convert_state, NestingPolicy};
pub use convertible::Convertible;
