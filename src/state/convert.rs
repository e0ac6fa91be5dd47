//! Conversion of structured input into flat property updates.

use super::convertible::Convertible;
use crate::types::{PropertyMap, Value};
use tracing::debug;

/// How object-valued members of a state update are treated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NestingPolicy {
    /// Members of a nested object are written under their own keys; the
    /// outer key is discarded. Objects nested deeper than that are dropped.
    FlattenOneLevel,

    /// Object-valued members are dropped. Only scalars and arrays are kept.
    Reject,
}

impl Default for NestingPolicy {
    fn default() -> Self {
        NestingPolicy::FlattenOneLevel
    }
}

impl NestingPolicy {
    /// How many object levels below the top-level state may be walked.
    fn max_depth(self) -> usize {
        match self {
            NestingPolicy::FlattenOneLevel => 1,
            NestingPolicy::Reject => 0,
        }
    }
}

/// Convert the members of an object into a flat property map.
///
/// Scalars are recorded as-is, arrays element by element (elements that do
/// not reduce to a scalar are dropped), and nested objects according to
/// `policy`. Later members win on key collision. Non-objects yield an empty
/// map; callers validate the top level themselves.
pub fn convert_state<C: Convertible>(input: &C, policy: NestingPolicy) -> PropertyMap {
    let mut properties = PropertyMap::new();
    input.each_member(|key, member| convert_member(key, member, 0, policy, &mut properties));
    properties
}

fn convert_member<C: Convertible>(
    key: &str,
    member: &C,
    depth: usize,
    policy: NestingPolicy,
    out: &mut PropertyMap,
) {
    if member.is_array() {
        out.insert(key.to_string(), Value::Array(convert_array(key, member)));
    } else if member.is_object() {
        if depth >= policy.max_depth() {
            debug!(key, depth, "Dropping nested object in feature state");
            return;
        }
        member.each_member(|inner_key, inner| {
            convert_member(inner_key, inner, depth + 1, policy, out)
        });
    } else if let Some(value) = member.to_value() {
        out.insert(key.to_string(), value);
    } else {
        debug!(key, "Dropping feature state member with no value");
    }
}

fn convert_array<C: Convertible>(key: &str, array: &C) -> Vec<Value> {
    let length = array.array_length();
    let mut values = Vec::with_capacity(length);

    for index in 0..length {
        match array.array_member(index).and_then(|element| element.to_value()) {
            Some(value) => values.push(value),
            None => debug!(key, index, "Dropping array element in feature state"),
        }
    }

    values
}
