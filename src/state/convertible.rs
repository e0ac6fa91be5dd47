//! Read-only introspection over caller-supplied structured input.

use crate::types::Value;

/// A structured value that can be walked without knowing its source format.
///
/// The store only needs to tell objects, arrays and scalars apart, walk
/// object members and array elements, and reduce scalars to a [`Value`].
pub trait Convertible {
    fn is_object(&self) -> bool;

    fn is_array(&self) -> bool;

    /// Element count for arrays, zero for everything else.
    fn array_length(&self) -> usize;

    fn array_member(&self, index: usize) -> Option<&Self>;

    /// Visit every member of an object. Does nothing for non-objects.
    fn each_member<F>(&self, f: F)
    where
        F: FnMut(&str, &Self);

    /// Reduce a scalar to a [`Value`]. Arrays and objects yield `None`.
    fn to_value(&self) -> Option<Value>;
}

impl Convertible for serde_json::Value {
    fn is_object(&self) -> bool {
        self.is_object()
    }

    fn is_array(&self) -> bool {
        self.is_array()
    }

    fn array_length(&self) -> usize {
        self.as_array().map_or(0, Vec::len)
    }

    fn array_member(&self, index: usize) -> Option<&Self> {
        self.as_array()?.get(index)
    }

    fn each_member<F>(&self, mut f: F)
    where
        F: FnMut(&str, &Self),
    {
        if let Some(members) = self.as_object() {
            for (key, value) in members {
                f(key, value);
            }
        }
    }

    fn to_value(&self) -> Option<Value> {
        match self {
            serde_json::Value::Null => Some(Value::Null),
            serde_json::Value::Bool(b) => Some(Value::Bool(*b)),
            serde_json::Value::Number(n) => {
                if let Some(u) = n.as_u64() {
                    Some(Value::UInt(u))
                } else if let Some(i) = n.as_i64() {
                    Some(Value::Int(i))
                } else {
                    n.as_f64().map(Value::Double)
                }
            }
            serde_json::Value::String(s) => Some(Value::String(s.clone())),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => None,
        }
    }
}

impl Convertible for Value {
    fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    fn array_length(&self) -> usize {
        self.as_array().map_or(0, <[Value]>::len)
    }

    fn array_member(&self, index: usize) -> Option<&Self> {
        self.as_array()?.get(index)
    }

    fn each_member<F>(&self, mut f: F)
    where
        F: FnMut(&str, &Self),
    {
        if let Some(members) = self.as_object() {
            for (key, value) in members {
                f(key, value);
            }
        }
    }

    fn to_value(&self) -> Option<Value> {
        self.is_scalar().then(|| self.clone())
    }
}
