use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::geometry::{
    Aabb, Basis, Color, Plane, Projection, Quaternion, Rect2, Rect2i, Transform2D, Transform3D,
    Vector2, Vector2i, Vector3, Vector3i, Vector4, Vector4i,
};

/// A decoded or encodable variant.
///
/// `Int` is 32-bit on the wire and widened to `i64` on decode. `Float` is
/// 32- or 64-bit on the wire and always `f64` here.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Vector2(Vector2),
    Vector2i(Vector2i),
    Rect2(Rect2),
    Rect2i(Rect2i),
    Vector3(Vector3),
    Vector3i(Vector3i),
    Transform2D(Transform2D),
    Vector4(Vector4),
    Vector4i(Vector4i),
    Plane(Plane),
    Quaternion(Quaternion),
    Aabb(Aabb),
    Basis(Basis),
    Transform3D(Transform3D),
    Projection(Projection),
    Color(Color),
    StringName(String),
    NodePath(String),
    Rid(u64),
    Dictionary(Dictionary),
    Array(Vec<Value>),
    ByteArray(Vec<u8>),
    Int32Array(Vec<i32>),
    Int64Array(Vec<i64>),
    Float32Array(Vec<f32>),
    Float64Array(Vec<f64>),
    StringArray(Vec<String>),
    Vector2Array(Vec<Vector2>),
    Vector3Array(Vec<Vector3>),
    ColorArray(Vec<Color>),
}

/// The closed set of value kinds a profile can register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    String,
    Vector2,
    Vector2i,
    Rect2,
    Rect2i,
    Vector3,
    Vector3i,
    Transform2D,
    Vector4,
    Vector4i,
    Plane,
    Quaternion,
    Aabb,
    Basis,
    Transform3D,
    Projection,
    Color,
    StringName,
    NodePath,
    Rid,
    Dictionary,
    Array,
    ByteArray,
    Int32Array,
    Int64Array,
    Float32Array,
    Float64Array,
    StringArray,
    Vector2Array,
    Vector3Array,
    ColorArray,
}

impl ValueKind {
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Null => "Null",
            ValueKind::Bool => "Bool",
            ValueKind::Int => "Int",
            ValueKind::Float => "Float",
            ValueKind::String => "String",
            ValueKind::Vector2 => "Vector2",
            ValueKind::Vector2i => "Vector2i",
            ValueKind::Rect2 => "Rect2",
            ValueKind::Rect2i => "Rect2i",
            ValueKind::Vector3 => "Vector3",
            ValueKind::Vector3i => "Vector3i",
            ValueKind::Transform2D => "Transform2D",
            ValueKind::Vector4 => "Vector4",
            ValueKind::Vector4i => "Vector4i",
            ValueKind::Plane => "Plane",
            ValueKind::Quaternion => "Quaternion",
            ValueKind::Aabb => "Aabb",
            ValueKind::Basis => "Basis",
            ValueKind::Transform3D => "Transform3D",
            ValueKind::Projection => "Projection",
            ValueKind::Color => "Color",
            ValueKind::StringName => "StringName",
            ValueKind::NodePath => "NodePath",
            ValueKind::Rid => "Rid",
            ValueKind::Dictionary => "Dictionary",
            ValueKind::Array => "Array",
            ValueKind::ByteArray => "ByteArray",
            ValueKind::Int32Array => "Int32Array",
            ValueKind::Int64Array => "Int64Array",
            ValueKind::Float32Array => "Float32Array",
            ValueKind::Float64Array => "Float64Array",
            ValueKind::StringArray => "StringArray",
            ValueKind::Vector2Array => "Vector2Array",
            ValueKind::Vector3Array => "Vector3Array",
            ValueKind::ColorArray => "ColorArray",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::String(_) => ValueKind::String,
            Value::Vector2(_) => ValueKind::Vector2,
            Value::Vector2i(_) => ValueKind::Vector2i,
            Value::Rect2(_) => ValueKind::Rect2,
            Value::Rect2i(_) => ValueKind::Rect2i,
            Value::Vector3(_) => ValueKind::Vector3,
            Value::Vector3i(_) => ValueKind::Vector3i,
            Value::Transform2D(_) => ValueKind::Transform2D,
            Value::Vector4(_) => ValueKind::Vector4,
            Value::Vector4i(_) => ValueKind::Vector4i,
            Value::Plane(_) => ValueKind::Plane,
            Value::Quaternion(_) => ValueKind::Quaternion,
            Value::Aabb(_) => ValueKind::Aabb,
            Value::Basis(_) => ValueKind::Basis,
            Value::Transform3D(_) => ValueKind::Transform3D,
            Value::Projection(_) => ValueKind::Projection,
            Value::Color(_) => ValueKind::Color,
            Value::StringName(_) => ValueKind::StringName,
            Value::NodePath(_) => ValueKind::NodePath,
            Value::Rid(_) => ValueKind::Rid,
            Value::Dictionary(_) => ValueKind::Dictionary,
            Value::Array(_) => ValueKind::Array,
            Value::ByteArray(_) => ValueKind::ByteArray,
            Value::Int32Array(_) => ValueKind::Int32Array,
            Value::Int64Array(_) => ValueKind::Int64Array,
            Value::Float32Array(_) => ValueKind::Float32Array,
            Value::Float64Array(_) => ValueKind::Float64Array,
            Value::StringArray(_) => ValueKind::StringArray,
            Value::Vector2Array(_) => ValueKind::Vector2Array,
            Value::Vector3Array(_) => ValueKind::Vector3Array,
            Value::ColorArray(_) => ValueKind::ColorArray,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// String contents of `String`, `StringName` and `NodePath`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(value) | Value::StringName(value) | Value::NodePath(value) => {
                Some(value)
            }
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_dictionary(&self) -> Option<&Dictionary> {
        match self {
            Value::Dictionary(dict) => Some(dict),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Dictionary> for Value {
    fn from(dict: Dictionary) -> Self {
        Value::Dictionary(dict)
    }
}

/// Key/value pairs of a dictionary variant, in wire order.
///
/// The wire format does not guarantee unique keys. Decoding keeps one
/// entry per key, at the position the key first appeared, holding the
/// last value read for it. [`Dictionary::insert`] overwrites in place the
/// same way. Pairs added with [`Dictionary::push`] are not checked;
/// lookups then resolve to the last equal key. Equality compares content,
/// not order.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: Vec<(Value, Value)>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a pair without checking for an existing key.
    pub fn push(&mut self, key: Value, value: Value) {
        self.entries.push((key, value));
    }

    /// Set `key` to `value`, returning the previous value if the key existed.
    pub fn insert(&mut self, key: Value, value: Value) -> Option<Value> {
        match self.entries.iter_mut().rev().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &Value) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (Value, Value)> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[(Value, Value)] {
        &self.entries
    }

    fn resolves_within(&self, other: &Dictionary) -> bool {
        self.entries
            .iter()
            .all(|(key, _)| self.get(key) == other.get(key))
    }
}

impl PartialEq for Dictionary {
    fn eq(&self, other: &Self) -> bool {
        self.resolves_within(other) && other.resolves_within(self)
    }
}

impl FromIterator<(Value, Value)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (Value, Value)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut builder = DictionaryBuilder::with_capacity(iter.size_hint().0);
        for (key, value) in iter {
            builder.insert(key, value);
        }
        builder.finish()
    }
}

/// Collects pairs into a [`Dictionary`] with last-write-wins keys in
/// linear time.
#[derive(Debug, Default)]
pub(crate) struct DictionaryBuilder {
    dict: Dictionary,
    positions: HashMap<u64, Vec<usize>>,
}

impl DictionaryBuilder {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            dict: Dictionary::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    pub(crate) fn insert(&mut self, key: Value, value: Value) {
        let slots = self.positions.entry(key_hash(&key)).or_default();
        let existing = slots
            .iter()
            .copied()
            .find(|&pos| self.dict.entries[pos].0 == key);
        match existing {
            Some(pos) => self.dict.entries[pos].1 = value,
            None => {
                slots.push(self.dict.entries.len());
                self.dict.entries.push((key, value));
            }
        }
    }

    pub(crate) fn finish(self) -> Dictionary {
        self.dict
    }
}

/// Structural hash of a key; equal values hash equally.
fn key_hash(value: &Value) -> u64 {
    let mut hasher = DefaultHasher::new();
    hash_value(value, &mut hasher);
    hasher.finish()
}

fn hash_value<H: Hasher>(value: &Value, state: &mut H) {
    std::mem::discriminant(value).hash(state);
    match value {
        Value::Bool(flag) => flag.hash(state),
        Value::Int(int) => int.hash(state),
        // 0.0 and -0.0 compare equal.
        Value::Float(float) if *float == 0.0 => 0u64.hash(state),
        Value::Float(float) => float.to_bits().hash(state),
        Value::String(text) | Value::StringName(text) | Value::NodePath(text) => text.hash(state),
        Value::Rid(rid) => rid.hash(state),
        Value::Array(items) => {
            items.len().hash(state);
            for item in items {
                hash_value(item, state);
            }
        }
        Value::ByteArray(items) => items.hash(state),
        Value::Int32Array(items) => items.hash(state),
        Value::Int64Array(items) => items.hash(state),
        Value::StringArray(items) => items.hash(state),
        // Float-backed kinds and dictionaries hash by kind only.
        _ => {}
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a (Value, Value);
    type IntoIter = std::slice::Iter<'a, (Value, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Dictionary {
    type Item = (Value, Value);
    type IntoIter = std::vec::IntoIter<(Value, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
