//! Shipped wire-format version tables.

use std::fmt;
use std::str::FromStr;

use crate::cursor::ByteCursor;
use crate::error::{CodecError, RegistryError};
use crate::registry::{RegistryEntry, TypeRegistry};
use crate::value::{Value, ValueKind};
use crate::variant::Decoder;

use ValueKind::*;

const LEGACY: &[(u8, ValueKind)] = &[
    (0, Null),
    (1, Bool),
    (2, Int),
    (3, Float),
    (4, String),
    (20, Color),
    (27, Dictionary),
    (28, Array),
];

const V3: &[(u8, ValueKind)] = &[
    (0, Null),
    (1, Bool),
    (2, Int),
    (3, Float),
    (4, String),
    (5, Vector2),
    (6, Rect2),
    (7, Vector3),
    (8, Transform2D),
    (9, Plane),
    (10, Quaternion),
    (11, Aabb),
    (12, Basis),
    (13, Transform3D),
    (14, Color),
    (15, NodePath),
    (16, Rid),
    (18, Dictionary),
    (19, Array),
    (20, ByteArray),
    (21, Int32Array),
    (22, Float32Array),
    (23, StringArray),
    (24, Vector2Array),
    (25, Vector3Array),
    (26, ColorArray),
];

const V4: &[(u8, ValueKind)] = &[
    (0, Null),
    (1, Bool),
    (2, Int),
    (3, Float),
    (4, String),
    (5, Vector2),
    (6, Vector2i),
    (7, Rect2),
    (8, Rect2i),
    (9, Vector3),
    (10, Vector3i),
    (11, Transform2D),
    (12, Vector4),
    (13, Vector4i),
    (14, Plane),
    (15, Quaternion),
    (16, Aabb),
    (17, Basis),
    (18, Transform3D),
    (19, Projection),
    (20, Color),
    (21, StringName),
    (22, NodePath),
    (23, Rid),
    (27, Dictionary),
    (28, Array),
    (29, ByteArray),
    (30, Int32Array),
    (31, Int64Array),
    (32, Float32Array),
    (33, Float64Array),
    (34, StringArray),
    (35, Vector2Array),
    (36, Vector3Array),
    (37, ColorArray),
];

/// A shipped wire-format version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VersionProfile {
    /// Minimal table: scalars, strings, color and containers.
    Legacy,
    V3,
    #[default]
    V4,
}

impl VersionProfile {
    pub const ALL: [VersionProfile; 3] = [Self::Legacy, Self::V3, Self::V4];

    pub fn name(self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::V3 => "v3",
            Self::V4 => "v4",
        }
    }

    /// The `(type_id, kind)` pairs of this version.
    pub fn table(self) -> &'static [(u8, ValueKind)] {
        match self {
            Self::Legacy => LEGACY,
            Self::V3 => V3,
            Self::V4 => V4,
        }
    }

    pub fn entries(self) -> Vec<RegistryEntry> {
        self.table()
            .iter()
            .map(|&(type_id, kind)| {
                let entry = RegistryEntry::new(type_id, kind);
                match (self, kind) {
                    (Self::Legacy, Bool) => entry.with_decoder(decode_unsigned_bool),
                    _ => entry,
                }
            })
            .collect()
    }

    /// Build the registry for this version.
    pub fn build(self) -> Result<TypeRegistry, RegistryError> {
        TypeRegistry::build(self.name(), &self.entries())
    }
}

impl fmt::Display for VersionProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VersionProfile {
    type Err = RegistryError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|profile| profile.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| RegistryError::UnknownProfile(name.to_string()))
    }
}

/// The legacy format reads the boolean word unsigned, so any non-zero
/// pattern is true. Later versions read it signed.
fn decode_unsigned_bool(
    _: &mut Decoder<'_>,
    _flags: u8,
    cursor: &mut ByteCursor,
) -> Result<Value, CodecError> {
    Ok(Value::Bool(cursor.pop_u32_le()? > 0))
}

/// Build the registry for a profile selected by name.
pub fn select_version_profile(name: &str) -> Result<TypeRegistry, RegistryError> {
    let profile: VersionProfile = name.parse()?;
    profile.build()
}
