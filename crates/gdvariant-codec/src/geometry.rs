//! Fixed-size geometric values.
//!
//! Every kind here is a flat run of `LEN` little-endian 32-bit scalars on
//! the wire with no length prefix. The structs only flatten and unflatten;
//! no math is provided.

use crate::cursor::{ByteCursor, WireScalar};
use crate::error::Result;
use crate::value::{Value, ValueKind};

/// A value kind stored as a fixed run of scalars.
pub trait FixedStruct: Copy + PartialEq + std::fmt::Debug {
    type Scalar: WireScalar;

    /// Number of scalars on the wire.
    const LEN: usize;

    const KIND: ValueKind;

    /// Width on the wire in bytes.
    const WIRE_SIZE: usize = Self::LEN * <Self::Scalar as WireScalar>::SIZE;

    fn pop(cursor: &mut ByteCursor) -> Result<Self>;

    fn push(&self, cursor: &mut ByteCursor);

    /// The scalars in wire order.
    fn scalars(&self) -> Vec<Self::Scalar>;

    /// Borrow the struct out of a matching [`Value`] variant.
    fn from_value(value: &Value) -> Option<&Self>;

    fn into_value(self) -> Value;
}

macro_rules! impl_fixed_struct {
    ($name:ident, $scalar:ty, $len:literal) => {
        impl FixedStruct for $name {
            type Scalar = $scalar;
            const LEN: usize = $len;
            const KIND: ValueKind = ValueKind::$name;

            fn pop(cursor: &mut ByteCursor) -> Result<Self> {
                let mut values = [<$scalar>::default(); $len];
                for slot in values.iter_mut() {
                    *slot = <$scalar as WireScalar>::pop(cursor)?;
                }
                Ok(Self::from_array(values))
            }

            fn push(&self, cursor: &mut ByteCursor) {
                cursor.push_items(&self.to_array());
            }

            fn scalars(&self) -> Vec<$scalar> {
                self.to_array().to_vec()
            }

            fn from_value(value: &Value) -> Option<&Self> {
                match value {
                    Value::$name(inner) => Some(inner),
                    _ => None,
                }
            }

            fn into_value(self) -> Value {
                Value::$name(self)
            }
        }

        impl From<$name> for Value {
            fn from(value: $name) -> Self {
                Value::$name(value)
            }
        }
    };
}

macro_rules! named_struct {
    (@body $name:ident, $scalar:ty, $len:literal, [$($field:ident),+]) => {
        impl $name {
            pub const fn new($($field: $scalar),+) -> Self {
                Self { $($field),+ }
            }

            pub const fn from_array(values: [$scalar; $len]) -> Self {
                let [$($field),+] = values;
                Self { $($field),+ }
            }

            pub const fn to_array(&self) -> [$scalar; $len] {
                [$(self.$field),+]
            }
        }

        impl_fixed_struct!($name, $scalar, $len);
    };
    ($(#[$meta:meta])* $name:ident, $scalar:ty, $len:literal, [$($field:ident),+]) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Default)]
        pub struct $name {
            $(pub $field: $scalar,)+
        }

        named_struct!(@body $name, $scalar, $len, [$($field),+]);
    };
}

macro_rules! matrix_struct {
    ($(#[$meta:meta])* $name:ident, $len:literal, $cols:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub struct $name {
            pub values: [f32; $len],
        }

        impl $name {
            pub const fn from_array(values: [f32; $len]) -> Self {
                Self { values }
            }

            pub const fn to_array(&self) -> [f32; $len] {
                self.values
            }

            /// Element at `(row, col)`, stored row-major.
            pub fn get(&self, row: usize, col: usize) -> f32 {
                self.values[col + row * $cols]
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self { values: [0.0; $len] }
            }
        }

        impl std::ops::Index<usize> for $name {
            type Output = f32;

            fn index(&self, index: usize) -> &f32 {
                &self.values[index]
            }
        }

        impl_fixed_struct!($name, f32, $len);
    };
}

named_struct!(Vector2, f32, 2, [x, y]);
named_struct!(Vector2i, i32, 2, [x, y]);
named_struct!(
    /// Axis-aligned 2D rectangle: position then size.
    Rect2, f32, 4, [x, y, width, height]
);
named_struct!(Rect2i, i32, 4, [x, y, width, height]);
named_struct!(Vector3, f32, 3, [x, y, z]);
named_struct!(Vector3i, i32, 3, [x, y, z]);
named_struct!(
    /// Four-component vector; `w` comes first on the wire.
    Vector4, f32, 4, [w, x, y, z]
);
named_struct!(Vector4i, i32, 4, [w, x, y, z]);
named_struct!(
    /// Plane as normal `(x, y, z)` and distance `d`.
    Plane, f32, 4, [x, y, z, d]
);
named_struct!(
    /// Axis-aligned box: position then size.
    Aabb, f32, 6, [x, y, z, width, height, depth]
);
named_struct!(Color, f32, 4, [r, g, b, a]);

/// Rotation quaternion. Defaults to the identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
}

named_struct!(@body Quaternion, f32, 4, [x, y, z, w]);

matrix_struct!(
    /// 2x3 affine transform.
    Transform2D, 6, 2
);
matrix_struct!(
    /// 3x3 rotation/scale matrix.
    Basis, 9, 3
);
matrix_struct!(
    /// 3x4 affine transform (basis rows then origin).
    Transform3D, 12, 3
);
matrix_struct!(
    /// 4x4 projection matrix.
    Projection, 16, 4
);
