//! Typed binary variant codec.
//!
//! A variant is a 4-byte header `(flags << 16) | type_id` followed by a
//! kind-specific body:
//! - Integers and floats are little-endian; floats are written as f64
//! - Strings are a byte length, UTF-8 bytes, then zero padding to 4 bytes
//! - Dictionaries and arrays nest complete variants behind a count
//!
//! Type-ids differ between engine versions, so every operation runs
//! against a [`TypeRegistry`] built from a [`VersionProfile`].

pub mod cursor;
pub mod error;
pub mod geometry;
pub mod limits;
pub mod profile;
pub mod registry;
pub mod value;
pub mod variant;

pub use cursor::{padding_for, ByteCursor, WireScalar, WORD_SIZE};
pub use error::{CodecError, RegistryError, Result};
pub use geometry::{
    Aabb, Basis, Color, FixedStruct, Plane, Projection, Quaternion, Rect2, Rect2i, Transform2D,
    Transform3D, Vector2, Vector2i, Vector3, Vector3i, Vector4, Vector4i,
};
pub use limits::DecodeLimits;
pub use profile::{select_version_profile, VersionProfile};
pub use registry::{DecodeFn, EncodeFn, RegistryEntry, TypeRegistry};
pub use value::{Dictionary, Value, ValueKind};
pub use variant::{Decoder, Encoder, VariantCodec, FLAG_FLOAT64};
