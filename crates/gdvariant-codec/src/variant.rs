//! Recursive variant decoding and encoding.
//!
//! A variant is a 4-byte header `(flags << 16) | type_id` followed by a
//! body whose layout depends on the kind. Dictionaries and arrays nest
//! full variants; everything else is flat.

use bytes::Bytes;
use tracing::trace;

use crate::cursor::{ByteCursor, WireScalar, WORD_SIZE};
use crate::error::{CodecError, Result};
use crate::geometry::{
    Aabb, Basis, Color, FixedStruct, Plane, Projection, Quaternion, Rect2, Rect2i, Transform2D,
    Transform3D, Vector2, Vector2i, Vector3, Vector3i, Vector4, Vector4i,
};
use crate::limits::DecodeLimits;
use crate::registry::{DecodeFn, EncodeFn, TypeRegistry};
use crate::value::{DictionaryBuilder, Value, ValueKind};

/// Header flag marking a 64-bit float body.
pub const FLAG_FLOAT64: u8 = 1;

/// High bit of a dictionary/array count; reserved and ignored.
const CONTAINER_COUNT_MASK: u32 = 0x7FFF_FFFF;

/// High bit of a node-path header; set means the unsupported
/// names/subnames layout.
const NODE_PATH_NEW_FORMAT: u32 = 0x8000_0000;

/// Encodes and decodes [`Value`]s against one [`TypeRegistry`].
#[derive(Debug, Clone, Copy)]
pub struct VariantCodec<'r> {
    registry: &'r TypeRegistry,
    limits: DecodeLimits,
}

impl<'r> VariantCodec<'r> {
    pub fn new(registry: &'r TypeRegistry) -> Self {
        Self::with_limits(registry, DecodeLimits::default())
    }

    pub fn with_limits(registry: &'r TypeRegistry, limits: DecodeLimits) -> Self {
        Self { registry, limits }
    }

    pub fn registry(&self) -> &'r TypeRegistry {
        self.registry
    }

    pub fn limits(&self) -> DecodeLimits {
        self.limits
    }

    /// Decode one variant from the front of `cursor`.
    ///
    /// Bytes after the variant are left in the cursor.
    pub fn decode(&self, cursor: &mut ByteCursor) -> Result<Value> {
        Decoder::new(self.registry, self.limits).decode(cursor)
    }

    /// Decode a payload that must hold exactly one variant.
    pub fn decode_exact(&self, payload: &[u8]) -> Result<Value> {
        let mut cursor = ByteCursor::from(payload);
        let value = self.decode(&mut cursor)?;
        if !cursor.is_empty() {
            return Err(CodecError::TrailingBytes {
                remaining: cursor.len(),
            });
        }
        Ok(value)
    }

    /// Append the encoding of `value` to `cursor`.
    ///
    /// On error the cursor may hold a partial encoding.
    pub fn encode(&self, value: &Value, cursor: &mut ByteCursor) -> Result<()> {
        Encoder::new(self.registry, self.limits).encode(value, cursor)
    }

    pub fn encode_to_bytes(&self, value: &Value) -> Result<Bytes> {
        let mut cursor = ByteCursor::new();
        self.encode(value, &mut cursor)?;
        Ok(cursor.freeze())
    }
}

/// Decoding state threaded through every [`DecodeFn`].
#[derive(Debug)]
pub struct Decoder<'r> {
    registry: &'r TypeRegistry,
    limits: DecodeLimits,
    depth: usize,
}

impl<'r> Decoder<'r> {
    pub fn new(registry: &'r TypeRegistry, limits: DecodeLimits) -> Self {
        Self {
            registry,
            limits,
            depth: 0,
        }
    }

    pub fn registry(&self) -> &'r TypeRegistry {
        self.registry
    }

    pub fn limits(&self) -> DecodeLimits {
        self.limits
    }

    /// Read a header and dispatch on its type-id.
    pub fn decode(&mut self, cursor: &mut ByteCursor) -> Result<Value> {
        let offset = cursor.offset();
        let (flags, type_id) = cursor.pop_header()?;
        let (kind, decode) = self.registry.decoder_for(type_id)?;
        trace!(offset, type_id, flags, %kind, "decoding variant");
        decode(self, flags, cursor)
    }

    /// Decode an element of a container one level deeper.
    pub fn decode_nested(&mut self, cursor: &mut ByteCursor) -> Result<Value> {
        if self.depth >= self.limits.max_depth {
            return Err(CodecError::DepthLimitExceeded {
                max: self.limits.max_depth,
            });
        }
        self.depth += 1;
        let result = self.decode(cursor);
        self.depth -= 1;
        result
    }

    /// Read an element count and check it against the configured ceiling
    /// and against the bytes left, given the smallest possible element.
    pub fn read_count(
        &self,
        cursor: &mut ByteCursor,
        mask: u32,
        min_element_size: usize,
    ) -> Result<usize> {
        let count = (cursor.pop_u32_le()? & mask) as usize;
        if count > self.limits.max_container_len {
            return Err(CodecError::CountLimitExceeded {
                count,
                max: self.limits.max_container_len,
            });
        }
        cursor.require(count.saturating_mul(min_element_size))?;
        Ok(count)
    }
}

/// Encoding state threaded through every [`EncodeFn`].
#[derive(Debug)]
pub struct Encoder<'r> {
    registry: &'r TypeRegistry,
    limits: DecodeLimits,
    depth: usize,
}

impl<'r> Encoder<'r> {
    pub fn new(registry: &'r TypeRegistry, limits: DecodeLimits) -> Self {
        Self {
            registry,
            limits,
            depth: 0,
        }
    }

    pub fn registry(&self) -> &'r TypeRegistry {
        self.registry
    }

    /// Look up the value's kind and write it, header included.
    pub fn encode(&mut self, value: &Value, cursor: &mut ByteCursor) -> Result<()> {
        let (type_id, encode) = self.registry.encoder_for(value.kind())?;
        encode(self, type_id, value, cursor)
    }

    /// Encode an element of a container one level deeper.
    pub fn encode_nested(&mut self, value: &Value, cursor: &mut ByteCursor) -> Result<()> {
        if self.depth >= self.limits.max_depth {
            return Err(CodecError::DepthLimitExceeded {
                max: self.limits.max_depth,
            });
        }
        self.depth += 1;
        let result = self.encode(value, cursor);
        self.depth -= 1;
        result
    }

    /// Error for an encoder handed a value of the wrong kind.
    pub fn mismatch(&self, value: &Value) -> CodecError {
        CodecError::UnsupportedValue {
            kind: value.kind(),
            profile: self.registry.name(),
        }
    }
}

fn wire_len(len: usize, max: u32) -> Result<u32> {
    u32::try_from(len)
        .ok()
        .filter(|len| *len <= max)
        .ok_or(CodecError::CountLimitExceeded {
            count: len,
            max: max as usize,
        })
}

/// Built-in body decoder for `kind`.
pub(crate) fn builtin_decoder(kind: ValueKind) -> DecodeFn {
    match kind {
        ValueKind::Null => decode_null,
        ValueKind::Bool => decode_bool,
        ValueKind::Int => decode_int,
        ValueKind::Float => decode_float,
        ValueKind::String => decode_string,
        ValueKind::Vector2 => decode_fixed::<Vector2>,
        ValueKind::Vector2i => decode_fixed::<Vector2i>,
        ValueKind::Rect2 => decode_fixed::<Rect2>,
        ValueKind::Rect2i => decode_fixed::<Rect2i>,
        ValueKind::Vector3 => decode_fixed::<Vector3>,
        ValueKind::Vector3i => decode_fixed::<Vector3i>,
        ValueKind::Transform2D => decode_fixed::<Transform2D>,
        ValueKind::Vector4 => decode_fixed::<Vector4>,
        ValueKind::Vector4i => decode_fixed::<Vector4i>,
        ValueKind::Plane => decode_fixed::<Plane>,
        ValueKind::Quaternion => decode_fixed::<Quaternion>,
        ValueKind::Aabb => decode_fixed::<Aabb>,
        ValueKind::Basis => decode_fixed::<Basis>,
        ValueKind::Transform3D => decode_fixed::<Transform3D>,
        ValueKind::Projection => decode_fixed::<Projection>,
        ValueKind::Color => decode_fixed::<Color>,
        ValueKind::StringName => decode_string_name,
        ValueKind::NodePath => decode_node_path,
        ValueKind::Rid => decode_rid,
        ValueKind::Dictionary => decode_dictionary,
        ValueKind::Array => decode_array,
        ValueKind::ByteArray => decode_byte_array,
        ValueKind::Int32Array => decode_int32_array,
        ValueKind::Int64Array => decode_int64_array,
        ValueKind::Float32Array => decode_float32_array,
        ValueKind::Float64Array => decode_float64_array,
        ValueKind::StringArray => decode_string_array,
        ValueKind::Vector2Array => decode_vector2_array,
        ValueKind::Vector3Array => decode_vector3_array,
        ValueKind::ColorArray => decode_color_array,
    }
}

/// Built-in encoder for `kind`.
pub(crate) fn builtin_encoder(kind: ValueKind) -> EncodeFn {
    match kind {
        ValueKind::Null => encode_null,
        ValueKind::Bool => encode_bool,
        ValueKind::Int => encode_int,
        ValueKind::Float => encode_float,
        ValueKind::String | ValueKind::StringName | ValueKind::NodePath => encode_text,
        ValueKind::Vector2 => encode_fixed::<Vector2>,
        ValueKind::Vector2i => encode_fixed::<Vector2i>,
        ValueKind::Rect2 => encode_fixed::<Rect2>,
        ValueKind::Rect2i => encode_fixed::<Rect2i>,
        ValueKind::Vector3 => encode_fixed::<Vector3>,
        ValueKind::Vector3i => encode_fixed::<Vector3i>,
        ValueKind::Transform2D => encode_fixed::<Transform2D>,
        ValueKind::Vector4 => encode_fixed::<Vector4>,
        ValueKind::Vector4i => encode_fixed::<Vector4i>,
        ValueKind::Plane => encode_fixed::<Plane>,
        ValueKind::Quaternion => encode_fixed::<Quaternion>,
        ValueKind::Aabb => encode_fixed::<Aabb>,
        ValueKind::Basis => encode_fixed::<Basis>,
        ValueKind::Transform3D => encode_fixed::<Transform3D>,
        ValueKind::Projection => encode_fixed::<Projection>,
        ValueKind::Color => encode_fixed::<Color>,
        ValueKind::Rid => encode_rid,
        ValueKind::Dictionary => encode_dictionary,
        ValueKind::Array => encode_array,
        ValueKind::ByteArray => encode_byte_array,
        ValueKind::Int32Array => encode_int32_array,
        ValueKind::Int64Array => encode_int64_array,
        ValueKind::Float32Array => encode_float32_array,
        ValueKind::Float64Array => encode_float64_array,
        ValueKind::StringArray => encode_string_array,
        ValueKind::Vector2Array => encode_vector2_array,
        ValueKind::Vector3Array => encode_vector3_array,
        ValueKind::ColorArray => encode_color_array,
    }
}

fn decode_null(_: &mut Decoder<'_>, _flags: u8, _cursor: &mut ByteCursor) -> Result<Value> {
    Ok(Value::Null)
}

fn decode_bool(_: &mut Decoder<'_>, _flags: u8, cursor: &mut ByteCursor) -> Result<Value> {
    Ok(Value::Bool(cursor.pop_i32_le()? > 0))
}

fn decode_int(_: &mut Decoder<'_>, _flags: u8, cursor: &mut ByteCursor) -> Result<Value> {
    Ok(Value::Int(i64::from(cursor.pop_i32_le()?)))
}

fn decode_float(_: &mut Decoder<'_>, flags: u8, cursor: &mut ByteCursor) -> Result<Value> {
    let value = if flags & FLAG_FLOAT64 != 0 {
        cursor.pop_f64_le()?
    } else {
        f64::from(cursor.pop_f32_le()?)
    };
    Ok(Value::Float(value))
}

fn decode_string(_: &mut Decoder<'_>, _flags: u8, cursor: &mut ByteCursor) -> Result<Value> {
    Ok(Value::String(cursor.pop_padded_string()?))
}

fn decode_string_name(_: &mut Decoder<'_>, _flags: u8, cursor: &mut ByteCursor) -> Result<Value> {
    Ok(Value::StringName(cursor.pop_padded_string()?))
}

fn decode_node_path(_: &mut Decoder<'_>, _flags: u8, cursor: &mut ByteCursor) -> Result<Value> {
    let header = cursor.pop_u32_le()?;
    if header & NODE_PATH_NEW_FORMAT != 0 {
        return Err(CodecError::UnsupportedNodePath { header });
    }
    Ok(Value::NodePath(cursor.pop_padded_str(header as usize)?))
}

fn decode_rid(_: &mut Decoder<'_>, _flags: u8, cursor: &mut ByteCursor) -> Result<Value> {
    Ok(Value::Rid(cursor.pop_u64_le()?))
}

fn decode_fixed<S: FixedStruct>(
    _: &mut Decoder<'_>,
    _flags: u8,
    cursor: &mut ByteCursor,
) -> Result<Value> {
    Ok(S::pop(cursor)?.into_value())
}

fn decode_dictionary(
    decoder: &mut Decoder<'_>,
    _flags: u8,
    cursor: &mut ByteCursor,
) -> Result<Value> {
    let count = decoder.read_count(cursor, CONTAINER_COUNT_MASK, 2 * WORD_SIZE)?;
    let mut dict = DictionaryBuilder::with_capacity(count);
    for _ in 0..count {
        let key = decoder.decode_nested(cursor)?;
        let value = decoder.decode_nested(cursor)?;
        dict.insert(key, value);
    }
    Ok(Value::Dictionary(dict.finish()))
}

fn decode_array(decoder: &mut Decoder<'_>, _flags: u8, cursor: &mut ByteCursor) -> Result<Value> {
    let count = decoder.read_count(cursor, CONTAINER_COUNT_MASK, WORD_SIZE)?;
    let mut items = Vec::with_capacity(count);
    for _ in 0..count {
        items.push(decoder.decode_nested(cursor)?);
    }
    Ok(Value::Array(items))
}

fn decode_packed<T: WireScalar>(decoder: &Decoder<'_>, cursor: &mut ByteCursor) -> Result<Vec<T>> {
    let count = decoder.read_count(cursor, u32::MAX, T::SIZE)?;
    cursor.pop_items(count)
}

fn decode_packed_structs<S: FixedStruct>(
    decoder: &Decoder<'_>,
    cursor: &mut ByteCursor,
) -> Result<Vec<S>> {
    let count = decoder.read_count(cursor, u32::MAX, S::WIRE_SIZE)?;
    let mut items = Vec::with_capacity(count);
    for _ in 0..count {
        items.push(S::pop(cursor)?);
    }
    Ok(items)
}

fn decode_byte_array(
    decoder: &mut Decoder<'_>,
    _flags: u8,
    cursor: &mut ByteCursor,
) -> Result<Value> {
    let count = decoder.read_count(cursor, u32::MAX, 1)?;
    Ok(Value::ByteArray(cursor.pop(count)?.to_vec()))
}

fn decode_int32_array(
    decoder: &mut Decoder<'_>,
    _flags: u8,
    cursor: &mut ByteCursor,
) -> Result<Value> {
    Ok(Value::Int32Array(decode_packed(decoder, cursor)?))
}

fn decode_int64_array(
    decoder: &mut Decoder<'_>,
    _flags: u8,
    cursor: &mut ByteCursor,
) -> Result<Value> {
    Ok(Value::Int64Array(decode_packed(decoder, cursor)?))
}

fn decode_float32_array(
    decoder: &mut Decoder<'_>,
    _flags: u8,
    cursor: &mut ByteCursor,
) -> Result<Value> {
    Ok(Value::Float32Array(decode_packed(decoder, cursor)?))
}

fn decode_float64_array(
    decoder: &mut Decoder<'_>,
    _flags: u8,
    cursor: &mut ByteCursor,
) -> Result<Value> {
    Ok(Value::Float64Array(decode_packed(decoder, cursor)?))
}

fn decode_string_array(
    decoder: &mut Decoder<'_>,
    _flags: u8,
    cursor: &mut ByteCursor,
) -> Result<Value> {
    let count = decoder.read_count(cursor, u32::MAX, WORD_SIZE)?;
    let mut items = Vec::with_capacity(count);
    for _ in 0..count {
        items.push(cursor.pop_padded_string()?);
    }
    Ok(Value::StringArray(items))
}

fn decode_vector2_array(
    decoder: &mut Decoder<'_>,
    _flags: u8,
    cursor: &mut ByteCursor,
) -> Result<Value> {
    Ok(Value::Vector2Array(decode_packed_structs(decoder, cursor)?))
}

fn decode_vector3_array(
    decoder: &mut Decoder<'_>,
    _flags: u8,
    cursor: &mut ByteCursor,
) -> Result<Value> {
    Ok(Value::Vector3Array(decode_packed_structs(decoder, cursor)?))
}

fn decode_color_array(
    decoder: &mut Decoder<'_>,
    _flags: u8,
    cursor: &mut ByteCursor,
) -> Result<Value> {
    Ok(Value::ColorArray(decode_packed_structs(decoder, cursor)?))
}

fn encode_null(
    encoder: &mut Encoder<'_>,
    type_id: u8,
    value: &Value,
    cursor: &mut ByteCursor,
) -> Result<()> {
    if !value.is_null() {
        return Err(encoder.mismatch(value));
    }
    cursor.push_header(0, type_id);
    Ok(())
}

fn encode_bool(
    encoder: &mut Encoder<'_>,
    type_id: u8,
    value: &Value,
    cursor: &mut ByteCursor,
) -> Result<()> {
    let Value::Bool(flag) = value else {
        return Err(encoder.mismatch(value));
    };
    cursor.push_header(0, type_id);
    cursor.push_u32_le(u32::from(*flag));
    Ok(())
}

fn encode_int(
    encoder: &mut Encoder<'_>,
    type_id: u8,
    value: &Value,
    cursor: &mut ByteCursor,
) -> Result<()> {
    let Value::Int(int) = value else {
        return Err(encoder.mismatch(value));
    };
    let narrow =
        i32::try_from(*int).map_err(|_| CodecError::IntegerOutOfRange { value: *int })?;
    cursor.push_header(0, type_id);
    cursor.push_i32_le(narrow);
    Ok(())
}

fn encode_float(
    encoder: &mut Encoder<'_>,
    type_id: u8,
    value: &Value,
    cursor: &mut ByteCursor,
) -> Result<()> {
    let Value::Float(float) = value else {
        return Err(encoder.mismatch(value));
    };
    cursor.push_header(FLAG_FLOAT64, type_id);
    cursor.push_f64_le(*float);
    Ok(())
}

fn push_string(cursor: &mut ByteCursor, text: &str) -> Result<()> {
    wire_len(text.len(), u32::MAX)?;
    cursor.push_padded_string(text);
    Ok(())
}

// String, StringName and NodePath share a body layout; a node path header
// is the byte length with the high bit clear.
fn encode_text(
    encoder: &mut Encoder<'_>,
    type_id: u8,
    value: &Value,
    cursor: &mut ByteCursor,
) -> Result<()> {
    let text = match value {
        Value::String(text) | Value::StringName(text) => text,
        Value::NodePath(text) => {
            wire_len(text.len(), !NODE_PATH_NEW_FORMAT)?;
            text
        }
        _ => return Err(encoder.mismatch(value)),
    };
    cursor.push_header(0, type_id);
    push_string(cursor, text)
}

fn encode_rid(
    encoder: &mut Encoder<'_>,
    type_id: u8,
    value: &Value,
    cursor: &mut ByteCursor,
) -> Result<()> {
    let Value::Rid(rid) = value else {
        return Err(encoder.mismatch(value));
    };
    cursor.push_header(0, type_id);
    cursor.push_u64_le(*rid);
    Ok(())
}

fn encode_fixed<S: FixedStruct>(
    encoder: &mut Encoder<'_>,
    type_id: u8,
    value: &Value,
    cursor: &mut ByteCursor,
) -> Result<()> {
    let inner = S::from_value(value).ok_or_else(|| encoder.mismatch(value))?;
    cursor.push_header(0, type_id);
    inner.push(cursor);
    Ok(())
}

fn encode_dictionary(
    encoder: &mut Encoder<'_>,
    type_id: u8,
    value: &Value,
    cursor: &mut ByteCursor,
) -> Result<()> {
    let Value::Dictionary(dict) = value else {
        return Err(encoder.mismatch(value));
    };
    let count = wire_len(dict.len(), CONTAINER_COUNT_MASK)?;
    cursor.push_header(0, type_id);
    cursor.push_u32_le(count);
    for (key, item) in dict {
        encoder.encode_nested(key, cursor)?;
        encoder.encode_nested(item, cursor)?;
    }
    Ok(())
}

fn encode_array(
    encoder: &mut Encoder<'_>,
    type_id: u8,
    value: &Value,
    cursor: &mut ByteCursor,
) -> Result<()> {
    let Value::Array(items) = value else {
        return Err(encoder.mismatch(value));
    };
    let count = wire_len(items.len(), CONTAINER_COUNT_MASK)?;
    cursor.push_header(0, type_id);
    cursor.push_u32_le(count);
    for item in items {
        encoder.encode_nested(item, cursor)?;
    }
    Ok(())
}

fn push_packed<T: WireScalar>(type_id: u8, items: &[T], cursor: &mut ByteCursor) -> Result<()> {
    let count = wire_len(items.len(), u32::MAX)?;
    cursor.push_header(0, type_id);
    cursor.push_u32_le(count);
    cursor.push_items(items);
    Ok(())
}

fn push_packed_structs<S: FixedStruct>(
    type_id: u8,
    items: &[S],
    cursor: &mut ByteCursor,
) -> Result<()> {
    let count = wire_len(items.len(), u32::MAX)?;
    cursor.push_header(0, type_id);
    cursor.push_u32_le(count);
    for item in items {
        item.push(cursor);
    }
    Ok(())
}

fn encode_byte_array(
    encoder: &mut Encoder<'_>,
    type_id: u8,
    value: &Value,
    cursor: &mut ByteCursor,
) -> Result<()> {
    match value {
        Value::ByteArray(items) => push_packed(type_id, items, cursor),
        _ => Err(encoder.mismatch(value)),
    }
}

fn encode_int32_array(
    encoder: &mut Encoder<'_>,
    type_id: u8,
    value: &Value,
    cursor: &mut ByteCursor,
) -> Result<()> {
    match value {
        Value::Int32Array(items) => push_packed(type_id, items, cursor),
        _ => Err(encoder.mismatch(value)),
    }
}

fn encode_int64_array(
    encoder: &mut Encoder<'_>,
    type_id: u8,
    value: &Value,
    cursor: &mut ByteCursor,
) -> Result<()> {
    match value {
        Value::Int64Array(items) => push_packed(type_id, items, cursor),
        _ => Err(encoder.mismatch(value)),
    }
}

fn encode_float32_array(
    encoder: &mut Encoder<'_>,
    type_id: u8,
    value: &Value,
    cursor: &mut ByteCursor,
) -> Result<()> {
    match value {
        Value::Float32Array(items) => push_packed(type_id, items, cursor),
        _ => Err(encoder.mismatch(value)),
    }
}

fn encode_float64_array(
    encoder: &mut Encoder<'_>,
    type_id: u8,
    value: &Value,
    cursor: &mut ByteCursor,
) -> Result<()> {
    match value {
        Value::Float64Array(items) => push_packed(type_id, items, cursor),
        _ => Err(encoder.mismatch(value)),
    }
}

fn encode_string_array(
    encoder: &mut Encoder<'_>,
    type_id: u8,
    value: &Value,
    cursor: &mut ByteCursor,
) -> Result<()> {
    let Value::StringArray(items) = value else {
        return Err(encoder.mismatch(value));
    };
    let count = wire_len(items.len(), u32::MAX)?;
    cursor.push_header(0, type_id);
    cursor.push_u32_le(count);
    for item in items {
        push_string(cursor, item)?;
    }
    Ok(())
}

fn encode_vector2_array(
    encoder: &mut Encoder<'_>,
    type_id: u8,
    value: &Value,
    cursor: &mut ByteCursor,
) -> Result<()> {
    match value {
        Value::Vector2Array(items) => push_packed_structs(type_id, items, cursor),
        _ => Err(encoder.mismatch(value)),
    }
}

fn encode_vector3_array(
    encoder: &mut Encoder<'_>,
    type_id: u8,
    value: &Value,
    cursor: &mut ByteCursor,
) -> Result<()> {
    match value {
        Value::Vector3Array(items) => push_packed_structs(type_id, items, cursor),
        _ => Err(encoder.mismatch(value)),
    }
}

fn encode_color_array(
    encoder: &mut Encoder<'_>,
    type_id: u8,
    value: &Value,
    cursor: &mut ByteCursor,
) -> Result<()> {
    match value {
        Value::ColorArray(items) => push_packed_structs(type_id, items, cursor),
        _ => Err(encoder.mismatch(value)),
    }
}
