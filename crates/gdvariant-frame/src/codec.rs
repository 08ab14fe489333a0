use bytes::{Buf, BufMut, Bytes, BytesMut};
use gdvariant_codec::{ByteCursor, DecodeLimits, Value, VariantCodec};

use crate::error::{FrameError, Result};

/// Envelope header: payload length (4B LE).
pub const HEADER_SIZE: usize = 4;

/// Default maximum payload size: 16 MiB.
pub const DEFAULT_MAX_PAYLOAD: usize = 16 * 1024 * 1024;

/// Configuration for message framing and payload decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameConfig {
    /// Maximum payload size in bytes. Default: 16 MiB.
    pub max_payload_size: usize,
    /// Limits applied while decoding each payload.
    pub limits: DecodeLimits,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            max_payload_size: DEFAULT_MAX_PAYLOAD,
            limits: DecodeLimits::default(),
        }
    }
}

/// Declared payload length, without consuming anything.
///
/// Returns `None` while fewer than [`HEADER_SIZE`] bytes are available.
pub fn peek_length(src: &[u8]) -> Option<u32> {
    let header: [u8; HEADER_SIZE] = src.get(..HEADER_SIZE)?.try_into().ok()?;
    Some(u32::from_le_bytes(header))
}

/// Compare the bytes in `src` against the first envelope they start.
///
/// Zero means exactly one complete envelope, negative is the number of
/// bytes still missing, positive is the number of bytes beyond the first
/// envelope. Only the header is read.
pub fn size_delta(src: &[u8]) -> i64 {
    let available = src.len() as i64;
    match peek_length(src) {
        Some(declared) => available - (i64::from(declared) + HEADER_SIZE as i64),
        None => available - HEADER_SIZE as i64,
    }
}

/// Encode `value` and append it to `dst` as one envelope.
///
/// Wire format:
/// ```text
/// ┌──────────────┬──────────────────────────────┐
/// │ Length       │ Payload                      │
/// │ (4B LE)      │ header + body (Length bytes) │
/// └──────────────┴──────────────────────────────┘
/// ```
pub fn encode_message(codec: &VariantCodec<'_>, value: &Value, dst: &mut BytesMut) -> Result<()> {
    let mut payload = ByteCursor::new();
    codec.encode(value, &mut payload)?;
    let payload = payload.into_inner();

    if payload.is_empty() {
        return Err(FrameError::EmptyPayload);
    }
    let len = u32::try_from(payload.len()).map_err(|_| FrameError::PayloadTooLarge {
        size: payload.len(),
        max: u32::MAX as usize,
    })?;

    dst.reserve(HEADER_SIZE + payload.len());
    dst.put_u32_le(len);
    dst.put_slice(&payload);
    Ok(())
}

/// Encode `value` as a standalone envelope.
pub fn serialize(codec: &VariantCodec<'_>, value: &Value) -> Result<Bytes> {
    let mut dst = BytesMut::new();
    encode_message(codec, value, &mut dst)?;
    Ok(dst.freeze())
}

/// Decode a buffer that must hold exactly one envelope.
pub fn deserialize(codec: &VariantCodec<'_>, src: &[u8]) -> Result<Value> {
    let declared = peek_length(src).ok_or(FrameError::Truncated {
        needed: HEADER_SIZE,
        available: src.len(),
    })? as usize;

    let payload = &src[HEADER_SIZE..];
    if payload.len() != declared {
        return Err(FrameError::LengthMismatch {
            declared,
            actual: payload.len(),
        });
    }

    Ok(codec.decode_exact(payload)?)
}

/// Decode one envelope from the front of a buffer.
///
/// Returns `Ok(None)` if the buffer doesn't contain a complete envelope yet.
/// Once the envelope is complete its bytes are consumed, even when the
/// payload then fails to decode.
pub fn decode_message(
    src: &mut BytesMut,
    codec: &VariantCodec<'_>,
    max_payload: usize,
) -> Result<Option<Value>> {
    let Some(payload_len) = checked_length(src, max_payload)? else {
        return Ok(None); // Need more data
    };

    let total = HEADER_SIZE + payload_len;
    if src.len() < total {
        return Ok(None); // Need more data
    }

    src.advance(HEADER_SIZE);
    let payload = src.split_to(payload_len).freeze();
    Ok(Some(codec.decode_exact(&payload)?))
}

/// Declared payload length, rejecting lengths above `max_payload`.
pub(crate) fn checked_length(src: &[u8], max_payload: usize) -> Result<Option<usize>> {
    let Some(declared) = peek_length(src) else {
        return Ok(None);
    };
    let declared = declared as usize;
    if declared > max_payload {
        return Err(FrameError::PayloadTooLarge {
            size: declared,
            max: max_payload,
        });
    }
    Ok(Some(declared))
}

#[cfg(test)]
mod tests {
    use gdvariant_codec::{TypeRegistry, VersionProfile};

    use super::*;

    fn v4() -> TypeRegistry {
        VersionProfile::V4.build().unwrap()
    }

    #[test]
    fn serialize_int_fixture() {
        let registry = v4();
        let codec = VariantCodec::new(&registry);

        let bytes = serialize(&codec, &Value::Int(123)).unwrap();
        assert_eq!(&bytes[..], b"\x08\x00\x00\x00\x02\x00\x00\x00{\x00\x00\x00");
        assert_eq!(deserialize(&codec, &bytes).unwrap(), Value::Int(123));
    }

    #[test]
    fn serialize_message_fixtures() {
        let registry = v4();
        let codec = VariantCodec::new(&registry);

        assert_eq!(
            &serialize(&codec, &Value::Null).unwrap()[..],
            b"\x04\x00\x00\x00\x00\x00\x00\x00"
        );
        assert_eq!(
            &serialize(&codec, &Value::from("aaa2")).unwrap()[..],
            b"\x0c\x00\x00\x00\x04\x00\x00\x00\x04\x00\x00\x00aaa2"
        );

        let message = Value::Array(vec![Value::from("REG_RESP"), Value::from("a")]);
        let bytes = serialize(&codec, &message).unwrap();
        assert_eq!(
            &bytes[..],
            b"\x24\x00\x00\x00\x1c\x00\x00\x00\x02\x00\x00\x00\
              \x04\x00\x00\x00\x08\x00\x00\x00REG_RESP\
              \x04\x00\x00\x00\x01\x00\x00\x00\x61\x00\x00\x00"
        );
        assert_eq!(deserialize(&codec, &bytes).unwrap(), message);
    }

    #[test]
    fn deserialize_short_buffer() {
        let registry = v4();
        let codec = VariantCodec::new(&registry);
        let err = deserialize(&codec, b"\x08\x00").unwrap_err();
        assert!(matches!(
            err,
            FrameError::Truncated {
                needed: 4,
                available: 2
            }
        ));
    }

    #[test]
    fn deserialize_length_mismatch() {
        let registry = v4();
        let codec = VariantCodec::new(&registry);

        let mut bytes = serialize(&codec, &Value::Int(7)).unwrap().to_vec();
        bytes.pop();
        assert!(matches!(
            deserialize(&codec, &bytes),
            Err(FrameError::LengthMismatch {
                declared: 8,
                actual: 7
            })
        ));

        bytes.extend_from_slice(&[0, 0]);
        assert!(matches!(
            deserialize(&codec, &bytes),
            Err(FrameError::LengthMismatch {
                declared: 8,
                actual: 9
            })
        ));
    }

    #[test]
    fn deserialize_unsupported_type() {
        let registry = VersionProfile::Legacy.build().unwrap();
        let codec = VariantCodec::new(&registry);
        let err = deserialize(
            &codec,
            b"\x10\x00\x00\x00\x09\x00\x00\x00\x9a\x99\x31\x41\x9a\x99\xb1\x41\x33\x33\x05\x42",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            FrameError::Codec(gdvariant_codec::CodecError::UnsupportedType { type_id: 9, .. })
        ));
    }

    #[test]
    fn peek_length_needs_header() {
        assert_eq!(peek_length(b"\x08\x00\x00"), None);
        assert_eq!(peek_length(b"\x08\x00\x00\x00"), Some(8));
        assert_eq!(peek_length(b"\x08\x00\x00\x00\x02"), Some(8));
    }

    #[test]
    fn size_delta_sign() {
        let one = b"\x08\x00\x00\x00\x02\x00\x00\x00{\x00\x00\x00";
        assert_eq!(size_delta(one), 0);
        assert_eq!(size_delta(&one[..10]), -2);
        assert_eq!(size_delta(&one[..2]), -2);
        assert_eq!(size_delta(b""), -4);

        let mut two = one.to_vec();
        two.extend_from_slice(&one[..5]);
        assert_eq!(size_delta(&two), 5);
    }

    #[test]
    fn decode_message_incremental() {
        let registry = v4();
        let codec = VariantCodec::new(&registry);
        let wire = serialize(&codec, &Value::Bool(true)).unwrap();

        let mut buf = BytesMut::from(&wire[..6]);
        assert!(decode_message(&mut buf, &codec, DEFAULT_MAX_PAYLOAD)
            .unwrap()
            .is_none());
        assert_eq!(buf.len(), 6);

        buf.extend_from_slice(&wire[6..]);
        let value = decode_message(&mut buf, &codec, DEFAULT_MAX_PAYLOAD)
            .unwrap()
            .unwrap();
        assert_eq!(value, Value::Bool(true));
        assert!(buf.is_empty());
    }

    #[test]
    fn decode_message_payload_too_large() {
        let registry = v4();
        let codec = VariantCodec::new(&registry);

        let mut buf = BytesMut::new();
        buf.put_u32_le(1024 * 1024 * 32); // 32 MiB

        let result = decode_message(&mut buf, &codec, DEFAULT_MAX_PAYLOAD);
        assert!(matches!(result, Err(FrameError::PayloadTooLarge { .. })));
    }

    #[test]
    fn decode_message_consumes_bad_payload() {
        let registry = v4();
        let codec = VariantCodec::new(&registry);

        let mut buf = BytesMut::new();
        buf.put_slice(b"\x04\x00\x00\x00\x63\x00\x00\x00");
        buf.put_slice(&serialize(&codec, &Value::Null).unwrap());

        assert!(decode_message(&mut buf, &codec, DEFAULT_MAX_PAYLOAD).is_err());
        let next = decode_message(&mut buf, &codec, DEFAULT_MAX_PAYLOAD)
            .unwrap()
            .unwrap();
        assert_eq!(next, Value::Null);
    }

    #[test]
    fn trailing_bytes_inside_payload_rejected() {
        let registry = v4();
        let codec = VariantCodec::new(&registry);
        let err = deserialize(&codec, b"\x08\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00")
            .unwrap_err();
        assert!(matches!(
            err,
            FrameError::Codec(gdvariant_codec::CodecError::TrailingBytes { remaining: 4 })
        ));
    }
}
