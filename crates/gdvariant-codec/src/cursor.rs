use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::{CodecError, Result};

/// Size of a variant header and of every length/count prefix.
pub const WORD_SIZE: usize = 4;

/// Zero bytes needed after `len` bytes to reach the next 4-byte boundary.
pub const fn padding_for(len: usize) -> usize {
    (WORD_SIZE - len % WORD_SIZE) % WORD_SIZE
}

/// Owned byte buffer with a read head at the front.
///
/// Pops consume from the front and fail with [`CodecError::Truncated`] when
/// the buffer runs short; pushes append to the back and never fail.
/// Everything handed out by a pop is an independent copy or a detached
/// `Bytes` handle, so decoded values never borrow from the cursor.
#[derive(Debug, Default, Clone)]
pub struct ByteCursor {
    buf: BytesMut,
    consumed: usize,
}

impl ByteCursor {
    /// Create an empty cursor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cursor with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
            consumed: 0,
        }
    }

    /// Bytes remaining in front of the head.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Number of bytes popped since the cursor was created.
    pub fn offset(&self) -> usize {
        self.consumed
    }

    /// The unread bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// Consume the cursor and return the unread bytes.
    pub fn into_inner(self) -> BytesMut {
        self.buf
    }

    /// Consume the cursor and return the unread bytes as `Bytes`.
    pub fn freeze(self) -> Bytes {
        self.buf.freeze()
    }

    /// Fail with [`CodecError::Truncated`] unless `needed` bytes remain.
    pub fn require(&self, needed: usize) -> Result<()> {
        if self.buf.len() < needed {
            return Err(CodecError::Truncated {
                needed,
                remaining: self.buf.len(),
                offset: self.consumed,
            });
        }
        Ok(())
    }

    /// Remove and return the first `n` bytes.
    pub fn pop(&mut self, n: usize) -> Result<Bytes> {
        self.require(n)?;
        self.consumed += n;
        Ok(self.buf.split_to(n).freeze())
    }

    pub fn pop_u8(&mut self) -> Result<u8> {
        self.require(1)?;
        self.consumed += 1;
        Ok(self.buf.get_u8())
    }

    pub fn pop_u32_le(&mut self) -> Result<u32> {
        self.require(4)?;
        self.consumed += 4;
        Ok(self.buf.get_u32_le())
    }

    /// Read four bytes as a two's-complement signed integer.
    ///
    /// The sign comes from bit 31 of the raw pattern, not from any wider
    /// host integer, so `00 00 00 80` is always `i32::MIN`.
    pub fn pop_i32_le(&mut self) -> Result<i32> {
        let raw = self.pop_u32_le()?;
        Ok(i32::from_le_bytes(raw.to_le_bytes()))
    }

    pub fn pop_u64_le(&mut self) -> Result<u64> {
        self.require(8)?;
        self.consumed += 8;
        Ok(self.buf.get_u64_le())
    }

    pub fn pop_i64_le(&mut self) -> Result<i64> {
        self.require(8)?;
        self.consumed += 8;
        Ok(self.buf.get_i64_le())
    }

    pub fn pop_f32_le(&mut self) -> Result<f32> {
        self.require(4)?;
        self.consumed += 4;
        Ok(self.buf.get_f32_le())
    }

    pub fn pop_f64_le(&mut self) -> Result<f64> {
        self.require(8)?;
        self.consumed += 8;
        Ok(self.buf.get_f64_le())
    }

    /// Read a variant header, returning `(flags, type_id)`.
    pub fn pop_header(&mut self) -> Result<(u8, u8)> {
        let raw = self.pop_u32_le()?;
        let type_id = (raw & 0xFF) as u8;
        let flags = ((raw >> 16) & 0xFF) as u8;
        Ok((flags, type_id))
    }

    /// Read `len` bytes and decode them as UTF-8.
    pub fn pop_str(&mut self, len: usize) -> Result<String> {
        let offset = self.consumed;
        let raw = self.pop(len)?;
        std::str::from_utf8(&raw)
            .map(str::to_owned)
            .map_err(|source| CodecError::InvalidEncoding { offset, source })
    }

    /// Read a length-prefixed string followed by its alignment padding.
    pub fn pop_padded_string(&mut self) -> Result<String> {
        let len = self.pop_u32_le()? as usize;
        self.pop_padded_str(len)
    }

    /// Read `len` string bytes whose length prefix was already consumed,
    /// then discard the alignment padding.
    pub fn pop_padded_str(&mut self, len: usize) -> Result<String> {
        let value = self.pop_str(len)?;
        self.pop(padding_for(len))?;
        Ok(value)
    }

    /// Read `count` fixed-width items, checking the whole run up front.
    pub fn pop_items<T: WireScalar>(&mut self, count: usize) -> Result<Vec<T>> {
        let needed = count.checked_mul(T::SIZE).unwrap_or(usize::MAX);
        self.require(needed)?;
        let mut items = Vec::with_capacity(count);
        for _ in 0..count {
            items.push(T::pop(self)?);
        }
        Ok(items)
    }

    pub fn push(&mut self, value: &[u8]) {
        self.buf.put_slice(value);
    }

    pub fn push_zeros(&mut self, count: usize) {
        self.buf.put_bytes(0, count);
    }

    pub fn push_u8(&mut self, value: u8) {
        self.buf.put_u8(value);
    }

    pub fn push_u32_le(&mut self, value: u32) {
        self.buf.put_u32_le(value);
    }

    pub fn push_i32_le(&mut self, value: i32) {
        self.buf.put_i32_le(value);
    }

    pub fn push_u64_le(&mut self, value: u64) {
        self.buf.put_u64_le(value);
    }

    pub fn push_i64_le(&mut self, value: i64) {
        self.buf.put_i64_le(value);
    }

    pub fn push_f32_le(&mut self, value: f32) {
        self.buf.put_f32_le(value);
    }

    pub fn push_f64_le(&mut self, value: f64) {
        self.buf.put_f64_le(value);
    }

    /// Write a variant header: `(flags << 16) | type_id`.
    pub fn push_header(&mut self, flags: u8, type_id: u8) {
        self.push_u32_le((u32::from(flags) << 16) | u32::from(type_id));
    }

    /// Write UTF-8 bytes with their byte length in front and zero padding
    /// up to the next multiple of four.
    ///
    /// Callers are responsible for keeping the length within `u32`.
    pub fn push_padded_string(&mut self, value: &str) {
        let raw = value.as_bytes();
        self.push_u32_le(raw.len() as u32);
        self.push(raw);
        self.push_zeros(padding_for(raw.len()));
    }

    pub fn push_items<T: WireScalar>(&mut self, items: &[T]) {
        for item in items {
            item.push(self);
        }
    }
}

impl From<BytesMut> for ByteCursor {
    fn from(buf: BytesMut) -> Self {
        Self { buf, consumed: 0 }
    }
}

impl From<&[u8]> for ByteCursor {
    fn from(data: &[u8]) -> Self {
        Self::from(BytesMut::from(data))
    }
}

impl From<Vec<u8>> for ByteCursor {
    fn from(data: Vec<u8>) -> Self {
        Self::from(BytesMut::from(data.as_slice()))
    }
}

/// Fixed-width little-endian item carried in packed arrays and fixed structs.
pub trait WireScalar: Copy {
    /// Width on the wire in bytes.
    const SIZE: usize;

    fn pop(cursor: &mut ByteCursor) -> Result<Self>;

    fn push(self, cursor: &mut ByteCursor);
}

impl WireScalar for u8 {
    const SIZE: usize = 1;

    fn pop(cursor: &mut ByteCursor) -> Result<Self> {
        cursor.pop_u8()
    }

    fn push(self, cursor: &mut ByteCursor) {
        cursor.push_u8(self);
    }
}

impl WireScalar for i32 {
    const SIZE: usize = 4;

    fn pop(cursor: &mut ByteCursor) -> Result<Self> {
        cursor.pop_i32_le()
    }

    fn push(self, cursor: &mut ByteCursor) {
        cursor.push_i32_le(self);
    }
}

impl WireScalar for i64 {
    const SIZE: usize = 8;

    fn pop(cursor: &mut ByteCursor) -> Result<Self> {
        cursor.pop_i64_le()
    }

    fn push(self, cursor: &mut ByteCursor) {
        cursor.push_i64_le(self);
    }
}

impl WireScalar for f32 {
    const SIZE: usize = 4;

    fn pop(cursor: &mut ByteCursor) -> Result<Self> {
        cursor.pop_f32_le()
    }

    fn push(self, cursor: &mut ByteCursor) {
        cursor.push_f32_le(self);
    }
}

impl WireScalar for f64 {
    const SIZE: usize = 8;

    fn pop(cursor: &mut ByteCursor) -> Result<Self> {
        cursor.pop_f64_le()
    }

    fn push(self, cursor: &mut ByteCursor) {
        cursor.push_f64_le(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pop_advances_head() {
        let mut cursor = ByteCursor::from(&b"abcdef"[..]);
        assert_eq!(cursor.pop(2).unwrap().as_ref(), b"ab");
        assert_eq!(cursor.len(), 4);
        assert_eq!(cursor.offset(), 2);
        assert_eq!(cursor.as_slice(), b"cdef");
    }

    #[test]
    fn pop_past_end_is_truncated() {
        let mut cursor = ByteCursor::from(&[1u8, 2, 3][..]);
        let err = cursor.pop_u32_le().unwrap_err();
        assert!(matches!(
            err,
            CodecError::Truncated {
                needed: 4,
                remaining: 3,
                offset: 0
            }
        ));
        assert_eq!(cursor.len(), 3, "failed pop must not consume");
    }

    #[test]
    fn signed_int_uses_bit_31() {
        let mut cursor = ByteCursor::from(&[0x00, 0x00, 0x00, 0x80, 0xFF, 0xFF, 0xFF, 0xFF][..]);
        assert_eq!(cursor.pop_i32_le().unwrap(), i32::MIN);
        assert_eq!(cursor.pop_i32_le().unwrap(), -1);
    }

    #[test]
    fn header_layout() {
        let mut cursor = ByteCursor::new();
        cursor.push_header(1, 3);
        assert_eq!(cursor.as_slice(), &[0x03, 0x00, 0x01, 0x00]);
        assert_eq!(cursor.pop_header().unwrap(), (1, 3));
    }

    #[test]
    fn header_ignores_reserved_bits() {
        let mut cursor = ByteCursor::from(&[0x1c, 0xAA, 0x00, 0xBB][..]);
        assert_eq!(cursor.pop_header().unwrap(), (0, 0x1c));
    }

    #[test]
    fn padded_string_layout() {
        let mut cursor = ByteCursor::new();
        cursor.push_padded_string("DO_STEP");
        assert_eq!(cursor.as_slice(), b"\x07\x00\x00\x00DO_STEP\x00");

        let mut aligned = ByteCursor::new();
        aligned.push_padded_string("aaa2");
        assert_eq!(aligned.as_slice(), b"\x04\x00\x00\x00aaa2");
    }

    #[test]
    fn padded_string_uses_byte_length() {
        let mut cursor = ByteCursor::new();
        cursor.push_padded_string("zé");
        assert_eq!(cursor.as_slice(), b"\x03\x00\x00\x00z\xc3\xa9\x00");
        assert_eq!(cursor.pop_padded_string().unwrap(), "zé");
        assert!(cursor.is_empty());
    }

    #[test]
    fn pop_padded_string_consumes_padding() {
        let mut cursor = ByteCursor::from(&b"\x03\x00\x00\x00bbc\x00\x02\x00\x00\x00"[..]);
        assert_eq!(cursor.pop_padded_string().unwrap(), "bbc");
        assert_eq!(cursor.pop_u32_le().unwrap(), 2);
    }

    #[test]
    fn missing_padding_is_truncated() {
        let mut cursor = ByteCursor::from(&b"\x03\x00\x00\x00bbc"[..]);
        assert!(matches!(
            cursor.pop_padded_string(),
            Err(CodecError::Truncated { needed: 1, .. })
        ));
    }

    #[test]
    fn invalid_utf8_reports_offset() {
        let mut cursor = ByteCursor::from(&b"\x02\x00\x00\x00\xff\xfe\x00\x00"[..]);
        let err = cursor.pop_padded_string().unwrap_err();
        assert!(matches!(err, CodecError::InvalidEncoding { offset: 4, .. }));
    }

    #[test]
    fn pop_items_checks_whole_run() {
        let mut cursor = ByteCursor::from(&[0u8; 12][..]);
        let err = cursor.pop_items::<f64>(2).unwrap_err();
        assert!(matches!(err, CodecError::Truncated { needed: 16, .. }));
        assert_eq!(cursor.len(), 12);

        let huge = cursor.pop_items::<i64>(usize::MAX).unwrap_err();
        assert!(matches!(huge, CodecError::Truncated { .. }));
    }

    #[test]
    fn items_roundtrip() {
        let mut cursor = ByteCursor::new();
        cursor.push_items(&[31i32, -32, 33]);
        assert_eq!(
            cursor.as_slice(),
            b"\x1f\x00\x00\x00\xe0\xff\xff\xff\x21\x00\x00\x00"
        );
        assert_eq!(cursor.pop_items::<i32>(3).unwrap(), vec![31, -32, 33]);
    }

    #[test]
    fn padding_for_lengths() {
        assert_eq!(padding_for(0), 0);
        assert_eq!(padding_for(1), 3);
        assert_eq!(padding_for(4), 0);
        assert_eq!(padding_for(9), 3);
    }
}
