use std::io::{ErrorKind, Write};
use std::sync::Arc;

use bytes::BytesMut;
use gdvariant_codec::{TypeRegistry, Value, VariantCodec};

use crate::codec::{encode_message, FrameConfig, HEADER_SIZE};
use crate::error::{FrameError, Result};

const INITIAL_BUFFER_CAPACITY: usize = 8 * 1024;

/// Writes complete messages to any `Write` stream.
pub struct MessageWriter<T> {
    inner: T,
    buf: BytesMut,
    registry: Arc<TypeRegistry>,
    config: FrameConfig,
}

impl<T: Write> MessageWriter<T> {
    /// Create a new message writer with default configuration.
    pub fn new(inner: T, registry: Arc<TypeRegistry>) -> Self {
        Self::with_config(inner, registry, FrameConfig::default())
    }

    /// Create a new message writer with explicit configuration.
    pub fn with_config(inner: T, registry: Arc<TypeRegistry>, config: FrameConfig) -> Self {
        Self {
            inner,
            buf: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
            registry,
            config,
        }
    }

    /// Encode and send one value as a complete envelope (blocking).
    pub fn send(&mut self, value: &Value) -> Result<()> {
        let codec = VariantCodec::with_limits(&self.registry, self.config.limits);
        self.buf.clear();
        encode_message(&codec, value, &mut self.buf)?;

        let payload_len = self.buf.len() - HEADER_SIZE;
        if payload_len > self.config.max_payload_size {
            self.buf.clear();
            return Err(FrameError::PayloadTooLarge {
                size: payload_len,
                max: self.config.max_payload_size,
            });
        }

        let mut offset = 0usize;
        while offset < self.buf.len() {
            match self.inner.write(&self.buf[offset..]) {
                Ok(0) => return Err(FrameError::ConnectionClosed),
                Ok(n) => offset += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(err) => return Err(FrameError::Io(err)),
            }
        }

        self.flush()
    }

    /// Flush the underlying stream.
    pub fn flush(&mut self) -> Result<()> {
        loop {
            match self.inner.flush() {
                Ok(()) => return Ok(()),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(err) => return Err(FrameError::Io(err)),
            }
        }
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the underlying stream.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the writer and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Update maximum payload size for subsequent message encoding.
    pub fn set_max_payload_size(&mut self, max_payload_size: usize) {
        self.config.max_payload_size = max_payload_size;
    }

    /// Current message writer configuration.
    pub fn config(&self) -> &FrameConfig {
        &self.config
    }
}
