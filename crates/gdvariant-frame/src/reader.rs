use std::io::{ErrorKind, Read};
use std::sync::Arc;

use gdvariant_codec::{TypeRegistry, Value};

use crate::codec::FrameConfig;
use crate::error::{FrameError, Result};
use crate::stream::MessageStream;

const READ_CHUNK_SIZE: usize = 8 * 1024;

/// Reads complete messages from any `Read` stream.
///
/// Handles partial reads internally; callers always get whole values.
pub struct MessageReader<T> {
    inner: T,
    stream: MessageStream,
}

impl<T: Read> MessageReader<T> {
    /// Create a new message reader with default configuration.
    pub fn new(inner: T, registry: Arc<TypeRegistry>) -> Self {
        Self::with_config(inner, registry, FrameConfig::default())
    }

    /// Create a new message reader with explicit configuration.
    pub fn with_config(inner: T, registry: Arc<TypeRegistry>, config: FrameConfig) -> Self {
        Self {
            inner,
            stream: MessageStream::with_config(registry, config),
        }
    }

    /// Read the next complete message (blocking).
    ///
    /// Returns `Err(FrameError::ConnectionClosed)` when EOF is reached.
    pub fn read_message(&mut self) -> Result<Value> {
        loop {
            if let Some(value) = self.stream.try_take()? {
                return Ok(value);
            }

            let mut chunk = [0u8; READ_CHUNK_SIZE];
            let read = match self.inner.read(&mut chunk) {
                Ok(n) => n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(FrameError::Io(err)),
            };

            if read == 0 {
                return Err(FrameError::ConnectionClosed);
            }

            self.stream.feed(&chunk[..read]);
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

    /// Consume the reader and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Bytes read from the stream but not yet returned as a message.
    pub fn buffered(&self) -> usize {
        self.stream.len()
    }

    /// Update maximum payload size for subsequent message decoding.
    pub fn set_max_payload_size(&mut self, max_payload_size: usize) {
        self.stream.set_max_payload_size(max_payload_size);
    }

    /// Current message reader configuration.
    pub fn config(&self) -> &FrameConfig {
        self.stream.config()
    }
}
