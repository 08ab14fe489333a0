use std::sync::Arc;

use bytes::{Buf, BytesMut};
use gdvariant_codec::{TypeRegistry, Value, VariantCodec};
use tracing::{debug, warn};

use crate::codec::{checked_length, size_delta, FrameConfig, HEADER_SIZE};
use crate::error::Result;

const INITIAL_BUFFER_CAPACITY: usize = 8 * 1024;

/// Reassembles envelopes from arbitrarily chunked input.
///
/// Chunks go in through [`feed`](Self::feed) with no parsing; complete
/// messages come out of [`try_take`](Self::try_take) and
/// [`drain_all`](Self::drain_all) in arrival order. Not synchronized:
/// wrap it in a lock to share it between threads.
#[derive(Debug)]
pub struct MessageStream {
    buf: BytesMut,
    registry: Arc<TypeRegistry>,
    config: FrameConfig,
}

impl MessageStream {
    /// Create a stream with default configuration.
    pub fn new(registry: Arc<TypeRegistry>) -> Self {
        Self::with_config(registry, FrameConfig::default())
    }

    /// Create a stream with explicit configuration.
    pub fn with_config(registry: Arc<TypeRegistry>, config: FrameConfig) -> Self {
        Self {
            buf: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
            registry,
            config,
        }
    }

    /// Append a chunk of input.
    pub fn feed(&mut self, chunk: &[u8]) {
        self.buf.extend_from_slice(chunk);
    }

    /// Buffered bytes compared to the first envelope; see
    /// [`size_delta`](crate::codec::size_delta).
    pub fn size_delta(&self) -> i64 {
        size_delta(&self.buf)
    }

    /// Whether a complete envelope sits at the front of the buffer.
    pub fn contains_message(&self) -> bool {
        self.size_delta() >= 0
    }

    /// Extract and decode the first complete message.
    ///
    /// Returns `Ok(None)` without touching the buffer while the message is
    /// incomplete. A message whose payload fails to decode is still
    /// consumed, so the next call starts at the following message.
    ///
    /// A declared length above `max_payload_size` is reported as soon as
    /// the header arrives; the stream cannot resynchronize after that and
    /// must be [`clear`](Self::clear)ed.
    pub fn try_take(&mut self) -> Result<Option<Value>> {
        self.take_next(true)
    }

    /// Extract every complete message currently buffered.
    ///
    /// If a message fails to decode after others were already extracted,
    /// those are returned and the bad message stays at the front, so the
    /// next call reports its error.
    pub fn drain_all(&mut self) -> Result<Vec<Value>> {
        let mut values = Vec::new();
        loop {
            match self.take_next(values.is_empty()) {
                Ok(Some(value)) => values.push(value),
                Ok(None) => return Ok(values),
                Err(err) if values.is_empty() => return Err(err),
                Err(_) => return Ok(values),
            }
        }
    }

    fn take_next(&mut self, consume_on_error: bool) -> Result<Option<Value>> {
        let Some(payload_len) = checked_length(&self.buf, self.config.max_payload_size)? else {
            return Ok(None);
        };
        let total = HEADER_SIZE + payload_len;
        if self.buf.len() < total {
            return Ok(None);
        }

        let codec = VariantCodec::with_limits(&self.registry, self.config.limits);
        match codec.decode_exact(&self.buf[HEADER_SIZE..total]) {
            Ok(value) => {
                self.buf.advance(total);
                debug!(payload_len, buffered = self.buf.len(), "message extracted");
                Ok(Some(value))
            }
            Err(err) => {
                if consume_on_error {
                    self.buf.advance(total);
                    warn!(payload_len, error = %err, "discarded undecodable message");
                }
                Err(err.into())
            }
        }
    }

    /// Number of buffered bytes.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Discard all buffered bytes.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    pub fn registry(&self) -> &Arc<TypeRegistry> {
        &self.registry
    }

    /// Current stream configuration.
    pub fn config(&self) -> &FrameConfig {
        &self.config
    }

    /// Update maximum payload size for subsequent extraction.
    pub fn set_max_payload_size(&mut self, max_payload_size: usize) {
        self.config.max_payload_size = max_payload_size;
    }
}
