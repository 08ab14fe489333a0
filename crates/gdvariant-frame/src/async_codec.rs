use std::sync::Arc;

use bytes::BytesMut;
use gdvariant_codec::{TypeRegistry, Value, VariantCodec};
use tokio_util::codec::{Decoder, Encoder};

use crate::codec::{decode_message, encode_message, FrameConfig, HEADER_SIZE};
use crate::error::{FrameError, Result};

/// `tokio_util` codec for variant envelopes.
///
/// Use with `FramedRead`/`FramedWrite` or `Framed` over any async byte
/// stream.
#[derive(Debug, Clone)]
pub struct MessageCodec {
    registry: Arc<TypeRegistry>,
    config: FrameConfig,
}

impl MessageCodec {
    pub fn new(registry: Arc<TypeRegistry>) -> Self {
        Self::with_config(registry, FrameConfig::default())
    }

    pub fn with_config(registry: Arc<TypeRegistry>, config: FrameConfig) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &Arc<TypeRegistry> {
        &self.registry
    }

    pub fn config(&self) -> &FrameConfig {
        &self.config
    }
}

impl Decoder for MessageCodec {
    type Item = Value;
    type Error = FrameError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Value>> {
        let codec = VariantCodec::with_limits(&self.registry, self.config.limits);
        decode_message(src, &codec, self.config.max_payload_size)
    }
}

impl Encoder<&Value> for MessageCodec {
    type Error = FrameError;

    fn encode(&mut self, value: &Value, dst: &mut BytesMut) -> Result<()> {
        let codec = VariantCodec::with_limits(&self.registry, self.config.limits);
        let start = dst.len();
        encode_message(&codec, value, dst)?;

        let payload_len = dst.len() - start - HEADER_SIZE;
        if payload_len > self.config.max_payload_size {
            dst.truncate(start);
            return Err(FrameError::PayloadTooLarge {
                size: payload_len,
                max: self.config.max_payload_size,
            });
        }
        Ok(())
    }
}

impl Encoder<Value> for MessageCodec {
    type Error = FrameError;

    fn encode(&mut self, value: Value, dst: &mut BytesMut) -> Result<()> {
        Encoder::<&Value>::encode(self, &value, dst)
    }
}
