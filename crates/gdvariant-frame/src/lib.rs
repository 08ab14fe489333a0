//! Length-prefixed message envelopes for variant payloads.
//!
//! Every message is one encoded variant behind a 4-byte little-endian
//! payload length. [`MessageStream`] reassembles messages from chunks of
//! any size; [`MessageReader`] and [`MessageWriter`] do the same over
//! blocking `std::io` streams.

#[cfg(feature = "async")]
pub mod async_codec;
pub mod codec;
pub mod error;
pub mod reader;
pub mod stream;
pub mod writer;

#[cfg(feature = "async")]
pub use async_codec::MessageCodec;
pub use codec::{
    decode_message, deserialize, encode_message, peek_length, serialize, size_delta, FrameConfig,
    DEFAULT_MAX_PAYLOAD, HEADER_SIZE,
};
pub use error::{FrameError, Result};
pub use reader::MessageReader;
pub use stream::MessageStream;
pub use writer::MessageWriter;
