use gdvariant_codec::CodecError;

/// Errors that can occur while framing, reassembling or transporting
/// messages.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// Fewer bytes than the 4-byte length header.
    #[error("truncated envelope (needed {needed} bytes, {available} available)")]
    Truncated { needed: usize, available: usize },

    /// The declared payload length disagrees with the bytes present.
    #[error("envelope declares {declared} payload bytes, found {actual}")]
    LengthMismatch { declared: usize, actual: usize },

    /// The encoder produced no payload bytes.
    #[error("encoded payload is empty")]
    EmptyPayload,

    /// The payload exceeds the configured maximum size.
    #[error("payload too large ({size} bytes, max {max})")]
    PayloadTooLarge { size: usize, max: usize },

    /// The payload failed to decode or encode.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// An I/O error occurred while reading or writing messages.
    #[error("message I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The connection was closed before a complete message was received.
    #[error("connection closed (incomplete message)")]
    ConnectionClosed,
}

pub type Result<T> = std::result::Result<T, FrameError>;
