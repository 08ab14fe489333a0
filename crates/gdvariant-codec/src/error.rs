use crate::value::ValueKind;

/// Errors that can occur while decoding or encoding variant payloads.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Fewer bytes remain than the field being read declares.
    #[error("truncated input at offset {offset} (needed {needed} bytes, {remaining} remaining)")]
    Truncated {
        needed: usize,
        remaining: usize,
        offset: usize,
    },

    /// The wire type-id is not registered in the active profile.
    #[error("unsupported wire type {type_id} in profile {profile}")]
    UnsupportedType { type_id: u8, profile: &'static str },

    /// The value kind has no encoder in the active profile.
    #[error("no encoder for {kind} in profile {profile}")]
    UnsupportedValue {
        kind: ValueKind,
        profile: &'static str,
    },

    /// String bytes are not valid UTF-8.
    #[error("invalid UTF-8 string at offset {offset}: {source}")]
    InvalidEncoding {
        offset: usize,
        #[source]
        source: std::str::Utf8Error,
    },

    /// An integer value does not fit the 32-bit wire representation.
    #[error("integer {value} does not fit in 32 bits")]
    IntegerOutOfRange { value: i64 },

    /// Node path uses the name/subname format, which is not supported.
    #[error("unsupported node path format (header {header:#010x})")]
    UnsupportedNodePath { header: u32 },

    /// Nested containers exceed the configured depth.
    #[error("nesting depth exceeds limit of {max}")]
    DepthLimitExceeded { max: usize },

    /// A container declares more elements than the configured ceiling.
    #[error("container declares {count} elements, limit is {max}")]
    CountLimitExceeded { count: usize, max: usize },

    /// Bytes were left over after the top-level value was decoded.
    #[error("{remaining} trailing bytes after decoded value")]
    TrailingBytes { remaining: usize },
}

/// Errors raised while building a type registry from a profile table.
///
/// These indicate a mistake in a version table, never bad input.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The same wire type-id appears twice.
    #[error("profile {profile}: wire type {type_id} already registered")]
    DuplicateTypeId { profile: &'static str, type_id: u8 },

    /// The same value kind appears twice.
    #[error("profile {profile}: {kind} already registered")]
    DuplicateKind {
        profile: &'static str,
        kind: ValueKind,
    },

    /// No shipped profile carries this name.
    #[error("unknown version profile: {0}")]
    UnknownProfile(String),
}

pub type Result<T> = std::result::Result<T, CodecError>;
