use std::fmt;
use std::io;

use gdvariant_codec::{CodecError, RegistryError};
use gdvariant_frame::FrameError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const TIMEOUT: i32 = 124;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => TIMEOUT,
        io::ErrorKind::NotFound => FAILURE,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn codec_error(context: &str, err: CodecError) -> CliError {
    CliError::new(DATA_INVALID, format!("{context}: {err}"))
}

pub fn registry_error(err: RegistryError) -> CliError {
    match err {
        RegistryError::UnknownProfile(_) => CliError::new(
            USAGE,
            format!("{err} (expected one of: legacy, v3, v4)"),
        ),
        other => CliError::new(INTERNAL, other.to_string()),
    }
}

pub fn frame_error(context: &str, err: FrameError) -> CliError {
    match err {
        FrameError::Io(source) => io_error(context, source),
        FrameError::Codec(source) => codec_error(context, source),
        FrameError::Truncated { .. }
        | FrameError::LengthMismatch { .. }
        | FrameError::PayloadTooLarge { .. } => {
            CliError::new(DATA_INVALID, format!("{context}: {err}"))
        }
        FrameError::ConnectionClosed => CliError::new(FAILURE, format!("{context}: {err}")),
        other => CliError::new(INTERNAL, format!("{context}: {other}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_profile_is_usage_error() {
        let err = registry_error(RegistryError::UnknownProfile("v9".into()));
        assert_eq!(err.code, USAGE);
        assert!(err.message.contains("v9"));
    }

    #[test]
    fn decode_failures_are_data_invalid() {
        let err = frame_error(
            "decode failed",
            FrameError::LengthMismatch {
                declared: 8,
                actual: 7,
            },
        );
        assert_eq!(err.code, DATA_INVALID);

        let err = frame_error(
            "decode failed",
            FrameError::Codec(CodecError::TrailingBytes { remaining: 1 }),
        );
        assert_eq!(err.code, DATA_INVALID);
        assert!(err.message.starts_with("decode failed: "));
    }

    #[test]
    fn io_errors_map_by_kind() {
        let err = io_error("read", io::Error::from(io::ErrorKind::PermissionDenied));
        assert_eq!(err.code, PERMISSION_DENIED);
        let err = io_error("read", io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(err.code, FAILURE);
    }
}
