//! Configurable limits for bounded decoding.

/// Limits enforced while decoding untrusted payloads.
///
/// Every container's declared element count is also checked against the
/// bytes actually remaining before anything is allocated, so these limits
/// bound work for payloads that are large but well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeLimits {
    /// Maximum nesting of dictionaries and arrays.
    pub max_depth: usize,

    /// Maximum element count of a single container or packed array.
    pub max_container_len: usize,
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            max_depth: 64,
            max_container_len: 1 << 20,
        }
    }
}

impl DecodeLimits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_depth: 8,
            max_container_len: 64,
        }
    }

    /// Creates limits with no restrictions (use with caution).
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_depth: usize::MAX,
            max_container_len: usize::MAX,
        }
    }
}
