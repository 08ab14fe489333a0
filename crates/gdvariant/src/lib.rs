//! Typed binary variant codec with message framing.
//!
//! gdvariant reads and writes the tagged binary value format used by game
//! engine network peers: scalars, strings, geometric structs, packed arrays
//! and nested dictionaries/arrays, across three wire-format versions.
//!
//! # Crate Structure
//!
//! - [`codec`]: Value model, version profiles and the recursive variant codec
//! - [`frame`]: Length-prefixed envelopes, stream reassembly and blocking I/O

/// Re-export codec types.
pub mod codec {
    pub use gdvariant_codec::*;
}

/// Re-export frame types.
pub mod frame {
    pub use gdvariant_frame::*;
}
