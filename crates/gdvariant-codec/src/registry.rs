use std::collections::HashMap;

use crate::cursor::ByteCursor;
use crate::error::{CodecError, RegistryError, Result};
use crate::value::{Value, ValueKind};
use crate::variant::{builtin_decoder, builtin_encoder, Decoder, Encoder};

/// Decodes the body of one variant whose header has already been read.
///
/// Receives the header flags and the cursor positioned at the body.
/// Containers recurse through [`Decoder::decode_nested`].
pub type DecodeFn = fn(&mut Decoder<'_>, u8, &mut ByteCursor) -> Result<Value>;

/// Encodes one variant, header included, under the given wire type-id.
pub type EncodeFn = fn(&mut Encoder<'_>, u8, &Value, &mut ByteCursor) -> Result<()>;

/// One row of a version table.
///
/// Entries without explicit functions use the built-in codec for their
/// kind, so a table usually only lists `(type_id, kind)` pairs.
#[derive(Debug, Clone, Copy)]
pub struct RegistryEntry {
    pub type_id: u8,
    pub kind: ValueKind,
    pub decode: Option<DecodeFn>,
    pub encode: Option<EncodeFn>,
}

impl RegistryEntry {
    pub const fn new(type_id: u8, kind: ValueKind) -> Self {
        Self {
            type_id,
            kind,
            decode: None,
            encode: None,
        }
    }

    /// Override the decoder for this entry.
    pub const fn with_decoder(mut self, decode: DecodeFn) -> Self {
        self.decode = Some(decode);
        self
    }

    /// Override the encoder for this entry.
    pub const fn with_encoder(mut self, encode: EncodeFn) -> Self {
        self.encode = Some(encode);
        self
    }
}

/// Bidirectional mapping between wire type-ids and value kinds for one
/// profile. Immutable once built and safe to share across threads.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    name: &'static str,
    entries: Vec<RegistryEntry>,
    decoders: HashMap<u8, (ValueKind, DecodeFn)>,
    encoders: HashMap<ValueKind, (u8, EncodeFn)>,
}

impl TypeRegistry {
    /// Build a registry from a table, rejecting duplicate ids or kinds.
    pub fn build(
        name: &'static str,
        table: &[RegistryEntry],
    ) -> std::result::Result<Self, RegistryError> {
        let mut decoders = HashMap::with_capacity(table.len());
        let mut encoders = HashMap::with_capacity(table.len());

        for entry in table {
            let decode = entry.decode.unwrap_or_else(|| builtin_decoder(entry.kind));
            let encode = entry.encode.unwrap_or_else(|| builtin_encoder(entry.kind));

            if decoders.insert(entry.type_id, (entry.kind, decode)).is_some() {
                return Err(RegistryError::DuplicateTypeId {
                    profile: name,
                    type_id: entry.type_id,
                });
            }
            if encoders.insert(entry.kind, (entry.type_id, encode)).is_some() {
                return Err(RegistryError::DuplicateKind {
                    profile: name,
                    kind: entry.kind,
                });
            }
        }

        let mut entries = table.to_vec();
        entries.sort_by_key(|entry| entry.type_id);

        tracing::debug!(profile = name, types = entries.len(), "type registry built");

        Ok(Self {
            name,
            entries,
            decoders,
            encoders,
        })
    }

    /// Profile name this registry was built for.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Registered entries ordered by wire type-id.
    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the decoder for a wire type-id.
    pub fn decoder_for(&self, type_id: u8) -> Result<(ValueKind, DecodeFn)> {
        self.decoders
            .get(&type_id)
            .copied()
            .ok_or(CodecError::UnsupportedType {
                type_id,
                profile: self.name,
            })
    }

    /// Look up the wire type-id and encoder for a value kind.
    pub fn encoder_for(&self, kind: ValueKind) -> Result<(u8, EncodeFn)> {
        self.encoders
            .get(&kind)
            .copied()
            .ok_or(CodecError::UnsupportedValue {
                kind,
                profile: self.name,
            })
    }

    pub fn kind_of(&self, type_id: u8) -> Option<ValueKind> {
        self.decoders.get(&type_id).map(|(kind, _)| *kind)
    }

    pub fn type_id_of(&self, kind: ValueKind) -> Option<u8> {
        self.encoders.get(&kind).map(|(type_id, _)| *type_id)
    }

    pub fn supports(&self, kind: ValueKind) -> bool {
        self.encoders.contains_key(&kind)
    }
}
