use std::sync::Arc;

use gdvariant_codec::{Value, VariantCodec, VersionProfile};
use gdvariant_frame::{deserialize, serialize, FrameError, MessageStream};
use proptest::prelude::*;

fn message_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|v| Value::Int(i64::from(v))),
        "[A-Z_]{0,12}".prop_map(Value::String),
        prop::collection::vec(any::<u8>(), 0..40).prop_map(Value::ByteArray),
        prop::collection::vec(any::<i32>(), 0..6)
            .prop_map(|items| Value::Array(items.into_iter().map(Value::from).collect())),
    ]
}

proptest! {
    #[test]
    fn prop_drain_under_arbitrary_chunking(
        values in prop::collection::vec(message_strategy(), 1..12),
        chunk in 1usize..48,
    ) {
        let registry = Arc::new(VersionProfile::V4.build().unwrap());
        let codec = VariantCodec::new(&registry);

        let mut wire = Vec::new();
        for value in &values {
            wire.extend_from_slice(&serialize(&codec, value).unwrap());
        }

        let mut stream = MessageStream::new(Arc::clone(&registry));
        let mut out = Vec::new();
        for piece in wire.chunks(chunk) {
            stream.feed(piece);
            out.extend(stream.drain_all().unwrap());
        }

        prop_assert_eq!(out, values);
        prop_assert!(stream.is_empty());
    }

    #[test]
    fn prop_truncated_message_never_decodes(value in message_strategy()) {
        let registry = VersionProfile::V4.build().unwrap();
        let codec = VariantCodec::new(&registry);

        let mut bytes = serialize(&codec, &value).unwrap().to_vec();
        bytes.pop();
        let result = deserialize(&codec, &bytes);
        prop_assert!(
            matches!(result, Err(FrameError::LengthMismatch { .. }) | Err(FrameError::Truncated { .. })),
            "unexpected result: {:?}",
            result
        );
    }
}
