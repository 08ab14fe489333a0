use gdvariant_codec::{
    Aabb, Basis, ByteCursor, CodecError, Color, Dictionary, Plane, Projection, Quaternion, Rect2,
    Rect2i, Transform2D, Transform3D, TypeRegistry, Value, VariantCodec, Vector2, Vector2i,
    Vector3, Vector3i, Vector4, Vector4i, VersionProfile,
};
use proptest::prelude::*;

fn finite_f32() -> impl Strategy<Value = f32> {
    -1.0e6f32..1.0e6f32
}

fn int32() -> impl Strategy<Value = i32> {
    any::<i32>()
}

fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        int32().prop_map(|v| Value::Int(i64::from(v))),
        (-1.0e12f64..1.0e12f64).prop_map(Value::Float),
        ".{0,12}".prop_map(Value::String),
        ".{0,12}".prop_map(Value::StringName),
        "[a-z/:]{0,16}".prop_map(Value::NodePath),
        any::<u64>().prop_map(Value::Rid),
    ]
}

fn vector_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        prop::array::uniform2(finite_f32()).prop_map(|[x, y]| Value::Vector2(Vector2::new(x, y))),
        prop::array::uniform2(int32()).prop_map(|[x, y]| Value::Vector2i(Vector2i::new(x, y))),
        prop::array::uniform3(finite_f32())
            .prop_map(|[x, y, z]| Value::Vector3(Vector3::new(x, y, z))),
        prop::array::uniform3(int32())
            .prop_map(|[x, y, z]| Value::Vector3i(Vector3i::new(x, y, z))),
        prop::array::uniform4(finite_f32())
            .prop_map(|[w, x, y, z]| Value::Vector4(Vector4::new(w, x, y, z))),
        prop::array::uniform4(int32())
            .prop_map(|[w, x, y, z]| Value::Vector4i(Vector4i::new(w, x, y, z))),
        prop::array::uniform4(finite_f32())
            .prop_map(|[r, g, b, a]| Value::Color(Color::new(r, g, b, a))),
    ]
}

fn shape_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        prop::array::uniform4(finite_f32())
            .prop_map(|[x, y, w, h]| Value::Rect2(Rect2::new(x, y, w, h))),
        prop::array::uniform4(int32())
            .prop_map(|[x, y, w, h]| Value::Rect2i(Rect2i::new(x, y, w, h))),
        prop::array::uniform4(finite_f32())
            .prop_map(|[x, y, z, d]| Value::Plane(Plane::new(x, y, z, d))),
        prop::array::uniform4(finite_f32())
            .prop_map(|[x, y, z, w]| Value::Quaternion(Quaternion::new(x, y, z, w))),
        prop::array::uniform6(finite_f32()).prop_map(|v| Value::Aabb(Aabb::from_array(v))),
        prop::array::uniform6(finite_f32())
            .prop_map(|v| Value::Transform2D(Transform2D::from_array(v))),
        prop::array::uniform9(finite_f32()).prop_map(|v| Value::Basis(Basis::from_array(v))),
        prop::array::uniform12(finite_f32())
            .prop_map(|v| Value::Transform3D(Transform3D::from_array(v))),
        prop::array::uniform16(finite_f32())
            .prop_map(|v| Value::Projection(Projection::from_array(v))),
    ]
}

fn packed_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 0..16).prop_map(Value::ByteArray),
        prop::collection::vec(int32(), 0..8).prop_map(Value::Int32Array),
        prop::collection::vec(any::<i64>(), 0..8).prop_map(Value::Int64Array),
        prop::collection::vec(finite_f32(), 0..8).prop_map(Value::Float32Array),
        prop::collection::vec(-1.0e12f64..1.0e12f64, 0..8).prop_map(Value::Float64Array),
        prop::collection::vec("[a-z]{0,6}", 0..4).prop_map(Value::StringArray),
        prop::collection::vec(prop::array::uniform2(finite_f32()), 0..4).prop_map(|items| {
            Value::Vector2Array(items.into_iter().map(|[x, y]| Vector2::new(x, y)).collect())
        }),
        prop::collection::vec(prop::array::uniform3(finite_f32()), 0..4).prop_map(|items| {
            Value::Vector3Array(
                items
                    .into_iter()
                    .map(|[x, y, z]| Vector3::new(x, y, z))
                    .collect(),
            )
        }),
        prop::collection::vec(prop::array::uniform4(finite_f32()), 0..4).prop_map(|items| {
            Value::ColorArray(
                items
                    .into_iter()
                    .map(|[r, g, b, a]| Color::new(r, g, b, a))
                    .collect(),
            )
        }),
    ]
}

fn leaf_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        scalar_strategy(),
        vector_strategy(),
        shape_strategy(),
        packed_strategy(),
    ]
}

/// True when every kind in the tree is registered.
fn supported_by(registry: &TypeRegistry, value: &Value) -> bool {
    registry.supports(value.kind())
        && match value {
            Value::Array(items) => items.iter().all(|item| supported_by(registry, item)),
            Value::Dictionary(dict) => dict
                .iter()
                .all(|(key, item)| supported_by(registry, key) && supported_by(registry, item)),
            _ => true,
        }
}

fn key_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i32>().prop_map(|v| Value::Int(i64::from(v))),
        "[a-z]{1,8}".prop_map(Value::String),
    ]
}

fn value_strategy() -> impl Strategy<Value = Value> {
    leaf_strategy().prop_recursive(4, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec((key_strategy(), inner), 0..6)
                .prop_map(|pairs| Value::Dictionary(pairs.into_iter().collect::<Dictionary>())),
        ]
    })
}

proptest! {
    #[test]
    fn prop_roundtrip_every_profile(value in value_strategy()) {
        for profile in VersionProfile::ALL {
            let registry = profile.build().unwrap();
            let codec = VariantCodec::new(&registry);

            if !supported_by(&registry, &value) {
                let err = codec.encode_to_bytes(&value).unwrap_err();
                let is_unsupported = matches!(err, CodecError::UnsupportedValue { .. });
                prop_assert!(is_unsupported, "{}: {:?}", profile, err);
                continue;
            }

            let bytes = codec.encode_to_bytes(&value).unwrap();
            let decoded = codec.decode_exact(&bytes).unwrap();
            prop_assert_eq!(decoded, value.clone(), "profile {}", profile);
        }
    }

    #[test]
    fn prop_decode_arbitrary_bytes_never_panics(data in prop::collection::vec(any::<u8>(), 0..256)) {
        for profile in VersionProfile::ALL {
            let registry = profile.build().unwrap();
            let codec = VariantCodec::new(&registry);
            let mut cursor = ByteCursor::from(data.as_slice());
            let _ = codec.decode(&mut cursor);
        }
    }

    #[test]
    fn prop_concatenated_values_decode_in_order(
        first in value_strategy(),
        second in value_strategy(),
    ) {
        let registry = VersionProfile::V4.build().unwrap();
        let codec = VariantCodec::new(&registry);

        let mut cursor = ByteCursor::new();
        codec.encode(&first, &mut cursor).unwrap();
        codec.encode(&second, &mut cursor).unwrap();

        prop_assert_eq!(codec.decode(&mut cursor).unwrap(), first);
        prop_assert_eq!(codec.decode(&mut cursor).unwrap(), second);
        prop_assert!(cursor.is_empty());
    }
}
