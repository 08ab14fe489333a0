//! Conversion between decoded values and JSON.
//!
//! JSON scalars, arrays and objects map to the matching variant kinds.
//! Kinds JSON has no word for are rendered as `{"type": Kind, ...}`.

use gdvariant_codec::{Dictionary, FixedStruct, Value, ValueKind};
use serde_json::{json, Map, Number, Value as Json};

pub fn value_to_json(value: &Value) -> Json {
    match value {
        Value::Null => Json::Null,
        Value::Bool(flag) => Json::Bool(*flag),
        Value::Int(int) => Json::from(*int),
        Value::Float(float) => Json::from(*float),
        Value::String(text) => Json::String(text.clone()),
        Value::Vector2(v) => fixed(v),
        Value::Vector2i(v) => fixed(v),
        Value::Rect2(v) => fixed(v),
        Value::Rect2i(v) => fixed(v),
        Value::Vector3(v) => fixed(v),
        Value::Vector3i(v) => fixed(v),
        Value::Transform2D(v) => fixed(v),
        Value::Vector4(v) => fixed(v),
        Value::Vector4i(v) => fixed(v),
        Value::Plane(v) => fixed(v),
        Value::Quaternion(v) => fixed(v),
        Value::Aabb(v) => fixed(v),
        Value::Basis(v) => fixed(v),
        Value::Transform3D(v) => fixed(v),
        Value::Projection(v) => fixed(v),
        Value::Color(v) => fixed(v),
        Value::StringName(text) | Value::NodePath(text) => {
            json!({ "type": value.kind().name(), "value": text })
        }
        Value::Rid(rid) => json!({ "type": "Rid", "value": rid }),
        Value::Dictionary(dict) => Json::Array(
            dict.iter()
                .map(|(key, item)| Json::Array(vec![value_to_json(key), value_to_json(item)]))
                .collect(),
        ),
        Value::Array(items) => Json::Array(items.iter().map(value_to_json).collect()),
        Value::ByteArray(items) => packed(value.kind(), items),
        Value::Int32Array(items) => packed(value.kind(), items),
        Value::Int64Array(items) => packed(value.kind(), items),
        Value::Float32Array(items) => packed(value.kind(), items),
        Value::Float64Array(items) => packed(value.kind(), items),
        Value::StringArray(items) => packed(value.kind(), items),
        Value::Vector2Array(items) => packed_structs(value.kind(), items),
        Value::Vector3Array(items) => packed_structs(value.kind(), items),
        Value::ColorArray(items) => packed_structs(value.kind(), items),
    }
}

fn fixed<S>(value: &S) -> Json
where
    S: FixedStruct,
    S::Scalar: serde::Serialize,
{
    tagged(S::KIND, value.scalars().into_iter().map(|scalar| json!(scalar)))
}

fn packed<T: serde::Serialize>(kind: ValueKind, items: &[T]) -> Json {
    tagged(kind, items.iter().map(|item| json!(item)))
}

fn packed_structs<S>(kind: ValueKind, items: &[S]) -> Json
where
    S: FixedStruct,
    S::Scalar: serde::Serialize,
{
    tagged(kind, items.iter().map(|item| json!(item.scalars())))
}

fn tagged(kind: ValueKind, values: impl IntoIterator<Item = Json>) -> Json {
    json!({ "type": kind.name(), "values": values.into_iter().collect::<Vec<_>>() })
}

/// Convert JSON input into a value.
///
/// Objects become dictionaries with string keys. Integers that do not fit
/// in `i64` are rejected.
pub fn json_to_value(input: &Json) -> Result<Value, String> {
    Ok(match input {
        Json::Null => Value::Null,
        Json::Bool(flag) => Value::Bool(*flag),
        Json::Number(number) => number_to_value(number)?,
        Json::String(text) => Value::String(text.clone()),
        Json::Array(items) => Value::Array(
            items
                .iter()
                .map(json_to_value)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Json::Object(fields) => Value::Dictionary(object_to_dictionary(fields)?),
    })
}

fn number_to_value(number: &Number) -> Result<Value, String> {
    if let Some(int) = number.as_i64() {
        return Ok(Value::Int(int));
    }
    if number.is_u64() {
        return Err(format!("integer {number} is out of range"));
    }
    number
        .as_f64()
        .map(Value::Float)
        .ok_or_else(|| format!("unsupported number {number}"))
}

fn object_to_dictionary(fields: &Map<String, Json>) -> Result<Dictionary, String> {
    let mut dict = Dictionary::with_capacity(fields.len());
    for (key, item) in fields {
        dict.push(Value::String(key.clone()), json_to_value(item)?);
    }
    Ok(dict)
}

#[cfg(test)]
mod tests {
    use gdvariant_codec::{Vector2, Vector3};

    use super::*;

    #[test]
    fn scalars_and_containers() {
        let input: Json =
            serde_json::from_str(r#"["VEH_STATE", 1, 2.5, true, null, {"speed": 3}]"#).unwrap();
        let value = json_to_value(&input).unwrap();

        let mut dict = Dictionary::new();
        dict.insert(Value::from("speed"), Value::Int(3));
        assert_eq!(
            value,
            Value::Array(vec![
                Value::from("VEH_STATE"),
                Value::Int(1),
                Value::Float(2.5),
                Value::Bool(true),
                Value::Null,
                Value::Dictionary(dict),
            ])
        );
    }

    #[test]
    fn dictionary_renders_as_pairs() {
        let mut dict = Dictionary::new();
        dict.insert(Value::Int(5), Value::from("bbc"));
        assert_eq!(value_to_json(&Value::Dictionary(dict)), json!([[5, "bbc"]]));
    }

    #[test]
    fn geometric_kinds_are_tagged() {
        assert_eq!(
            value_to_json(&Value::Vector3(Vector3::new(0.5, 1.0, -2.0))),
            json!({ "type": "Vector3", "values": [0.5, 1.0, -2.0] })
        );
        assert_eq!(
            value_to_json(&Value::Vector2Array(vec![Vector2::new(1.0, 2.0)])),
            json!({ "type": "Vector2Array", "values": [[1.0, 2.0]] })
        );
        assert_eq!(
            value_to_json(&Value::Int32Array(vec![31, -32])),
            json!({ "type": "Int32Array", "values": [31, -32] })
        );
    }

    #[test]
    fn out_of_range_integer_rejected() {
        let input: Json = serde_json::from_str("18446744073709551615").unwrap();
        assert!(json_to_value(&input).is_err());
    }
}
