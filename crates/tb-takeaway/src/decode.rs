//! Decoding of fields whose wire shape varies between responses.
//!
//! Each field is buffered as a [`Value`] and tried against its known shapes
//! in a fixed order; the first shape that parses wins. `null` counts as an
//! absent field and yields the empty value.

use std::collections::BTreeMap;

use serde::{
    de::{self, DeserializeOwned},
    Deserialize, Deserializer,
};
use serde_json::Value;
use thiserror::Error;
use tracing::trace;

type Shape<T> = fn(Value) -> Result<T, serde_json::Error>;

#[derive(Debug, Error, PartialEq)]
#[error("failed to decode `{field}`: data={payload}")]
pub struct ShapeError {
    pub field: &'static str,
    pub payload: String,
}

fn first_matching_shape<T>(
    field: &'static str,
    raw: Value,
    shapes: &[Shape<T>],
) -> Result<T, ShapeError> {
    for shape in shapes {
        match shape(raw.clone()) {
            Ok(decoded) => return Ok(decoded),
            Err(e) => trace!(field, error = %e, "shape did not match"),
        }
    }
    Err(ShapeError {
        field,
        payload: raw.to_string(),
    })
}

fn decode_field<'de, D, T>(
    deserializer: D,
    field: &'static str,
    shapes: &[Shape<T>],
) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default,
{
    let raw = Value::deserialize(deserializer)?;
    if raw.is_null() {
        return Ok(T::default());
    }
    first_matching_shape(field, raw, shapes).map_err(de::Error::custom)
}

#[derive(Deserialize)]
struct IdList {
    id: Vec<String>,
}

fn many<T: DeserializeOwned>(raw: Value) -> Result<Vec<T>, serde_json::Error> {
    serde_json::from_value(raw)
}

fn one<T: DeserializeOwned>(raw: Value) -> Result<Vec<T>, serde_json::Error> {
    serde_json::from_value(raw).map(|item| vec![item])
}

fn id_object(raw: Value) -> Result<Vec<String>, serde_json::Error> {
    serde_json::from_value::<IdList>(raw).map(|list| list.id)
}

fn string_map(raw: Value) -> Result<BTreeMap<String, String>, serde_json::Error> {
    serde_json::from_value(raw)
}

fn empty_array(raw: Value) -> Result<BTreeMap<String, String>, serde_json::Error> {
    let items: Vec<Value> = serde_json::from_value(raw)?;
    if items.is_empty() {
        Ok(BTreeMap::new())
    } else {
        Err(de::Error::custom("expected an empty array"))
    }
}

/// Reads an explicit `null` as the type's empty value, same as a missing
/// field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// `pr`: an array of products, or a single product object.
pub(crate) fn products<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    decode_field(deserializer, "pr", &[many::<T>, one::<T>])
}

/// `all`: an array of ids, or an object with an `id` array.
pub(crate) fn allergens<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    decode_field(deserializer, "all", &[many::<String>, id_object])
}

/// `add`: an object with an `id` array, or an array of ids.
pub(crate) fn additives<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    decode_field(deserializer, "add", &[id_object, many::<String>])
}

/// `xtr`: a string map, or an empty array standing in for an empty map.
///
/// Stricter than the vendor's own apps, which read any array as an empty
/// map: a non-empty array is rejected here so unexpected data surfaces.
pub(crate) fn extras<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    decode_field(deserializer, "xtr", &[string_map, empty_array])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Item {
        id: String,
    }

    #[derive(Debug, Deserialize)]
    struct Section {
        #[serde(default, deserialize_with = "products")]
        pr: Vec<Item>,
    }

    #[derive(Debug, Deserialize)]
    struct Info {
        #[serde(default, deserialize_with = "allergens")]
        all: Vec<String>,
        #[serde(default, deserialize_with = "additives")]
        add: Vec<String>,
        #[serde(default, deserialize_with = "extras")]
        xtr: BTreeMap<String, String>,
    }

    #[test]
    fn products_from_array_and_single_object_match() {
        let from_array: Section = serde_json::from_value(json!({"pr": [{"id": "1"}]})).unwrap();
        let from_object: Section = serde_json::from_value(json!({"pr": {"id": "1"}})).unwrap();

        assert_eq!(from_array.pr, vec![Item { id: "1".to_string() }]);
        assert_eq!(from_array.pr, from_object.pr);
    }

    #[test]
    fn products_missing_or_null_is_empty() {
        let missing: Section = serde_json::from_value(json!({})).unwrap();
        let null: Section = serde_json::from_value(json!({"pr": null})).unwrap();
        assert!(missing.pr.is_empty());
        assert!(null.pr.is_empty());
    }

    #[test]
    fn products_unknown_shape_names_field_and_payload() {
        let result = serde_json::from_value::<Section>(json!({"pr": "soup"}));

        let message = result.unwrap_err().to_string();
        assert!(message.contains("failed to decode `pr`"), "{message}");
        assert!(message.contains("\"soup\""), "{message}");
    }

    #[test]
    fn allergens_from_both_shapes() {
        let array: Info = serde_json::from_value(json!({"all": ["a", "b"]})).unwrap();
        let object: Info = serde_json::from_value(json!({"all": {"id": ["a", "b"]}})).unwrap();
        assert_eq!(array.all, vec!["a", "b"]);
        assert_eq!(array.all, object.all);
    }

    #[test]
    fn additives_from_both_shapes() {
        let object: Info = serde_json::from_value(json!({"add": {"id": ["7"]}})).unwrap();
        let array: Info = serde_json::from_value(json!({"add": []})).unwrap();
        assert_eq!(object.add, vec!["7"]);
        assert!(array.add.is_empty());
    }

    #[test]
    fn extras_map_or_empty_array() {
        let map: Info = serde_json::from_value(json!({"xtr": {"1": "Cheese"}})).unwrap();
        let empty: Info = serde_json::from_value(json!({"xtr": []})).unwrap();

        assert_eq!(map.xtr.get("1").map(String::as_str), Some("Cheese"));
        assert!(empty.xtr.is_empty());
    }

    #[test]
    fn extras_non_empty_array_is_rejected() {
        let result = serde_json::from_value::<Info>(json!({"xtr": ["Cheese"]}));

        let message = result.unwrap_err().to_string();
        assert!(message.contains("failed to decode `xtr`"), "{message}");
    }

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default)]
    struct Nested {
        #[serde(deserialize_with = "null_as_default")]
        name: String,
        #[serde(deserialize_with = "null_as_default")]
        count: i64,
        #[serde(deserialize_with = "null_as_default")]
        items: Vec<Item>,
        #[serde(deserialize_with = "null_as_default")]
        inner: Item,
    }

    #[test]
    fn null_reads_as_default() {
        let nulls: Nested = serde_json::from_value(
            json!({"name": null, "count": null, "items": null, "inner": null}),
        )
        .unwrap();
        let missing: Nested = serde_json::from_value(json!({})).unwrap();
        let present: Nested = serde_json::from_value(
            json!({"name": "x", "count": 2, "items": [{"id": "1"}], "inner": {"id": "2"}}),
        )
        .unwrap();

        assert_eq!(nulls, Nested::default());
        assert_eq!(missing, Nested::default());
        assert_eq!(present.name, "x");
        assert_eq!(present.items.len(), 1);
        assert_eq!(present.inner.id, "2");
    }

    #[test]
    fn first_matching_shape_respects_order() {
        let shapes: [Shape<&'static str>; 2] = [|_| Ok("first"), |_| Ok("second")];
        assert_eq!(
            first_matching_shape("x", json!(1), &shapes).unwrap(),
            "first"
        );
    }

    #[test]
    fn first_matching_shape_reports_payload() {
        let error = first_matching_shape("pr", json!({"a": 1}), &[many::<Item>]).unwrap_err();
        assert_eq!(
            error,
            ShapeError {
                field: "pr",
                payload: r#"{"a":1}"#.to_string()
            }
        );
    }
}
