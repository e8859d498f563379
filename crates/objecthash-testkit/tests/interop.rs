//! Interop: a record, an equivalent structural value, and equivalent JSON
//! text digest identically.
//!
//! The unifying configuration is field-names-as-keys with the default
//! record identifier, which makes records equivalent to string-keyed
//! maps. JSON text comparisons only exist where JSON can express the
//! value (no integers, no bytes, no special floats, no non-string keys).

use objecthash::{MapKey, Message, ObjectHasher, Presence, Value};
use objecthash_testkit::fixtures::{self, BOOL_FIELD, STRING_FIELD};
use objecthash_testkit::{common_json_hash, object_hash};
use serde_json::json;

fn hasher() -> ObjectHasher {
    ObjectHasher::builder().field_names_as_keys().build()
}

fn record_digest(message: &Message) -> String {
    hasher().hash_message(Some(message)).unwrap().to_hex()
}

#[test]
fn empty_record_equals_empty_json_object() {
    let message = Message::new(fixtures::simple_proto3());
    let expected = "18ac3e7343f016890c510e93f935261169d9e3f565436429830faf0934f4f8e4";

    assert_eq!(record_digest(&message), expected);
    assert_eq!(common_json_hash("{}").unwrap().to_hex(), expected);
    assert_eq!(object_hash(&json!({})).unwrap().to_hex(), expected);
}

#[test]
fn null_record_equals_json_null() {
    let expected = "1b16b1df538ba12dc3f97edbb85caa7050d46c148134290feba80f8236c83db9";
    assert_eq!(hasher().hash_message(None).unwrap().to_hex(), expected);
    assert_eq!(common_json_hash("null").unwrap().to_hex(), expected);
}

#[test]
fn boolean_field_trio() {
    let message = Message::new(fixtures::simple_proto3()).with(BOOL_FIELD, Value::Bool(true));
    let expected = "7b2ac6048e6c8797205505ea486539a5589583be43154da88785a5121e2d6899";

    assert_eq!(record_digest(&message), expected);
    assert_eq!(
        common_json_hash("{\"bool_field\": true}").unwrap().to_hex(),
        expected
    );
    assert_eq!(
        object_hash(&json!({"bool_field": true})).unwrap().to_hex(),
        expected
    );
}

#[test]
fn string_field_trio() {
    let message =
        Message::new(fixtures::simple_proto3()).with(STRING_FIELD, Value::String("你好".into()));
    let expected = "de0086ad683b5f8affffbbcbe57d09e5377aa47cb32f6f0b1bdecd2e54b9137d";

    assert_eq!(record_digest(&message), expected);
    assert_eq!(
        common_json_hash("{\"string_field\":\"你好\"}").unwrap().to_hex(),
        expected
    );
    assert_eq!(
        object_hash(&json!({"string_field": "你好"})).unwrap().to_hex(),
        expected
    );
}

#[test]
fn string_list_trio() {
    let message = Message::new(fixtures::repetitive()).with(
        7,
        Value::List(vec![
            Value::String("".into()),
            Value::String("Test".into()),
            Value::String("你好".into()),
            Value::String("\u{03d3}".into()),
        ]),
    );
    let expected = "f76ae15a2685a5ec0e45f9ad7d75e492e6a17d31811480fbaf00af451fb4e98e";

    assert_eq!(record_digest(&message), expected);
    assert_eq!(
        common_json_hash("{\"string_field\":[\"\",\"Test\",\"你好\",\"\u{03d3}\"]}")
            .unwrap()
            .to_hex(),
        expected
    );
}

#[test]
fn float_list_trio() {
    let message = Message::new(fixtures::double_message(Presence::Implicit)).with(
        2,
        Value::List(vec![
            Value::Float(-2.0),
            Value::Float(-1.0),
            Value::Float(0.0),
            Value::Float(1.0),
            Value::Float(2.0),
        ]),
    );
    let expected = "586202dddb0e98bb8ce0b7289e29a9f7397b9b1996f3f8fe788f4cfb230b7ee8";

    assert_eq!(record_digest(&message), expected);
    // JSON has no integer type, so whole-number literals still mean
    // floats there; the common JSON hash treats them accordingly.
    assert_eq!(
        common_json_hash("{\"values\":[-2, -1, 0, 1, 2]}").unwrap().to_hex(),
        expected
    );
}

#[test]
fn double_list_trio() {
    let message = Message::new(fixtures::repetitive())
        .with(3, Value::List(vec![Value::Float(1.2345), Value::Float(-10.1234)]));
    let expected = "2e60f6cdebfeb5e705666e9b0ff0ec652320ae27d77ad89bd4c7ddc632d0b93c";

    assert_eq!(record_digest(&message), expected);
    assert_eq!(
        common_json_hash("{\"double_field\": [1.2345, -10.1234]}")
            .unwrap()
            .to_hex(),
        expected
    );
}

#[test]
fn zero_float_trio() {
    // Explicit-presence zero float: present in the record and in JSON.
    let message =
        Message::new(fixtures::double_message(Presence::Explicit)).with(1, Value::Float(0.0));
    let expected = "94136b0850db069dfd7bee090fc7ede48aa7da53ae3cc8514140a493818c3b91";

    assert_eq!(record_digest(&message), expected);
    assert_eq!(common_json_hash("{\"value\":0}").unwrap().to_hex(), expected);
    assert_eq!(common_json_hash("{\"value\":0.0}").unwrap().to_hex(), expected);
}

#[test]
fn integer_list_pair() {
    // No JSON-text equivalent exists for integers, but the structural
    // form keeps them.
    let message = Message::new(fixtures::int64_message(Presence::Implicit)).with(
        2,
        Value::List(vec![Value::Int(0), Value::Int(1), Value::Int(2)]),
    );
    let expected = "42794fb0e73c2b5f427aa76486555d07589359054848396ddf173e9e0b4ab931";

    assert_eq!(record_digest(&message), expected);
    assert_eq!(
        object_hash(&json!({"values": [0, 1, 2]})).unwrap().to_hex(),
        expected
    );
}

#[test]
fn string_map_trio() {
    let message = Message::new(fixtures::string_maps()).with(
        1,
        Value::Map(vec![(
            MapKey::String("foo".into()),
            Value::String("bar".into()),
        )]),
    );
    let expected = "cadfe560995647c63c20234a6409d2b1b8cf8dcf7d8e420ca33f23ff9ca9abfa";

    assert_eq!(record_digest(&message), expected);
    assert_eq!(
        common_json_hash("{\"string_to_string\": {\"foo\": \"bar\"}}")
            .unwrap()
            .to_hex(),
        expected
    );
    assert_eq!(
        object_hash(&json!({"string_to_string": {"foo": "bar"}}))
            .unwrap()
            .to_hex(),
        expected
    );
}

#[test]
fn record_and_map_stay_apart_under_a_custom_identifier() {
    let tagged = ObjectHasher::builder()
        .field_names_as_keys()
        .message_identifier('m')
        .build();
    let message = Message::new(fixtures::simple_proto3()).with(BOOL_FIELD, Value::Bool(true));
    let record = tagged.hash_message(Some(&message)).unwrap();
    let map = object_hash(&json!({"bool_field": true})).unwrap();
    assert_ne!(record, map);
}
