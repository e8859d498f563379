//! Golden digests for cross-implementation verification.
//!
//! Expected values come from sibling implementations of the same
//! canonical form; any change that moves one of these digests silently
//! invalidates every stored hash.

use std::sync::Arc;

use objecthash::{
    FieldDescriptor, FieldKind, Message, MessageDescriptor, ObjectHasher, Value,
};

fn assert_digest(hasher: &ObjectHasher, message: &Message, expected: &str) {
    let digest = hasher.hash_message(Some(message)).unwrap();
    assert_eq!(
        digest.to_hex(),
        expected,
        "digest mismatch for {}",
        message.descriptor().full_name()
    );
}

fn names_hasher() -> ObjectHasher {
    ObjectHasher::builder().field_names_as_keys().build()
}

fn simple() -> Arc<MessageDescriptor> {
    MessageDescriptor::new(
        "golden.Simple",
        vec![
            FieldDescriptor::new(1, "bool_field", FieldKind::Bool),
            FieldDescriptor::new(25, "string_field", FieldKind::String),
        ],
    )
}

fn timestamp() -> Arc<MessageDescriptor> {
    MessageDescriptor::new(
        "google.protobuf.Timestamp",
        vec![
            FieldDescriptor::new(1, "seconds", FieldKind::Int),
            FieldDescriptor::new(2, "nanos", FieldKind::Int),
        ],
    )
}

fn double_message() -> Arc<MessageDescriptor> {
    MessageDescriptor::new(
        "golden.DoubleMessage",
        vec![FieldDescriptor::new(1, "value", FieldKind::Float)],
    )
}

#[test]
fn null_message_produces_the_nil_digest() {
    let digest = ObjectHasher::new().hash_message(None).unwrap();
    assert_eq!(
        digest.to_hex(),
        "1b16b1df538ba12dc3f97edbb85caa7050d46c148134290feba80f8236c83db9"
    );
}

#[test]
fn empty_record_equals_empty_map() {
    // The default record identifier is the map tag, so a record with no
    // present fields is byte-identical to the hash of an empty map.
    assert_digest(
        &ObjectHasher::new(),
        &Message::new(simple()),
        "18ac3e7343f016890c510e93f935261169d9e3f565436429830faf0934f4f8e4",
    );
}

#[test]
fn boolean_field_by_name() {
    let message = Message::new(simple()).with(1, Value::Bool(true));
    assert_digest(
        &names_hasher(),
        &message,
        "7b2ac6048e6c8797205505ea486539a5589583be43154da88785a5121e2d6899",
    );
}

#[test]
fn string_field_by_name() {
    let message = Message::new(simple()).with(25, Value::String("你好".into()));
    assert_digest(
        &names_hasher(),
        &message,
        "de0086ad683b5f8affffbbcbe57d09e5377aa47cb32f6f0b1bdecd2e54b9137d",
    );
}

#[test]
fn float_specials_by_name() {
    let hasher = names_hasher();
    let nan = Message::new(double_message()).with(1, Value::Float(f64::NAN));
    assert_digest(
        &hasher,
        &nan,
        "16614de29b0823c41cabc993fa6c45da87e4e74c5d836edbcddcfaaf06ffafd1",
    );

    let positive_infinity = Message::new(double_message()).with(1, Value::Float(f64::INFINITY));
    assert_digest(
        &hasher,
        &positive_infinity,
        "c58cd512e86204e99cb6c11d83bb3daaccdd946e66383004cb9b7f87f762935c",
    );

    let negative_infinity =
        Message::new(double_message()).with(1, Value::Float(f64::NEG_INFINITY));
    assert_digest(
        &hasher,
        &negative_infinity,
        "1a4ffd7e9dc1f915c5b3b821d9194ac7d6d2bdec947aa8c3b3b1e9017c651331",
    );
}

#[test]
fn timestamps_hash_as_two_integer_lists() {
    let hasher = ObjectHasher::new();

    // Present-but-zero is distinct from unset at the message level, and
    // both spellings of zero agree.
    let zero = Message::new(timestamp());
    assert_digest(
        &hasher,
        &zero,
        "3a82b649344529f03f52c1833f5aecc488a53b31461a1f54c305d149b12b8f53",
    );
    let explicit_zero = Message::new(timestamp())
        .with(1, Value::Int(0))
        .with(2, Value::Int(0));
    assert_digest(
        &hasher,
        &explicit_zero,
        "3a82b649344529f03f52c1833f5aecc488a53b31461a1f54c305d149b12b8f53",
    );

    let set = Message::new(timestamp())
        .with(1, Value::Int(1_525_450_021))
        .with(2, Value::Int(123_456_789));
    assert_digest(
        &hasher,
        &set,
        "1fd36770664df599ad44e4e4f06b1fad6ef7a4b3f316d79ca11bea668032a199",
    );
}

#[test]
fn custom_record_identifier_shifts_every_record_digest() {
    let default = ObjectHasher::new();
    let tagged = ObjectHasher::builder().message_identifier('m').build();
    let message = Message::new(simple()).with(1, Value::Bool(true));
    assert_ne!(
        default.hash_message(Some(&message)).unwrap(),
        tagged.hash_message(Some(&message)).unwrap()
    );
    // The identifier does not leak into non-record digests.
    assert_eq!(
        default.hash_message(None).unwrap(),
        tagged.hash_message(None).unwrap()
    );
}

#[test]
fn digests_are_stable_across_calls() {
    let hasher = ObjectHasher::new();
    let message = Message::new(simple())
        .with(1, Value::Bool(true))
        .with(25, Value::String("stable".into()));
    let first = hasher.hash_message(Some(&message)).unwrap();
    let second = hasher.hash_message(Some(&message)).unwrap();
    assert_eq!(first, second);
}
