//! Proptest strategies for hashing inputs.

use proptest::prelude::*;

use objecthash::{MapKey, Message, Value};

use crate::fixtures;
use crate::fixtures::{BOOL_FIELD, INT32_FIELD, STRING_FIELD};

/// Any scalar value, including NaN and infinite floats.
pub fn scalar_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        any::<u64>().prop_map(Value::Uint),
        any::<f64>().prop_map(Value::Float),
        ".{0,16}".prop_map(Value::String),
        proptest::collection::vec(any::<u8>(), 0..32).prop_map(Value::Bytes),
    ]
}

/// A `Simple` message with an arbitrary subset of scalar fields set.
pub fn simple_message() -> impl Strategy<Value = Message> {
    (
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<i32>()),
        proptest::option::of(".{0,16}"),
        proptest::option::of(any::<f64>()),
    )
        .prop_map(|(flag, count, text, ratio)| {
            let mut message = Message::new(fixtures::simple_proto3());
            if let Some(flag) = flag {
                message.set(BOOL_FIELD, Value::Bool(flag));
            }
            if let Some(count) = count {
                message.set(INT32_FIELD, Value::Int(i64::from(count)));
            }
            if let Some(text) = text {
                message.set(STRING_FIELD, Value::String(text));
            }
            if let Some(ratio) = ratio {
                message.set(3, Value::Float(ratio));
            }
            message
        })
}

/// Entries for a string-to-string map. Keys are unique by construction;
/// duplicate keys would both be hashed, which no decoder produces.
pub fn string_map_entries(max: usize) -> impl Strategy<Value = Vec<(MapKey, Value)>> {
    proptest::collection::btree_map("[a-z]{1,8}", ".{0,8}", 0..=max).prop_map(|entries| {
        entries
            .into_iter()
            .map(|(key, value)| (MapKey::String(key), Value::String(value)))
            .collect()
    })
}

/// A list of distinct integers, for order-sensitivity checks.
pub fn distinct_ints(max: usize) -> impl Strategy<Value = Vec<i64>> {
    proptest::collection::btree_set(any::<i64>(), 2..=max.max(2))
        .prop_map(|set| set.into_iter().collect())
}

/// An arbitrary NaN bit pattern.
pub fn nan_bits() -> impl Strategy<Value = f64> {
    (any::<bool>(), 1u64..(1u64 << 52)).prop_map(|(sign, mantissa)| {
        let sign_bit = if sign { 1u64 << 63 } else { 0 };
        f64::from_bits(sign_bit | 0x7ff0_0000_0000_0000 | mantissa)
    })
}
