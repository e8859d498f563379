//! Shared test schemas.
//!
//! Descriptor tables mirroring the message shapes the golden digests were
//! produced from. Field numbers 1/13/25/35 of `Simple` and the `Singleton`
//! one-of arms are load-bearing: the number-keyed golden vectors and the
//! one-of equivalence suite depend on them matching.

use std::sync::Arc;

use objecthash::{
    EnumDescriptor, FieldDescriptor, FieldKind, Message, MessageDescriptor, Presence, Value,
};

/// `Simple.bool_field` / `Singleton.the_bool`.
pub const BOOL_FIELD: u32 = 1;
/// `Simple.int32_field` / `Singleton.the_int32`.
pub const INT32_FIELD: u32 = 13;
/// `Simple.string_field` / `Singleton.the_string`.
pub const STRING_FIELD: u32 = 25;
/// `Simple.singleton_field` / `Singleton.the_singleton`.
pub const SINGLETON_FIELD: u32 = 35;

fn repeated(kind: FieldKind) -> FieldKind {
    FieldKind::Repeated(Box::new(kind))
}

fn map_of(key: FieldKind, value: FieldKind) -> FieldKind {
    FieldKind::Map {
        key: Box::new(key),
        value: Box::new(value),
    }
}

fn simple_fields(presence: Presence) -> Vec<FieldDescriptor> {
    let scalar = |number: u32, name: &str, kind: FieldKind| {
        let field = FieldDescriptor::new(number, name, kind);
        match presence {
            Presence::Explicit => field.explicit_presence(),
            Presence::Implicit => field,
        }
    };
    vec![
        scalar(BOOL_FIELD, "bool_field", FieldKind::Bool),
        scalar(2, "bytes_field", FieldKind::Bytes),
        scalar(3, "double_field", FieldKind::Float),
        scalar(4, "float_field", FieldKind::Float),
        scalar(INT32_FIELD, "int32_field", FieldKind::Int),
        scalar(14, "int64_field", FieldKind::Int),
        scalar(STRING_FIELD, "string_field", FieldKind::String),
        FieldDescriptor::new(SINGLETON_FIELD, "singleton_field", FieldKind::Message),
    ]
}

/// `Simple` in the no-presence dialect.
pub fn simple_proto3() -> Arc<MessageDescriptor> {
    MessageDescriptor::new("objecthash.test.Simple", simple_fields(Presence::Implicit))
}

/// `Simple` in the explicit-presence dialect: every scalar tracks a
/// presence bit, so zero-valued-but-set fields still hash.
pub fn simple_proto2() -> Arc<MessageDescriptor> {
    MessageDescriptor::new(
        "objecthash.test.v2.Simple",
        simple_fields(Presence::Explicit),
    )
}

/// `Singleton`: one one-of whose arms reuse the `Simple` field numbers,
/// which is what makes wrapping a `Simple` field hash-transparent.
pub fn singleton() -> Arc<MessageDescriptor> {
    MessageDescriptor::new(
        "objecthash.test.Singleton",
        vec![FieldDescriptor::oneof(
            "singleton",
            vec![
                FieldDescriptor::new(BOOL_FIELD, "the_bool", FieldKind::Bool),
                FieldDescriptor::new(INT32_FIELD, "the_int32", FieldKind::Int),
                FieldDescriptor::new(STRING_FIELD, "the_string", FieldKind::String),
                FieldDescriptor::new(SINGLETON_FIELD, "the_singleton", FieldKind::Message),
            ],
        )],
    )
}

/// `Repetitive`: one repeated field per scalar kind plus nested messages.
pub fn repetitive() -> Arc<MessageDescriptor> {
    MessageDescriptor::new(
        "objecthash.test.Repetitive",
        vec![
            FieldDescriptor::new(1, "bool_field", repeated(FieldKind::Bool)),
            FieldDescriptor::new(2, "bytes_field", repeated(FieldKind::Bytes)),
            FieldDescriptor::new(3, "double_field", repeated(FieldKind::Float)),
            FieldDescriptor::new(4, "float_field", repeated(FieldKind::Float)),
            FieldDescriptor::new(5, "int32_field", repeated(FieldKind::Int)),
            FieldDescriptor::new(6, "int64_field", repeated(FieldKind::Int)),
            FieldDescriptor::new(7, "string_field", repeated(FieldKind::String)),
            FieldDescriptor::new(8, "uint32_field", repeated(FieldKind::Uint)),
            FieldDescriptor::new(9, "uint64_field", repeated(FieldKind::Uint)),
            FieldDescriptor::new(10, "simple_field", repeated(FieldKind::Message)),
            FieldDescriptor::new(11, "repetitive_field", repeated(FieldKind::Message)),
            FieldDescriptor::new(12, "singleton_field", repeated(FieldKind::Message)),
        ],
    )
}

pub fn string_maps() -> Arc<MessageDescriptor> {
    MessageDescriptor::new(
        "objecthash.test.StringMaps",
        vec![
            FieldDescriptor::new(1, "string_to_string", map_of(FieldKind::String, FieldKind::String)),
            FieldDescriptor::new(2, "string_to_simple", map_of(FieldKind::String, FieldKind::Message)),
        ],
    )
}

pub fn int_maps() -> Arc<MessageDescriptor> {
    MessageDescriptor::new(
        "objecthash.test.IntMaps",
        vec![
            FieldDescriptor::new(1, "int_to_string", map_of(FieldKind::Int, FieldKind::String)),
            FieldDescriptor::new(2, "int_to_simple", map_of(FieldKind::Int, FieldKind::Message)),
        ],
    )
}

pub fn bool_maps() -> Arc<MessageDescriptor> {
    MessageDescriptor::new(
        "objecthash.test.BoolMaps",
        vec![FieldDescriptor::new(
            1,
            "bool_to_string",
            map_of(FieldKind::Bool, FieldKind::String),
        )],
    )
}

fn scalar_message(full_name: &str, kind: FieldKind, presence: Presence) -> Arc<MessageDescriptor> {
    let value = FieldDescriptor::new(1, "value", kind.clone());
    let value = match presence {
        Presence::Explicit => value.explicit_presence(),
        Presence::Implicit => value,
    };
    MessageDescriptor::new(
        full_name,
        vec![value, FieldDescriptor::new(2, "values", repeated(kind))],
    )
}

/// A `{ value, values }` wrapper for floats.
pub fn double_message(presence: Presence) -> Arc<MessageDescriptor> {
    scalar_message("objecthash.test.DoubleMessage", FieldKind::Float, presence)
}

/// A `{ value, values }` wrapper for signed integers.
pub fn int64_message(presence: Presence) -> Arc<MessageDescriptor> {
    scalar_message("objecthash.test.Int64Message", FieldKind::Int, presence)
}

/// A `{ value, values }` wrapper for unsigned integers.
pub fn uint64_message(presence: Presence) -> Arc<MessageDescriptor> {
    scalar_message("objecthash.test.Uint64Message", FieldKind::Uint, presence)
}

/// `KnownTypes`: a message holding well-known-type fields.
pub fn known_types() -> Arc<MessageDescriptor> {
    MessageDescriptor::new(
        "objecthash.test.KnownTypes",
        vec![
            FieldDescriptor::new(1, "timestamp_field", FieldKind::Message),
            FieldDescriptor::new(2, "duration_field", FieldKind::Message),
            FieldDescriptor::new(3, "any_field", FieldKind::Message),
        ],
    )
}

pub fn timestamp() -> Arc<MessageDescriptor> {
    MessageDescriptor::new(
        "google.protobuf.Timestamp",
        vec![
            FieldDescriptor::new(1, "seconds", FieldKind::Int),
            FieldDescriptor::new(2, "nanos", FieldKind::Int),
        ],
    )
}

pub fn duration() -> Arc<MessageDescriptor> {
    MessageDescriptor::new(
        "google.protobuf.Duration",
        vec![
            FieldDescriptor::new(1, "seconds", FieldKind::Int),
            FieldDescriptor::new(2, "nanos", FieldKind::Int),
        ],
    )
}

/// `google.protobuf.Any`: in the reserved namespace with no registered
/// handler, so hashing it must fail closed.
pub fn any() -> Arc<MessageDescriptor> {
    MessageDescriptor::new(
        "google.protobuf.Any",
        vec![
            FieldDescriptor::new(1, "type_url", FieldKind::String),
            FieldDescriptor::new(2, "value", FieldKind::Bytes),
        ],
    )
}

/// A stand-in for a well-known type introduced after this engine shipped.
pub fn future_well_known_type() -> Arc<MessageDescriptor> {
    MessageDescriptor::new(
        "google.protobuf.FutureWellKnownType",
        vec![FieldDescriptor::new(1, "payload", FieldKind::String)],
    )
}

/// A convenient `google.protobuf.Timestamp` value.
pub fn timestamp_message(seconds: i64, nanos: i64) -> Message {
    Message::new(timestamp())
        .with(1, Value::Int(seconds))
        .with(2, Value::Int(nanos))
}

/// An enum used by the enum-mode tests.
pub fn color() -> Arc<EnumDescriptor> {
    EnumDescriptor::new(
        "objecthash.test.Color",
        &[(0, "COLOR_UNSPECIFIED"), (1, "RED"), (2, "GREEN"), (3, "BLUE")],
    )
}

/// A message with a plain and a repeated enum field.
pub fn palette() -> Arc<MessageDescriptor> {
    MessageDescriptor::new(
        "objecthash.test.Palette",
        vec![
            FieldDescriptor::new(1, "color", FieldKind::Enum(color())),
            FieldDescriptor::new(2, "colors", repeated(FieldKind::Enum(color()))),
        ],
    )
}

/// A schema with a custom default value; unhashable by declaration.
pub fn bad_with_defaults() -> Arc<MessageDescriptor> {
    MessageDescriptor::new(
        "objecthash.test.BadWithDefaults",
        vec![FieldDescriptor::new(1, "text", FieldKind::String)
            .explicit_presence()
            .with_explicit_default()],
    )
}

/// A schema with a required field; unhashable once set, malformed unset.
pub fn bad_with_requirements() -> Arc<MessageDescriptor> {
    MessageDescriptor::new(
        "objecthash.test.BadWithRequirements",
        vec![FieldDescriptor::new(1, "text", FieldKind::String)
            .explicit_presence()
            .required()],
    )
}

/// A schema declaring an extension range; unhashable.
pub fn bad_with_extensions() -> Arc<MessageDescriptor> {
    MessageDescriptor::extendable(
        "objecthash.test.BadWithExtensions",
        vec![FieldDescriptor::new(1, "text", FieldKind::String).explicit_presence()],
    )
}

/// A schema with an opaque raw-bytes blob field.
pub fn bad_with_raw_message() -> Arc<MessageDescriptor> {
    MessageDescriptor::new(
        "objecthash.test.BadWithRawMessage",
        vec![FieldDescriptor::new(1, "raw", FieldKind::Opaque)],
    )
}

/// A schema with a proto2 group field.
pub fn bad_with_group() -> Arc<MessageDescriptor> {
    MessageDescriptor::new(
        "objecthash.test.BadWithGroup",
        vec![FieldDescriptor::new(1, "grp", FieldKind::Group)],
    )
}
