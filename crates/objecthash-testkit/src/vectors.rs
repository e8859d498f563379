//! Exportable golden vectors.
//!
//! A curated subset of the golden corpus, packaged so other
//! implementations of the same canonical form can verify themselves: run
//! [`verify_all_vectors`], or serialize the reports and compare digests
//! out of process.

use serde::{Deserialize, Serialize};

use objecthash::{Message, ObjectHasher, Value};

use crate::fixtures::{self, BOOL_FIELD, INT32_FIELD, STRING_FIELD};

/// The outcome of checking one golden vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorReport {
    /// Human-readable vector name.
    pub name: String,
    /// Whether field names were used as record keys.
    pub field_names_as_keys: bool,
    /// Expected digest, lowercase hex.
    pub expected: String,
    /// Digest this build produced, lowercase hex.
    pub actual: String,
    /// Whether the two agree.
    pub matches: bool,
}

struct Vector {
    name: &'static str,
    field_names_as_keys: bool,
    message: Option<Message>,
    expected: &'static str,
}

fn all_vectors() -> Vec<Vector> {
    vec![
        Vector {
            name: "null message",
            field_names_as_keys: false,
            message: None,
            expected: "1b16b1df538ba12dc3f97edbb85caa7050d46c148134290feba80f8236c83db9",
        },
        Vector {
            name: "empty message",
            field_names_as_keys: false,
            message: Some(Message::new(fixtures::simple_proto3())),
            expected: "18ac3e7343f016890c510e93f935261169d9e3f565436429830faf0934f4f8e4",
        },
        Vector {
            name: "boolean field set true",
            field_names_as_keys: true,
            message: Some(
                Message::new(fixtures::simple_proto3()).with(BOOL_FIELD, Value::Bool(true)),
            ),
            expected: "7b2ac6048e6c8797205505ea486539a5589583be43154da88785a5121e2d6899",
        },
        Vector {
            name: "unicode string field",
            field_names_as_keys: true,
            message: Some(
                Message::new(fixtures::simple_proto3())
                    .with(STRING_FIELD, Value::String("你好".into())),
            ),
            expected: "de0086ad683b5f8affffbbcbe57d09e5377aa47cb32f6f0b1bdecd2e54b9137d",
        },
        Vector {
            name: "repeated int64 field",
            field_names_as_keys: true,
            message: Some(Message::new(fixtures::repetitive()).with(
                6,
                Value::List(vec![
                    Value::Int(-2),
                    Value::Int(-1),
                    Value::Int(0),
                    Value::Int(1),
                    Value::Int(2),
                ]),
            )),
            expected: "44e78ff73bdf5d0da5141e110b22bab240483ba17c40f83553a0e6bbfa671e22",
        },
        Vector {
            name: "oneof arm selected with content",
            field_names_as_keys: false,
            message: Some(Message::new(fixtures::singleton()).with(INT32_FIELD, Value::Int(99))),
            expected: "65517521bc278528d25caf1643da0f094fd88dad50205c9743e3c984a7c53b7d",
        },
        Vector {
            name: "zero timestamp",
            field_names_as_keys: false,
            message: Some(fixtures::timestamp_message(0, 0)),
            expected: "3a82b649344529f03f52c1833f5aecc488a53b31461a1f54c305d149b12b8f53",
        },
        Vector {
            name: "set timestamp",
            field_names_as_keys: false,
            message: Some(fixtures::timestamp_message(1_525_450_021, 123_456_789)),
            expected: "1fd36770664df599ad44e4e4f06b1fad6ef7a4b3f316d79ca11bea668032a199",
        },
    ]
}

/// Check every golden vector against this build of the engine.
pub fn verify_all_vectors() -> Vec<VectorReport> {
    all_vectors()
        .into_iter()
        .map(|vector| {
            let mut builder = ObjectHasher::builder();
            if vector.field_names_as_keys {
                builder = builder.field_names_as_keys();
            }
            let hasher = builder.build();
            let actual = hasher
                .hash_message(vector.message.as_ref())
                .map(|digest| digest.to_hex())
                .unwrap_or_else(|err| format!("error: {err}"));
            VectorReport {
                name: vector.name.to_string(),
                field_names_as_keys: vector.field_names_as_keys,
                expected: vector.expected.to_string(),
                matches: actual == vector.expected,
                actual,
            }
        })
        .collect()
}
