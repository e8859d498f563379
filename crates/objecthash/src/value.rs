//! In-memory message values.
//!
//! A [`Message`] maps declared field numbers to set values; everything a
//! hash operation sees is immutable for its duration. Values for one-of
//! arms are stored under the arm's own field number, which is also what
//! makes wrapping an existing field in a one-of hash-transparent.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::descriptor::MessageDescriptor;

/// A map key. The schema restricts keys to booleans, integers, and text.
#[derive(Debug, Clone, PartialEq)]
pub enum MapKey {
    Bool(bool),
    Int(i64),
    Uint(u64),
    String(String),
}

/// A field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    String(String),
    Bytes(Vec<u8>),
    /// An enumeration code.
    Enum(i32),
    List(Vec<Value>),
    /// Entries in insertion order; hashing is order-independent.
    Map(Vec<(MapKey, Value)>),
    Message(Message),
    /// A null record reference.
    Null,
}

impl Value {
    /// Widen a 32-bit float. The digest depends on the exact numeric
    /// value, not the storage width, so a 32-bit `1.0` and a 64-bit
    /// `1.0` hash identically.
    pub fn float32(v: f32) -> Self {
        Value::Float(f64::from(v))
    }

    /// Short name used in error messages.
    pub(crate) fn kind_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Uint(_) => "uint",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::Enum(_) => "enum",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Message(_) => "message",
            Value::Null => "null",
        }
    }
}

/// A message value: a record type plus its set fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    descriptor: Arc<MessageDescriptor>,
    fields: BTreeMap<u32, Value>,
    unknown_fields: Vec<u8>,
}

impl Message {
    pub fn new(descriptor: Arc<MessageDescriptor>) -> Self {
        Self {
            descriptor,
            fields: BTreeMap::new(),
            unknown_fields: Vec::new(),
        }
    }

    /// Builder-style set.
    pub fn with(mut self, number: u32, value: Value) -> Self {
        self.set(number, value);
        self
    }

    pub fn set(&mut self, number: u32, value: Value) {
        self.fields.insert(number, value);
    }

    pub fn get(&self, number: u32) -> Option<&Value> {
        self.fields.get(&number)
    }

    pub fn clear(&mut self, number: u32) {
        self.fields.remove(&number);
    }

    pub fn descriptor(&self) -> &Arc<MessageDescriptor> {
        &self.descriptor
    }

    /// All set fields, by number.
    pub fn entries(&self) -> impl Iterator<Item = (u32, &Value)> {
        self.fields.iter().map(|(number, value)| (*number, value))
    }

    /// Attach raw unrecognized-field bytes, as a wire decoder would for
    /// fields the schema does not declare. A non-empty bag makes the
    /// message unhashable.
    pub fn set_unknown_fields(&mut self, bytes: Vec<u8>) {
        self.unknown_fields = bytes;
    }

    pub fn unknown_fields(&self) -> &[u8] {
        &self.unknown_fields
    }
}
