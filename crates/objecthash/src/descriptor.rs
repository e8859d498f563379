//! Schema descriptor tables.
//!
//! The engine never parses schema source; it consumes these runtime
//! tables from the schema collaborator and walks message values against
//! them at hash time. Descriptors are immutable and shared via [`Arc`].

use std::collections::BTreeMap;
use std::sync::Arc;

/// The two schema presence dialects for scalar fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// No-presence: a scalar equal to its zero value is indistinguishable
    /// from an unset one, and hashes as absent.
    Implicit,
    /// Explicit-presence: setting a scalar is tracked apart from its
    /// value, so a zero-valued-but-set field still hashes.
    Explicit,
}

/// The kind of value a field holds.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Bool,
    /// All signed integer encodings, regardless of declared width.
    Int,
    /// All unsigned integer encodings, regardless of declared width.
    Uint,
    /// 32- and 64-bit floating point; values are widened to 64 bits.
    Float,
    String,
    Bytes,
    Enum(Arc<EnumDescriptor>),
    /// A nested record. The message value carries its own descriptor, so
    /// cyclic schema type graphs need no special handling here.
    Message,
    Repeated(Box<FieldKind>),
    Map {
        key: Box<FieldKind>,
        value: Box<FieldKind>,
    },
    /// A one-of wrapper: at most one of the arms is set per message.
    Oneof(Vec<FieldDescriptor>),
    /// A group-encoded nested struct. Outside the supported set.
    Group,
    /// An opaque raw-bytes blob. Cannot be hashed stably.
    Opaque,
}

impl FieldKind {
    /// Short name used in error messages.
    pub(crate) fn name(&self) -> &'static str {
        match self {
            FieldKind::Bool => "bool",
            FieldKind::Int => "int",
            FieldKind::Uint => "uint",
            FieldKind::Float => "float",
            FieldKind::String => "string",
            FieldKind::Bytes => "bytes",
            FieldKind::Enum(_) => "enum",
            FieldKind::Message => "message",
            FieldKind::Repeated(_) => "repeated",
            FieldKind::Map { .. } => "map",
            FieldKind::Oneof(_) => "oneof",
            FieldKind::Group => "group",
            FieldKind::Opaque => "opaque",
        }
    }
}

/// Maps enumeration codes to their declared symbolic names.
#[derive(Debug, PartialEq)]
pub struct EnumDescriptor {
    full_name: String,
    values: BTreeMap<i32, String>,
}

impl EnumDescriptor {
    pub fn new(full_name: &str, values: &[(i32, &str)]) -> Arc<Self> {
        Arc::new(Self {
            full_name: full_name.to_string(),
            values: values.iter().map(|(code, name)| (*code, name.to_string())).collect(),
        })
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// The declared symbolic name for a code, if any.
    pub fn name_of(&self, code: i32) -> Option<&str> {
        self.values.get(&code).map(String::as_str)
    }
}

/// One declared field of a message type.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    number: u32,
    name: String,
    kind: FieldKind,
    presence: Presence,
    required: bool,
    has_default: bool,
    metadata: bool,
}

impl FieldDescriptor {
    /// A plain field in the no-presence dialect.
    pub fn new(number: u32, name: &str, kind: FieldKind) -> Self {
        Self {
            number,
            name: name.to_string(),
            kind,
            presence: Presence::Implicit,
            required: false,
            has_default: false,
            metadata: false,
        }
    }

    /// A one-of wrapper. Wrappers carry no field number of their own; key
    /// digests always come from the selected arm.
    pub fn oneof(name: &str, arms: Vec<FieldDescriptor>) -> Self {
        Self::new(0, name, FieldKind::Oneof(arms))
    }

    /// Switch the field to the explicit-presence dialect.
    pub fn explicit_presence(mut self) -> Self {
        self.presence = Presence::Explicit;
        self
    }

    /// Mark the field `required`.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mark the field as carrying a schema-declared custom default.
    pub fn with_explicit_default(mut self) -> Self {
        self.has_default = true;
        self
    }

    /// Mark the field as content-independent toolchain bookkeeping; such
    /// fields are skipped unconditionally at hash time.
    pub fn metadata(mut self) -> Self {
        self.metadata = true;
        self
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    pub fn presence(&self) -> Presence {
        self.presence
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn has_explicit_default(&self) -> bool {
        self.has_default
    }

    pub fn is_metadata(&self) -> bool {
        self.metadata
    }
}

/// One message type: its declared fields, in declaration order.
#[derive(Debug, PartialEq)]
pub struct MessageDescriptor {
    full_name: String,
    fields: Vec<FieldDescriptor>,
    extendable: bool,
}

impl MessageDescriptor {
    pub fn new(full_name: &str, fields: Vec<FieldDescriptor>) -> Arc<Self> {
        Arc::new(Self {
            full_name: full_name.to_string(),
            fields,
            extendable: false,
        })
    }

    /// A message type that declares an extension range. Such messages are
    /// rejected at hash time.
    pub fn extendable(full_name: &str, fields: Vec<FieldDescriptor>) -> Arc<Self> {
        Arc::new(Self {
            full_name: full_name.to_string(),
            fields,
            extendable: true,
        })
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn is_extendable(&self) -> bool {
        self.extendable
    }

    /// Find a declared field by number. One-of arms resolve through their
    /// wrapper; the wrapper itself is not addressable by number.
    pub fn field(&self, number: u32) -> Option<&FieldDescriptor> {
        for field in &self.fields {
            match field.kind() {
                FieldKind::Oneof(arms) => {
                    if let Some(arm) = arms.iter().find(|arm| arm.number() == number) {
                        return Some(arm);
                    }
                }
                _ => {
                    if field.number() == number {
                        return Some(field);
                    }
                }
            }
        }
        None
    }
}
