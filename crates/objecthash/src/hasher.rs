//! The configurable object hasher: containers, records, and the entry
//! point.

use std::panic::{self, AssertUnwindSafe};

use crate::descriptor::{FieldDescriptor, FieldKind, Presence};
use crate::digest::{self, tag, Digest};
use crate::error::{Error, Result};
use crate::validate;
use crate::value::{MapKey, Message, Value};
use crate::wkt;

/// A configured object hasher.
///
/// Holds nothing but immutable configuration, so one instance can be
/// shared freely across threads; concurrent hash calls are independent.
#[derive(Debug, Clone)]
pub struct ObjectHasher {
    field_names_as_keys: bool,
    enums_as_strings: bool,
    message_identifier: u8,
}

/// Builds an [`ObjectHasher`]. All toggles are off by default.
#[derive(Debug)]
pub struct ObjectHasherBuilder {
    field_names_as_keys: bool,
    enums_as_strings: bool,
    message_identifier: u8,
}

/// One record or map entry: a key digest and a value digest.
struct HashEntry {
    khash: Digest,
    vhash: Digest,
}

impl Default for ObjectHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectHasher {
    /// The default configuration: field numbers as keys, enums as
    /// integers, records tagged like maps.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> ObjectHasherBuilder {
        ObjectHasherBuilder {
            field_names_as_keys: false,
            enums_as_strings: false,
            message_identifier: tag::MAP,
        }
    }

    /// Hash a message. `None` denotes a null reference and produces the
    /// nil digest.
    ///
    /// The message is validated against its descriptor before the walk;
    /// validation failures surface unchanged. A panic escaping the walk
    /// (a misbehaving collaborator) is trapped and converted to a typed
    /// error so one bad input cannot take down the calling thread.
    pub fn hash_message(&self, message: Option<&Message>) -> Result<Digest> {
        match panic::catch_unwind(AssertUnwindSafe(|| self.hash_checked(message))) {
            Ok(result) => result,
            Err(payload) => Err(Error::Internal(panic_message(payload.as_ref()))),
        }
    }

    fn hash_checked(&self, message: Option<&Message>) -> Result<Digest> {
        let Some(message) = message else {
            return Ok(digest::hash_nil());
        };
        validate::check_well_formed(message)?;
        self.hash_record(message)
    }

    fn hash_record(&self, message: &Message) -> Result<Digest> {
        if let Some(result) = wkt::hash_well_known(message) {
            return result;
        }

        let descriptor = message.descriptor();
        if descriptor.is_extendable() {
            return Err(Error::Extendable(descriptor.full_name().to_string()));
        }
        if !message.unknown_fields().is_empty() {
            return Err(Error::UnknownFields);
        }

        let mut entries = Vec::new();
        for field in descriptor.fields() {
            if field.is_metadata() {
                continue;
            }
            // With schema defaults populated, a defaulted field is never
            // unset, so its mere declaration poisons the record.
            if field.has_explicit_default() {
                return Err(Error::ExplicitDefault(field.name().to_string()));
            }
            if let FieldKind::Oneof(arms) = field.kind() {
                if let Some(entry) = self.hash_oneof(message, arms)? {
                    entries.push(entry);
                }
                continue;
            }
            let Some(value) = message.get(field.number()) else {
                continue;
            };
            if is_absent(field, value) {
                continue;
            }
            match field.kind() {
                FieldKind::Opaque => {
                    return Err(Error::OpaqueField(field.name().to_string()));
                }
                FieldKind::Group => {
                    return Err(Error::UnsupportedFieldType {
                        kind: "group",
                        field: field.name().to_string(),
                    });
                }
                _ => {}
            }
            entries.push(self.hash_field(field, value)?);
        }

        Ok(reduce_entries(entries, self.message_identifier))
    }

    fn hash_oneof(&self, message: &Message, arms: &[FieldDescriptor]) -> Result<Option<HashEntry>> {
        let selected = arms
            .iter()
            .find_map(|arm| message.get(arm.number()).map(|value| (arm, value)));
        let Some((arm, value)) = selected else {
            // No arm selected: the one-of contributes nothing.
            return Ok(None);
        };
        if matches!(value, Value::Null) {
            return Err(Error::NullOneof(arm.name().to_string()));
        }
        // A selected arm is present even at its zero value: choosing the
        // arm at all is what distinguishes the message.
        self.hash_field(arm, value).map(Some)
    }

    fn hash_field(&self, field: &FieldDescriptor, value: &Value) -> Result<HashEntry> {
        if field.is_required() {
            return Err(Error::RequiredField(field.name().to_string()));
        }
        let khash = if self.field_names_as_keys {
            digest::hash_unicode(field.name())
        } else {
            digest::hash_int(i64::from(field.number()))
        };
        let vhash = self.hash_value(field.kind(), field.name(), value)?;
        Ok(HashEntry { khash, vhash })
    }

    fn hash_value(&self, kind: &FieldKind, field_name: &str, value: &Value) -> Result<Digest> {
        match kind {
            FieldKind::Opaque => return Err(Error::OpaqueField(field_name.to_string())),
            FieldKind::Group => {
                return Err(Error::UnsupportedFieldType {
                    kind: "group",
                    field: field_name.to_string(),
                })
            }
            _ => {}
        }
        match value {
            Value::Bool(b) => Ok(digest::hash_bool(*b)),
            Value::Int(i) => Ok(digest::hash_int(*i)),
            Value::Uint(u) => Ok(digest::hash_uint(*u)),
            Value::Float(f) => digest::hash_float(*f),
            Value::String(s) => Ok(digest::hash_unicode(s)),
            Value::Bytes(b) => Ok(digest::hash_bytes(b)),
            Value::Enum(code) => Ok(self.hash_enum(kind, *code)),
            Value::List(items) => self.hash_list(kind, field_name, items),
            Value::Map(entries) => self.hash_map(kind, field_name, entries),
            Value::Message(nested) => self.hash_record(nested),
            // Nulls are either skipped as absent or rejected by the
            // container hashers before dispatch reaches here.
            Value::Null => Err(Error::Internal(format!(
                "unexpected null value for field `{field_name}`"
            ))),
        }
    }

    fn hash_enum(&self, kind: &FieldKind, code: i32) -> Digest {
        if self.enums_as_strings {
            if let FieldKind::Enum(descriptor) = kind {
                return match descriptor.name_of(code) {
                    Some(name) => digest::hash_unicode(name),
                    // Codes without a declared name keep their decimal
                    // form, as generated symbolic accessors do.
                    None => digest::hash_unicode(&code.to_string()),
                };
            }
        }
        digest::hash_int(i64::from(code))
    }

    fn hash_list(&self, kind: &FieldKind, field_name: &str, items: &[Value]) -> Result<Digest> {
        let element_kind = match kind {
            FieldKind::Repeated(element) => element.as_ref(),
            other => other,
        };
        let mut payload = Vec::with_capacity(items.len() * digest::DIGEST_LEN);
        for item in items {
            if matches!(item, Value::Null) {
                return Err(Error::NullInList);
            }
            let child = self.hash_value(element_kind, field_name, item)?;
            payload.extend_from_slice(child.as_bytes());
        }
        Ok(digest::hash_tagged(tag::LIST, &payload))
    }

    fn hash_map(
        &self,
        kind: &FieldKind,
        field_name: &str,
        map: &[(MapKey, Value)],
    ) -> Result<Digest> {
        let value_kind = match kind {
            FieldKind::Map { value, .. } => value.as_ref(),
            other => other,
        };
        let mut entries = Vec::with_capacity(map.len());
        for (key, value) in map {
            if matches!(value, Value::Null) {
                return Err(Error::NullInMap);
            }
            entries.push(HashEntry {
                khash: hash_map_key(key),
                vhash: self.hash_value(value_kind, field_name, value)?,
            });
        }
        // Maps always reduce under the map tag, whatever the record
        // identifier is configured to.
        Ok(reduce_entries(entries, tag::MAP))
    }
}

impl ObjectHasherBuilder {
    /// Key record entries by declared field name instead of field number.
    pub fn field_names_as_keys(mut self) -> Self {
        self.field_names_as_keys = true;
        self
    }

    /// Hash enumeration values as their declared symbolic names instead
    /// of their integer codes.
    pub fn enums_as_strings(mut self) -> Self {
        self.enums_as_strings = true;
        self
    }

    /// Tag records with `identifier` instead of the map tag. The default
    /// makes a record hash identical to a same-keyed map; a distinct
    /// identifier yields type-distinguished records.
    ///
    /// # Panics
    ///
    /// Panics if `identifier` is not a single ASCII character.
    pub fn message_identifier(mut self, identifier: char) -> Self {
        assert!(identifier.is_ascii(), "message identifier must be ASCII");
        self.message_identifier = identifier as u8;
        self
    }

    pub fn build(self) -> ObjectHasher {
        ObjectHasher {
            field_names_as_keys: self.field_names_as_keys,
            enums_as_strings: self.enums_as_strings,
            message_identifier: self.message_identifier,
        }
    }
}

/// A field is absent when its value contributes nothing to the digest.
fn is_absent(field: &FieldDescriptor, value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::List(items) => items.is_empty(),
        Value::Map(entries) => entries.is_empty(),
        // A present message is always distinguishable from a missing one.
        Value::Message(_) => false,
        // Explicit-presence scalars are present whenever they are set;
        // zero values only mean absence in the no-presence dialect.
        _ if field.presence() == Presence::Explicit => false,
        Value::Bool(b) => !*b,
        Value::Int(i) => *i == 0,
        Value::Uint(u) => *u == 0,
        Value::Float(f) => *f == 0.0,
        Value::String(s) => s.is_empty(),
        Value::Bytes(b) => b.is_empty(),
        Value::Enum(code) => *code == 0,
    }
}

fn hash_map_key(key: &MapKey) -> Digest {
    match key {
        MapKey::Bool(b) => digest::hash_bool(*b),
        MapKey::Int(i) => digest::hash_int(*i),
        MapKey::Uint(u) => digest::hash_uint(*u),
        MapKey::String(s) => digest::hash_unicode(s),
    }
}

/// Sort entries by key digest and reduce key‖value pairs under the given
/// identifier. No tie-breaker: distinct keys colliding on their digest is
/// cryptographically negligible.
fn reduce_entries(mut entries: Vec<HashEntry>, identifier: u8) -> Digest {
    entries.sort_by(|a, b| a.khash.cmp(&b.khash));
    let mut payload = Vec::with_capacity(entries.len() * 2 * digest::DIGEST_LEN);
    for entry in &entries {
        payload.extend_from_slice(entry.khash.as_bytes());
        payload.extend_from_slice(entry.vhash.as_bytes());
    }
    digest::hash_tagged(identifier, &payload)
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "collaborator panicked".to_string()
    }
}
