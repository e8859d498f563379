//! # objecthash
//!
//! Canonical, content-only hashing of schema-described messages.
//!
//! Two logically-equivalent messages produce byte-identical 32-byte
//! digests, regardless of field declaration order, presence dialect,
//! numeric storage width, or backward-compatible schema evolution such
//! as wrapping an existing scalar field in a one-of.
//!
//! ## Core Types
//!
//! - [`ObjectHasher`] - The configured hashing engine
//! - [`Digest`] - A 32-byte content digest
//! - [`MessageDescriptor`] / [`FieldDescriptor`] - Schema tables
//! - [`Message`] / [`Value`] - In-memory message values
//!
//! ## Core Invariants
//!
//! 1. **Typed**: every digest covers a one-byte type tag plus a
//!    canonical serialization; nothing is hashed untagged
//! 2. **Order-free where order is meaningless**: map and record entries
//!    are sorted by key digest; list digests keep element order
//! 3. **Absence = zero** for no-presence scalars, so adding a field to a
//!    schema never changes old digests
//! 4. **Total over the supported space**: anything that cannot be hashed
//!    stably is rejected with a typed error, never mis-hashed
//!
//! ## Example
//!
//! ```
//! use objecthash::{FieldDescriptor, FieldKind, Message, MessageDescriptor, ObjectHasher, Value};
//!
//! let descriptor = MessageDescriptor::new(
//!     "example.Greeting",
//!     vec![FieldDescriptor::new(1, "text", FieldKind::String)],
//! );
//! let message = Message::new(descriptor).with(1, Value::String("hello".into()));
//!
//! let hasher = ObjectHasher::new();
//! let digest = hasher.hash_message(Some(&message)).unwrap();
//! assert_eq!(digest.as_bytes().len(), 32);
//! ```

mod descriptor;
mod digest;
mod error;
mod hasher;
mod normalize;
mod validate;
mod value;
mod wkt;

pub use descriptor::{EnumDescriptor, FieldDescriptor, FieldKind, MessageDescriptor, Presence};
pub use digest::{
    hash_bool, hash_bytes, hash_float, hash_int, hash_nil, hash_tagged, hash_uint, hash_unicode,
    tag, Digest, DIGEST_LEN,
};
pub use error::{Error, ErrorKind, Result};
pub use hasher::{ObjectHasher, ObjectHasherBuilder};
pub use value::{MapKey, Message, Value};
