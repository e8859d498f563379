//! # objecthash-testkit
//!
//! Testing utilities for the object-hash engine.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: descriptor tables and message builders for the shared
//!   test schemas, so golden digests can be checked against the sibling
//!   implementations of the same canonical form
//! - **JSON hashing**: an independently-written object hash over
//!   [`serde_json::Value`], used to demonstrate that a record, an
//!   equivalent structural value, and equivalent JSON text all digest
//!   identically
//! - **Generators**: proptest strategies for property-based testing
//! - **Golden vectors**: a curated, exportable subset of the corpus for
//!   verifying other implementations out of process
//!
//! ## Interop
//!
//! ```
//! use objecthash::{Message, ObjectHasher, Value};
//! use objecthash_testkit::{fixtures, jsonhash};
//!
//! let message = Message::new(fixtures::simple_proto3())
//!     .with(fixtures::BOOL_FIELD, Value::Bool(true));
//! let hasher = ObjectHasher::builder().field_names_as_keys().build();
//!
//! let from_record = hasher.hash_message(Some(&message)).unwrap();
//! let from_json = jsonhash::common_json_hash("{\"bool_field\": true}").unwrap();
//! assert_eq!(from_record, from_json);
//! ```

pub mod fixtures;
pub mod generators;
pub mod jsonhash;
pub mod vectors;

pub use fixtures::{BOOL_FIELD, INT32_FIELD, SINGLETON_FIELD, STRING_FIELD};
pub use jsonhash::{common_json_hash, object_hash};
pub use vectors::{verify_all_vectors, VectorReport};
