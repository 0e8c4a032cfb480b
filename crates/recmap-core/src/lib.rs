#![deny(missing_docs)]

//! # recmap-core — Record Schemas and Validated Instances
//!
//! This crate defines the typed side of the recmap object mapper: what a
//! record type looks like and what values it may hold. The JSON side lives
//! in `recmap-codec`, which depends on this crate and nothing else internal.
//!
//! ## Key Design Principles
//!
//! 1. **Closed value domain.** [`ValueKind`] and [`FieldValue`] are the only
//!    vocabulary for runtime values. Integers widen to floats when stored in
//!    a float field; no other coercion exists.
//!
//! 2. **Fail-fast declarations.** Field descriptors validate their own
//!    configuration at construction ([`ConfigurationError`]), and schemas
//!    reject duplicate internal or serialized names when built.
//!
//! 3. **Explicit schema builder.** A record type implements [`Record`] and
//!    lists its fields on a [`SchemaBuilder`]. The [`SchemaRegistry`] turns
//!    that declaration into an immutable [`RecordSchema`] exactly once per
//!    type and shares it process-wide.
//!
//! 4. **Explicit accessors.** [`RecordInstance::get`] and
//!    [`RecordInstance::set`] replace attribute interception. Every `set`
//!    re-validates; a rejected value leaves the instance unchanged.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Record instances are not synchronized; share them across threads only
//!   behind the caller's own lock.

pub mod enumeration;
pub mod error;
pub mod field;
pub mod record;
pub mod registry;
pub mod schema;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use enumeration::Enumeration;
pub use error::{ConfigurationError, RecordError, ValidationError};
pub use field::{Choice, Domain, DomainSource, Field, FieldDescriptor, FieldShape};
pub use record::{RecordBuilder, RecordInstance};
pub use registry::{schema_of, SchemaRegistry};
pub use schema::{Record, RecordSchema, RecordType, SchemaBuilder};
pub use value::{FieldValue, ValueKind};
