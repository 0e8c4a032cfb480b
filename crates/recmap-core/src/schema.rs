//! # Record Schemas
//!
//! A record type declares its fields by implementing [`Record`]. The
//! declaration is turned into a frozen [`RecordSchema`] once per type by the
//! [`registry`](crate::registry): the ordered field list plus lookup tables
//! from internal name and from serialized (external) name to field position.
//!
//! ```
//! use recmap_core::{ConfigurationError, Field, Record, SchemaBuilder};
//!
//! struct Score;
//!
//! impl Record for Score {
//!     const NAME: &'static str = "Score";
//!
//!     fn declare(schema: SchemaBuilder) -> Result<SchemaBuilder, ConfigurationError> {
//!         Ok(schema
//!             .field("score", Field::integer())
//!             .field("course", Field::string()))
//!     }
//! }
//!
//! let schema = recmap_core::schema_of::<Score>().unwrap();
//! assert_eq!(schema.len(), 2);
//! ```
//!
//! Internal names and external names must each be unique within a schema;
//! a duplicate of either is rejected when the schema is built.

use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::ConfigurationError;
use crate::field::FieldDescriptor;
use crate::registry::schema_of;

/// A record type with a declared set of fields.
pub trait Record: 'static {
    /// Record type name used in errors and logs.
    const NAME: &'static str;

    /// Adds the record's fields to `schema`, in declaration order.
    fn declare(schema: SchemaBuilder) -> Result<SchemaBuilder, ConfigurationError>;
}

/// Lazy reference to a record type, used by nested record fields.
///
/// The nested schema is resolved through the registry on first use, so a
/// record type may refer to itself.
#[derive(Clone, Copy)]
pub struct RecordType {
    id: TypeId,
    name: &'static str,
    resolve: fn() -> Result<Arc<RecordSchema>, ConfigurationError>,
}

impl RecordType {
    /// Reference to record type `R`.
    pub fn of<R: Record>() -> Self {
        Self {
            id: TypeId::of::<R>(),
            name: R::NAME,
            resolve: schema_of::<R>,
        }
    }

    /// Identity of the referenced type.
    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// Name of the referenced type.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Registered schema of the referenced type.
    pub fn schema(&self) -> Result<Arc<RecordSchema>, ConfigurationError> {
        (self.resolve)()
    }
}

impl PartialEq for RecordType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for RecordType {}

impl fmt::Debug for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RecordType").field(&self.name).finish()
    }
}

/// Collects field declarations for one record type.
#[derive(Debug)]
pub struct SchemaBuilder {
    name: &'static str,
    type_id: TypeId,
    fields: Vec<FieldDescriptor>,
}

impl SchemaBuilder {
    /// Empty builder for record type `R`.
    pub fn for_record<R: Record>() -> Self {
        Self {
            name: R::NAME,
            type_id: TypeId::of::<R>(),
            fields: Vec::new(),
        }
    }

    /// Declare field `name`. The name becomes the field's internal name.
    pub fn field(mut self, name: impl Into<String>, mut descriptor: FieldDescriptor) -> Self {
        descriptor.assign_name(name.into());
        self.fields.push(descriptor);
        self
    }

    /// Freeze the declaration into a schema.
    ///
    /// # Errors
    ///
    /// Fails on an empty field name, or when two fields share an internal
    /// name or a serialized name.
    pub fn build(self) -> Result<RecordSchema, ConfigurationError> {
        let mut by_name = HashMap::with_capacity(self.fields.len());
        let mut by_external = HashMap::with_capacity(self.fields.len());
        for (index, field) in self.fields.iter().enumerate() {
            if field.name().is_empty() {
                return Err(ConfigurationError::EmptyFieldName { record: self.name });
            }
            if by_name.insert(field.name().to_string(), index).is_some() {
                return Err(ConfigurationError::DuplicateFieldName {
                    record: self.name,
                    name: field.name().to_string(),
                });
            }
            if by_external
                .insert(field.external_name().to_string(), index)
                .is_some()
            {
                return Err(ConfigurationError::DuplicateSerializedName {
                    record: self.name,
                    name: field.external_name().to_string(),
                });
            }
        }
        Ok(RecordSchema {
            name: self.name,
            type_id: self.type_id,
            fields: self.fields,
            by_name,
            by_external,
        })
    }
}

/// Frozen, ordered field set of one record type.
#[derive(Debug)]
pub struct RecordSchema {
    name: &'static str,
    type_id: TypeId,
    fields: Vec<FieldDescriptor>,
    by_name: HashMap<String, usize>,
    by_external: HashMap<String, usize>,
}

impl RecordSchema {
    /// Record type name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Identity of the record type this schema belongs to.
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record declares no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Position of the field with internal name `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// Position of the field with serialized name `name`.
    pub fn position_by_external(&self, name: &str) -> Option<usize> {
        self.by_external.get(name).copied()
    }

    /// Field with internal name `name`.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.position(name).map(|i| &self.fields[i])
    }

    /// Field with serialized name `name`.
    pub fn field_by_external(&self, name: &str) -> Option<&FieldDescriptor> {
        self.position_by_external(name).map(|i| &self.fields[i])
    }
}
