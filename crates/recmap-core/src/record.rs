//! # Record Instances
//!
//! A [`RecordInstance`] holds one validated value per declared field of its
//! schema, in declaration order. It is always fully populated: a nullable
//! field that was never supplied holds null (or the empty list for list
//! fields), never a missing slot.
//!
//! Instances are created by [`RecordInstance::new`] (or the converter, via
//! [`RecordBuilder`]) and mutated only through [`RecordInstance::set`],
//! which re-validates the value and leaves the previous value in place when
//! validation fails.
//!
//! ## Unknown keys
//!
//! A supplied key that names no declared field fails with
//! `UnknownField` unless `accept_unknown` is set, in which case it is
//! dropped silently. Accepting unknown keys keeps older readers working
//! against newer payloads.

use std::fmt;
use std::sync::Arc;

use crate::enumeration::Enumeration;
use crate::error::{RecordError, ValidationError};
use crate::field::FieldDescriptor;
use crate::registry::schema_of;
use crate::schema::{Record, RecordSchema};
use crate::value::FieldValue;

/// A value conforming to a [`RecordSchema`].
#[derive(Debug, Clone)]
pub struct RecordInstance {
    schema: Arc<RecordSchema>,
    values: Vec<FieldValue>,
}

impl RecordInstance {
    /// Build an instance of `R` from `(internal name, value)` pairs,
    /// rejecting unknown names.
    ///
    /// # Errors
    ///
    /// Fails if `R`'s schema cannot be registered, a value is invalid, a
    /// non-nullable field is missing, or a name is unknown.
    pub fn new<R, I, K, V>(pairs: I) -> Result<Self, RecordError>
    where
        R: Record,
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<FieldValue>,
    {
        Self::with_options::<R, I, K, V>(pairs, false)
    }

    /// Like [`RecordInstance::new`], optionally ignoring unknown names.
    pub fn with_options<R, I, K, V>(pairs: I, accept_unknown: bool) -> Result<Self, RecordError>
    where
        R: Record,
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<FieldValue>,
    {
        let schema = schema_of::<R>()?;
        Ok(Self::from_pairs(schema, pairs, accept_unknown)?)
    }

    /// Build an instance against an already registered schema.
    pub fn from_pairs<I, K, V>(
        schema: Arc<RecordSchema>,
        pairs: I,
        accept_unknown: bool,
    ) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<FieldValue>,
    {
        let mut builder = RecordBuilder::new(schema, accept_unknown);
        for (name, value) in pairs {
            builder.insert(name.as_ref(), value.into())?;
        }
        builder.finish()
    }

    /// Schema of the record type.
    pub fn schema(&self) -> &Arc<RecordSchema> {
        &self.schema
    }

    /// Whether this is an instance of record type `R`.
    pub fn is<R: Record>(&self) -> bool {
        self.schema.type_id() == std::any::TypeId::of::<R>()
    }

    /// Value of the field with internal name `name`.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.schema.position(name).map(|i| &self.values[i])
    }

    /// Validate and store `value` in field `name`.
    ///
    /// # Errors
    ///
    /// Fails with `UnknownField` for an undeclared name, or with the field's
    /// validation error. The stored value is unchanged on failure.
    pub fn set(&mut self, name: &str, value: impl Into<FieldValue>) -> Result<(), ValidationError> {
        let value = value.into();
        let Some(index) = self.schema.position(name) else {
            return Err(ValidationError::UnknownField {
                record: self.schema.name(),
                key: name.to_string(),
                value: value.to_string(),
            });
        };
        self.values[index] = self.schema.fields()[index].validate(value)?;
        Ok(())
    }

    /// Store the value of enumeration member `member` in field `name`.
    pub fn set_enum<E: Enumeration>(&mut self, name: &str, member: &E) -> Result<(), ValidationError> {
        self.set(name, member.value())
    }

    /// `(field, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldDescriptor, &FieldValue)> {
        self.schema.fields().iter().zip(self.values.iter())
    }
}

impl PartialEq for RecordInstance {
    fn eq(&self, other: &Self) -> bool {
        self.schema.type_id() == other.schema.type_id() && self.values == other.values
    }
}

impl fmt::Display for RecordInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.schema.name())?;
        for (i, (field, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, " {}: {value}", field.name())?;
        }
        f.write_str(" }")
    }
}

/// Incremental construction of a [`RecordInstance`].
///
/// Each inserted value is validated immediately, so the first invalid
/// value in insertion order is the error reported. [`RecordBuilder::finish`]
/// then fills every field that was not supplied.
#[derive(Debug)]
pub struct RecordBuilder {
    schema: Arc<RecordSchema>,
    slots: Vec<Option<FieldValue>>,
    accept_unknown: bool,
}

impl RecordBuilder {
    /// Empty builder for `schema`; `accept_unknown` drops undeclared keys.
    pub fn new(schema: Arc<RecordSchema>, accept_unknown: bool) -> Self {
        let slots = vec![None; schema.len()];
        Self {
            schema,
            slots,
            accept_unknown,
        }
    }

    /// Schema being built against.
    pub fn schema(&self) -> &Arc<RecordSchema> {
        &self.schema
    }

    /// Validate and store `value` under internal name `name`. A repeated
    /// name overwrites the earlier value.
    pub fn insert(&mut self, name: &str, value: FieldValue) -> Result<(), ValidationError> {
        match self.schema.position(name) {
            Some(index) => self.insert_at(index, value),
            None => self.unknown(name, &value),
        }
    }

    fn insert_at(&mut self, index: usize, value: FieldValue) -> Result<(), ValidationError> {
        let value = self.schema.fields()[index].validate(value)?;
        self.slots[index] = Some(value);
        Ok(())
    }

    /// Apply the unknown-key policy to `key`.
    pub fn unknown(&self, key: &str, value: &dyn fmt::Display) -> Result<(), ValidationError> {
        if self.accept_unknown {
            return Ok(());
        }
        Err(ValidationError::UnknownField {
            record: self.schema.name(),
            key: key.to_string(),
            value: value.to_string(),
        })
    }

    /// Fill unsupplied fields and produce the instance.
    ///
    /// # Errors
    ///
    /// Fails with `NullValue` for the first unsupplied non-nullable field in
    /// declaration order.
    pub fn finish(self) -> Result<RecordInstance, ValidationError> {
        let values = self
            .slots
            .into_iter()
            .zip(self.schema.fields())
            .map(|(slot, field)| match slot {
                Some(value) => Ok(value),
                None => field.validate(FieldValue::Null),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(RecordInstance {
            schema: self.schema,
            values,
        })
    }
}
