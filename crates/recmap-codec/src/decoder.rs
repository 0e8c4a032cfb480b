//! # Decoding
//!
//! JSON value (or text) → validated [`RecordInstance`].
//!
//! For each key of the input object, in input order:
//!
//! - the key is looked up by serialized name; a key matching no serialized
//!   name goes through the record's unknown-field policy, even if it equals
//!   some field's internal name;
//! - a nested-record field given an object, or a record-list field given an
//!   array, is decoded recursively against the nested type's schema;
//! - everything else is carried over as a plain value and validated by the
//!   field descriptor.
//!
//! The first failure in input order aborts the decode. Fields never
//! mentioned in the input are filled (or rejected as null) afterwards, in
//! declaration order.

use std::sync::Arc;

use recmap_core::{
    schema_of, FieldDescriptor, FieldShape, FieldValue, Record, RecordBuilder, RecordInstance,
    RecordSchema, ValidationError,
};
use serde_json::{Map, Number, Value};
use tracing::trace;

use crate::error::CodecError;
use crate::options::CodecOptions;

/// Input accepted by the decoder: JSON text or an already parsed value.
#[derive(Debug, Clone, Copy)]
pub enum JsonInput<'a> {
    /// Text handed to the JSON parser first.
    Text(&'a str),
    /// A parsed JSON value.
    Value(&'a Value),
}

impl<'a> From<&'a str> for JsonInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for JsonInput<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a Value> for JsonInput<'a> {
    fn from(value: &'a Value) -> Self {
        Self::Value(value)
    }
}

/// Decodes JSON into record instances under fixed [`CodecOptions`].
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    options: CodecOptions,
}

impl Decoder {
    /// Decoder applying `options`.
    pub fn new(options: CodecOptions) -> Self {
        Self { options }
    }

    /// Options in effect.
    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// Decode `input` into an instance of `R`.
    ///
    /// # Errors
    ///
    /// `Parse` for malformed text, `NotAnObject` for a non-object input,
    /// `Decode` for any rejected value, `Configuration` for a malformed
    /// record declaration, `DepthExceeded` past the nesting limit.
    pub fn decode<'a, R: Record>(
        &self,
        input: impl Into<JsonInput<'a>>,
    ) -> Result<RecordInstance, CodecError> {
        let schema = schema_of::<R>()?;
        self.decode_with_schema(input, &schema)
    }

    /// Decode `input` against an already registered schema.
    pub fn decode_with_schema<'a>(
        &self,
        input: impl Into<JsonInput<'a>>,
        schema: &Arc<RecordSchema>,
    ) -> Result<RecordInstance, CodecError> {
        match input.into() {
            JsonInput::Text(text) => {
                let value: Value = serde_json::from_str(text)?;
                self.decode_root(&value, schema)
            }
            JsonInput::Value(value) => self.decode_root(value, schema),
        }
    }

    /// Decode a JSON array of objects into instances of `R`.
    ///
    /// # Errors
    ///
    /// As [`Decoder::decode`], plus `NotAnArray` for a non-array input.
    /// Element failures are reported under `[index]`.
    pub fn decode_list<'a, R: Record>(
        &self,
        input: impl Into<JsonInput<'a>>,
    ) -> Result<Vec<RecordInstance>, CodecError> {
        let schema = schema_of::<R>()?;
        let parsed;
        let value = match input.into() {
            JsonInput::Text(text) => {
                parsed = serde_json::from_str::<Value>(text)?;
                &parsed
            }
            JsonInput::Value(value) => value,
        };
        let Value::Array(items) = value else {
            return Err(CodecError::NotAnArray {
                record: schema.name(),
                found: json_kind(value),
            });
        };
        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                self.decode_root(item, &schema)
                    .map_err(|e| e.nested(&format!("[{index}]")))
            })
            .collect()
    }

    fn decode_root(
        &self,
        value: &Value,
        schema: &Arc<RecordSchema>,
    ) -> Result<RecordInstance, CodecError> {
        match value {
            Value::Object(map) => self.decode_object(map, schema, 1),
            other => Err(CodecError::NotAnObject {
                record: schema.name(),
                found: json_kind(other),
            }),
        }
    }

    fn decode_object(
        &self,
        map: &Map<String, Value>,
        schema: &Arc<RecordSchema>,
        depth: usize,
    ) -> Result<RecordInstance, CodecError> {
        if depth > self.options.max_depth {
            return Err(CodecError::DepthExceeded {
                limit: self.options.max_depth,
            });
        }
        trace!(record = schema.name(), keys = map.len(), depth, "decoding record");

        let mut builder = RecordBuilder::new(Arc::clone(schema), self.options.accept_unknown);
        for (key, raw) in map {
            match schema.field_by_external(key) {
                Some(field) => {
                    let value = self.field_value(field, raw, depth)?;
                    builder.insert(field.name(), value)?;
                }
                None => builder.unknown(key, raw)?,
            }
        }
        Ok(builder.finish()?)
    }

    fn field_value(
        &self,
        field: &FieldDescriptor,
        raw: &Value,
        depth: usize,
    ) -> Result<FieldValue, CodecError> {
        match (field.shape(), raw) {
            (FieldShape::Record(record), Value::Object(map)) => {
                let schema = record.schema()?;
                self.decode_object(map, &schema, depth + 1)
                    .map(FieldValue::Record)
                    .map_err(|e| e.nested(field.name()))
            }
            (FieldShape::RecordList(record), Value::Array(items)) => {
                let schema = record.schema()?;
                let expected = format!("record '{}'", record.name());
                items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| {
                        let path = format!("{}[{index}]", field.name());
                        match item {
                            Value::Object(map) => self
                                .decode_object(map, &schema, depth + 1)
                                .map(FieldValue::Record)
                                .map_err(|e| e.nested(&path)),
                            other => Ok(plain_value(other, &path, &expected)?),
                        }
                    })
                    .collect::<Result<Vec<_>, _>>()
                    .map(FieldValue::List)
            }
            (FieldShape::List { item }, Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(index, element)| {
                    plain_value(element, &format!("{}[{index}]", field.name()), item.as_str())
                })
                .collect::<Result<Vec<_>, _>>()
                .map(FieldValue::List)
                .map_err(CodecError::from),
            (_, other) => Ok(plain_value(other, field.name(), &field.expected())?),
        }
    }
}

/// Structural copy of a JSON value with no record in it. Objects have no
/// plain representation and fail as a kind mismatch at `path`.
fn plain_value(raw: &Value, path: &str, expected: &str) -> Result<FieldValue, ValidationError> {
    match raw {
        Value::Null => Ok(FieldValue::Null),
        Value::Bool(b) => Ok(FieldValue::Boolean(*b)),
        Value::Number(n) => Ok(number_value(n)),
        Value::String(s) => Ok(FieldValue::String(s.clone())),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| plain_value(item, &format!("{path}[{index}]"), expected))
            .collect::<Result<Vec<_>, _>>()
            .map(FieldValue::List),
        Value::Object(_) => Err(ValidationError::TypeMismatch {
            field: path.to_string(),
            expected: expected.to_string(),
            found: "object",
        }),
    }
}

fn number_value(n: &Number) -> FieldValue {
    match n.as_i64() {
        Some(i) => FieldValue::Integer(i),
        // Integers beyond i64 fall back to float.
        None => FieldValue::Float(n.as_f64().unwrap_or(f64::NAN)),
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
