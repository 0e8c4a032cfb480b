//! # Encoding
//!
//! [`RecordInstance`] → JSON. Fields are emitted in declaration order under
//! their serialized names; nested records and lists of records are encoded
//! recursively. No validation happens here: an instance only exists if it
//! passed its schema, so encoding cannot fail.

use recmap_core::{FieldValue, RecordInstance};
use serde_json::{Map, Number, Value};
use tracing::trace;

/// Encode `instance` as a JSON value.
pub fn to_json_value(instance: &RecordInstance) -> Value {
    trace!(record = instance.schema().name(), "encoding record");
    let mut map = Map::with_capacity(instance.schema().len());
    for (field, value) in instance.iter() {
        map.insert(field.external_name().to_string(), field_json(value));
    }
    Value::Object(map)
}

fn field_json(value: &FieldValue) -> Value {
    match value {
        FieldValue::Null => Value::Null,
        FieldValue::Integer(i) => Value::from(*i),
        // Float fields only hold finite values.
        FieldValue::Float(x) => Number::from_f64(*x).map_or(Value::Null, Value::Number),
        FieldValue::Boolean(b) => Value::Bool(*b),
        FieldValue::String(s) => Value::String(s.clone()),
        FieldValue::List(items) => Value::Array(items.iter().map(field_json).collect()),
        FieldValue::Record(record) => to_json_value(record),
    }
}

/// Encode `instance` as compact JSON text.
pub fn encode(instance: &RecordInstance) -> String {
    to_json_value(instance).to_string()
}

/// Encode `instance` as indented JSON text.
pub fn encode_pretty(instance: &RecordInstance) -> String {
    format!("{:#}", to_json_value(instance))
}

/// Encode `instances` as a compact JSON array.
pub fn encode_list(instances: &[RecordInstance]) -> String {
    Value::Array(instances.iter().map(to_json_value).collect()).to_string()
}
