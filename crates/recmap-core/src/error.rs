//! # Error Types — Structured Error Hierarchy
//!
//! Two families of errors surface from this crate:
//!
//! - [`ConfigurationError`]: a malformed declaration (bad choice options,
//!   bad enumeration, bad list item kind, duplicate field names). Raised
//!   when a field descriptor or record schema is built, never when a value
//!   flows through it.
//! - [`ValidationError`]: a value rejected by a field descriptor or by the
//!   unknown-field policy of a record. Every variant carries the field path
//!   (`scores[1].course`) plus expected vs actual detail.
//!
//! [`RecordError`] joins the two for operations that may need to register a
//! schema before validating values.

use thiserror::Error;

use crate::value::ValueKind;

/// A malformed field or record declaration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// A choice field was declared with no options.
    #[error("empty options passed for {kind} choice field")]
    EmptyOptions {
        /// Declared primitive kind of the choice field.
        kind: ValueKind,
    },

    /// A choice field was declared with the same option twice.
    #[error("duplicate option {option} passed for {kind} choice field")]
    DuplicateOption {
        /// Declared primitive kind of the choice field.
        kind: ValueKind,
        /// Rendered duplicate option.
        option: String,
    },

    /// A choice option does not have the declared primitive kind.
    #[error("invalid option {option} in {expected} choice field, found {found}")]
    OptionKindMismatch {
        /// Declared primitive kind of the choice field.
        expected: ValueKind,
        /// Runtime kind of the offending option.
        found: &'static str,
        /// Rendered offending option.
        option: String,
    },

    /// Choice fields only restrict integers and strings.
    #[error("choice fields hold integer or string options, not {kind}")]
    UnsupportedChoiceKind {
        /// The rejected kind.
        kind: ValueKind,
    },

    /// An enumeration-backed field was given an enumeration with no members.
    #[error("enumeration '{enumeration}' has no members")]
    EmptyEnumeration {
        /// Name of the enumeration type.
        enumeration: &'static str,
    },

    /// Two members of an enumeration share a value.
    #[error("enumeration '{enumeration}' has duplicate value {value}")]
    DuplicateEnumValue {
        /// Name of the enumeration type.
        enumeration: &'static str,
        /// Rendered shared value.
        value: String,
    },

    /// An enumeration member value does not have the declared primitive kind.
    #[error("enumeration '{enumeration}' value {value} is not {expected}, found {found}")]
    EnumValueKindMismatch {
        /// Name of the enumeration type.
        enumeration: &'static str,
        /// Declared primitive kind of the field.
        expected: ValueKind,
        /// Runtime kind of the offending value.
        found: &'static str,
        /// Rendered offending value.
        value: String,
    },

    /// Primitive list fields hold integers, floats, booleans or strings.
    #[error("invalid list item kind {item}, must be integer, float, boolean or string")]
    InvalidListItem {
        /// The rejected item kind.
        item: ValueKind,
    },

    /// A field was declared with an empty name.
    #[error("record '{record}' declares a field with an empty name")]
    EmptyFieldName {
        /// Record type name.
        record: &'static str,
    },

    /// Two fields of one record resolve to the same internal name.
    #[error("duplicate field name '{name}' found in record '{record}'")]
    DuplicateFieldName {
        /// Record type name.
        record: &'static str,
        /// The duplicated internal name.
        name: String,
    },

    /// Two fields of one record resolve to the same serialized name.
    #[error("duplicate serialized name '{name}' found in record '{record}'")]
    DuplicateSerializedName {
        /// Record type name.
        record: &'static str,
        /// The duplicated external name.
        name: String,
    },
}

/// A value rejected by a field descriptor or a record's unknown-field policy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Null (or absent) value for a non-nullable field.
    #[error("null value passed for non-nullable field '{field}'")]
    NullValue {
        /// Path of the field.
        field: String,
    },

    /// The value's runtime kind disagrees with the declared kind.
    #[error("field '{field}' expects {expected}, found {found}")]
    TypeMismatch {
        /// Path of the field.
        field: String,
        /// Description of the declared kind.
        expected: String,
        /// Runtime kind of the supplied value.
        found: &'static str,
    },

    /// The value has the right kind but lies outside the allowed set.
    #[error("invalid value {value} for field '{field}', not present in {allowed}")]
    DomainViolation {
        /// Path of the field.
        field: String,
        /// Rendered rejected value.
        value: String,
        /// Rendered allowed set.
        allowed: String,
    },

    /// A key that names no declared field, with unknown keys not accepted.
    #[error("unknown field '{key}' given for record '{record}' (value: {value})")]
    UnknownField {
        /// Record type name.
        record: &'static str,
        /// Path of the offending key.
        key: String,
        /// Rendered value supplied under the key.
        value: String,
    },
}

impl ValidationError {
    /// Path of the field (or unknown key) this error refers to.
    pub fn field(&self) -> &str {
        match self {
            Self::NullValue { field }
            | Self::TypeMismatch { field, .. }
            | Self::DomainViolation { field, .. } => field,
            Self::UnknownField { key, .. } => key,
        }
    }

    /// Re-roots the error path under `prefix`, e.g. `course` under
    /// `scores[1]` becomes `scores[1].course`.
    pub fn nested(self, prefix: &str) -> Self {
        let join = |path: String| {
            if path.is_empty() {
                prefix.to_string()
            } else {
                format!("{prefix}.{path}")
            }
        };
        match self {
            Self::NullValue { field } => Self::NullValue { field: join(field) },
            Self::TypeMismatch {
                field,
                expected,
                found,
            } => Self::TypeMismatch {
                field: join(field),
                expected,
                found,
            },
            Self::DomainViolation {
                field,
                value,
                allowed,
            } => Self::DomainViolation {
                field: join(field),
                value,
                allowed,
            },
            Self::UnknownField { record, key, value } => Self::UnknownField {
                record,
                key: join(key),
                value,
            },
        }
    }
}

/// Error from an operation that registers a schema and then validates values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The record type's declaration is malformed.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// A supplied value was rejected.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}
