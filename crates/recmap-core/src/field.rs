//! # Field Descriptors
//!
//! A [`FieldDescriptor`] describes one named slot on a record type: its
//! shape (scalar, primitive list, nested record, list of records), its
//! serialized name, its nullability, and an optional [`Domain`] restricting
//! scalar values to a finite set.
//!
//! ## Construction
//!
//! Descriptors validate their static configuration eagerly. A choice or
//! enumeration field with empty, duplicate or mis-kinded options, or a
//! primitive list with a non-primitive item kind, fails with
//! [`ConfigurationError`] before any value flows through it. The shape and
//! domain never change after construction.
//!
//! ## Per-value contract
//!
//! [`FieldDescriptor::validate`] checks, first failure wins:
//!
//! 1. null for a non-nullable field → `NullValue`
//! 2. runtime kind differs from the declared kind → `TypeMismatch`
//!    (an integer offered to a float slot is widened, the only coercion)
//! 3. value outside the domain → `DomainViolation`
//! 4. list fields: null becomes the empty list, each element is checked
//!    against the item kind and errors carry the element index.

use std::collections::BTreeSet;
use std::fmt;

use crate::enumeration::Enumeration;
use crate::error::{ConfigurationError, ValidationError};
use crate::schema::{Record, RecordType};
use crate::value::{FieldValue, ValueKind};

/// Allowed member of a [`Domain`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Choice {
    /// Allowed integer.
    Integer(i64),
    /// Allowed string.
    String(String),
}

impl Choice {
    fn from_value(kind: ValueKind, value: &FieldValue) -> Option<Self> {
        match (kind, value) {
            (ValueKind::Integer, FieldValue::Integer(i)) => Some(Self::Integer(*i)),
            (ValueKind::String, FieldValue::String(s)) => Some(Self::String(s.clone())),
            _ => None,
        }
    }

    fn matches(&self, value: &FieldValue) -> bool {
        match (self, value) {
            (Self::Integer(a), FieldValue::Integer(b)) => a == b,
            (Self::String(a), FieldValue::String(b)) => a == b,
            _ => false,
        }
    }

    /// The choice as a field value.
    pub fn to_value(&self) -> FieldValue {
        match self {
            Self::Integer(i) => FieldValue::Integer(*i),
            Self::String(s) => FieldValue::String(s.clone()),
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::String(s) => write!(f, "{s:?}"),
        }
    }
}

/// Where a domain's allowed set came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainSource {
    /// An explicit option collection.
    Options,
    /// The value set of the named enumeration.
    Enumeration(&'static str),
}

/// Finite, duplicate-free, kind-homogeneous set of allowed scalar values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain {
    kind: ValueKind,
    allowed: BTreeSet<Choice>,
    source: DomainSource,
}

impl Domain {
    fn from_options(kind: ValueKind, options: Vec<FieldValue>) -> Result<Self, ConfigurationError> {
        if !matches!(kind, ValueKind::Integer | ValueKind::String) {
            return Err(ConfigurationError::UnsupportedChoiceKind { kind });
        }
        if options.is_empty() {
            return Err(ConfigurationError::EmptyOptions { kind });
        }
        if let Some(dup) = first_duplicate(&options) {
            return Err(ConfigurationError::DuplicateOption {
                kind,
                option: dup.to_string(),
            });
        }
        let mut allowed = BTreeSet::new();
        for option in &options {
            let choice = Choice::from_value(kind, option).ok_or_else(|| {
                ConfigurationError::OptionKindMismatch {
                    expected: kind,
                    found: option.kind_name(),
                    option: option.to_string(),
                }
            })?;
            allowed.insert(choice);
        }
        Ok(Self {
            kind,
            allowed,
            source: DomainSource::Options,
        })
    }

    fn from_enumeration<E: Enumeration>(kind: ValueKind) -> Result<Self, ConfigurationError> {
        let values: Vec<FieldValue> = E::members().iter().map(E::value).collect();
        if values.is_empty() {
            return Err(ConfigurationError::EmptyEnumeration {
                enumeration: E::NAME,
            });
        }
        if let Some(dup) = first_duplicate(&values) {
            return Err(ConfigurationError::DuplicateEnumValue {
                enumeration: E::NAME,
                value: dup.to_string(),
            });
        }
        let mut allowed = BTreeSet::new();
        for value in &values {
            let choice = Choice::from_value(kind, value).ok_or_else(|| {
                ConfigurationError::EnumValueKindMismatch {
                    enumeration: E::NAME,
                    expected: kind,
                    found: value.kind_name(),
                    value: value.to_string(),
                }
            })?;
            allowed.insert(choice);
        }
        Ok(Self {
            kind,
            allowed,
            source: DomainSource::Enumeration(E::NAME),
        })
    }

    /// Primitive kind of every allowed value.
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Origin of the allowed set.
    pub fn source(&self) -> &DomainSource {
        &self.source
    }

    /// Allowed values in sorted order.
    pub fn allowed(&self) -> impl Iterator<Item = &Choice> {
        self.allowed.iter()
    }

    /// Whether `value` is one of the allowed values.
    pub fn contains(&self, value: &FieldValue) -> bool {
        self.allowed.iter().any(|c| c.matches(value))
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            DomainSource::Options => f.write_str("options {")?,
            DomainSource::Enumeration(name) => write!(f, "enum {name} values {{")?,
        }
        for (i, choice) in self.allowed.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{choice}")?;
        }
        f.write_str("}")
    }
}

fn first_duplicate(values: &[FieldValue]) -> Option<&FieldValue> {
    values
        .iter()
        .enumerate()
        .find(|&(i, v)| values[..i].contains(v))
        .map(|(_, v)| v)
}

/// Structural shape of a field.
#[derive(Debug, Clone)]
pub enum FieldShape {
    /// Integer, float, boolean or string, optionally domain-restricted.
    Scalar {
        /// Declared kind.
        kind: ValueKind,
        /// Allowed set, if restricted.
        domain: Option<Domain>,
    },
    /// List of primitives of one kind.
    List {
        /// Kind of every element.
        item: ValueKind,
    },
    /// One nested record.
    Record(RecordType),
    /// List of nested records of one type.
    RecordList(RecordType),
}

/// Static description of one record attribute.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    name: String,
    serialized_name: Option<String>,
    nullable: bool,
    shape: FieldShape,
}

/// Shorthand used when declaring schemas: `Field::string().non_null()`.
pub type Field = FieldDescriptor;

impl FieldDescriptor {
    fn with_shape(shape: FieldShape) -> Self {
        Self {
            name: String::new(),
            serialized_name: None,
            nullable: true,
            shape,
        }
    }

    fn scalar(kind: ValueKind) -> Self {
        Self::with_shape(FieldShape::Scalar { kind, domain: None })
    }

    /// Integer field.
    pub fn integer() -> Self {
        Self::scalar(ValueKind::Integer)
    }

    /// Float field; integers assigned to it are widened.
    pub fn float() -> Self {
        Self::scalar(ValueKind::Float)
    }

    /// Boolean field.
    pub fn boolean() -> Self {
        Self::scalar(ValueKind::Boolean)
    }

    /// String field.
    pub fn string() -> Self {
        Self::scalar(ValueKind::String)
    }

    /// Multiple-choice field of `kind` (integer or string) restricted to
    /// `options`.
    ///
    /// # Errors
    ///
    /// Fails if `kind` is not integer or string, or `options` is empty,
    /// holds duplicates, or holds a value of another kind.
    pub fn choice<I, V>(kind: ValueKind, options: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = V>,
        V: Into<FieldValue>,
    {
        let options = options.into_iter().map(Into::into).collect();
        let domain = Domain::from_options(kind, options)?;
        Ok(Self::with_shape(FieldShape::Scalar {
            kind,
            domain: Some(domain),
        }))
    }

    /// Multiple-choice string field.
    pub fn choice_str<I, S>(options: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::choice(
            ValueKind::String,
            options.into_iter().map(|s| FieldValue::String(s.into())),
        )
    }

    /// Multiple-choice integer field.
    pub fn choice_int<I>(options: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = i64>,
    {
        Self::choice(ValueKind::Integer, options)
    }

    /// String field restricted to the values of enumeration `E`.
    pub fn enum_str<E: Enumeration>() -> Result<Self, ConfigurationError> {
        let domain = Domain::from_enumeration::<E>(ValueKind::String)?;
        Ok(Self::with_shape(FieldShape::Scalar {
            kind: ValueKind::String,
            domain: Some(domain),
        }))
    }

    /// Integer field restricted to the values of enumeration `E`.
    pub fn enum_int<E: Enumeration>() -> Result<Self, ConfigurationError> {
        let domain = Domain::from_enumeration::<E>(ValueKind::Integer)?;
        Ok(Self::with_shape(FieldShape::Scalar {
            kind: ValueKind::Integer,
            domain: Some(domain),
        }))
    }

    /// List of primitives of `item` kind.
    ///
    /// # Errors
    ///
    /// Fails unless `item` is integer, float, boolean or string.
    pub fn list(item: ValueKind) -> Result<Self, ConfigurationError> {
        if !item.is_primitive() {
            return Err(ConfigurationError::InvalidListItem { item });
        }
        Ok(Self::with_shape(FieldShape::List { item }))
    }

    /// One nested record of type `R`.
    pub fn record<R: Record>() -> Self {
        Self::with_shape(FieldShape::Record(RecordType::of::<R>()))
    }

    /// List of nested records of type `R`.
    pub fn record_list<R: Record>() -> Self {
        Self::with_shape(FieldShape::RecordList(RecordType::of::<R>()))
    }

    /// Key used for this field in serialized JSON.
    pub fn serialized_name(mut self, name: impl Into<String>) -> Self {
        self.serialized_name = Some(name.into());
        self
    }

    /// Reject null for this field.
    pub fn non_null(self) -> Self {
        self.nullable(false)
    }

    /// Set whether null is accepted. Fields are nullable by default.
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub(crate) fn assign_name(&mut self, name: String) {
        self.name = name;
    }

    /// Internal name, assigned at registration.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Serialized name, defaulting to the internal name.
    pub fn external_name(&self) -> &str {
        self.serialized_name.as_deref().unwrap_or(&self.name)
    }

    /// Whether null is accepted.
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Structural shape.
    pub fn shape(&self) -> &FieldShape {
        &self.shape
    }

    /// Kind of value stored: the scalar kind, `List`, or `Object` for one
    /// nested record.
    pub fn kind(&self) -> ValueKind {
        match &self.shape {
            FieldShape::Scalar { kind, .. } => *kind,
            FieldShape::List { .. } | FieldShape::RecordList(_) => ValueKind::List,
            FieldShape::Record(_) => ValueKind::Object,
        }
    }

    /// Allowed set of a choice or enumeration field.
    pub fn domain(&self) -> Option<&Domain> {
        match &self.shape {
            FieldShape::Scalar { domain, .. } => domain.as_ref(),
            _ => None,
        }
    }

    /// Human-readable description of what the field accepts.
    pub fn expected(&self) -> String {
        match &self.shape {
            FieldShape::Scalar { kind, .. } => kind.to_string(),
            FieldShape::List { item } => format!("list of {item}"),
            FieldShape::Record(r) => format!("record '{}'", r.name()),
            FieldShape::RecordList(r) => format!("list of record '{}'", r.name()),
        }
    }

    /// Value held by a nullable field that was never supplied.
    pub fn empty_value(&self) -> FieldValue {
        match &self.shape {
            FieldShape::List { .. } | FieldShape::RecordList(_) => FieldValue::List(Vec::new()),
            _ => FieldValue::Null,
        }
    }

    /// Validate `value` against this field and return the value to store.
    ///
    /// # Errors
    ///
    /// Returns the first failing check of the per-value contract.
    pub fn validate(&self, value: FieldValue) -> Result<FieldValue, ValidationError> {
        if value.is_null() {
            if !self.nullable {
                return Err(ValidationError::NullValue {
                    field: self.name.clone(),
                });
            }
            return Ok(self.empty_value());
        }
        match &self.shape {
            FieldShape::Scalar { kind, domain } => {
                let value = check_kind(&self.name, *kind, value)?;
                if let Some(domain) = domain {
                    if !domain.contains(&value) {
                        return Err(ValidationError::DomainViolation {
                            field: self.name.clone(),
                            value: value.to_string(),
                            allowed: domain.to_string(),
                        });
                    }
                }
                Ok(value)
            }
            FieldShape::List { item } => {
                self.validate_items(value, |path, element| check_kind(path, *item, element))
            }
            FieldShape::Record(record) => check_record(&self.name, record, value),
            FieldShape::RecordList(record) => {
                self.validate_items(value, |path, element| check_record(path, record, element))
            }
        }
    }

    fn validate_items(
        &self,
        value: FieldValue,
        check: impl Fn(&str, FieldValue) -> Result<FieldValue, ValidationError>,
    ) -> Result<FieldValue, ValidationError> {
        let items = match value {
            FieldValue::List(items) => items,
            other => {
                return Err(ValidationError::TypeMismatch {
                    field: self.name.clone(),
                    expected: self.expected(),
                    found: other.kind_name(),
                })
            }
        };
        items
            .into_iter()
            .enumerate()
            .map(|(index, element)| {
                let path = format!("{}[{index}]", self.name);
                if element.is_null() {
                    return Err(ValidationError::NullValue { field: path });
                }
                check(&path, element)
            })
            .collect::<Result<Vec<_>, _>>()
            .map(FieldValue::List)
    }
}

fn check_kind(path: &str, kind: ValueKind, value: FieldValue) -> Result<FieldValue, ValidationError> {
    match (kind, value) {
        (ValueKind::Integer, v @ FieldValue::Integer(_)) => Ok(v),
        (ValueKind::Float, FieldValue::Float(x)) if x.is_finite() => Ok(FieldValue::Float(x)),
        (ValueKind::Float, FieldValue::Float(_)) => Err(ValidationError::TypeMismatch {
            field: path.to_string(),
            expected: kind.to_string(),
            found: "non-finite float",
        }),
        // Exact up to 2^53 in magnitude, nearest float beyond.
        (ValueKind::Float, FieldValue::Integer(i)) => Ok(FieldValue::Float(i as f64)),
        (ValueKind::Boolean, v @ FieldValue::Boolean(_)) => Ok(v),
        (ValueKind::String, v @ FieldValue::String(_)) => Ok(v),
        (kind, other) => Err(ValidationError::TypeMismatch {
            field: path.to_string(),
            expected: kind.to_string(),
            found: other.kind_name(),
        }),
    }
}

fn check_record(
    path: &str,
    record: &RecordType,
    value: FieldValue,
) -> Result<FieldValue, ValidationError> {
    let found = match &value {
        FieldValue::Record(instance) if instance.schema().type_id() == record.type_id() => None,
        FieldValue::Record(instance) => Some(instance.schema().name()),
        other => Some(other.kind_name()),
    };
    match found {
        None => Ok(value),
        Some(found) => Err(ValidationError::TypeMismatch {
            field: path.to_string(),
            expected: format!("record '{}'", record.name()),
            found,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordInstance;
    use crate::schema::SchemaBuilder;

    fn named(mut field: FieldDescriptor, name: &str) -> FieldDescriptor {
        field.assign_name(name.to_string());
        field
    }

    struct Point;

    impl Record for Point {
        const NAME: &'static str = "Point";

        fn declare(schema: SchemaBuilder) -> Result<SchemaBuilder, ConfigurationError> {
            Ok(schema.field("x", Field::integer()).field("y", Field::integer()))
        }
    }

    struct Label;

    impl Record for Label {
        const NAME: &'static str = "Label";

        fn declare(schema: SchemaBuilder) -> Result<SchemaBuilder, ConfigurationError> {
            Ok(schema.field("text", Field::string()))
        }
    }

    #[derive(Clone, Copy)]
    enum Color {
        Red,
        Green,
    }

    impl Enumeration for Color {
        const NAME: &'static str = "Color";

        fn members() -> Vec<Self> {
            vec![Color::Red, Color::Green]
        }

        fn value(&self) -> FieldValue {
            match self {
                Color::Red => "red".into(),
                Color::Green => "green".into(),
            }
        }
    }

    struct Nothing;

    impl Enumeration for Nothing {
        const NAME: &'static str = "Nothing";

        fn members() -> Vec<Self> {
            Vec::new()
        }

        fn value(&self) -> FieldValue {
            FieldValue::Null
        }
    }

    #[derive(Clone, Copy)]
    enum Twins {
        A,
        B,
    }

    impl Enumeration for Twins {
        const NAME: &'static str = "Twins";

        fn members() -> Vec<Self> {
            vec![Twins::A, Twins::B]
        }

        fn value(&self) -> FieldValue {
            match self {
                Twins::A | Twins::B => 1i64.into(),
            }
        }
    }

    // -- construction ---------------------------------------------------------

    #[test]
    fn empty_options_rejected() {
        let err = Field::choice_str(Vec::<String>::new()).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::EmptyOptions {
                kind: ValueKind::String
            }
        );
        let err = Field::choice_int(Vec::new()).unwrap_err();
        assert!(matches!(err, ConfigurationError::EmptyOptions { .. }));
    }

    #[test]
    fn duplicate_options_rejected() {
        let err = Field::choice_str(["a", "a", "b"]).unwrap_err();
        assert!(matches!(err, ConfigurationError::DuplicateOption { .. }));
        let err = Field::choice_int([1, 2, 2]).unwrap_err();
        assert!(matches!(err, ConfigurationError::DuplicateOption { .. }));
    }

    #[test]
    fn mixed_kind_options_rejected() {
        let options = vec![FieldValue::from("a"), FieldValue::from(1i64)];
        let err = Field::choice(ValueKind::String, options).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::OptionKindMismatch {
                expected: ValueKind::String,
                found: "integer",
                option: "1".to_string(),
            }
        );
    }

    #[test]
    fn choice_over_float_rejected() {
        let err = Field::choice(ValueKind::Float, [1.0f64]).unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::UnsupportedChoiceKind {
                kind: ValueKind::Float
            }
        ));
    }

    #[test]
    fn enumeration_domains() {
        let field = Field::enum_str::<Color>().unwrap();
        let domain = field.domain().unwrap();
        assert_eq!(domain.source(), &DomainSource::Enumeration("Color"));
        assert_eq!(domain.allowed().count(), 2);

        assert_eq!(
            Field::enum_str::<Nothing>().unwrap_err(),
            ConfigurationError::EmptyEnumeration {
                enumeration: "Nothing"
            }
        );
        assert!(matches!(
            Field::enum_int::<Twins>().unwrap_err(),
            ConfigurationError::DuplicateEnumValue { .. }
        ));
        assert!(matches!(
            Field::enum_int::<Color>().unwrap_err(),
            ConfigurationError::EnumValueKindMismatch { .. }
        ));
    }

    #[test]
    fn list_item_kind_restricted() {
        for item in [
            ValueKind::Integer,
            ValueKind::Float,
            ValueKind::Boolean,
            ValueKind::String,
        ] {
            assert!(Field::list(item).is_ok());
        }
        for item in [ValueKind::List, ValueKind::Object] {
            assert_eq!(
                Field::list(item).unwrap_err(),
                ConfigurationError::InvalidListItem { item }
            );
        }
    }

    #[test]
    fn external_name_defaults_to_internal() {
        let f = named(Field::string(), "first_name");
        assert_eq!(f.external_name(), "first_name");
        let f = named(Field::string().serialized_name("fn"), "first_name");
        assert_eq!(f.external_name(), "fn");
        assert!(f.is_nullable());
        assert!(!Field::string().non_null().is_nullable());
    }

    // -- per-value contract -----------------------------------------------------

    #[test]
    fn null_checked_before_kind() {
        let f = named(Field::integer().non_null(), "age");
        assert_eq!(
            f.validate(FieldValue::Null).unwrap_err(),
            ValidationError::NullValue {
                field: "age".to_string()
            }
        );
        let f = named(Field::integer(), "age");
        assert_eq!(f.validate(FieldValue::Null).unwrap(), FieldValue::Null);
    }

    #[test]
    fn kind_mismatch_reports_expected_and_found() {
        let f = named(Field::integer(), "age");
        assert_eq!(
            f.validate("25".into()).unwrap_err(),
            ValidationError::TypeMismatch {
                field: "age".to_string(),
                expected: "integer".to_string(),
                found: "string",
            }
        );
        let f = named(Field::boolean(), "ok");
        assert!(f.validate(1i64.into()).is_err());
    }

    #[test]
    fn integer_widened_to_float_only() {
        let f = named(Field::float(), "x");
        assert_eq!(f.validate(5i64.into()).unwrap(), FieldValue::Float(5.0));
        let f = named(Field::integer(), "x");
        assert!(f.validate(5.0f64.into()).is_err());
    }

    #[test]
    fn non_finite_float_rejected() {
        let f = named(Field::float(), "x");
        assert!(matches!(
            f.validate(f64::NAN.into()).unwrap_err(),
            ValidationError::TypeMismatch {
                found: "non-finite float",
                ..
            }
        ));
    }

    #[test]
    fn kind_checked_before_domain() {
        let f = named(Field::choice_str(["red", "green"]).unwrap(), "color");
        assert!(matches!(
            f.validate(3i64.into()).unwrap_err(),
            ValidationError::TypeMismatch { .. }
        ));
        assert_eq!(
            f.validate("blue".into()).unwrap_err(),
            ValidationError::DomainViolation {
                field: "color".to_string(),
                value: "\"blue\"".to_string(),
                allowed: "options {\"green\", \"red\"}".to_string(),
            }
        );
        assert_eq!(f.validate("red".into()).unwrap(), FieldValue::from("red"));
    }

    #[test]
    fn nullable_choice_accepts_null() {
        let f = named(Field::choice_int([1, 2]).unwrap(), "level");
        assert_eq!(f.validate(FieldValue::Null).unwrap(), FieldValue::Null);
    }

    #[test]
    fn null_list_normalized_to_empty() {
        let f = named(Field::list(ValueKind::String).unwrap(), "tags");
        assert_eq!(
            f.validate(FieldValue::Null).unwrap(),
            FieldValue::List(Vec::new())
        );
        let f = named(Field::list(ValueKind::String).unwrap().non_null(), "tags");
        assert!(matches!(
            f.validate(FieldValue::Null).unwrap_err(),
            ValidationError::NullValue { .. }
        ));
    }

    #[test]
    fn list_elements_checked_with_index() {
        let f = named(Field::list(ValueKind::Integer).unwrap(), "scores");
        let err = f
            .validate(FieldValue::from(vec![
                FieldValue::from(1i64),
                FieldValue::from("two"),
            ]))
            .unwrap_err();
        assert_eq!(err.field(), "scores[1]");

        let err = f
            .validate(FieldValue::from(vec![FieldValue::Null]))
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::NullValue {
                field: "scores[0]".to_string()
            }
        );

        let err = f.validate(5i64.into()).unwrap_err();
        assert!(matches!(err, ValidationError::TypeMismatch { found: "integer", .. }));
    }

    #[test]
    fn float_list_widens_elements() {
        let f = named(Field::list(ValueKind::Float).unwrap(), "xs");
        assert_eq!(
            f.validate(FieldValue::from(vec![1i64, 2])).unwrap(),
            FieldValue::from(vec![1.0f64, 2.0])
        );
    }

    #[test]
    fn record_field_checks_record_type() {
        let f = named(Field::record::<Point>(), "origin");
        let point = RecordInstance::new::<Point, _, _, _>([("x", 1i64), ("y", 2)]).unwrap();
        assert!(f.validate(point.into()).is_ok());

        let label = RecordInstance::new::<Label, _, _, _>([("text", "hi")]).unwrap();
        assert_eq!(
            f.validate(label.into()).unwrap_err(),
            ValidationError::TypeMismatch {
                field: "origin".to_string(),
                expected: "record 'Point'".to_string(),
                found: "Label",
            }
        );
        assert!(f.validate("x".into()).is_err());
    }

    #[test]
    fn record_list_checks_each_element() {
        let f = named(Field::record_list::<Point>(), "path");
        let point = RecordInstance::new::<Point, _, _, _>([("x", 1i64)]).unwrap();
        let label = RecordInstance::new::<Label, _, _, _>([("text", "hi")]).unwrap();
        let err = f
            .validate(FieldValue::List(vec![point.into(), label.into()]))
            .unwrap_err();
        assert_eq!(err.field(), "path[1]");
        assert_eq!(
            f.validate(FieldValue::Null).unwrap(),
            FieldValue::List(Vec::new())
        );
    }

    #[test]
    fn expected_descriptions() {
        assert_eq!(Field::list(ValueKind::Boolean).unwrap().expected(), "list of boolean");
        assert_eq!(Field::record::<Point>().expected(), "record 'Point'");
        assert_eq!(
            Field::record_list::<Point>().expected(),
            "list of record 'Point'"
        );
        assert_eq!(Field::record_list::<Point>().kind(), ValueKind::List);
        assert_eq!(Field::record::<Point>().kind(), ValueKind::Object);
    }
}
