//! Record types shared by the integration tests.

#![allow(dead_code)]

use recmap_core::{ConfigurationError, Enumeration, Field, FieldValue, Record, SchemaBuilder, ValueKind};

pub struct Score;

impl Record for Score {
    const NAME: &'static str = "Score";

    fn declare(schema: SchemaBuilder) -> Result<SchemaBuilder, ConfigurationError> {
        Ok(schema
            .field("score", Field::integer())
            .field("course", Field::string()))
    }
}

pub struct Student;

impl Record for Student {
    const NAME: &'static str = "Student";

    fn declare(schema: SchemaBuilder) -> Result<SchemaBuilder, ConfigurationError> {
        Ok(schema
            .field("first_name", Field::string().serialized_name("fn"))
            .field("last_name", Field::string())
            .field("age", Field::integer())
            .field("scores", Field::record_list::<Score>()))
    }
}

pub struct Measurement;

impl Record for Measurement {
    const NAME: &'static str = "Measurement";

    fn declare(schema: SchemaBuilder) -> Result<SchemaBuilder, ConfigurationError> {
        Ok(schema.field("x", Field::float()))
    }
}

pub struct Person;

impl Record for Person {
    const NAME: &'static str = "Person";

    fn declare(schema: SchemaBuilder) -> Result<SchemaBuilder, ConfigurationError> {
        Ok(schema.field("name", Field::string().non_null()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
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

pub struct Paint;

impl Record for Paint {
    const NAME: &'static str = "Paint";

    fn declare(schema: SchemaBuilder) -> Result<SchemaBuilder, ConfigurationError> {
        Ok(schema
            .field("color", Field::enum_str::<Color>()?)
            .field("coats", Field::choice_int([1, 2, 3])?))
    }
}

pub struct Address;

impl Record for Address {
    const NAME: &'static str = "Address";

    fn declare(schema: SchemaBuilder) -> Result<SchemaBuilder, ConfigurationError> {
        Ok(schema
            .field("city", Field::string().non_null())
            .field("zip", Field::string().serialized_name("postal_code")))
    }
}

pub struct Contact;

impl Record for Contact {
    const NAME: &'static str = "Contact";

    fn declare(schema: SchemaBuilder) -> Result<SchemaBuilder, ConfigurationError> {
        Ok(schema
            .field("email", Field::string().serialized_name("e-mail"))
            .field("verified", Field::boolean())
            .field("tags", Field::list(ValueKind::String)?)
            .field("weights", Field::list(ValueKind::Float)?)
            .field("home", Field::record::<Address>())
            .field("previous", Field::record_list::<Address>()))
    }
}

/// Self-referential chain used to exercise the nesting limit.
pub struct Node;

impl Record for Node {
    const NAME: &'static str = "Node";

    fn declare(schema: SchemaBuilder) -> Result<SchemaBuilder, ConfigurationError> {
        Ok(schema
            .field("value", Field::integer())
            .field("next", Field::record::<Node>()))
    }
}

pub struct Misdeclared;

impl Record for Misdeclared {
    const NAME: &'static str = "Misdeclared";

    fn declare(schema: SchemaBuilder) -> Result<SchemaBuilder, ConfigurationError> {
        Ok(schema.field("grid", Field::list(ValueKind::List)?))
    }
}

pub struct Holder;

impl Record for Holder {
    const NAME: &'static str = "Holder";

    fn declare(schema: SchemaBuilder) -> Result<SchemaBuilder, ConfigurationError> {
        Ok(schema.field("inner", Field::record::<Misdeclared>()))
    }
}
