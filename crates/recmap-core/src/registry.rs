//! # Schema Registry
//!
//! Process-wide cache from record type to its frozen [`RecordSchema`].
//!
//! Schemas are built lazily on first use of a type and shared as
//! `Arc<RecordSchema>` for the life of the process. The declaration runs
//! outside the lock; publication is entry-or-insert, so two threads racing
//! on the same type compute equal schemas and the first one published wins.
//! A failed declaration is not cached and fails again on the next call.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use tracing::debug;

use crate::error::ConfigurationError;
use crate::schema::{Record, RecordSchema, SchemaBuilder};

/// Cache of registered record schemas keyed by record type.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    schemas: RwLock<HashMap<TypeId, Arc<RecordSchema>>>,
}

impl SchemaRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry used by [`schema_of`].
    pub fn global() -> &'static SchemaRegistry {
        static GLOBAL: OnceLock<SchemaRegistry> = OnceLock::new();
        GLOBAL.get_or_init(SchemaRegistry::new)
    }

    /// Schema of `R`, registering it on first call.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigurationError`] raised by `R`'s declaration.
    pub fn get_or_register<R: Record>(&self) -> Result<Arc<RecordSchema>, ConfigurationError> {
        let id = TypeId::of::<R>();
        if let Some(schema) = self.schemas.read().get(&id) {
            return Ok(Arc::clone(schema));
        }

        let schema = Arc::new(R::declare(SchemaBuilder::for_record::<R>())?.build()?);

        let mut schemas = self.schemas.write();
        let published = schemas.entry(id).or_insert_with(|| {
            debug!(record = R::NAME, fields = schema.len(), "registered record schema");
            Arc::clone(&schema)
        });
        Ok(Arc::clone(published))
    }

    /// Whether `R` has been registered.
    pub fn contains<R: Record>(&self) -> bool {
        self.schemas.read().contains_key(&TypeId::of::<R>())
    }

    /// Number of registered schemas.
    pub fn len(&self) -> usize {
        self.schemas.read().len()
    }

    /// Whether nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.schemas.read().is_empty()
    }
}

/// Schema of record type `R` from the process-wide registry.
pub fn schema_of<R: Record>() -> Result<Arc<RecordSchema>, ConfigurationError> {
    SchemaRegistry::global().get_or_register::<R>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;

    struct Counted;

    impl Record for Counted {
        const NAME: &'static str = "Counted";

        fn declare(schema: SchemaBuilder) -> Result<SchemaBuilder, ConfigurationError> {
            Ok(schema.field("n", Field::integer()))
        }
    }

    struct Broken;

    impl Record for Broken {
        const NAME: &'static str = "Broken";

        fn declare(schema: SchemaBuilder) -> Result<SchemaBuilder, ConfigurationError> {
            Ok(schema.field("tags", Field::choice_str(Vec::<String>::new())?))
        }
    }

    #[test]
    fn registration_is_cached() {
        let registry = SchemaRegistry::new();
        assert!(!registry.contains::<Counted>());
        let a = registry.get_or_register::<Counted>().unwrap();
        let b = registry.get_or_register::<Counted>().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(registry.contains::<Counted>());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn failed_declaration_not_cached() {
        let registry = SchemaRegistry::new();
        assert!(registry.get_or_register::<Broken>().is_err());
        assert!(registry.get_or_register::<Broken>().is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn global_registry_shares_schemas() {
        let a = schema_of::<Counted>().unwrap();
        let b = SchemaRegistry::global().get_or_register::<Counted>().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn concurrent_registration_publishes_one_schema() {
        let registry = Arc::new(SchemaRegistry::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || registry.get_or_register::<Counted>().unwrap())
            })
            .collect();
        let schemas: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for schema in &schemas {
            assert!(Arc::ptr_eq(schema, &schemas[0]));
        }
        assert_eq!(registry.len(), 1);
    }
}
