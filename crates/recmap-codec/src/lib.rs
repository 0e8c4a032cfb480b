#![deny(missing_docs)]

//! # recmap-codec — JSON Conversion for Record Instances
//!
//! Bidirectional conversion between untyped JSON and the validated record
//! instances of `recmap-core`.
//!
//! ## Decoding (`decoder`)
//!
//! [`decode`] takes JSON text or a parsed `serde_json::Value` plus a target
//! record type, renames serialized keys to internal names, recurses into
//! nested records and lists of records, and builds the instance through the
//! record's validating constructor. Text parsing is delegated to
//! `serde_json`.
//!
//! ## Encoding (`encoder`)
//!
//! [`encode`] walks an instance in declaration order and prints each field
//! under its serialized name. It never fails.
//!
//! ```
//! use recmap_codec::{decode, encode};
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
//!             .field("course", Field::string().serialized_name("c")))
//!     }
//! }
//!
//! let score = decode::<Score>(r#"{"c": "algebra", "score": 20}"#, false).unwrap();
//! assert_eq!(score.get("course").and_then(|v| v.as_str()), Some("algebra"));
//! assert_eq!(encode(&score), r#"{"score":20,"c":"algebra"}"#);
//! ```
//!
//! ## Crate Policy
//!
//! - Depends only on `recmap-core` internally.
//! - JSON object key order is preserved (`serde_json/preserve_order`) so
//!   decode errors follow input order and encode output follows
//!   declaration order.

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod options;

pub use decoder::{Decoder, JsonInput};
pub use encoder::{encode, encode_list, encode_pretty, to_json_value};
pub use error::CodecError;
pub use options::{CodecOptions, DEFAULT_MAX_DEPTH};

use recmap_core::{Record, RecordInstance};

/// Decode `input` into an instance of `R` with default options.
///
/// # Errors
///
/// See [`Decoder::decode`].
pub fn decode<'a, R: Record>(
    input: impl Into<JsonInput<'a>>,
    accept_unknown: bool,
) -> Result<RecordInstance, CodecError> {
    Decoder::new(CodecOptions::default().with_accept_unknown(accept_unknown)).decode::<R>(input)
}

/// Decode a JSON array of objects into instances of `R`.
///
/// # Errors
///
/// See [`Decoder::decode_list`].
pub fn decode_list<'a, R: Record>(
    input: impl Into<JsonInput<'a>>,
    accept_unknown: bool,
) -> Result<Vec<RecordInstance>, CodecError> {
    Decoder::new(CodecOptions::default().with_accept_unknown(accept_unknown))
        .decode_list::<R>(input)
}
