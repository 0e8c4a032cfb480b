//! Enumerations backing enum-string and enum-integer fields.

use crate::value::FieldValue;

/// A closed set of named members, each carrying a primitive value.
///
/// ```
/// use recmap_core::{Enumeration, FieldValue};
///
/// #[derive(Clone, Copy)]
/// enum Color { Red, Green }
///
/// impl Enumeration for Color {
///     const NAME: &'static str = "Color";
///     fn members() -> Vec<Self> { vec![Color::Red, Color::Green] }
///     fn value(&self) -> FieldValue {
///         match self {
///             Color::Red => "red".into(),
///             Color::Green => "green".into(),
///         }
///     }
/// }
/// ```
pub trait Enumeration: Sized + 'static {
    /// Name used in configuration errors.
    const NAME: &'static str;

    /// All members in declaration order.
    fn members() -> Vec<Self>;

    /// Primitive value of this member.
    fn value(&self) -> FieldValue;
}
