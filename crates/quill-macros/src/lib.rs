//! # Quill Macros
//!
//! Procedural macros for typed Quill templates.
//!
//! This crate provides `#[derive(Record)]`, which lists the readable fields of a
//! struct so it can feed a `TypedTemplate`. Use it through `quill_core`, which
//! re-exports it with the default `derive` feature.

use proc_macro::TokenStream;

mod record;

/// Derive `quill_core::Record` for a struct.
///
/// Every `pub` named field becomes a readable field keyed by its name. Private
/// fields are not readable. Field types must implement `quill_core::ToValue`;
/// an `Option` field that is `None` counts as absent.
///
/// # Attributes
///
/// - `#[record(rename = "...")]` - Use another key for the field
/// - `#[record(skip)]` - Leave a `pub` field out
/// - `#[record(flatten)]` - Include the fields of an embedded `Record` as if
///   they were declared here
///
/// # Example
///
/// ```rust,ignore
/// use quill_core::{Record, TypedTemplate, Template};
///
/// #[derive(Record)]
/// pub struct Invoice {
///     pub customer: String,
///     #[record(rename = "total-due")]
///     pub total: f64,
///     internal_id: u64,
/// }
///
/// let template = Template::new("{customer} owes {total-due}")?;
/// let typed = TypedTemplate::<Invoice>::new(template)?;
/// ```
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record_impl(input)
}
