//! # Quill Core
//!
//! Minimal placeholder templating.
//!
//! A template is plain text with `{name}` tokens. Each token is replaced by a
//! value from a context; when the value is missing the token's own default
//! (`{name:default}`) is used, then the configured global default.
//! `\{` and `\}` produce literal braces.
//!
//! ## Features
//!
//! - Local and global defaults
//! - List values joined with a configurable separator
//! - Locale-independent number policies (plain, round, cents)
//! - Typed templates fed from struct fields via `#[derive(Record)]`
//!
//! ## Example
//!
//! ```rust
//! use quill_core::{make_template, Context, TemplateConfig};
//!
//! let template = make_template(
//!     "Fruit list: {fruits}",
//!     TemplateConfig::default().with_separator(" | "),
//! )?;
//!
//! let ctx = Context::new().with("fruits", vec!["apple", "banana", "grape"]);
//! assert_eq!(template.render(&ctx)?, "Fruit list: apple | banana | grape");
//! # Ok::<(), quill_core::QuillError>(())
//! ```

// Lets `#[derive(Record)]` expand to `::quill_core::...` inside this crate too.
extern crate self as quill_core;

pub mod config;
pub mod context;
pub mod error;
pub mod format;
pub mod record;
pub mod template;
pub mod token;
pub mod typed;
pub mod value;

pub use config::{NumberFormat, TemplateConfig};
pub use context::Context;
pub use error::{DefinitionError, QuillError, Result};
pub use record::{FieldDescriptor, Record};
pub use template::Template;
pub use token::Token;
pub use typed::TypedTemplate;
pub use value::{ToValue, Value};

#[cfg(feature = "derive")]
pub use quill_macros::Record;

/// Build a context-map template.
pub fn make_template(definition: impl Into<String>, config: TemplateConfig) -> Result<Template> {
    Template::with_config(definition, config)
}

/// Build a template bound to the fields of `T`.
///
/// ```rust
/// use quill_core::{make_typed_template, FieldDescriptor, Record, TemplateConfig};
///
/// struct User {
///     name: String,
/// }
///
/// impl Record for User {
///     fn fields() -> Vec<FieldDescriptor<Self>> {
///         vec![FieldDescriptor::of("name", |u: &User| &u.name)]
///     }
/// }
///
/// let template = make_typed_template::<User>("Hi {name}", TemplateConfig::default())?;
/// assert_eq!(template.render(&User { name: "Ada".into() })?, "Hi Ada");
/// # Ok::<(), quill_core::QuillError>(())
/// ```
pub fn make_typed_template<T: Record>(
    definition: impl Into<String>,
    config: TemplateConfig,
) -> Result<TypedTemplate<T>> {
    TypedTemplate::new(Template::with_config(definition, config)?)
}

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        make_template, make_typed_template, Context, DefinitionError, FieldDescriptor,
        NumberFormat, QuillError, Record, Result, Template, TemplateConfig, ToValue,
        TypedTemplate, Value,
    };
}
