//! Typed templates.
//!
//! Renders a template from the fields of a value instead of a hand-built
//! [`Context`]. The template is shared, so the same [`Template`] can back any
//! number of typed wrappers.

use crate::{Context, DefinitionError, FieldDescriptor, Record, Result, Template};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// A [`Template`] bound to a field list of `T`.
pub struct TypedTemplate<T: 'static> {
    template: Arc<Template>,
    fields: Vec<FieldDescriptor<T>>,
}

impl<T: Record> TypedTemplate<T> {
    /// Bind `template` to the fields of `T` as declared by its [`Record`] impl.
    pub fn new(template: impl Into<Arc<Template>>) -> Result<Self> {
        Self::with_fields(template, T::type_name(), T::fields())
    }
}

impl<T: 'static> TypedTemplate<T> {
    /// Bind `template` to an explicit field list.
    ///
    /// Fails when `fields` is empty, or when no field is named like a token.
    pub fn with_fields(
        template: impl Into<Arc<Template>>,
        type_name: &str,
        fields: Vec<FieldDescriptor<T>>,
    ) -> Result<Self> {
        let template = template.into();

        if fields.is_empty() {
            return Err(DefinitionError::NoReadableFields {
                type_name: type_name.to_string(),
            }
            .into());
        }

        if !fields.iter().any(|field| template.has_token(field.name())) {
            return Err(DefinitionError::NoMatchingFields {
                type_name: type_name.to_string(),
                fields: fields.iter().map(|f| f.name().to_string()).collect(),
            }
            .into());
        }

        debug!(type_name, fields = fields.len(), "Bound typed template");

        Ok(Self { template, fields })
    }

    /// The shared template.
    pub fn template(&self) -> &Arc<Template> {
        &self.template
    }

    /// The context `render` would use for `instance`. Absent fields are left out.
    pub fn context_for(&self, instance: &T) -> Context {
        self.fields
            .iter()
            .filter_map(|field| {
                field
                    .read(instance)
                    .map(|value| (field.name().to_string(), value))
            })
            .collect()
    }

    /// Render the template from the fields of `instance`.
    pub fn render(&self, instance: &T) -> Result<String> {
        self.template.render(&self.context_for(instance))
    }
}

impl<T: 'static> Clone for TypedTemplate<T> {
    fn clone(&self) -> Self {
        Self {
            template: Arc::clone(&self.template),
            fields: self.fields.clone(),
        }
    }
}

impl<T: 'static> fmt::Debug for TypedTemplate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedTemplate")
            .field("template", &self.template)
            .field("fields", &self.fields)
            .finish()
    }
}
