//! Template parsing and rendering.
//!
//! A template holds a definition with `{name}` / `{name:default}` tokens and the
//! configuration used to render it. Tokens are resolved from a [`Context`],
//! then from the token's local default, then from the global default.

use crate::token::{self, Token};
use crate::{format, Context, DefinitionError, Result, TemplateConfig};
use std::collections::BTreeSet;
use tracing::{debug, instrument, trace};

/// A validated template definition plus its configuration.
///
/// Rendering never mutates the template, so one instance can be shared across
/// threads.
#[derive(Debug, Clone)]
pub struct Template {
    /// Original definition.
    definition: String,

    /// Rendering options, fixed at construction.
    config: TemplateConfig,

    /// Distinct token names found in the definition.
    token_names: BTreeSet<String>,
}

impl Template {
    /// Create a template with the default configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use quill_core::{Context, Template};
    ///
    /// let template = Template::new("Hello, {name}!").unwrap();
    /// let out = template.render(&Context::new().with("name", "Matteo")).unwrap();
    /// assert_eq!(out, "Hello, Matteo!");
    /// ```
    pub fn new(definition: impl Into<String>) -> Result<Self> {
        Self::with_config(definition, TemplateConfig::default())
    }

    /// Create a template with a custom configuration.
    ///
    /// Fails with [`DefinitionError::NoTokens`] when the definition has no token.
    /// Escaped braces do not count.
    pub fn with_config(definition: impl Into<String>, config: TemplateConfig) -> Result<Self> {
        let definition = definition.into();
        let token_names: BTreeSet<String> =
            token::scan(&definition).map(|token| token.name).collect();

        if token_names.is_empty() {
            return Err(DefinitionError::NoTokens(definition).into());
        }

        debug!(tokens = token_names.len(), "Parsed template definition");

        Ok(Self {
            definition,
            config,
            token_names,
        })
    }

    /// The definition this template was built from.
    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// The configuration used for every render.
    pub fn config(&self) -> &TemplateConfig {
        &self.config
    }

    /// Whether the definition contains a token with exactly this name.
    pub fn has_token(&self, name: &str) -> bool {
        self.token_names.contains(name)
    }

    /// Distinct token names, sorted.
    pub fn token_names(&self) -> impl Iterator<Item = &str> {
        self.token_names.iter().map(String::as_str)
    }

    /// Every token occurrence, in definition order.
    pub fn tokens(&self) -> Vec<Token> {
        token::scan(&self.definition).collect()
    }

    /// Render the template with the given context.
    ///
    /// Missing values never fail: they fall back to the local default, then to
    /// the global default. Substituted text is not scanned again; the only
    /// post-processing is turning `\{` and `\}` into bare braces.
    #[instrument(level = "trace", skip_all, fields(tokens = self.token_names.len()))]
    pub fn render(&self, context: &Context) -> Result<String> {
        let mut result = String::with_capacity(self.definition.len());
        let mut last = 0;

        for token in token::scan(&self.definition) {
            result.push_str(&self.definition[last..token.start]);
            last = token.end;

            match context.get(&token.name) {
                Some(value) => result.push_str(&format::render(value, &self.config)?),
                None => {
                    trace!(token = %token.name, local = token.default.is_some(), "Using default");
                    match token.default {
                        Some(ref default) => result.push_str(default),
                        None => result.push_str(&self.config.global_default),
                    }
                }
            }
        }
        result.push_str(&self.definition[last..]);

        Ok(token::unescape(&result).into_owned())
    }
}
