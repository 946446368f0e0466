//! Template engine for declaration files using Handlebars.
//!
//! Wraps Handlebars with the built-in declaration templates registered.
//! Output is TypeScript, so HTML escaping is disabled and every template
//! variable is inserted verbatim.
//!
//! # Examples
//!
//! ```
//! use kit_typegen_codegen::template_engine::TemplateEngine;
//! use serde_json::json;
//!
//! let engine = TemplateEngine::new().unwrap();
//! let rendered = engine
//!     .render("route/endpoint", &json!({ "params": "{ id: string }" }))
//!     .unwrap();
//! assert!(rendered.contains("GenericRequestHandler<{ id: string }, Output>"));
//! ```

use handlebars::Handlebars;
use kit_typegen_core::{Error, Result};
use serde::Serialize;

/// Built-in templates as `(name, source)` pairs.
const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    (
        "route/header",
        include_str!("../templates/route/header.d.ts.hbs"),
    ),
    (
        "route/endpoint",
        include_str!("../templates/route/endpoint.d.ts.hbs"),
    ),
    ("route/page", include_str!("../templates/route/page.d.ts.hbs")),
    ("fetch/entry", include_str!("../templates/fetch/entry.d.ts.hbs")),
    ("fetch/map", include_str!("../templates/fetch/map.d.ts.hbs")),
];

/// Template engine for declaration generation.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Creates a new template engine with the built-in templates registered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateError`] if a built-in template fails to
    /// register.
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);

        for (name, source) in BUILTIN_TEMPLATES {
            handlebars
                .register_template_string(name, source)
                .map_err(|e| Error::TemplateError {
                    message: format!("Failed to register {name} template: {e}"),
                })?;
        }

        Ok(Self { handlebars })
    }

    /// Renders a template with the given context.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateError`] if the template is not registered,
    /// the context cannot be serialized, or a referenced variable is
    /// missing.
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::TemplateError {
                message: format!("Template rendering failed: {e}"),
            })
    }

    /// Registers a custom template, replacing any template of the same name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateError`] if the template string is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use kit_typegen_codegen::template_engine::TemplateEngine;
    ///
    /// let mut engine = TemplateEngine::new().unwrap();
    /// engine
    ///     .register_template_string("route/header", "// custom header for {{types_module}}")
    ///     .unwrap();
    /// ```
    pub fn register_template_string(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(|e| Error::TemplateError {
                message: format!("Failed to register template '{name}': {e}"),
            })
    }
}
