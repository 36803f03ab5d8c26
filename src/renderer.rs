//! Template renderer for skeleton.
//! Renders template files against the values mapping with MiniJinja.
use crate::error::{Error, Result};
use crate::filters;
use crate::values::Values;
use minijinja::value::{Value, ValueKind};
use std::fmt::Write as _;
use minijinja::{AutoEscape, Environment, ErrorKind, Output, State, UndefinedBehavior};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template source with the given values.
    ///
    /// # Arguments
    /// * `name` - Template identifier used in error messages
    /// * `source` - Raw template bytes
    /// * `values` - Values bound as the root context
    ///
    /// # Returns
    /// * `Result<Vec<u8>>` - Rendered content
    fn render(&self, name: &str, source: &[u8], values: &Values) -> Result<Vec<u8>>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer where undefined values render as empty strings.
    pub fn new() -> Self {
        Self::with_undefined_behavior(UndefinedBehavior::Lenient)
    }

    /// Creates a renderer where any use of an undefined value is an error.
    pub fn strict() -> Self {
        Self::with_undefined_behavior(UndefinedBehavior::Strict)
    }

    fn with_undefined_behavior(behavior: UndefinedBehavior) -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(behavior);
        env.set_keep_trailing_newline(true);
        // Output is plain text whatever the file extension.
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_formatter(format_value);
        filters::register(&mut env);
        Self { env }
    }
}

/// Writes booleans as `true`/`false` and none as nothing, so substituted
/// flags stay valid in YAML, JSON, TOML and source files.
fn format_value(
    out: &mut Output,
    state: &State,
    value: &Value,
) -> std::result::Result<(), minijinja::Error> {
    match value.kind() {
        ValueKind::Bool => {
            out.write_str(if value.is_true() { "true" } else { "false" })?;
            Ok(())
        }
        ValueKind::None => Ok(()),
        _ => minijinja::escape_formatter(out, state, value),
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// # Errors
    /// * `Error::TemplateParseError` if the source is not UTF-8 or has syntax errors
    /// * `Error::TemplateExecError` if rendering fails at runtime
    fn render(&self, name: &str, source: &[u8], values: &Values) -> Result<Vec<u8>> {
        let source = String::from_utf8(source.to_vec()).map_err(|e| {
            Error::TemplateParseError {
                name: name.to_string(),
                source: minijinja::Error::new(ErrorKind::SyntaxError, e.to_string()),
            }
        })?;

        let mut env = self.env.clone();
        env.add_template_owned(name.to_string(), source).map_err(|source| {
            Error::TemplateParseError { name: name.to_string(), source }
        })?;

        let tmpl = env.get_template(name).map_err(|source| Error::TemplateParseError {
            name: name.to_string(),
            source,
        })?;

        let rendered = tmpl.render(values).map_err(|e| Error::TemplateExecError {
            name: name.to_string(),
            message: format!("{e:#}"),
        })?;

        Ok(rendered.into_bytes())
    }
}
