//! Common constants used throughout skeleton.

/// Substring that marks a file as a template to render.
pub const TEMPLATE_MARKER: &str = ".tpl";

