//! skeleton scaffolds a project directory from a directory of templates.
//! Files whose path carries the `.tpl` marker are rendered against a YAML
//! values file; everything else is copied unchanged.

/// Command-line interface module for the skeleton binary
pub mod cli;

/// Command table dispatch
pub mod commands;

/// Shared constants such as the template marker
pub mod constants;

/// Error types and handling
pub mod error;

/// Template helper filters and functions
pub mod filters;

/// Logger setup for the binary
pub mod logger;

/// Core tree materialization
/// Walks the templates directory and writes the output tree
pub mod processor;

/// Template rendering functionality
pub mod renderer;

/// Values file loading
pub mod values;
