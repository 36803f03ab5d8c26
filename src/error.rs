//! Error handling for skeleton.
//! Defines the error taxonomy and result alias used throughout the crate.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while scaffolding a project.
///
/// Every variant carries the path or template name it relates to, so a
/// single terminal error is enough to locate the offending file.
#[derive(Error, Debug)]
pub enum Error {
    /// A source file or the values file could not be opened or read.
    #[error("Cannot read '{path}': {source}.")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The values file is not a valid YAML mapping.
    #[error("Cannot parse values file '{path}': {source}.")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The template source is malformed.
    #[error("Cannot parse template '{name}': {source}.")]
    TemplateParseError {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    /// Rendering failed at runtime, or the walk panicked.
    #[error("Cannot execute template '{name}': {message}.")]
    TemplateExecError { name: String, message: String },

    /// A directory or output file could not be written.
    #[error("Cannot write '{path}': {source}.")]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Output directory '{output_dir}' already exists. Use --force to overwrite it.")]
    OutputDirectoryExistsError { output_dir: String },
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
