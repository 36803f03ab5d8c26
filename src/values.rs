//! Values file handling for skeleton.
//! Loads the YAML document whose top-level keys become template variables.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// String-keyed mapping substituted into every template.
///
/// Keys keep the order they have in the values document.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Values(IndexMap<String, serde_json::Value>);

impl Values {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Parses the content of a values document.
///
/// An empty or `null` document yields an empty mapping. Merge keys (`<<`)
/// are resolved before the mapping is built.
///
/// # Arguments
/// * `content` - Raw YAML content
/// * `path` - Path the content was read from, used for error context
///
/// # Errors
/// * `Error::ParseError` if the content is not UTF-8 or not a string-keyed mapping
pub fn parse_values<C: AsRef<[u8]>, P: AsRef<Path>>(content: C, path: P) -> Result<Values> {
    let content = content.as_ref();
    if content.iter().all(u8::is_ascii_whitespace) {
        return Ok(Values::new());
    }

    let parse_error =
        |source: serde_yaml::Error| Error::ParseError { path: path.as_ref().to_path_buf(), source };

    let mut document: serde_yaml::Value =
        serde_yaml::from_slice(content).map_err(parse_error)?;
    document.apply_merge().map_err(parse_error)?;

    let values: Option<Values> = serde_yaml::from_value(document).map_err(parse_error)?;
    Ok(values.unwrap_or_default())
}

/// Reads and parses the values file at `path`.
///
/// # Errors
/// * `Error::ReadError` if the file cannot be read
/// * `Error::ParseError` if the content is not a string-keyed mapping
pub fn load_values<P: AsRef<Path>>(path: P) -> Result<Values> {
    let path = path.as_ref();
    debug!("Loading values from '{}'.", path.display());

    let content = std::fs::read(path)
        .map_err(|source| Error::ReadError { path: path.to_path_buf(), source })?;

    let values = parse_values(&content, path)?;
    debug!("Loaded {} top-level value(s).", values.len());
    Ok(values)
}
