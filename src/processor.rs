//! Tree materialization for skeleton.
//! Walks the templates directory and mirrors it into the output directory,
//! rendering template files and copying everything else byte for byte.

use log::{debug, error};
use std::any::Any;
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::{
    constants::TEMPLATE_MARKER,
    error::{Error, Result},
    renderer::{MiniJinjaRenderer, TemplateRenderer},
    values::{load_values, Values},
};

/// Library-level switches for a scaffolding run.
#[derive(Debug, Default, Clone)]
pub struct CreateOptions {
    /// Treat any use of an undefined value as a rendering error.
    pub strict: bool,
}

/// What happened to a single source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Rendered,
    Copied,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Rendered => write!(f, "Rendered"),
            Action::Copied => write!(f, "Copied"),
        }
    }
}

/// Content ready to be written for one source file.
#[derive(Debug)]
pub struct FileOperation {
    pub action: Action,
    pub source: PathBuf,
    pub target: PathBuf,
    pub content: Vec<u8>,
}

/// A file that has been written to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Written {
    pub action: Action,
    pub target: PathBuf,
}

/// Returns true if `path` carries the template marker anywhere.
pub fn is_template_path(path: &str) -> bool {
    path.contains(TEMPLATE_MARKER)
}

/// Removes a trailing template marker. Paths that carry the marker
/// elsewhere are returned unchanged.
pub fn strip_template_marker(path: &str) -> &str {
    path.strip_suffix(TEMPLATE_MARKER).unwrap_or(path)
}

/// Replaces the first occurrence of `templates_dir` in `path` with `output_dir`.
pub fn rewrite_path(path: &str, templates_dir: &str, output_dir: &str) -> PathBuf {
    PathBuf::from(path.replacen(templates_dir, output_dir, 1))
}

/// Lexically normalizes a directory path: drops `.` segments, repeated
/// separators and trailing slashes.
pub fn normalize_dir<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    let normalized: PathBuf = path.components().collect();
    if normalized.as_os_str().is_empty() && !path.as_os_str().is_empty() {
        return PathBuf::from(".");
    }
    normalized
}

fn path_str(path: &Path) -> Result<&str> {
    path.to_str().ok_or_else(|| Error::ReadError {
        path: path.to_path_buf(),
        source: std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "path is not valid UTF-8",
        ),
    })
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| Error::ReadError { path: path.to_path_buf(), source })
}

/// Mode requested for new output files, before the umask is applied.
#[cfg(unix)]
const OUTPUT_FILE_MODE: u32 = 0o777;

fn write_bytes(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(OUTPUT_FILE_MODE);
    }
    options.open(path)?.write_all(content)
}

/// Writes the operation's content to its target, creating the parent
/// directory on demand. Existing files are overwritten and keep their mode.
pub fn write_file(operation: &FileOperation) -> Result<()> {
    let target = &operation.target;
    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating directory: {}", parent.display());
            fs::create_dir_all(parent)
                .map_err(|source| Error::WriteError { path: parent.to_path_buf(), source })?;
        }
    }
    write_bytes(target, &operation.content)
        .map_err(|source| Error::WriteError { path: target.clone(), source })
}

/// Turns one source file into a [`FileOperation`].
pub struct Processor<'a> {
    engine: &'a dyn TemplateRenderer,
    templates_dir: String,
    output_dir: String,
    values: &'a Values,
}

impl<'a> Processor<'a> {
    /// # Errors
    /// * `Error::ReadError` if either directory path is not valid UTF-8
    pub fn new<S: AsRef<Path>, T: AsRef<Path>>(
        engine: &'a dyn TemplateRenderer,
        templates_dir: S,
        output_dir: T,
        values: &'a Values,
    ) -> Result<Self> {
        let templates_dir = path_str(templates_dir.as_ref())?.to_string();
        let output_dir = path_str(output_dir.as_ref())?.to_string();
        Ok(Self { engine, templates_dir, output_dir, values })
    }

    /// Reads `path` and renders or copies it.
    ///
    /// The file's base name is the template identifier.
    pub fn process(&self, path: &Path) -> Result<FileOperation> {
        let source_path = path_str(path)?;
        let data = read_file(path)?;

        if is_template_path(source_path) {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| source_path.to_string());
            debug!("Rendering template: {}", source_path);
            let content = self.engine.render(&name, &data, self.values)?;
            let target = rewrite_path(
                strip_template_marker(source_path),
                &self.templates_dir,
                &self.output_dir,
            );
            Ok(FileOperation {
                action: Action::Rendered,
                source: path.to_path_buf(),
                target,
                content,
            })
        } else {
            debug!("Copying file: {}", source_path);
            let target = rewrite_path(source_path, &self.templates_dir, &self.output_dir);
            Ok(FileOperation {
                action: Action::Copied,
                source: path.to_path_buf(),
                target,
                content: data,
            })
        }
    }
}

fn walk(processor: &Processor<'_>, templates_dir: &Path) -> Result<Vec<Written>> {
    let mut written = Vec::new();

    for entry in WalkDir::new(templates_dir).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::ReadError {
            path: e.path().unwrap_or(templates_dir).to_path_buf(),
            source: e.into(),
        })?;
        if entry.file_type().is_dir() {
            continue;
        }

        let operation = processor.process(entry.path())?;
        write_file(&operation)?;
        debug!(
            "{}: '{}' -> '{}'",
            operation.action,
            operation.source.display(),
            operation.target.display()
        );
        written.push(Written { action: operation.action, target: operation.target });
    }

    Ok(written)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unexpected fault".to_string()
    }
}

/// Mirrors `templates_dir` into `output_dir`.
///
/// Stops at the first failing file. A panic raised anywhere in the walk is
/// reported as `Error::TemplateExecError`.
///
/// # Returns
/// * `Result<Vec<Written>>` - Files written, in walk order
pub fn materialize<S: AsRef<Path>, T: AsRef<Path>>(
    engine: &dyn TemplateRenderer,
    templates_dir: S,
    output_dir: T,
    values: &Values,
) -> Result<Vec<Written>> {
    let templates_dir = normalize_dir(templates_dir);
    let output_dir = output_dir.as_ref();
    debug!(
        "Materializing '{}' into '{}'.",
        templates_dir.display(),
        output_dir.display()
    );

    let processor = Processor::new(engine, &templates_dir, output_dir, values)?;

    match panic::catch_unwind(AssertUnwindSafe(|| walk(&processor, &templates_dir))) {
        Ok(result) => result,
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            error!("Materialization aborted: {}", message);
            Err(Error::TemplateExecError {
                name: templates_dir.display().to_string(),
                message,
            })
        }
    }
}

/// Loads the values file and materializes the templates directory.
///
/// Nothing is written when the values file cannot be loaded. On any other
/// error the output directory may be partially written; callers are
/// expected to remove it.
pub fn create<S, T, V>(
    templates_dir: S,
    output_dir: T,
    values_path: V,
    options: &CreateOptions,
) -> Result<Vec<Written>>
where
    S: AsRef<Path>,
    T: AsRef<Path>,
    V: AsRef<Path>,
{
    let values = load_values(values_path)?;
    let engine = if options.strict {
        MiniJinjaRenderer::strict()
    } else {
        MiniJinjaRenderer::new()
    };
    materialize(&engine, templates_dir, output_dir, &values)
}
