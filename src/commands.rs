//! Command dispatch for the skeleton binary.

use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::{
    cli::{Command, CreateArgs},
    error::{Error, Result},
    processor::{create, CreateOptions},
};

/// Runs the selected command.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Create(args) => run_create(args),
    }
}

/// Ensures the output directory is safe to write to.
///
/// # Errors
/// * Returns `Error::OutputDirectoryExistsError` if the directory exists and force is false
pub fn get_output_dir<P: AsRef<Path>>(output_dir: P, force: bool) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    if output_dir.exists() && !force {
        return Err(Error::OutputDirectoryExistsError {
            output_dir: output_dir.display().to_string(),
        });
    }
    Ok(output_dir.to_path_buf())
}

/// Scaffolds the project, removing the output directory on failure.
pub fn run_create(args: CreateArgs) -> Result<()> {
    let output_root = get_output_dir(&args.output_dir, args.force)?;
    let options = CreateOptions { strict: args.strict };

    match create(&args.templates_dir, &output_root, &args.values, &options) {
        Ok(written) => {
            for file in &written {
                println!("{}: '{}'", file.action, file.target.display());
            }
            println!(
                "Project generation completed successfully in {}.",
                output_root.display()
            );
            Ok(())
        }
        Err(err) => {
            debug!("Removing partial output '{}'.", output_root.display());
            if output_root.exists() {
                if let Err(e) = std::fs::remove_dir_all(&output_root) {
                    warn!("Cannot remove '{}': {}", output_root.display(), e);
                }
            }
            Err(err)
        }
    }
}
