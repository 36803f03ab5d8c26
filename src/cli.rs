//! Command-line interface implementation for skeleton.
//! Provides argument parsing and the command table using clap.

use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for skeleton.
#[derive(Parser, Debug)]
#[command(author, version, about = "skeleton: scaffold a project from a templates directory", long_about = None)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Every command the binary understands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create output directory structure from templates directory
    Create(CreateArgs),
}

#[derive(clap::Args, Debug)]
pub struct CreateArgs {
    /// Directory holding the templates to mirror
    #[arg(value_name = "TEMPLATES_DIR")]
    pub templates_dir: PathBuf,

    /// Directory where the generated project will be created
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Path to the values.yaml file
    #[arg(short, long, value_name = "FILE")]
    pub values: PathBuf,

    /// Write into an existing output directory
    #[arg(short, long)]
    pub force: bool,

    /// Fail on any use of an undefined value inside a template
    #[arg(long)]
    pub strict: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 and the help text if a subcommand or required argument is missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::MissingRequiredArgument
            | ErrorKind::MissingSubcommand
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            }
            _ => e.exit(),
        },
    }
}
