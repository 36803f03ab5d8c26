//! skeleton's binary entry point.
//! Parses the command line, sets up logging and dispatches the command.

use skeleton::{cli::get_args, commands::run, error::default_error_handler, logger::init_logger};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args.command) {
        default_error_handler(err);
    }
}
