//! Logging setup for the skeleton binary.
//! The library only emits through the `log` facade; the binary decides
//! what is shown.

use log::LevelFilter;

/// Installs `env_logger` at `Info`, or `Debug` when `verbose` is set.
///
/// A `RUST_LOG` directive, when present, refines the level per module.
pub fn init_logger(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .parse_default_env()
        .init();
}
