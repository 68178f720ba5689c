//! Logger bootstrap for the binary and the test suites.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the global logger.
///
/// `verbose` lowers the default filter to debug; `RUST_LOG` still wins when
/// set. Repeated calls are harmless so tests may call this freely.
pub fn init(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let env = Env::default().default_filter_or(default_level.to_string());
    // Only the first initialisation takes effect; later ones error and are
    // deliberately ignored.
    let _ = Builder::from_env(env).try_init();
}
