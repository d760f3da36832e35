//! Logger setup for the `mfclean` binary.
//!
//! Records go to stderr through `env_logger`, keeping stdout for the status
//! line. `RUST_LOG` is honoured unless a level is forced from the command line.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

const DEFAULT_FILTER: &str = "mfclean=warn,mfclean_core=warn";

/// Initialises the global logger.
///
/// `Some(level)` forces that level for the `mfclean` crates and ignores
/// `RUST_LOG`; `None` falls back to `RUST_LOG`, then to warnings only.
/// Calling this more than once is harmless.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = match level_override {
        Some(level) => {
            let mut b = Builder::new();
            b.filter_module("mfclean", level);
            b.filter_module("mfclean_core", level);
            b
        }
        None => Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER)),
    };

    builder
        .target(Target::Stderr)
        .format_timestamp(None)
        .format_target(true);

    if builder.try_init().is_err() {
        log::debug!("Logger already initialised; keeping existing configuration.");
    }
}

/// Picks the forced level from the `--quiet` / `--debug` flags.
pub fn level_from_flags(quiet: bool, debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_debug() {
        assert_eq!(level_from_flags(true, true), Some(LevelFilter::Off));
        assert_eq!(level_from_flags(false, true), Some(LevelFilter::Debug));
        assert_eq!(level_from_flags(false, false), None);
    }
}
