// mfclean/src/lib.rs
//! # mfclean CLI Application
//!
//! Terminal front end for `mfclean-core`: argument parsing, logger setup,
//! themed status output, and the clean command.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

pub use commands::clean::{run_clean_opts, CleanOptions};
