// mfclean-core/src/lib.rs
//! # mfclean Core Library
//!
//! `mfclean-core` strips temporary development markers from a source file:
//! `MF_REPORT_*` comments, `MF_REPORT_DEBUG` warn statements and the
//! `no-console` lint directives that accompany them. It then collapses the
//! blank-line runs those removals leave behind.
//!
//! The transformation is a fixed, ordered list of regular-expression
//! substitutions. Each rule is a pure text-to-text step; the pipeline is their
//! left fold.
//!
//! ## Modules
//!
//! * `config`: `CleanRule`s and the embedded `CleanConfig` rule table.
//! * `rules`: Compiles the table into `CompiledRules`.
//! * `engine`: The `CleaningEngine` trait.
//! * `engines`: Concrete engines (`RegexEngine`).
//! * `headless`: The pure `clean` function.
//! * `cleaner`: The read/compare/write shell over a `SourceStore`.
//! * `errors`: `CleanError`.
//!
//! ## Usage Example
//!
//! ```rust
//! use mfclean_core::clean;
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let input = "render();\n// MF_REPORT_START debug info\ndone();\n";
//!     let outcome = clean(input)?;
//!     assert!(outcome.changed);
//!     assert_eq!(outcome.text, "render();\ndone();\n");
//!     Ok(())
//! }
//! ```
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod cleaner;
pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod rules;

/// Re-exports the rule table types.
pub use config::{CleanConfig, CleanRule, RuleSummaryItem, MAX_PATTERN_LENGTH};

/// Re-exports the custom error type.
pub use errors::CleanError;

pub use engine::CleaningEngine;
pub use engines::regex_engine::RegexEngine;

pub use headless::{clean, clean_with, headless_clean_string, CleanOutcome};

pub use cleaner::{CleanMode, CleanReport, Cleaner, FsSourceStore, SourceStore};

pub use rules::compiler::{compile_rules, get_or_compile_rules, CompiledRule, CompiledRules};
