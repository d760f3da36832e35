//! Rule compilation and application.
//!
//! Turns the `CleanRule` table from `config` into compiled regular expressions.
//! Every `CompiledRule` is a pure `&str -> String` step, so each marker
//! convention can be exercised on its own.

pub mod compiler;
