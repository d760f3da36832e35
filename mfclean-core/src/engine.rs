// mfclean-core/src/engine.rs
//! Defines the core `CleaningEngine` trait.
//!
//! The trait decouples the cleaning pipeline from the command layer, so the
//! CLI works against a `&dyn CleaningEngine` and tests can substitute their own.
//!
//! License: MIT OR APACHE 2.0

use anyhow::Result;

use crate::config::{CleanConfig, RuleSummaryItem};
use crate::rules::compiler::CompiledRules;

/// A trait that defines the core functionality of a cleaning engine.
pub trait CleaningEngine: Send + Sync {
    /// Applies every active rule, in order, to `content`.
    ///
    /// Returns the cleaned text and a summary holding one entry per rule that
    /// matched at least once, in rule order.
    ///
    /// # Arguments
    /// * `content` - The full source text.
    /// * `source_id` - A name for the source (typically its path), used in logs.
    fn clean(&self, content: &str, source_id: &str) -> Result<(String, Vec<RuleSummaryItem>)>;

    /// Returns a reference to the `CompiledRules` used by the engine.
    fn compiled_rules(&self) -> &CompiledRules;

    /// Returns a reference to the engine's rule table.
    fn get_rules(&self) -> &CleanConfig;
}
