//! Terminal output: themed status lines, diffs and rule summaries.

pub mod diff_viewer;
pub mod output_format;
pub mod rule_summary;
pub mod theme;
