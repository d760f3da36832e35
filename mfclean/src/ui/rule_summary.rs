//! Per-rule removal counts.

use anyhow::Result;
use mfclean_core::RuleSummaryItem;
use std::io::Write;

use crate::ui::output_format::write_styled;
use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Writes one line per rule that fired, e.g. `  dunder_marker: 2`.
pub fn print_summary<W: Write + ?Sized>(
    summary: &[RuleSummaryItem],
    writer: &mut W,
    theme_map: &ThemeMap,
    use_color: bool,
) -> Result<()> {
    if summary.is_empty() {
        writeln!(writer, "No markers found.")?;
        return Ok(());
    }

    writeln!(writer, "Markers removed:")?;
    for item in summary {
        write!(writer, "  ")?;
        write_styled(writer, &item.rule_name, ThemeEntry::SummaryRuleName, theme_map, use_color)?;
        write!(writer, ": ")?;
        write_styled(
            writer,
            &item.occurrences.to_string(),
            ThemeEntry::SummaryOccurrences,
            theme_map,
            use_color,
        )?;
        writeln!(writer)?;
    }
    Ok(())
}
