//! Unified diff of a cleaning run.
//!
//! Built with `diffy`; removed lines use the `DiffRemoved` style and added
//! lines the `DiffAdded` style.

use anyhow::Result;
use diffy::{create_patch, Line as DiffLine};
use std::io::Write;

use crate::ui::output_format::print_message;
use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Writes a unified diff between `original` and `cleaned` to `writer`.
///
/// Writes nothing when the texts are identical.
pub fn print_diff<W: Write + ?Sized>(
    original: &str,
    cleaned: &str,
    label: &str,
    writer: &mut W,
    theme_map: &ThemeMap,
    use_color: bool,
) -> Result<()> {
    let patch = create_patch(original, cleaned);
    if patch.hunks().is_empty() {
        return Ok(());
    }

    print_message(writer, &format!("--- {}", label), ThemeEntry::DiffHeader, theme_map, use_color)?;
    print_message(writer, &format!("+++ {}", label), ThemeEntry::DiffHeader, theme_map, use_color)?;

    for hunk in patch.hunks() {
        let old = hunk.old_range();
        let new = hunk.new_range();
        print_message(
            writer,
            &format!("@@ -{},{} +{},{} @@", old.start(), old.len(), new.start(), new.len()),
            ThemeEntry::DiffHeader,
            theme_map,
            use_color,
        )?;

        for line_change in hunk.lines() {
            match line_change {
                DiffLine::Delete(s) => {
                    let line = format!("-{}", strip_eol(s));
                    print_message(writer, &line, ThemeEntry::DiffRemoved, theme_map, use_color)?;
                }
                DiffLine::Insert(s) => {
                    let line = format!("+{}", strip_eol(s));
                    print_message(writer, &line, ThemeEntry::DiffAdded, theme_map, use_color)?;
                }
                DiffLine::Context(s) => {
                    writeln!(writer, " {}", strip_eol(s))?;
                }
            }
        }
    }
    Ok(())
}

fn strip_eol(line: &str) -> &str {
    line.strip_suffix('\n').unwrap_or(line)
}
