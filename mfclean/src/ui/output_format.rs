//! Themed single-line messages.
//!
//! Colour is applied only when the caller says the stream supports it, so the
//! same helpers serve terminals, pipes and test buffers.

use anyhow::Result;
use owo_colors::OwoColorize;
use std::io::Write;

use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Writes `text` styled as `entry`, without a trailing newline.
pub fn write_styled<W: Write + ?Sized>(
    writer: &mut W,
    text: &str,
    entry: ThemeEntry,
    theme_map: &ThemeMap,
    use_color: bool,
) -> Result<()> {
    let color = theme_map.get(&entry).and_then(|style| style.fg.as_ref());
    match color {
        Some(color) if use_color => {
            write!(writer, "{}", text.color(color.to_ansi_color()))?
        }
        _ => write!(writer, "{}", text)?,
    }
    Ok(())
}

/// Writes one styled line.
pub fn print_message<W: Write + ?Sized>(
    writer: &mut W,
    msg: &str,
    entry: ThemeEntry,
    theme_map: &ThemeMap,
    use_color: bool,
) -> Result<()> {
    write_styled(writer, msg, entry, theme_map, use_color)?;
    writeln!(writer)?;
    Ok(())
}

pub fn print_success_message<W: Write + ?Sized>(
    writer: &mut W,
    msg: &str,
    theme_map: &ThemeMap,
    use_color: bool,
) -> Result<()> {
    print_message(writer, msg, ThemeEntry::Success, theme_map, use_color)
}

pub fn print_info_message<W: Write + ?Sized>(
    writer: &mut W,
    msg: &str,
    theme_map: &ThemeMap,
    use_color: bool,
) -> Result<()> {
    print_message(writer, msg, ThemeEntry::Info, theme_map, use_color)
}

pub fn print_warn_message<W: Write + ?Sized>(
    writer: &mut W,
    msg: &str,
    theme_map: &ThemeMap,
    use_color: bool,
) -> Result<()> {
    print_message(writer, msg, ThemeEntry::Warn, theme_map, use_color)
}

pub fn print_error_message<W: Write + ?Sized>(
    writer: &mut W,
    msg: &str,
    theme_map: &ThemeMap,
    use_color: bool,
) -> Result<()> {
    print_message(writer, msg, ThemeEntry::Error, theme_map, use_color)
}
