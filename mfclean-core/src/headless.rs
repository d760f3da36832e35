// mfclean-core/src/headless.rs
//! Pure, filesystem-free entry points.
//!
//! `clean` runs the built-in rule set over a string and reports whether
//! anything changed. Nothing here touches the disk.

use anyhow::Result;

use crate::config::RuleSummaryItem;
use crate::engine::CleaningEngine;
use crate::engines::regex_engine::RegexEngine;

/// Result of running the pipeline over one text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanOutcome {
    /// The text after every rule has been applied.
    pub text: String,
    /// `text != original`.
    pub changed: bool,
    /// Per-rule match counts, in rule order.
    pub summary: Vec<RuleSummaryItem>,
}

/// Cleans `content` with an existing engine.
pub fn clean_with(
    engine: &dyn CleaningEngine,
    content: &str,
    source_id: &str,
) -> Result<CleanOutcome> {
    let (text, summary) = engine.clean(content, source_id)?;
    let changed = text != content;
    Ok(CleanOutcome { text, changed, summary })
}

/// Cleans `content` with the built-in marker rules.
pub fn clean(content: &str) -> Result<CleanOutcome> {
    let engine = RegexEngine::with_default_rules()?;
    clean_with(&engine, content, "<memory>")
}

/// Convenience wrapper returning only the cleaned text.
pub fn headless_clean_string(content: &str) -> Result<String> {
    Ok(clean(content)?.text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_indented_line_marker_with_its_newline() -> Result<()> {
        let input = "const a = 1;\n  // MF_REPORT_START debug info here\nconst b = 2;\n";
        let outcome = clean(input)?;
        assert_eq!(outcome.text, "const a = 1;\nconst b = 2;\n");
        assert!(outcome.changed);
        Ok(())
    }

    #[test]
    fn debug_warn_line_is_emptied() -> Result<()> {
        let input = "const a = 1;\nconsole.warn(\"MF_REPORT_DEBUG: value=\" + x);\nconst b = 2;\n";
        let outcome = clean(input)?;
        assert_eq!(outcome.text, "const a = 1;\n\nconst b = 2;\n");
        assert!(!outcome.text.contains("console.warn"));
        Ok(())
    }

    #[test]
    fn eslint_directive_removed_but_log_call_kept() -> Result<()> {
        let input = concat!(
            "function f() {\n",
            "  // eslint-disable-next-line no-console\n",
            "  console.log(\"hello\");\n",
            "}\n",
        );
        let outcome = clean(input)?;
        assert_eq!(outcome.text, "function f() {\n  console.log(\"hello\");\n}\n");
        Ok(())
    }

    #[test]
    fn five_blank_lines_collapse_to_one() -> Result<()> {
        let input = "block one\n\n\n\n\n\nblock two\n";
        let outcome = clean(input)?;
        assert_eq!(outcome.text, "block one\n\nblock two\n");
        Ok(())
    }

    #[test]
    fn untouched_text_reports_no_change() -> Result<()> {
        let input = "export const x = 1;\n\nexport const y = 2;\n";
        let outcome = clean(input)?;
        assert_eq!(outcome.text, input);
        assert!(!outcome.changed);
        assert!(outcome.summary.is_empty());
        Ok(())
    }

    #[test]
    fn headless_string_matches_outcome_text() -> Result<()> {
        let input = "a\n// __MF_REPORT_TAIL__\nb\n";
        assert_eq!(headless_clean_string(input)?, "a\nb\n");
        Ok(())
    }
}
