//! The `mfclean` command: clean one file and print exactly one status line.

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;
use std::path::{Path, PathBuf};

use mfclean_core::{CleanMode, CleanReport, Cleaner, CleaningEngine, SourceStore};

use crate::ui::diff_viewer;
use crate::ui::output_format;
use crate::ui::rule_summary;
use crate::ui::theme::ThemeMap;

/// Options for `run_clean_opts`.
#[derive(Debug, Clone)]
pub struct CleanOptions {
    pub path: PathBuf,
    pub mode: CleanMode,
    pub diff: bool,
    pub summary: bool,
    /// Colour the status line.
    pub stdout_color: bool,
    /// Colour the diff and summary.
    pub stderr_color: bool,
}

/// The file name shown in status lines; falls back to the full path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// The status line for a finished run.
pub fn status_line(report: &CleanReport, mode: CleanMode) -> String {
    let name = display_name(&report.path);
    match (report.changed, mode) {
        (true, CleanMode::Write) => format!("✅ {} cleaned", name),
        (true, CleanMode::Check) => format!("🔎 {} would be cleaned", name),
        (false, _) => format!("ℹ️ No changes applied to {}", name),
    }
}

/// Runs the cleaner over `opts.path` using `store`.
///
/// The status line goes to `out`; the optional diff and summary go to `err`.
pub fn run_clean_opts<S: SourceStore>(
    engine: &dyn CleaningEngine,
    store: S,
    opts: &CleanOptions,
    theme_map: &ThemeMap,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<CleanReport> {
    info!("Starting clean of {}.", opts.path.display());

    let cleaner = Cleaner::new(engine, store);
    let report = cleaner
        .clean_path(&opts.path, opts.mode)
        .with_context(|| format!("Failed to clean {}", opts.path.display()))?;

    debug!(
        "Clean finished for {}: changed={}, written={}",
        report.path.display(),
        report.changed,
        report.written
    );

    if opts.diff {
        diff_viewer::print_diff(
            &report.original,
            &report.cleaned,
            &report.path.display().to_string(),
            &mut *err,
            theme_map,
            opts.stderr_color,
        )?;
    }

    if opts.summary {
        rule_summary::print_summary(&report.summary, &mut *err, theme_map, opts.stderr_color)?;
    }

    let line = status_line(&report, opts.mode);
    match (report.changed, opts.mode) {
        (true, CleanMode::Write) => {
            output_format::print_success_message(&mut *out, &line, theme_map, opts.stdout_color)?
        }
        (true, CleanMode::Check) => {
            output_format::print_warn_message(&mut *out, &line, theme_map, opts.stdout_color)?
        }
        (false, _) => {
            output_format::print_info_message(&mut *out, &line, theme_map, opts.stdout_color)?
        }
    }
    out.flush()?;

    info!("Clean operation completed.");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;
    use mfclean_core::{CleanError, RegexEngine};
    use std::cell::{Cell, RefCell};

    struct OneFileStore {
        content: RefCell<String>,
        writes: Cell<usize>,
    }

    impl OneFileStore {
        fn new(content: &str) -> Self {
            Self { content: RefCell::new(content.to_string()), writes: Cell::new(0) }
        }
    }

    impl SourceStore for &OneFileStore {
        fn read(&self, _path: &Path) -> Result<String, CleanError> {
            Ok(self.content.borrow().clone())
        }

        fn write(&self, _path: &Path, content: &str) -> Result<(), CleanError> {
            self.writes.set(self.writes.get() + 1);
            *self.content.borrow_mut() = content.to_string();
            Ok(())
        }
    }

    fn options(mode: CleanMode) -> CleanOptions {
        CleanOptions {
            path: PathBuf::from("src/pages/Report.tsx"),
            mode,
            diff: false,
            summary: false,
            stdout_color: false,
            stderr_color: false,
        }
    }

    fn run(store: &OneFileStore, opts: &CleanOptions) -> (CleanReport, String, String) {
        let engine = RegexEngine::with_default_rules().unwrap();
        let theme = ThemeStyle::default_theme_map();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let report = run_clean_opts(&engine, store, opts, &theme, &mut out, &mut err).unwrap();
        (report, String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn changed_file_prints_cleaned_line() {
        let store = OneFileStore::new("a\n// MF_REPORT_X\nb\n");
        let (report, out, err) = run(&store, &options(CleanMode::Write));
        assert!(report.written);
        assert_eq!(out, "✅ Report.tsx cleaned\n");
        assert!(err.is_empty());
        assert_eq!(store.writes.get(), 1);
        assert_eq!(*store.content.borrow(), "a\nb\n");
    }

    #[test]
    fn unchanged_file_prints_no_change_line_and_never_writes() {
        let store = OneFileStore::new("const ok = true;\n");
        let (report, out, _) = run(&store, &options(CleanMode::Write));
        assert!(!report.changed);
        assert_eq!(out, "ℹ️ No changes applied to Report.tsx\n");
        assert_eq!(store.writes.get(), 0);
    }

    #[test]
    fn check_mode_reports_pending_change() {
        let store = OneFileStore::new("a\n// __MF_REPORT_X__\nb\n");
        let (report, out, _) = run(&store, &options(CleanMode::Check));
        assert!(report.changed && !report.written);
        assert_eq!(out, "🔎 Report.tsx would be cleaned\n");
        assert_eq!(store.writes.get(), 0);
    }

    #[test]
    fn diff_and_summary_go_to_stderr() {
        let store = OneFileStore::new("a\n// MF_REPORT_X\nb\n");
        let mut opts = options(CleanMode::Write);
        opts.diff = true;
        opts.summary = true;
        let (_, out, err) = run(&store, &opts);
        assert_eq!(out.lines().count(), 1);
        assert!(err.contains("-// MF_REPORT_X"));
        assert!(err.contains("line_comment_marker: 1"));
    }

    #[test]
    fn display_name_falls_back_to_path() {
        assert_eq!(display_name(Path::new("/tmp/x/Report.tsx")), "Report.tsx");
        assert_eq!(display_name(Path::new("/")), "/");
    }
}
