//! Command-line interface for `mfclean`.

use clap::Parser;
use std::path::PathBuf;

/// File cleaned when no path is given.
pub const DEFAULT_TARGET: &str = "src/pages/Report.tsx";

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "mfclean",
    version = env!("CARGO_PKG_VERSION"),
    about = "Strip MF_REPORT development markers from a source file",
    long_about = "mfclean removes temporary MF_REPORT_* marker comments, MF_REPORT_DEBUG \
                  console.warn statements and their no-console lint directives from one \
                  source file, collapses the blank lines they leave behind, and rewrites the \
                  file only if something changed.",
)]
pub struct Cli {
    /// File to clean in place.
    #[arg(value_name = "PATH", env = "MFCLEAN_TARGET", default_value = DEFAULT_TARGET)]
    pub path: PathBuf,

    /// Report whether the file would change without writing it.
    #[arg(long, short = 'c', help = "Do not write; exit with status 1 if the file would change.")]
    pub check: bool,

    /// Show a unified diff of the changes on stderr.
    #[arg(long, short = 'D', help = "Show a unified diff of the changes on stderr.")]
    pub diff: bool,

    /// Print how many markers each rule removed.
    #[arg(long, short = 's', help = "Print per-rule removal counts on stderr.")]
    pub summary: bool,

    #[arg(long, short = 'q', help = "Suppress all log output.")]
    pub quiet: bool,

    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    /// Specify the path to a custom YAML theme file.
    #[arg(
        long = "theme",
        value_name = "FILE",
        help = "Specify the path to a custom YAML theme file."
    )]
    pub theme: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn explicit_path_and_flags_parse() {
        let cli =
            Cli::try_parse_from(["mfclean", "-c", "-D", "--summary", "app/Report.tsx"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("app/Report.tsx"));
        assert!(cli.check && cli.diff && cli.summary);
        assert!(!cli.quiet && !cli.debug);
    }
}
