// mfclean/src/main.rs
//! mfclean entry point.
//!
//! Parses arguments, initialises logging, builds the regex engine over the
//! built-in rules and cleans one file. Any error is printed as a themed
//! `Error:` line on stderr and the process exits non-zero.

use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;
use log::info;
use std::io;
use std::process::ExitCode;

use mfclean::cli::Cli;
use mfclean::logger;
use mfclean::ui::output_format;
use mfclean::ui::theme::{build_theme_map, ThemeStyle};
use mfclean::{run_clean_opts, CleanOptions};
use mfclean_core::{CleanMode, FsSourceStore, RegexEngine};

fn main() -> ExitCode {
    let args = Cli::parse();

    logger::init_logger(logger::level_from_flags(args.quiet, args.debug));
    info!("mfclean started. Version: {}", env!("CARGO_PKG_VERSION"));

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            // Errors always use the built-in theme.
            let _ = output_format::print_error_message(
                &mut io::stderr(),
                &format!("Error: {:#}", e),
                &ThemeStyle::default_theme_map(),
                io::stderr().is_terminal(),
            );
            ExitCode::FAILURE
        }
    }
}

fn run(args: Cli) -> Result<ExitCode> {
    let theme_map = build_theme_map(args.theme.as_deref()).context("Theme error")?;
    let engine = RegexEngine::with_default_rules()?;

    let mode = if args.check { CleanMode::Check } else { CleanMode::Write };
    let opts = CleanOptions {
        path: args.path,
        mode,
        diff: args.diff,
        summary: args.summary,
        stdout_color: io::stdout().is_terminal(),
        stderr_color: io::stderr().is_terminal(),
    };

    let stdout = io::stdout();
    let stderr = io::stderr();
    let report = run_clean_opts(
        &engine,
        FsSourceStore,
        &opts,
        &theme_map,
        &mut stdout.lock(),
        &mut stderr.lock(),
    )?;

    if mode == CleanMode::Check && report.changed {
        return Ok(ExitCode::from(1));
    }
    Ok(ExitCode::SUCCESS)
}
