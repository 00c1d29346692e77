//! LazyFolio - Terminal portfolio and resume viewer
//!
//! Renders a single-page portfolio in the terminal: hero, about,
//! filterable skills, experience, and a contact card with one-key
//! email copy. Sections fade in the first time they scroll into view.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use lazyfolio::cli::{self, ExitCode};
use lazyfolio::config::Config;
use lazyfolio::constants::APP_BINARY_NAME;
use lazyfolio::{content, tui};

/// LazyFolio - Terminal portfolio and resume viewer
#[derive(Parser, Debug)]
#[command(name = "lazyfolio", author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Path to a portfolio TOML file (defaults to the configured path,
    /// then the built-in portfolio)
    #[arg(value_name = "FILE")]
    content: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check portfolio content and report problems
    Validate(cli::ValidateArgs),
    /// List skills, optionally filtered by group
    Skills(cli::SkillsArgs),
    /// Render the portfolio to Markdown or plain text
    Export(cli::ExportArgs),
    /// Write a starter portfolio file to edit
    Init(cli::InitArgs),
}

fn main() {
    let args = Cli::parse();

    if let Some(command) = args.command {
        let result = match command {
            Command::Validate(args) => args.execute(),
            Command::Skills(args) => args.execute(),
            Command::Export(args) => args.execute(),
            Command::Init(args) => args.execute(),
        };
        match result {
            Ok(()) => std::process::exit(ExitCode::Success.code()),
            Err(err) => {
                eprintln!("Error: {err}");
                std::process::exit(err.exit_code().code());
            }
        }
    }

    if let Err(err) = run_viewer(args.content) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

/// Load content per the resolution order and run the TUI.
fn run_viewer(content_path: Option<PathBuf>) -> Result<()> {
    // A broken config should not keep the viewer from starting
    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Warning: Failed to load config: {err:#}");
            eprintln!("Continuing with defaults.");
            Config::default()
        }
    };

    if let Some(path) = &content_path {
        if !path.exists() {
            eprintln!("Error: Content file not found: {}", path.display());
            eprintln!();
            eprintln!("Provide a path to a portfolio TOML file.");
            eprintln!();
            eprintln!("Examples:");
            eprintln!("  {APP_BINARY_NAME} portfolio.toml");
            eprintln!("  {APP_BINARY_NAME} init        (write a starter file)");
            eprintln!("  {APP_BINARY_NAME}             (view the built-in portfolio)");
            std::process::exit(1);
        }
    }

    let portfolio = content::resolve(content_path.as_deref(), config.paths.content.as_deref())?;

    // Refuse to render content that fails validation; warnings are fine
    let report = portfolio.validate();
    if !report.is_valid() {
        eprintln!("Error: Content failed validation:");
        for issue in &report.errors {
            eprintln!("  ✗ [{}] {}", issue.area, issue.message);
        }
        eprintln!();
        eprintln!("Run `{APP_BINARY_NAME} validate --content <FILE>` for the full report.");
        std::process::exit(1);
    }

    let mut terminal = tui::setup_terminal()?;
    let mut app_state = tui::AppState::new(portfolio, config);

    // Run main TUI loop
    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore terminal before reporting any loop error
    tui::restore_terminal(terminal)?;
    result
}
