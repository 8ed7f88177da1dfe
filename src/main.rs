//! Anvil CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use anvil::commands::Dispatcher;
use anvil::context::Context;
use anvil::ui::TerminalOutput;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Anvil - console runner for framework projects.
///
/// The outer surface parses only global flags and the command identifier;
/// everything after the command name is handed verbatim to the command's
/// own option scanner.
#[derive(Debug, Parser)]
#[command(name = "anvil")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long)]
    project: Option<PathBuf>,

    /// Minimal output
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Command to run, e.g. `migrate` or `create:migration`
    command: Option<String>,

    /// Raw arguments for the command's own option scanner
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("anvil=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("anvil=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Anvil starting with args: {:?}", cli);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let project_root = cli
        .project
        .clone()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    let mut out = TerminalOutput::new(cli.quiet);

    let context = Context::new(
        cli.command.as_deref().unwrap_or("welcome"),
        cli.args.clone(),
    );
    let dispatcher = Dispatcher::new(project_root);

    // The dispatch path emits the error line; the exit code carries the
    // fault's classification.
    match dispatcher.dispatch(context, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(failure) => {
            tracing::debug!(command = %failure.command, code = failure.code, "exiting on failure");
            ExitCode::from(failure.code)
        }
    }
}
