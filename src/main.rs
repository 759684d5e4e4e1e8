//! Takeoff CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use takeoff::cli::{AppContext, Cli, CommandDispatcher};
use takeoff::config::load_config;
use takeoff::ui::{create_ui, OutputMode, Theme};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr so they never land inside a redrawn menu.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("takeoff=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("takeoff=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Takeoff starting with args: {:?}", cli);

    // Determine output mode
    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            let mut ui = create_ui(true, output_mode, Theme::for_terminal(&Default::default()));
            ui.error(&format!("Error: {}", e));
            return ExitCode::from(1);
        }
    };

    let theme = Theme::for_terminal(&config.theme);
    let mut ui = create_ui(true, output_mode, theme);

    let ctx = AppContext::new(config);
    let dispatcher = CommandDispatcher::new(&ctx);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
