use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use version_gate::cli::{self, Cli};
use version_gate::{config, git, ui};

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(console::colors_enabled_stderr())
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> Result<ExitCode> {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // Usage errors exit with 1 like every other failure; help/version exit 0.
            let code = if e.use_stderr() { 1 } else { 0 };
            e.print()?;
            return Ok(ExitCode::from(code));
        }
    };

    init_logging(args.verbose);

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            return Ok(ExitCode::from(1));
        }
    };

    let repo_path = args.repo.clone();
    let outcome = cli::execute(&args.command, &config, || {
        git::open(config.git.backend, &config.git.program, &repo_path)
    });

    Ok(outcome.into())
}
