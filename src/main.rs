mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod output;
mod source;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use app::{build_context, run};
use cli::Cli;
use config::Config;

/// Log to stderr; RUST_LOG wins, otherwise warn (debug with --debug)
fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let config = Config::load();
    let cli = cli.with_config(&config);

    let result = build_context(&cli, &config).and_then(|ctx| run(&ctx));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
