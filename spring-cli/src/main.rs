//! Binary crate for the `spring-cli` tool.
//!
//! This crate focuses on:
//! - Logging setup (stderr, `RUST_LOG`)
//! - Wiring configuration, provider and notifier together
//! - Mapping the result onto stdout and the exit status

use std::{io::IsTerminal, process::ExitCode};

use tracing::error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .init();

    match cli::run().await {
        Ok(outcome) => {
            println!("{}", outcome.status_line());
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
