use std::{
    io::{self, IsTerminal},
    process::ExitCode,
};

use clap::Parser;
use plugin_deploy::cli::Cli;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let (ctx, command) = Cli::parse().into_parts();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();

    match command.run(&ctx).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
