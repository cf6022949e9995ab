mod cli;
mod commands;
mod error;

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::error::CliError;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error[{}]: {error}", error.code());
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run() -> Result<ExitCode, CliError> {
    let cli = Cli::parse();

    let outcome = commands::run(&cli).await?;
    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&outcome.data)?
    } else {
        serde_json::to_string(&outcome.data)?
    };
    println!("{rendered}");

    if !outcome.ok {
        return Ok(ExitCode::from(3));
    }

    Ok(ExitCode::SUCCESS)
}
