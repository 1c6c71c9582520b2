//! Entry point for open-unity.
use std::process::ExitCode;

use clap::Parser;
use open_unity::{
    cli::{execute_cli_command, LaunchProfileArgs, RuntimeExit},
    lib::telemetry,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(code) => code,
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<ExitCode, RuntimeExit> {
    telemetry::init_tracing().map_err(RuntimeExit::from_error)?;
    let args = LaunchProfileArgs::parse();
    let parsed = args.into_command().map_err(RuntimeExit::from_error)?;
    execute_cli_command(parsed)
        .await
        .map_err(RuntimeExit::from_error)
}
