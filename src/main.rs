use anyhow::Result;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use git_semvers::cli;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "GIT_SEMVERS_LOG";

fn main() -> Result<ExitCode> {
    // Logs go to stderr so stdout carries only versions
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise logging: {}", e))?;

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    // cli::run flushes its own output; a write failure is already OutputError
    let code = cli::run(std::env::args_os(), &mut out, &mut err);

    Ok(code.into())
}
