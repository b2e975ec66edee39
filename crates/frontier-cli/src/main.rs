use clap::Parser;
use reqwest::cookie::Jar;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli_args;
mod cli_command;
mod modules;
#[cfg(test)]
mod tests;

use crate::cli_args::Cli;
use crate::cli_command::handle_probes;
use crate::modules::auth::{signin_flow, OtpSource, PostgresOtpSource, StaticOtpSource};
use crate::modules::system::http::session_client;
use crate::modules::system::ProbeContext;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    let jar = Arc::new(Jar::default());
    let client = session_client(Arc::clone(&jar))?;

    let otp_source: Box<dyn OtpSource> = match cli.otp.as_deref() {
        Some(code) => Box::new(StaticOtpSource::new(code)),
        None => Box::new(PostgresOtpSource::from_args(&cli.db)?),
    };

    let session = match signin_flow(
        &client,
        &jar,
        &cli.base_url,
        &cli.email,
        &cli.strategy,
        otp_source.as_ref(),
    )
    .await
    {
        Ok(session) => session,
        Err(err) => {
            println!();
            println!("Authentication failed for {}", cli.email);
            return Err(err.into());
        }
    };

    println!();
    println!("Authentication completed for {}", cli.email);
    if !session.headers.is_empty() {
        println!();
        println!("Session Information:");
        for (name, value) in &session.headers {
            println!("   {name}: {value}");
        }
    }

    if session.cookies.is_empty() {
        info!("no session cookies; skipping probes");
        return Ok(());
    }

    info!(cookies = session.cookies.len(), "session established");
    let ctx = ProbeContext {
        client: &client,
        base_url: &cli.base_url,
    };
    let summary = handle_probes(&cli.probes, !cli.no_pagination, &ctx).await;
    if summary.ran() > 0 || summary.skipped > 0 {
        info!(
            passed = summary.passed,
            failed = summary.failed,
            skipped = summary.skipped,
            "probes finished"
        );
    }

    Ok(())
}

fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
