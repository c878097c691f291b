//! nippo: daily work report from your git commits
//!
//! This binary prints a report of today's (or a given day's) commits by the
//! configured git user, grouped into categories of work.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use nippo::{Config, ViewState, generate};
use tracing::{debug, info};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let config = Config::parse();

    // Initialize tracing subscriber on stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    config.validate().context("Invalid configuration")?;
    debug!(?config, "configuration loaded");

    if !config.json {
        eprintln!("{}", ViewState::Loading);
    }

    let state = generate(config).await;
    match state {
        ViewState::Success(report) => {
            println!("{report}");
            info!("report generated");
            Ok(ExitCode::SUCCESS)
        }
        other => {
            eprintln!("{other}");
            Ok(ExitCode::FAILURE)
        }
    }
}
