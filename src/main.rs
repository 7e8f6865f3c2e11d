// Main entry point for bdd-xray

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde_json::Value;
use tracing::info;

use bdd_xray::auth::AuthMethod;
use bdd_xray::cli::{Cli, Commands, UploadArgs};
use bdd_xray::config::JiraConfig;
use bdd_xray::model::Deployment;
use bdd_xray::publisher::{XrayPublisher, validate_payload};

use std::path::Path;
use std::time::Duration;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing
    let filter = if cli.verbose {
        "bdd_xray=debug,warn"
    } else {
        "bdd_xray=info,warn"
    };

    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .event_format(bdd_xray::logging::CompactFormatter)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .init();

    if cli.verbose {
        info!("Starting bdd-xray v{}", env!("CARGO_PKG_VERSION"));
    }

    match cli.command {
        Commands::Upload(args) => upload(&args),
        Commands::Config => show_config(),
    }
}

fn upload(args: &UploadArgs) -> Result<()> {
    let deployment = if args.cloud {
        Deployment::Cloud
    } else {
        Deployment::Server
    };

    let payloads = read_report(&args.report)?;
    for payload in &payloads {
        validate_payload(payload, deployment)?;
    }
    info!(
        "{} payload(s) in {}",
        payloads.len(),
        args.report.display()
    );

    if args.dry_run {
        println!(
            "{} payload(s) valid for {}, nothing sent (dry run)",
            payloads.len(),
            args.report.display()
        );
        return Ok(());
    }

    let config = JiraConfig::from_env()?;
    let timeout = args.timeout.map(Duration::from_secs);
    let publisher = XrayPublisher::with_timeout(&config.base_url, deployment, config.auth(), timeout)?;
    for payload in &payloads {
        let key = publisher.publish(payload)?;
        println!("Uploaded results to Xray test execution {key}");
    }
    Ok(())
}

/// Read a report file: either a JSON array of payloads or one payload.
fn read_report(path: &Path) -> Result<Vec<Value>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;
    match value {
        Value::Array(payloads) => Ok(payloads),
        payload @ Value::Object(_) => Ok(vec![payload]),
        _ => bail!("{} holds neither a payload nor an array", path.display()),
    }
}

fn show_config() -> Result<()> {
    let config = JiraConfig::from_env()?;
    println!("Jira base URL: {}", config.base_url);
    match config.auth() {
        AuthMethod::Bearer(_) => println!("Authentication: bearer (client id/secret)"),
        AuthMethod::Token(_) => println!("Authentication: personal access token"),
        AuthMethod::Basic { username, .. } if username.is_empty() => {
            println!("Authentication: none configured, falling back to basic auth")
        }
        AuthMethod::Basic { username, .. } => {
            println!("Authentication: basic auth as {username}")
        }
    }
    Ok(())
}
