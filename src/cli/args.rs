// CLI argument definitions using Clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Jira Xray results uploader for BDD test runs
#[derive(Parser, Debug)]
#[command(name = "bdd-xray")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Upload saved BDD test reports to Jira Xray", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose debug output
    #[arg(short = 'v', long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upload a saved report file to Xray
    Upload(UploadArgs),

    /// Show the resolved Jira connection settings
    Config,
}

#[derive(Args, Debug, Clone)]
pub struct UploadArgs {
    /// Report file written by the Xray reporter (a JSON array of payloads,
    /// or a single payload object)
    #[arg(required = true)]
    pub report: PathBuf,

    /// Target an Xray cloud deployment instead of server/DC
    #[arg(long, default_value_t = false)]
    pub cloud: bool,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Validate the report without sending anything
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}
