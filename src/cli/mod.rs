// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod menu;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Base URL of the password generation service
    #[arg(long, short, env = "SERVICE_URL")]
    pub url: Option<String>,

    /// CSRF token to use instead of scraping the form page
    #[arg(long, env = "CSRF_TOKEN")]
    pub csrf_token: Option<String>,

    /// Use JSON for output (for scripting)
    #[arg(long)]
    pub json: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
