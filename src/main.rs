use clap::Parser;
use std::path::Path;
use std::sync::{Arc, atomic::{AtomicBool, Ordering}};

use anyhow::Context;

use passforge::api::{ApiClient, TokenSource};
use passforge::cli::{self, Args, CliCommand};
use passforge::core::config::Config;
use passforge::models::{GenerationOptions, PassphraseOptions};
use passforge::render::ResultRegion;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    let mut config = Config::load();
    if let Some(url) = &args.url {
        config.base_url = url.clone();
    }

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .init();

    log::info!("🔐 Starting PassForge - password service client");
    log::debug!("Command line args: {:?}", args);
    log::debug!("Loaded config: {:?}", config);

    // Token source: fixed token if supplied, otherwise the form page's
    // csrf-token meta tag
    let token_source = match &args.csrf_token {
        Some(token) => TokenSource::Fixed(token.clone()),
        None => TokenSource::MetaTag {
            page_url: config.page_url(),
        },
    };

    let client = ApiClient::new(&config, token_source)
        .context("Failed to build the HTTP client")?;

    let should_exit = Arc::new(AtomicBool::new(false));
    {
        let should_exit = Arc::clone(&should_exit);
        ctrlc::set_handler(move || {
            log::info!("🔴 Ctrl+C received. Shutting down...");
            should_exit.store(true, Ordering::SeqCst);
            std::process::exit(0);
        })
        .expect("Failed to set Ctrl+C handler");
    }

    // One-shot command mode
    if let Some(command) = args.command {
        let mut region = ResultRegion::new(false);

        match command {
            CliCommand::Generate { length, no_upper, no_lower, no_digits, no_special } => {
                let options = GenerationOptions {
                    length: length.unwrap_or(config.default_password_length),
                    use_upper: config.default_use_upper && !no_upper,
                    use_lower: config.default_use_lower && !no_lower,
                    use_digits: config.default_use_digits && !no_digits,
                    use_special: config.default_use_special && !no_special,
                };
                cli::handlers::handle_generate(&client, &mut region, &options, args.json).await?;
            }
            CliCommand::Passphrase { num_words, separator, capitalize } => {
                let options = PassphraseOptions {
                    num_words: num_words.unwrap_or(config.default_num_words),
                    separator: separator.unwrap_or_else(|| config.default_separator.clone()),
                    capitalize: capitalize || config.default_capitalize,
                };
                cli::handlers::handle_passphrase(&client, &mut region, &options, args.json).await?;
            }
            CliCommand::Analyze { passwords, skip_pwned } => {
                cli::handlers::handle_analyze(&client, &mut region, &passwords, !skip_pwned, args.json)
                    .await?;
            }
            CliCommand::Token => {
                cli::handlers::handle_token(&client, args.json).await?;
            }
        }

        return Ok(());
    }

    // CLI interactive menu
    log::debug!("Launching interactive menu");
    let mut region = ResultRegion::new(true);
    cli::menu::run_cli_menu(&client, &config, &mut region, should_exit).await?;

    log::info!("✅ PassForge shutdown complete.");
    Ok(())
}
