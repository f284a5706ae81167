// src/cli/menu.rs
use inquire::{Confirm, Password, Select, Text};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::Result;

use crate::api::ApiClient;
use crate::cli::handlers;
use crate::core::config::Config;
use crate::models::{GenerationOptions, PassphraseOptions};
use crate::render::ResultRegion;

pub async fn run_cli_menu(
    client: &ApiClient,
    config: &Config,
    region: &mut ResultRegion,
    should_exit: Arc<AtomicBool>,
) -> Result<()> {
    println!("🔐 Welcome to");
    println!("╔══════════════════════════════════════╗");
    println!("║          🔐 PASSFORGE CLIENT         ║");
    println!("╚══════════════════════════════════════╝");
    println!("Service: {}", client.endpoints().generate_url);

    // Main application loop
    let mut exit_requested = false;
    while !exit_requested && !should_exit.load(Ordering::SeqCst) {
        let options = vec![
            "🔐  Generate a password",
            "🧩  Generate a passphrase",
            "🔍  Analyze passwords",
            "🎟️  Show CSRF token",
            "❌  Exit",
        ];

        // Use a blocking task so the Ctrl+C flag can be checked afterwards
        let selection_result = tokio::task::spawn_blocking(move || {
            Select::new("Choose an option:", options)
                .with_help_message("Use arrow keys to navigate, Enter to select. Ctrl+C to exit.")
                .prompt_skippable()
        })
        .await?;

        if should_exit.load(Ordering::SeqCst) {
            break;
        }

        match selection_result {
            Ok(Some(selection)) => {
                match selection {
                    "🔐  Generate a password" => {
                        // The five form fields, re-read fresh on every activation
                        let length: usize = Text::new("Password length:")
                            .with_default(&config.default_password_length.to_string())
                            .prompt()
                            .and_then(|s| s.parse().map_err(|_| inquire::InquireError::Custom("Invalid number".into())))?;

                        let use_upper = Confirm::new("Include uppercase letters?")
                            .with_default(config.default_use_upper)
                            .prompt()?;

                        let use_lower = Confirm::new("Include lowercase letters?")
                            .with_default(config.default_use_lower)
                            .prompt()?;

                        let use_digits = Confirm::new("Include digits?")
                            .with_default(config.default_use_digits)
                            .prompt()?;

                        let use_special = Confirm::new("Include special characters?")
                            .with_default(config.default_use_special)
                            .prompt()?;

                        let generation_options = GenerationOptions {
                            length,
                            use_upper,
                            use_lower,
                            use_digits,
                            use_special,
                        };

                        handlers::handle_generate(client, region, &generation_options, false).await?;

                        // Wait for user to press enter
                        if region.is_visible() {
                            let _ = Text::new("Press enter to continue...").prompt();
                        }
                    }
                    "🧩  Generate a passphrase" => {
                        let num_words: usize = Text::new("Number of words:")
                            .with_default(&config.default_num_words.to_string())
                            .prompt()
                            .and_then(|s| s.parse().map_err(|_| inquire::InquireError::Custom("Invalid number".into())))?;

                        let separator = Text::new("Word separator:")
                            .with_default(&config.default_separator)
                            .prompt()?;

                        let capitalize = Confirm::new("Capitalize each word?")
                            .with_default(config.default_capitalize)
                            .prompt()?;

                        let passphrase_options = PassphraseOptions {
                            num_words,
                            separator,
                            capitalize,
                        };

                        handlers::handle_passphrase(client, region, &passphrase_options, false).await?;

                        if region.is_visible() {
                            let _ = Text::new("Press enter to continue...").prompt();
                        }
                    }
                    "🔍  Analyze passwords" => {
                        // Collect one or more passwords without echoing them
                        let mut passwords = Vec::new();
                        loop {
                            let password = Password::new("Password to analyze:")
                                .with_display_mode(inquire::PasswordDisplayMode::Hidden)
                                .without_confirmation()
                                .prompt()?;

                            if !password.trim().is_empty() {
                                passwords.push(password);
                            }

                            let another = Confirm::new("Analyze another password?")
                                .with_default(false)
                                .prompt()?;
                            if !another {
                                break;
                            }
                        }

                        if passwords.is_empty() {
                            println!("❗ No passwords entered.");
                            continue;
                        }

                        let check_pwned = Confirm::new("Check against known breaches?")
                            .with_default(true)
                            .prompt()?;

                        handlers::handle_analyze(client, region, &passwords, check_pwned, false).await?;

                        let _ = Text::new("Press enter to continue...").prompt();
                    }
                    "🎟️  Show CSRF token" => {
                        match handlers::handle_token(client, false).await {
                            Ok(_) => {}
                            Err(e) => println!("❌ Failed to fetch CSRF token: {}", e),
                        }

                        let _ = Text::new("Press enter to continue...").prompt();
                    }
                    "❌  Exit" => {
                        println!("👋 Shutting down PassForge...");
                        should_exit.store(true, Ordering::SeqCst);
                        exit_requested = true;
                    }
                    _ => {}
                }
            }
            Ok(None) => {
                if should_exit.load(Ordering::SeqCst) {
                    break;
                }
                // Sleep briefly to avoid consuming CPU while waiting for input
                thread::sleep(Duration::from_millis(100));
            }
            Err(e) => {
                println!("Error: {}", e);
                break;
            }
        }
    }

    Ok(())
}
