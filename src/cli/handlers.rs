// src/cli/handlers.rs
use anyhow::Result;
use log::{debug, error, warn};

use crate::api::ApiClient;
use crate::api::types::{
    PasswordAnalysisRequest, PasswordAnalysisResponse,
    PasswordGenerationRequest, PasswordGenerationResponse,
    PassphraseGenerationRequest, PassphraseGenerationResponse,
};
use crate::models::{GenerationOptions, PassphraseOptions};
use crate::render::{
    ResultRegion, GENERIC_FAILURE_MESSAGE, GENERIC_PASSPHRASE_FAILURE_MESSAGE,
};
use crate::utils::mask_secret;

// Handlers for form activations. Each activation builds its request fresh
// from the options it is handed, issues exactly one POST, and routes the
// outcome to the result region. No retry, no de-duplication.

pub async fn handle_generate(
    client: &ApiClient,
    region: &mut ResultRegion,
    options: &GenerationOptions,
    json: bool,
) -> Result<()> {
    let request = PasswordGenerationRequest::from(options);
    debug!("Requesting password: {:?}", request);

    match client.generate_password(&request).await {
        Ok(PasswordGenerationResponse::Generated { password_result, analysis }) => {
            if json {
                println!("{}", serde_json::json!({ "password_result": password_result }));
            } else {
                region.show_password(&password_result);
                region.show_analysis(analysis.as_ref());
            }
        }
        Ok(PasswordGenerationResponse::Failed { error }) => {
            if json {
                println!("{}", serde_json::json!({ "error": error }));
            } else {
                region.error_dialog(&format!("Error: {}", error));
            }
        }
        Err(e) => {
            error!("Password generation request failed: {}", e);
            if json {
                println!("{}", serde_json::json!({ "error": GENERIC_FAILURE_MESSAGE }));
            } else {
                region.error_dialog(GENERIC_FAILURE_MESSAGE);
            }
        }
    }

    Ok(())
}

pub async fn handle_passphrase(
    client: &ApiClient,
    region: &mut ResultRegion,
    options: &PassphraseOptions,
    json: bool,
) -> Result<()> {
    let request = PassphraseGenerationRequest::from(options);
    debug!("Requesting passphrase: {:?}", request);

    match client.generate_passphrase(&request).await {
        Ok(PassphraseGenerationResponse::Generated { passphrase, analysis }) => {
            if json {
                println!("{}", serde_json::json!({ "passphrase": passphrase }));
            } else {
                region.show_passphrase(&passphrase);
                region.show_analysis(analysis.as_ref());
            }
        }
        Ok(PassphraseGenerationResponse::Failed { error }) => {
            if json {
                println!("{}", serde_json::json!({ "error": error }));
            } else {
                region.error_dialog(&format!("Error: {}", error));
            }
        }
        Err(e) => {
            error!("Passphrase generation request failed: {}", e);
            if json {
                println!("{}", serde_json::json!({ "error": GENERIC_PASSPHRASE_FAILURE_MESSAGE }));
            } else {
                region.error_dialog(GENERIC_PASSPHRASE_FAILURE_MESSAGE);
            }
        }
    }

    Ok(())
}

pub async fn handle_analyze(
    client: &ApiClient,
    region: &mut ResultRegion,
    passwords: &[String],
    check_pwned: bool,
    json: bool,
) -> Result<()> {
    for password in passwords {
        debug!("Submitting {} for analysis", mask_secret(password));
    }

    let request = PasswordAnalysisRequest {
        passwords: passwords.to_vec(),
        check_pwned,
    };

    match client.analyze_passwords(&request).await {
        Ok(PasswordAnalysisResponse::Analyzed { analysis_results }) => {
            if analysis_results.len() != passwords.len() {
                // The service drops blank entries
                warn!(
                    "Submitted {} passwords, got {} reports",
                    passwords.len(),
                    analysis_results.len()
                );
            }
            if json {
                let strengths: Vec<_> =
                    analysis_results.iter().map(|r| r.strength.clone()).collect();
                println!("{}", serde_json::json!({ "strengths": strengths }));
            } else {
                for (index, report) in analysis_results.iter().enumerate() {
                    println!();
                    println!("🔍 Password {} of {}", index + 1, analysis_results.len());
                    region.show_analysis(Some(report));
                }
            }
        }
        Ok(PasswordAnalysisResponse::Failed { error }) => {
            if json {
                println!("{}", serde_json::json!({ "error": error }));
            } else {
                region.error_dialog(&format!("Error: {}", error));
            }
        }
        Err(e) => {
            error!("Password analysis request failed: {}", e);
            if json {
                println!("{}", serde_json::json!({ "error": "Analysis failed." }));
            } else {
                region.error_dialog("An error occurred during password analysis.");
            }
        }
    }

    Ok(())
}

pub async fn handle_token(client: &ApiClient, json: bool) -> Result<()> {
    use anyhow::Context;

    let token = client
        .fetch_token()
        .await
        .context("Failed to fetch the CSRF token")?;

    if json {
        println!("{}", serde_json::json!({ "csrf_token": token }));
    } else {
        println!("CSRF token: {}", token);
    }

    Ok(())
}
