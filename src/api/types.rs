// src/api/types.rs
use serde::{Serialize, Deserialize};
use std::collections::HashMap;

use crate::models::{GenerationOptions, PassphraseOptions};

// Password generation request body. Field names are the service's form
// field identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PasswordGenerationRequest {
    /// Requested password length
    pub length: usize,
    /// Include uppercase letters
    pub use_upper: bool,
    /// Include lowercase letters
    pub use_lower: bool,
    /// Include digits
    pub use_digits: bool,
    /// Include special characters
    pub use_special: bool,
}

impl From<&GenerationOptions> for PasswordGenerationRequest {
    fn from(options: &GenerationOptions) -> Self {
        Self {
            length: options.length,
            use_upper: options.use_upper,
            use_lower: options.use_lower,
            use_digits: options.use_digits,
            use_special: options.use_special,
        }
    }
}

/// Password generation outcome. A response body is the `Failed` variant if
/// and only if it carries an `error` field; anything else must carry
/// `password_result`. Bodies with neither fail to decode.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PasswordGenerationResponse {
    Failed {
        error: String,
    },
    Generated {
        password_result: String,
        #[serde(default)]
        analysis: Option<AnalysisReport>,
    },
}

// Passphrase generation request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassphraseGenerationRequest {
    /// Number of words in the passphrase
    pub num_words: usize,
    /// Separator placed between words
    pub separator: String,
    /// Capitalize each word
    pub capitalize: bool,
}

impl From<&PassphraseOptions> for PassphraseGenerationRequest {
    fn from(options: &PassphraseOptions) -> Self {
        Self {
            num_words: options.num_words,
            separator: options.separator.clone(),
            capitalize: options.capitalize,
        }
    }
}

/// Passphrase generation outcome, discriminated the same way as
/// [`PasswordGenerationResponse`].
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PassphraseGenerationResponse {
    Failed {
        error: String,
    },
    Generated {
        passphrase: String,
        #[serde(default)]
        analysis: Option<AnalysisReport>,
    },
}

// Password analysis request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PasswordAnalysisRequest {
    /// Passwords to analyze
    pub passwords: Vec<String>,
    /// Query the Have I Been Pwned? API for each password
    pub check_pwned: bool,
}

/// Password analysis outcome
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PasswordAnalysisResponse {
    Failed {
        error: String,
    },
    Analyzed {
        analysis_results: Vec<AnalysisReport>,
    },
}

// The subset of the service's analysis report the client renders. The
// backend attaches more; unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisReport {
    /// Qualitative strength label ("Weak" .. "Very Strong")
    #[serde(default)]
    pub strength: Option<String>,
    /// Human-readable detail items
    #[serde(default)]
    pub details: Vec<AnalysisDetail>,
    /// zxcvbn summary
    #[serde(default)]
    pub zxcvbn_analysis: Option<ZxcvbnSummary>,
    /// Entropy metrics
    #[serde(default)]
    pub password_strength_metrics: Option<StrengthMetrics>,
    /// Complexity requirement checklist (requirement name -> passed)
    #[serde(default)]
    pub complexity_requirements: HashMap<String, bool>,
    /// Have I Been Pwned? check summary
    #[serde(default)]
    pub pwned_password_check: Option<PwnedCheck>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisDetail {
    /// Detail item title
    pub title: String,
    /// Detail item body
    pub explanation: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ZxcvbnSummary {
    /// zxcvbn score (0-4)
    #[serde(default)]
    pub score: Option<u8>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StrengthMetrics {
    /// Entropy in bits
    #[serde(default)]
    pub entropy: Option<f64>,
    /// Expected number of guesses
    #[serde(default)]
    pub expected_guesses: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PwnedCheck {
    /// Whether the password appeared in a known breach
    #[serde(default)]
    pub pwned: bool,
    /// Breach count, or a note when the check was skipped or failed
    #[serde(default)]
    pub pwned_count: Option<PwnedCount>,
}

// The service reports either a number or a note ("Not checked",
// "Error checking") in the same field.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PwnedCount {
    Count(u64),
    Note(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_request_serializes_the_five_form_fields() {
        let options = GenerationOptions {
            length: 16,
            use_upper: true,
            use_lower: true,
            use_digits: false,
            use_special: false,
        };
        let request = PasswordGenerationRequest::from(&options);
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "length": 16,
                "use_upper": true,
                "use_lower": true,
                "use_digits": false,
                "use_special": false,
            })
        );
    }

    #[test]
    fn response_with_password_is_the_success_variant() {
        let response: PasswordGenerationResponse =
            serde_json::from_str(r#"{"password_result": "Ab12Cd34", "analysis": null}"#).unwrap();
        match response {
            PasswordGenerationResponse::Generated { password_result, analysis } => {
                assert_eq!(password_result, "Ab12Cd34");
                assert!(analysis.is_none());
            }
            PasswordGenerationResponse::Failed { .. } => panic!("expected success variant"),
        }
    }

    #[test]
    fn response_with_error_is_the_error_variant() {
        let response: PasswordGenerationResponse =
            serde_json::from_str(r#"{"error": "invalid length"}"#).unwrap();
        match response {
            PasswordGenerationResponse::Failed { error } => assert_eq!(error, "invalid length"),
            PasswordGenerationResponse::Generated { .. } => panic!("expected error variant"),
        }
    }

    #[test]
    fn error_field_wins_when_both_fields_are_present() {
        // error present ⇔ error state, even next to a password_result
        let response: PasswordGenerationResponse = serde_json::from_str(
            r#"{"error": "rejected", "password_result": "should-not-surface"}"#,
        )
        .unwrap();
        assert!(matches!(response, PasswordGenerationResponse::Failed { .. }));
    }

    #[test]
    fn response_with_neither_field_fails_to_decode() {
        let result: Result<PasswordGenerationResponse, _> =
            serde_json::from_str(r#"{"message": "ok"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn generated_response_carries_the_analysis_subset() {
        let body = r#"{
            "password_result": "Xy9!aB2#",
            "analysis": {
                "strength": "Strong",
                "details": [{"title": "Length", "explanation": "8 characters"}],
                "zxcvbn_analysis": {"score": 3, "feedback": {"suggestions": []}},
                "password_strength_metrics": {"entropy": 52.4, "expected_guesses": 6.0e15},
                "complexity_requirements": {"min_length": false, "has_uppercase": true},
                "pwned_password_check": {"pwned": false, "pwned_count": "Not checked"},
                "performance": {"calculation_time_ms": 12.5}
            }
        }"#;
        let response: PasswordGenerationResponse = serde_json::from_str(body).unwrap();
        let analysis = match response {
            PasswordGenerationResponse::Generated { analysis, .. } => analysis.unwrap(),
            PasswordGenerationResponse::Failed { .. } => panic!("expected success variant"),
        };
        assert_eq!(analysis.strength.as_deref(), Some("Strong"));
        assert_eq!(analysis.details.len(), 1);
        assert_eq!(analysis.zxcvbn_analysis.unwrap().score, Some(3));
        assert_eq!(analysis.complexity_requirements.get("has_uppercase"), Some(&true));
        assert!(matches!(
            analysis.pwned_password_check.unwrap().pwned_count,
            Some(PwnedCount::Note(_))
        ));
    }

    #[test]
    fn passphrase_response_discriminates_like_passwords() {
        let ok: PassphraseGenerationResponse =
            serde_json::from_str(r#"{"passphrase": "horse-staple-battery-correct"}"#).unwrap();
        assert!(matches!(ok, PassphraseGenerationResponse::Generated { .. }));

        let err: PassphraseGenerationResponse =
            serde_json::from_str(r#"{"error": "CSRF token missing or invalid."}"#).unwrap();
        assert!(matches!(err, PassphraseGenerationResponse::Failed { .. }));
    }

    #[test]
    fn analysis_response_decodes_a_result_list() {
        let response: PasswordAnalysisResponse = serde_json::from_str(
            r#"{"analysis_results": [{"strength": "Weak", "details": []}, {"strength": "Good"}]}"#,
        )
        .unwrap();
        match response {
            PasswordAnalysisResponse::Analyzed { analysis_results } => {
                assert_eq!(analysis_results.len(), 2);
                assert_eq!(analysis_results[1].strength.as_deref(), Some("Good"));
            }
            PasswordAnalysisResponse::Failed { .. } => panic!("expected success variant"),
        }
    }
}
