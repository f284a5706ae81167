// src/render/mod.rs
use console::style;
use log::warn;

use crate::api::types::{AnalysisReport, PwnedCount};
use crate::utils::score_meter;

/// Message shown when a request fails for any reason other than an error
/// reported by the service itself.
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred during password generation.";

/// Passphrase counterpart of [`GENERIC_FAILURE_MESSAGE`]
pub const GENERIC_PASSPHRASE_FAILURE_MESSAGE: &str =
    "An error occurred during passphrase generation.";

// The result region: the output area toggled between visible and hidden.
// Every error dialog hides it first, so the region is never left showing a
// stale result next to an error.
pub struct ResultRegion {
    visible: bool,
    interactive: bool,
}

impl ResultRegion {
    pub fn new(interactive: bool) -> Self {
        Self {
            visible: false,
            interactive,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Write the generated password into the output area and make the
    /// region visible
    pub fn show_password(&mut self, password: &str) {
        self.visible = true;
        println!();
        println!("{}", style("🔐 Generated Password").bold());
        println!("{}", style(password).green().bold());
    }

    /// Write the generated passphrase into the output area and make the
    /// region visible
    pub fn show_passphrase(&mut self, passphrase: &str) {
        self.visible = true;
        println!();
        println!("{}", style("🔐 Generated Passphrase").bold());
        println!("{}", style(passphrase).green().bold());
    }

    /// Render the analysis block. A response without one is logged and
    /// tolerated.
    pub fn show_analysis(&self, analysis: Option<&AnalysisReport>) {
        let report = match analysis {
            Some(report) => report,
            None => {
                warn!("No analysis attached to the response, skipping the analysis block");
                return;
            }
        };

        println!();
        println!("{}", style("📊 Analysis").bold());

        if let Some(strength) = &report.strength {
            let label = match strength.as_str() {
                "Weak" => style(strength.as_str()).red(),
                "Good" => style(strength.as_str()).yellow(),
                _ => style(strength.as_str()).green(),
            };
            println!("Strength: {}", label);
        }

        if let Some(zxcvbn) = &report.zxcvbn_analysis {
            if let Some(score) = zxcvbn.score {
                println!("Score: {}", score_meter(score));
            }
        }

        if let Some(metrics) = &report.password_strength_metrics {
            if let Some(entropy) = metrics.entropy {
                println!("Entropy: {:.1} bits", entropy);
            }
        }

        for detail in &report.details {
            println!("{}: {}", style(&detail.title).bold(), detail.explanation);
        }

        if !report.complexity_requirements.is_empty() {
            let mut requirements: Vec<_> = report.complexity_requirements.iter().collect();
            requirements.sort_by_key(|(name, _)| name.as_str());
            println!("Complexity requirements:");
            for (name, passed) in requirements {
                let mark = if *passed { "✅" } else { "❌" };
                println!("  {} {}", mark, name.replace('_', " "));
            }
        }

        if let Some(pwned) = &report.pwned_password_check {
            match (&pwned.pwned_count, pwned.pwned) {
                (Some(PwnedCount::Count(count)), true) => {
                    println!("{}", style(format!("⚠️ Found {} times in known breaches", count)).red());
                }
                (Some(PwnedCount::Note(note)), _) => println!("Pwned check: {}", note),
                _ => println!("Not found in known breaches."),
            }
        }
    }

    /// Hide the result region
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Blocking error dialog. Hides the result region first, so the page
    /// is left in a consistent "no result shown" state.
    pub fn error_dialog(&mut self, message: &str) {
        self.hide();
        println!();
        println!("{}", style(message).red().bold());
        if self.interactive {
            let _ = inquire::Text::new("Press enter to continue...").prompt();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_starts_hidden() {
        let region = ResultRegion::new(false);
        assert!(!region.is_visible());
    }

    #[test]
    fn showing_a_password_makes_the_region_visible() {
        let mut region = ResultRegion::new(false);
        region.show_password("Ab12Cd34");
        assert!(region.is_visible());
    }

    #[test]
    fn error_dialog_hides_a_visible_region() {
        let mut region = ResultRegion::new(false);
        region.show_password("Ab12Cd34");
        region.error_dialog("Error: invalid length");
        assert!(!region.is_visible());
    }

    #[test]
    fn generic_dialog_leaves_the_region_hidden() {
        let mut region = ResultRegion::new(false);
        region.error_dialog(GENERIC_FAILURE_MESSAGE);
        assert!(!region.is_visible());
    }

    #[test]
    fn missing_analysis_is_tolerated() {
        let region = ResultRegion::new(false);
        // Must not panic; the condition is logged and skipped
        region.show_analysis(None);
    }
}
