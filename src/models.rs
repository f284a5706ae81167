// src/models.rs
use serde::{Serialize, Deserialize};

// Password generation options as collected from the form (prompts or flags).
// Converted into the wire request right before the POST.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub length: usize,
    pub use_upper: bool,
    pub use_lower: bool,
    pub use_digits: bool,
    pub use_special: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: 16,
            use_upper: true,
            use_lower: true,
            use_digits: true,
            use_special: true,
        }
    }
}

// Passphrase generation options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassphraseOptions {
    pub num_words: usize,
    pub separator: String,
    pub capitalize: bool,
}

impl Default for PassphraseOptions {
    fn default() -> Self {
        Self {
            num_words: 4,
            separator: "-".to_string(),
            capitalize: false,
        }
    }
}
