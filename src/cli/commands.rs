// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a password
    Generate {
        /// Password length
        #[arg(long)]
        length: Option<usize>,

        /// Exclude uppercase letters
        #[arg(long)]
        no_upper: bool,

        /// Exclude lowercase letters
        #[arg(long)]
        no_lower: bool,

        /// Exclude digits
        #[arg(long)]
        no_digits: bool,

        /// Exclude special characters
        #[arg(long)]
        no_special: bool,
    },

    /// Generate a passphrase
    Passphrase {
        /// Number of words
        #[arg(long)]
        num_words: Option<usize>,

        /// Separator placed between words
        #[arg(long)]
        separator: Option<String>,

        /// Capitalize each word
        #[arg(long)]
        capitalize: bool,
    },

    /// Analyze one or more passwords
    Analyze {
        /// Passwords to analyze
        #[arg(required = true)]
        passwords: Vec<String>,

        /// Skip the Have I Been Pwned? lookup
        #[arg(long)]
        skip_pwned: bool,
    },

    /// Fetch and print the service's current CSRF token
    Token,
}
