// src/core/config.rs
use std::env;
use std::time::Duration;
use log::LevelFilter;

// Configuration for the password service client
#[derive(Debug, Clone)]
pub struct Config {
    // Service
    pub base_url: String,
    pub generator_page_path: String,
    pub generate_path: String,
    pub passphrase_path: String,
    pub analyze_path: String,

    // Request
    pub request_timeout: Duration,

    // Password Generation
    pub default_password_length: usize,
    pub default_use_upper: bool,
    pub default_use_lower: bool,
    pub default_use_digits: bool,
    pub default_use_special: bool,

    // Passphrase Generation
    pub default_num_words: usize,
    pub default_separator: String,
    pub default_capitalize: bool,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Service
            base_url: "http://127.0.0.1:5000".to_string(),
            generator_page_path: "/passwords/".to_string(),
            generate_path: "/passwords/".to_string(),
            passphrase_path: "/passphrase/generate".to_string(),
            analyze_path: "/passwords/analyze".to_string(),

            // Request
            request_timeout: Duration::from_secs(30),

            // Password Generation
            default_password_length: 16,
            default_use_upper: true,
            default_use_lower: true,
            default_use_digits: true,
            default_use_special: true,

            // Passphrase Generation
            default_num_words: 4,
            default_separator: "-".to_string(),
            default_capitalize: false,

            // Logging
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        // Service
        if let Ok(url) = env::var("SERVICE_URL") {
            config.base_url = url;
        }

        if let Ok(path) = env::var("GENERATOR_PAGE_PATH") {
            config.generator_page_path = path;
        }

        if let Ok(path) = env::var("GENERATE_PATH") {
            config.generate_path = path;
        }

        if let Ok(path) = env::var("PASSPHRASE_PATH") {
            config.passphrase_path = path;
        }

        if let Ok(path) = env::var("ANALYZE_PATH") {
            config.analyze_path = path;
        }

        // Request
        if let Ok(val) = env::var("REQUEST_TIMEOUT_SECONDS") {
            if let Ok(secs) = val.parse::<u64>() {
                config.request_timeout = Duration::from_secs(secs);
            }
        }

        // Password Generation
        if let Ok(val) = env::var("DEFAULT_PASSWORD_LENGTH") {
            if let Ok(length) = val.parse() {
                config.default_password_length = length;
            }
        }

        if let Ok(val) = env::var("DEFAULT_USE_UPPER") {
            if let Ok(use_upper) = val.parse() {
                config.default_use_upper = use_upper;
            }
        }

        if let Ok(val) = env::var("DEFAULT_USE_LOWER") {
            if let Ok(use_lower) = val.parse() {
                config.default_use_lower = use_lower;
            }
        }

        if let Ok(val) = env::var("DEFAULT_USE_DIGITS") {
            if let Ok(use_digits) = val.parse() {
                config.default_use_digits = use_digits;
            }
        }

        if let Ok(val) = env::var("DEFAULT_USE_SPECIAL") {
            if let Ok(use_special) = val.parse() {
                config.default_use_special = use_special;
            }
        }

        // Passphrase Generation
        if let Ok(val) = env::var("DEFAULT_NUM_WORDS") {
            if let Ok(num_words) = val.parse() {
                config.default_num_words = num_words;
            }
        }

        if let Ok(separator) = env::var("DEFAULT_SEPARATOR") {
            config.default_separator = separator;
        }

        if let Ok(val) = env::var("DEFAULT_CAPITALIZE") {
            if let Ok(capitalize) = val.parse() {
                config.default_capitalize = capitalize;
            }
        }

        // Logging
        if let Ok(level) = env::var("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {}
            }
        }

        config
    }

    // Join the base URL and a path without doubling the slash between them
    fn join_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// URL of the form page carrying the CSRF meta tag
    pub fn page_url(&self) -> String {
        self.join_url(&self.generator_page_path)
    }

    /// URL the password generation form submits to
    pub fn generate_url(&self) -> String {
        self.join_url(&self.generate_path)
    }

    /// URL of the passphrase generation endpoint
    pub fn passphrase_url(&self) -> String {
        self.join_url(&self.passphrase_path)
    }

    /// URL of the password analysis endpoint
    pub fn analyze_url(&self) -> String {
        self.join_url(&self.analyze_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoints_join_without_double_slash() {
        let config = Config::default();
        assert_eq!(config.generate_url(), "http://127.0.0.1:5000/passwords/");
        assert_eq!(config.passphrase_url(), "http://127.0.0.1:5000/passphrase/generate");
        assert_eq!(config.analyze_url(), "http://127.0.0.1:5000/passwords/analyze");
    }

    #[test]
    fn trailing_slash_on_base_url_is_tolerated() {
        let mut config = Config::default();
        config.base_url = "http://example.com/".to_string();
        assert_eq!(config.page_url(), "http://example.com/passwords/");
    }

    #[test]
    fn defaults_match_the_service_form() {
        let config = Config::default();
        assert_eq!(config.default_password_length, 16);
        assert!(config.default_use_upper);
        assert!(config.default_use_lower);
        assert_eq!(config.default_num_words, 4);
        assert_eq!(config.default_separator, "-");
    }
}
