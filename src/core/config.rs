// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use log::LevelFilter;

use crate::models::{GenerationRequest, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

// Configuration for the password generator
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub default_include_lower: bool,
    pub default_include_upper: bool,
    pub default_include_digits: bool,
    pub default_include_symbols: bool,

    // Output
    pub save_file: PathBuf,
    pub clipboard_hold: Duration,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let request = GenerationRequest::default();
        Self {
            // Password Generation
            default_password_length: request.length,
            default_include_lower: request.include_lower,
            default_include_upper: request.include_upper,
            default_include_digits: request.include_digits,
            default_include_symbols: request.include_symbols,

            // Output
            save_file: PathBuf::from("./passwords.txt"),
            clipboard_hold: Duration::from_secs(10),

            // Logging
            log_level: LevelFilter::Warn,
            log_file: None,
        }
    }
}

/// Configuration plus the problems found while reading it. The warnings are
/// kept so they can be logged once the logger is installed.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<String>,
}

fn parse_bool(key: &str, val: &str, current: bool, warnings: &mut Vec<String>) -> bool {
    match val.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => {
            warnings.push(format!("Invalid boolean '{}' for {}, keeping {}", val, key, current));
            current
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> LoadedConfig {
        let mut loaded = Self::from_lookup(|key| env::var(key).ok());

        if env::var("PASSGEN_SAVE_FILE").is_err() {
            if let Some(dir) = crate::utils::get_app_data_dir() {
                loaded.config.save_file = dir.join("passwords.txt");
            }
        }

        loaded
    }

    /// Builds a configuration from an arbitrary key lookup, starting from the
    /// defaults and keeping them for missing or malformed values.
    pub fn from_lookup<F>(lookup: F) -> LoadedConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut warnings = Vec::new();

        // Password Generation
        if let Some(val) = lookup("PASSGEN_DEFAULT_LENGTH") {
            match val.trim().parse::<usize>() {
                Ok(length) if (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) => {
                    config.default_password_length = length;
                }
                _ => warnings.push(format!(
                    "Invalid PASSGEN_DEFAULT_LENGTH '{}', using {}",
                    val, config.default_password_length
                )),
            }
        }

        let toggles: [(&str, &mut bool); 4] = [
            ("PASSGEN_INCLUDE_LOWER", &mut config.default_include_lower),
            ("PASSGEN_INCLUDE_UPPER", &mut config.default_include_upper),
            ("PASSGEN_INCLUDE_DIGITS", &mut config.default_include_digits),
            ("PASSGEN_INCLUDE_SYMBOLS", &mut config.default_include_symbols),
        ];
        for (key, flag) in toggles {
            if let Some(val) = lookup(key) {
                *flag = parse_bool(key, &val, *flag, &mut warnings);
            }
        }

        // Output
        if let Some(file) = lookup("PASSGEN_SAVE_FILE") {
            config.save_file = PathBuf::from(file);
        }

        if let Some(val) = lookup("PASSGEN_CLIPBOARD_HOLD_SECS") {
            match val.trim().parse::<u64>() {
                Ok(secs) => config.clipboard_hold = Duration::from_secs(secs),
                Err(_) => warnings.push(format!(
                    "Invalid PASSGEN_CLIPBOARD_HOLD_SECS '{}', using {}",
                    val,
                    config.clipboard_hold.as_secs()
                )),
            }
        }

        // Logging
        if let Some(level) = lookup("PASSGEN_LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => warnings.push(format!("Unknown log level '{}', using {}", level, config.log_level)),
            }
        }

        if let Some(file) = lookup("PASSGEN_LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        LoadedConfig { config, warnings }
    }

    /// The request the front ends start from.
    pub fn default_request(&self) -> GenerationRequest {
        GenerationRequest {
            length: self.default_password_length,
            include_lower: self.default_include_lower,
            include_upper: self.default_include_upper,
            include_digits: self.default_include_digits,
            include_symbols: self.default_include_symbols,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load_from(pairs: &[(&str, &str)]) -> LoadedConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let loaded = load_from(&[]);
        assert!(loaded.warnings.is_empty());
        assert_eq!(loaded.config.default_request(), GenerationRequest::default());
        assert_eq!(loaded.config.log_level, LevelFilter::Warn);
        assert_eq!(loaded.config.clipboard_hold, Duration::from_secs(10));
        assert!(loaded.config.log_file.is_none());
    }

    #[test]
    fn reads_overrides() {
        let loaded = load_from(&[
            ("PASSGEN_DEFAULT_LENGTH", "20"),
            ("PASSGEN_INCLUDE_SYMBOLS", "true"),
            ("PASSGEN_INCLUDE_DIGITS", "off"),
            ("PASSGEN_SAVE_FILE", "/tmp/out.txt"),
            ("PASSGEN_CLIPBOARD_HOLD_SECS", "0"),
            ("PASSGEN_LOG_LEVEL", "DEBUG"),
            ("PASSGEN_LOG_FILE", "/tmp/passgen.log"),
        ]);
        assert!(loaded.warnings.is_empty());

        let config = loaded.config;
        let request = config.default_request();
        assert_eq!(request.length, 20);
        assert!(request.include_symbols);
        assert!(!request.include_digits);
        assert_eq!(config.save_file, PathBuf::from("/tmp/out.txt"));
        assert_eq!(config.clipboard_hold, Duration::ZERO);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/passgen.log")));
    }

    #[test]
    fn malformed_values_keep_defaults_and_are_reported() {
        let loaded = load_from(&[
            ("PASSGEN_DEFAULT_LENGTH", "99"),
            ("PASSGEN_INCLUDE_LOWER", "maybe"),
            ("PASSGEN_CLIPBOARD_HOLD_SECS", "soon"),
            ("PASSGEN_LOG_LEVEL", "loud"),
        ]);
        assert_eq!(loaded.config.default_password_length, 12);
        assert!(loaded.config.default_include_lower);
        assert_eq!(loaded.config.clipboard_hold, Duration::from_secs(10));
        assert_eq!(loaded.config.log_level, LevelFilter::Warn);

        assert_eq!(loaded.warnings.len(), 4);
        assert!(loaded.warnings.iter().any(|w| w.contains("PASSGEN_DEFAULT_LENGTH '99'")));
        assert!(loaded.warnings.iter().any(|w| w.contains("PASSGEN_INCLUDE_LOWER")));
        assert!(loaded.warnings.iter().any(|w| w.contains("'loud'")));
    }
}
