// src/cli/handlers.rs
use std::error::Error;
use std::path::PathBuf;
use rand_core::{CryptoRng, RngCore};
use serde::Serialize;

use crate::cli::{GenerateArgs, MAX_BATCH_SIZE};
use crate::core::config::Config;
use crate::generators::{self, GeneratorError, PasswordGenerator};
use crate::models::{GenerationRequest, Password, StrengthScore};
use crate::output;
use crate::utils::format_strength;

#[derive(Debug, Serialize)]
pub struct GeneratedPassword {
    pub password: Password,
    pub strength: StrengthScore,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qr: Option<String>,
}

// Class toggles adjust the configured defaults
pub fn build_request(config: &Config, args: &GenerateArgs) -> GenerationRequest {
    let mut request = config.default_request();

    if args.no_lower {
        request.include_lower = false;
    }
    if args.no_upper {
        request.include_upper = false;
    }
    if args.no_digits {
        request.include_digits = false;
    }
    if args.symbols {
        request.include_symbols = true;
    }
    if args.no_symbols {
        request.include_symbols = false;
    }

    if let Some(length) = args.length {
        request.length = length;
    }

    request
}

/// Where `--save` appends to, if it was given.
pub fn save_target(config: &Config, args: &GenerateArgs) -> Option<PathBuf> {
    args.save
        .as_ref()
        .map(|path| path.clone().unwrap_or_else(|| config.save_file.clone()))
}

/// Generates a batch of passwords, renders the requested QR codes and writes
/// the requested files.
///
/// Every password and QR code is produced before any file is touched, so an
/// invalid request or an encoding failure leaves the disk unchanged.
pub fn generate_batch<R: RngCore + CryptoRng>(
    config: &Config,
    args: &GenerateArgs,
    generator: &mut PasswordGenerator<R>,
) -> Result<Vec<GeneratedPassword>, Box<dyn Error>> {
    let request = build_request(config, args);
    generators::validate_request(&request)?;

    if !(1..=MAX_BATCH_SIZE).contains(&args.count) {
        return Err(Box::new(GeneratorError::InvalidRequest(format!(
            "count must be between 1 and {}, got {}",
            MAX_BATCH_SIZE, args.count
        ))));
    }

    let mut results = Vec::with_capacity(args.count);
    for _ in 0..args.count {
        let password = generator.generate_password(&request)?;
        let strength = generator.analyze_password_strength(password.as_str());

        let qr = if args.qr {
            Some(output::render_qr_terminal(password.as_str())?)
        } else {
            None
        };

        results.push(GeneratedPassword { password, strength, qr });
    }

    if let (Some(path), Some(last)) = (&args.qr_svg, results.last()) {
        output::write_qr_svg(path, last.password.as_str())?;
    }

    if let Some(path) = save_target(config, args) {
        let passwords: Vec<&str> = results.iter().map(|r| r.password.as_str()).collect();
        output::save_all_to_file(&path, &passwords)?;
    }

    Ok(results)
}

pub fn handle_generate(config: &Config, args: &GenerateArgs, json: bool) -> Result<(), Box<dyn Error>> {
    let mut generator = PasswordGenerator::new();
    let results = generate_batch(config, args, &mut generator)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for result in &results {
            println!("{}", result.password);
            println!("{}", format_strength(&result.strength));
            if let Some(qr) = &result.qr {
                println!("{}", qr);
            }
        }

        if let Some(path) = save_target(config, args) {
            println!("✅ Saved to {}", path.display());
        }
        if let Some(path) = &args.qr_svg {
            println!("✅ QR code written to {}", path.display());
        }
    }

    if args.copy {
        if let Some(last) = results.last() {
            if !json && !config.clipboard_hold.is_zero() {
                println!(
                    "📋 Password copied to clipboard; keeping it for {}s (Ctrl+C to stop)...",
                    config.clipboard_hold.as_secs()
                );
            }
            output::copy_to_clipboard(last.password.as_str(), config.clipboard_hold)?;
            if !json && config.clipboard_hold.is_zero() {
                println!("📋 Password copied to clipboard!");
            }
        }
    }

    Ok(())
}

pub fn handle_score(password: &str, json: bool) -> Result<(), Box<dyn Error>> {
    let strength = generators::score(password);

    if json {
        println!("{}", serde_json::to_string_pretty(&strength)?);
        return Ok(());
    }

    println!("{}", format_strength(&strength));
    for hint in strength.checks.hints() {
        println!("  • {}", hint);
    }

    Ok(())
}
