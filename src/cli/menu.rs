// src/cli/menu.rs
use inquire::{Confirm, InquireError, MultiSelect, Select, Text};
use std::error::Error;
use std::path::PathBuf;

use crate::core::config::Config;
use crate::generators::PasswordGenerator;
use crate::models::{CharacterClass, GenerationRequest, Password, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
use crate::output::{self, ClipboardSession};
use crate::utils::format_strength;

const GENERATE: &str = "🔐  Generate password";
const SET_LENGTH: &str = "📏  Set length";
const SET_CLASSES: &str = "🔤  Choose character types";
const TOGGLE_VISIBILITY: &str = "👁️  Show/hide password";
const COPY: &str = "📋  Copy to clipboard";
const SAVE: &str = "💾  Save to file";
const SHOW_QR: &str = "🔳  Show QR code";
const EXPORT_QR: &str = "🖼️  Export QR code as SVG";
const EXIT: &str = "❌  Exit";

/// State shown by the menu between prompts.
struct MenuState {
    request: GenerationRequest,
    current: Option<Password>,
    show_password: bool,
    // kept open so copied text survives until the menu closes
    clipboard: Option<ClipboardSession>,
}

impl MenuState {
    fn print_summary(&self) {
        let classes: Vec<String> = self.request.classes().iter().map(|c| c.to_string()).collect();
        println!();
        println!("Length: {}", self.request.length);
        if classes.is_empty() {
            println!("Character types: none selected");
        } else {
            println!("Character types: {}", classes.join(", "));
        }

        if let Some(password) = &self.current {
            let shown = if self.show_password {
                password.to_string()
            } else {
                password.masked()
            };
            println!("Password: {}", shown);
            println!("{}", format_strength(&crate::generators::score(password.as_str())));
        }
    }

    fn require_password(&self) -> Option<Password> {
        if self.current.is_none() {
            println!("❌ No password yet. Generate one first.");
        }
        self.current.clone()
    }

    fn copy(&mut self, password: &str) -> output::Result<()> {
        if self.clipboard.is_none() {
            self.clipboard = Some(ClipboardSession::open()?);
        }
        match self.clipboard.as_mut() {
            Some(clipboard) => clipboard.copy(password),
            None => Ok(()),
        }
    }
}

/// Esc and Ctrl+C on the main menu both close it.
fn ends_menu(err: &InquireError) -> bool {
    matches!(err, InquireError::OperationInterrupted | InquireError::OperationCanceled)
}

fn parse_length(input: &str) -> Option<usize> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|length| (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(length))
}

fn apply_class_selection(request: &mut GenerationRequest, selected: &[CharacterClass]) {
    request.include_lower = selected.contains(&CharacterClass::Lowercase);
    request.include_upper = selected.contains(&CharacterClass::Uppercase);
    request.include_digits = selected.contains(&CharacterClass::Digits);
    request.include_symbols = selected.contains(&CharacterClass::Symbols);
}

// Sub-prompts use prompt_skippable: Esc returns to the main menu
fn handle_selection(
    selection: &str,
    state: &mut MenuState,
    generator: &mut PasswordGenerator,
    config: &Config,
) -> Result<(), InquireError> {
    match selection {
        GENERATE => match generator.generate_password(&state.request) {
            Ok(password) => state.current = Some(password),
            Err(e) => println!("❌ {}", e),
        },
        SET_LENGTH => {
            let prompt = format!("Password length ({}-{}):", MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH);
            let default = state.request.length.to_string();
            let Some(input) = Text::new(&prompt).with_default(&default).prompt_skippable()? else {
                return Ok(());
            };

            match parse_length(&input) {
                Some(length) => state.request.length = length,
                None => println!(
                    "❌ Length must be a number between {} and {}",
                    MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH
                ),
            }
        }
        SET_CLASSES => {
            let defaults: Vec<usize> = CharacterClass::ALL
                .iter()
                .enumerate()
                .filter(|(_, class)| state.request.includes(**class))
                .map(|(i, _)| i)
                .collect();

            let Some(selected) = MultiSelect::new("Include character types:", CharacterClass::ALL.to_vec())
                .with_default(&defaults)
                .prompt_skippable()?
            else {
                return Ok(());
            };

            apply_class_selection(&mut state.request, &selected);
            if selected.is_empty() {
                println!("⚠️  Select at least one character type before generating.");
            }
        }
        TOGGLE_VISIBILITY => state.show_password = !state.show_password,
        COPY => {
            if let Some(password) = state.require_password() {
                match state.copy(password.as_str()) {
                    Ok(()) => println!("📋 Password copied to clipboard!"),
                    Err(e) => println!("❌ {}", e),
                }
            }
        }
        SAVE => {
            if let Some(password) = state.require_password() {
                let default = config.save_file.display().to_string();
                let Some(path) = Text::new("Save to file:").with_default(&default).prompt_skippable()? else {
                    return Ok(());
                };
                let path = PathBuf::from(path.trim());
                match output::save_to_file(&path, password.as_str()) {
                    Ok(()) => println!("✅ Password saved to {}", path.display()),
                    Err(e) => println!("❌ {}", e),
                }
            }
        }
        SHOW_QR => {
            if let Some(password) = state.require_password() {
                if !state.show_password {
                    let reveal = Confirm::new("The QR code reveals the password. Show it anyway?")
                        .with_default(true)
                        .prompt_skippable()?;
                    if reveal != Some(true) {
                        return Ok(());
                    }
                }
                match output::render_qr_terminal(password.as_str()) {
                    Ok(qr) => println!("{}", qr),
                    Err(e) => println!("❌ {}", e),
                }
            }
        }
        EXPORT_QR => {
            if let Some(password) = state.require_password() {
                let Some(path) = Text::new("SVG file:").with_default("password-qr.svg").prompt_skippable()? else {
                    return Ok(());
                };
                let path = PathBuf::from(path.trim());
                match output::write_qr_svg(&path, password.as_str()) {
                    Ok(()) => println!("✅ QR code written to {}", path.display()),
                    Err(e) => println!("❌ {}", e),
                }
            }
        }
        _ => {}
    }

    Ok(())
}

pub fn run_cli_menu(config: &Config) -> Result<(), Box<dyn Error>> {
    println!("╔══════════════════════════════════════╗");
    println!("║        🔐 PASSWORD GENERATOR         ║");
    println!("╚══════════════════════════════════════╝");

    let mut generator = PasswordGenerator::new();
    let mut state = MenuState {
        request: config.default_request(),
        current: None,
        show_password: false,
        clipboard: None,
    };

    loop {
        state.print_summary();

        let options = vec![
            GENERATE, SET_LENGTH, SET_CLASSES, TOGGLE_VISIBILITY, COPY, SAVE, SHOW_QR, EXPORT_QR, EXIT,
        ];

        let selection = match Select::new("Choose an option:", options)
            .with_help_message("Use arrow keys to navigate, Enter to select. Esc or Ctrl+C to exit.")
            .with_page_size(10)
            .prompt_skippable()
        {
            Ok(Some(EXIT)) | Ok(None) => break,
            Ok(Some(selection)) => selection,
            Err(e) if ends_menu(&e) => break,
            Err(e) => return Err(Box::new(e)),
        };

        match handle_selection(selection, &mut state, &mut generator, config) {
            Ok(()) => {}
            Err(e) if ends_menu(&e) => break,
            Err(e) => return Err(Box::new(e)),
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}
