//! Random password generation from selectable character classes, with a
//! point-count strength rating and output helpers for the clipboard, text
//! files and QR codes.

pub mod cli;
pub mod core;
pub mod generators;
pub mod models;
pub mod output;
pub mod utils;

pub use crate::generators::{GeneratorError, PasswordGenerator};
pub use crate::models::{GenerationRequest, Password, StrengthLabel, StrengthScore};
