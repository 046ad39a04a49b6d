// src/output/mod.rs
use std::io;
use thiserror::Error;

mod clipboard;
mod file;
mod qr;

pub use clipboard::{copy_to_clipboard, ClipboardSession};
pub use file::{save_all_to_file, save_to_file};
pub use qr::{render_qr_terminal, write_qr_svg};

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("QR encoding error: {0}")]
    Qr(String),

    #[error("No password to {0}")]
    EmptyPassword(&'static str),
}

pub type Result<T> = std::result::Result<T, OutputError>;

fn ensure_not_empty(password: &str, action: &'static str) -> Result<()> {
    if password.is_empty() {
        return Err(OutputError::EmptyPassword(action));
    }
    Ok(())
}
