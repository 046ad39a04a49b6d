// src/generators/mod.rs
use thiserror::Error;

mod password;

pub use password::{build_alphabet, generate_with_rng, score, validate_request, PasswordGenerator};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
