use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand_core::{CryptoRng, RngCore};

use super::{GeneratorError, Result};
use crate::models::{
    CharacterClass, GenerationRequest, Password, StrengthChecks, StrengthScore,
    MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH,
};

/// Generates passwords from a cryptographically secure random source.
///
/// The source defaults to the operating system RNG; anything implementing
/// [`CryptoRng`] can be supplied with [`PasswordGenerator::with_rng`].
pub struct PasswordGenerator<R = OsRng> {
    rng: R,
}

impl PasswordGenerator<OsRng> {
    pub fn new() -> Self {
        PasswordGenerator { rng: OsRng }
    }
}

impl Default for PasswordGenerator<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> PasswordGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        PasswordGenerator { rng }
    }

    pub fn generate_password(&mut self, request: &GenerationRequest) -> Result<Password> {
        generate_with_rng(request, &mut self.rng)
    }

    pub fn analyze_password_strength(&self, password: &str) -> StrengthScore {
        score(password)
    }
}

/// Concatenates the selected classes in alphabet order.
pub fn build_alphabet(request: &GenerationRequest) -> Vec<u8> {
    request
        .classes()
        .iter()
        .flat_map(|class| class.chars().iter().copied())
        .collect()
}

fn validate(request: &GenerationRequest) -> Result<Vec<u8>> {
    let alphabet = build_alphabet(request);
    if alphabet.is_empty() {
        return Err(GeneratorError::InvalidRequest(
            "select at least one character type".to_string(),
        ));
    }

    if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&request.length) {
        return Err(GeneratorError::InvalidRequest(format!(
            "length must be between {} and {}, got {}",
            MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH, request.length
        )));
    }

    Ok(alphabet)
}

/// Checks a request without drawing any randomness.
pub fn validate_request(request: &GenerationRequest) -> Result<()> {
    validate(request).map(|_| ())
}

pub fn generate_with_rng<R>(request: &GenerationRequest, rng: &mut R) -> Result<Password>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let alphabet = validate(request)?;

    // choose() samples uniformly over the slice
    let password: String = (0..request.length)
        .filter_map(|_| alphabet.choose(rng).map(|b| *b as char))
        .collect();

    log::debug!(
        "Generated {}-character password from a {}-symbol alphabet",
        request.length,
        alphabet.len()
    );

    Ok(Password::new(password))
}

pub fn score(password: &str) -> StrengthScore {
    let length = password.chars().count();
    let has = |class: CharacterClass| password.chars().any(|c| class.contains(c));

    StrengthChecks {
        min_length: length >= 8,
        long_length: length >= 11,
        has_lowercase: has(CharacterClass::Lowercase),
        has_uppercase: has(CharacterClass::Uppercase),
        has_digit: has(CharacterClass::Digits),
        has_symbol: has(CharacterClass::Symbols),
    }
    .into()
}
