// src/cli/commands.rs
use std::path::PathBuf;
use clap::{Args as ClapArgs, Subcommand};

/// Most passwords a single `generate` call produces.
pub const MAX_BATCH_SIZE: usize = 100;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate one or more passwords
    Generate(GenerateArgs),

    /// Rate the strength of an existing password
    Score {
        /// Password to rate
        #[arg(required = true)]
        password: String,
    },

    /// Open the interactive menu
    Menu,
}

fn parse_count(value: &str) -> Result<usize, String> {
    let count: usize = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    if !(1..=MAX_BATCH_SIZE).contains(&count) {
        return Err(format!("count must be between 1 and {}", MAX_BATCH_SIZE));
    }
    Ok(count)
}

#[derive(ClapArgs, Debug, Clone)]
pub struct GenerateArgs {
    /// Password length (1-64)
    #[arg(long, short)]
    pub length: Option<usize>,

    /// Leave out lowercase letters (a-z)
    #[arg(long)]
    pub no_lower: bool,

    /// Leave out uppercase letters (A-Z)
    #[arg(long)]
    pub no_upper: bool,

    /// Leave out digits (0-9)
    #[arg(long)]
    pub no_digits: bool,

    /// Add symbols (!@#$)
    #[arg(long, conflicts_with = "no_symbols")]
    pub symbols: bool,

    /// Leave out symbols, even when enabled by default
    #[arg(long)]
    pub no_symbols: bool,

    /// Number of passwords to generate (1-100)
    #[arg(long, short, default_value_t = 1, value_parser = parse_count)]
    pub count: usize,

    /// Copy the last generated password to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Append every generated password to FILE (or the configured save file)
    #[arg(long, value_name = "FILE", num_args = 0..=1)]
    pub save: Option<Option<PathBuf>>,

    /// Print a QR code for each password
    #[arg(long)]
    pub qr: bool,

    /// Write a QR code of the last generated password as SVG
    #[arg(long, value_name = "FILE")]
    pub qr_svg: Option<PathBuf>,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            length: None,
            no_lower: false,
            no_upper: false,
            no_digits: false,
            symbols: false,
            no_symbols: false,
            count: 1,
            copy: false,
            save: None,
            qr: false,
            qr_svg: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;
    use clap::Parser;

    fn parse(argv: &[&str]) -> Result<GenerateArgs, clap::Error> {
        let args = Args::try_parse_from(argv.iter().copied())?;
        match args.command {
            Some(crate::cli::CliCommand::Generate(generate)) => Ok(generate),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn count_is_bounded() {
        assert!(parse(&["passgen", "generate", "--count", "18446744073709551615"]).is_err());
        assert!(parse(&["passgen", "generate", "--count", "101"]).is_err());
        assert!(parse(&["passgen", "generate", "--count", "0"]).is_err());
        assert_eq!(parse(&["passgen", "generate", "--count", "100"]).unwrap().count, 100);
        assert_eq!(parse(&["passgen", "generate"]).unwrap().count, 1);
    }

    #[test]
    fn save_takes_an_optional_file() {
        assert_eq!(parse(&["passgen", "generate"]).unwrap().save, None);
        assert_eq!(parse(&["passgen", "generate", "--save"]).unwrap().save, Some(None));
        assert_eq!(
            parse(&["passgen", "generate", "--save", "out.txt"]).unwrap().save,
            Some(Some(PathBuf::from("out.txt")))
        );
    }

    #[test]
    fn class_toggles_parse() {
        let args = parse(&["passgen", "generate", "--no-lower", "--no-digits", "--symbols"]).unwrap();
        assert!(args.no_lower && args.no_digits && args.symbols);
        assert!(!args.no_upper);
        assert!(parse(&["passgen", "generate", "--symbols", "--no-symbols"]).is_err());
    }
}
