use anyhow::Context;
use clap::Parser;
use std::path::Path;

use passgen::cli::{self, Args, CliCommand};
use passgen::core::config::{Config, LoadedConfig};

fn init_logging(config: &Config) -> anyhow::Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.log_level)
        .parse_env("PASSGEN_LOG")
        .format_timestamp_secs()
        .format_module_path(true);

    if let Some(log_file) = &config.log_file {
        if let Some(parent) = log_file.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating log directory {}", parent.display()))?;
            }
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
            .with_context(|| format!("opening log file {}", log_file.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let LoadedConfig { config, warnings } = Config::load();

    init_logging(&config)?;
    for warning in &warnings {
        log::warn!("{}", warning);
    }
    log::debug!("Loaded config: {:?}", config);

    let result = match &args.command {
        Some(CliCommand::Generate(generate_args)) => {
            cli::handlers::handle_generate(&config, generate_args, args.json)
        }
        Some(CliCommand::Score { password }) => cli::handlers::handle_score(password, args.json),
        Some(CliCommand::Menu) | None => cli::menu::run_cli_menu(&config),
    };

    result.map_err(|e| {
        log::error!("{}", e);
        anyhow::anyhow!("{}", e)
    })
}
