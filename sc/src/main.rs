use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::{LevelFilter, debug, error};
use std::str::FromStr;

use scaffold::cli::Cli;
use scaffold::config::Config;
use scaffold::{ProjectRequest, TemplateSelector, create_project};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    let mut builder = env_logger::Builder::from_default_env();

    // CLI --log-level > config file > RUST_LOG / INFO
    match cli_log_level.or(config_log_level) {
        Some(level) => {
            let level = match level.to_uppercase().as_str() {
                "WARNING" => LevelFilter::Warn,
                other => LevelFilter::from_str(other).unwrap_or_else(|_| {
                    eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", level);
                    LevelFilter::Info
                }),
            };
            builder.filter_level(level);
        }
        None if std::env::var_os("RUST_LOG").is_none() => {
            builder.filter_level(LevelFilter::Info);
        }
        None => {}
    }

    builder.try_init().context("Logger already initialized")?;
    Ok(())
}

fn run(cli: Cli, config: Config) -> Result<()> {
    let template: TemplateSelector = cli.template.parse()?;
    let request = ProjectRequest::new(template, &cli.namespace, &cli.artifact_id)?;
    let layout = config.layout(cli.root.as_deref());
    debug!("Using root {}", layout.root().display());

    let project = create_project(&layout, &request).context("Project creation failed")?;
    println!("{} Created {}", "✓".green(), project.display().to_string().cyan());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load log level from config file early (before full config load)
    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    if let Err(e) = run(cli, config) {
        error!("{:?}", e);
        std::process::exit(1);
    }

    Ok(())
}
