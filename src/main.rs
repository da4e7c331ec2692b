use param::cli::commands::{CheckCommand, ValidateCommand};
use param::cli::output::*;
use param::cli::{Cli, Command};
use param::core::config::RuleSetConfig;

use anyhow::{Context, Result};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::from_args();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    match &cli.command {
        Command::Check(cmd) => check(cmd)?,
        Command::Validate(cmd) => validate_rules(cmd)?,
    }

    Ok(())
}

fn check(cmd: &CheckCommand) -> Result<()> {
    let config = RuleSetConfig::from_file(&cmd.file).context("Failed to load rule set")?;
    debug!("Loaded rule set '{}' with {} params", config.name, config.params.len());

    let data = cmd.load_input(std::io::stdin())?;
    let batch = config.to_batch(data)?;
    let result = batch.process();

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{} Rule set: {}", INFO, style(&config.name).bold());
        for line in format_batch_result(&config, &result) {
            println!("  {}", line);
        }
        if !result.is_ok() {
            println!(
                "\n{} {} invalid",
                CROSS,
                style(format!("{} param(s)", result.errors.len())).red()
            );
        }
    }

    match exit_code(&result) {
        0 => Ok(()),
        code => std::process::exit(code),
    }
}

fn validate_rules(cmd: &ValidateCommand) -> Result<()> {
    let outcome = RuleSetConfig::from_file(&cmd.file);

    if cmd.json {
        println!("{}", validation_json(&outcome)?);
        if outcome.is_err() {
            std::process::exit(1);
        }
        return Ok(());
    }

    println!("{} Validating rule set...", INFO);
    match outcome {
        Ok(config) => {
            println!("{} Rule set is valid!", CHECK);
            println!("  Name: {}", style(&config.name).bold());
            println!("  Params: {}", style(config.params.len()).cyan());
            Ok(())
        }
        Err(e) => {
            println!("{} Validation failed:", CROSS);
            println!("  {}", style(format!("{:#}", e)).red());
            std::process::exit(1);
        }
    }
}
