//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `mail_posture` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Reading the domain from the arguments or an interactive prompt
//! - Printing the report
//!
//! All core functionality is implemented in the library crate.

use std::io;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use mail_posture::config::MAX_PROMPT_ATTEMPTS;
use mail_posture::initialization::init_logger_with;
use mail_posture::{
    check_domain, prompt_for_domain, render_json, render_text, ColorChoice, Config, Domain,
    OutputFormat,
};

fn apply_color_choice(choice: ColorChoice) {
    match choice {
        ColorChoice::Always => colored::control::set_override(true),
        ColorChoice::Never => colored::control::set_override(false),
        // colored already honours NO_COLOR, CLICOLOR and whether stdout is a tty
        ColorChoice::Auto => {}
    }
}

fn read_domain(config: &Config) -> Result<Domain> {
    let domain = match &config.domain {
        Some(input) => Domain::parse(input)?,
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            prompt_for_domain(&mut stdin.lock(), &mut stdout.lock(), MAX_PROMPT_ATTEMPTS)?
        }
    };
    Ok(domain)
}

async fn run(config: Config) -> Result<()> {
    let domain = read_domain(&config)?;
    log::info!("Checking {domain}");

    let reports = check_domain(&config, &domain).await?;
    match config.format {
        OutputFormat::Text => {
            let color = colored::control::SHOULD_COLORIZE.should_colorize();
            print!("{}", render_text(&reports, color));
        }
        OutputFormat::Json => {
            let json = render_json(&domain, &reports).context("Failed to serialize report")?;
            println!("{json}");
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    // Parse command-line arguments into Config
    let config = Config::parse();

    apply_color_choice(config.color);

    if let Err(e) = init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")
    {
        eprintln!("mail_posture error: {e:#}");
        process::exit(1);
    }

    if let Err(e) = run(config).await {
        eprintln!("mail_posture error: {e:#}");
        process::exit(1);
    }
}
