//! Resume lens: role-aware resume quality analysis

mod ai;
mod analysis;
mod catalog;
mod cli;
mod config;
mod error;
mod report;

use analysis::engine::{AnalysisEngine, AnalysisInput};
use clap::Parser;
use cli::{Cli, Commands, ConfigAction, OutputFormat};
use config::Config;
use error::{ResumeLensError, Result};
use log::{error, info};
use std::process;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, mut config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            role,
            email,
            output,
            no_ai,
        } => {
            cli::validate_file_extension(&resume, &["txt", "md"])
                .map_err(|e| ResumeLensError::InvalidInput(format!("Resume file: {}", e)))?;
            let output_format =
                cli::parse_output_format(&output).map_err(ResumeLensError::InvalidInput)?;

            let text = std::fs::read_to_string(&resume)?;
            cli::validate_resume_text(
                &text,
                config.intake.min_text_length,
                config.intake.min_section_hits,
            )
            .map_err(ResumeLensError::InvalidInput)?;

            if no_ai {
                config.ai.api_key = None;
            }

            info!("Starting resume analysis for {}", resume.display());
            let engine = AnalysisEngine::new(&config)?;
            let input = AnalysisInput::new(text, role, email);
            let report = engine.analyze(&input).await;

            match output_format {
                OutputFormat::Console => print!("{}", report.render_console()),
                OutputFormat::Json => println!("{}", report.to_json_pretty()?),
            }
        }

        Commands::Roles => {
            let catalog = catalog::Catalog::builtin()?;
            println!("Cataloged role profiles:\n");
            for role in catalog.all_roles() {
                println!("  {} ({:?})", role.name, role.family);
                println!("    keywords: {}", role.keywords.as_slice().join(", "));
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("AI model: {}", config.ai.model);
                println!("AI endpoint: {}", config.ai.api_base);
                println!("AI timeout: {}s", config.ai.timeout_secs);
                println!(
                    "AI credential: {}",
                    if config.ai_configured() {
                        "configured"
                    } else {
                        "not configured (heuristic-only)"
                    }
                );
                println!("Intake minimum length: {}", config.intake.min_text_length);
                println!("Intake section hits: {}", config.intake.min_section_hits);
            }
            Some(ConfigAction::Reset) => {
                let default_config = Config::default();
                default_config.save()?;
                println!("Configuration reset to defaults");
            }
        },
    }

    Ok(())
}
