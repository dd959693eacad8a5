//! resume-ats-scorer: heuristic ATS compatibility scoring for resumes

use anyhow::Context;
use clap::Parser;
use log::{error, info};
use resume_ats_scorer::cli::{self, Cli, Commands, ConfigAction};
use resume_ats_scorer::config::Config;
use resume_ats_scorer::error::{AtsScorerError, Result};
use resume_ats_scorer::input::upload::UploadPolicy;
use resume_ats_scorer::input::{MediaType, ResumeDocument};
use resume_ats_scorer::output::formatter::{resolve_report_path, save_report_to_file, ReportGenerator};
use resume_ats_scorer::output::AtsReport;
use resume_ats_scorer::processing::ScoringEngine;
use std::path::PathBuf;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, mut config: Config, config_path: PathBuf) -> Result<()> {
    match command {
        Commands::Score {
            resume,
            media_type,
            output,
            save,
            detailed,
            strict,
        } => {
            cli::validate_resume_path(&resume)
                .map_err(|e| AtsScorerError::InvalidInput(format!("Resume file: {}", e)))?;

            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(AtsScorerError::InvalidInput)?,
                None => config.output.format.clone(),
            };

            let document = ResumeDocument::from_path(&resume, media_type.as_deref().map(MediaType::from_mime)).await?;
            info!(
                "Scoring {} ({}, {} bytes)",
                document.file_name(),
                document.media_type(),
                document.size()
            );

            if strict || config.upload.enforce {
                UploadPolicy::from_config(&config.upload).validate(&document)?;
            }

            let mut engine = ScoringEngine::new();
            let analysis = engine.analyze_resume(&document).await?;
            let report = AtsReport::new(&document, analysis);

            let generator = ReportGenerator::with_options(
                config.output.color_output && save.is_none(),
                detailed || config.output.detailed,
                config.output.pretty_json,
                true,
                true,
            );
            let rendered = generator.generate_report(&report, &output_format)?;

            match save {
                Some(save) => {
                    let path = resolve_report_path(&save, &output_format, document.file_name());
                    save_report_to_file(&rendered, &path)
                        .with_context(|| format!("Failed to save report to {}", path.display()))?;
                    info!("Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                let content = toml::to_string_pretty(&config)
                    .map_err(|e| AtsScorerError::Configuration(format!("Failed to serialize config: {}", e)))?;
                println!("{}", content);
            }
            ConfigAction::Path => println!("{}", config_path.display()),
            ConfigAction::Reset => {
                Config::default().save_to(&config_path)?;
                info!("Configuration reset to defaults at {}", config_path.display());
            }
            ConfigAction::Set { key, value } => {
                config.set(&key, &value)?;
                config.save_to(&config_path)?;
                info!("Set {} = {}", key, value);
            }
        },
    }

    Ok(())
}
