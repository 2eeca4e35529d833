//! Resume matcher: score a resume against a job description

use clap::Parser;
use log::{error, info};
use resume_matcher::cli::{self, Cli, Commands, ConfigAction, HistoryAction, MatchArgs};
use resume_matcher::config::{Config, OutputFormat};
use resume_matcher::error::{Result, ResumeMatcherError};
use resume_matcher::history::HistoryStore;
use resume_matcher::output::formatter::save_report_to_file;
use resume_matcher::output::ReportGenerator;
use resume_matcher::pipeline::{self, MatchRequest};
use std::path::PathBuf;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    let config_path = cli.config.unwrap_or_else(Config::config_path);
    if let Err(e) = run_command(cli.command, config, config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: PathBuf) -> Result<()> {
    match command {
        Commands::Match(args) => run_match(args, &config).await?,

        Commands::History { action } => {
            let store = HistoryStore::new(&config.history.path, config.history.max_entries);
            match action {
                Some(HistoryAction::Show) | None => {
                    let generator = ReportGenerator::with_options(config.output.color_output, true);
                    let history = store.load();
                    println!("{}", generator.generate_history(&history, config.output.format)?);
                }
                Some(HistoryAction::Clear) => {
                    store.clear()?;
                    println!("History cleared: {}", store.path().display());
                }
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                let content = toml::to_string_pretty(&config).map_err(|e| {
                    ResumeMatcherError::Configuration(format!("Failed to serialize config: {}", e))
                })?;
                println!("{}", content);
            }
            Some(ConfigAction::Reset) => {
                Config::default().save_to(&config_path)?;
                println!("Configuration reset: {}", config_path.display());
            }
            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }
        },
    }

    Ok(())
}

async fn run_match(args: MatchArgs, config: &Config) -> Result<()> {
    let output_format = match &args.output {
        Some(format) => cli::parse_output_format(format).map_err(ResumeMatcherError::InvalidInput)?,
        None => config.output.format,
    };

    let request = MatchRequest::from_args(&args)?;
    let report = pipeline::run_match(&request, config).await?;

    let generator = ReportGenerator::with_options(config.output.color_output, true);
    let rendered = generator.generate_report(&report, output_format)?;
    println!("{}", rendered);

    if let Some(save_path) = &args.save {
        let saved = if output_format == OutputFormat::Console {
            ReportGenerator::with_options(false, true).generate_report(&report, output_format)?
        } else {
            rendered
        };
        save_report_to_file(&saved, save_path)?;
        info!("Report saved to {}", save_path.display());
    }

    if report.is_error() {
        process::exit(1);
    }

    Ok(())
}
