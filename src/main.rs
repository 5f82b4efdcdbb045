use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use roadmapr::cli::Cli;
use roadmapr::cli::commands::Commands;
use roadmapr::config::Config;
use roadmapr::llm::{GeminiClient, GeminiConfig};
use roadmapr::pipeline::{ExperienceLevel, LearningStyle, RoadmapPipeline, RoadmapRequest, StageReport};
use roadmapr::prompt::Role;
use roadmapr::runner::LlmGenerator;
use roadmapr::validation::CheckList;

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("roadmapr")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("roadmapr.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn build_pipeline(config: &Config) -> Result<RoadmapPipeline<LlmGenerator<GeminiClient>>> {
    let gemini_config = GeminiConfig {
        model: config.llm.worker_model.clone(),
        max_tokens: config.llm.max_tokens,
        timeout: std::time::Duration::from_millis(config.llm.timeout_ms),
    };
    let client = GeminiClient::new(gemini_config).context("Failed to create Gemini client")?;
    let generator = LlmGenerator::new(Arc::new(client));

    Ok(RoadmapPipeline::new(generator, config.llm.clone(), config.planning.clone()))
}

fn print_stage_reports(reports: &[StageReport]) {
    for report in reports {
        if report.exhausted {
            println!(
                "{} {} gave up after {} rounds:",
                "warning:".yellow(),
                report.role.name(),
                report.rounds_used
            );
            for issue in &report.issues {
                println!("  - {}", issue.yellow());
            }
        } else {
            println!(
                "{} {} ({} round{})",
                "ok:".green(),
                report.role.name(),
                report.rounds_used,
                if report.rounds_used == 1 { "" } else { "s" }
            );
        }
    }
}

fn emit_document(document: &str, output: Option<&PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, document).context(format!("Failed to write {}", path.display()))?;
            println!("{} {}", "Wrote".green(), path.display());
        }
        None => println!("{}", document),
    }
    Ok(())
}

async fn handle_generate(
    domain: &str,
    level: &str,
    style: &str,
    hours: u32,
    weeks: Option<u32>,
    output: Option<&PathBuf>,
    config: &Config,
) -> Result<()> {
    let level: ExperienceLevel = level.parse()?;
    let style: LearningStyle = style.parse()?;
    let weeks = weeks.unwrap_or(config.planning.default_weeks);

    let request = RoadmapRequest::new(domain, level, style, hours).with_weeks(weeks);
    info!("Generating {}-week roadmap for {}", weeks, domain);
    println!("{} {} ({} weeks, {} style)", "Planning:".cyan(), domain, weeks, style);

    let pipeline = build_pipeline(config)?;
    let (state, reports) = pipeline.run(&request).await?;

    print_stage_reports(&reports);

    let document = state
        .final_roadmap
        .ok_or_else(|| eyre::eyre!("pipeline produced no final document"))?;
    emit_document(&document, output)
}

async fn handle_revise(file: &PathBuf, feedback: &str, output: Option<&PathBuf>, config: &Config) -> Result<()> {
    let roadmap = fs::read_to_string(file).context(format!("Failed to read {}", file.display()))?;

    info!("Revising roadmap from {}", file.display());
    println!("{} {}", "Revising:".cyan(), file.display());

    let pipeline = build_pipeline(config)?;
    let outcome = pipeline.revise(&roadmap, feedback).await?;

    if outcome.exhausted {
        println!(
            "{} revision still has issues after {} rounds:",
            "warning:".yellow(),
            outcome.rounds_used
        );
        for issue in &outcome.result.issues {
            println!("  - {}", issue.yellow());
        }
    }

    emit_document(&outcome.artifact, output.or(Some(file)))
}

fn handle_validate(file: &PathBuf, kind: &str) -> Result<()> {
    let checks = match kind {
        "roadmap" => CheckList::roadmap_outline(),
        "resources" => CheckList::learning_resources(),
        "analysis" => CheckList::domain_analysis(),
        other => {
            return Err(eyre::eyre!(
                "unknown check kind '{}' (expected roadmap, resources, or analysis)",
                other
            ));
        }
    };

    let content = fs::read_to_string(file).context(format!("Failed to read {}", file.display()))?;
    let result = checks.run(Some(&content));

    if result.passed {
        println!("{} {} passes the {} checks", "ok:".green(), file.display(), checks.description());
        Ok(())
    } else {
        println!("{} {} fails the {} checks:", "fail:".red(), file.display(), checks.description());
        for issue in &result.issues {
            println!("  - {}", issue.red());
        }
        std::process::exit(1);
    }
}

fn handle_roles() {
    for role in Role::all() {
        let checks = role
            .checks()
            .map(|c| c.description().to_string())
            .unwrap_or_else(|| "none".to_string());
        println!(
            "{:<18} {:<8} checks: {:<18} rounds: {}  {}",
            role.name().cyan(),
            role.tier().as_str(),
            checks,
            role.max_rounds(),
            role.description()
        );
    }
}

async fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        Commands::Generate {
            domain,
            level,
            style,
            hours,
            weeks,
            output,
        } => handle_generate(domain, level, style, *hours, *weeks, output.as_ref(), config).await,
        Commands::Revise { file, feedback, output } => {
            handle_revise(file, feedback, output.as_ref(), config).await
        }
        Commands::Validate { file, kind } => handle_validate(file, kind),
        Commands::Roles => {
            handle_roles();
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).await.context("Application failed")?;

    Ok(())
}
