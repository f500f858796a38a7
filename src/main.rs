//! Job applier: automated job applications with AI-generated cover letters

use clap::Parser;
use job_applier::cli::{self, Cli, Commands};
use job_applier::config::Config;
use job_applier::error::Result;
use job_applier::jobs::{filter::JobFilter, source, store};
use job_applier::letters::{cleanup, CoverLetterEngine};
use job_applier::llm::client::{OllamaClient, TextGenerator};
use job_applier::output::ResultsDisplay;
use log::{error, info, warn};
use std::path::Path;
use std::process;
use std::sync::Arc;

const PROCESSED_JOBS_PATH: &str = "data/processed_jobs.json";

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level)
    ).init();

    // Load configuration
    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Run {
            jobs,
            no_cover_letters,
            cover_letters,
        } => {
            run_pipeline(&config, &jobs, no_cover_letters, cover_letters).await?;
        }

        Commands::Check => {
            check_ollama(&config).await;
        }

        Commands::Cleanup { days, force } => {
            run_cleanup(&config, days, force).await?;
        }
    }

    Ok(())
}

/// Full application pipeline: load, filter, generate, display, export.
async fn run_pipeline(
    config: &Config,
    jobs_path: &Path,
    no_cover_letters: bool,
    cover_letters: bool,
) -> Result<()> {
    info!("Starting automated job application system");
    info!(
        "Loaded configuration with {} job keywords",
        config.job_search.keywords.len()
    );

    let client = Arc::new(OllamaClient::new(config.llm.ollama_model.clone()));

    if !client.is_available().await {
        warn!("Ollama is not available. Cover letter customization will be limited.");
    }

    info!("Discovering job listings...");
    let discovered = source::load_jobs_from_file(jobs_path).await?;

    let filter = JobFilter::new(&config.job_search.exclude_keywords)?;
    let mut filtered_jobs = filter.filter_jobs(discovered);
    info!("Found {} potential job listings", filtered_jobs.len());

    let generate = cli::resolve_generate_cover_letters(
        no_cover_letters,
        cover_letters,
        config.application.generate_cover_letters,
    );

    if generate {
        let engine = CoverLetterEngine::new(config, client.clone()).await?;

        info!("Processing {} jobs in parallel...", filtered_jobs.len());
        let cover_letter_paths = engine.generate_cover_letters_batch(&filtered_jobs).await;

        for job in &mut filtered_jobs {
            match cover_letter_paths.get(&job.id) {
                Some(path) => {
                    job.cover_letter_path = Some(path.clone());
                    info!("Generated cover letter for {} at {}", job.title, job.company);
                }
                None => {
                    error!("Failed to generate cover letter for {} at {}", job.title, job.company);
                }
            }
        }
    } else {
        info!("Cover letter generation is disabled. Skipping...");
    }

    ResultsDisplay::new(generate).print(&filtered_jobs);

    if !filtered_jobs.is_empty() {
        store::export_jobs_to_file(&filtered_jobs, Path::new(PROCESSED_JOBS_PATH)).await?;
    }

    info!("Application session complete. Processed {} jobs.", filtered_jobs.len());
    Ok(())
}

/// Ollama diagnostics: server reachability, installed models, configured
/// model presence, and a one-prompt generation smoke test.
async fn check_ollama(config: &Config) {
    let client = OllamaClient::new(config.llm.ollama_model.clone());
    println!("🔍 Checking Ollama at {}...", client.host());

    let models = match client.list_models().await {
        Ok(models) => {
            println!("✅ Ollama server is running");
            models
        }
        Err(e) => {
            println!("❌ Error connecting to Ollama: {}", e);
            println!("💡 Make sure Ollama is installed and running");
            return;
        }
    };

    if models.is_empty() {
        println!("\n⚠️  No models found. You may need to pull a model:");
        println!("   ollama pull {}", client.model());
        return;
    }

    println!("\n📚 Installed models:");
    for name in &models {
        println!("  • {}", name);
    }

    if !models.iter().any(|name| name == client.model()) {
        println!("\n❌ Model '{}' not found", client.model());
        println!("💡 Run: ollama pull {}", client.model());
        return;
    }

    println!("\n✅ Configured model '{}' is available", client.model());
    println!("🤖 Testing text generation...");

    let reply = client
        .generate_text(
            "You are a helpful assistant.",
            "Write a short greeting in 10 words or less.",
            50,
            0.7,
        )
        .await;

    match reply {
        Some(text) => {
            println!("✅ Generation successful!");
            println!("   Response: {}", text);
        }
        None => println!("❌ Generation failed; see logs for details"),
    }
}

/// Age out generated cover letters; dry run unless forced.
async fn run_cleanup(config: &Config, days: u64, force: bool) -> Result<()> {
    let dry_run = !force;
    let dir = &config.documents.output_dir;

    if !dir.exists() {
        println!("Cover letter directory not found: {}", dir.display());
        return Ok(());
    }

    println!(
        "{}Cleaning up cover letters older than {} days",
        if dry_run { "[DRY RUN] " } else { "" },
        days
    );

    let report = cleanup::cleanup_cover_letters(dir, days, dry_run).await?;

    for path in &report.removed {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        if dry_run {
            println!("Would delete: {}", name);
        } else {
            println!("Deleted: {}", name);
        }
    }

    println!("\nSummary:");
    println!("Total files: {}", report.total_files);
    println!(
        "{}: {} files",
        if dry_run { "Would delete" } else { "Deleted" },
        report.removed.len()
    );

    if dry_run && !report.removed.is_empty() {
        println!("\nThis was a dry run. To actually delete files, run with --force");
    }

    Ok(())
}
