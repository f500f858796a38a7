//! CLI interface for the job applier

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "job-applier")]
#[command(about = "Automated job application tool with AI-generated cover letters")]
#[command(long_about = "Load discovered job listings, filter them, and generate a tailored cover letter per job through a local Ollama model")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Process discovered jobs and generate cover letters
    Run {
        /// Path to the discovered jobs JSON file
        #[arg(short, long, default_value = "data/found_jobs.json")]
        jobs: PathBuf,

        /// Skip cover letter generation
        #[arg(long, conflicts_with = "cover_letters")]
        no_cover_letters: bool,

        /// Force cover letter generation
        #[arg(long)]
        cover_letters: bool,
    },

    /// Check Ollama connectivity and model availability
    Check,

    /// Remove old generated cover letters
    Cleanup {
        /// Delete files older than this many days
        #[arg(long, default_value_t = 7)]
        days: u64,

        /// Actually delete files (without this flag, it's a dry run)
        #[arg(long)]
        force: bool,
    },
}

/// Whether this run should generate cover letters: CLI flags override the
/// configured setting; with neither, generation is on.
pub fn resolve_generate_cover_letters(
    no_cover_letters: bool,
    cover_letters: bool,
    configured: Option<bool>,
) -> bool {
    if no_cover_letters {
        false
    } else if cover_letters {
        true
    } else {
        configured.unwrap_or(true)
    }
}
