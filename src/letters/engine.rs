//! Cover letter generation engine
//!
//! Builds a prompt per job from text cached at construction, dispatches to
//! the text generation backend, repairs placeholder artifacts, and persists
//! one file per letter. The batch path fans out with bounded concurrency
//! and aggregates per-job outcomes into an id to path mapping; a failed job
//! is absent from the mapping, never an error.

use crate::config::Config;
use crate::error::Result;
use crate::input::manager::InputManager;
use crate::jobs::record::JobRecord;
use crate::llm::client::TextGenerator;
use crate::llm::prompts::{PromptParams, PromptTemplates, NAME_PLACEHOLDER};
use chrono::{DateTime, Local};
use futures::stream::{self, StreamExt};
use log::{debug, error, info, warn};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

const MAX_TOKENS: u32 = 2000;
const TEMPERATURE: f32 = 0.7;

pub struct CoverLetterEngine {
    generator: Arc<dyn TextGenerator>,
    templates: PromptTemplates,
    applicant_name: String,
    max_workers: usize,
    output_dir: PathBuf,
    resume_text: String,
    base_cover_letter_text: Option<String>,
}

impl CoverLetterEngine {
    /// Build an engine, creating the output directory and extracting the
    /// resume and base cover letter once. Missing or unreadable documents
    /// degrade (empty resume, no base text); only an output directory
    /// failure is fatal.
    pub async fn new(config: &Config, generator: Arc<dyn TextGenerator>) -> Result<Self> {
        tokio::fs::create_dir_all(&config.documents.output_dir).await?;

        let mut input_manager = InputManager::new();

        let resume_text = match input_manager.extract_text(&config.documents.resume_path).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Failed to extract text from resume: {}", e);
                String::new()
            }
        };

        let base_cover_letter_text = match config.base_cover_letter_path() {
            Some(path) => match input_manager.extract_text(&path).await {
                Ok(text) if !text.is_empty() => Some(text),
                Ok(_) => {
                    warn!("Base cover letter at {} is empty", path.display());
                    None
                }
                Err(e) => {
                    warn!("Failed to extract text from base cover letter: {}", e);
                    None
                }
            },
            None => {
                warn!(
                    "No base cover letter found. Please add your cover letter to {} or a .txt sibling",
                    config.documents.base_cover_letter_path.display()
                );
                None
            }
        };

        Ok(Self {
            generator,
            templates: PromptTemplates::default(),
            applicant_name: config.user.name.clone(),
            max_workers: config.llm.max_workers,
            output_dir: config.documents.output_dir.clone(),
            resume_text,
            base_cover_letter_text,
        })
    }

    /// Generate a customized cover letter for one job. Falls back to an
    /// uncustomized copy of the base letter when the backend is down.
    pub async fn generate_cover_letter(&self, job: &JobRecord) -> Option<PathBuf> {
        if !self.generator.is_available().await {
            warn!("Text generation backend not available. Using base cover letter without customization.");
            return self.use_base_cover_letter(job).await;
        }

        if self.base_cover_letter_text.is_none() {
            error!("Base cover letter text not available");
            return None;
        }

        self.customize_letter(job).await
    }

    /// Generate cover letters for a batch of jobs with bounded concurrency.
    /// Returns the id to path mapping of the jobs that succeeded; failures
    /// are logged and contribute no entry.
    pub async fn generate_cover_letters_batch(&self, jobs: &[JobRecord]) -> HashMap<String, PathBuf> {
        let mut results = HashMap::new();

        if jobs.is_empty() {
            warn!("No jobs provided for cover letter generation");
            return results;
        }

        if !self.generator.is_available().await {
            warn!("Text generation backend not available. Using base cover letter without customization.");
            for job in jobs {
                if let Some(path) = self.use_base_cover_letter(job).await {
                    results.insert(job.id.clone(), path);
                }
            }
            return results;
        }

        if self.base_cover_letter_text.is_none() {
            error!("Base cover letter text not available");
            return results;
        }

        let pool_size = self.max_workers.min(jobs.len()).max(1);
        debug!("Processing {} jobs with {} workers", jobs.len(), pool_size);

        let outcomes: Vec<(String, Option<PathBuf>)> = stream::iter(jobs.iter().map(|job| async move {
            let path = self.customize_letter(job).await;
            (job.id.clone(), path)
        }))
        .buffer_unordered(pool_size)
        .collect()
        .await;

        let mut failed = 0usize;
        for (job_id, outcome) in outcomes {
            match outcome {
                Some(path) => {
                    results.insert(job_id, path);
                }
                None => {
                    warn!("No cover letter generated for job {}", job_id);
                    failed += 1;
                }
            }
        }

        info!(
            "Generated {} cover letters ({} failed) using up to {} workers",
            results.len(),
            failed,
            pool_size
        );
        results
    }

    /// Prompt-build, generate, repair, persist for one job. Requires the
    /// base cover letter text to be cached.
    async fn customize_letter(&self, job: &JobRecord) -> Option<PathBuf> {
        let base_text = match &self.base_cover_letter_text {
            Some(text) => text,
            None => {
                error!("Base cover letter text not available");
                return None;
            }
        };

        info!("Generating cover letter for {} at {}", job.title, job.company);

        let system_prompt = self.templates.render_system(&self.applicant_name);
        let user_prompt = self.templates.render_user(&PromptParams {
            applicant_name: &self.applicant_name,
            job_title: &job.title,
            company: &job.company,
            description: &job.description,
            resume_text: &self.resume_text,
            base_cover_letter_text: base_text,
        });

        let generated = match self
            .generator
            .generate_text(&system_prompt, &user_prompt, MAX_TOKENS, TEMPERATURE)
            .await
        {
            Some(text) => text,
            None => {
                error!("Failed to generate cover letter text for {} at {}", job.title, job.company);
                return None;
            }
        };

        let letter = if generated.contains(NAME_PLACEHOLDER) {
            info!("Fixed signature in cover letter");
            generated.replace(NAME_PLACEHOLDER, &self.applicant_name)
        } else {
            generated
        };

        match self.save_cover_letter(&letter, job).await {
            Ok(path) => Some(path),
            Err(e) => {
                error!("Failed to save cover letter for {} at {}: {}", job.title, job.company, e);
                None
            }
        }
    }

    /// Write the cached base letter verbatim as this job's cover letter.
    async fn use_base_cover_letter(&self, job: &JobRecord) -> Option<PathBuf> {
        let base_text = match &self.base_cover_letter_text {
            Some(text) => text,
            None => {
                error!("Base cover letter text not available");
                return None;
            }
        };

        match self.save_cover_letter(base_text, job).await {
            Ok(path) => {
                info!("Used base cover letter for {} at {}", job.title, job.company);
                Some(path)
            }
            Err(e) => {
                error!("Failed to save base cover letter for {} at {}: {}", job.title, job.company, e);
                None
            }
        }
    }

    async fn save_cover_letter(&self, text: &str, job: &JobRecord) -> Result<PathBuf> {
        let filename = letter_filename(&job.company, &job.title, Local::now());
        let path = self.output_dir.join(filename);

        tokio::fs::write(&path, text).await?;

        info!("Saved cover letter to {}", path.display());
        Ok(path)
    }
}

/// Filesystem-safe letter filename: company and title with spaces replaced
/// by underscores, plus a second-resolution timestamp.
fn letter_filename(company: &str, title: &str, timestamp: DateTime<Local>) -> String {
    format!(
        "{}_{}_{}.txt",
        company.replace(' ', "_"),
        title.replace(' ', "_"),
        timestamp.format("%Y%m%d_%H%M%S")
    )
}
