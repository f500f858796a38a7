//! Writes processed job listings back to disk

use crate::error::Result;
use crate::jobs::record::JobRecord;
use log::info;
use std::path::Path;

/// Export jobs as pretty-printed JSON, tidying descriptions first so the
/// file is readable: every line trimmed, runs of blank lines collapsed.
pub async fn export_jobs_to_file(jobs: &[JobRecord], path: &Path) -> Result<()> {
    let export: Vec<JobRecord> = jobs
        .iter()
        .map(|job| {
            let mut job = job.clone();
            job.description = tidy_description(&job.description);
            job
        })
        .collect();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let content = serde_json::to_string_pretty(&export)?;
    tokio::fs::write(path, content).await?;

    info!("Exported {} jobs to {}", jobs.len(), path.display());
    Ok(())
}

fn tidy_description(description: &str) -> String {
    let trimmed: String = description
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n");
    trimmed.replace("\n\n\n", "\n\n")
}
