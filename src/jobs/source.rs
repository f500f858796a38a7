//! Loads discovered job listings from a JSON export

use crate::error::{JobApplierError, Result};
use crate::jobs::record::JobRecord;
use log::info;
use std::path::Path;

/// Read a discovery export (a JSON array of job objects) into job records.
pub async fn load_jobs_from_file(path: &Path) -> Result<Vec<JobRecord>> {
    if !path.exists() {
        return Err(JobApplierError::JobSource(format!(
            "Job listings file not found: {}",
            path.display()
        )));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let jobs: Vec<JobRecord> = serde_json::from_str(&content)?;

    info!("Loaded {} jobs from {}", jobs.len(), path.display());
    Ok(jobs)
}
