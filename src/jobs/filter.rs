//! Filters job listings against configured exclusion keywords

use crate::error::{JobApplierError, Result};
use crate::jobs::record::JobRecord;
use aho_corasick::AhoCorasick;
use log::debug;

/// Title-based exclusion filter. A job is dropped when any configured
/// keyword occurs in its title, matched case-insensitively.
pub struct JobFilter {
    matcher: AhoCorasick,
    keywords: Vec<String>,
}

impl JobFilter {
    pub fn new(exclude_keywords: &[String]) -> Result<Self> {
        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(exclude_keywords)
            .map_err(|e| JobApplierError::InvalidInput(format!("Failed to build job filter: {}", e)))?;

        Ok(Self {
            matcher,
            keywords: exclude_keywords.to_vec(),
        })
    }

    pub fn filter_jobs(&self, jobs: Vec<JobRecord>) -> Vec<JobRecord> {
        jobs.into_iter()
            .filter(|job| match self.matcher.find(&job.title) {
                Some(mat) => {
                    debug!(
                        "Excluding job {} due to keyword: {}",
                        job.title,
                        self.keywords[mat.pattern().as_usize()]
                    );
                    false
                }
                None => true,
            })
            .collect()
    }
}
