//! Normalized job listing record

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A job listing as produced by the discovery step. The `id` is unique
/// within a batch and is the key of the batch result mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_letter_path: Option<PathBuf>,
}

impl JobRecord {
    /// Job URL with any tracking query string removed, for display.
    pub fn display_url(&self) -> &str {
        match self.url.split_once('?') {
            Some((base, _)) => base,
            None => &self.url,
        }
    }
}
