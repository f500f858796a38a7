//! Configuration management for the job applier

use crate::error::{JobApplierError, Result};
use log::warn;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub user: UserConfig,
    pub llm: LlmConfig,
    pub job_search: JobSearchConfig,
    pub application: ApplicationConfig,
    pub documents: DocumentConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub ollama_model: String,
    pub max_workers: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JobSearchConfig {
    pub keywords: Vec<String>,
    pub locations: Vec<String>,
    pub exclude_keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    pub generate_cover_letters: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    pub resume_path: PathBuf,
    pub base_cover_letter_path: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user: UserConfig::default(),
            llm: LlmConfig::default(),
            job_search: JobSearchConfig::default(),
            application: ApplicationConfig::default(),
            documents: DocumentConfig::default(),
        }
    }
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            name: "Your Name".to_string(),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            ollama_model: "llama2".to_string(),
            max_workers: 3,
        }
    }
}

impl Default for JobSearchConfig {
    fn default() -> Self {
        Self {
            keywords: Vec::new(),
            locations: Vec::new(),
            exclude_keywords: Vec::new(),
        }
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            generate_cover_letters: None,
        }
    }
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            resume_path: PathBuf::from("data/resume.pdf"),
            base_cover_letter_path: PathBuf::from("data/base_cover_letter.pdf"),
            output_dir: PathBuf::from("data/cover_letters"),
        }
    }
}

impl Config {
    /// Load configuration from the given path, or the default location.
    /// A missing file is created from defaults; values of the form `${VAR}`
    /// are replaced with the matching environment variable.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml_str(&content)
        } else {
            let config = Self::default();
            config.save(&config_path)?;
            Ok(config)
        }
    }

    /// Parse configuration from TOML text, applying environment substitution.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut value: toml::Value = content
            .parse()
            .map_err(|e| JobApplierError::Configuration(format!("Failed to parse config: {}", e)))?;
        replace_env_vars(&mut value);
        value
            .try_into()
            .map_err(|e| JobApplierError::Configuration(format!("Invalid config: {}", e)))
    }

    pub fn save(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| JobApplierError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    fn default_path() -> PathBuf {
        PathBuf::from("config").join("config.toml")
    }

    /// Base cover letter path, falling back to a `.txt` sibling when the
    /// configured file does not exist.
    pub fn base_cover_letter_path(&self) -> Option<PathBuf> {
        let configured = &self.documents.base_cover_letter_path;
        if configured.exists() {
            return Some(configured.clone());
        }
        let txt = configured.with_extension("txt");
        if txt.exists() {
            return Some(txt);
        }
        None
    }
}

/// Recursively replace `${VAR}` string values with the environment variable
/// of that name. Unset variables leave the literal value in place.
fn replace_env_vars(value: &mut toml::Value) {
    match value {
        toml::Value::Table(table) => {
            for (_, v) in table.iter_mut() {
                replace_env_vars(v);
            }
        }
        toml::Value::Array(items) => {
            for item in items.iter_mut() {
                replace_env_vars(item);
            }
        }
        toml::Value::String(s) => {
            if let Some(var_name) = env_var_name(s) {
                match std::env::var(&var_name) {
                    Ok(env_value) => *s = env_value,
                    Err(_) => warn!("Environment variable {} not found", var_name),
                }
            }
        }
        _ => {}
    }
}

/// Returns the variable name when the whole string has the form `${VAR}`.
fn env_var_name(s: &str) -> Option<String> {
    let pattern = Regex::new(r"^\$\{([A-Za-z_][A-Za-z0-9_]*)\}$").ok()?;
    pattern
        .captures(s)
        .map(|caps| caps[1].to_string())
}
