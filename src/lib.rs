//! Job applier library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod jobs;
pub mod letters;
pub mod llm;
pub mod output;

pub use config::Config;
pub use error::{JobApplierError, Result};
