//! Cover letter generation and maintenance

pub mod engine;
pub mod cleanup;

pub use engine::CoverLetterEngine;
