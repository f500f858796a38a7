//! Job listing handling
//! Loads discovered jobs, filters them, and exports processed results

pub mod record;
pub mod source;
pub mod filter;
pub mod store;

pub use record::JobRecord;
