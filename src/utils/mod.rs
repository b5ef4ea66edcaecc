//! Utility modules for the metadata pipeline.

pub mod date;
pub mod log;
