//! CLI library components for the variant export normalizer.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
