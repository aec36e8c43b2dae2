//! Result types consumed by the summary printer.

use std::path::PathBuf;

use variant_transform::TransformSummary;

/// Outcome of one `convert` run.
#[derive(Debug)]
pub struct ConvertResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub rows_written: usize,
    pub summary: TransformSummary,
}
