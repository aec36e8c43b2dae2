//! CSV output for the normalized variant table.

pub mod error;
pub mod writer;

pub use error::{OutputError, Result};
pub use writer::write_output;
