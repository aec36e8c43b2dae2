//! Export file ingestion.
//!
//! Reads the flat variant export into a [`variant_model::SourceTable`],
//! tolerating both UTF-8 and legacy Windows-1252 byte encodings.

pub mod encoding;
pub mod error;
pub mod reader;

pub use encoding::decode_export_bytes;
pub use error::{IngestError, Result};
pub use reader::read_source_table;
