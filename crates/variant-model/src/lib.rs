//! Data model for the variant export normalizer.
//!
//! - **schema**: input column names and the fixed output column order
//! - **ids**: typed group/option/value identifiers
//! - **table**: the raw source table as read from the export
//! - **source**: typed source rows with split option cells
//! - **rows**: the four output record kinds and their flat rendering

pub mod error;
pub mod ids;
pub mod rows;
pub mod schema;
pub mod source;
pub mod table;

pub use error::{ModelError, Result};
pub use ids::{GroupId, OptionId, ValueId};
pub use rows::{GroupRow, OptionRow, OutputRow, ProductRow, ValueRow};
pub use schema::{
    COL_GROUP_KEY, COL_INTERNAL_ID, COL_PRODUCT_KEY, COL_PRODUCT_NAME, COL_SKU, COL_SUB_GROUP,
    OPTION_DIMENSIONS, OUTPUT_COLUMNS, REQUIRED_COLUMNS, option_compound_column,
};
pub use source::{OptionCell, SourceRow};
pub use table::SourceTable;
