//! Core normalization of the flat variant export.
//!
//! The transformation runs in data-flow order:
//!
//! - **splitter**: compound `"Name Value"` cells into (name, value)
//! - **source**: column resolution and typed-row construction
//! - **group**: stable partition by parent/group key, group-name derivation
//! - **option**: per-group option and value discovery with synthetic ids
//! - **combination**: per-product combination identifiers
//! - **pipeline**: orchestration and run summary
//!
//! Everything is single-pass and deterministic: groups, values, and product
//! partitions enumerate in first-seen order, option dimensions in fixed
//! order. Insertion-ordered maps (`IndexMap`) carry every "first seen"
//! requirement; plain hash maps would not.

pub mod combination;
pub mod error;
pub mod group;
pub mod option;
pub mod pipeline;
pub mod source;
pub mod splitter;

pub use error::{Result, TransformError};
pub use pipeline::{TransformResult, TransformSummary, normalize_export};
