//! Orchestration of the normalization pipeline.

use tracing::{debug, info};

use variant_model::{GroupRow, OutputRow, SourceTable};

use crate::combination::build_combinations;
use crate::error::Result;
use crate::group::{group_display_name, partition_groups};
use crate::option::build_options;
use crate::source::type_rows;

/// Counts accumulated over one run, reported in the CLI summary.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct TransformSummary {
    pub rows_read: usize,
    pub rows_without_group: usize,
    pub groups: usize,
    pub options: usize,
    pub values: usize,
    pub products: usize,
}

/// The normalized output table plus its run summary.
#[derive(Debug)]
pub struct TransformResult {
    pub rows: Vec<OutputRow>,
    pub summary: TransformSummary,
}

/// Run the whole transformation over the raw export table.
///
/// Emission order per group: the group row, then each option row followed
/// by its value rows, then the product rows. Groups appear in first-seen
/// order. Running twice over the same input produces identical output.
pub fn normalize_export(table: &SourceTable) -> Result<TransformResult> {
    let typed = type_rows(table)?;
    let (groups, rows_without_group) = partition_groups(&typed.rows);

    let mut summary = TransformSummary {
        rows_read: typed.rows.len(),
        rows_without_group,
        groups: groups.len(),
        ..TransformSummary::default()
    };
    let mut output = Vec::new();

    for group in &groups {
        output.push(OutputRow::Group(GroupRow {
            group_id: group.group_id.clone(),
            group_name: group_display_name(&group.rows),
        }));

        let option_set = build_options(&group.group_id, &group.rows, typed.dimension_count);
        for record in &option_set.records {
            match record {
                OutputRow::Option(_) => summary.options += 1,
                OutputRow::Value(_) => summary.values += 1,
                _ => {}
            }
        }
        let product_rows = build_combinations(
            &group.group_id,
            &group.rows,
            &option_set.value_maps,
            typed.has_sub_group,
        );
        output.extend(option_set.records);
        summary.products += product_rows.len();
        debug!(
            group_id = %group.group_id,
            rows = group.rows.len(),
            products = product_rows.len(),
            "group normalized"
        );
        output.extend(product_rows);
    }

    info!(
        rows_read = summary.rows_read,
        groups = summary.groups,
        options = summary.options,
        values = summary.values,
        products = summary.products,
        "normalization complete"
    );
    Ok(TransformResult {
        rows: output,
        summary,
    })
}
