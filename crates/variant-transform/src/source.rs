//! Column resolution and typed-row construction.

use tracing::debug;

use variant_model::{
    COL_GROUP_KEY, COL_INTERNAL_ID, COL_PRODUCT_KEY, COL_PRODUCT_NAME, COL_SKU, COL_SUB_GROUP,
    OPTION_DIMENSIONS, OptionCell, SourceRow, SourceTable, option_compound_column,
};

use crate::error::{Result, TransformError};
use crate::splitter::split_compound;

/// Resolved export column positions.
struct ExportColumns {
    group_key: usize,
    display_name: usize,
    product_key: usize,
    sku: usize,
    internal_id: usize,
    sub_group: Option<usize>,
    /// Compound option columns actually present, in dimension order.
    option_compound: Vec<usize>,
}

/// The export with typed rows and the active option dimensions.
#[derive(Debug)]
pub struct TypedExport {
    pub rows: Vec<SourceRow>,
    /// Number of option dimensions present in the export (0–2).
    pub dimension_count: usize,
    pub has_sub_group: bool,
}

fn resolve_columns(table: &SourceTable) -> Result<ExportColumns> {
    let required = |name: &str| {
        table
            .column_index(name)
            .ok_or_else(|| TransformError::MissingColumn {
                column: name.to_string(),
            })
    };

    let mut option_compound = Vec::new();
    for dimension in 1..=OPTION_DIMENSIONS {
        // An absent compound column disables the dimension, it is not an error.
        if let Some(idx) = table.column_index(&option_compound_column(dimension)) {
            option_compound.push(idx);
        }
    }

    Ok(ExportColumns {
        group_key: required(COL_GROUP_KEY)?,
        display_name: required(COL_PRODUCT_NAME)?,
        product_key: required(COL_PRODUCT_KEY)?,
        sku: required(COL_SKU)?,
        internal_id: required(COL_INTERNAL_ID)?,
        sub_group: table.column_index(COL_SUB_GROUP),
        option_compound,
    })
}

/// Type the raw table into [`SourceRow`]s, splitting compound option cells.
///
/// Fails fast on a missing required column, before any row is built.
pub fn type_rows(table: &SourceTable) -> Result<TypedExport> {
    let columns = resolve_columns(table)?;

    let own = |cell: Option<&str>| cell.map(str::to_string);
    let rows = (0..table.rows.len())
        .map(|row| {
            let options = columns
                .option_compound
                .iter()
                .map(|&col| {
                    let (name, value) = split_compound(table.cell(row, col));
                    OptionCell { name, value }
                })
                .collect();
            SourceRow {
                group_key: own(table.cell(row, columns.group_key)),
                display_name: own(table.cell(row, columns.display_name)),
                product_key: own(table.cell(row, columns.product_key)),
                sku: own(table.cell(row, columns.sku)),
                internal_id: own(table.cell(row, columns.internal_id)),
                sub_group: columns
                    .sub_group
                    .and_then(|col| own(table.cell(row, col))),
                options,
            }
        })
        .collect();

    debug!(
        dimensions = columns.option_compound.len(),
        sub_group = columns.sub_group.is_some(),
        "export columns resolved"
    );
    Ok(TypedExport {
        rows,
        dimension_count: columns.option_compound.len(),
        has_sub_group: columns.sub_group.is_some(),
    })
}
