//! Command implementations.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use variant_ingest::read_source_table;
use variant_model::{
    COL_GROUP_KEY, COL_INTERNAL_ID, COL_PRODUCT_KEY, COL_PRODUCT_NAME, COL_SKU, COL_SUB_GROUP,
    OPTION_DIMENSIONS, OUTPUT_COLUMNS, option_compound_column,
};
use variant_output::write_output;
use variant_transform::normalize_export;

use crate::cli::ConvertArgs;
use crate::summary::{apply_table_style, header_cell};
use crate::types::ConvertResult;

/// Default output path: `<input stem>-variants.csv` next to the input.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "export".to_string());
    input.with_file_name(format!("{stem}-variants.csv"))
}

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertResult> {
    let input = &args.input;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(input));
    let span = info_span!("convert", input = %input.display());
    let _guard = span.enter();

    let start = Instant::now();
    let table = read_source_table(input).context("read export")?;
    info!(
        rows = table.rows.len(),
        columns = table.headers.len(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );

    let result = normalize_export(&table).context("normalize export")?;

    write_output(&output, &result.rows).context("write output")?;
    info!(
        output = %output.display(),
        rows = result.rows.len(),
        duration_ms = start.elapsed().as_millis(),
        "convert complete"
    );

    Ok(ConvertResult {
        input: input.clone(),
        output,
        rows_written: result.rows.len(),
        summary: result.summary,
    })
}

pub fn run_columns() -> Result<()> {
    let mut input_table = Table::new();
    input_table.set_header(vec![
        header_cell("Input Column"),
        header_cell("Presence"),
        header_cell("Role"),
    ]);
    apply_table_style(&mut input_table);
    let required: [(&str, &str); 5] = [
        (COL_GROUP_KEY, "parent/group key"),
        (COL_PRODUCT_NAME, "display name, group name source"),
        (COL_PRODUCT_KEY, "product key for combinations"),
        (COL_SKU, "storefront SKU echoed to product rows"),
        (COL_INTERNAL_ID, "internal id echoed to product rows"),
    ];
    for (column, role) in required {
        input_table.add_row(vec![column, "required", role]);
    }
    input_table.add_row(vec![
        COL_SUB_GROUP,
        "optional",
        "refines product partitioning",
    ]);
    for dimension in 1..=OPTION_DIMENSIONS {
        input_table.add_row(vec![
            option_compound_column(dimension),
            "optional".to_string(),
            "compound option cell; absence disables the dimension".to_string(),
        ]);
    }
    println!("{input_table}");

    let mut output_table = Table::new();
    output_table.set_header(vec![header_cell("#"), header_cell("Output Column")]);
    apply_table_style(&mut output_table);
    for (index, column) in OUTPUT_COLUMNS.iter().enumerate() {
        output_table.add_row(vec![(index + 1).to_string(), (*column).to_string()]);
    }
    println!("{output_table}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_path_uses_input_stem() {
        let path = default_output_path(Path::new("/data/export.csv"));
        assert_eq!(path, Path::new("/data/export-variants.csv"));
    }
}
