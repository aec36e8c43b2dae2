//! Column names of the flat export and the fixed output schema.

/// Parent/group key column. Rows without a value here belong to no group.
pub const COL_GROUP_KEY: &str = "Variant Parent / Group ID";

/// Display name column; the group name is derived from its first row.
pub const COL_PRODUCT_NAME: &str = "Input Product Name";

/// Product key column used for combination partitioning.
pub const COL_PRODUCT_KEY: &str = "InputSKU";

/// Storefront SKU echoed onto product rows.
pub const COL_SKU: &str = "SKU";

/// Internal identifier echoed onto product rows.
pub const COL_INTERNAL_ID: &str = "Internal ID";

/// Optional partition refinement below the product key.
pub const COL_SUB_GROUP: &str = "Sub Group";

/// Columns that must be present before any output is produced.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    COL_GROUP_KEY,
    COL_PRODUCT_NAME,
    COL_PRODUCT_KEY,
    COL_SKU,
    COL_INTERNAL_ID,
];

/// Number of option dimensions the export may carry.
pub const OPTION_DIMENSIONS: usize = 2;

/// Compound column name for an option dimension (1-based).
///
/// Absence of the column disables that dimension system-wide.
pub fn option_compound_column(dimension: usize) -> String {
    format!("Variant Option{dimension} Name / Value")
}

/// Output columns in their fixed order. Unused cells are written empty.
pub const OUTPUT_COLUMNS: [&str; 16] = [
    "Group ID",
    "Group Name",
    "Product ID",
    "Combination ID",
    "Option ID",
    "Option Name",
    "Style on Page",
    "Style on Card",
    "Value ID",
    "Value Name",
    "Swatch Style",
    "Swatch Color 1",
    "Swatch Color 2",
    "Swatch Image",
    "SKU",
    "Internal ID",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_compound_column_names() {
        assert_eq!(option_compound_column(1), "Variant Option1 Name / Value");
        assert_eq!(option_compound_column(2), "Variant Option2 Name / Value");
    }

    #[test]
    fn required_columns_include_group_and_sku_keys() {
        assert!(REQUIRED_COLUMNS.contains(&COL_GROUP_KEY));
        assert!(REQUIRED_COLUMNS.contains(&COL_PRODUCT_KEY));
        assert!(REQUIRED_COLUMNS.contains(&COL_SKU));
    }
}
