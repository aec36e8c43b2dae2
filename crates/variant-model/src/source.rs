/// One split `"Name Value"` option cell.
///
/// A cell with a value always has a name; a bare name has no value.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OptionCell {
    pub name: Option<String>,
    pub value: Option<String>,
}

/// A typed export row. `options` is aligned with the option dimensions
/// present in the export, in dimension order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SourceRow {
    pub group_key: Option<String>,
    pub display_name: Option<String>,
    pub product_key: Option<String>,
    pub sku: Option<String>,
    pub internal_id: Option<String>,
    pub sub_group: Option<String>,
    pub options: Vec<OptionCell>,
}
