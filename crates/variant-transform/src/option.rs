//! Per-group option and value discovery.

use indexmap::{IndexMap, IndexSet};

use variant_model::{GroupId, OptionId, OptionRow, OutputRow, SourceRow, ValueId, ValueRow};

/// Raw value text → assigned value id, scoped to one option dimension.
///
/// Insertion order is the id assignment order, so iteration replays value
/// rows exactly as numbered.
pub type ValueMap = IndexMap<String, ValueId>;

/// Option and value rows for one group, plus the per-dimension value maps
/// the combination builder consumes.
#[derive(Debug)]
pub struct OptionSet {
    /// Each option row immediately followed by its value rows.
    pub records: Vec<OutputRow>,
    /// Aligned with the export's dimensions; `None` when the dimension has
    /// no value anywhere in the group and was skipped.
    pub value_maps: Vec<Option<ValueMap>>,
}

/// Discover the option dimensions present in a group and number their
/// distinct values.
///
/// Dimensions are visited in fixed order; a dimension with zero non-missing
/// values consumes no option index. Values keep their literal text: casing
/// and inner whitespace differences are distinct values by policy.
pub fn build_options(group_id: &GroupId, rows: &[&SourceRow], dimension_count: usize) -> OptionSet {
    let mut records = Vec::new();
    let mut value_maps = Vec::with_capacity(dimension_count);
    let mut option_index = 0usize;

    for dimension in 0..dimension_count {
        let values: IndexSet<&str> = rows
            .iter()
            .filter_map(|row| row.options[dimension].value.as_deref())
            .collect();
        if values.is_empty() {
            value_maps.push(None);
            continue;
        }

        option_index += 1;
        let option_id = OptionId::derive(group_id, option_index);
        let option_name = rows
            .iter()
            .find_map(|row| row.options[dimension].name.clone())
            .unwrap_or_default();
        records.push(OutputRow::Option(OptionRow {
            group_id: group_id.clone(),
            option_id: option_id.clone(),
            option_name,
        }));

        let mut value_map = ValueMap::new();
        for (offset, value) in values.iter().enumerate() {
            let value_id = ValueId::derive(&option_id, offset + 1);
            records.push(OutputRow::Value(ValueRow {
                group_id: group_id.clone(),
                option_id: option_id.clone(),
                value_id: value_id.clone(),
                value_name: value.to_string(),
            }));
            value_map.insert(value.to_string(), value_id);
        }
        value_maps.push(Some(value_map));
    }

    OptionSet {
        records,
        value_maps,
    }
}
