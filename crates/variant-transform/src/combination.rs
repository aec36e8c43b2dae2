//! Product partitioning and combination identifiers.

use indexmap::IndexMap;

use variant_model::{GroupId, OutputRow, ProductRow, SourceRow};

use crate::option::ValueMap;

/// Partition key: (product key, sub-group). The sub-group component is only
/// populated when the export carries a `Sub Group` column; missing values
/// form their own partition rather than dropping the row.
type PartitionKey = (Option<String>, Option<String>);

/// Emit one product row per (product key, sub-group) partition of the group.
///
/// For each dimension with a value map, the partition's first row supplies
/// the dimension value; rows within a partition are assumed consistent and
/// are not cross-checked. A missing or unrecognized value contributes
/// nothing — no placeholder, no separator. Components join with `/`; zero
/// components yield an empty combination id.
pub fn build_combinations(
    group_id: &GroupId,
    rows: &[&SourceRow],
    value_maps: &[Option<ValueMap>],
    has_sub_group: bool,
) -> Vec<OutputRow> {
    let mut partitions: IndexMap<PartitionKey, Vec<&SourceRow>> = IndexMap::new();
    for row in rows {
        let sub_group = if has_sub_group {
            row.sub_group.clone()
        } else {
            None
        };
        partitions
            .entry((row.product_key.clone(), sub_group))
            .or_default()
            .push(row);
    }

    let mut records = Vec::with_capacity(partitions.len());
    for ((product_key, _), partition) in partitions {
        let Some(first) = partition.first() else {
            continue;
        };

        let mut components: Vec<&str> = Vec::new();
        for (dimension, value_map) in value_maps.iter().enumerate() {
            let Some(value_map) = value_map else {
                continue;
            };
            if let Some(value) = first.options[dimension].value.as_deref() {
                if let Some(value_id) = value_map.get(value) {
                    components.push(value_id.as_str());
                }
            }
        }

        records.push(OutputRow::Product(ProductRow {
            group_id: group_id.clone(),
            product_id: product_key.unwrap_or_default(),
            combination_id: components.join("/"),
            sku: first.sku.clone().unwrap_or_default(),
            internal_id: first.internal_id.clone().unwrap_or_default(),
        }));
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::build_options;
    use variant_model::OptionCell;

    fn group_id() -> GroupId {
        GroupId::new("G1").unwrap()
    }

    fn row(
        product_key: &str,
        sub_group: Option<&str>,
        options: Vec<(Option<&str>, Option<&str>)>,
    ) -> SourceRow {
        SourceRow {
            group_key: Some("G1".to_string()),
            display_name: None,
            product_key: Some(product_key.to_string()),
            sku: Some(format!("SKU-{product_key}")),
            internal_id: Some(format!("ID-{product_key}")),
            sub_group: sub_group.map(str::to_string),
            options: options
                .into_iter()
                .map(|(name, value)| OptionCell {
                    name: name.map(str::to_string),
                    value: value.map(str::to_string),
                })
                .collect(),
        }
    }

    fn products(records: &[OutputRow]) -> Vec<&ProductRow> {
        records
            .iter()
            .filter_map(|record| match record {
                OutputRow::Product(row) => Some(row),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn combination_joins_dimension_value_ids() {
        let rows = [
            row("P1", None, vec![(Some("Color"), Some("Red")), (Some("Size"), Some("S"))]),
            row("P2", None, vec![(Some("Color"), Some("Blue")), (Some("Size"), Some("M"))]),
        ];
        let refs: Vec<&SourceRow> = rows.iter().collect();
        let set = build_options(&group_id(), &refs, 2);
        let records = build_combinations(&group_id(), &refs, &set.value_maps, false);

        let rows = products(&records);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].product_id, "P1");
        assert_eq!(rows[0].combination_id, "G1-1-1/G1-2-1");
        assert_eq!(rows[0].sku, "SKU-P1");
        assert_eq!(rows[0].internal_id, "ID-P1");
        assert_eq!(rows[1].combination_id, "G1-1-2/G1-2-2");
    }

    #[test]
    fn missing_dimension_contributes_nothing() {
        let rows = [
            row("P1", None, vec![(None, None), (Some("Size"), Some("S"))]),
            row("P2", None, vec![(Some("Color"), Some("Red")), (Some("Size"), Some("M"))]),
        ];
        let refs: Vec<&SourceRow> = rows.iter().collect();
        let set = build_options(&group_id(), &refs, 2);
        let records = build_combinations(&group_id(), &refs, &set.value_maps, false);

        let rows = products(&records);
        // No leading slash, no placeholder for the missing Color.
        assert_eq!(rows[0].combination_id, "G1-2-1");
        assert_eq!(rows[1].combination_id, "G1-1-1/G1-2-2");
    }

    #[test]
    fn no_components_yield_empty_combination() {
        let rows = [row("P1", None, vec![])];
        let refs: Vec<&SourceRow> = rows.iter().collect();
        let records = build_combinations(&group_id(), &refs, &[], false);

        assert_eq!(products(&records)[0].combination_id, "");
    }

    #[test]
    fn sub_group_refines_partitions_and_missing_sub_group_is_kept() {
        let rows = [
            row("P1", Some("A"), vec![(Some("Color"), Some("Red"))]),
            row("P1", Some("B"), vec![(Some("Color"), Some("Blue"))]),
            row("P1", None, vec![(Some("Color"), Some("Red"))]),
        ];
        let refs: Vec<&SourceRow> = rows.iter().collect();
        let set = build_options(&group_id(), &refs, 1);
        let records = build_combinations(&group_id(), &refs, &set.value_maps, true);

        // Three partitions: (P1, A), (P1, B), (P1, missing).
        assert_eq!(products(&records).len(), 3);
    }

    #[test]
    fn without_sub_group_column_product_key_alone_partitions() {
        let rows = [
            row("P1", Some("A"), vec![(Some("Color"), Some("Red"))]),
            row("P1", Some("B"), vec![(Some("Color"), Some("Blue"))]),
        ];
        let refs: Vec<&SourceRow> = rows.iter().collect();
        let set = build_options(&group_id(), &refs, 1);
        let records = build_combinations(&group_id(), &refs, &set.value_maps, false);

        // Sub-group values ignored: one partition, first row wins.
        let rows = products(&records);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].combination_id, "G1-1-1");
    }

    #[test]
    fn first_row_of_partition_supplies_dimension_values() {
        let rows = [
            row("P1", None, vec![(Some("Color"), Some("Red"))]),
            row("P1", None, vec![(Some("Color"), Some("Blue"))]),
        ];
        let refs: Vec<&SourceRow> = rows.iter().collect();
        let set = build_options(&group_id(), &refs, 1);
        let records = build_combinations(&group_id(), &refs, &set.value_maps, false);

        assert_eq!(products(&records)[0].combination_id, "G1-1-1");
    }

    #[test]
    fn unrecognized_value_is_skipped() {
        let rows = [row("P1", None, vec![(Some("Color"), Some("Red"))])];
        let refs: Vec<&SourceRow> = rows.iter().collect();
        // Value map from a different population: "Red" is unknown.
        let mut value_map = ValueMap::new();
        value_map.insert(
            "Blue".to_string(),
            variant_model::ValueId::derive(
                &variant_model::OptionId::derive(&group_id(), 1),
                1,
            ),
        );
        let records = build_combinations(&group_id(), &refs, &[Some(value_map)], false);

        assert_eq!(products(&records)[0].combination_id, "");
    }
}
