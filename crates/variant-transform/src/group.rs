//! Stable partitioning of export rows into product groups.

use indexmap::IndexMap;
use tracing::warn;

use variant_model::{GroupId, SourceRow};

/// One group's rows, in input order.
#[derive(Debug)]
pub struct GroupSlice<'a> {
    pub group_id: GroupId,
    pub rows: Vec<&'a SourceRow>,
}

/// Partition rows by group key, groups in first-seen order.
///
/// Rows without a group key belong to no group and are skipped; the count
/// of skipped rows is returned for the run summary.
pub fn partition_groups(rows: &[SourceRow]) -> (Vec<GroupSlice<'_>>, usize) {
    let mut groups: IndexMap<GroupId, Vec<&SourceRow>> = IndexMap::new();
    let mut skipped = 0usize;

    for row in rows {
        let Some(key) = row.group_key.as_deref() else {
            skipped += 1;
            continue;
        };
        let Ok(group_id) = GroupId::new(key) else {
            skipped += 1;
            continue;
        };
        groups.entry(group_id).or_default().push(row);
    }

    if skipped > 0 {
        warn!(rows = skipped, "rows without a group key were skipped");
    }

    let slices = groups
        .into_iter()
        .map(|(group_id, rows)| GroupSlice { group_id, rows })
        .collect();
    (slices, skipped)
}

/// Derive the group's display name from its first row: the portion of the
/// product name before the first `(`, trimmed. A missing name yields an
/// empty group name.
pub fn group_display_name(rows: &[&SourceRow]) -> String {
    rows.first()
        .and_then(|row| row.display_name.as_deref())
        .map(|name| {
            name.split('(')
                .next()
                .unwrap_or_default()
                .trim()
                .to_string()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(group_key: Option<&str>, display_name: Option<&str>) -> SourceRow {
        SourceRow {
            group_key: group_key.map(str::to_string),
            display_name: display_name.map(str::to_string),
            product_key: None,
            sku: None,
            internal_id: None,
            sub_group: None,
            options: Vec::new(),
        }
    }

    #[test]
    fn groups_enumerate_in_first_seen_order() {
        let rows = vec![
            row(Some("ZZZ"), None),
            row(Some("AAA"), None),
            row(Some("ZZZ"), None),
        ];
        let (groups, skipped) = partition_groups(&rows);

        assert_eq!(skipped, 0);
        let ids: Vec<&str> = groups.iter().map(|g| g.group_id.as_str()).collect();
        // Not sorted: ZZZ was seen first.
        assert_eq!(ids, vec!["ZZZ", "AAA"]);
        assert_eq!(groups[0].rows.len(), 2);
    }

    #[test]
    fn rows_without_group_key_are_skipped_and_counted() {
        let rows = vec![row(None, None), row(Some("G1"), None), row(None, None)];
        let (groups, skipped) = partition_groups(&rows);

        assert_eq!(groups.len(), 1);
        assert_eq!(skipped, 2);
    }

    #[test]
    fn display_name_truncates_at_first_parenthesis() {
        let rows = vec![row(Some("G1"), Some("Classic Tee (Parent) (old)"))];
        let (groups, _) = partition_groups(&rows);
        assert_eq!(group_display_name(&groups[0].rows), "Classic Tee");
    }

    #[test]
    fn missing_display_name_yields_empty_group_name() {
        let rows = vec![row(Some("G1"), None)];
        let (groups, _) = partition_groups(&rows);
        assert_eq!(group_display_name(&groups[0].rows), "");
    }
}
