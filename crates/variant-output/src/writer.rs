//! Fixed-schema CSV writer.

use std::path::Path;

use tracing::debug;

use variant_model::{OUTPUT_COLUMNS, OutputRow};

use crate::error::{OutputError, Result};

/// Write the normalized table to `path`.
///
/// The header is the fixed 16-column schema; unused cells are empty
/// strings. The caller builds all rows before calling, so the file is
/// written in one shot and never holds a partial run.
pub fn write_output(path: &Path, rows: &[OutputRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| OutputError::Csv {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    writer
        .write_record(OUTPUT_COLUMNS)
        .map_err(|e| OutputError::Csv {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    for row in rows {
        writer
            .write_record(&row.to_record())
            .map_err(|e| OutputError::Csv {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
    }
    writer.flush().map_err(|e| OutputError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!(path = %path.display(), rows = rows.len(), "output written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use variant_model::{GroupId, GroupRow, OptionId, OptionRow};

    #[test]
    fn writes_header_and_empty_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let group_id = GroupId::new("G1").unwrap();
        let rows = vec![
            OutputRow::Group(GroupRow {
                group_id: group_id.clone(),
                group_name: "Tee".to_string(),
            }),
            OutputRow::Option(OptionRow {
                group_id: group_id.clone(),
                option_id: OptionId::derive(&group_id, 1),
                option_name: "Color".to_string(),
            }),
        ];

        write_output(&path, &rows).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();

        assert_eq!(
            lines.next().unwrap(),
            "Group ID,Group Name,Product ID,Combination ID,Option ID,Option Name,\
             Style on Page,Style on Card,Value ID,Value Name,Swatch Style,\
             Swatch Color 1,Swatch Color 2,Swatch Image,SKU,Internal ID"
        );
        assert_eq!(lines.next().unwrap(), "G1,Tee,,,,,,,,,,,,,,");
        assert_eq!(
            lines.next().unwrap(),
            "G1,,,,G1-1,Color,Button,Button,,,1 Color,#000,#141414,,,"
        );
        assert!(lines.next().is_none());
    }

    #[test]
    fn fields_with_commas_are_quoted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let rows = vec![OutputRow::Group(GroupRow {
            group_id: GroupId::new("G1").unwrap(),
            group_name: "Tee, classic".to_string(),
        })];

        write_output(&path, &rows).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"Tee, classic\""));
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let result = write_output(Path::new("/nonexistent/dir/out.csv"), &[]);
        assert!(result.is_err());
    }
}
