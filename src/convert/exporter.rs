use crate::config::ExportConfig;
use crate::convert::extractor::extract_phone_numbers;
use crate::convert::types::ExportedWorkbook;
use crate::error::{ConvertError, Result};
use log::info;
use rust_xlsxwriter::Workbook;
use serde_json::Value;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Worksheet row limit minus the header row.
pub const MAX_DATA_ROWS: usize = 1_048_575;

/// Single-sheet workbook: the header in A1, one phone number per row below.
pub fn build_workbook(records: &[String], config: &ExportConfig) -> Result<Vec<u8>> {
    if records.len() > MAX_DATA_ROWS {
        return Err(ConvertError::TooManyRows {
            count: records.len(),
        });
    }

    let mut workbook = Workbook::new();

    {
        let sheet = workbook.add_worksheet();
        sheet.set_name(&config.sheet_name)?;
        sheet.set_column_width(0, config.column_width)?;
        sheet.write_string(0, 0, &config.header)?;

        for (row, number) in (1u32..).zip(records) {
            sheet.write_string(row, 0, number)?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}

pub fn export_phone_numbers(doc: &Value, config: &ExportConfig) -> Result<ExportedWorkbook> {
    let numbers = extract_phone_numbers(doc);
    let bytes = build_workbook(&numbers, config)?;
    info!(
        "Built workbook with {} phone numbers ({} bytes)",
        numbers.len(),
        bytes.len()
    );

    Ok(ExportedWorkbook {
        bytes,
        rows: numbers.len(),
    })
}

/// Writes through a temporary file in the target directory, so the target is
/// either the complete workbook or untouched.
pub fn save_workbook(bytes: &[u8], path: &Path) -> Result<()> {
    let write_error = |source: std::io::Error| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(write_error)?;
    file.write_all(bytes).map_err(write_error)?;
    file.as_file().sync_all().map_err(write_error)?;
    file.persist(path).map_err(|e| write_error(e.error))?;

    info!("Saved workbook to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{open_workbook_from_rs, Data, Reader, Xlsx};
    use serde_json::json;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn read_rows(bytes: Vec<u8>, sheet_name: &str) -> Vec<Vec<Data>> {
        let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes)).unwrap();
        assert_eq!(workbook.sheet_names(), vec![sheet_name.to_string()]);
        let range = workbook.worksheet_range(sheet_name).unwrap();
        range.rows().map(|row| row.to_vec()).collect()
    }

    fn numbers(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn writes_header_and_one_row_per_number() {
        let config = ExportConfig::default();
        let bytes = build_workbook(&numbers(&["555-1234", "555-9876"]), &config).unwrap();

        let rows = read_rows(bytes, "Phone Numbers");
        assert_eq!(
            rows,
            vec![
                vec![Data::String("PhoneNumber".to_string())],
                vec![Data::String("555-1234".to_string())],
                vec![Data::String("555-9876".to_string())],
            ]
        );
    }

    #[test]
    fn empty_input_gives_header_only() {
        let bytes = build_workbook(&[], &ExportConfig::default()).unwrap();
        let rows = read_rows(bytes, "Phone Numbers");
        assert_eq!(rows, vec![vec![Data::String("PhoneNumber".to_string())]]);
    }

    #[test]
    fn numeric_looking_strings_stay_text() {
        let bytes = build_workbook(&numbers(&["0123456789"]), &ExportConfig::default()).unwrap();
        let rows = read_rows(bytes, "Phone Numbers");
        assert_eq!(rows[1], vec![Data::String("0123456789".to_string())]);
    }

    #[test]
    fn honours_configured_names() {
        let config = ExportConfig {
            sheet_name: "Contacts".to_string(),
            header: "Number".to_string(),
            ..ExportConfig::default()
        };
        let bytes = build_workbook(&numbers(&["1"]), &config).unwrap();
        let rows = read_rows(bytes, "Contacts");
        assert_eq!(rows[0], vec![Data::String("Number".to_string())]);
    }

    #[test]
    fn invalid_sheet_name_is_an_xlsx_error() {
        let config = ExportConfig {
            sheet_name: "bad[name]".to_string(),
            ..ExportConfig::default()
        };
        let err = build_workbook(&numbers(&["1"]), &config).unwrap_err();
        assert!(matches!(err, ConvertError::Xlsx(_)));
    }

    #[test]
    fn row_count_matches_unique_numbers() {
        let doc = json!([
            {"type": "phone", "text": "111"},
            {"type": "phone", "text": "111"},
            {"type": "phone", "text": "222"}
        ]);
        let exported = export_phone_numbers(&doc, &ExportConfig::default()).unwrap();
        assert_eq!(exported.rows, 2);

        let rows = read_rows(exported.bytes, "Phone Numbers");
        assert_eq!(rows.len(), 1 + exported.rows);
        assert!(rows.iter().all(|row| row.len() == 1));
    }

    #[test]
    fn saves_complete_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("UniquePhoneNumbers.xlsx");
        let bytes = build_workbook(&numbers(&["555"]), &ExportConfig::default()).unwrap();

        save_workbook(&bytes, &path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), bytes);
        // Only the target remains, no stray temp file.
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn save_into_missing_directory_fails_cleanly() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.xlsx");
        let err = save_workbook(b"data", &path).unwrap_err();
        assert!(matches!(err, ConvertError::Write { .. }));
        assert!(!path.exists());
    }
}
