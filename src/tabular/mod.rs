//! Tabular frames parsed from uploaded files.
//!
//! A `Frame` is the in-memory shape of one upload: an ordered header row and
//! string-valued data rows. Every cell is carried as text; the persistence
//! layer declares every column as TEXT to match.

pub mod csv;
pub mod workbook;

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::{AppError, AppResult};

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W+").expect("non-word pattern compiles"));

/// Supported upload formats, dispatched on the filename extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Workbook,
}

impl FileFormat {
    /// Extension match is case-insensitive; anything but `csv`, `xls` and
    /// `xlsx` is unsupported.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let extension = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())?
            .to_lowercase();
        match extension.as_str() {
            "csv" => Some(FileFormat::Csv),
            "xls" | "xlsx" => Some(FileFormat::Workbook),
            _ => None,
        }
    }
}

impl std::fmt::Display for FileFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileFormat::Csv => write!(f, "CSV"),
            FileFormat::Workbook => write!(f, "Excel workbook"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Frame {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Normalize every column name for SQL use and reject frames where two
    /// source columns collapse to the same identifier.
    pub fn normalize_columns(&mut self) -> AppResult<()> {
        let mut normalized = Vec::with_capacity(self.columns.len());
        for (idx, column) in self.columns.iter().enumerate() {
            let name = normalize_column_name(column, idx);
            if normalized.contains(&name) {
                return Err(AppError::InvalidRequest(format!(
                    "duplicate column name after normalization: '{}'",
                    name
                )));
            }
            normalized.push(name);
        }
        self.columns = normalized;
        Ok(())
    }
}

/// Parse the raw upload into a frame according to its detected format.
pub fn parse(format: FileFormat, data: &[u8]) -> AppResult<Frame> {
    match format {
        FileFormat::Csv => csv::parse_csv(data),
        FileFormat::Workbook => workbook::parse_workbook(data),
    }
}

/// Trim, replace internal spaces with underscores, lowercase. Headerless
/// cells get a positional fallback name.
pub fn normalize_column_name(name: &str, index: usize) -> String {
    let normalized = name.trim().replace(' ', "_").to_lowercase();
    if normalized.is_empty() {
        format!("column_{}", index + 1)
    } else {
        normalized
    }
}

/// Collapse every run of non-word characters in the trimmed, lowercased
/// name into a single underscore.
pub fn sanitize_table_name(name: &str) -> String {
    NON_WORD
        .replace_all(&name.trim().to_lowercase(), "_")
        .into_owned()
}

/// Strip the final extension from the filename and sanitize the remainder
/// into the table's persistent identifier.
pub fn derive_table_name(filename: &str) -> AppResult<String> {
    let base = filename
        .rsplit_once('.')
        .map(|(base, _)| base)
        .unwrap_or(filename);
    let table_name = sanitize_table_name(base);
    if table_name.is_empty() {
        return Err(AppError::InvalidRequest(format!(
            "filename '{}' yields an empty table name",
            filename
        )));
    }
    Ok(table_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_format_from_extension() {
        assert_eq!(FileFormat::from_filename("people.csv"), Some(FileFormat::Csv));
        assert_eq!(FileFormat::from_filename("people.xls"), Some(FileFormat::Workbook));
        assert_eq!(FileFormat::from_filename("people.xlsx"), Some(FileFormat::Workbook));
        assert_eq!(FileFormat::from_filename("People.CSV"), Some(FileFormat::Csv));
        assert_eq!(FileFormat::from_filename("report.txt"), None);
        assert_eq!(FileFormat::from_filename("no_extension"), None);
    }

    #[test]
    fn sanitizes_table_names() {
        assert_eq!(sanitize_table_name("My Report 2024"), "my_report_2024");
        assert_eq!(sanitize_table_name("  sales (Q1/Q2)  "), "sales_q1_q2_");
        assert_eq!(sanitize_table_name("already_clean"), "already_clean");
    }

    #[test]
    fn sanitization_is_idempotent() {
        let once = sanitize_table_name("My Report 2024");
        assert_eq!(sanitize_table_name(&once), once);
    }

    #[test]
    fn derives_table_name_from_filename() {
        assert_eq!(derive_table_name("My Report 2024.csv").unwrap(), "my_report_2024");
        assert_eq!(derive_table_name("people.csv").unwrap(), "people");
        assert_eq!(derive_table_name("archive.2024.xlsx").unwrap(), "archive_2024");
    }

    #[test]
    fn bare_extension_yields_no_table_name() {
        assert!(derive_table_name(".csv").is_err());
    }

    #[test]
    fn normalizes_column_names() {
        assert_eq!(normalize_column_name(" First Name ", 0), "first_name");
        assert_eq!(normalize_column_name("AGE", 1), "age");
        assert_eq!(normalize_column_name("", 2), "column_3");
    }

    #[test]
    fn normalize_columns_rejects_collisions() {
        let mut frame = Frame {
            columns: vec!["First Name".into(), "first name".into()],
            rows: vec![],
        };
        let err = frame.normalize_columns().unwrap_err();
        assert!(matches!(err, AppError::InvalidRequest(_)));
    }

    #[test]
    fn normalize_columns_applies_in_place() {
        let mut frame = Frame {
            columns: vec![" First Name ".into(), "Age".into()],
            rows: vec![vec!["Alice".into(), "30".into()]],
        };
        frame.normalize_columns().unwrap();
        assert_eq!(frame.columns, vec!["first_name", "age"]);
    }
}
