use csv::ReaderBuilder;

use super::Frame;
use crate::types::{AppError, AppResult};

/// Parse comma-separated bytes into a frame. The first record is the header
/// row; records with a different field count than the header are a parse
/// error, as are inputs with no columns at all.
pub fn parse_csv(data: &[u8]) -> AppResult<Frame> {
    let mut reader = ReaderBuilder::new().from_reader(data);

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| AppError::Parse(e.to_string()))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    if columns.is_empty() || columns.iter().all(|c| c.trim().is_empty()) {
        return Err(AppError::Parse("file contains no columns".to_string()));
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| AppError::Parse(e.to_string()))?;
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
    }

    Ok(Frame { columns, rows })
}
