use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, DataType, Reader};

use super::Frame;
use crate::types::{AppError, AppResult};

/// Parse workbook bytes (`.xls` or `.xlsx`) into a frame from the first
/// worksheet. The first row is the header row; numeric and date cells are
/// rendered to their display text, empty cells to the empty string.
pub fn parse_workbook(data: &[u8]) -> AppResult<Frame> {
    let cursor = Cursor::new(data);
    let mut sheets =
        open_workbook_auto_from_rs(cursor).map_err(|e| AppError::Parse(e.to_string()))?;

    let range = sheets
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::Parse("workbook has no worksheets".to_string()))?
        .map_err(|e| AppError::Parse(e.to_string()))?;

    let rows: Vec<Vec<Data>> = range.rows().map(|r| r.to_vec()).collect();
    frame_from_rows(&rows)
}

fn frame_from_rows(rows: &[Vec<Data>]) -> AppResult<Frame> {
    let Some((header, body)) = rows.split_first() else {
        return Err(AppError::Parse("worksheet is empty".to_string()));
    };

    let columns: Vec<String> = header.iter().map(cell_to_string).collect();
    if columns.is_empty() {
        return Err(AppError::Parse("worksheet contains no columns".to_string()));
    }

    let rows = body
        .iter()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();

    Ok(Frame { columns, rows })
}

fn cell_to_string(cell: &Data) -> String {
    cell.as_string().unwrap_or_else(|| cell.to_string())
}
