use csv::ReaderBuilder;

use super::error::ParseError;
use super::model::{Cell, RawTable, Row};

/// Column whose zero value marks a template row.
pub const SENTINEL_COLUMN: &str = "Number";

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Parse one stat file into a typed table.
///
/// Layout: first line is the comma-separated header, every further line is
/// one record. Fields are split on bare commas; quoting is not recognised,
/// so `"` is ordinary text. Each field is coerced with [`Cell::coerce`].
///
/// Lines are dropped when
/// * every field is blank after trimming (`,,,`), or
/// * the row is a sentinel: `Number` is 0 and every other cell is blank or 0.
///
/// Short lines are padded with `Text("")`; surplus fields are ignored, so
/// every row holds exactly one cell per header column.
pub fn parse(text: &str) -> Result<RawTable, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::Empty);
    }
    // The reader skips empty lines, so check line 0 here.
    if text.lines().next().map_or(true, |line| line.trim().is_empty()) {
        return Err(ParseError::MissingHeader);
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(text.as_bytes());

    let mut records = reader.records();

    let header: Vec<String> = match records.next() {
        Some(record) => record?.iter().map(|h| h.trim().to_string()).collect(),
        None => return Err(ParseError::MissingHeader),
    };
    if header.iter().all(|h| h.is_empty()) {
        return Err(ParseError::MissingHeader);
    }
    let sentinel_idx = header.iter().position(|h| h == SENTINEL_COLUMN);

    let mut rows = Vec::new();
    let mut dropped = 0usize;

    for result in records {
        let record = result?;
        if record.iter().all(|f| f.trim().is_empty()) {
            continue;
        }

        let cells: Vec<Cell> = (0..header.len())
            .map(|i| Cell::coerce(record.get(i).unwrap_or("")))
            .collect();
        let row = Row::new(cells);

        if is_sentinel(&row, sentinel_idx) {
            dropped += 1;
            continue;
        }
        rows.push(row);
    }

    log::debug!(
        "parsed {} rows over {} columns ({dropped} sentinel rows dropped)",
        rows.len(),
        header.len()
    );
    Ok(RawTable::new(header, rows))
}

/// A template row: `Number` holds `Number(0)` and every other cell is
/// `Text("")` or `Number(0)`. Tables without a `Number` column have none.
///
/// Note this also catches a genuine player with zero in every column.
fn is_sentinel(row: &Row, sentinel_idx: Option<usize>) -> bool {
    let Some(idx) = sentinel_idx else {
        return false;
    };
    matches!(row.get(idx), Some(Cell::Number(v)) if *v == 0.0)
        && row.cells.iter().all(Cell::is_blank_or_zero)
}
