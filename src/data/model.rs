use std::fmt;

// ---------------------------------------------------------------------------
// Cell – a single typed value in a stat table
// ---------------------------------------------------------------------------

/// A typed cell, decided once at parse time and never re-inferred.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// A finite decimal value.
    Number(f64),
    /// Anything else, already trimmed. The empty string is `Text("")`.
    Text(String),
}

impl Cell {
    /// Coerce a raw field. Numeric iff the trimmed text is non-empty and
    /// parses to a finite `f64`.
    pub fn coerce(raw: &str) -> Self {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            if let Ok(v) = trimmed.parse::<f64>() {
                if v.is_finite() {
                    return Cell::Number(v);
                }
            }
        }
        Cell::Text(trimmed.to_string())
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(v) => Some(*v),
            Cell::Text(_) => None,
        }
    }

    /// `Text("")` or `Number(0)`: the values a template row is made of.
    pub fn is_blank_or_zero(&self) -> bool {
        match self {
            Cell::Number(v) => *v == 0.0,
            Cell::Text(s) => s.is_empty(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Number(v) => write!(f, "{v}"),
            Cell::Text(s) => write!(f, "{s}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Row / RawTable
// ---------------------------------------------------------------------------

/// One record. Cells are positional: `cells[i]` belongs to `header[i]` of
/// the owning [`RawTable`], so a row always carries exactly one value per
/// column.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Row { cells }
    }

    pub fn get(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }
}

/// An ordered table of rows sharing one header.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawTable {
    /// Ordered column names.
    pub header: Vec<String>,
    /// Rows in source order (or concatenation order for aggregates).
    pub rows: Vec<Row>,
}

impl RawTable {
    pub fn new(header: Vec<String>, rows: Vec<Row>) -> Self {
        debug_assert!(rows.iter().all(|r| r.cells.len() == header.len()));
        RawTable { header, rows }
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h == name)
    }

    /// Look up a cell by row position and column name.
    pub fn cell(&self, row: usize, column: &str) -> Option<&Cell> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// EntityId
// ---------------------------------------------------------------------------

/// Key of one source table (a team), derived from `<id><suffix>` file names.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        EntityId(id.into())
    }

    /// Strip `suffix` from a catalog file name. `None` if the name does not
    /// carry the suffix or nothing is left after stripping it.
    pub fn from_file_name(file_name: &str, suffix: &str) -> Option<Self> {
        file_name
            .strip_suffix(suffix)
            .filter(|id| !id.is_empty())
            .map(EntityId::new)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn file_name(&self, suffix: &str) -> String {
        format!("{}{suffix}", self.0)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_numbers_and_text() {
        assert_eq!(Cell::coerce(" 12 "), Cell::Number(12.0));
        assert_eq!(Cell::coerce(".375"), Cell::Number(0.375));
        assert_eq!(Cell::coerce("-4.5"), Cell::Number(-4.5));
        assert_eq!(Cell::coerce(""), Cell::Text(String::new()));
        assert_eq!(Cell::coerce("   "), Cell::Text(String::new()));
        assert_eq!(Cell::coerce(" Smith (SS) "), Cell::Text("Smith (SS)".into()));
    }

    #[test]
    fn coerce_rejects_non_finite_and_formatted_numbers() {
        assert_eq!(Cell::coerce("inf"), Cell::Text("inf".into()));
        assert_eq!(Cell::coerce("NaN"), Cell::Text("NaN".into()));
        assert_eq!(Cell::coerce("$5"), Cell::Text("$5".into()));
        assert_eq!(Cell::coerce("1,000"), Cell::Text("1,000".into()));
    }

    #[test]
    fn display_uses_plain_numeric_text() {
        assert_eq!(Cell::Number(3.0).to_string(), "3");
        assert_eq!(Cell::Number(0.5).to_string(), "0.5");
        assert_eq!(Cell::Text("abc".into()).to_string(), "abc");
    }

    #[test]
    fn entity_id_from_file_name() {
        assert_eq!(
            EntityId::from_file_name("tigers_stats.csv", "_stats.csv"),
            Some(EntityId::new("tigers"))
        );
        assert_eq!(EntityId::from_file_name("notes.csv", "_stats.csv"), None);
        assert_eq!(EntityId::from_file_name("_stats.csv", "_stats.csv"), None);
        assert_eq!(EntityId::new("tigers").file_name("_stats.csv"), "tigers_stats.csv");
    }

    #[test]
    fn cell_lookup_by_column_name() {
        let table = RawTable::new(
            vec!["Name".into(), "Games".into()],
            vec![Row::new(vec![Cell::Text("A".into()), Cell::Number(4.0)])],
        );
        assert_eq!(table.cell(0, "Games"), Some(&Cell::Number(4.0)));
        assert_eq!(table.cell(0, "PA"), None);
        assert_eq!(table.cell(1, "Games"), None);
    }
}
