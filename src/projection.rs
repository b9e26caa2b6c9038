use crate::data::aggregate::ANCHOR_COLUMN;
use crate::data::dataset::Dataset;
use crate::data::model::Cell;

// ---------------------------------------------------------------------------
// Column projector: Dataset → display strings
// ---------------------------------------------------------------------------

/// Read-only render pass over the current view: hides bookkeeping columns,
/// marks the sorted column and formats rate stats to fixed precision.
#[derive(Debug, Clone)]
pub struct Projector {
    hidden: Vec<String>,
    ratio: Vec<String>,
    precision: usize,
}

/// One displayed column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnView {
    /// Column name, what a header click sorts on.
    pub name: String,
    /// Header text, with a direction arrow on the sorted column.
    pub label: String,
    pub highlighted: bool,
    /// The `Name` column, pinned/emphasised by the table.
    pub anchor: bool,
}

/// What the table widget draws.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableView {
    pub columns: Vec<ColumnView>,
    pub rows: Vec<Vec<String>>,
}

impl Projector {
    pub fn new(hidden: Vec<String>, ratio: Vec<String>, precision: usize) -> Self {
        Projector {
            hidden,
            ratio,
            precision,
        }
    }

    fn is_hidden(&self, column: &str) -> bool {
        self.hidden.iter().any(|h| h == column)
    }

    /// Display text for a cell of `column`.
    pub fn format_cell(&self, column: &str, cell: &Cell) -> String {
        match cell {
            Cell::Number(v) if self.ratio.iter().any(|r| r == column) => {
                format!("{v:.prec$}", prec = self.precision)
            }
            other => other.to_string(),
        }
    }

    pub fn project(&self, dataset: &Dataset) -> TableView {
        let sort = dataset.sort_state();
        let visible: Vec<(usize, &String)> = dataset
            .header()
            .iter()
            .enumerate()
            .filter(|(_, name)| !self.is_hidden(name))
            .collect();

        let columns = visible
            .iter()
            .map(|(_, name)| {
                let highlighted = dataset.highlighted_column() == Some(name.as_str());
                let label = if highlighted {
                    format!("{name} {}", sort.direction.arrow())
                } else {
                    name.to_string()
                };
                ColumnView {
                    name: name.to_string(),
                    label,
                    highlighted,
                    anchor: name.as_str() == ANCHOR_COLUMN,
                }
            })
            .collect();

        let rows = dataset
            .current_rows()
            .iter()
            .map(|row| {
                visible
                    .iter()
                    .map(|(idx, name)| match row.get(*idx) {
                        Some(cell) => self.format_cell(name, cell),
                        None => String::new(),
                    })
                    .collect()
            })
            .collect();

        TableView { columns, rows }
    }
}
