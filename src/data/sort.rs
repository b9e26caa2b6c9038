use std::cmp::Ordering;

use super::model::{Cell, RawTable};

// ---------------------------------------------------------------------------
// Sort state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Header arrow shown next to the sorted column.
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Last column sorted on and in which direction. `column == None` means the
/// table is in load order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState {
    pub column: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    /// Advance the state for a click on `column`: same column flips the
    /// direction, a new column starts ascending.
    pub fn advance(&mut self, column: &str) -> SortDirection {
        if self.column.as_deref() == Some(column) {
            self.direction = self.direction.flipped();
        } else {
            self.column = Some(column.to_string());
            self.direction = SortDirection::Ascending;
        }
        self.direction
    }
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

/// Total order over cells of one column.
///
/// Numbers compare numerically and text lexicographically, each flipped by
/// `direction`. A number always sorts before text, whichever the direction.
pub fn compare_cells(a: &Cell, b: &Cell, direction: SortDirection) -> Ordering {
    let same_kind = match (a, b) {
        (Cell::Number(x), Cell::Number(y)) => x.total_cmp(y),
        (Cell::Text(x), Cell::Text(y)) => x.cmp(y),
        (Cell::Number(_), Cell::Text(_)) => return Ordering::Less,
        (Cell::Text(_), Cell::Number(_)) => return Ordering::Greater,
    };
    match direction {
        SortDirection::Ascending => same_kind,
        SortDirection::Descending => same_kind.reverse(),
    }
}

/// Stable in-place sort of `table.rows` on `column`. Rows that compare equal
/// keep their previous relative order, so successive sorts on different
/// columns compose. Returns `false` when `column` is not in the header.
pub fn sort_rows(table: &mut RawTable, column: &str, direction: SortDirection) -> bool {
    let Some(idx) = table.column_index(column) else {
        return false;
    };
    if table.rows.len() < 2 {
        return true;
    }
    table
        .rows
        .sort_by(|a, b| compare_cells(&a.cells[idx], &b.cells[idx], direction));
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Row;

    fn table(header: &[&str], rows: Vec<Vec<Cell>>) -> RawTable {
        RawTable::new(
            header.iter().map(|h| h.to_string()).collect(),
            rows.into_iter().map(Row::new).collect(),
        )
    }

    fn column(table: &RawTable, name: &str) -> Vec<Cell> {
        let idx = table.column_index(name).unwrap();
        table.rows.iter().map(|r| r.cells[idx].clone()).collect()
    }

    fn t(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    #[test]
    fn numbers_precede_text_ascending() {
        let mut tbl = table(
            &["V"],
            vec![vec![Cell::Number(3.0)], vec![t("abc")], vec![Cell::Number(1.0)]],
        );
        assert!(sort_rows(&mut tbl, "V", SortDirection::Ascending));
        assert_eq!(
            column(&tbl, "V"),
            vec![Cell::Number(1.0), Cell::Number(3.0), t("abc")]
        );
    }

    #[test]
    fn numbers_precede_text_descending() {
        let mut tbl = table(
            &["V"],
            vec![
                vec![t("abc")],
                vec![Cell::Number(1.0)],
                vec![t("xyz")],
                vec![Cell::Number(3.0)],
            ],
        );
        sort_rows(&mut tbl, "V", SortDirection::Descending);
        assert_eq!(
            column(&tbl, "V"),
            vec![Cell::Number(3.0), Cell::Number(1.0), t("xyz"), t("abc")]
        );
    }

    #[test]
    fn ties_keep_prior_order() {
        let mut tbl = table(
            &["Name", "Games"],
            vec![
                vec![t("d"), Cell::Number(5.0)],
                vec![t("a"), Cell::Number(7.0)],
                vec![t("c"), Cell::Number(5.0)],
                vec![t("b"), Cell::Number(7.0)],
            ],
        );
        sort_rows(&mut tbl, "Name", SortDirection::Ascending);
        sort_rows(&mut tbl, "Games", SortDirection::Ascending);
        assert_eq!(column(&tbl, "Name"), vec![t("c"), t("d"), t("a"), t("b")]);

        sort_rows(&mut tbl, "Games", SortDirection::Descending);
        assert_eq!(column(&tbl, "Name"), vec![t("a"), t("b"), t("c"), t("d")]);
    }

    #[test]
    fn unknown_column_leaves_rows_alone() {
        let mut tbl = table(&["V"], vec![vec![Cell::Number(2.0)], vec![Cell::Number(1.0)]]);
        assert!(!sort_rows(&mut tbl, "W", SortDirection::Ascending));
        assert_eq!(column(&tbl, "V"), vec![Cell::Number(2.0), Cell::Number(1.0)]);
    }

    #[test]
    fn advance_toggles_and_resets_direction() {
        let mut state = SortState::default();
        assert_eq!(state.advance("AVG"), SortDirection::Ascending);
        assert_eq!(state.advance("AVG"), SortDirection::Descending);
        assert_eq!(state.advance("AVG"), SortDirection::Ascending);
        assert_eq!(state.advance("AVG"), SortDirection::Descending);
        assert_eq!(state.advance("HR"), SortDirection::Ascending);
        assert_eq!(state.column.as_deref(), Some("HR"));
    }
}
