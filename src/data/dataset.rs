use super::filter::FilterRule;
use super::model::{RawTable, Row};
use super::sort::{SortState, sort_rows};

// ---------------------------------------------------------------------------
// Dataset – original snapshot plus the displayed view
// ---------------------------------------------------------------------------

/// One query session over a loaded table.
///
/// `original` is written once per fetch. `current` is what the table shows:
/// `original`, the qualified subset of it, or a reordering of either.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    original: RawTable,
    current: RawTable,
    sort: SortState,
    filter_active: bool,
    rule: FilterRule,
}

impl Dataset {
    pub fn new(table: RawTable, rule: FilterRule) -> Self {
        Dataset {
            current: table.clone(),
            original: table,
            sort: SortState::default(),
            filter_active: false,
            rule,
        }
    }

    /// Replace the snapshot after a fetch; filter and sort start over.
    pub fn replace(&mut self, table: RawTable) {
        self.current = table.clone();
        self.original = table;
        self.sort = SortState::default();
        self.filter_active = false;
    }

    /// Drop all rows, e.g. after a failed fetch.
    pub fn clear(&mut self) {
        self.replace(RawTable::default());
    }

    pub fn original(&self) -> &RawTable {
        &self.original
    }

    pub fn current(&self) -> &RawTable {
        &self.current
    }

    pub fn current_rows(&self) -> &[Row] {
        &self.current.rows
    }

    pub fn header(&self) -> &[String] {
        &self.current.header
    }

    pub fn is_filtered(&self) -> bool {
        self.filter_active
    }

    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    /// Column to emphasise in the header; no effect on the data.
    pub fn highlighted_column(&self) -> Option<&str> {
        self.sort.column.as_deref()
    }

    /// Flip between the full table and the qualified subset. Both states are
    /// computed from `original`, never from the current view. No-op on an
    /// empty table.
    pub fn toggle_filter(&mut self) {
        if self.original.is_empty() {
            return;
        }
        if self.filter_active {
            self.current = self.original.clone();
            self.filter_active = false;
        } else {
            self.current = self.rule.apply(&self.original);
            self.filter_active = true;
            log::info!(
                "filter on: {} of {} rows qualify",
                self.current.len(),
                self.original.len()
            );
        }
    }

    /// Sort the displayed rows on `column`. Clicking the same column again
    /// flips the direction. Unknown columns, and views with fewer than two
    /// rows, are left untouched.
    pub fn sort_by(&mut self, column: &str) {
        if self.current.len() < 2 {
            return;
        }
        if self.current.column_index(column).is_none() {
            log::warn!("ignoring sort on unknown column '{column}'");
            return;
        }
        let direction = self.sort.advance(column);
        sort_rows(&mut self.current, column, direction);
        log::debug!("sorted on '{column}' {direction:?}");
    }
}
