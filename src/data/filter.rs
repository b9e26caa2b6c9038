use super::model::{Cell, RawTable};

// ---------------------------------------------------------------------------
// Minimum plate-appearance rule
// ---------------------------------------------------------------------------

/// Qualification rule: a row qualifies when its plate appearances reach
/// `factor * max(games)` over the whole table.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterRule {
    pub games_column: String,
    /// Candidate names for the plate-appearance column, first match wins.
    pub plate_appearance_columns: Vec<String>,
    pub factor: f64,
}

impl Default for FilterRule {
    fn default() -> Self {
        FilterRule {
            games_column: "Games".to_string(),
            plate_appearance_columns: vec!["PlateAppearances".to_string(), "PA".to_string()],
            factor: 2.41,
        }
    }
}

impl FilterRule {
    /// `factor * max(games)`. Non-numeric or missing games count as 0.
    /// `None` for a table with no rows.
    pub fn threshold(&self, table: &RawTable) -> Option<f64> {
        let games_idx = table.column_index(&self.games_column);
        let max_games = table
            .rows
            .iter()
            .map(|row| {
                games_idx
                    .and_then(|i| row.get(i))
                    .and_then(Cell::as_f64)
                    .unwrap_or(0.0)
            })
            .reduce(f64::max)?;
        Some(self.factor * max_games)
    }

    fn plate_appearance_index(&self, table: &RawTable) -> Option<usize> {
        self.plate_appearance_columns
            .iter()
            .find_map(|name| table.column_index(name))
    }

    /// Rows of `table` (in order) whose plate appearances are a number at
    /// or above the threshold. Text or missing values never qualify.
    pub fn apply(&self, table: &RawTable) -> RawTable {
        let Some(threshold) = self.threshold(table) else {
            return table.clone();
        };
        let pa_idx = self.plate_appearance_index(table);
        log::debug!("qualifying threshold {threshold:.2} (factor {})", self.factor);

        let rows = table
            .rows
            .iter()
            .filter(|row| {
                pa_idx
                    .and_then(|i| row.get(i))
                    .and_then(Cell::as_f64)
                    .is_some_and(|pa| pa >= threshold)
            })
            .cloned()
            .collect();
        RawTable::new(table.header.clone(), rows)
    }
}
