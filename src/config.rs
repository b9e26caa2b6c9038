use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::filter::FilterRule;
use crate::data::model::EntityId;
use crate::projection::Projector;

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV: &str = "STATSHEET_CONFIG";

// ---------------------------------------------------------------------------
// Viewer configuration
// ---------------------------------------------------------------------------

/// Everything the viewer needs to know about the stat files. Any field
/// missing from the JSON file keeps its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Directory holding `<team><file_suffix>` files.
    pub data_dir: PathBuf,
    pub file_suffix: String,
    /// Entity whose table holds league totals; never folded into "All".
    pub league_id: String,
    /// Bookkeeping columns that are never displayed.
    pub hidden_columns: Vec<String>,
    /// Rate stats shown with `ratio_precision` decimals.
    pub ratio_columns: Vec<String>,
    pub ratio_precision: usize,
    pub games_column: String,
    pub plate_appearance_columns: Vec<String>,
    /// Qualifying plate appearances per team game.
    pub threshold_factor: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        let rule = FilterRule::default();
        Self {
            data_dir: PathBuf::from("output_data"),
            file_suffix: "_stats.csv".to_string(),
            league_id: "league".to_string(),
            hidden_columns: ["Number", "FC", "GS", "LOB"].map(String::from).to_vec(),
            ratio_columns: ["AVG", "OBP", "SLG", "OPS", "BABIP", "ISOP", "wOBA"]
                .map(String::from)
                .to_vec(),
            ratio_precision: 3,
            games_column: rule.games_column,
            plate_appearance_columns: rule.plate_appearance_columns,
            threshold_factor: rule.factor,
        }
    }
}

impl ViewerConfig {
    /// Read a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Defaults, overlaid with the file named by [`CONFIG_ENV`] if set, and
    /// with `data_dir` taken from the first CLI argument if given.
    pub fn load(data_dir_arg: Option<PathBuf>) -> Result<Self> {
        let mut config = match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };
        if let Some(dir) = data_dir_arg {
            config.data_dir = dir;
        }
        Ok(config)
    }

    pub fn filter_rule(&self) -> FilterRule {
        FilterRule {
            games_column: self.games_column.clone(),
            plate_appearance_columns: self.plate_appearance_columns.clone(),
            factor: self.threshold_factor,
        }
    }

    pub fn projector(&self) -> Projector {
        Projector::new(
            self.hidden_columns.clone(),
            self.ratio_columns.clone(),
            self.ratio_precision,
        )
    }

    pub fn league(&self) -> EntityId {
        EntityId::new(self.league_id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("statsheet.json");
        std::fs::write(&path, r#"{ "data_dir": "/srv/stats", "threshold_factor": 3.1 }"#).unwrap();

        let config = ViewerConfig::from_file(&path).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/stats"));
        assert_eq!(config.threshold_factor, 3.1);
        assert_eq!(config.file_suffix, "_stats.csv");
        assert_eq!(config.hidden_columns, vec!["Number", "FC", "GS", "LOB"]);
        assert_eq!(config.filter_rule().factor, 3.1);
    }

    #[test]
    fn bad_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("statsheet.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(ViewerConfig::from_file(&path).is_err());
        assert!(ViewerConfig::from_file(&dir.path().join("absent.json")).is_err());
    }

    #[test]
    fn defaults_match_filter_rule() {
        let config = ViewerConfig::default();
        assert_eq!(config.filter_rule(), FilterRule::default());
        assert_eq!(config.league(), EntityId::new("league"));
    }
}
