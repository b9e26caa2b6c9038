use std::io::ErrorKind;
use std::path::PathBuf;

use super::error::SourceError;
use super::model::EntityId;

// ---------------------------------------------------------------------------
// Seams to the outside world
// ---------------------------------------------------------------------------

/// Lists the stat tables that can be fetched.
pub trait Catalog {
    /// Entity identifiers in display order.
    fn entities(&self) -> Result<Vec<EntityId>, SourceError>;
}

/// Returns the raw text of one entity's stat table.
pub trait RecordSource: Send + Sync {
    fn fetch(&self, id: &EntityId) -> Result<String, SourceError>;
}

// ---------------------------------------------------------------------------
// Directory of `<id>_stats.csv` files
// ---------------------------------------------------------------------------

/// A directory holding one `<id><suffix>` file per entity.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
    suffix: String,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>, suffix: impl Into<String>) -> Self {
        DirectorySource {
            dir: dir.into(),
            suffix: suffix.into(),
        }
    }

    fn path_for(&self, id: &EntityId) -> PathBuf {
        self.dir.join(id.file_name(&self.suffix))
    }
}

impl Catalog for DirectorySource {
    /// Files named `<id><suffix>`, sorted by identifier. Anything else in the
    /// directory is ignored.
    fn entities(&self) -> Result<Vec<EntityId>, SourceError> {
        let io_err = |source: std::io::Error| SourceError::Io {
            path: self.dir.clone(),
            source,
        };
        let mut ids = Vec::new();
        for entry in std::fs::read_dir(&self.dir).map_err(io_err)? {
            let entry = entry.map_err(io_err)?;
            if !entry.file_type().map_err(io_err)?.is_file() {
                continue;
            }
            let name = entry.file_name();
            if let Some(id) = name
                .to_str()
                .and_then(|n| EntityId::from_file_name(n, &self.suffix))
            {
                ids.push(id);
            }
        }
        ids.sort();
        log::info!("catalog {}: {} tables", self.dir.display(), ids.len());
        Ok(ids)
    }
}

impl RecordSource for DirectorySource {
    fn fetch(&self, id: &EntityId) -> Result<String, SourceError> {
        let path = self.path_for(id);
        std::fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => SourceError::NotFound {
                id: id.to_string(),
                path,
            },
            _ => SourceError::Io { path, source },
        })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn lists_suffixed_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("tigers_stats.csv"), "Name\n").unwrap();
        fs::write(dir.path().join("bears_stats.csv"), "Name\n").unwrap();
        fs::write(dir.path().join("league_stats.csv"), "Name\n").unwrap();
        fs::write(dir.path().join("notes.csv"), "x\n").unwrap();
        fs::create_dir(dir.path().join("old_stats.csv")).unwrap();

        let source = DirectorySource::new(dir.path(), "_stats.csv");
        let ids = source.entities().unwrap();
        assert_eq!(
            ids,
            vec![
                EntityId::new("bears"),
                EntityId::new("league"),
                EntityId::new("tigers")
            ]
        );
    }

    #[test]
    fn fetch_reads_text_or_reports_missing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("tigers_stats.csv"), "Name,Games\nA,1\n").unwrap();
        let source = DirectorySource::new(dir.path(), "_stats.csv");

        assert_eq!(
            source.fetch(&EntityId::new("tigers")).unwrap(),
            "Name,Games\nA,1\n"
        );
        assert!(matches!(
            source.fetch(&EntityId::new("bears")),
            Err(SourceError::NotFound { .. })
        ));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirectorySource::new(dir.path().join("absent"), "_stats.csv");
        assert!(matches!(source.entities(), Err(SourceError::Io { .. })));
    }
}
