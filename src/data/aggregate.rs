use super::error::{SchemaMismatchError, SourceError};
use super::model::{Cell, EntityId, RawTable, Row};
use super::parser;

/// Column the provenance column is placed after.
pub const ANCHOR_COLUMN: &str = "Name";
/// Injected provenance column.
pub const SOURCE_COLUMN: &str = "Source";

/// Combine per-entity stat files into one table.
///
/// * `league` is removed from `sources` before anything else.
/// * A source whose fetch or parse failed is skipped with a warning and
///   contributes no rows.
/// * Every surviving row gets a `Source` cell right after `Name`; the rest
///   of the columns keep their order. Rows are appended in `sources` order.
///
/// All sources must share one header. The first successful source fixes it;
/// a later source with a different header, or one lacking `Name`, fails the
/// whole aggregate.
pub fn aggregate(
    sources: Vec<(EntityId, Result<String, SourceError>)>,
    league: &EntityId,
) -> Result<RawTable, SchemaMismatchError> {
    let mut expected: Option<Vec<String>> = None;
    let mut header = Vec::new();
    let mut rows = Vec::new();

    for (id, fetched) in sources {
        if &id == league {
            log::debug!("excluding league table '{id}' from aggregate");
            continue;
        }

        let text = match fetched {
            Ok(text) => text,
            Err(e) => {
                log::warn!("skipping '{id}': {e}");
                continue;
            }
        };
        let table = match parser::parse(&text) {
            Ok(table) => table,
            Err(e) => {
                log::warn!("skipping '{id}': {e}");
                continue;
            }
        };

        let anchor = table
            .column_index(ANCHOR_COLUMN)
            .ok_or_else(|| SchemaMismatchError::MissingAnchor {
                source_id: id.to_string(),
                column: ANCHOR_COLUMN.to_string(),
            })?;

        if expected.is_none() {
            header = with_source_column(&table.header, anchor);
            expected = Some(table.header.clone());
        } else if expected.as_ref() != Some(&table.header) {
            return Err(SchemaMismatchError::HeaderMismatch {
                source_id: id.to_string(),
                expected: expected.unwrap_or_default(),
                found: table.header,
            });
        }

        let n = table.rows.len();
        rows.extend(table.rows.into_iter().map(|row| {
            let mut cells = row.cells;
            cells.insert(anchor + 1, Cell::Text(id.to_string()));
            Row::new(cells)
        }));
        log::debug!("merged {n} rows from '{id}'");
    }

    Ok(RawTable::new(header, rows))
}

/// `Name`, `Source`, then everything else in its original relative order.
fn with_source_column(header: &[String], anchor: usize) -> Vec<String> {
    let mut out = header.to_vec();
    out.insert(anchor + 1, SOURCE_COLUMN.to_string());
    out
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn ok(id: &str, text: &str) -> (EntityId, Result<String, SourceError>) {
        (EntityId::new(id), Ok(text.to_string()))
    }

    fn league() -> EntityId {
        EntityId::new("league")
    }

    #[test]
    fn source_column_follows_name() {
        let table = aggregate(
            vec![
                ok("tigers", "Name,Number,Games\nAlice,7,12\n"),
                ok("bears", "Name,Number,Games\nBob,3,10\nCara,9,8\n"),
            ],
            &league(),
        )
        .unwrap();

        assert_eq!(table.header, vec!["Name", "Source", "Number", "Games"]);
        assert_eq!(table.len(), 3);
        for row in &table.rows {
            assert_eq!(row.cells.len(), 4);
        }
        assert_eq!(table.cell(0, "Source"), Some(&Cell::Text("tigers".into())));
        assert_eq!(table.cell(2, "Name"), Some(&Cell::Text("Cara".into())));
        assert_eq!(table.cell(2, "Source"), Some(&Cell::Text("bears".into())));
        assert_eq!(table.cell(2, "Games"), Some(&Cell::Number(8.0)));
    }

    #[test]
    fn name_need_not_be_first() {
        let table = aggregate(vec![ok("tigers", "Number,Name,Games\n7,Alice,12\n")], &league())
            .unwrap();
        assert_eq!(table.header, vec!["Number", "Name", "Source", "Games"]);
        assert_eq!(table.cell(0, "Source"), Some(&Cell::Text("tigers".into())));
    }

    #[test]
    fn league_table_is_excluded() {
        let table = aggregate(
            vec![
                ok("league", "Name,Number,Games\nTotal,0,99\n"),
                ok("tigers", "Name,Number,Games\nAlice,7,12\n"),
            ],
            &league(),
        )
        .unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.cell(0, "Name"), Some(&Cell::Text("Alice".into())));
    }

    #[test]
    fn failed_sources_are_skipped() {
        let missing = (
            EntityId::new("ghosts"),
            Err(SourceError::NotFound {
                id: "ghosts".into(),
                path: PathBuf::from("ghosts_stats.csv"),
            }),
        );
        let table = aggregate(
            vec![
                missing,
                ok("empty", ""),
                ok("tigers", "Name,Number,Games\nAlice,7,12\n"),
            ],
            &league(),
        )
        .unwrap();
        assert_eq!(table.header, vec!["Name", "Source", "Number", "Games"]);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn nothing_succeeds_gives_empty_table() {
        let table = aggregate(vec![ok("empty", "")], &league()).unwrap();
        assert!(table.header.is_empty());
        assert!(table.is_empty());
    }

    #[test]
    fn divergent_header_is_rejected() {
        let err = aggregate(
            vec![
                ok("tigers", "Name,Number,Games\nAlice,7,12\n"),
                ok("bears", "Name,Games,Number\nBob,10,3\n"),
            ],
            &league(),
        )
        .unwrap_err();
        assert!(matches!(err, SchemaMismatchError::HeaderMismatch { ref source_id, .. } if source_id == "bears"));
    }

    #[test]
    fn missing_anchor_is_rejected() {
        let err = aggregate(vec![ok("tigers", "Number,Games\n7,12\n")], &league()).unwrap_err();
        assert!(matches!(err, SchemaMismatchError::MissingAnchor { .. }));
    }
}
