use std::fmt;

use anyhow::{Context, Result};
use rayon::prelude::*;

use super::aggregate::aggregate;
use super::model::{EntityId, RawTable};
use super::parser;
use super::source::RecordSource;

// ---------------------------------------------------------------------------
// What the user asked to see
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Every entity except the league table, stacked with a `Source` column.
    All,
    Entity(EntityId),
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str("All"),
            Selection::Entity(id) => write!(f, "{id}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Fetch and build the table for `selection`.
///
/// `entities` is the catalog listing, used for [`Selection::All`].
pub fn load(
    source: &dyn RecordSource,
    selection: &Selection,
    entities: &[EntityId],
    league: &EntityId,
) -> Result<RawTable> {
    match selection {
        Selection::Entity(id) => load_entity(source, id),
        Selection::All => load_all(source, entities, league),
    }
}

/// Fetch and parse a single entity's table.
pub fn load_entity(source: &dyn RecordSource, id: &EntityId) -> Result<RawTable> {
    let text = source
        .fetch(id)
        .with_context(|| format!("fetching '{id}'"))?;
    let table = parser::parse(&text).with_context(|| format!("parsing '{id}'"))?;
    log::info!("loaded '{id}': {} rows, columns {:?}", table.len(), table.header);
    Ok(table)
}

/// Fetch every entity but `league` in parallel, then aggregate once all
/// fetches have finished. Individual failures only drop that entity.
pub fn load_all(
    source: &dyn RecordSource,
    entities: &[EntityId],
    league: &EntityId,
) -> Result<RawTable> {
    let fetched: Vec<_> = entities
        .par_iter()
        .filter(|id| *id != league)
        .map(|id| (id.clone(), source.fetch(id)))
        .collect();

    let n_sources = fetched.len();
    let table = aggregate(fetched, league).context("combining team tables")?;
    log::info!(
        "loaded aggregate of {n_sources} tables: {} rows",
        table.len()
    );
    Ok(table)
}
