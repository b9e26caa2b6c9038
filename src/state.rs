use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};

use anyhow::Result;
use eframe::egui;

use crate::config::ViewerConfig;
use crate::data::dataset::Dataset;
use crate::data::loader::{self, Selection};
use crate::data::model::{EntityId, RawTable};
use crate::data::source::{Catalog, DirectorySource};
use crate::projection::{Projector, TableView};

// ---------------------------------------------------------------------------
// Background fetch results
// ---------------------------------------------------------------------------

/// Result of one background fetch, tagged with the request that issued it.
pub struct FetchOutcome {
    pub seq: u64,
    pub selection: Selection,
    pub result: Result<RawTable>,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: ViewerConfig,
    source: Arc<DirectorySource>,
    projector: Projector,

    /// Catalog listing, league table included.
    pub entities: Vec<EntityId>,

    /// What the user last asked for (None until a choice is made).
    pub selection: Option<Selection>,

    /// The table being viewed, with filter/sort state.
    pub dataset: Dataset,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether the latest fetch is still running.
    pub loading: bool,

    /// Sequence number of the newest request. Results carrying any other
    /// number are stale and dropped.
    latest_request: u64,
    tx: Sender<FetchOutcome>,
    rx: Receiver<FetchOutcome>,
}

impl AppState {
    pub fn new(config: ViewerConfig) -> Self {
        let (tx, rx) = channel();
        let mut state = Self {
            source: Arc::new(DirectorySource::new(&config.data_dir, &config.file_suffix)),
            projector: config.projector(),
            dataset: Dataset::new(RawTable::default(), config.filter_rule()),
            config,
            entities: Vec::new(),
            selection: None,
            status_message: None,
            loading: false,
            latest_request: 0,
            tx,
            rx,
        };
        state.refresh_catalog();
        state
    }

    /// Point the viewer at another data directory.
    pub fn set_data_dir(&mut self, dir: PathBuf) {
        self.config.data_dir = dir;
        self.source = Arc::new(DirectorySource::new(
            &self.config.data_dir,
            &self.config.file_suffix,
        ));
        self.selection = None;
        // Anything still in flight belongs to the old directory.
        self.latest_request += 1;
        self.loading = false;
        self.dataset.clear();
        self.refresh_catalog();
    }

    /// Re-list the data directory. On failure the dataset is emptied.
    pub fn refresh_catalog(&mut self) {
        match self.source.entities() {
            Ok(ids) => {
                self.entities = ids;
                self.status_message = None;
            }
            Err(e) => {
                log::error!("listing tables failed: {e}");
                self.entities.clear();
                self.dataset.clear();
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Start fetching `selection` on a worker thread. Supersedes any fetch
    /// still running. `ctx`, if given, is woken when the result is ready.
    pub fn request(&mut self, selection: Selection, ctx: Option<egui::Context>) {
        self.latest_request += 1;
        let seq = self.latest_request;
        self.selection = Some(selection.clone());
        self.loading = true;
        log::info!("request #{seq}: {selection}");

        let source = Arc::clone(&self.source);
        let entities = self.entities.clone();
        let league = self.config.league();
        let tx = self.tx.clone();
        std::thread::spawn(move || {
            let result = loader::load(source.as_ref(), &selection, &entities, &league);
            // The receiver only goes away with the app itself.
            let _ = tx.send(FetchOutcome {
                seq,
                selection,
                result,
            });
            if let Some(ctx) = ctx {
                ctx.request_repaint();
            }
        });
    }

    /// Fetch the current selection again.
    pub fn reload(&mut self, ctx: Option<egui::Context>) {
        if let Some(selection) = self.selection.clone() {
            self.request(selection, ctx);
        }
    }

    /// Drain finished fetches without blocking.
    pub fn poll(&mut self) {
        while let Ok(outcome) = self.rx.try_recv() {
            self.commit(outcome);
        }
    }

    /// Apply a finished fetch if it is the newest request. Returns whether
    /// it was applied.
    pub fn commit(&mut self, outcome: FetchOutcome) -> bool {
        if outcome.seq != self.latest_request {
            log::debug!(
                "discarding stale result #{} ({}), latest is #{}",
                outcome.seq,
                outcome.selection,
                self.latest_request
            );
            return false;
        }
        self.loading = false;
        match outcome.result {
            Ok(table) => {
                self.dataset.replace(table);
                self.status_message = None;
            }
            Err(e) => {
                log::error!("loading {} failed: {e:#}", outcome.selection);
                self.dataset.clear();
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
        true
    }

    pub fn toggle_filter(&mut self) {
        self.dataset.toggle_filter();
    }

    pub fn sort_by(&mut self, column: &str) {
        self.dataset.sort_by(column);
    }

    /// Display rows for the table widget.
    pub fn table_view(&self) -> TableView {
        self.projector.project(&self.dataset)
    }
}
