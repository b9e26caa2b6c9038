use eframe::egui::{self, Button, Color32, RichText, Ui};

use crate::data::loader::Selection;
use crate::state::AppState;

const FILTER_ON_LABEL: &str = "Apply Filter by Minimum Plate Appearances";
const FILTER_OFF_LABEL: &str = "Undo Filter";

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open folder…").clicked() {
                open_folder_dialog(state);
                ui.close_menu();
            }
            if ui
                .add_enabled(state.selection.is_some(), Button::new("Reload"))
                .clicked()
            {
                state.reload(Some(ui.ctx().clone()));
                ui.close_menu();
            }
        });

        ui.separator();
        table_selector(ui, state);
        ui.separator();

        let label = if state.dataset.is_filtered() {
            FILTER_OFF_LABEL
        } else {
            FILTER_ON_LABEL
        };
        // Stay enabled while filtered so an empty result can still be undone.
        let enabled = !state.dataset.original().is_empty();
        if ui.add_enabled(enabled, Button::new(label)).clicked() {
            state.toggle_filter();
        }

        ui.separator();

        if state.loading {
            ui.spinner();
        } else if !state.dataset.original().is_empty() {
            ui.label(format!(
                "{} rows loaded, {} visible",
                state.dataset.original().len(),
                state.dataset.current_rows().len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

/// Drop-down of "All" plus every table in the catalog.
fn table_selector(ui: &mut Ui, state: &mut AppState) {
    let selected_text = state
        .selection
        .as_ref()
        .map(|s| s.to_string())
        .unwrap_or_else(|| "--Select a table--".to_string());

    let mut choice = None;
    egui::ComboBox::from_id_salt("table_select")
        .selected_text(selected_text)
        .show_ui(ui, |ui: &mut Ui| {
            let options = std::iter::once(Selection::All)
                .chain(state.entities.iter().cloned().map(Selection::Entity));
            for option in options {
                let is_selected = state.selection.as_ref() == Some(&option);
                if ui
                    .selectable_label(is_selected, option.to_string())
                    .clicked()
                {
                    choice = Some(option);
                }
            }
        });

    if let Some(selection) = choice {
        state.request(selection, Some(ui.ctx().clone()));
    }
}

// ---------------------------------------------------------------------------
// Folder dialog
// ---------------------------------------------------------------------------

pub fn open_folder_dialog(state: &mut AppState) {
    let folder = rfd::FileDialog::new()
        .set_title("Open stats folder")
        .set_directory(&state.config.data_dir)
        .pick_folder();

    if let Some(path) = folder {
        log::info!("switching data directory to {}", path.display());
        state.set_data_dir(path);
    }
}
