use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

const ROW_HEIGHT: f32 = 20.0;

// ---------------------------------------------------------------------------
// Stat table (central panel)
// ---------------------------------------------------------------------------

/// Render the current view. Clicking a header sorts on that column.
pub fn stat_table(ui: &mut Ui, state: &mut AppState) {
    let view = state.table_view();
    if view.columns.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Choose a table to view stats");
        });
        return;
    }

    let highlight = ui.visuals().hyperlink_color;
    let mut clicked: Option<String> = None;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .columns(Column::auto().at_least(48.0), view.columns.len())
        .header(ROW_HEIGHT + 4.0, |mut header| {
            for column in &view.columns {
                header.col(|ui| {
                    let mut text = RichText::new(&column.label).strong();
                    if column.highlighted {
                        text = text.color(highlight);
                    }
                    if ui.button(text).clicked() {
                        clicked = Some(column.name.clone());
                    }
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, view.rows.len(), |mut row| {
                let cells = &view.rows[row.index()];
                for (column, value) in view.columns.iter().zip(cells) {
                    row.col(|ui| {
                        let text = RichText::new(value);
                        if column.anchor {
                            ui.label(text.strong());
                        } else {
                            ui.label(text);
                        }
                    });
                }
            });
        });

    if let Some(column) = clicked {
        state.sort_by(&column);
    }
}
