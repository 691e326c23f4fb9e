use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::NumericColumn;
use crate::state::{AppState, SortKey};

// ---------------------------------------------------------------------------
// Results table (central panel)
// ---------------------------------------------------------------------------

const HEADER_HEIGHT: f32 = 22.0;
const ROW_HEIGHT: f32 = 20.0;

/// Render the filtered rows. Every header cell is a button that sorts by its
/// column; ID cells link to the manager's profile page.
pub fn results_table(ui: &mut Ui, state: &mut AppState) {
    if state.results.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No rows match the current filters.");
        });
        return;
    }

    let mut clicked: Option<SortKey> = None;

    let mut builder = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(90.0)) // registry ID
        .column(Column::auto().at_least(70.0)); // name
    for _ in NumericColumn::ALL {
        builder = builder.column(Column::remainder().at_least(60.0));
    }

    builder
        .header(HEADER_HEIGHT, |mut header| {
            for (key, label) in [(SortKey::RegistryId, "ID"), (SortKey::Name, "Name")] {
                header.col(|ui| {
                    if ui.button(header_label(state, key, label)).clicked() {
                        clicked = Some(key);
                    }
                });
            }
            for col in NumericColumn::ALL {
                let key = SortKey::Numeric(col);
                header.col(|ui| {
                    if ui.button(header_label(state, key, col.label())).clicked() {
                        clicked = Some(key);
                    }
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, state.results.len(), |mut row| {
                let rec = &state.results[row.index()];

                row.col(|ui| {
                    ui.hyperlink_to(&rec.registry_id, rec.profile_url());
                });
                row.col(|ui| {
                    ui.label(&rec.name);
                });

                for col in NumericColumn::ALL {
                    let value = col.value(rec);
                    row.col(|ui| {
                        let mut text = RichText::new(format!("{value:.4}")).monospace();
                        if col.is_return() {
                            text = text.color(state.return_scale.color_for(value));
                        }
                        ui.label(text);
                    });
                }
            });
        });

    if let Some(key) = clicked {
        state.toggle_sort(key);
    }
}

/// Header caption with the sort direction marker on the active column.
fn header_label(state: &AppState, key: SortKey, label: &str) -> String {
    match state.sort {
        Some(s) if s.key == key => {
            let arrow = if s.ascending { "⬆" } else { "⬇" };
            format!("{label} {arrow}")
        }
        _ => label.to_string(),
    }
}
