use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – threshold sliders and search
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Threshold sliders, one per numeric column ----
            ui.strong("Minimum thresholds");
            ui.add_space(2.0);
            for slider in &mut state.sliders {
                let bounds = slider.bounds;
                ui.add(
                    egui::Slider::new(&mut slider.value, bounds.min..=bounds.max)
                        .text(slider.column.label())
                        .step_by(bounds.step)
                        .min_decimals(2),
                );
            }

            ui.separator();

            // ---- Free-text ID/name search ----
            ui.strong("Search by ID or name");
            let response = ui.text_edit_singleline(&mut state.query);
            let submitted =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if !state.query.trim().is_empty() {
                ui.label(RichText::new("a search overrides the sliders").weak());
            }

            ui.add_space(4.0);
            ui.horizontal(|ui: &mut Ui| {
                if ui.button("Query").clicked() || submitted {
                    state.run_filter();
                }
                if ui.button("Reset").clicked() {
                    state.reset();
                }
            });

            ui.separator();
            ui.label(
                RichText::new(
                    "Suggested reading order: weighted annualized, then worst return, \
                     then attendance, then total AUM.",
                )
                .weak(),
            );
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the dataset summary line.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong("Manager performance");

        ui.separator();
        ui.label(format!(
            "{} managers loaded, {} shown",
            state.table.len(),
            state.results.len()
        ));

        ui.separator();
        ui.label(format!("data updated {}", state.updated_on));

        if let Some(msg) = &state.warning {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}
