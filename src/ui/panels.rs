use std::path::Path;

use eframe::egui::{self, Button, RichText, Ui};

use crate::data::attributes::ATTRIBUTES;
use crate::data::stats::Statistics;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – attribute selection and statistics
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Attributes");
    ui.separator();

    attribute_selector(ui, "x_attribute", "X attribute", &mut state.x_attr);
    attribute_selector(ui, "y_attribute", "Y attribute", &mut state.y_attr);

    ui.add_space(6.0);
    let plot = ui.add_enabled(state.can_plot(), Button::new("Plot"));
    if plot.clicked() {
        state.plot();
    }

    ui.add_space(6.0);
    ui.separator();
    statistics_block(ui, "X statistics", &state.x_stats);
    ui.add_space(4.0);
    statistics_block(ui, "Y statistics", &state.y_stats);
}

fn attribute_selector(ui: &mut Ui, id: &str, label: &str, selected: &mut String) {
    ui.strong(label);
    egui::ComboBox::from_id_salt(id)
        .selected_text(selected.as_str())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for attr in ATTRIBUTES {
                ui.selectable_value(selected, attr.to_string(), attr);
            }
        });
}

fn statistics_block(ui: &mut Ui, title: &str, stats: &Statistics) {
    ui.strong(title);
    for line in stats.labels() {
        ui.label(line);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / status bar.
pub fn top_bar(ui: &mut Ui, state: &AppState, source: &Path) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Quit").clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{}: {} rows, {} columns",
                source.display(),
                ds.len(),
                ds.headers.len()
            ));
        } else if state.is_loading() {
            ui.label(RichText::new(format!("Loading {}…", source.display())).italics());
        }
    });
}
