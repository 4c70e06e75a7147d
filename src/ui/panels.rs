use eframe::egui::{self, DragValue, RichText, ScrollArea, Slider, Ui};

use crate::color::species_color;
use crate::controls::{LAYERED_BIN_RANGE, STACKED_BIN_RANGE};
use crate::data::model::{NumericColumn, Species};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – the five controls
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Controls");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            species_section(ui, state);
            ui.separator();
            histogram_section(ui, state);
            ui.separator();
            scatter_section(ui, state);
        });
}

fn species_section(ui: &mut Ui, state: &mut AppState) {
    let n_selected = state.controls.selected_species.len();
    let n_total = Species::ALL.len();
    ui.strong(format!("Species  ({n_selected}/{n_total})"));

    // Select all / none buttons
    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all_species();
        }
        if ui.small_button("None").clicked() {
            state.select_no_species();
        }
    });

    for species in Species::ALL {
        let mut checked = state.controls.selected_species.contains(&species);
        let text = RichText::new(species.to_string()).color(species_color(species));
        if ui.checkbox(&mut checked, text).changed() {
            state.toggle_species(species);
        }
    }

    ui.label(selection_echo(state));
}

/// Echo of the current selection, e.g. "Showing: Adelie, Gentoo".
fn selection_echo(state: &AppState) -> String {
    if state.controls.selected_species.is_empty() {
        "Showing: none".to_string()
    } else {
        let names: Vec<String> = state
            .controls
            .selected_species
            .iter()
            .map(|sp| sp.to_string())
            .collect();
        format!("Showing: {}", names.join(", "))
    }
}

fn histogram_section(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Histogram bins");

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Stacked");
        let mut bins = state.controls.stacked_bins;
        if ui
            .add(DragValue::new(&mut bins).range(STACKED_BIN_RANGE).speed(1))
            .changed()
        {
            state.set_stacked_bins(bins);
        }
    });

    let mut bins = state.controls.layered_bins;
    if ui
        .add(Slider::new(&mut bins, LAYERED_BIN_RANGE).text("Layered"))
        .changed()
    {
        state.set_layered_bins(bins);
    }
}

fn scatter_section(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Scatter axes");

    ui.label("X axis");
    let x_current = state.controls.x_column;
    egui::ComboBox::from_id_salt("x_axis")
        .selected_text(x_current.name())
        .show_ui(ui, |ui: &mut Ui| {
            for column in NumericColumn::ALL {
                if ui
                    .selectable_label(x_current == column, column.name())
                    .clicked()
                {
                    state.set_x_column(column);
                }
            }
        });

    ui.label("Y axis");
    let y_current = state.controls.y_column;
    egui::ComboBox::from_id_salt("y_axis")
        .selected_text(y_current.name())
        .show_ui(ui, |ui: &mut Ui| {
            for column in NumericColumn::ALL {
                if ui
                    .selectable_label(y_current == column, column.name())
                    .clicked()
                {
                    state.set_y_column(column);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong("Penguin Dash");

        ui.separator();

        ui.label(format!(
            "{} penguins loaded, {} visible",
            state.dataset.len(),
            state.views.grid.rows.len()
        ));

        ui.separator();

        if ui.button("Reset controls").clicked() {
            state.reset_controls();
        }
    });
}
