use eframe::egui::{self, Align, Layout, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::species_color;
use crate::data::model::{NumericColumn, Penguin, Sex};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Data grid – virtualized table over the filtered rows
// ---------------------------------------------------------------------------

/// Render the striped, virtualized data grid (all columns).
pub fn data_grid(ui: &mut Ui, state: &AppState) {
    let rows = &state.views.grid.rows;
    ui.strong(format!("Data grid  ({} rows)", rows.len()));
    ui.add_space(2.0);

    if rows.is_empty() {
        ui.label("No penguins match the current selection.");
        return;
    }
    let penguins = state.dataset.penguins();

    ui.push_id("data_grid", |ui: &mut Ui| {
        let mut builder = TableBuilder::new(ui)
            .striped(true)
            .cell_layout(Layout::left_to_right(Align::Center))
            .column(Column::auto().at_least(80.0))
            .column(Column::auto().at_least(70.0));
        for _ in NumericColumn::ALL {
            builder = builder.column(Column::auto().at_least(90.0));
        }

        let table = builder
            .column(Column::remainder())
            .max_scroll_height(260.0)
            .header(20.0, |mut header| {
                header.col(|ui| {
                    ui.strong("species");
                });
                header.col(|ui| {
                    ui.strong("island");
                });
                for column in NumericColumn::ALL {
                    header.col(|ui| {
                        ui.strong(column.name());
                    });
                }
                header.col(|ui| {
                    ui.strong("sex");
                });
            });

        table.body(|body| {
            body.rows(18.0, rows.len(), |mut row| {
                let penguin = &penguins[rows[row.index()]];
                row.col(|ui| {
                    species_label(ui, penguin);
                });
                row.col(|ui| {
                    ui.label(penguin.island.to_string());
                });
                for column in NumericColumn::ALL {
                    row.col(|ui| {
                        ui.label(numeric_cell(penguin.value(column), column));
                    });
                }
                row.col(|ui| {
                    ui.label(sex_cell(penguin.sex));
                });
            });
        });
    });
}

// ---------------------------------------------------------------------------
// Data table – plain grid over the same filtered rows
// ---------------------------------------------------------------------------

/// Render the plain (non-virtualized) data table.
pub fn data_table(ui: &mut Ui, state: &AppState) {
    let rows = &state.views.table.rows;
    ui.strong(format!("Data table  ({} rows)", rows.len()));
    ui.add_space(2.0);

    if rows.is_empty() {
        ui.label("No penguins match the current selection.");
        return;
    }
    let penguins = state.dataset.penguins();

    ScrollArea::vertical()
        .id_salt("data_table_scroll")
        .max_height(260.0)
        .auto_shrink([false, true])
        .show(ui, |ui: &mut Ui| {
            egui::Grid::new("data_table")
                .striped(true)
                .min_col_width(70.0)
                .show(ui, |ui: &mut Ui| {
                    ui.strong("species");
                    ui.strong("island");
                    for column in NumericColumn::ALL {
                        ui.strong(column.name());
                    }
                    ui.strong("sex");
                    ui.end_row();

                    for &i in rows {
                        let penguin = &penguins[i];
                        species_label(ui, penguin);
                        ui.label(penguin.island.to_string());
                        for column in NumericColumn::ALL {
                            ui.label(numeric_cell(penguin.value(column), column));
                        }
                        ui.label(sex_cell(penguin.sex));
                        ui.end_row();
                    }
                });
        });
}

// ---------------------------------------------------------------------------
// Cell formatting
// ---------------------------------------------------------------------------

fn species_label(ui: &mut Ui, penguin: &Penguin) {
    ui.label(RichText::new(penguin.species.to_string()).color(species_color(penguin.species)));
}

fn numeric_cell(value: Option<f64>, column: NumericColumn) -> String {
    match value {
        Some(v) => format!("{:.*}", column.decimals(), v),
        None => "NA".to_string(),
    }
}

fn sex_cell(sex: Option<Sex>) -> String {
    match sex {
        Some(s) => s.to_string(),
        None => "NA".to_string(),
    }
}
