use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Plot, Points};

use crate::color::species_color;
use crate::state::AppState;
use crate::views::SpeciesHistogram;

// ---------------------------------------------------------------------------
// Mass histograms
// ---------------------------------------------------------------------------

/// Render the stacked body-mass histogram.
pub fn stacked_histogram(ui: &mut Ui, state: &AppState) {
    let view = &state.views.stacked;
    ui.strong(format!("Body mass, stacked  ({} bins)", view.requested_bins));

    // Each chart stacks on the ones already placed below it.
    let mut charts: Vec<BarChart> = Vec::new();
    for series in &view.series {
        let chart = BarChart::new(bars(series))
            .name(series.species.to_string())
            .color(species_color(series.species));
        let below: Vec<&BarChart> = charts.iter().collect();
        let chart = chart.stack_on(&below);
        charts.push(chart);
    }

    Plot::new("stacked_histogram")
        .legend(Legend::default())
        .x_axis_label("body_mass_g")
        .y_axis_label("count")
        .height(240.0)
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}

/// Render the layered (translucent, overlaid) body-mass histogram.
pub fn layered_histogram(ui: &mut Ui, state: &AppState) {
    let view = &state.views.layered;
    ui.strong(format!("Body mass, layered  ({} bins)", view.requested_bins));

    Plot::new("layered_histogram")
        .legend(Legend::default())
        .x_axis_label("body_mass_g")
        .y_axis_label("count")
        .height(240.0)
        .show(ui, |plot_ui| {
            for series in &view.series {
                let chart = BarChart::new(bars(series))
                    .name(series.species.to_string())
                    .color(species_color(series.species).gamma_multiply(0.55));
                plot_ui.bar_chart(chart);
            }
        });
}

/// Bars for one species' histogram, centered on their bins.
fn bars(series: &SpeciesHistogram) -> Vec<Bar> {
    series
        .hist
        .counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            Bar::new(series.hist.bin_center(i), count as f64).width(series.hist.bin_width)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Scatter explorer
// ---------------------------------------------------------------------------

/// Render the scatterplot of the two chosen numeric columns.
pub fn scatter(ui: &mut Ui, state: &AppState) {
    let view = &state.views.scatter;
    ui.strong(format!(
        "Scatter  ({} vs {})",
        view.y_column.name(),
        view.x_column.name()
    ));

    Plot::new("scatter_plot")
        .legend(Legend::default())
        .x_axis_label(view.x_column.name())
        .y_axis_label(view.y_column.name())
        .height(280.0)
        .show(ui, |plot_ui| {
            for series in &view.series {
                plot_ui.points(
                    Points::new(series.points.clone())
                        .name(series.species.to_string())
                        .color(species_color(series.species))
                        .radius(2.5),
                );
            }
        });
}
