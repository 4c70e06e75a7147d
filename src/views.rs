use crate::controls::{Controls, Param, ParamSet};
use crate::data::filter::filter_by_species;
use crate::data::hist::{Histogram, value_range};
use crate::data::model::{NumericColumn, PenguinDataset, Species};

// ---------------------------------------------------------------------------
// Display identifiers and their parameter reads
// ---------------------------------------------------------------------------

/// One of the five output panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayId {
    DataGrid,
    DataTable,
    StackedHistogram,
    LayeredHistogram,
    Scatter,
}

impl DisplayId {
    pub const ALL: [DisplayId; 5] = [
        DisplayId::DataGrid,
        DisplayId::DataTable,
        DisplayId::StackedHistogram,
        DisplayId::LayeredHistogram,
        DisplayId::Scatter,
    ];

    /// Parameters this display reads. A display is recomputed exactly when
    /// one of its reads changed.
    pub fn reads(self) -> &'static [Param] {
        match self {
            DisplayId::DataGrid | DisplayId::DataTable => &[Param::SpeciesSelection],
            DisplayId::StackedHistogram => &[Param::SpeciesSelection, Param::StackedBins],
            DisplayId::LayeredHistogram => &[Param::SpeciesSelection, Param::LayeredBins],
            DisplayId::Scatter => {
                &[Param::SpeciesSelection, Param::XColumn, Param::YColumn]
            }
        }
    }
}

// ---------------------------------------------------------------------------
// View artifacts – render-agnostic display outputs
// ---------------------------------------------------------------------------

/// Filtered row indices backing a tabular panel.
#[derive(Debug, Clone, Default)]
pub struct TableView {
    pub rows: Vec<usize>,
    /// Number of times this view has been recomputed.
    pub revision: u64,
}

/// Bin counts for one species, sharing edges with its sibling series.
#[derive(Debug, Clone)]
pub struct SpeciesHistogram {
    pub species: Species,
    pub hist: Histogram,
}

/// Per-species mass histograms over a common bin grid.
#[derive(Debug, Clone, Default)]
pub struct HistogramView {
    pub requested_bins: usize,
    /// One entry per selected species with at least the shared range; empty
    /// when no filtered row carries a mass value.
    pub series: Vec<SpeciesHistogram>,
    pub revision: u64,
}

/// Scatter points for one species.
#[derive(Debug, Clone)]
pub struct SpeciesPoints {
    pub species: Species,
    pub points: Vec<[f64; 2]>,
}

/// Per-species point series for the chosen axis pair.
#[derive(Debug, Clone)]
pub struct ScatterView {
    pub x_column: NumericColumn,
    pub y_column: NumericColumn,
    pub series: Vec<SpeciesPoints>,
    pub revision: u64,
}

impl Default for ScatterView {
    fn default() -> Self {
        ScatterView {
            x_column: NumericColumn::BillLengthMm,
            y_column: NumericColumn::BillLengthMm,
            series: Vec::new(),
            revision: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// ViewCache – the dispatcher
// ---------------------------------------------------------------------------

/// Cached artifacts of the five displays, recomputed selectively.
#[derive(Debug, Clone, Default)]
pub struct ViewCache {
    pub grid: TableView,
    pub table: TableView,
    pub stacked: HistogramView,
    pub layered: HistogramView,
    pub scatter: ScatterView,
}

impl ViewCache {
    /// Build the cache with every display computed once.
    pub fn new(dataset: &PenguinDataset, controls: &Controls) -> Self {
        let mut cache = ViewCache::default();
        cache.refresh(dataset, controls, &crate::controls::all_params());
        cache
    }

    /// Recompute exactly the displays whose parameter reads intersect
    /// `changed`. Runs to completion on the caller's thread.
    pub fn refresh(&mut self, dataset: &PenguinDataset, controls: &Controls, changed: &ParamSet) {
        for display in DisplayId::ALL {
            if display.reads().iter().any(|p| changed.contains(p)) {
                self.recompute(display, dataset, controls);
            }
        }
    }

    fn recompute(&mut self, display: DisplayId, dataset: &PenguinDataset, controls: &Controls) {
        log::debug!("recomputing {display:?}");
        match display {
            DisplayId::DataGrid => {
                self.grid.rows = filter_by_species(dataset, &controls.selected_species);
                self.grid.revision += 1;
            }
            DisplayId::DataTable => {
                self.table.rows = filter_by_species(dataset, &controls.selected_species);
                self.table.revision += 1;
            }
            DisplayId::StackedHistogram => {
                self.stacked.series =
                    mass_histograms(dataset, controls, controls.stacked_bins);
                self.stacked.requested_bins = controls.stacked_bins;
                self.stacked.revision += 1;
            }
            DisplayId::LayeredHistogram => {
                self.layered.series =
                    mass_histograms(dataset, controls, controls.layered_bins);
                self.layered.requested_bins = controls.layered_bins;
                self.layered.revision += 1;
            }
            DisplayId::Scatter => {
                self.scatter.series = scatter_series(dataset, controls);
                self.scatter.x_column = controls.x_column;
                self.scatter.y_column = controls.y_column;
                self.scatter.revision += 1;
            }
        }
    }
}

// ---------------------------------------------------------------------------
// View builders – pure projections of (dataset, controls)
// ---------------------------------------------------------------------------

/// Per-species mass histograms over the pooled range of the filtered rows,
/// so the series share bin edges and can be stacked.
fn mass_histograms(
    dataset: &PenguinDataset,
    controls: &Controls,
    n_bins: usize,
) -> Vec<SpeciesHistogram> {
    let rows = filter_by_species(dataset, &controls.selected_species);
    let masses = rows
        .iter()
        .filter_map(|&i| dataset.penguins()[i].body_mass_g);

    let Some(range) = value_range(masses) else {
        return Vec::new();
    };

    Species::ALL
        .into_iter()
        .filter(|sp| controls.selected_species.contains(sp))
        .map(|species| {
            let values: Vec<f64> = rows
                .iter()
                .map(|&i| &dataset.penguins()[i])
                .filter(|p| p.species == species)
                .filter_map(|p| p.body_mass_g)
                .collect();
            SpeciesHistogram {
                species,
                hist: Histogram::compute(&values, n_bins, range),
            }
        })
        .collect()
}

/// Per-species point series; rows missing either coordinate are skipped.
fn scatter_series(dataset: &PenguinDataset, controls: &Controls) -> Vec<SpeciesPoints> {
    let rows = filter_by_species(dataset, &controls.selected_species);

    Species::ALL
        .into_iter()
        .filter(|sp| controls.selected_species.contains(sp))
        .map(|species| {
            let points: Vec<[f64; 2]> = rows
                .iter()
                .map(|&i| &dataset.penguins()[i])
                .filter(|p| p.species == species)
                .filter_map(|p| {
                    let x = p.value(controls.x_column)?;
                    let y = p.value(controls.y_column)?;
                    Some([x, y])
                })
                .collect();
            SpeciesPoints { species, points }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::all_params;
    use crate::data::filter::SpeciesSelection;
    use crate::data::model::{Island, Penguin};

    fn penguin(species: Species, mass: Option<f64>, bill: Option<f64>) -> Penguin {
        Penguin {
            species,
            island: Island::Dream,
            bill_length_mm: bill,
            bill_depth_mm: bill.map(|b| b / 2.0),
            flipper_length_mm: Some(190.0),
            body_mass_g: mass,
            sex: None,
        }
    }

    fn dataset() -> PenguinDataset {
        PenguinDataset::new(vec![
            penguin(Species::Adelie, Some(3700.0), Some(39.0)),
            penguin(Species::Gentoo, Some(5000.0), Some(46.0)),
            penguin(Species::Chinstrap, Some(3800.0), Some(49.0)),
            penguin(Species::Gentoo, Some(5400.0), Some(48.0)),
            penguin(Species::Adelie, None, None),
        ])
    }

    #[test]
    fn initial_refresh_computes_every_display_once() {
        let cache = ViewCache::new(&dataset(), &Controls::default());
        assert_eq!(cache.grid.revision, 1);
        assert_eq!(cache.table.revision, 1);
        assert_eq!(cache.stacked.revision, 1);
        assert_eq!(cache.layered.revision, 1);
        assert_eq!(cache.scatter.revision, 1);
    }

    #[test]
    fn bin_count_change_recomputes_only_its_histogram() {
        let ds = dataset();
        let mut controls = Controls::default();
        let mut cache = ViewCache::new(&ds, &controls);

        controls.stacked_bins = 42;
        cache.refresh(&ds, &controls, &ParamSet::from([Param::StackedBins]));

        assert_eq!(cache.stacked.revision, 2);
        assert_eq!(cache.stacked.requested_bins, 42);
        assert_eq!(cache.layered.revision, 1);
        assert_eq!(cache.grid.revision, 1);
        assert_eq!(cache.table.revision, 1);
        assert_eq!(cache.scatter.revision, 1);
    }

    #[test]
    fn axis_change_recomputes_only_the_scatter() {
        let ds = dataset();
        let mut controls = Controls::default();
        let mut cache = ViewCache::new(&ds, &controls);

        controls.y_column = NumericColumn::BodyMassG;
        cache.refresh(&ds, &controls, &ParamSet::from([Param::YColumn]));

        assert_eq!(cache.scatter.revision, 2);
        assert_eq!(cache.scatter.y_column, NumericColumn::BodyMassG);
        assert_eq!(cache.grid.revision, 1);
        assert_eq!(cache.stacked.revision, 1);
        assert_eq!(cache.layered.revision, 1);
    }

    #[test]
    fn species_change_recomputes_every_display() {
        let ds = dataset();
        let mut controls = Controls::default();
        let mut cache = ViewCache::new(&ds, &controls);

        controls.selected_species.remove(&Species::Adelie);
        cache.refresh(&ds, &controls, &ParamSet::from([Param::SpeciesSelection]));

        for revision in [
            cache.grid.revision,
            cache.table.revision,
            cache.stacked.revision,
            cache.layered.revision,
            cache.scatter.revision,
        ] {
            assert_eq!(revision, 2);
        }
    }

    #[test]
    fn unchanged_parameters_never_trigger_recomputation() {
        let ds = dataset();
        let controls = Controls::default();
        let mut cache = ViewCache::new(&ds, &controls);

        cache.refresh(&ds, &controls, &ParamSet::new());

        assert_eq!(cache.grid.revision, 1);
        assert_eq!(cache.scatter.revision, 1);
    }

    #[test]
    fn gentoo_only_with_ten_bins_end_to_end() {
        let ds = dataset();
        let controls = Controls {
            selected_species: SpeciesSelection::from([Species::Gentoo]),
            stacked_bins: 10,
            ..Controls::default()
        };
        let cache = ViewCache::new(&ds, &controls);

        assert_eq!(cache.stacked.series.len(), 1);
        assert_eq!(cache.stacked.series[0].species, Species::Gentoo);
        assert_eq!(cache.stacked.series[0].hist.n_bins(), 10);
        assert_eq!(cache.stacked.series[0].hist.total(), 2);

        for view in [&cache.grid, &cache.table] {
            assert!(!view.rows.is_empty());
            for &i in &view.rows {
                assert_eq!(ds.penguins()[i].species, Species::Gentoo);
            }
        }
    }

    #[test]
    fn equal_axes_scatter_degenerates_without_error() {
        let ds = dataset();
        let controls = Controls {
            x_column: NumericColumn::BodyMassG,
            y_column: NumericColumn::BodyMassG,
            ..Controls::default()
        };
        let cache = ViewCache::new(&ds, &controls);

        let mut n_points = 0;
        for series in &cache.scatter.series {
            for p in &series.points {
                assert_eq!(p[0], p[1]);
                n_points += 1;
            }
        }
        assert_eq!(n_points, 4);
    }

    #[test]
    fn every_axis_pair_builds_a_scatter() {
        let ds = dataset();
        for x_column in NumericColumn::ALL {
            for y_column in NumericColumn::ALL {
                let controls = Controls {
                    x_column,
                    y_column,
                    ..Controls::default()
                };
                let cache = ViewCache::new(&ds, &controls);
                assert_eq!(cache.scatter.x_column, x_column);
                assert_eq!(cache.scatter.y_column, y_column);
                assert_eq!(cache.scatter.series.len(), 3);
            }
        }
    }

    #[test]
    fn empty_selection_yields_empty_views() {
        let ds = dataset();
        let controls = Controls {
            selected_species: SpeciesSelection::new(),
            ..Controls::default()
        };
        let cache = ViewCache::new(&ds, &controls);

        assert!(cache.grid.rows.is_empty());
        assert!(cache.table.rows.is_empty());
        assert!(cache.stacked.series.is_empty());
        assert!(cache.layered.series.is_empty());
        assert!(cache.scatter.series.is_empty());
    }

    #[test]
    fn rows_missing_the_binned_value_are_skipped() {
        let ds = dataset();
        let cache = ViewCache::new(&ds, &Controls::default());
        // 5 rows, one without a mass value.
        let total: u64 = cache
            .stacked
            .series
            .iter()
            .map(|s| s.hist.total())
            .sum();
        assert_eq!(total, 4);
    }

    #[test]
    fn every_display_declares_species_as_a_read() {
        for display in DisplayId::ALL {
            assert!(display.reads().contains(&Param::SpeciesSelection));
        }
    }
}
