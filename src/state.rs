use crate::controls::{
    Controls, LAYERED_BIN_RANGE, Param, ParamSet, STACKED_BIN_RANGE, all_params,
};
use crate::data::filter::all_species;
use crate::data::model::{NumericColumn, PenguinDataset, Species};
use crate::views::ViewCache;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The dataset is read-only after construction. The controls are mutated
/// only through the setters below; each setter records which parameter
/// changed so [`AppState::refresh_views`] can recompute exactly the
/// dependent displays.
pub struct AppState {
    pub dataset: PenguinDataset,
    pub controls: Controls,
    pub views: ViewCache,
    changed: ParamSet,
}

impl AppState {
    /// Wrap a loaded dataset and compute every view once.
    pub fn new(dataset: PenguinDataset) -> Self {
        let controls = Controls::default();
        let views = ViewCache::new(&dataset, &controls);
        AppState {
            dataset,
            controls,
            views,
            changed: ParamSet::new(),
        }
    }

    /// Recompute views depending on parameters changed since the last call.
    pub fn refresh_views(&mut self) {
        if self.changed.is_empty() {
            return;
        }
        let changed = std::mem::take(&mut self.changed);
        self.views.refresh(&self.dataset, &self.controls, &changed);
    }

    // -- Setter operations, raised by UI events --

    /// Toggle one species in the selection.
    pub fn toggle_species(&mut self, species: Species) {
        if !self.controls.selected_species.remove(&species) {
            self.controls.selected_species.insert(species);
        }
        self.changed.insert(Param::SpeciesSelection);
    }

    /// Select every species.
    pub fn select_all_species(&mut self) {
        let all = all_species();
        if self.controls.selected_species != all {
            self.controls.selected_species = all;
            self.changed.insert(Param::SpeciesSelection);
        }
    }

    /// Clear the species selection. Displays go empty, which is legal.
    pub fn select_no_species(&mut self) {
        if !self.controls.selected_species.is_empty() {
            self.controls.selected_species.clear();
            self.changed.insert(Param::SpeciesSelection);
        }
    }

    /// Set the stacked histogram's bin count, clamped to its domain.
    pub fn set_stacked_bins(&mut self, bins: usize) {
        let bins = bins.clamp(*STACKED_BIN_RANGE.start(), *STACKED_BIN_RANGE.end());
        if self.controls.stacked_bins != bins {
            self.controls.stacked_bins = bins;
            self.changed.insert(Param::StackedBins);
        }
    }

    /// Set the layered histogram's bin count, clamped to its domain.
    pub fn set_layered_bins(&mut self, bins: usize) {
        let bins = bins.clamp(*LAYERED_BIN_RANGE.start(), *LAYERED_BIN_RANGE.end());
        if self.controls.layered_bins != bins {
            self.controls.layered_bins = bins;
            self.changed.insert(Param::LayeredBins);
        }
    }

    /// Set the scatter x-axis column.
    pub fn set_x_column(&mut self, column: NumericColumn) {
        if self.controls.x_column != column {
            self.controls.x_column = column;
            self.changed.insert(Param::XColumn);
        }
    }

    /// Set the scatter y-axis column.
    pub fn set_y_column(&mut self, column: NumericColumn) {
        if self.controls.y_column != column {
            self.controls.y_column = column;
            self.changed.insert(Param::YColumn);
        }
    }

    /// Restore every control to its documented default.
    pub fn reset_controls(&mut self) {
        if self.controls != Controls::default() {
            log::info!("resetting controls to defaults");
            self.controls = Controls::default();
            self.changed = all_params();
        }
    }
}
