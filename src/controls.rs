use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use crate::data::filter::{SpeciesSelection, all_species};
use crate::data::model::NumericColumn;

// ---------------------------------------------------------------------------
// Parameter identifiers
// ---------------------------------------------------------------------------

/// A user-adjustable parameter. The dispatcher's dependency table is keyed
/// on these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Param {
    SpeciesSelection,
    StackedBins,
    LayeredBins,
    XColumn,
    YColumn,
}

/// A set of parameters that changed since the last view refresh.
pub type ParamSet = BTreeSet<Param>;

/// Every parameter, for the initial computation and for resets.
pub fn all_params() -> ParamSet {
    ParamSet::from([
        Param::SpeciesSelection,
        Param::StackedBins,
        Param::LayeredBins,
        Param::XColumn,
        Param::YColumn,
    ])
}

// ---------------------------------------------------------------------------
// The control panel's parameter set
// ---------------------------------------------------------------------------

/// Domain of the stacked histogram's bin count.
pub const STACKED_BIN_RANGE: RangeInclusive<usize> = 1..=100;
/// Domain of the layered histogram's bin count.
pub const LAYERED_BIN_RANGE: RangeInclusive<usize> = 1..=50;

/// All user-controllable values driving the displays. Owned by the app
/// state; mutated only through its setter operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Controls {
    /// Species shown in every panel. May be empty (panels go empty too).
    pub selected_species: SpeciesSelection,
    /// Bin count of the stacked mass histogram.
    pub stacked_bins: usize,
    /// Bin count of the layered mass histogram.
    pub layered_bins: usize,
    /// Scatter x-axis column.
    pub x_column: NumericColumn,
    /// Scatter y-axis column.
    pub y_column: NumericColumn,
}

impl Default for Controls {
    fn default() -> Self {
        Controls {
            selected_species: all_species(),
            stacked_bins: 20,
            layered_bins: 25,
            x_column: NumericColumn::BillLengthMm,
            y_column: NumericColumn::BillLengthMm,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Species;

    #[test]
    fn documented_defaults() {
        let c = Controls::default();
        assert_eq!(c.selected_species.len(), Species::ALL.len());
        assert_eq!(c.stacked_bins, 20);
        assert_eq!(c.layered_bins, 25);
        assert_eq!(c.x_column, NumericColumn::BillLengthMm);
        assert_eq!(c.y_column, NumericColumn::BillLengthMm);
    }

    #[test]
    fn bin_domains_match_the_control_widgets() {
        assert!(STACKED_BIN_RANGE.contains(&Controls::default().stacked_bins));
        assert!(LAYERED_BIN_RANGE.contains(&Controls::default().layered_bins));
        assert_eq!(*STACKED_BIN_RANGE.end(), 100);
        assert_eq!(*LAYERED_BIN_RANGE.end(), 50);
    }
}
