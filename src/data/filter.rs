use std::collections::BTreeSet;

use super::model::{PenguinDataset, Species};

// ---------------------------------------------------------------------------
// Species filter – the one predicate every display shares
// ---------------------------------------------------------------------------

/// The set of species currently selected in the control panel.
pub type SpeciesSelection = BTreeSet<Species>;

/// A selection with every species included.
pub fn all_species() -> SpeciesSelection {
    Species::ALL.into_iter().collect()
}

/// Return indices of penguins whose species is in the selection, in dataset
/// order. An empty selection yields an empty result, not an error.
pub fn filter_by_species(dataset: &PenguinDataset, selection: &SpeciesSelection) -> Vec<usize> {
    dataset
        .penguins()
        .iter()
        .enumerate()
        .filter(|(_, p)| selection.contains(&p.species))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Island, Penguin};

    fn penguin(species: Species) -> Penguin {
        Penguin {
            species,
            island: Island::Dream,
            bill_length_mm: None,
            bill_depth_mm: None,
            flipper_length_mm: None,
            body_mass_g: None,
            sex: None,
        }
    }

    fn dataset() -> PenguinDataset {
        PenguinDataset::new(vec![
            penguin(Species::Adelie),
            penguin(Species::Gentoo),
            penguin(Species::Chinstrap),
            penguin(Species::Adelie),
            penguin(Species::Gentoo),
        ])
    }

    #[test]
    fn every_subset_selects_exactly_its_members() {
        let ds = dataset();
        // All 8 subsets of the 3-species set.
        for mask in 0u8..8 {
            let selection: SpeciesSelection = Species::ALL
                .into_iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, sp)| sp)
                .collect();

            let indices = filter_by_species(&ds, &selection);
            assert!(indices.len() <= ds.len());
            for &i in &indices {
                assert!(selection.contains(&ds.penguins()[i].species));
            }
            let expected = ds
                .penguins()
                .iter()
                .filter(|p| selection.contains(&p.species))
                .count();
            assert_eq!(indices.len(), expected);
        }
    }

    #[test]
    fn preserves_dataset_order() {
        let ds = dataset();
        let indices = filter_by_species(&ds, &all_species());
        assert!(indices.windows(2).all(|w| w[0] < w[1]));

        let adelie_only: SpeciesSelection = [Species::Adelie].into_iter().collect();
        assert_eq!(filter_by_species(&ds, &adelie_only), vec![0, 3]);
    }

    #[test]
    fn empty_selection_yields_empty_result() {
        let ds = dataset();
        assert!(filter_by_species(&ds, &SpeciesSelection::new()).is_empty());
    }

    #[test]
    fn full_selection_yields_whole_dataset() {
        let ds = dataset();
        let indices = filter_by_species(&ds, &all_species());
        assert_eq!(indices, (0..ds.len()).collect::<Vec<_>>());
    }
}
