use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Categorical columns – closed sets, parsed from the CSV
// ---------------------------------------------------------------------------

/// The three penguin species of the Palmer Archipelago dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Species {
    Adelie,
    Chinstrap,
    Gentoo,
}

impl Species {
    /// All species, in dataset order.
    pub const ALL: [Species; 3] = [Species::Adelie, Species::Chinstrap, Species::Gentoo];
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Species::Adelie => write!(f, "Adelie"),
            Species::Chinstrap => write!(f, "Chinstrap"),
            Species::Gentoo => write!(f, "Gentoo"),
        }
    }
}

impl FromStr for Species {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Adelie" => Ok(Species::Adelie),
            "Chinstrap" => Ok(Species::Chinstrap),
            "Gentoo" => Ok(Species::Gentoo),
            other => Err(ParseError::UnknownSpecies(other.to_string())),
        }
    }
}

/// The three islands penguins were observed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Island {
    Biscoe,
    Dream,
    Torgersen,
}

impl fmt::Display for Island {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Island::Biscoe => write!(f, "Biscoe"),
            Island::Dream => write!(f, "Dream"),
            Island::Torgersen => write!(f, "Torgersen"),
        }
    }
}

impl FromStr for Island {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Biscoe" => Ok(Island::Biscoe),
            "Dream" => Ok(Island::Dream),
            "Torgersen" => Ok(Island::Torgersen),
            other => Err(ParseError::UnknownIsland(other.to_string())),
        }
    }
}

/// Recorded sex of a penguin. Missing for some rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sex {
    Male,
    Female,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}

impl FromStr for Sex {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Sex::Male),
            "female" => Ok(Sex::Female),
            other => Err(ParseError::UnknownSex(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Numeric columns – the four plottable measurements
// ---------------------------------------------------------------------------

/// The four numeric measurement columns a plot axis can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NumericColumn {
    BillLengthMm,
    BillDepthMm,
    FlipperLengthMm,
    BodyMassG,
}

impl NumericColumn {
    /// All numeric columns, in table order.
    pub const ALL: [NumericColumn; 4] = [
        NumericColumn::BillLengthMm,
        NumericColumn::BillDepthMm,
        NumericColumn::FlipperLengthMm,
        NumericColumn::BodyMassG,
    ];

    /// CSV header name, also used as the axis label.
    pub fn name(self) -> &'static str {
        match self {
            NumericColumn::BillLengthMm => "bill_length_mm",
            NumericColumn::BillDepthMm => "bill_depth_mm",
            NumericColumn::FlipperLengthMm => "flipper_length_mm",
            NumericColumn::BodyMassG => "body_mass_g",
        }
    }

    /// Decimal places used when formatting values of this column.
    pub fn decimals(self) -> usize {
        match self {
            NumericColumn::BillLengthMm | NumericColumn::BillDepthMm => 1,
            NumericColumn::FlipperLengthMm | NumericColumn::BodyMassG => 0,
        }
    }
}

impl fmt::Display for NumericColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ---------------------------------------------------------------------------
// Penguin – one row of the dataset
// ---------------------------------------------------------------------------

/// A single penguin observation (one dataset row). Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Penguin {
    pub species: Species,
    pub island: Island,
    pub bill_length_mm: Option<f64>,
    pub bill_depth_mm: Option<f64>,
    pub flipper_length_mm: Option<f64>,
    pub body_mass_g: Option<f64>,
    pub sex: Option<Sex>,
}

impl Penguin {
    /// Value of the given numeric column, if recorded.
    pub fn value(&self, column: NumericColumn) -> Option<f64> {
        match column {
            NumericColumn::BillLengthMm => self.bill_length_mm,
            NumericColumn::BillDepthMm => self.bill_depth_mm,
            NumericColumn::FlipperLengthMm => self.flipper_length_mm,
            NumericColumn::BodyMassG => self.body_mass_g,
        }
    }
}

// ---------------------------------------------------------------------------
// PenguinDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full dataset, loaded once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct PenguinDataset {
    penguins: Vec<Penguin>,
}

impl PenguinDataset {
    pub fn new(penguins: Vec<Penguin>) -> Self {
        PenguinDataset { penguins }
    }

    pub fn penguins(&self) -> &[Penguin] {
        &self.penguins
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.penguins.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.penguins.is_empty()
    }

    /// Number of observations of the given species.
    pub fn species_count(&self, species: Species) -> usize {
        self.penguins.iter().filter(|p| p.species == species).count()
    }
}

// ---------------------------------------------------------------------------
// Parse errors
// ---------------------------------------------------------------------------

/// A categorical cell that does not belong to its closed value set.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown species '{0}'")]
    UnknownSpecies(String),
    #[error("unknown island '{0}'")]
    UnknownIsland(String),
    #[error("unknown sex '{0}'")]
    UnknownSex(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn species_round_trip() {
        for sp in Species::ALL {
            assert_eq!(sp.to_string().parse::<Species>().unwrap(), sp);
        }
    }

    #[test]
    fn unknown_species_is_an_error() {
        let err = "Emperor".parse::<Species>().unwrap_err();
        assert_eq!(err, ParseError::UnknownSpecies("Emperor".to_string()));
    }

    #[test]
    fn numeric_column_accessor_matches_fields() {
        let p = Penguin {
            species: Species::Adelie,
            island: Island::Torgersen,
            bill_length_mm: Some(39.1),
            bill_depth_mm: Some(18.7),
            flipper_length_mm: Some(181.0),
            body_mass_g: None,
            sex: Some(Sex::Male),
        };
        assert_eq!(p.value(NumericColumn::BillLengthMm), Some(39.1));
        assert_eq!(p.value(NumericColumn::BillDepthMm), Some(18.7));
        assert_eq!(p.value(NumericColumn::FlipperLengthMm), Some(181.0));
        assert_eq!(p.value(NumericColumn::BodyMassG), None);
    }

    #[test]
    fn dataset_species_counts() {
        let mk = |species| Penguin {
            species,
            island: Island::Dream,
            bill_length_mm: None,
            bill_depth_mm: None,
            flipper_length_mm: None,
            body_mass_g: None,
            sex: None,
        };
        let ds = PenguinDataset::new(vec![
            mk(Species::Adelie),
            mk(Species::Gentoo),
            mk(Species::Adelie),
        ]);
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.species_count(Species::Adelie), 2);
        assert_eq!(ds.species_count(Species::Chinstrap), 0);
        assert_eq!(ds.species_count(Species::Gentoo), 1);
    }
}
