use std::io::Read;

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};

use super::model::{Penguin, PenguinDataset, ParseError};

/// The bundled reference dataset, compiled into the binary.
/// Regenerate with `cargo run --bin generate_penguins`.
const PENGUINS_CSV: &str = include_str!("../../assets/penguins.csv");

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the bundled penguins dataset. Called once at startup.
pub fn load_embedded() -> Result<PenguinDataset> {
    parse_csv(PENGUINS_CSV.as_bytes()).context("parsing bundled penguins dataset")
}

/// Parse a penguins CSV from any reader.
///
/// Expected header:
/// `species,island,bill_length_mm,bill_depth_mm,flipper_length_mm,body_mass_g,sex`
///
/// Missing cells are spelled `NA` (empty cells are accepted too).
pub fn parse_csv<R: Read>(reader: R) -> Result<PenguinDataset> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut penguins = Vec::new();

    for (row_no, result) in csv_reader.deserialize::<RawRow>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;
        let penguin = raw
            .into_penguin()
            .with_context(|| format!("CSV row {row_no}"))?;
        penguins.push(penguin);
    }

    Ok(PenguinDataset::new(penguins))
}

// ---------------------------------------------------------------------------
// Raw CSV row
// ---------------------------------------------------------------------------

/// One CSV row before the categorical cells are checked against their
/// closed value sets.
#[derive(Debug, Deserialize)]
struct RawRow {
    species: String,
    island: String,
    #[serde(deserialize_with = "na_f64")]
    bill_length_mm: Option<f64>,
    #[serde(deserialize_with = "na_f64")]
    bill_depth_mm: Option<f64>,
    #[serde(deserialize_with = "na_f64")]
    flipper_length_mm: Option<f64>,
    #[serde(deserialize_with = "na_f64")]
    body_mass_g: Option<f64>,
    #[serde(deserialize_with = "na_string")]
    sex: Option<String>,
}

impl RawRow {
    fn into_penguin(self) -> Result<Penguin, ParseError> {
        Ok(Penguin {
            species: self.species.parse()?,
            island: self.island.parse()?,
            bill_length_mm: self.bill_length_mm,
            bill_depth_mm: self.bill_depth_mm,
            flipper_length_mm: self.flipper_length_mm,
            body_mass_g: self.body_mass_g,
            sex: self.sex.as_deref().map(str::parse).transpose()?,
        })
    }
}

// -- `NA`-aware cell deserializers --

fn na_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let cell = raw.trim();
    if is_na(cell) {
        return Ok(None);
    }
    cell.parse::<f64>()
        .map(Some)
        .map_err(|_| serde::de::Error::custom(format!("'{cell}' is not a number")))
}

fn na_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let cell = raw.trim();
    if is_na(cell) {
        Ok(None)
    } else {
        Ok(Some(cell.to_string()))
    }
}

fn is_na(cell: &str) -> bool {
    cell.is_empty() || cell == "NA"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Island, Sex, Species};

    const HEADER: &str =
        "species,island,bill_length_mm,bill_depth_mm,flipper_length_mm,body_mass_g,sex\n";

    #[test]
    fn parses_complete_rows() {
        let csv = format!(
            "{HEADER}Adelie,Torgersen,39.1,18.7,181,3750,male\n\
             Gentoo,Biscoe,46.1,13.2,211,4500,female\n"
        );
        let ds = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);

        let first = &ds.penguins()[0];
        assert_eq!(first.species, Species::Adelie);
        assert_eq!(first.island, Island::Torgersen);
        assert_eq!(first.bill_length_mm, Some(39.1));
        assert_eq!(first.body_mass_g, Some(3750.0));
        assert_eq!(first.sex, Some(Sex::Male));

        assert_eq!(ds.penguins()[1].species, Species::Gentoo);
        assert_eq!(ds.penguins()[1].sex, Some(Sex::Female));
    }

    #[test]
    fn na_cells_parse_to_none() {
        let csv = format!("{HEADER}Adelie,Torgersen,NA,NA,NA,NA,NA\n");
        let ds = parse_csv(csv.as_bytes()).unwrap();
        let p = &ds.penguins()[0];
        assert_eq!(p.bill_length_mm, None);
        assert_eq!(p.bill_depth_mm, None);
        assert_eq!(p.flipper_length_mm, None);
        assert_eq!(p.body_mass_g, None);
        assert_eq!(p.sex, None);
    }

    #[test]
    fn unknown_species_is_rejected() {
        let csv = format!("{HEADER}Emperor,Dream,40.0,18.0,190,3800,male\n");
        assert!(parse_csv(csv.as_bytes()).is_err());
    }

    #[test]
    fn malformed_numeric_cell_is_rejected() {
        let csv = format!("{HEADER}Adelie,Dream,forty,18.0,190,3800,male\n");
        assert!(parse_csv(csv.as_bytes()).is_err());
    }

    #[test]
    fn embedded_dataset_has_canonical_shape() {
        let ds = load_embedded().unwrap();
        assert_eq!(ds.len(), 344);
        assert_eq!(ds.species_count(Species::Adelie), 152);
        assert_eq!(ds.species_count(Species::Chinstrap), 68);
        assert_eq!(ds.species_count(Species::Gentoo), 124);

        let missing_sex = ds.penguins().iter().filter(|p| p.sex.is_none()).count();
        let missing_mass = ds
            .penguins()
            .iter()
            .filter(|p| p.body_mass_g.is_none())
            .count();
        assert_eq!(missing_sex, 13);
        assert_eq!(missing_mass, 2);
    }
}
