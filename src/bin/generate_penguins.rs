//! Regenerates `assets/penguins.csv`, the bundled reference dataset.
//!
//! Deterministic: the same seed always produces the same file.

/// Deterministic sampler for penguin measurements: a splitmix64 stream
/// feeding Box-Muller normal draws, with the spare variate of each pair
/// cached.
struct MeasurementRng {
    state: u64,
    spare: Option<f64>,
}

impl MeasurementRng {
    fn seeded(seed: u64) -> Self {
        MeasurementRng { state: seed, spare: None }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }

    /// Uniform draw in [0, 1).
    fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// One draw from N(mean, sd).
    fn normal(&mut self, mean: f64, sd: f64) -> f64 {
        let z = match self.spare.take() {
            Some(z) => z,
            None => {
                let radius = (-2.0 * self.unit().max(1e-12).ln()).sqrt();
                let theta = std::f64::consts::TAU * self.unit();
                self.spare = Some(radius * theta.sin());
                radius * theta.cos()
            }
        };
        mean + sd * z
    }

    /// Fair coin flip.
    fn coin(&mut self) -> bool {
        self.next_u64() & 1 == 0
    }
}

/// One species/island breeding group: size and measurement distributions
/// (mean, standard deviation), following the published Palmer Station
/// summaries.
struct Colony {
    species: &'static str,
    island: &'static str,
    count: usize,
    bill_length: (f64, f64),
    bill_depth: (f64, f64),
    flipper_length: (f64, f64),
    body_mass: (f64, f64),
}

const COLONIES: [Colony; 5] = [
    Colony {
        species: "Adelie",
        island: "Torgersen",
        count: 52,
        bill_length: (38.8, 2.7),
        bill_depth: (18.3, 1.2),
        flipper_length: (190.0, 6.5),
        body_mass: (3700.0, 460.0),
    },
    Colony {
        species: "Adelie",
        island: "Biscoe",
        count: 44,
        bill_length: (38.8, 2.7),
        bill_depth: (18.3, 1.2),
        flipper_length: (190.0, 6.5),
        body_mass: (3700.0, 460.0),
    },
    Colony {
        species: "Adelie",
        island: "Dream",
        count: 56,
        bill_length: (38.8, 2.7),
        bill_depth: (18.3, 1.2),
        flipper_length: (190.0, 6.5),
        body_mass: (3700.0, 460.0),
    },
    Colony {
        species: "Chinstrap",
        island: "Dream",
        count: 68,
        bill_length: (48.8, 3.3),
        bill_depth: (18.4, 1.1),
        flipper_length: (196.0, 7.1),
        body_mass: (3730.0, 385.0),
    },
    Colony {
        species: "Gentoo",
        island: "Biscoe",
        count: 124,
        bill_length: (47.5, 3.1),
        bill_depth: (15.0, 1.0),
        flipper_length: (217.0, 6.5),
        body_mass: (5075.0, 505.0),
    },
];

/// Seed for the measurement stream; the study's final field season.
const SEED: u64 = 2009;

/// Rows written with every measurement (and sex) missing.
const ALL_MISSING_ROWS: [usize; 2] = [3, 271];

/// Rows written without a recorded sex, beyond the all-missing rows.
const MISSING_SEX_ROWS: [usize; 11] = [8, 37, 58, 96, 123, 146, 160, 179, 218, 256, 303];

fn na() -> String {
    "NA".to_string()
}

fn main() {
    let mut rng = MeasurementRng::seeded(SEED);

    let output_path = "assets/penguins.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record([
            "species",
            "island",
            "bill_length_mm",
            "bill_depth_mm",
            "flipper_length_mm",
            "body_mass_g",
            "sex",
        ])
        .expect("Failed to write header");

    let mut row = 0usize;
    for colony in &COLONIES {
        for _ in 0..colony.count {
            // Draw every field so missing rows don't shift the stream.
            let bill_length = rng.normal(colony.bill_length.0, colony.bill_length.1);
            let bill_depth = rng.normal(colony.bill_depth.0, colony.bill_depth.1);
            let flipper_length = rng.normal(colony.flipper_length.0, colony.flipper_length.1);
            let body_mass = rng.normal(colony.body_mass.0, colony.body_mass.1);
            let male = rng.coin();

            let record: [String; 7] = if ALL_MISSING_ROWS.contains(&row) {
                [
                    colony.species.to_string(),
                    colony.island.to_string(),
                    na(),
                    na(),
                    na(),
                    na(),
                    na(),
                ]
            } else {
                let sex = if MISSING_SEX_ROWS.contains(&row) {
                    na()
                } else if male {
                    "male".to_string()
                } else {
                    "female".to_string()
                };
                [
                    colony.species.to_string(),
                    colony.island.to_string(),
                    format!("{bill_length:.1}"),
                    format!("{bill_depth:.1}"),
                    format!("{flipper_length:.0}"),
                    // Field masses were recorded to the nearest 25 g.
                    format!("{:.0}", (body_mass / 25.0).round() * 25.0),
                    sex,
                ]
            };
            writer.write_record(&record).expect("Failed to write row");
            row += 1;
        }
    }

    writer.flush().expect("Failed to flush output file");
    println!("Wrote {row} penguins to {output_path}");
}
