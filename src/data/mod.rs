/// Data layer: core types, loading, filtering, and binning.
///
/// Architecture:
/// ```text
///  assets/penguins.csv (embedded)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → PenguinDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ PenguinDataset │  Vec<Penguin>, read-only
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐   ┌──────────┐
///   │  filter   │   │   hist    │  species predicate / fixed-width bins
///   └──────────┘   └──────────┘
/// ```
pub mod filter;
pub mod hist;
pub mod loader;
pub mod model;
