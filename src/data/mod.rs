/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///   healthy_lifestyle_city_2021_with_coords.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → CityDataset (or DataError)
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ CityDataset │  Vec<CityRecord>, column + city option lists
///   └─────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  selected cities → row indices
///   └──────────┘
/// ```

pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
