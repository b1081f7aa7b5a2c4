/// Data layer: core types, loading, filtering and view rendering.
///
/// Architecture:
/// ```text
///  parsed_data.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  project columns, drop "RXN Input" rows → Table
///   └──────────┘
///        │
///        ├──────────────► options   distinct values per filter column
///        ▼
///   ┌──────────┐
///   │  filter   │  Selection → Predicate → filtered View
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   view    │  ScatterSpec (LOD vs x), TableView (sorted by LOD)
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod options;
pub mod schema;
pub mod view;

#[cfg(test)]
pub mod fixtures;
