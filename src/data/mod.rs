/// Data layer: attribute registry, loading, projection and statistics.
///
/// Architecture:
/// ```text
///      HomeC.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  worker thread: parse file → Dataset (text rows)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  project(attr) → Vec<f64>, NaN = missing
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  stats    │  mean / median / sample std-dev
///   └──────────┘
/// ```

pub mod attributes;
pub mod loader;
pub mod model;
pub mod stats;
pub mod time;
