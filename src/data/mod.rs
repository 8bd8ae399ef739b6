/// Data layer: core types, loading, summary statistics and binning.
///
/// Architecture:
/// ```text
///  results.txt  ("aloes 7")
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + validate rows → ResultSet
///   └──────────┘
///        │
///        ├──────────────┐
///        ▼              ▼
///   ┌──────────┐   ┌───────────┐
///   │ summary   │   │ histogram │  equal-width bins over observations
///   └──────────┘   └───────────┘
/// ```

pub mod error;
pub mod histogram;
pub mod loader;
pub mod model;
pub mod summary;
