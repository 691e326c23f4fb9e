/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  managers_profit_ayp.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + round + derive → ManagerTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ ManagerTable  │  Vec<ManagerRecord>, fixed column order
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  thresholds / ID-name query → fresh row set
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
