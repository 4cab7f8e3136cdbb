/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  published CSV (HTTPS) / local snapshot
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  fetch + parse text → Dataset, or LoadError
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<Record>, unique category/variable index
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply facet predicates → filtered indices
///   └──────────┘
/// ```
pub mod filter;
pub mod loader;
pub mod model;
