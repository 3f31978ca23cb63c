//! Data layer: records, loading, filtering, sorting.
//!
//! Architecture:
//! ```text
//!  .json / .csv / .parquet
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → CompanyStore
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────────┐
//!   │ CompanyStore  │  Vec<Company>, read-only
//!   └──────────────┘
//!        │                       ┌──────────┐
//!        ├──────────────────────▶│ options   │  distinct values + counts
//!        ▼                       └──────────┘
//!   ┌──────────┐    ┌──────────────────────────┐
//!   │ pipeline  │◀──│ ViewState (filter + sort) │◀── Action (reducer)
//!   └──────────┘    └──────────────────────────┘
//!        │
//!        ▼
//!   table / exporters
//! ```

pub mod controls;
pub mod filter;
pub mod loader;
pub mod model;
pub mod options;
pub mod pipeline;
pub mod sort;
pub mod view;
