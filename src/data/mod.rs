//! Data layer: typed tables, loading, aggregation, filtering and sorting.
//!
//! Architecture:
//! ```text
//!   <team>_stats.csv …
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  source   │  catalog listing + raw text fetch
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐      ┌───────────┐
//!   │  parser   │ ───▶ │ aggregate │  one team, or all teams + Source column
//!   └──────────┘      └───────────┘
//!        │                  │
//!        ▼                  ▼
//!   ┌──────────────────────────┐
//!   │  Dataset                 │  original snapshot, current view
//!   └──────────────────────────┘
//!        │            │
//!        ▼            ▼
//!   ┌────────┐   ┌────────┐
//!   │ filter │   │  sort  │   mutate the current view only
//!   └────────┘   └────────┘
//! ```

pub mod aggregate;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod parser;
pub mod sort;
pub mod source;
