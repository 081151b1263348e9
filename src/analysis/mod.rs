//! Computations over a loaded population table
//!
//! - **statistics**: per-species initial/final/mean/max/min and row totals
//! - **trophic**: species-to-level grouping, routing and group totals

pub mod statistics;
pub mod trophic;

pub use statistics::{PopulationSummary, SpeciesStatistics, StatisticsError};
pub use trophic::{
    aggregate_by_level, trophic_totals, SpeciesGroups, TrophicLevel, TrophicRouting, TrophicTotals,
};
