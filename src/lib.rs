//! ecosystem-viz: Population reporting for ecosystem simulations
//!
//! Reads the per-timestep population table written by an ecosystem
//! simulation, prints descriptive statistics and renders two charts: every
//! species on one set of axes, and a three-panel breakdown by trophic level.
//!
//! # Architecture
//!
//! Three stages, used in sequence with no feedback:
//!
//! 1. **Load**: CSV file to an immutable [`data::PopulationTable`]
//! 2. **Report**: per-species statistics and aggregate totals
//! 3. **Plot**: two chart images, each rendered with its own local drawing state
//!
//! # Quick Start
//!
//! ```rust
//! use ecosystem_viz::prelude::*;
//!
//! let table = PopulationTable::from_rows(
//!     vec!["Deer".to_string(), "Fox".to_string()],
//!     vec![0, 1, 2],
//!     vec![vec![30, 4], vec![32, 5], vec![29, 6]],
//! ).unwrap();
//!
//! let report = PopulationReport::from_table(&table)
//!     .unwrap()
//!     .with_trophic_totals(&table, &SpeciesGroups::default());
//!
//! assert_eq!(report.summary().initial_total, 34);
//! assert_eq!(report.summary().get("Fox").unwrap().max, 6);
//! ```
//!
//! # Modules
//!
//! - [`data`]: Population table and CSV loading
//! - [`analysis`]: Statistics and trophic-level grouping
//! - [`output`]: Console report, charts and output file naming

pub mod analysis;
pub mod data;
pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use ecosystem_viz::prelude::*;
    //! ```
    pub use crate::analysis::{
        PopulationSummary, SpeciesGroups, SpeciesStatistics, TrophicLevel, TrophicRouting,
    };
    pub use crate::data::{
        load_population_table, read_population_table, LoadError, PopulationTable,
        DEFAULT_INPUT_FILE,
    };
    pub use crate::output::{
        plot_all_populations, plot_trophic_levels, ChartArtifacts, PlotConfig, PopulationReport,
    };
}
