//! Output of a reporting run
//!
//! - **report**: Console statistics table ([`PopulationReport`])
//! - **visualization**: PNG/SVG charts using plotters
//! - **artifacts**: Timestamped chart file names ([`ChartArtifacts`])
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── report.rs           ← Fixed-width statistics report
//! ├── artifacts.rs        ← Output file naming
//! └── visualization/      ← Charts
//!     ├── mod.rs
//!     ├── config.rs
//!     ├── populations.rs
//!     └── trophic_levels.rs
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use ecosystem_viz::output::{
//!     plot_all_populations, plot_trophic_levels, ChartArtifacts, PopulationReport,
//! };
//!
//! PopulationReport::from_table(&table)?.print();
//!
//! let artifacts = ChartArtifacts::next_available(".")?;
//! plot_all_populations(&table, &artifacts.population_dynamics, None)?;
//! plot_trophic_levels(&table, &SpeciesGroups::default(), &artifacts.trophic_levels, None)?;
//! ```

pub mod artifacts;
pub mod report;
pub mod visualization;

// Re-export commonly used items for convenience
pub use artifacts::ChartArtifacts;
pub use report::PopulationReport;
pub use visualization::{plot_all_populations, plot_trophic_levels, PlotConfig};
