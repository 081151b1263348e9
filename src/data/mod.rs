//! Population data input
//!
//! - **table**: the in-memory [`PopulationTable`]
//! - **loader**: CSV reading with [`load_population_table`] / [`read_population_table`]

pub mod loader;
pub mod table;

pub use loader::{load_population_table, read_population_table, LoadError, DEFAULT_INPUT_FILE};
pub use table::{PopulationTable, TIME_COLUMN};
