//! Descriptive statistics over a population table
//!
//! Every statistic is a single pass over one species column:
//!
//! | Field         | Definition                          |
//! |---------------|-------------------------------------|
//! | `initial`     | value at the first timestep         |
//! | `final_value` | value at the last timestep          |
//! | `mean`        | $\frac{1}{N}\sum_i c_i$             |
//! | `max`, `min`  | extrema over all timesteps          |
//!
//! Aggregate totals sum the species columns of one row; the time column is
//! never part of a total.

use std::error::Error;
use std::fmt;

use crate::data::PopulationTable;

/// Statistics cannot be computed for this table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatisticsError {
    /// The table has a header but no data rows
    EmptyTable,

    /// The species counts of a row sum past `i64::MAX`
    TotalOverflow { row: usize },
}

impl fmt::Display for StatisticsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatisticsError::EmptyTable => {
                write!(f, "Empty data: the population table has no timesteps")
            }
            StatisticsError::TotalOverflow { row } => {
                write!(f, "Population total at row {} does not fit in 64 bits", row)
            }
        }
    }
}

impl Error for StatisticsError {}

/// Summary of one species column
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesStatistics {
    pub name: String,
    pub initial: i64,
    pub final_value: i64,
    pub mean: f64,
    pub max: i64,
    pub min: i64,
}

impl SpeciesStatistics {
    /// Compute the statistics of one series
    ///
    /// Returns `None` for an empty series.
    pub fn from_series(name: &str, series: &[i64]) -> Option<Self> {
        let initial = *series.first()?;
        let final_value = *series.last()?;
        let max = *series.iter().max()?;
        let min = *series.iter().min()?;
        let mean = series.iter().map(|&c| c as f64).sum::<f64>() / series.len() as f64;

        Some(Self {
            name: name.to_string(),
            initial,
            final_value,
            mean,
            max,
            min,
        })
    }
}

/// Per-species statistics plus aggregate totals
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationSummary {
    /// One entry per species column, in column order
    pub species: Vec<SpeciesStatistics>,

    /// Number of timesteps
    pub timesteps: usize,

    /// Sum of all species at the first timestep
    pub initial_total: i64,

    /// Sum of all species at the last timestep
    pub final_total: i64,
}

impl PopulationSummary {
    /// Summarize every species column of `table`
    ///
    /// # Errors
    ///
    /// [`StatisticsError::EmptyTable`] if the table has no rows,
    /// [`StatisticsError::TotalOverflow`] if a total exceeds `i64`.
    pub fn from_table(table: &PopulationTable) -> Result<Self, StatisticsError> {
        if table.is_empty() {
            return Err(StatisticsError::EmptyTable);
        }

        let species = table
            .species_names()
            .iter()
            .enumerate()
            .map(|(j, name)| {
                SpeciesStatistics::from_series(name, &table.series(j))
                    .ok_or(StatisticsError::EmptyTable)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let last = table.row_count() - 1;
        let total_at =
            |row: usize| table.row_total(row).ok_or(StatisticsError::TotalOverflow { row });

        Ok(Self {
            species,
            timesteps: table.row_count(),
            initial_total: total_at(0)?,
            final_total: total_at(last)?,
        })
    }

    pub fn get(&self, name: &str) -> Option<&SpeciesStatistics> {
        self.species.iter().find(|s| s.name == name)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
