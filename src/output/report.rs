//! Console statistics report
//!
//! [`PopulationReport`] renders a fixed-width table through `Display`:
//!
//! ```text
//! ================================================================================
//! ECOSYSTEM STATISTICS SUMMARY
//! ================================================================================
//!
//! Species              Initial    Final      Mean       Max        Min
//! --------------------------------------------------------------------------------
//! Deer                 30         29         31.8       35         29
//! ...
//!
//! ================================================================================
//! Total timesteps: 5
//! Initial total population: 241
//! Final total population: 215
//! ================================================================================
//! ```
//!
//! The layout is meant for people, not parsers.

use std::fmt;

use crate::analysis::{
    trophic_totals, PopulationSummary, SpeciesGroups, StatisticsError, TrophicTotals,
};
use crate::data::PopulationTable;

const REPORT_WIDTH: usize = 80;

/// Statistics report ready to print
#[derive(Debug, Clone)]
pub struct PopulationReport {
    summary: PopulationSummary,
    trophic: Vec<TrophicTotals>,
}

impl PopulationReport {
    /// Build the report for every species column of `table`
    ///
    /// # Errors
    ///
    /// [`StatisticsError::EmptyTable`] if the table has no rows.
    pub fn from_table(table: &PopulationTable) -> Result<Self, StatisticsError> {
        Ok(Self {
            summary: PopulationSummary::from_table(table)?,
            trophic: Vec::new(),
        })
    }

    /// Builder pattern: append first/last totals per trophic level
    pub fn with_trophic_totals(mut self, table: &PopulationTable, groups: &SpeciesGroups) -> Self {
        self.trophic = trophic_totals(table, groups);
        self
    }

    pub fn summary(&self) -> &PopulationSummary {
        &self.summary
    }

    pub fn trophic(&self) -> &[TrophicTotals] {
        &self.trophic
    }

    /// Write the report to standard output
    pub fn print(&self) {
        println!("{}", self);
    }
}

impl fmt::Display for PopulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(REPORT_WIDTH);

        writeln!(f)?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "ECOSYSTEM STATISTICS SUMMARY")?;
        writeln!(f, "{}", rule)?;
        writeln!(f)?;

        writeln!(
            f,
            "{:<20} {:<10} {:<10} {:<10} {:<10} {:<10}",
            "Species", "Initial", "Final", "Mean", "Max", "Min"
        )?;
        writeln!(f, "{}", "-".repeat(REPORT_WIDTH))?;

        for s in &self.summary.species {
            writeln!(
                f,
                "{:<20} {:<10} {:<10} {:<10.1} {:<10} {:<10}",
                s.name, s.initial, s.final_value, s.mean, s.max, s.min
            )?;
        }

        writeln!(f)?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "Total timesteps: {}", self.summary.timesteps)?;
        writeln!(f, "Initial total population: {}", self.summary.initial_total)?;
        writeln!(f, "Final total population: {}", self.summary.final_total)?;

        if !self.trophic.is_empty() {
            writeln!(f)?;
            writeln!(f, "Trophic level totals:")?;
            for t in &self.trophic {
                writeln!(
                    f,
                    "  {:<12} {:>2} species   initial {:<10} final {}",
                    t.level.to_string(),
                    t.species_count,
                    t.initial,
                    t.final_value
                )?;
            }
        }

        write!(f, "{}", rule)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
