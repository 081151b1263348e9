//! In-memory population table
//!
//! A [`PopulationTable`] holds one row per timestep: the value of the time
//! column plus one integer count per species. Counts are stored in a
//! `DMatrix<i64>` with shape `[n_timesteps × n_species]`, so a species is a
//! matrix column and a timestep is a matrix row.
//!
//! The table is immutable once built; every consumer (report, plots) only
//! borrows it.

use nalgebra::DMatrix;

/// Name of the time index column in the source file
pub const TIME_COLUMN: &str = "TimeStep";

/// Per-timestep species population counts
///
/// # Invariants
///
/// - `species.len() == counts.ncols()`
/// - `time_steps.len() == counts.nrows()`
/// - species order is the header order of the source file, time column removed
#[derive(Clone, Debug, PartialEq)]
pub struct PopulationTable {
    species: Vec<String>,
    time_steps: Vec<i64>,
    counts: DMatrix<i64>,
}

impl PopulationTable {
    /// Build a table from row-major data
    ///
    /// # Arguments
    ///
    /// * `species`   : Species column names, in display order
    /// * `time_steps`: Time column value for each row
    /// * `rows`      : One `Vec<i64>` per row, `species.len()` values each
    ///
    /// # Errors
    ///
    /// Returns `Err` if a row does not have exactly one value per species.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ecosystem_viz::data::PopulationTable;
    ///
    /// let table = PopulationTable::from_rows(
    ///     vec!["Deer".to_string(), "Fox".to_string()],
    ///     vec![0, 1],
    ///     vec![vec![10, 2], vec![12, 3]],
    /// ).unwrap();
    ///
    /// assert_eq!(table.row_count(), 2);
    /// assert_eq!(table.species_count(), 2);
    /// ```
    pub fn from_rows(
        species: Vec<String>,
        time_steps: Vec<i64>,
        rows: Vec<Vec<i64>>,
    ) -> Result<Self, String> {
        if time_steps.len() != rows.len() {
            return Err(format!(
                "Row count mismatch: {} time steps versus {} rows",
                time_steps.len(),
                rows.len()
            ));
        }

        let n_species = species.len();
        let mut flat = Vec::with_capacity(rows.len() * n_species);

        for (i, row) in rows.iter().enumerate() {
            if row.len() != n_species {
                return Err(format!(
                    "Row {} has {} values for {} species",
                    i,
                    row.len(),
                    n_species
                ));
            }
            flat.extend_from_slice(row);
        }

        let counts = DMatrix::from_row_slice(rows.len(), n_species, &flat);

        Ok(Self { species, time_steps, counts })
    }

    /// Number of timesteps (data rows)
    pub fn row_count(&self) -> usize {
        self.counts.nrows()
    }

    /// Number of species columns (time column excluded)
    pub fn species_count(&self) -> usize {
        self.counts.ncols()
    }

    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    /// Species names in column order
    pub fn species_names(&self) -> &[String] {
        &self.species
    }

    /// Values of the time column
    pub fn time_steps(&self) -> &[i64] {
        &self.time_steps
    }

    /// Column index of a species, if present
    pub fn species_index(&self, name: &str) -> Option<usize> {
        self.species.iter().position(|s| s == name)
    }

    pub fn contains_species(&self, name: &str) -> bool {
        self.species_index(name).is_some()
    }

    /// Counts of one species over all timesteps
    pub fn series(&self, species_index: usize) -> Vec<i64> {
        self.counts.column(species_index).iter().copied().collect()
    }

    /// Counts of a species looked up by name
    pub fn series_by_name(&self, name: &str) -> Option<Vec<i64>> {
        self.species_index(name).map(|j| self.series(j))
    }

    /// Count of one species at one timestep
    pub fn value(&self, row: usize, species_index: usize) -> i64 {
        self.counts[(row, species_index)]
    }

    /// Sum of all species at a row; the time column is not part of it
    ///
    /// `None` if the sum does not fit in an `i64`.
    pub fn row_total(&self, row: usize) -> Option<i64> {
        self.counts
            .row(row)
            .iter()
            .try_fold(0_i64, |acc, &c| acc.checked_add(c))
    }

    /// Time column as plotting coordinates
    pub fn time_axis(&self) -> Vec<f64> {
        self.time_steps.iter().map(|&t| t as f64).collect()
    }

    /// Largest count in the given species columns (0 when none)
    pub fn max_count_of(&self, species_indices: &[usize]) -> i64 {
        species_indices
            .iter()
            .filter_map(|&j| self.counts.column(j).iter().copied().max())
            .max()
            .unwrap_or(0)
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> PopulationTable {
        PopulationTable::from_rows(
            vec!["Deer".into(), "Wildflowers".into(), "Fox".into()],
            vec![0, 1, 2],
            vec![vec![10, 100, 2], vec![12, 90, 3], vec![8, 95, 4]],
        )
        .unwrap()
    }

    #[test]
    fn test_dimensions() {
        let table = sample_table();
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.species_count(), 3);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_series_follow_columns() {
        let table = sample_table();
        assert_eq!(table.series(0), vec![10, 12, 8]);
        assert_eq!(table.series_by_name("Fox"), Some(vec![2, 3, 4]));
        assert_eq!(table.series_by_name("Coyote"), None);
    }

    #[test]
    fn test_row_total_excludes_time() {
        let table = sample_table();
        assert_eq!(table.row_total(0), Some(112));
        assert_eq!(table.row_total(2), Some(107));
    }

    #[test]
    fn test_row_total_overflow() {
        let table = PopulationTable::from_rows(
            vec!["Deer".into(), "Fox".into()],
            vec![0],
            vec![vec![i64::MAX, 5]],
        )
        .unwrap();
        assert_eq!(table.row_total(0), None);
    }

    #[test]
    fn test_species_order_preserved() {
        let table = sample_table();
        assert_eq!(table.species_names(), &["Deer", "Wildflowers", "Fox"]);
        assert_eq!(table.species_index("Wildflowers"), Some(1));
    }

    #[test]
    fn test_max_count_of_subset() {
        let table = sample_table();
        assert_eq!(table.max_count_of(&[0, 2]), 12);
        assert_eq!(table.max_count_of(&[]), 0);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let result = PopulationTable::from_rows(
            vec!["Deer".into(), "Fox".into()],
            vec![0, 1],
            vec![vec![1, 2], vec![3]],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_table() {
        let table = PopulationTable::from_rows(vec!["Deer".into()], vec![], vec![]).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.species_count(), 1);
    }
}
