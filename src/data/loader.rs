//! CSV loading for population tables
//!
//! The expected file layout is the one written by the ecosystem simulation:
//!
//! ```csv
//! TimeStep,Wildflowers,Deer,Fox
//! 0,120,30,4
//! 1,118,31,4
//! ```
//!
//! The `TimeStep` column may appear anywhere in the header; every other
//! column is a species. Field widths are enforced by the CSV parser, cell
//! values must be integers.

use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};

use super::table::{PopulationTable, TIME_COLUMN};

/// Input file used when no path is given
pub const DEFAULT_INPUT_FILE: &str = "ecosystem_data.csv";

// =================================================================================================
// Errors
// =================================================================================================

/// Failure while loading a population table
#[derive(Debug)]
pub enum LoadError {
    /// The input file does not exist
    NotFound(PathBuf),

    /// The CSV parser rejected the file (I/O, ragged rows, bad UTF-8)
    Csv(csv::Error),

    /// A required column is absent from the header
    MissingColumn { path: PathBuf, column: String },

    /// A cell could not be read as an integer count
    InvalidValue { row: usize, column: String, value: String },

    /// Rows could not be assembled into a table
    Malformed(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::NotFound(path) => write!(f, "{} not found", path.display()),
            LoadError::Csv(err) => write!(f, "CSV parse error: {}", err),
            LoadError::MissingColumn { path, column } => {
                write!(f, "{}: missing column '{}'", path.display(), column)
            }
            LoadError::InvalidValue { row, column, value } => write!(
                f,
                "row {}: column '{}' has non-integer value '{}'",
                row, column, value
            ),
            LoadError::Malformed(msg) => write!(f, "malformed table: {}", msg),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::Csv(err) => Some(err),
            _ => None,
        }
    }
}

impl From<csv::Error> for LoadError {
    fn from(err: csv::Error) -> Self {
        LoadError::Csv(err)
    }
}

// =================================================================================================
// Loading
// =================================================================================================

/// Load a population table from a CSV file and announce its size
///
/// Prints `Loaded <rows> timesteps with <species> species` on success; see
/// [`read_population_table`] for the parsing rules and errors.
///
/// # Example
///
/// ```rust,ignore
/// use ecosystem_viz::data::{load_population_table, DEFAULT_INPUT_FILE};
///
/// let table = load_population_table(DEFAULT_INPUT_FILE)?;
/// ```
pub fn load_population_table(path: impl AsRef<Path>) -> Result<PopulationTable, LoadError> {
    let table = read_population_table(path)?;

    println!(
        "Loaded {} timesteps with {} species",
        table.row_count(),
        table.species_count()
    );

    Ok(table)
}

/// Parse a population table from a CSV file without printing
///
/// # Errors
///
/// - [`LoadError::NotFound`] if `path` does not exist (checked before parsing)
/// - [`LoadError::Csv`] for parser failures
/// - [`LoadError::MissingColumn`] if the header has no `TimeStep` column
/// - [`LoadError::InvalidValue`] for a cell that is not an integer
pub fn read_population_table(path: impl AsRef<Path>) -> Result<PopulationTable, LoadError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    log::debug!("Reading population data from {}", path.display());

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = reader.headers()?.clone();

    let time_index = headers
        .iter()
        .position(|h| h == TIME_COLUMN)
        .ok_or_else(|| LoadError::MissingColumn {
            path: path.to_path_buf(),
            column: TIME_COLUMN.to_string(),
        })?;

    let species: Vec<String> = headers
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != time_index)
        .map(|(_, h)| h.to_string())
        .collect();

    let mut time_steps = Vec::new();
    let mut rows = Vec::new();

    for (row_index, record) in reader.records().enumerate() {
        let record = record?;

        let mut row = Vec::with_capacity(species.len());
        for (col, field) in record.iter().enumerate() {
            let value = parse_count(field).ok_or_else(|| LoadError::InvalidValue {
                row: row_index,
                column: headers.get(col).unwrap_or("?").to_string(),
                value: field.to_string(),
            })?;

            if col == time_index {
                time_steps.push(value);
            } else {
                row.push(value);
            }
        }
        rows.push(row);
    }

    // Field counts are already enforced by the parser.
    let table =
        PopulationTable::from_rows(species, time_steps, rows).map_err(LoadError::Malformed)?;

    log::info!(
        "Loaded {} ({} rows, {} species)",
        path.display(),
        table.row_count(),
        table.species_count()
    );

    Ok(table)
}

/// Parse an integer count; whole-number floats such as `12.0` are accepted
fn parse_count(field: &str) -> Option<i64> {
    if let Ok(v) = field.parse::<i64>() {
        return Some(v);
    }
    match field.parse::<f64>() {
        // `i64::MAX as f64` rounds up to 2^63, which is already out of range
        Ok(v) if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 => {
            Some(v as i64)
        }
        _ => None,
    }
}

// =================================================================================================
// Tests
// =================================================================================================
