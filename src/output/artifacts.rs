//! Output file naming
//!
//! Each run writes two charts whose names carry a unix timestamp:
//!
//! ```text
//! population_dynamics_1760861234.png
//! trophic_levels_1760861234.png
//! ```
//!
//! so image viewers and browsers never show a cached chart from an earlier
//! run, and runs never overwrite each other.

use std::io;
use std::path::{Path, PathBuf};

pub const POPULATION_DYNAMICS_PREFIX: &str = "population_dynamics";
pub const TROPHIC_LEVELS_PREFIX: &str = "trophic_levels";

/// Paths of the two chart images of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartArtifacts {
    pub timestamp: i64,
    pub population_dynamics: PathBuf,
    pub trophic_levels: PathBuf,
}

impl ChartArtifacts {
    /// Chart paths in `directory` for a given timestamp
    pub fn for_timestamp(directory: impl AsRef<Path>, timestamp: i64) -> Self {
        let directory = directory.as_ref();
        Self {
            timestamp,
            population_dynamics: directory
                .join(format!("{}_{}.png", POPULATION_DYNAMICS_PREFIX, timestamp)),
            trophic_levels: directory.join(format!("{}_{}.png", TROPHIC_LEVELS_PREFIX, timestamp)),
        }
    }

    /// Chart paths stamped with the current unix time
    ///
    /// If a chart with that stamp already exists (two runs within the same
    /// second), the stamp is advanced until both names are free.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `directory` does not exist or is not a directory.
    pub fn next_available(directory: impl AsRef<Path>) -> io::Result<Self> {
        let directory = directory.as_ref();
        if !directory.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Output directory {} does not exist", directory.display()),
            ));
        }

        let mut timestamp = chrono::Utc::now().timestamp();
        loop {
            let artifacts = Self::for_timestamp(directory, timestamp);
            if !artifacts.any_exists() {
                return Ok(artifacts);
            }
            log::debug!("Chart files for timestamp {} exist, advancing", timestamp);
            timestamp += 1;
        }
    }

    fn any_exists(&self) -> bool {
        self.population_dynamics.exists() || self.trophic_levels.exists()
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_names_carry_timestamp() {
        let artifacts = ChartArtifacts::for_timestamp("out", 1700000000);
        assert_eq!(
            artifacts.population_dynamics,
            PathBuf::from("out/population_dynamics_1700000000.png")
        );
        assert_eq!(
            artifacts.trophic_levels,
            PathBuf::from("out/trophic_levels_1700000000.png")
        );
    }

    #[test]
    fn test_next_available_uses_current_time() {
        let dir = tempfile::tempdir().unwrap();
        let before = chrono::Utc::now().timestamp();
        let artifacts = ChartArtifacts::next_available(dir.path()).unwrap();
        assert!(artifacts.timestamp >= before);
    }

    #[test]
    fn test_next_available_skips_existing() {
        let dir = tempfile::tempdir().unwrap();
        let first = ChartArtifacts::next_available(dir.path()).unwrap();
        fs::write(&first.trophic_levels, b"taken").unwrap();

        let second = ChartArtifacts::next_available(dir.path()).unwrap();
        assert!(second.timestamp > first.timestamp);
        assert_ne!(second.population_dynamics, first.population_dynamics);
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(ChartArtifacts::next_available(missing).is_err());
    }
}
