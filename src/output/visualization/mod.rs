//! Chart rendering for population tables
//!
//! This module renders population tables with the `plotters` library.
//!
//! # Organization
//!
//! - **config**: Shared plot configuration (`PlotConfig`)
//! - **populations**: Every species on one set of axes, legend outside the plot
//! - **trophic_levels**: Three stacked panels, one per trophic level
//!
//! # Drawing state
//!
//! Each plotting call creates its backend, drawing area and chart context as
//! local values and drops them before returning. Nothing is shared between
//! calls, so a second chart never contains series of a first one.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use ecosystem_viz::analysis::SpeciesGroups;
//! use ecosystem_viz::output::visualization::{plot_all_populations, plot_trophic_levels};
//!
//! plot_all_populations(&table, Path::new("populations.png"), None)?;
//! let groups = SpeciesGroups::default();
//! let routing = plot_trophic_levels(&table, &groups, Path::new("trophic.png"), None)?;
//! println!("{} species had no trophic level", routing.dropped.len());
//! ```
//!
//! Paths ending in `.svg` use the SVG backend; anything else is a bitmap.

pub mod config;
pub mod populations;
pub mod trophic_levels;

pub use config::{PlotConfig, NO_TITLE};
pub use populations::plot_all_populations;
pub use trophic_levels::plot_trophic_levels;

use std::ops::Range;
use std::path::Path;

/// Whether `path` should be rendered with the SVG backend
pub(crate) fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("svg"))
        .unwrap_or(false)
}

/// X range covering every timestep; widened to one unit for a single row
pub(crate) fn time_range(time: &[f64]) -> Range<f64> {
    let min = time.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = time.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }
    if max > min {
        min..max
    } else {
        min..(min + 1.0)
    }
}

/// Y range from zero to 10% above the largest count
pub(crate) fn population_range(max_count: i64) -> Range<f64> {
    0.0..(max_count as f64 * 1.1).max(1.0)
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_svg() {
        assert!(is_svg(Path::new("chart.svg")));
        assert!(is_svg(Path::new("chart.SVG")));
        assert!(!is_svg(Path::new("chart.png")));
        assert!(!is_svg(Path::new("chart")));
    }

    #[test]
    fn test_time_range() {
        assert_eq!(time_range(&[0.0, 1.0, 5.0]), 0.0..5.0);
        assert_eq!(time_range(&[3.0]), 3.0..4.0);
        assert_eq!(time_range(&[]), 0.0..1.0);
    }

    #[test]
    fn test_population_range_headroom() {
        let range = population_range(100);
        assert!((range.end - 110.0).abs() < 1e-9);
        assert_eq!(population_range(0), 0.0..1.0);
    }
}
