//! Plot configuration shared across chart types
//!
//! This module defines the configuration used by both the all-populations
//! chart and the trophic-levels chart.

use plotters::prelude::*;

/// Categorical palette used when no species colours are given
///
/// Ten well-separated hues; species beyond the tenth wrap around.
const DEFAULT_PALETTE: [RGBColor; 10] = [
    RGBColor(31, 119, 180),  // Blue
    RGBColor(255, 127, 14),  // Orange
    RGBColor(44, 160, 44),   // Green
    RGBColor(214, 39, 40),   // Red
    RGBColor(148, 103, 189), // Purple
    RGBColor(140, 86, 75),   // Brown
    RGBColor(227, 119, 194), // Pink
    RGBColor(127, 127, 127), // Grey
    RGBColor(188, 189, 34),  // Olive
    RGBColor(23, 190, 207),  // Cyan
];

/// Configuration for customizing plots
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels
/// - `title`: Chart title
/// - `xlabel`, `ylabel`: Axis labels
/// - `species_colors`: Optional colors, one per series
/// - `background`: Background color
/// - `line_width`: Line thickness in pixels
/// - `show_grid`: Whether to show grid lines
/// - `grid_alpha`: Opacity of the grid lines
/// - `legend_width`: Width reserved right of the plot for an outside legend
///
/// # Example
///
/// ```rust,ignore
/// use ecosystem_viz::output::visualization::PlotConfig;
///
/// let mut config = PlotConfig::population_dynamics("Run 42");
/// config.width = 1920;
/// config.show_grid = false;
/// ```
#[derive(Clone, Debug)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1400)
    pub width: u32,

    /// Image height in pixels (default: 800)
    pub height: u32,

    /// Chart title
    pub title: String,

    /// X-axis label (default: "Time Step")
    pub xlabel: String,

    /// Y-axis label (default: "Population Count")
    pub ylabel: String,

    /// Optional colors, one per series
    ///
    /// If None, uses the default ten-color palette.
    /// If Some and shorter than the number of series, the palette fills the rest.
    pub species_colors: Option<Vec<RGBColor>>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,

    /// Grid line opacity in `[0, 1]` (default: 0.3)
    pub grid_alpha: f64,

    /// Legend area width in pixels, used by the all-populations chart (default: 220)
    pub legend_width: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1400,
            height: 800,
            title: "Population Dynamics".to_string(),
            xlabel: "Time Step".to_string(),
            ylabel: "Population Count".to_string(),
            species_colors: None,
            background: WHITE,
            line_width: 2,
            show_grid: true,
            grid_alpha: 0.3,
            legend_width: 220,
        }
    }
}

/// Helper trait to accept both `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (default title will be used)
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Config for the all-species overlay chart
    ///
    /// Default title: "Ecosystem Population Dynamics (All Species)"
    ///
    /// ```rust,ignore
    /// let config = PlotConfig::population_dynamics(NO_TITLE);
    /// let config = PlotConfig::population_dynamics(format!("Run {}", id));
    /// ```
    pub fn population_dynamics(title: impl IntoOptionalTitle) -> Self {
        Self {
            title: title
                .into_optional_title()
                .unwrap_or_else(|| "Ecosystem Population Dynamics (All Species)".to_string()),
            ..Self::default()
        }
    }

    /// Config for the three-panel trophic-levels chart
    ///
    /// Panel titles come from the trophic levels; `title` names the chart
    /// in the render log line. Each panel's y axis is labelled "Population".
    pub fn trophic_levels(title: impl IntoOptionalTitle) -> Self {
        Self {
            width: 1200,
            height: 1000,
            title: title
                .into_optional_title()
                .unwrap_or_else(|| "Trophic Levels".to_string()),
            ylabel: "Population".to_string(),
            ..Self::default()
        }
    }

    /// Config with explicit series colors
    pub fn with_species_colors(mut self, colors: Vec<RGBColor>) -> Self {
        self.species_colors = Some(colors);
        self
    }

    /// Get color for series at index i
    ///
    /// Uses custom colors if provided, otherwise falls back to default palette
    pub(crate) fn get_species_color(&self, species_index: usize) -> RGBColor {
        if let Some(ref colors) = self.species_colors {
            if species_index < colors.len() {
                return colors[species_index];
            }
        }

        DEFAULT_PALETTE[species_index % DEFAULT_PALETTE.len()]
    }

    /// Grid line color: black at `grid_alpha` opacity
    pub(crate) fn grid_color(&self) -> RGBAColor {
        BLACK.mix(self.grid_alpha.clamp(0.0, 1.0))
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_config_default() {
        let config = PlotConfig::default();
        assert_eq!(config.width, 1400);
        assert_eq!(config.height, 800);
        assert!(config.show_grid);
        assert_eq!(config.xlabel, "Time Step");
    }

    #[test]
    fn test_population_dynamics_default_title() {
        let config = PlotConfig::population_dynamics(NO_TITLE);
        assert_eq!(config.title, "Ecosystem Population Dynamics (All Species)");
        assert_eq!(config.ylabel, "Population Count");
    }

    #[test]
    fn test_population_dynamics_with_string() {
        let config = PlotConfig::population_dynamics(format!("Run {}", 7));
        assert_eq!(config.title, "Run 7");
    }

    #[test]
    fn test_trophic_levels_config() {
        let config = PlotConfig::trophic_levels(NO_TITLE);
        assert_eq!((config.width, config.height), (1200, 1000));
        assert_eq!(config.ylabel, "Population");
        assert_eq!(config.xlabel, "Time Step");
        assert_eq!(config.title, "Trophic Levels");

        let named = PlotConfig::trophic_levels("Run 7 trophic levels");
        assert_eq!(named.title, "Run 7 trophic levels");
    }

    #[test]
    fn test_get_species_color_default_palette() {
        let config = PlotConfig::default();
        assert_eq!(config.get_species_color(0), RGBColor(31, 119, 180));
        assert_eq!(config.get_species_color(10), config.get_species_color(0)); // Wraparound
    }

    #[test]
    fn test_get_species_color_custom_then_palette() {
        let config = PlotConfig::default().with_species_colors(vec![RED, GREEN]);
        assert_eq!(config.get_species_color(0), RED);
        assert_eq!(config.get_species_color(1), GREEN);
        assert_eq!(config.get_species_color(2), DEFAULT_PALETTE[2]);
    }
}
