//! All-species population chart
//!
//! One line per species column against the time column, on a single set of
//! axes. The legend lives in a strip to the right of the plot so that it
//! never covers a curve, whatever the number of species.
//!
//! ```text
//! ┌──────────────────────────────────────┬──────────────┐
//! │   Ecosystem Population Dynamics      │              │
//! │  ▲                                   │  ── Deer     │
//! │  │  ╱╲    ╱╲                         │  ── Fox      │
//! │  │ ╱  ╲__╱  ╲___                     │  ── Aspen    │
//! │  └──────────────────▶ Time Step      │              │
//! └──────────────────────────────────────┴──────────────┘
//! ```

use std::error::Error;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontStyle;

use super::config::{PlotConfig, NO_TITLE};
use super::{is_svg, population_range, time_range};
use crate::data::PopulationTable;

/// Plot every species of `table` on one chart
///
/// # Arguments
///
/// * `table`      : Loaded population table
/// * `output_path`: Output file path (`.svg` → vector, otherwise bitmap)
/// * `config`     : Optional plot configuration; `None` uses
///                   [`PlotConfig::population_dynamics`]
///
/// # Returns
///
/// The species names drawn, one per series, in column order.
///
/// # Errors
///
/// Returns `Err` if the table has no rows or the backend cannot write to
/// `output_path`.
///
/// # Example
///
/// ```rust,ignore
/// let drawn = plot_all_populations(&table, Path::new("population_dynamics.png"), None)?;
/// assert_eq!(drawn.len(), table.species_count());
/// ```
pub fn plot_all_populations(
    table: &PopulationTable,
    output_path: &Path,
    config: Option<&PlotConfig>,
) -> Result<Vec<String>, Box<dyn Error>> {
    if table.is_empty() {
        return Err("Empty data: population table has no timesteps".into());
    }

    let default_config = PlotConfig::population_dynamics(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let time = table.time_axis();
    let series: Vec<(&str, Vec<f64>)> = table
        .species_names()
        .iter()
        .enumerate()
        .map(|(j, name)| {
            let values = table.series(j).into_iter().map(|c| c as f64).collect();
            (name.as_str(), values)
        })
        .collect();

    let all_indices: Vec<usize> = (0..table.species_count()).collect();
    let max_count = table.max_count_of(&all_indices);

    if is_svg(output_path) {
        let backend = SVGBackend::new(output_path, (config.width, config.height));
        draw_all_populations(backend, &time, &series, max_count, config)?;
    } else {
        let backend = BitMapBackend::new(output_path, (config.width, config.height));
        draw_all_populations(backend, &time, &series, max_count, config)?;
    }

    log::info!(
        "Rendered {} population series to {}",
        series.len(),
        output_path.display()
    );

    Ok(series.iter().map(|(name, _)| name.to_string()).collect())
}

// =================================================================================================
// Private Plot Implementations
// =================================================================================================

/// Render the overlay chart with the given drawing backend
fn draw_all_populations<DB: DrawingBackend>(
    backend: DB,
    time: &[f64],
    series: &[(&str, Vec<f64>)],
    max_count: i64,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let plot_width = config.width.saturating_sub(config.legend_width).max(1) as i32;
    let (plot_area, legend_area) = root.split_horizontally(plot_width);

    let mut chart = ChartBuilder::on(&plot_area)
        .caption(&config.title, ("sans-serif", 32).into_font().style(FontStyle::Bold))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(time_range(time), population_range(max_count))?;

    let integer_label = |v: &f64| format!("{:.0}", v);
    let grid = config.grid_color();

    {
        let mut mesh = chart.configure_mesh();
        mesh.x_desc(config.xlabel.as_str())
            .y_desc(config.ylabel.as_str())
            .x_label_formatter(&integer_label)
            .y_label_formatter(&integer_label);

        if config.show_grid {
            mesh.bold_line_style(grid).light_line_style(grid.mix(0.3));
        } else {
            mesh.disable_mesh();
        }
        mesh.draw()?;
    }

    for (k, (_, values)) in series.iter().enumerate() {
        let color = config.get_species_color(k);
        chart.draw_series(LineSeries::new(
            time.iter().zip(values.iter()).map(|(t, c)| (*t, *c)),
            ShapeStyle::from(&color).stroke_width(config.line_width),
        ))?;
    }

    let labels: Vec<&str> = series.iter().map(|(name, _)| *name).collect();
    draw_outside_legend(&legend_area, &labels, config)?;

    root.present()?;
    Ok(())
}

/// Draw one sample line and label per series in the strip right of the plot
fn draw_outside_legend<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    labels: &[&str],
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    const TOP: i32 = 60;
    const ROW_HEIGHT: i32 = 24;

    let font = ("sans-serif", 16).into_font();

    for (k, label) in labels.iter().enumerate() {
        let color = config.get_species_color(k);
        let y = TOP + k as i32 * ROW_HEIGHT;

        area.draw(&PathElement::new(
            vec![(10, y), (40, y)],
            ShapeStyle::from(&color).stroke_width(config.line_width),
        ))?;
        area.draw(&Text::new(label.to_string(), (48, y - 8), font.clone()))?;
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
