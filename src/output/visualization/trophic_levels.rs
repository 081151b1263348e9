//! Trophic-level breakdown chart
//!
//! Three vertically stacked panels sharing one image:
//!
//! 1. Producers (Plants)
//! 2. Primary Consumers (Herbivores)
//! 3. Predators (Carnivores & Omnivores)
//!
//! Panel membership comes from a [`SpeciesGroups`] mapping. Species with no
//! trophic level are left out of this chart; they are returned in
//! [`TrophicRouting::dropped`] and logged as a warning.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;
use plotters::style::FontStyle;

use super::config::{PlotConfig, NO_TITLE};
use super::{is_svg, population_range, time_range};
use crate::analysis::{SpeciesGroups, TrophicLevel, TrophicRouting};
use crate::data::PopulationTable;

/// Plot the table's species split into trophic-level panels
///
/// # Arguments
///
/// * `table`      : Loaded population table
/// * `groups`     : Species-to-level mapping (see [`SpeciesGroups::default`])
/// * `output_path`: Output file path (`.svg` → vector, otherwise bitmap)
/// * `config`     : Optional plot configuration; `None` uses
///                   [`PlotConfig::trophic_levels`]
///
/// # Returns
///
/// The routing that was drawn: species per panel and species left out.
///
/// # Errors
///
/// Returns `Err` if the table has no rows or the backend fails.
///
/// # Example
///
/// ```rust,ignore
/// let groups = SpeciesGroups::default();
/// let routing = plot_trophic_levels(&table, &groups, Path::new("trophic.png"), None)?;
/// for name in &routing.dropped {
///     println!("not charted: {}", name);
/// }
/// ```
pub fn plot_trophic_levels(
    table: &PopulationTable,
    groups: &SpeciesGroups,
    output_path: &Path,
    config: Option<&PlotConfig>,
) -> Result<TrophicRouting, Box<dyn Error>> {
    if table.is_empty() {
        return Err("Empty data: population table has no timesteps".into());
    }

    let default_config = PlotConfig::trophic_levels(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let routing = groups.route(table);

    for level in TrophicLevel::ALL {
        log::debug!("{}: {:?}", level, routing.species(level));
    }
    if !routing.dropped.is_empty() {
        log::warn!(
            "{} species without a trophic level omitted from {}: {}",
            routing.dropped.len(),
            output_path.display(),
            routing.dropped.join(", ")
        );
    }

    if is_svg(output_path) {
        let backend = SVGBackend::new(output_path, (config.width, config.height));
        draw_trophic_levels(backend, table, &routing, config)?;
    } else {
        let backend = BitMapBackend::new(output_path, (config.width, config.height));
        draw_trophic_levels(backend, table, &routing, config)?;
    }

    log::info!(
        "Rendered '{}' to {} ({} species in {} panels)",
        config.title,
        output_path.display(),
        routing.routed_count(),
        TrophicLevel::ALL.len()
    );

    Ok(routing)
}

// =================================================================================================
// Private Plot Implementations
// =================================================================================================

/// Render the three panels with the given drawing backend
///
/// Every panel gets its own y range, legend and grid; only the bottom panel
/// carries the x-axis label.
fn draw_trophic_levels<DB: DrawingBackend>(
    backend: DB,
    table: &PopulationTable,
    routing: &TrophicRouting,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let panels = root.split_evenly((TrophicLevel::ALL.len(), 1));
    let time = table.time_axis();
    let integer_label = |v: &f64| format!("{:.0}", v);
    let grid = config.grid_color();
    let last_panel = TrophicLevel::ALL.len() - 1;

    for (p, (panel, level)) in panels.iter().zip(TrophicLevel::ALL).enumerate() {
        let is_bottom = p == last_panel;

        // (name, column index) of every species drawn in this panel
        let members: Vec<(&str, usize)> = routing
            .species(level)
            .iter()
            .filter_map(|name| table.species_index(name).map(|j| (name.as_str(), j)))
            .collect();
        let indices: Vec<usize> = members.iter().map(|(_, j)| *j).collect();

        let mut chart = ChartBuilder::on(panel)
            .caption(level.title(), ("sans-serif", 24).into_font().style(FontStyle::Bold))
            .margin(10)
            .x_label_area_size(if is_bottom { 45 } else { 30 })
            .y_label_area_size(70)
            .build_cartesian_2d(
                time_range(&time),
                population_range(table.max_count_of(&indices)),
            )?;

        {
            let mut mesh = chart.configure_mesh();
            mesh.y_desc(config.ylabel.as_str())
                .x_label_formatter(&integer_label)
                .y_label_formatter(&integer_label);

            if is_bottom {
                mesh.x_desc(config.xlabel.as_str());
            }

            if config.show_grid {
                mesh.bold_line_style(grid).light_line_style(grid.mix(0.3));
            } else {
                mesh.disable_mesh();
            }
            mesh.draw()?;
        }

        for (k, (name, j)) in members.iter().enumerate() {
            let color = config.get_species_color(k);
            let line_width = config.line_width;
            let values = table.series(*j);

            chart
                .draw_series(LineSeries::new(
                    time.iter().zip(values.iter()).map(|(t, c)| (*t, *c as f64)),
                    ShapeStyle::from(&color).stroke_width(line_width),
                ))?
                .label(*name)
                .legend(move |(x, y)| {
                    PathElement::new(
                        vec![(x, y), (x + 20, y)],
                        ShapeStyle::from(&color).stroke_width(line_width),
                    )
                });
        }

        if !members.is_empty() {
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperLeft)
                .background_style(&config.background.mix(0.8))
                .border_style(&BLACK)
                .draw()?;
        }
    }

    root.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
