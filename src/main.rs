//! Ecosystem data visualization
//!
//! Reads `ecosystem_data.csv` from the working directory, prints population
//! statistics and writes two timestamped chart images next to it.
//!
//! Exits with status 1 when the input file does not exist.

use std::error::Error;
use std::path::Path;
use std::process;

use ecosystem_viz::prelude::*;
use tracing_subscriber::filter::LevelFilter;

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    println!("Ecosystem Data Visualization Tool");
    println!("{}", "=".repeat(50));

    // ====== Load ======

    let table = match load_population_table(DEFAULT_INPUT_FILE) {
        Ok(table) => table,
        Err(LoadError::NotFound(path)) => {
            eprintln!("Error: {} not found", path.display());
            process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };

    // ====== Report ======

    let groups = SpeciesGroups::default();

    PopulationReport::from_table(&table)?
        .with_trophic_totals(&table, &groups)
        .print();

    // ====== Plot ======

    let artifacts = ChartArtifacts::next_available(Path::new("."))?;

    println!("Generating visualizations...");

    plot_all_populations(&table, &artifacts.population_dynamics, None)?;
    println!("Saved: {}", file_label(&artifacts.population_dynamics));

    let routing = plot_trophic_levels(&table, &groups, &artifacts.trophic_levels, None)?;
    println!("Saved: {}", file_label(&artifacts.trophic_levels));

    if !routing.dropped.is_empty() {
        println!(
            "Note: {} species not shown in the trophic chart: {}",
            routing.dropped.len(),
            routing.dropped.join(", ")
        );
    }

    println!("\nVisualization complete!");
    println!("Check the generated PNG files for plots.");

    Ok(())
}

/// Log records go to stderr so they never interleave with the report on stdout
fn init_logging() {
    // The default `tracing-log` feature forwards records from the `log` facade.
    let _ = tracing_subscriber::fmt()
        .with_max_level(LevelFilter::INFO)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// File name without the `./` prefix of the working directory
fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
