//! Fixture files for integration tests

use std::fs;
use std::path::{Path, PathBuf};

/// Five timesteps of three grouped species and one unknown species
pub const MIXED_SPECIES_CSV: &str = "\
TimeStep,Deer,Wildflowers,Fox,UnknownCritter
0,30,200,4,7
1,32,190,4,8
2,35,170,5,6
3,33,160,6,5
4,29,175,6,5
";

/// Write `content` as `name` inside `dir`, returning the full path
pub fn write_csv(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("failed to write fixture CSV");
    path
}

/// Write [`MIXED_SPECIES_CSV`] as `ecosystem_data.csv` inside `dir`
pub fn mixed_species_csv(dir: &Path) -> PathBuf {
    write_csv(dir, "ecosystem_data.csv", MIXED_SPECIES_CSV)
}

/// Sorted names of the PNG files in `dir`
pub fn png_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("failed to read directory")
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".png"))
        .collect();
    names.sort();
    names
}
