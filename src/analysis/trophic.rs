//! Trophic-level grouping of species
//!
//! Species are assigned to one of three ecological roles purely for chart
//! layout and group totals. The assignment is configuration, not something
//! derived from the data: [`SpeciesGroups::default`] holds the species of the
//! forest ecosystem simulation, and callers may build their own mapping.
//!
//! A species present in the table but unknown to the mapping is dropped from
//! grouped output. [`SpeciesGroups::route`] reports those names in
//! [`TrophicRouting::dropped`] so callers can notice them.

use std::collections::HashMap;
use std::fmt;

use crate::data::PopulationTable;

// =================================================================================================
// Trophic Levels
// =================================================================================================

/// Ecological role used to group species
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TrophicLevel {
    Producer,
    Herbivore,
    Predator,
}

impl TrophicLevel {
    /// All levels, in panel order (top to bottom)
    pub const ALL: [TrophicLevel; 3] = [
        TrophicLevel::Producer,
        TrophicLevel::Herbivore,
        TrophicLevel::Predator,
    ];

    /// Panel title for the trophic-levels chart
    pub fn title(&self) -> &'static str {
        match self {
            TrophicLevel::Producer => "Producers (Plants)",
            TrophicLevel::Herbivore => "Primary Consumers (Herbivores)",
            TrophicLevel::Predator => "Predators (Carnivores & Omnivores)",
        }
    }

    fn index(&self) -> usize {
        match self {
            TrophicLevel::Producer => 0,
            TrophicLevel::Herbivore => 1,
            TrophicLevel::Predator => 2,
        }
    }
}

impl fmt::Display for TrophicLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TrophicLevel::Producer => "Producers",
            TrophicLevel::Herbivore => "Herbivores",
            TrophicLevel::Predator => "Predators",
        };
        write!(f, "{}", name)
    }
}

// =================================================================================================
// Species Groups
// =================================================================================================

/// Mapping from species name to trophic level
///
/// Within a level, species keep the order in which they were added; this is
/// the order in which they are drawn and listed in legends.
///
/// # Example
///
/// ```rust
/// use ecosystem_viz::analysis::{SpeciesGroups, TrophicLevel};
///
/// let groups = SpeciesGroups::new()
///     .with_species("Grass", TrophicLevel::Producer)
///     .with_species("Rabbit", TrophicLevel::Herbivore)
///     .with_species("Hawk", TrophicLevel::Predator);
///
/// assert_eq!(groups.level_of("Rabbit"), Some(TrophicLevel::Herbivore));
/// assert_eq!(groups.level_of("Deer"), None);
/// ```
#[derive(Clone, Debug)]
pub struct SpeciesGroups {
    levels: HashMap<String, TrophicLevel>,
    order: Vec<String>,
}

impl Default for SpeciesGroups {
    fn default() -> Self {
        Self::forest_ecosystem()
    }
}

impl SpeciesGroups {
    /// Empty mapping: every species is dropped from grouped output
    pub fn new() -> Self {
        Self {
            levels: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// The fixed grouping of the forest ecosystem simulation
    ///
    /// - Producers: Wildflowers, Berries, Aspen, Spruce
    /// - Herbivores: Deer, Bunny, FieldMouse, GroundSquirrel, Chipmunk
    /// - Predators: Fox, Coyote, BlackBear
    pub fn forest_ecosystem() -> Self {
        let producers = ["Wildflowers", "Berries", "Aspen", "Spruce"];
        let herbivores = ["Deer", "Bunny", "FieldMouse", "GroundSquirrel", "Chipmunk"];
        let predators = ["Fox", "Coyote", "BlackBear"];

        let mut groups = Self::new();
        for name in producers {
            groups.insert(name, TrophicLevel::Producer);
        }
        for name in herbivores {
            groups.insert(name, TrophicLevel::Herbivore);
        }
        for name in predators {
            groups.insert(name, TrophicLevel::Predator);
        }
        groups
    }

    /// Builder pattern: assign a species to a level
    pub fn with_species(mut self, name: &str, level: TrophicLevel) -> Self {
        self.insert(name, level);
        self
    }

    /// Assign a species to a level; an existing assignment is replaced
    pub fn insert(&mut self, name: &str, level: TrophicLevel) {
        if self.levels.insert(name.to_string(), level).is_none() {
            self.order.push(name.to_string());
        }
    }

    pub fn level_of(&self, name: &str) -> Option<TrophicLevel> {
        self.levels.get(name).copied()
    }

    /// Species assigned to `level`, in insertion order
    pub fn species_in(&self, level: TrophicLevel) -> Vec<&str> {
        self.order
            .iter()
            .filter(|name| self.levels.get(*name) == Some(&level))
            .map(|name| name.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Route the table's species into panels
    ///
    /// A species lands in a level only if it is both in the table and in that
    /// level's group. Within a level the group's order is kept. Table species
    /// with no level are collected, in table order, into `dropped`.
    pub fn route(&self, table: &PopulationTable) -> TrophicRouting {
        let mut panels: [Vec<String>; 3] = Default::default();

        for level in TrophicLevel::ALL {
            panels[level.index()] = self
                .species_in(level)
                .into_iter()
                .filter(|name| table.contains_species(name))
                .map(str::to_string)
                .collect();
        }

        let dropped = table
            .species_names()
            .iter()
            .filter(|name| self.level_of(name).is_none())
            .cloned()
            .collect();

        TrophicRouting { panels, dropped }
    }
}

// =================================================================================================
// Routing Result
// =================================================================================================

/// Species of a table split by trophic level
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrophicRouting {
    panels: [Vec<String>; 3],

    /// Table species that belong to no level, in table order
    pub dropped: Vec<String>,
}

impl TrophicRouting {
    /// Species drawn in the panel of `level`
    pub fn species(&self, level: TrophicLevel) -> &[String] {
        &self.panels[level.index()]
    }

    /// Total number of routed (drawn) species
    pub fn routed_count(&self) -> usize {
        self.panels.iter().map(Vec::len).sum()
    }

    /// Level a species was routed to, if any
    pub fn level_of(&self, name: &str) -> Option<TrophicLevel> {
        TrophicLevel::ALL
            .into_iter()
            .find(|level| self.species(*level).iter().any(|s| s == name))
    }
}

// =================================================================================================
// Group Totals
// =================================================================================================

/// Population of one trophic level at the first and last timestep
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrophicTotals {
    pub level: TrophicLevel,
    pub species_count: usize,
    pub initial: i64,
    pub final_value: i64,
}

/// Sum each level's species over every timestep
///
/// Returns one series per level in [`TrophicLevel::ALL`] order. Levels
/// without species in the table give a series of zeros.
pub fn aggregate_by_level(
    table: &PopulationTable,
    groups: &SpeciesGroups,
) -> Vec<(TrophicLevel, Vec<i64>)> {
    let routing = groups.route(table);

    TrophicLevel::ALL
        .into_iter()
        .map(|level| {
            let mut totals = vec![0_i64; table.row_count()];
            for name in routing.species(level) {
                if let Some(series) = table.series_by_name(name) {
                    for (total, count) in totals.iter_mut().zip(series) {
                        *total = total.saturating_add(count);
                    }
                }
            }
            (level, totals)
        })
        .collect()
}

/// First/last-row totals per level; empty when the table has no rows
pub fn trophic_totals(table: &PopulationTable, groups: &SpeciesGroups) -> Vec<TrophicTotals> {
    if table.is_empty() {
        return Vec::new();
    }

    let routing = groups.route(table);

    aggregate_by_level(table, groups)
        .into_iter()
        .map(|(level, series)| TrophicTotals {
            level,
            species_count: routing.species(level).len(),
            initial: series.first().copied().unwrap_or(0),
            final_value: series.last().copied().unwrap_or(0),
        })
        .collect()
}

// =================================================================================================
// Tests
// =================================================================================================
