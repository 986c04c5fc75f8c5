//! Categorical filters and the user's current filter selection.
//!
//! Every dimension has an `All` sentinel. `All` is a UI concept only: its
//! query value is the empty string, which the remote API reads as "no
//! filter on this field".

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Shared behaviour of the filter enums.
pub trait FilterOption: Copy + Eq + Sized + 'static {
    /// Dimension this option belongs to.
    const DIMENSION: FilterDimension;

    /// All options in display order, `All` first.
    fn options() -> &'static [Self];

    /// Human-readable label.
    fn label(&self) -> &'static str;

    /// Value sent to the remote API.
    fn query_value(&self) -> &'static str;

    /// Whether this is the `All` sentinel.
    fn is_all(&self) -> bool {
        self.query_value().is_empty()
    }

    /// Parse a value produced by `query_value`. The literal `"All"` is
    /// accepted as well, since that is what a select element reports.
    fn from_query_value(value: &str) -> Result<Self> {
        if value == "All" {
            return Ok(Self::options()[0]);
        }
        Self::options()
            .iter()
            .copied()
            .find(|option| option.query_value() == value)
            .ok_or_else(|| CoreError::unknown_filter_value(Self::DIMENSION, value))
    }
}

/// The three filterable dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterDimension {
    Species,
    Status,
    Gender,
}

impl fmt::Display for FilterDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FilterDimension::Species => "species",
            FilterDimension::Status => "status",
            FilterDimension::Gender => "gender",
        };
        f.write_str(name)
    }
}

/// Species filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    #[default]
    All,
    Humanoid,
    Alien,
    Human,
    Poopybutthole,
    MythologicalCreature,
    Animal,
    Robot,
    Unknown,
}

impl FilterOption for Species {
    const DIMENSION: FilterDimension = FilterDimension::Species;

    fn options() -> &'static [Self] {
        &[
            Species::All,
            Species::Humanoid,
            Species::Alien,
            Species::Human,
            Species::Poopybutthole,
            Species::MythologicalCreature,
            Species::Animal,
            Species::Robot,
            Species::Unknown,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            Species::All => "All",
            Species::Humanoid => "Humanoid",
            Species::Alien => "Alien",
            Species::Human => "Human",
            Species::Poopybutthole => "Poopybutthole",
            Species::MythologicalCreature => "Mythological Creature",
            Species::Animal => "Animal",
            Species::Robot => "Robot",
            Species::Unknown => "Unknown",
        }
    }

    fn query_value(&self) -> &'static str {
        match self {
            Species::All => "",
            Species::Unknown => "unknown",
            other => other.label(),
        }
    }
}

/// Life status filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifeStatus {
    #[default]
    All,
    Alive,
    Dead,
    Unknown,
}

impl FilterOption for LifeStatus {
    const DIMENSION: FilterDimension = FilterDimension::Status;

    fn options() -> &'static [Self] {
        &[
            LifeStatus::All,
            LifeStatus::Alive,
            LifeStatus::Dead,
            LifeStatus::Unknown,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            LifeStatus::All => "All",
            LifeStatus::Alive => "Alive",
            LifeStatus::Dead => "Dead",
            LifeStatus::Unknown => "Unknown",
        }
    }

    fn query_value(&self) -> &'static str {
        match self {
            LifeStatus::All => "",
            LifeStatus::Alive => "Alive",
            LifeStatus::Dead => "Dead",
            LifeStatus::Unknown => "unknown",
        }
    }
}

/// Gender filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    All,
    Female,
    Male,
    Unknown,
}

impl FilterOption for Gender {
    const DIMENSION: FilterDimension = FilterDimension::Gender;

    fn options() -> &'static [Self] {
        &[Gender::All, Gender::Female, Gender::Male, Gender::Unknown]
    }

    fn label(&self) -> &'static str {
        match self {
            Gender::All => "All",
            Gender::Female => "Female",
            Gender::Male => "Male",
            Gender::Unknown => "Unknown",
        }
    }

    fn query_value(&self) -> &'static str {
        match self {
            Gender::All => "",
            Gender::Female => "Female",
            Gender::Male => "Male",
            Gender::Unknown => "unknown",
        }
    }
}

/// A change to exactly one filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterChange {
    Species(Species),
    Status(LifeStatus),
    Gender(Gender),
}

impl FilterChange {
    /// Parse a raw option value for the given dimension.
    pub fn parse(dimension: FilterDimension, value: &str) -> Result<Self> {
        let change = match dimension {
            FilterDimension::Species => Self::Species(Species::from_query_value(value)?),
            FilterDimension::Status => Self::Status(LifeStatus::from_query_value(value)?),
            FilterDimension::Gender => Self::Gender(Gender::from_query_value(value)?),
        };
        Ok(change)
    }

    /// Dimension touched by this change.
    pub fn dimension(&self) -> FilterDimension {
        match self {
            FilterChange::Species(_) => FilterDimension::Species,
            FilterChange::Status(_) => FilterDimension::Status,
            FilterChange::Gender(_) => FilterDimension::Gender,
        }
    }
}

/// Committed name query plus the three categorical filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterSelection {
    /// Committed free-text name query.
    pub name_query: String,

    pub species: Species,

    pub status: LifeStatus,

    pub gender: Gender,
}

impl FilterSelection {
    /// Apply a single-dimension change.
    pub fn apply(&mut self, change: FilterChange) {
        match change {
            FilterChange::Species(species) => self.species = species,
            FilterChange::Status(status) => self.status = status,
            FilterChange::Gender(gender) => self.gender = gender,
        }
    }

    /// Set every categorical dimension back to `All`. The name query stays.
    pub fn reset_categories(&mut self) {
        self.species = Species::All;
        self.status = LifeStatus::All;
        self.gender = Gender::All;
    }

    /// Current query value of one dimension.
    pub fn query_value(&self, dimension: FilterDimension) -> &'static str {
        match dimension {
            FilterDimension::Species => self.species.query_value(),
            FilterDimension::Status => self.status.query_value(),
            FilterDimension::Gender => self.gender.query_value(),
        }
    }
}
