//! Enumeration types used throughout the simulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Elemental type of units and enemies. Drives damage multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Normal,
    Fire,
    Water,
    Grass,
    Electric,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dark,
    Steel,
    Fairy,
}

impl Element {
    pub fn as_str(&self) -> &'static str {
        match self {
            Element::Normal => "normal",
            Element::Fire => "fire",
            Element::Water => "water",
            Element::Grass => "grass",
            Element::Electric => "electric",
            Element::Ice => "ice",
            Element::Fighting => "fighting",
            Element::Poison => "poison",
            Element::Ground => "ground",
            Element::Flying => "flying",
            Element::Psychic => "psychic",
            Element::Bug => "bug",
            Element::Rock => "rock",
            Element::Ghost => "ghost",
            Element::Dark => "dark",
            Element::Steel => "steel",
            Element::Fairy => "fairy",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Movement/targeting state of a field unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitState {
    /// Just placed, not yet updated by a tick.
    #[default]
    Idle,
    /// Moving toward the enemy base line.
    Advancing,
    /// Holding position and attacking an enemy in range.
    Engaged,
    /// Reached the enemy base line; takes periodic damage from then on.
    Entrenched,
}

/// Session lifecycle phase. Both game-over variants are terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Active,
    /// Player health reached zero.
    Defeat,
    /// Wave counter passed the victory threshold.
    Victory,
}

impl GamePhase {
    pub fn is_over(&self) -> bool {
        !matches!(self, GamePhase::Active)
    }

    pub fn is_victory(&self) -> bool {
        matches!(self, GamePhase::Victory)
    }
}
