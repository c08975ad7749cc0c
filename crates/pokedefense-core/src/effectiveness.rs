//! Elemental type effectiveness.
//!
//! The matchup table is built once on first use and never mutated.
//! Pairs missing from the table are neutral.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::enums::Element::{self, *};

pub const SUPER_EFFECTIVE: f64 = 2.0;
pub const RESISTED: f64 = 0.5;
pub const IMMUNE: f64 = 0.0;
pub const NEUTRAL: f64 = 1.0;

/// (attacker, defender, multiplier)
const MATCHUPS: &[(Element, Element, f64)] = &[
    (Fire, Grass, SUPER_EFFECTIVE),
    (Fire, Water, RESISTED),
    (Fire, Ice, SUPER_EFFECTIVE),
    (Fire, Bug, SUPER_EFFECTIVE),
    (Fire, Steel, SUPER_EFFECTIVE),
    (Water, Fire, SUPER_EFFECTIVE),
    (Water, Grass, RESISTED),
    (Water, Ground, SUPER_EFFECTIVE),
    (Water, Rock, SUPER_EFFECTIVE),
    (Grass, Water, SUPER_EFFECTIVE),
    (Grass, Fire, RESISTED),
    (Grass, Ground, SUPER_EFFECTIVE),
    (Grass, Rock, SUPER_EFFECTIVE),
    (Grass, Electric, RESISTED),
    (Electric, Water, SUPER_EFFECTIVE),
    (Electric, Flying, SUPER_EFFECTIVE),
    (Electric, Grass, RESISTED),
    (Electric, Ground, IMMUNE),
    (Flying, Grass, SUPER_EFFECTIVE),
    (Flying, Fighting, SUPER_EFFECTIVE),
    (Flying, Bug, SUPER_EFFECTIVE),
    (Flying, Electric, RESISTED),
    (Flying, Rock, RESISTED),
    (Poison, Grass, SUPER_EFFECTIVE),
    (Poison, Fairy, SUPER_EFFECTIVE),
    (Poison, Poison, RESISTED),
    (Poison, Ground, RESISTED),
    (Poison, Psychic, RESISTED),
    (Psychic, Fighting, SUPER_EFFECTIVE),
    (Psychic, Poison, SUPER_EFFECTIVE),
    (Psychic, Dark, IMMUNE),
    (Psychic, Ghost, RESISTED),
    (Fighting, Normal, SUPER_EFFECTIVE),
    (Fighting, Rock, SUPER_EFFECTIVE),
    (Fighting, Steel, SUPER_EFFECTIVE),
    (Fighting, Flying, RESISTED),
    (Fighting, Psychic, RESISTED),
    (Rock, Fire, SUPER_EFFECTIVE),
    (Rock, Ice, SUPER_EFFECTIVE),
    (Rock, Flying, SUPER_EFFECTIVE),
    (Rock, Bug, SUPER_EFFECTIVE),
    (Rock, Fighting, RESISTED),
    (Rock, Ground, RESISTED),
];

static TABLE: LazyLock<HashMap<(Element, Element), f64>> = LazyLock::new(|| {
    MATCHUPS
        .iter()
        .map(|&(attacker, defender, multiplier)| ((attacker, defender), multiplier))
        .collect()
});

/// Damage multiplier for `attacker` hitting `defender`.
pub fn multiplier(attacker: Element, defender: Element) -> f64 {
    TABLE.get(&(attacker, defender)).copied().unwrap_or(NEUTRAL)
}
