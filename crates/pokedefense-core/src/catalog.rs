//! Immutable unit and enemy catalogs.

use crate::enums::Element;

/// Catalog entry for a unit the player can own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitTemplate {
    pub name: &'static str,
    pub element: Element,
    pub health: u32,
    pub attack: u32,
    /// Catalog speed; scaled by `UNIT_SPEED_SCALE` when advancing.
    pub speed: f64,
}

/// Enemy stat line. Final stats are `base + per_wave * wave`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyTemplate {
    pub name: &'static str,
    pub element: Element,
    pub base_health: u32,
    pub health_per_wave: u32,
    pub base_attack: u32,
    pub attack_per_wave: u32,
    pub base_speed: f64,
    pub speed_per_wave: f64,
}

/// A queued enemy with stats already scaled for its wave.
#[derive(Debug, Clone, PartialEq)]
pub struct EnemySpec {
    pub name: &'static str,
    pub element: Element,
    pub health: u32,
    pub attack: u32,
    /// Units per second toward the player's base line.
    pub speed: f64,
}

impl EnemyTemplate {
    pub fn scaled(&self, wave: u32) -> EnemySpec {
        EnemySpec {
            name: self.name,
            element: self.element,
            health: self.base_health + self.health_per_wave * wave,
            attack: self.base_attack + self.attack_per_wave * wave,
            speed: self.base_speed + self.speed_per_wave * wave as f64,
        }
    }
}

const fn unit(name: &'static str, element: Element, health: u32, attack: u32, speed: f64) -> UnitTemplate {
    UnitTemplate {
        name,
        element,
        health,
        attack,
        speed,
    }
}

/// Units the opening hand is sampled from.
pub const STARTER_CATALOG: [UnitTemplate; 3] = [
    unit("Charmander", Element::Fire, 60, 12, 2.0),
    unit("Squirtle", Element::Water, 70, 10, 1.8),
    unit("Bulbasaur", Element::Grass, 65, 11, 1.6),
];

/// Units drawn by spending a reward token.
pub const REWARD_CATALOG: [UnitTemplate; 7] = [
    unit("Pikachu", Element::Electric, 45, 18, 2.5),
    unit("Jigglypuff", Element::Normal, 85, 9, 1.2),
    unit("Meowth", Element::Normal, 45, 15, 2.2),
    unit("Psyduck", Element::Water, 55, 12, 1.5),
    unit("Growlithe", Element::Fire, 60, 14, 2.0),
    unit("Abra", Element::Psychic, 40, 20, 1.8),
    unit("Machop", Element::Fighting, 70, 16, 1.4),
];

/// Enemy kinds a wave is drawn from.
pub const ENEMY_CATALOG: [EnemyTemplate; 4] = [
    EnemyTemplate {
        name: "Rattata",
        element: Element::Normal,
        base_health: 25,
        health_per_wave: 4,
        base_attack: 8,
        attack_per_wave: 1,
        base_speed: 50.0,
        speed_per_wave: 8.0,
    },
    EnemyTemplate {
        name: "Spearow",
        element: Element::Flying,
        base_health: 20,
        health_per_wave: 3,
        base_attack: 10,
        attack_per_wave: 1,
        base_speed: 60.0,
        speed_per_wave: 10.0,
    },
    EnemyTemplate {
        name: "Zubat",
        element: Element::Poison,
        base_health: 30,
        health_per_wave: 5,
        base_attack: 12,
        attack_per_wave: 1,
        base_speed: 45.0,
        speed_per_wave: 7.0,
    },
    EnemyTemplate {
        name: "Geodude",
        element: Element::Rock,
        base_health: 40,
        health_per_wave: 6,
        base_attack: 15,
        attack_per_wave: 1,
        base_speed: 30.0,
        speed_per_wave: 5.0,
    },
];
