//! Player resources and progression.
//!
//! Stored directly on `SimulationEngine`, NOT as an ECS entity.

use pokedefense_core::constants::*;
use pokedefense_core::state::PlayerView;

/// Level reached by a level-up, with the resulting token count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    pub level: u32,
    pub reward_tokens: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    pub health: u32,
    pub level: u32,
    pub experience: u32,
    pub experience_to_next: u32,
    pub reward_tokens: u32,
    pub score: u32,
    pub currency: u32,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            health: STARTING_HEALTH,
            level: STARTING_LEVEL,
            experience: 0,
            experience_to_next: STARTING_EXP_THRESHOLD,
            reward_tokens: STARTING_REWARD_TOKENS,
            score: 0,
            currency: 0,
        }
    }
}

impl PlayerState {
    /// Apply base-line damage. Health saturates at zero.
    pub fn take_breach(&mut self, damage: u32) {
        self.health = self.health.saturating_sub(damage);
    }

    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }

    /// Spend one reward token. Returns false when none are left.
    pub fn spend_token(&mut self) -> bool {
        if self.reward_tokens == 0 {
            return false;
        }
        self.reward_tokens -= 1;
        true
    }

    /// Score, experience and currency for one defeated enemy.
    pub fn award_kill(&mut self) -> Option<LevelUp> {
        self.score += SCORE_PER_KILL;
        self.currency += CURRENCY_PER_KILL;
        self.gain_experience(EXP_PER_KILL)
    }

    /// One-time bonus for a unit reaching the enemy base line.
    pub fn award_entrenchment(&mut self) {
        self.score += ENTRENCH_SCORE_BONUS;
        self.currency += ENTRENCH_CURRENCY_BONUS;
    }

    /// Experience resets to zero on level-up; the threshold grows by 20%,
    /// rounded down.
    fn gain_experience(&mut self, amount: u32) -> Option<LevelUp> {
        self.experience += amount;
        if self.experience < self.experience_to_next {
            return None;
        }

        self.level += 1;
        self.reward_tokens += LEVEL_UP_REWARD_TOKENS;
        self.experience = 0;
        self.experience_to_next =
            self.experience_to_next * EXP_THRESHOLD_GROWTH_NUM / EXP_THRESHOLD_GROWTH_DEN;

        Some(LevelUp {
            level: self.level,
            reward_tokens: self.reward_tokens,
        })
    }

    pub fn view(&self) -> PlayerView {
        PlayerView {
            health: self.health,
            level: self.level,
            experience: self.experience,
            experience_to_next: self.experience_to_next,
            reward_tokens: self.reward_tokens,
            score: self.score,
            currency: self.currency,
        }
    }
}
