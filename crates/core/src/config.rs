use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BoosterMode {
    Standard,
    Singleton,
    Commander,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BoosterConfig {
    pub num_boosters: usize,
    pub mythics_per_booster: usize,
    pub rares_per_booster: usize,
    pub uncommons_per_booster: usize,
    pub commons_per_booster: usize,
    /// Chance for the rare slot to be replaced by the mythic slot.
    pub mythic_odds: f64,
    /// Booster size for singleton and commander runs that ignore rarity.
    pub cards_per_booster: usize,
    /// Share of `cards_per_booster` filled from the staple pool in commander runs.
    pub staple_fraction: f64,
    pub ignore_rarities: bool,
    pub is_singleton: bool,
    pub is_commander: bool,
}

impl Default for BoosterConfig {
    fn default() -> Self {
        Self {
            num_boosters: 10,
            mythics_per_booster: 1,
            rares_per_booster: 1,
            uncommons_per_booster: 3,
            commons_per_booster: 10,
            mythic_odds: 0.125,
            cards_per_booster: 20,
            staple_fraction: 0.15,
            ignore_rarities: false,
            is_singleton: false,
            is_commander: false,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("mythic odds must be within [0, 1], got {0}")]
    InvalidMythicOdds(f64),
    #[error("staple fraction must be within [0, 1], got {0}")]
    InvalidStapleFraction(f64),
}

impl BoosterConfig {
    pub fn mode(&self) -> BoosterMode {
        if self.is_commander {
            BoosterMode::Commander
        } else if self.is_singleton {
            BoosterMode::Singleton
        } else {
            BoosterMode::Standard
        }
    }

    /// Sum of all four tier counts: the ignore-rarity standard draw and the
    /// rarity-aware singleton booster.
    pub fn tier_total(&self) -> usize {
        self.mythics_per_booster
            + self.rares_per_booster
            + self.uncommons_per_booster
            + self.commons_per_booster
    }

    /// Rarity-aware standard booster: the mythic slot replaces the rare slot.
    pub fn standard_booster_size(&self, has_mythic: bool) -> usize {
        let top = if has_mythic {
            self.mythics_per_booster
        } else {
            self.rares_per_booster
        };
        top + self.uncommons_per_booster + self.commons_per_booster
    }

    pub fn num_staples(&self) -> usize {
        (self.cards_per_booster as f64 * self.staple_fraction).floor() as usize
    }

    /// Cards each booster should hold once composed. `has_mythic` only
    /// matters for rarity-aware standard boosters.
    pub fn expected_booster_size(&self, has_mythic: bool) -> usize {
        match self.mode() {
            BoosterMode::Standard if self.ignore_rarities => self.tier_total(),
            BoosterMode::Standard => self.standard_booster_size(has_mythic),
            BoosterMode::Singleton if self.ignore_rarities => self.cards_per_booster,
            BoosterMode::Singleton => self.tier_total(),
            BoosterMode::Commander if self.ignore_rarities && self.is_singleton => self
                .num_staples()
                .max(self.cards_per_booster),
            BoosterMode::Commander => self.num_staples(),
        }
    }

    /// Per-tier draw count for rarity-aware composition.
    pub fn tier_count(&self, tier: crate::PoolTier) -> usize {
        match tier {
            crate::PoolTier::Mythic => self.mythics_per_booster,
            crate::PoolTier::Rare => self.rares_per_booster,
            crate::PoolTier::Uncommon => self.uncommons_per_booster,
            crate::PoolTier::Common => self.commons_per_booster,
            crate::PoolTier::All => self.cards_per_booster,
            crate::PoolTier::Staple => self.num_staples(),
        }
    }

    pub fn check(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.mythic_odds) {
            return Err(ConfigError::InvalidMythicOdds(self.mythic_odds));
        }
        if !(0.0..=1.0).contains(&self.staple_fraction) {
            return Err(ConfigError::InvalidStapleFraction(self.staple_fraction));
        }
        Ok(())
    }
}
