use crate::{BoosterConfig, BoosterPools, PoolTier};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "not enough unique {pool} cards: need at least {} more ({required} required, {available} available)",
        .required - .available
    )]
    InsufficientCards {
        pool: PoolTier,
        required: usize,
        available: usize,
    },
}

impl ValidationError {
    pub fn deficit(&self) -> usize {
        match self {
            Self::InsufficientCards {
                required,
                available,
                ..
            } => required - available,
        }
    }
}

/// Minimum pool sizes a run needs, in the order they are checked.
///
/// Only singleton runs have requirements; standard runs sample with
/// replacement across boosters. Products saturate, so an oversized run
/// shows up as a deficit.
pub fn requirements(config: &BoosterConfig) -> Vec<(PoolTier, usize)> {
    if !config.is_singleton {
        return Vec::new();
    }
    let boosters = config.num_boosters;
    let mut required = Vec::new();
    if config.ignore_rarities {
        if config.is_commander {
            required.push((PoolTier::Staple, boosters.saturating_mul(config.num_staples())));
        }
        required.push((PoolTier::All, boosters.saturating_mul(config.cards_per_booster)));
    } else {
        for tier in PoolTier::RARITY_ORDER {
            required.push((tier, boosters.saturating_mul(config.tier_count(tier))));
        }
    }
    required
}

/// Reports the first pool that cannot cover the run.
pub fn validate_pools(config: &BoosterConfig, pools: &BoosterPools) -> Result<(), ValidationError> {
    for (pool, required) in requirements(config) {
        let available = pools.available(pool);
        if required > available {
            return Err(ValidationError::InsufficientCards {
                pool,
                required,
                available,
            });
        }
    }
    Ok(())
}
