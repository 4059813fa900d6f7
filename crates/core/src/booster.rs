use crate::{Booster, BoosterConfig, BoosterPools, Card, CardPool, PoolTier, RngState};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoosterError {
    #[error("cannot draw {requested} distinct {pool} cards, only {available} available")]
    NotEnoughCards {
        pool: PoolTier,
        requested: usize,
        available: usize,
    },
    #[error("{pool} pool is exhausted")]
    PoolExhausted { pool: PoolTier },
}

/// Rarity-weighted booster. Cards are distinct within the booster, the pool
/// is left untouched.
pub fn compose_standard(
    config: &BoosterConfig,
    pool: &CardPool,
    rng: &mut RngState,
) -> Result<Booster, BoosterError> {
    if config.ignore_rarities {
        let mut booster = Vec::with_capacity(config.tier_total());
        sample_into(&mut booster, &pool.all, PoolTier::All, config.tier_total(), rng)?;
        return Ok(booster);
    }

    let has_mythic = rng.roll_unit() < config.mythic_odds;
    let top = if has_mythic {
        PoolTier::Mythic
    } else {
        PoolTier::Rare
    };
    let mut booster = Vec::with_capacity(config.standard_booster_size(has_mythic));
    for tier in [top, PoolTier::Uncommon, PoolTier::Common] {
        sample_into(
            &mut booster,
            pool.tier(tier).unwrap_or_default(),
            tier,
            config.tier_count(tier),
            rng,
        )?;
    }
    Ok(booster)
}

/// Booster whose cards are removed from the pools for the rest of the run.
///
/// `count` overrides `cards_per_booster` when rarity is ignored; the
/// rarity-aware path always uses the per-tier counts.
pub fn compose_singleton(
    config: &BoosterConfig,
    pools: &mut BoosterPools,
    count: Option<usize>,
    rng: &mut RngState,
) -> Result<Booster, BoosterError> {
    if config.ignore_rarities {
        let count = count.unwrap_or(config.cards_per_booster);
        let mut booster = Vec::with_capacity(count);
        take_into(&mut booster, pools, PoolTier::All, count, rng)?;
        return Ok(booster);
    }

    let mut booster = Vec::with_capacity(config.tier_total());
    for tier in PoolTier::RARITY_ORDER {
        take_into(&mut booster, pools, tier, config.tier_count(tier), rng)?;
    }
    Ok(booster)
}

/// Singleton draw from the main pool followed by `num_staples` staples.
///
/// Only the ignore-rarity singleton combination draws from the main pool;
/// every other combination yields a staples-only booster.
pub fn compose_commander(
    config: &BoosterConfig,
    pools: &mut BoosterPools,
    rng: &mut RngState,
) -> Result<Booster, BoosterError> {
    let num_staples = config.num_staples();
    let mut booster = if commander_draws_main_pool(config) {
        compose_singleton(
            config,
            pools,
            Some(config.cards_per_booster.saturating_sub(num_staples)),
            rng,
        )?
    } else {
        Vec::with_capacity(num_staples)
    };
    take_into(&mut booster, pools, PoolTier::Staple, num_staples, rng)?;
    Ok(booster)
}

pub fn commander_draws_main_pool(config: &BoosterConfig) -> bool {
    config.ignore_rarities && config.is_singleton
}

fn sample_into(
    booster: &mut Booster,
    cards: &[Card],
    pool: PoolTier,
    amount: usize,
    rng: &mut RngState,
) -> Result<(), BoosterError> {
    if amount > cards.len() {
        return Err(BoosterError::NotEnoughCards {
            pool,
            requested: amount,
            available: cards.len(),
        });
    }
    booster.extend(
        rng.sample_indices(cards.len(), amount)
            .into_iter()
            .map(|idx| cards[idx].clone()),
    );
    Ok(())
}

fn take_into(
    booster: &mut Booster,
    pools: &mut BoosterPools,
    pool: PoolTier,
    amount: usize,
    rng: &mut RngState,
) -> Result<(), BoosterError> {
    let cards = pools.cards_mut(pool);
    for _ in 0..amount {
        if cards.is_empty() {
            return Err(BoosterError::PoolExhausted { pool });
        }
        let idx = rng.index(cards.len());
        booster.push(cards.swap_remove(idx));
    }
    Ok(())
}
