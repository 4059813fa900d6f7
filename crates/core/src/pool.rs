use crate::{Card, CardRow, PoolTier, Rarity};
use std::collections::HashSet;
use tracing::debug;

/// Deduplicated card catalog, partitioned by rarity.
///
/// Every tier card is also in `all` when the pool is loaded. Singleton draws
/// with rarity enabled remove from the tiers only, so `all` is not kept in
/// step afterwards.
#[derive(Debug, Default, Clone)]
pub struct CardPool {
    pub all: Vec<Card>,
    pub mythic: Vec<Card>,
    pub rare: Vec<Card>,
    pub uncommon: Vec<Card>,
    pub common: Vec<Card>,
}

impl CardPool {
    pub fn from_rows<I>(rows: I, ignore_rarities: bool) -> Self
    where
        I: IntoIterator<Item = CardRow>,
    {
        let mut pool = Self::default();
        let mut seen = HashSet::new();
        for row in rows {
            if !seen.insert(row.name.clone()) {
                continue;
            }
            let rarity = if ignore_rarities {
                Rarity::Ignored
            } else {
                Rarity::from_label(&row.rarity)
            };
            let card = Card::new(row.name, rarity);
            match card.rarity.tier() {
                Some(tier) => {
                    if let Some(cards) = pool.tier_mut(tier) {
                        cards.push(card.clone());
                    }
                }
                None if !ignore_rarities => {
                    debug!(card = %card.name, label = %card.rarity, "unrecognized rarity, card kept out of tiers");
                }
                None => {}
            }
            pool.all.push(card);
        }
        pool
    }

    /// `None` for `PoolTier::Staple`, which lives in `StaplePool`.
    pub fn tier(&self, tier: PoolTier) -> Option<&[Card]> {
        match tier {
            PoolTier::All => Some(self.all.as_slice()),
            PoolTier::Mythic => Some(self.mythic.as_slice()),
            PoolTier::Rare => Some(self.rare.as_slice()),
            PoolTier::Uncommon => Some(self.uncommon.as_slice()),
            PoolTier::Common => Some(self.common.as_slice()),
            PoolTier::Staple => None,
        }
    }

    pub fn tier_mut(&mut self, tier: PoolTier) -> Option<&mut Vec<Card>> {
        match tier {
            PoolTier::All => Some(&mut self.all),
            PoolTier::Mythic => Some(&mut self.mythic),
            PoolTier::Rare => Some(&mut self.rare),
            PoolTier::Uncommon => Some(&mut self.uncommon),
            PoolTier::Common => Some(&mut self.common),
            PoolTier::Staple => None,
        }
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}

/// Staple cards for commander runs. Duplicate names are kept.
#[derive(Debug, Default, Clone)]
pub struct StaplePool {
    pub cards: Vec<Card>,
}

impl StaplePool {
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = CardRow>,
    {
        let cards = rows
            .into_iter()
            .map(|row| {
                let rarity = Rarity::from_label(&row.rarity);
                Card::new(row.name, rarity)
            })
            .collect();
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// All mutable pool state for one run.
#[derive(Debug, Default, Clone)]
pub struct BoosterPools {
    pub main: CardPool,
    pub staples: StaplePool,
}

impl BoosterPools {
    pub fn new(main: CardPool, staples: StaplePool) -> Self {
        Self { main, staples }
    }

    pub fn available(&self, tier: PoolTier) -> usize {
        self.cards(tier).len()
    }

    pub fn cards(&self, tier: PoolTier) -> &[Card] {
        match tier {
            PoolTier::All => self.main.all.as_slice(),
            PoolTier::Mythic => self.main.mythic.as_slice(),
            PoolTier::Rare => self.main.rare.as_slice(),
            PoolTier::Uncommon => self.main.uncommon.as_slice(),
            PoolTier::Common => self.main.common.as_slice(),
            PoolTier::Staple => self.staples.cards.as_slice(),
        }
    }

    pub(crate) fn cards_mut(&mut self, tier: PoolTier) -> &mut Vec<Card> {
        match tier {
            PoolTier::All => &mut self.main.all,
            PoolTier::Mythic => &mut self.main.mythic,
            PoolTier::Rare => &mut self.main.rare,
            PoolTier::Uncommon => &mut self.main.uncommon,
            PoolTier::Common => &mut self.main.common,
            PoolTier::Staple => &mut self.staples.cards,
        }
    }
}
