use draftpack_core::{
    compose_commander, compose_singleton, compose_standard, BoosterConfig, BoosterError,
    BoosterPools, BoosterRun, Card, CardPool, CardRow, PoolTier, Rarity, RngState, StaplePool,
};
use std::collections::HashSet;

fn tier_rows(prefix: &str, label: &str, count: usize) -> Vec<CardRow> {
    (0..count)
        .map(|idx| CardRow::new(format!("{prefix} {idx}"), label))
        .collect()
}

fn card_pool(mythic: usize, rare: usize, uncommon: usize, common: usize) -> CardPool {
    let mut rows = tier_rows("Mythic", "M", mythic);
    rows.extend(tier_rows("Rare", "R", rare));
    rows.extend(tier_rows("Uncommon", "U", uncommon));
    rows.extend(tier_rows("Common", "C", common));
    CardPool::from_rows(rows, false)
}

fn flat_pool(count: usize) -> CardPool {
    CardPool::from_rows(tier_rows("Card", "C", count), true)
}

fn staple_pool(count: usize) -> StaplePool {
    StaplePool::from_rows(tier_rows("Staple", "U", count))
}

fn names(booster: &[Card]) -> HashSet<&str> {
    booster.iter().map(|card| card.name.as_str()).collect()
}

#[test]
fn standard_booster_matches_tier_counts_without_duplicates() {
    let config = BoosterConfig::default();
    let pool = card_pool(5, 20, 30, 60);
    let mut rng = RngState::from_seed(7);
    for _ in 0..50 {
        let booster = compose_standard(&config, &pool, &mut rng).expect("compose");
        let has_mythic = booster.iter().any(|card| card.rarity == Rarity::Mythic);
        assert_eq!(booster.len(), config.standard_booster_size(has_mythic));
        assert_eq!(booster.len(), 14);
        assert_eq!(names(&booster).len(), booster.len());
        let uncommons = booster
            .iter()
            .filter(|card| card.rarity == Rarity::Uncommon)
            .count();
        let commons = booster
            .iter()
            .filter(|card| card.rarity == Rarity::Common)
            .count();
        assert_eq!(uncommons, 3);
        assert_eq!(commons, 10);
    }
}

#[test]
fn standard_booster_leaves_pool_untouched() {
    let config = BoosterConfig::default();
    let pool = card_pool(2, 4, 6, 12);
    let before = pool.clone();
    let mut rng = RngState::from_seed(3);
    for _ in 0..10 {
        compose_standard(&config, &pool, &mut rng).expect("compose");
    }
    assert_eq!(pool.all, before.all);
    assert_eq!(pool.common, before.common);
}

#[test]
fn standard_boosters_may_repeat_cards_across_boosters() {
    let config = BoosterConfig {
        mythic_odds: 0.0,
        ..BoosterConfig::default()
    };
    let pool = card_pool(0, 1, 3, 10);
    let mut rng = RngState::from_seed(11);
    let first = compose_standard(&config, &pool, &mut rng).expect("compose");
    let second = compose_standard(&config, &pool, &mut rng).expect("compose");
    assert_eq!(names(&first), names(&second));
}

#[test]
fn mythic_odds_extremes_pick_the_top_slot() {
    let pool = card_pool(3, 3, 3, 10);
    let mut rng = RngState::from_seed(5);

    let never = BoosterConfig {
        mythic_odds: 0.0,
        ..BoosterConfig::default()
    };
    let always = BoosterConfig {
        mythic_odds: 1.0,
        ..BoosterConfig::default()
    };
    for _ in 0..100 {
        let booster = compose_standard(&never, &pool, &mut rng).expect("compose");
        assert_eq!(booster[0].rarity, Rarity::Rare);
        let booster = compose_standard(&always, &pool, &mut rng).expect("compose");
        assert_eq!(booster[0].rarity, Rarity::Mythic);
    }
}

#[test]
fn mythic_substitution_rate_converges_to_odds() {
    let config = BoosterConfig {
        mythic_odds: 0.125,
        ..BoosterConfig::default()
    };
    let pool = card_pool(4, 8, 3, 10);
    let mut rng = RngState::from_seed(2024);
    let trials = 8_000;
    let mut with_mythic = 0;
    for _ in 0..trials {
        let booster = compose_standard(&config, &pool, &mut rng).expect("compose");
        if booster.iter().any(|card| card.rarity == Rarity::Mythic) {
            with_mythic += 1;
        }
    }
    let rate = with_mythic as f64 / trials as f64;
    assert!((rate - 0.125).abs() < 0.02, "mythic rate {rate}");
}

#[test]
fn standard_booster_size_follows_the_top_slot() {
    let pool = card_pool(4, 4, 3, 10);
    let mut rng = RngState::from_seed(12);
    let two_mythics = BoosterConfig {
        mythics_per_booster: 2,
        ..BoosterConfig::default()
    };
    let with_mythic = BoosterConfig {
        mythic_odds: 1.0,
        ..two_mythics.clone()
    };
    let without_mythic = BoosterConfig {
        mythic_odds: 0.0,
        ..two_mythics
    };

    let booster = compose_standard(&with_mythic, &pool, &mut rng).expect("compose");
    assert_eq!(booster.len(), 15);
    assert_eq!(booster.len(), with_mythic.expected_booster_size(true));
    assert!(booster.iter().all(|card| card.rarity != Rarity::Rare));

    let booster = compose_standard(&without_mythic, &pool, &mut rng).expect("compose");
    assert_eq!(booster.len(), 14);
    assert_eq!(booster.len(), without_mythic.expected_booster_size(false));
    assert!(booster.iter().all(|card| card.rarity != Rarity::Mythic));
}

#[test]
fn standard_booster_ignoring_rarity_samples_all_cards() {
    let config = BoosterConfig {
        ignore_rarities: true,
        ..BoosterConfig::default()
    };
    let pool = flat_pool(30);
    let mut rng = RngState::from_seed(9);
    let booster = compose_standard(&config, &pool, &mut rng).expect("compose");
    assert_eq!(booster.len(), 15);
    assert_eq!(names(&booster).len(), 15);
    assert!(booster.iter().all(|card| card.rarity == Rarity::Ignored));
}

#[test]
fn standard_booster_reports_short_tier() {
    let config = BoosterConfig {
        mythic_odds: 0.0,
        ..BoosterConfig::default()
    };
    let pool = card_pool(1, 0, 3, 10);
    let mut rng = RngState::from_seed(1);
    let err = compose_standard(&config, &pool, &mut rng).expect_err("rare tier is empty");
    assert_eq!(
        err,
        BoosterError::NotEnoughCards {
            pool: PoolTier::Rare,
            requested: 1,
            available: 0,
        }
    );
}

#[test]
fn singleton_run_never_repeats_a_card() {
    let config = BoosterConfig {
        num_boosters: 6,
        cards_per_booster: 15,
        ignore_rarities: true,
        is_singleton: true,
        ..BoosterConfig::default()
    };
    let pools = BoosterPools::new(flat_pool(100), StaplePool::default());
    let mut run = BoosterRun::new(config, pools, RngState::from_seed(42));
    let boosters = run.generate().expect("generate");

    assert_eq!(boosters.len(), 6);
    assert!(boosters.iter().all(|booster| booster.len() == 15));
    let seen: HashSet<&str> = boosters.iter().flat_map(|booster| names(booster)).collect();
    assert_eq!(seen.len(), 6 * 15);
    assert_eq!(run.pools.main.all.len(), 100 - 6 * 15);
}

#[test]
fn singleton_booster_draws_tiers_in_order() {
    let config = BoosterConfig {
        is_singleton: true,
        ..BoosterConfig::default()
    };
    let mut pools = BoosterPools::new(card_pool(2, 2, 6, 20), StaplePool::default());
    let mut rng = RngState::from_seed(8);

    let first = compose_singleton(&config, &mut pools, None, &mut rng).expect("compose");
    let second = compose_singleton(&config, &mut pools, None, &mut rng).expect("compose");

    let expected: Vec<Rarity> = std::iter::once(Rarity::Mythic)
        .chain(std::iter::once(Rarity::Rare))
        .chain(std::iter::repeat(Rarity::Uncommon).take(3))
        .chain(std::iter::repeat(Rarity::Common).take(10))
        .collect();
    let rarities: Vec<Rarity> = first.iter().map(|card| card.rarity.clone()).collect();
    assert_eq!(rarities, expected);
    assert!(names(&first).is_disjoint(&names(&second)));
    for tier in PoolTier::RARITY_ORDER {
        assert_eq!(pools.available(tier), 0, "{tier} should be drained");
    }
}

#[test]
fn singleton_reports_exhausted_tier() {
    let config = BoosterConfig {
        is_singleton: true,
        ..BoosterConfig::default()
    };
    let mut pools = BoosterPools::new(card_pool(1, 1, 3, 9), StaplePool::default());
    let mut rng = RngState::from_seed(4);
    let err = compose_singleton(&config, &mut pools, None, &mut rng).expect_err("commons short");
    assert_eq!(
        err,
        BoosterError::PoolExhausted {
            pool: PoolTier::Common
        }
    );
}

#[test]
fn commander_boosters_end_with_unique_staples() {
    let config = BoosterConfig {
        num_boosters: 12,
        cards_per_booster: 20,
        staple_fraction: 0.25,
        ignore_rarities: true,
        is_singleton: true,
        is_commander: true,
        ..BoosterConfig::default()
    };
    let pools = BoosterPools::new(flat_pool(240), staple_pool(60));
    let staple_names: HashSet<String> = pools
        .staples
        .cards
        .iter()
        .map(|card| card.name.clone())
        .collect();
    let mut run = BoosterRun::new(config, pools, RngState::from_seed(99));
    let boosters = run.generate().expect("generate");

    let num_staples = 5;
    let mut drawn_staples = HashSet::new();
    for booster in &boosters {
        assert_eq!(booster.len(), 20);
        let (main, staples) = booster.split_at(20 - num_staples);
        assert!(main.iter().all(|card| !staple_names.contains(&card.name)));
        for card in staples {
            assert!(staple_names.contains(&card.name));
            assert!(drawn_staples.insert(card.name.clone()), "staple repeated");
        }
    }
    assert_eq!(drawn_staples.len(), 12 * num_staples);
    assert!(run.pools.staples.is_empty());
}

#[test]
fn commander_without_singleton_yields_staples_only() {
    let config = BoosterConfig {
        cards_per_booster: 20,
        staple_fraction: 0.15,
        ignore_rarities: true,
        is_commander: true,
        ..BoosterConfig::default()
    };
    let mut pools = BoosterPools::new(flat_pool(50), staple_pool(10));
    let mut rng = RngState::from_seed(6);
    let booster = compose_commander(&config, &mut pools, &mut rng).expect("compose");
    assert_eq!(booster.len(), 3);
    assert!(booster.iter().all(|card| card.name.starts_with("Staple")));
    assert_eq!(pools.main.len(), 50);
    assert_eq!(pools.staples.len(), 7);
}

#[test]
fn commander_staple_share_above_one_fills_with_staples() {
    let config = BoosterConfig {
        cards_per_booster: 20,
        staple_fraction: 1.5,
        ignore_rarities: true,
        is_singleton: true,
        is_commander: true,
        ..BoosterConfig::default()
    };
    let mut pools = BoosterPools::new(flat_pool(50), staple_pool(30));
    let mut rng = RngState::from_seed(21);
    let booster = compose_commander(&config, &mut pools, &mut rng).expect("compose");
    assert_eq!(booster.len(), 30);
    assert_eq!(booster.len(), config.expected_booster_size(false));
    assert!(booster.iter().all(|card| card.name.starts_with("Staple")));
    assert_eq!(pools.main.len(), 50);
    assert!(pools.staples.is_empty());
}

#[test]
fn compose_skips_validation() {
    let config = BoosterConfig {
        num_boosters: 2,
        cards_per_booster: 10,
        ignore_rarities: true,
        is_singleton: true,
        ..BoosterConfig::default()
    };
    let pools = BoosterPools::new(flat_pool(15), StaplePool::default());
    let mut run = BoosterRun::new(config, pools, RngState::from_seed(30));
    assert!(run.validate().is_err());
    assert_eq!(
        run.compose().expect_err("second booster runs dry"),
        BoosterError::PoolExhausted {
            pool: PoolTier::All
        }
    );
    assert!(run.pools.main.all.is_empty());
}

#[test]
fn same_seed_reproduces_the_run() {
    let config = BoosterConfig::default();
    let generate = |seed| {
        let pools = BoosterPools::new(card_pool(6, 12, 30, 80), StaplePool::default());
        BoosterRun::new(config.clone(), pools, RngState::from_seed(seed))
            .generate()
            .expect("generate")
    };
    assert_eq!(generate(17), generate(17));
    assert_ne!(generate(17), generate(18));
}

#[test]
fn zero_boosters_is_an_empty_run() {
    let config = BoosterConfig {
        num_boosters: 0,
        is_singleton: true,
        ..BoosterConfig::default()
    };
    let pools = BoosterPools::new(CardPool::default(), StaplePool::default());
    let mut run = BoosterRun::new(config, pools, RngState::from_seed(1));
    assert!(run.generate().expect("generate").is_empty());
}
