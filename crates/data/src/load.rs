use anyhow::Context;
use draftpack_core::{BoosterConfig, CardPool, CardRow, StaplePool};
use serde::de::DeserializeOwned;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use tracing::{info, trace};

/// Reads `(name, rarity)` rows. The first row is a header; rows with fewer
/// than two fields are skipped and extra columns are ignored.
pub fn read_card_rows<R: Read>(reader: R) -> anyhow::Result<Vec<CardRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record.context("parse csv row")?;
        if record.len() < 2 {
            trace!(line = record.position().map(|pos| pos.line()), "skipping short row");
            continue;
        }
        rows.push(CardRow::new(&record[0], &record[1]));
    }
    Ok(rows)
}

pub fn load_card_rows(path: &Path) -> anyhow::Result<Vec<CardRow>> {
    let file = File::open(path).with_context(|| format!("read {}", path.display()))?;
    read_card_rows(file).with_context(|| format!("parse {}", path.display()))
}

pub fn load_card_pool(path: &Path, ignore_rarities: bool) -> anyhow::Result<CardPool> {
    let rows = load_card_rows(path)?;
    let read = rows.len();
    let pool = CardPool::from_rows(rows, ignore_rarities);
    info!(
        path = %path.display(),
        rows = read,
        unique = pool.len(),
        mythic = pool.mythic.len(),
        rare = pool.rare.len(),
        uncommon = pool.uncommon.len(),
        common = pool.common.len(),
        "loaded card pool"
    );
    Ok(pool)
}

pub fn load_staple_pool(path: &Path) -> anyhow::Result<StaplePool> {
    let staples = StaplePool::from_rows(load_card_rows(path)?);
    info!(path = %path.display(), staples = staples.len(), "loaded staple pool");
    Ok(staples)
}

pub fn load_booster_config(path: &Path) -> anyhow::Result<BoosterConfig> {
    load_json(path)
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}
