use anyhow::Context;
use draftpack_core::{Booster, Card, CardPool, PoolTier};
use std::fs;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const HEADERS: [&str; 2] = ["Rarity", "Name"];

/// Bordered two-column table with centered cells.
pub fn format_booster_table(booster: &[Card]) -> String {
    let rows: Vec<[&str; 2]> = booster
        .iter()
        .map(|card| [card.rarity.label(), card.name.as_str()])
        .collect();
    let mut widths = HEADERS.map(|header| header.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let border = {
        let mut line = String::from("+");
        for width in widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line
    };

    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');
    out.push_str(&table_row(&HEADERS, &widths));
    out.push_str(&border);
    out.push('\n');
    for row in &rows {
        out.push_str(&table_row(row, &widths));
    }
    out.push_str(&border);
    out.push('\n');
    out
}

fn table_row(cells: &[&str; 2], widths: &[usize; 2]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.iter().zip(widths) {
        let pad = width - cell.width();
        let left = pad / 2;
        let right = pad - left;
        line.push_str(&format!(" {}{}{} |", " ".repeat(left), cell, " ".repeat(right)));
    }
    line.push('\n');
    line
}

pub fn format_boosters(boosters: &[Booster]) -> String {
    let mut out = String::new();
    for (idx, booster) in boosters.iter().enumerate() {
        out.push_str(&format!("\nBooster {}:\n", idx + 1));
        out.push_str(&format_booster_table(booster));
    }
    out
}

/// One `1 <name>` line per card, in booster order.
pub fn format_print_list(boosters: &[Booster]) -> String {
    boosters
        .iter()
        .flatten()
        .map(|card| format!("1 {}\n", card.name))
        .collect()
}

pub fn format_pool_summary(pool: &CardPool) -> String {
    let mut out = String::new();
    for (idx, tier) in PoolTier::RARITY_ORDER.into_iter().enumerate() {
        let cards = pool.tier(tier).unwrap_or_default();
        if idx > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{} Cards: {}\n", title(tier), cards.len()));
        for card in cards {
            out.push_str(&format!("    Name: {}\n", card.name));
        }
    }
    out.push_str(&format!("\nTotal Cards: {}\n", pool.len()));
    out
}

fn title(tier: PoolTier) -> &'static str {
    match tier {
        PoolTier::Mythic => "Mythic",
        PoolTier::Rare => "Rare",
        PoolTier::Uncommon => "Uncommon",
        PoolTier::Common => "Common",
        PoolTier::All => "All",
        PoolTier::Staple => "Staple",
    }
}

pub fn write_print_list(path: &Path, boosters: &[Booster]) -> anyhow::Result<()> {
    fs::write(path, format_print_list(boosters))
        .with_context(|| format!("write {}", path.display()))
}
