use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Rarity {
    Mythic,
    Rare,
    Uncommon,
    Common,
    /// Rarity distinctions are disabled for this pool.
    Ignored,
    /// Any label outside the known set, kept verbatim for display.
    Unrecognized(String),
}

impl Rarity {
    pub fn from_label(label: &str) -> Self {
        match label {
            "M" => Self::Mythic,
            "R" => Self::Rare,
            "U" => Self::Uncommon,
            "C" => Self::Common,
            "I" => Self::Ignored,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Mythic => "M",
            Self::Rare => "R",
            Self::Uncommon => "U",
            Self::Common => "C",
            Self::Ignored => "I",
            Self::Unrecognized(label) => label.as_str(),
        }
    }

    /// The tier this rarity sorts into, if any.
    pub fn tier(&self) -> Option<PoolTier> {
        match self {
            Self::Mythic => Some(PoolTier::Mythic),
            Self::Rare => Some(PoolTier::Rare),
            Self::Uncommon => Some(PoolTier::Uncommon),
            Self::Common => Some(PoolTier::Common),
            Self::Ignored | Self::Unrecognized(_) => None,
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One of the card sequences a booster can draw from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PoolTier {
    All,
    Mythic,
    Rare,
    Uncommon,
    Common,
    Staple,
}

impl PoolTier {
    pub const RARITY_ORDER: [PoolTier; 4] = [
        PoolTier::Mythic,
        PoolTier::Rare,
        PoolTier::Uncommon,
        PoolTier::Common,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Mythic => "mythic",
            Self::Rare => "rare",
            Self::Uncommon => "uncommon",
            Self::Common => "common",
            Self::Staple => "staple",
        }
    }
}

impl fmt::Display for PoolTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub name: String,
    pub rarity: Rarity,
}

impl Card {
    pub fn new(name: impl Into<String>, rarity: Rarity) -> Self {
        Self {
            name: name.into(),
            rarity,
        }
    }
}

/// A raw `(name, rarity)` row as read from tabular input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardRow {
    pub name: String,
    pub rarity: String,
}

impl CardRow {
    pub fn new(name: impl Into<String>, rarity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rarity: rarity.into(),
        }
    }
}

pub type Booster = Vec<Card>;
