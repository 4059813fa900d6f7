use clap::{ArgAction, Parser};
use draftpack_core::BoosterConfig;
use std::path::PathBuf;

pub const DEFAULT_STAPLES_PATH: &str = "staples.csv";

#[derive(Parser, Debug)]
#[command(name = "draftpack")]
#[command(about = "Generate randomized draft boosters from a card list.")]
pub struct CommandLine {
    /// Card list CSV with `name,rarity` rows
    #[arg(long, default_value = "cards.csv")]
    pub cards: PathBuf,
    /// Staple card CSV, read for commander boosters
    #[arg(long)]
    pub staples: Option<PathBuf>,
    /// JSON file with booster settings
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long = "boosters")]
    pub num_boosters: Option<usize>,
    #[arg(long)]
    pub mythics: Option<usize>,
    #[arg(long)]
    pub rares: Option<usize>,
    #[arg(long)]
    pub uncommons: Option<usize>,
    #[arg(long)]
    pub commons: Option<usize>,
    /// Chance for the rare slot to become a mythic slot
    #[arg(long)]
    pub mythic_odds: Option<f64>,
    #[arg(long)]
    pub cards_per_booster: Option<usize>,
    /// Share of each commander booster drawn from the staples
    #[arg(long)]
    pub staple_fraction: Option<f64>,
    /// Let cards of any rarity fill any slot
    #[arg(long)]
    pub ignore_rarities: bool,
    /// Place each card in at most one booster
    #[arg(long)]
    pub singleton: bool,
    /// Add staples to every booster
    #[arg(long)]
    pub commander: bool,

    /// Print the loaded pool by rarity before generating
    #[arg(long)]
    pub print_pool: bool,
    #[arg(long)]
    pub no_print_boosters: bool,
    /// Print the `1 <name>` list to stdout
    #[arg(long)]
    pub print_list: bool,
    #[arg(long, default_value = "boosters.txt")]
    pub output: PathBuf,
    #[arg(long)]
    pub no_output_file: bool,

    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    #[arg(short, long)]
    pub quiet: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Layers flags over `base`. Toggles can only switch a mode on.
    pub fn apply(&self, mut base: BoosterConfig) -> BoosterConfig {
        if let Some(value) = self.num_boosters {
            base.num_boosters = value;
        }
        if let Some(value) = self.mythics {
            base.mythics_per_booster = value;
        }
        if let Some(value) = self.rares {
            base.rares_per_booster = value;
        }
        if let Some(value) = self.uncommons {
            base.uncommons_per_booster = value;
        }
        if let Some(value) = self.commons {
            base.commons_per_booster = value;
        }
        if let Some(value) = self.mythic_odds {
            base.mythic_odds = value;
        }
        if let Some(value) = self.cards_per_booster {
            base.cards_per_booster = value;
        }
        if let Some(value) = self.staple_fraction {
            base.staple_fraction = value;
        }
        base.ignore_rarities |= self.ignore_rarities;
        base.is_singleton |= self.singleton;
        base.is_commander |= self.commander;
        base
    }

    /// Staples are read in commander runs, or whenever a path was given.
    pub fn staples_path(&self, config: &BoosterConfig) -> Option<PathBuf> {
        match &self.staples {
            Some(path) => Some(path.clone()),
            None if config.is_commander => Some(PathBuf::from(DEFAULT_STAPLES_PATH)),
            None => None,
        }
    }
}
