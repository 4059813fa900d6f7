mod args;
mod logging;
mod output;

use args::CommandLine;
use draftpack_core::{BoosterConfig, BoosterPools, BoosterRun, RngState, StaplePool};
use draftpack_data::{load_booster_config, load_card_pool, load_staple_pool};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let cli = CommandLine::parse_args();
    logging::init_logging(cli.verbose, cli.quiet);

    let base = match &cli.config {
        Some(path) => load_booster_config(path)?,
        None => BoosterConfig::default(),
    };
    let config = cli.apply(base);

    let main_pool = load_card_pool(&cli.cards, config.ignore_rarities)?;
    let staples = match cli.staples_path(&config) {
        Some(path) => load_staple_pool(&path)?,
        None => StaplePool::default(),
    };

    let rng = cli
        .seed
        .map(RngState::from_seed)
        .unwrap_or_else(RngState::from_entropy);
    let mut run = BoosterRun::new(config, BoosterPools::new(main_pool, staples), rng);
    run.validate()?;

    if cli.print_pool {
        print!("{}", output::format_pool_summary(&run.pools.main));
    }

    let boosters = run.compose()?;

    if !cli.no_print_boosters {
        print!("{}", output::format_boosters(&boosters));
    }
    if cli.print_list {
        println!();
        print!("{}", output::format_print_list(&boosters));
    }
    if !cli.no_output_file {
        output::write_print_list(&cli.output, &boosters)?;
        info!(path = %cli.output.display(), boosters = boosters.len(), "wrote booster list");
    }
    Ok(())
}
