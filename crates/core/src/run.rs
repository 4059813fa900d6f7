use crate::{
    compose_commander, compose_singleton, compose_standard, validate_pools, Booster,
    BoosterConfig, BoosterError, BoosterMode, BoosterPools, ConfigError, RngState,
    ValidationError,
};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum RunError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("booster generation failed: {0}")]
    Booster(#[from] BoosterError),
}

/// One generation run. Owns its pools, which singleton and commander modes
/// drain as boosters are composed.
#[derive(Debug)]
pub struct BoosterRun {
    pub config: BoosterConfig,
    pub pools: BoosterPools,
    pub rng: RngState,
}

impl BoosterRun {
    pub fn new(config: BoosterConfig, pools: BoosterPools, rng: RngState) -> Self {
        Self { config, pools, rng }
    }

    pub fn mode(&self) -> BoosterMode {
        self.config.mode()
    }

    pub fn validate(&self) -> Result<(), RunError> {
        self.config.check()?;
        validate_pools(&self.config, &self.pools)?;
        Ok(())
    }

    pub fn next_booster(&mut self) -> Result<Booster, BoosterError> {
        match self.config.mode() {
            BoosterMode::Standard => compose_standard(&self.config, &self.pools.main, &mut self.rng),
            BoosterMode::Singleton => {
                compose_singleton(&self.config, &mut self.pools, None, &mut self.rng)
            }
            BoosterMode::Commander => {
                compose_commander(&self.config, &mut self.pools, &mut self.rng)
            }
        }
    }

    /// Validates, then composes `num_boosters` boosters in order. Nothing is
    /// composed when validation fails.
    pub fn generate(&mut self) -> Result<Vec<Booster>, RunError> {
        self.validate()?;
        Ok(self.compose()?)
    }

    /// Composes `num_boosters` boosters without validating first. Callers that
    /// need to act between validation and composition use this after
    /// `validate`.
    pub fn compose(&mut self) -> Result<Vec<Booster>, BoosterError> {
        let mode = self.mode();
        info!(
            ?mode,
            boosters = self.config.num_boosters,
            seed = self.rng.seed(),
            "generating boosters"
        );
        if mode == BoosterMode::Commander && !crate::commander_draws_main_pool(&self.config) {
            warn!("commander boosters only draw from the main pool with ignore-rarities and singleton set; boosters will hold staples only");
        }
        let mut boosters = Vec::new();
        for index in 0..self.config.num_boosters {
            let booster = self.next_booster()?;
            debug!(booster = index + 1, cards = booster.len(), "composed booster");
            boosters.push(booster);
        }
        Ok(boosters)
    }
}
