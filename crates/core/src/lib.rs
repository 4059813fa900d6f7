//! Booster composition. Keep this crate free of IO and platform concerns.

pub mod booster;
pub mod cards;
pub mod config;
pub mod pool;
pub mod rng;
pub mod run;
pub mod validate;

pub use booster::*;
pub use cards::*;
pub use config::*;
pub use pool::*;
pub use rng::*;
pub use run::*;
pub use validate::*;
