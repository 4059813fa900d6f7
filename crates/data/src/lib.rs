//! Loading card pools and run configuration from disk.

pub mod load;

pub use load::*;
