//! Rolling Horizon Evolutionary Algorithm
//!
//! Online planning for turn-based, simulatable environments: every turn a
//! batch of mutated action sequences is scored by simulation and the first
//! action of the best one is committed.

pub mod config;
pub mod engines;
pub mod environment;
pub mod error;
pub mod games;
pub mod types;

pub use engines::planning::{RollingHorizonEngine, Solution};
pub use environment::Environment;
pub use error::{Result, RheaError};
pub use types::{RunSummary, Score, TurnReport};
