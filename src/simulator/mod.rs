//! Battle simulator for Monte Carlo analysis.
//!
//! Fights thousands of silent battles with the default roster to analyze:
//! - How often each side wins
//! - How long battles last
//! - Which heroes tend to survive
//!
//! The simulator drives `Battle` (src/core/battle.rs) round by round, so
//! results match what the game binary narrates.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
