//! Simulation configuration.

use crate::core::constants::DEFAULT_MAX_ROUNDS;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of battles to fight
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Rounds per battle before it counts as a timeout
    pub max_rounds: u32,

    /// Log verbosity (0 = silent, 1 = summary, 2 = one line per battle)
    pub verbosity: u8,

    /// Save the report as JSON next to the working directory
    pub write_json: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            max_rounds: DEFAULT_MAX_ROUNDS,
            verbosity: 1,
            write_json: false,
        }
    }
}

impl SimConfig {
    /// Quick config for a fast balance check
    pub fn quick() -> Self {
        Self {
            num_runs: 100,
            ..Default::default()
        }
    }
}
