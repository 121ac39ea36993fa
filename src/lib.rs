//! Boss Fight - turn-based battle between one boss and a roster of heroes.
//!
//! This module exposes the battle logic for the binaries, the simulator and tests.

pub mod build_info;
pub mod combat;
pub mod core;
pub mod error;
pub mod narration;
pub mod simulator;

pub use crate::core::*;
pub use error::{BattleError, Result};

use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr so stdout carries only the battle narration.
/// Honors `RUST_LOG`; defaults to `warn`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
