//! Boss, heroes, and the per-variant special powers.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
