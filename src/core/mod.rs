//! Battle state, the round engine, and the driver that runs it to the end.

pub mod battle;
pub mod constants;
pub mod game_logic;
pub mod game_loop;
pub mod game_state;
pub mod roster;

pub use battle::*;
pub use game_logic::*;
pub use game_loop::*;
pub use game_state::*;
