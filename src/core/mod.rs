//! Core engine types: player ids, RNG, configuration, errors.
//!
//! These are the leaf building blocks shared by the card, board and game
//! modules.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{GameConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use error::{ClueError, ErrorSeverity, Result};
pub use player::PlayerId;
pub use rng::GameRng;
