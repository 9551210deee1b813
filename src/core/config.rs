//! Game configuration.
//!
//! `GameConfig` holds the per-game knobs a transport may set when it creates
//! a game: roster limits, the attrition threshold that ends a game with no
//! winner, the RNG seed, and how disproofs with a single matching card are
//! handled. Defaults follow the classic rules.

use serde::{Deserialize, Serialize};

use super::error::{ClueError, Result};

/// Fewest players the classic game supports.
pub const MIN_PLAYERS: usize = 3;

/// Most players the classic game supports (one per suspect).
pub const MAX_PLAYERS: usize = 6;

/// Complete game configuration.
///
/// ```
/// use clueless_engine::core::GameConfig;
///
/// let config = GameConfig::new(42)
///     .with_max_players(4)
///     .with_auto_reveal_single_match(true);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.max_players, 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Players required before `start()` succeeds.
    pub min_players: usize,

    /// Registration fails with `GameFull` beyond this many players.
    pub max_players: usize,

    /// The game ends with no winner once fewer players than this remain
    /// uneliminated.
    pub min_active_players: usize,

    /// Seed for the game's deterministic RNG.
    pub seed: u64,

    /// When a polled player holds exactly one of the suggested cards, reveal
    /// it without waiting for their response.
    pub auto_reveal_single_match: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(0)
    }
}

impl GameConfig {
    /// Create a configuration with classic limits and the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            min_players: MIN_PLAYERS,
            max_players: MAX_PLAYERS,
            min_active_players: MIN_PLAYERS,
            seed,
            auto_reveal_single_match: false,
        }
    }

    /// Set the minimum roster size.
    #[must_use]
    pub fn with_min_players(mut self, min: usize) -> Self {
        self.min_players = min;
        self
    }

    /// Set the maximum roster size.
    #[must_use]
    pub fn with_max_players(mut self, max: usize) -> Self {
        self.max_players = max;
        self
    }

    /// Set the attrition threshold.
    #[must_use]
    pub fn with_min_active_players(mut self, min: usize) -> Self {
        self.min_active_players = min;
        self
    }

    /// Enable or disable automatic single-match reveals.
    #[must_use]
    pub fn with_auto_reveal_single_match(mut self, enabled: bool) -> Self {
        self.auto_reveal_single_match = enabled;
        self
    }

    /// Check that the limits describe a playable game.
    pub fn validate(&self) -> Result<()> {
        if self.min_players < MIN_PLAYERS || self.max_players > MAX_PLAYERS {
            return Err(ClueError::InvalidConfig(format!(
                "roster limits must lie within {MIN_PLAYERS}..={MAX_PLAYERS}"
            )));
        }
        if self.min_players > self.max_players {
            return Err(ClueError::InvalidConfig(format!(
                "min_players {} exceeds max_players {}",
                self.min_players, self.max_players
            )));
        }
        if self.min_active_players > self.min_players {
            return Err(ClueError::InvalidConfig(format!(
                "min_active_players {} exceeds min_players {}",
                self.min_active_players, self.min_players
            )));
        }
        Ok(())
    }
}
