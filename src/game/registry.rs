//! Registry of live games.
//!
//! The transport owns one `GameRegistry` and routes each request to a game
//! through it. Player names map to at most one game at a time.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::processor::GameProcessor;
use crate::core::{ClueError, GameConfig, Result};

/// Identifier for a game in a registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameId(pub u64);

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Game {}", self.0)
    }
}

/// Live games and the players sitting in them.
///
/// ```
/// use clueless_engine::core::GameConfig;
/// use clueless_engine::game::GameRegistry;
///
/// let mut registry = GameRegistry::new();
/// let id = registry.create(GameConfig::new(3)).unwrap();
/// registry.join("alice", id).unwrap();
///
/// assert_eq!(registry.game_of("alice"), Some(id));
/// assert!(registry.join("alice", id).is_err());
/// ```
#[derive(Debug, Default)]
pub struct GameRegistry {
    games: FxHashMap<GameId, GameProcessor>,
    seats: FxHashMap<String, GameId>,
    next_id: u64,
}

impl GameRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a game and return its id.
    pub fn create(&mut self, config: GameConfig) -> Result<GameId> {
        let game = GameProcessor::new(config)?;
        let id = GameId(self.next_id);
        self.next_id += 1;
        self.games.insert(id, game);
        tracing::info!("created {}", id);
        Ok(id)
    }

    pub fn get(&self, id: GameId) -> Result<&GameProcessor> {
        self.games.get(&id).ok_or(ClueError::UnknownGame(id.0))
    }

    pub fn get_mut(&mut self, id: GameId) -> Result<&mut GameProcessor> {
        self.games.get_mut(&id).ok_or(ClueError::UnknownGame(id.0))
    }

    /// Remove a game, releasing every player mapped to it.
    pub fn remove(&mut self, id: GameId) -> Result<GameProcessor> {
        let game = self.games.remove(&id).ok_or(ClueError::UnknownGame(id.0))?;
        self.seats.retain(|_, game_id| *game_id != id);
        tracing::info!("removed {}", id);
        Ok(game)
    }

    /// Map a player name to a game. A name sits in one game at a time.
    pub fn join(&mut self, player: impl Into<String>, id: GameId) -> Result<()> {
        let player = player.into();
        if !self.games.contains_key(&id) {
            return Err(ClueError::UnknownGame(id.0));
        }
        if self.seats.contains_key(&player) {
            return Err(ClueError::AlreadyInGame(player));
        }
        tracing::debug!("{} joined {}", player, id);
        self.seats.insert(player, id);
        Ok(())
    }

    /// Drop a player's mapping. Returns the game they were in.
    pub fn leave(&mut self, player: &str) -> Option<GameId> {
        self.seats.remove(player)
    }

    /// Game a player is mapped to.
    #[must_use]
    pub fn game_of(&self, player: &str) -> Option<GameId> {
        self.seats.get(player).copied()
    }

    /// Number of live games.
    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
