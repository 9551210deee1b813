//! Engine error type.
//!
//! Every rule violation surfaces as a `ClueError`. All of them are
//! recoverable at the caller: an operation that returns an error has not
//! mutated the game, so the caller may simply re-prompt.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ClueError>;

/// Coarse classification of a `ClueError`, for transports that map errors
/// to user-facing prompts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorSeverity {
    /// Malformed input (unknown card names, unreachable spaces).
    Validation,
    /// Turn-discipline violation. Safe to retry by the correct actor.
    Discipline,
    /// Game lifecycle violation (registration after start, etc.).
    Lifecycle,
    /// Card or board integrity violation. Indicates a setup bug.
    Integrity,
}

/// Errors produced by the rules engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClueError {
    // === Vocabulary ===
    /// Name is not part of the vocabulary for the requested category.
    #[error("'{name}' is not a valid {category}")]
    InvalidCard { name: String, category: String },

    /// Suggestion names an unknown suspect or weapon, or is made outside a room.
    #[error("invalid suggestion: {0}")]
    InvalidSuggestion(String),

    /// Accusation names an unknown suspect, weapon or room.
    #[error("invalid accusation: {0}")]
    InvalidAccusation(String),

    // === Card integrity ===
    /// Card is already present in the collection.
    #[error("card '{0}' is already in the collection")]
    DuplicateCard(String),

    /// Card is not present in the collection.
    #[error("card '{0}' is not in the collection")]
    CardNotFound(String),

    // === Board ===
    /// Hallway already holds a player.
    #[error("{0} is already occupied")]
    SpaceOccupied(String),

    /// Destination is not reachable from the player's current space.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// Edge or passage would break the board's structural rules.
    #[error("invalid board topology: {0}")]
    InvalidTopology(String),

    /// Space id does not belong to this board.
    #[error("unknown space {0}")]
    UnknownSpace(u8),

    // === Turn discipline ===
    /// Acting player does not hold the current turn.
    #[error("it is not {0}'s turn")]
    NotYourTurn(PlayerId),

    /// Player has already made their one accusation.
    #[error("{0} has already made an accusation")]
    AlreadyAccused(PlayerId),

    /// Action's enabling condition does not hold.
    #[error("precondition unmet: {0}")]
    PreconditionUnmet(String),

    /// A suggestion is waiting on a disproof response.
    #[error("waiting on {0} to disprove a suggestion")]
    DisproofPending(PlayerId),

    /// No suggestion is waiting on a disproof response.
    #[error("no disproof is pending")]
    NoDisproofPending,

    /// Offered card does not disprove the pending suggestion.
    #[error("card '{0}' does not disprove the pending suggestion")]
    InvalidDisproof(String),

    // === Lifecycle ===
    /// Roster is already at the configured maximum.
    #[error("game is full ({0} players)")]
    GameFull(usize),

    /// Game has already left the registration phase.
    #[error("game has already started")]
    GameAlreadyStarted,

    /// Too few players registered to start.
    #[error("need at least {required} players, have {registered}")]
    NotEnoughPlayers { required: usize, registered: usize },

    /// Operation requires a game in progress.
    #[error("game is not in progress")]
    GameNotInProgress,

    /// Another player already plays this character.
    #[error("character '{0}' is already taken")]
    CharacterTaken(String),

    /// Configuration limits do not describe a playable game.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Player id does not belong to this game.
    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),

    // === Registry ===
    /// No game with this id is registered.
    #[error("unknown game {0}")]
    UnknownGame(u64),

    /// Player name is already mapped to a game.
    #[error("'{0}' is already in a game")]
    AlreadyInGame(String),
}

impl ClueError {
    /// Classify this error.
    #[must_use]
    pub fn severity(&self) -> ErrorSeverity {
        use ClueError::*;
        match self {
            InvalidCard { .. }
            | InvalidSuggestion(_)
            | InvalidAccusation(_)
            | IllegalMove(_)
            | SpaceOccupied(_)
            | UnknownSpace(_)
            | InvalidDisproof(_)
            | UnknownPlayer(_) => ErrorSeverity::Validation,
            NotYourTurn(_)
            | AlreadyAccused(_)
            | PreconditionUnmet(_)
            | DisproofPending(_)
            | NoDisproofPending => ErrorSeverity::Discipline,
            GameFull(_)
            | GameAlreadyStarted
            | NotEnoughPlayers { .. }
            | GameNotInProgress
            | CharacterTaken(_)
            | InvalidConfig(_)
            | UnknownGame(_)
            | AlreadyInGame(_) => ErrorSeverity::Lifecycle,
            DuplicateCard(_) | CardNotFound(_) | InvalidTopology(_) => ErrorSeverity::Integrity,
        }
    }

    /// Stable machine-readable code for transports.
    #[must_use]
    pub fn code(&self) -> &'static str {
        use ClueError::*;
        match self {
            InvalidCard { .. } => "INVALID_CARD",
            InvalidSuggestion(_) => "INVALID_SUGGESTION",
            InvalidAccusation(_) => "INVALID_ACCUSATION",
            DuplicateCard(_) => "DUPLICATE_CARD",
            CardNotFound(_) => "CARD_NOT_FOUND",
            SpaceOccupied(_) => "SPACE_OCCUPIED",
            IllegalMove(_) => "ILLEGAL_MOVE",
            InvalidTopology(_) => "INVALID_TOPOLOGY",
            UnknownSpace(_) => "UNKNOWN_SPACE",
            NotYourTurn(_) => "NOT_YOUR_TURN",
            AlreadyAccused(_) => "ALREADY_ACCUSED",
            PreconditionUnmet(_) => "PRECONDITION_UNMET",
            DisproofPending(_) => "DISPROOF_PENDING",
            NoDisproofPending => "NO_DISPROOF_PENDING",
            InvalidDisproof(_) => "INVALID_DISPROOF",
            GameFull(_) => "GAME_FULL",
            GameAlreadyStarted => "GAME_ALREADY_STARTED",
            NotEnoughPlayers { .. } => "NOT_ENOUGH_PLAYERS",
            GameNotInProgress => "GAME_NOT_IN_PROGRESS",
            CharacterTaken(_) => "CHARACTER_TAKEN",
            InvalidConfig(_) => "INVALID_CONFIG",
            UnknownPlayer(_) => "UNKNOWN_PLAYER",
            UnknownGame(_) => "UNKNOWN_GAME",
            AlreadyInGame(_) => "ALREADY_IN_GAME",
        }
    }
}
