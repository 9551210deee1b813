//! # clueless-engine
//!
//! Rules engine for Clue-Less, a networked variant of the classic deduction
//! board game for three to six players.
//!
//! ## Design Principles
//!
//! 1. **Single Writer**: all mutation goes through `&mut GameProcessor`, so
//!    one game never has two actions in flight.
//!
//! 2. **Checks Before Effects**: every operation validates completely before
//!    touching state. A rejected request leaves the game unchanged.
//!
//! 3. **Concealed Information**: the case file can only be compared against,
//!    hands are only readable by their owner's session, and a disproving
//!    card is only returned to the suggester.
//!
//! ## Architecture
//!
//! - **Arena Storage**: players are indexed by seat (`PlayerId`), spaces by
//!   `SpaceId`. Spaces hold occupant ids and players hold space ids.
//!
//! - **Suspended Disproof**: a suggestion that needs a player's choice parks
//!   in a `DisproofPoll` until that player responds or the transport forces
//!   the poll onward. Nothing blocks.
//!
//! - **Deterministic Setup**: shuffling and character assignment draw from a
//!   seeded ChaCha8 stream, so a seed reproduces a game.
//!
//! ## Modules
//!
//! - `core`: player ids, errors, configuration, RNG
//! - `cards`: card vocabulary, deck, hands, case file
//! - `board`: room/hallway graph and the classic layout
//! - `game`: turns, actions, disproof, processor, snapshots, registry

pub mod board;
pub mod cards;
pub mod core;
pub mod game;

pub use crate::core::{
    ClueError, ErrorSeverity, GameConfig, GameRng, PlayerId, Result, MAX_PLAYERS, MIN_PLAYERS,
};

pub use crate::cards::{Card, CaseFile, Category, Deck, Hand, DECK_SIZE, ROOMS, SUSPECTS, WEAPONS};

pub use crate::board::{Board, Destinations, Space, SpaceId, SpaceKind};

pub use crate::game::{
    AccusationOutcome, Action, ActionKind, ActionOutcome, ActionRecord, ActionSummary, Disproof,
    DisproofPoll, DisproofResolution, DisproofState, GameId, GamePhase, GameProcessor,
    GameRegistry, GameSnapshot, MoveOutcome, Player, PlayerTurn, PlayerView, SpaceView,
    SuggestionProgress, TurnPhase,
};
