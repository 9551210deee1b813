//! Game flow: players, turns, actions, the disproof protocol and the
//! processor that ties them together.
//!
//! ## Key Types
//!
//! - `GameProcessor`: owns one game's board, players, deck and case file
//! - `PlayerTurn`: per-turn flags and legal-action computation
//! - `Action`: tagged union of Move, Suggestion and Accusation
//! - `DisproofPoll`: the suspended poll that follows a suggestion
//! - `GameSnapshot`: public, broadcastable view of a game
//! - `GameRegistry`: live games keyed by `GameId`

pub mod action;
pub mod disproof;
pub mod participant;
pub mod processor;
pub mod registry;
pub mod snapshot;
pub mod turn;

pub use action::{
    AccusationOutcome, Action, ActionOutcome, ActionRecord, ActionSummary, DisproofResolution,
    MoveOutcome, SuggestionProgress,
};
pub use disproof::{Disproof, DisproofPoll, DisproofState};
pub use participant::Player;
pub use processor::{GamePhase, GameProcessor};
pub use registry::{GameId, GameRegistry};
pub use snapshot::{GameSnapshot, PlayerView, SpaceView};
pub use turn::{ActionKind, PlayerTurn, TurnPhase};
