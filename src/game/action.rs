//! Actions, their outcomes and the public action history.
//!
//! An `Action` is what a transport parses out of a player's request. Card
//! names arrive as plain strings and are validated by the processor, which
//! reports a bad name as `InvalidSuggestion` or `InvalidAccusation` rather
//! than a generic card error.
//!
//! ## Example
//!
//! ```
//! use clueless_engine::game::{Action, ActionKind};
//!
//! let json = r#"{"type":"suggestion","suspect":"Mr. Green","weapon":"Rope"}"#;
//! let action: Action = serde_json::from_str(json).unwrap();
//! assert_eq!(action.kind(), ActionKind::Suggestion);
//! ```

use serde::{Deserialize, Serialize};

use super::disproof::Disproof;
use super::turn::ActionKind;
use crate::board::SpaceId;
use crate::cards::Card;
use crate::core::PlayerId;

/// A player request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Move to an adjacent space or through a secret passage.
    Move { destination: SpaceId },
    /// Suggest a suspect and weapon in the current room.
    Suggestion { suspect: String, weapon: String },
    /// Name the solution. Once per game.
    Accusation {
        suspect: String,
        weapon: String,
        room: String,
    },
}

impl Action {
    /// Action kind.
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Move { .. } => ActionKind::Move,
            Action::Suggestion { .. } => ActionKind::Suggestion,
            Action::Accusation { .. } => ActionKind::Accusation,
        }
    }
}

/// Result of a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub from: SpaceId,
    pub to: SpaceId,
    /// The destination is a room, so a suggestion is now allowed.
    pub entered_room: bool,
}

/// Progress of a suggestion's disproof.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuggestionProgress {
    /// Suspended until this player responds (or is forced past).
    AwaitingDisproof { pollee: PlayerId },
    /// Finished. The card, if any, is for the suggester only.
    Resolved(Option<Disproof>),
}

impl SuggestionProgress {
    /// Player being waited on, if any.
    #[must_use]
    pub fn pollee(&self) -> Option<PlayerId> {
        match self {
            SuggestionProgress::AwaitingDisproof { pollee } => Some(*pollee),
            SuggestionProgress::Resolved(_) => None,
        }
    }
}

/// A completed disproof, addressed to the suggester.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisproofResolution {
    /// The only player who may see `disproof.card`.
    pub suggester: PlayerId,
    pub disproof: Disproof,
}

/// Result of an accusation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccusationOutcome {
    /// Correct: the accuser wins and the game is over.
    Win,
    /// Wrong: the accuser is out. `game_over` is set when too few players
    /// remain to continue.
    Eliminated { game_over: bool },
}

/// Result of [`GameProcessor::submit`](super::GameProcessor::submit).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    Moved(MoveOutcome),
    Suggested(SuggestionProgress),
    Accused(AccusationOutcome),
}

/// Publicly visible summary of something that happened.
///
/// Disproofs record who showed a card, never the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionSummary {
    Moved { from: SpaceId, to: SpaceId },
    Suggested { suspect: Card, weapon: Card, room: Card },
    Disproved { by: Option<PlayerId> },
    Accused { correct: bool },
    TurnEnded,
}

/// A history entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Player whose turn it was.
    pub player: PlayerId,
    /// Turn number when it happened.
    pub turn: u32,
    pub summary: ActionSummary,
}

impl ActionRecord {
    /// Create a new record.
    #[must_use]
    pub fn new(player: PlayerId, turn: u32, summary: ActionSummary) -> Self {
        Self {
            player,
            turn,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_kind() {
        let moved = Action::Move {
            destination: SpaceId::new(3),
        };
        let accused = Action::Accusation {
            suspect: "Mr. Green".into(),
            weapon: "Rope".into(),
            room: "Hall".into(),
        };
        assert_eq!(moved.kind(), ActionKind::Move);
        assert_eq!(accused.kind(), ActionKind::Accusation);
    }

    #[test]
    fn test_action_wire_format() {
        let action: Action =
            serde_json::from_str(r#"{"type":"move","destination":4}"#).unwrap();
        assert_eq!(
            action,
            Action::Move {
                destination: SpaceId::new(4)
            }
        );

        let json = serde_json::to_string(&Action::Accusation {
            suspect: "Mrs. White".into(),
            weapon: "Wrench".into(),
            room: "Kitchen".into(),
        })
        .unwrap();
        assert!(json.contains(r#""type":"accusation""#));
    }

    #[test]
    fn test_disproof_record_has_no_card() {
        let record = ActionRecord::new(
            PlayerId::new(0),
            2,
            ActionSummary::Disproved {
                by: Some(PlayerId::new(1)),
            },
        );
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("card"));
    }

    #[test]
    fn test_progress_pollee() {
        let waiting = SuggestionProgress::AwaitingDisproof {
            pollee: PlayerId::new(2),
        };
        assert_eq!(waiting.pollee(), Some(PlayerId::new(2)));
        assert_eq!(SuggestionProgress::Resolved(None).pollee(), None);
    }
}
