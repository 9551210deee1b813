//! One player's turn.
//!
//! A `PlayerTurn` is created when the processor hands the turn to a player
//! and is discarded when the turn ends. Its flags only move one way within
//! the turn. Accusation eligibility lives on the `Player`, since it spans the
//! whole game.

use serde::{Deserialize, Serialize};

use super::participant::Player;
use crate::core::PlayerId;

/// Kinds of action a player can take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Suggestion,
    Accusation,
    Move,
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ActionKind::Suggestion => "suggestion",
            ActionKind::Accusation => "accusation",
            ActionKind::Move => "move",
        };
        f.write_str(label)
    }
}

/// Turn lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Created, not yet queried.
    Idle,
    /// Legal actions fetched or an action submitted.
    Active,
    /// Ended.
    Completed,
}

/// Per-turn state for the current player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerTurn {
    player: PlayerId,
    number: u32,
    phase: TurnPhase,
    entered_room: bool,
    has_moved: bool,
}

impl PlayerTurn {
    /// Open turn `number` for `player`.
    ///
    /// A player summoned into a room since their last turn may suggest
    /// without moving first, so `entered_room` starts set for them.
    #[must_use]
    pub fn new(player: PlayerId, number: u32, entered_room: bool) -> Self {
        Self {
            player,
            number,
            phase: TurnPhase::Idle,
            entered_room,
            has_moved: false,
        }
    }

    /// Player whose turn this is.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// Turn number (starts at 1).
    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// The player has been in a room at some point this turn.
    #[must_use]
    pub fn entered_room(&self) -> bool {
        self.entered_room
    }

    /// The player has moved this turn.
    #[must_use]
    pub fn has_moved(&self) -> bool {
        self.has_moved
    }

    /// Idle -> Active. No-op once active.
    pub fn activate(&mut self) {
        if self.phase == TurnPhase::Idle {
            self.phase = TurnPhase::Active;
        }
    }

    /// Legal actions for `player`, in priority order Suggestion, Accusation,
    /// Move. Activates the turn.
    ///
    /// `in_room` reports whether the player stands in a room right now; a
    /// player who entered a room this turn and walked back out can no longer
    /// suggest. `can_reach_somewhere` reports whether the player's space has
    /// at least one valid destination.
    pub fn legal_actions(
        &mut self,
        player: &Player,
        in_room: bool,
        can_reach_somewhere: bool,
    ) -> Vec<ActionKind> {
        self.activate();
        if self.phase != TurnPhase::Active || player.id() != self.player || player.is_eliminated() {
            return Vec::new();
        }

        let mut actions = Vec::with_capacity(3);
        if self.entered_room && in_room {
            actions.push(ActionKind::Suggestion);
        }
        if !player.has_accused() {
            actions.push(ActionKind::Accusation);
        }
        if !self.has_moved && can_reach_somewhere {
            actions.push(ActionKind::Move);
        }
        actions
    }

    pub(crate) fn record_move(&mut self, into_room: bool) {
        self.has_moved = true;
        self.entered_room |= into_room;
    }

    pub(crate) fn complete(&mut self) {
        self.phase = TurnPhase::Completed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::SpaceId;
    use crate::cards::Card;

    fn player(id: u8) -> Player {
        Player::new(
            PlayerId::new(id),
            format!("p{id}"),
            Card::suspect("Mr. Green").unwrap(),
            SpaceId::new(0),
        )
    }

    #[test]
    fn test_fresh_turn() {
        let p = player(0);
        let mut turn = PlayerTurn::new(p.id(), 1, false);
        assert_eq!(turn.phase(), TurnPhase::Idle);

        let actions = turn.legal_actions(&p, false, true);
        assert_eq!(turn.phase(), TurnPhase::Active);
        assert_eq!(actions, vec![ActionKind::Accusation, ActionKind::Move]);
    }

    #[test]
    fn test_priority_order_after_entering_room() {
        let p = player(0);
        let mut turn = PlayerTurn::new(p.id(), 1, false);
        turn.record_move(true);

        let actions = turn.legal_actions(&p, true, true);
        assert_eq!(actions, vec![ActionKind::Suggestion, ActionKind::Accusation]);
    }

    #[test]
    fn test_summoned_player_can_suggest_immediately() {
        let p = player(0);
        let mut turn = PlayerTurn::new(p.id(), 4, true);
        let actions = turn.legal_actions(&p, true, false);
        assert_eq!(actions, vec![ActionKind::Suggestion, ActionKind::Accusation]);
    }

    #[test]
    fn test_no_suggestion_after_leaving_room() {
        let p = player(0);
        let mut turn = PlayerTurn::new(p.id(), 4, true);
        turn.record_move(false);

        assert!(turn.entered_room());
        assert_eq!(turn.legal_actions(&p, false, true), vec![ActionKind::Accusation]);
    }

    #[test]
    fn test_no_move_when_boxed_in() {
        let p = player(0);
        let mut turn = PlayerTurn::new(p.id(), 1, false);
        assert_eq!(turn.legal_actions(&p, false, false), vec![ActionKind::Accusation]);
    }

    #[test]
    fn test_accused_and_eliminated() {
        let mut p = player(0);
        p.has_accused = true;
        let mut turn = PlayerTurn::new(p.id(), 1, false);
        assert_eq!(turn.legal_actions(&p, false, true), vec![ActionKind::Move]);

        p.eliminated = true;
        assert!(turn.legal_actions(&p, false, true).is_empty());
    }

    #[test]
    fn test_other_player_gets_nothing() {
        let mut turn = PlayerTurn::new(PlayerId::new(0), 1, true);
        assert!(turn.legal_actions(&player(1), true, true).is_empty());
    }

    #[test]
    fn test_completed_turn_is_inert() {
        let p = player(0);
        let mut turn = PlayerTurn::new(p.id(), 1, true);
        turn.legal_actions(&p, false, true);
        turn.complete();
        assert!(turn.legal_actions(&p, false, true).is_empty());
        assert_eq!(turn.phase(), TurnPhase::Completed);
    }
}
