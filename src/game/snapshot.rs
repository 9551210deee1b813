//! Read-only public view of a game, for broadcasting to every session.
//!
//! A snapshot carries hand sizes but never hand contents, and history
//! entries name who disproved a suggestion but not the card shown.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::processor::GamePhase;
use crate::board::SpaceId;
use crate::cards::Card;
use crate::core::PlayerId;

/// Public state of one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub character: Card,
    pub location: SpaceId,
    pub location_name: String,
    pub eliminated: bool,
    pub has_accused: bool,
    pub hand_size: usize,
}

/// A space holding at least one token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceView {
    pub id: SpaceId,
    pub name: String,
    pub occupants: Vec<PlayerId>,
    pub weapons: Vec<Card>,
}

/// Public game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    /// 0 before the game starts.
    pub turn_number: u32,
    pub current_player: Option<PlayerId>,
    pub awaiting_disproof: Option<PlayerId>,
    pub winner: Option<PlayerId>,
    pub players: Vec<PlayerView>,
    pub spaces: Vec<SpaceView>,
    pub history: Vector<ActionRecord>,
}

impl GameSnapshot {
    /// Players knocked out by a wrong accusation.
    pub fn eliminated(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players.iter().filter(|p| p.eliminated).map(|p| p.id)
    }

    /// Public view of one player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&PlayerView> {
        self.players.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::game::GameProcessor;

    fn started() -> GameProcessor {
        let mut game = GameProcessor::new(GameConfig::new(21)).unwrap();
        for name in ["Miss Scarlet", "Mr. Green", "Mrs. Peacock"] {
            game.register_player_as(name, name).unwrap();
        }
        game.start().unwrap();
        game
    }

    #[test]
    fn test_snapshot_before_start() {
        let mut game = GameProcessor::new(GameConfig::new(1)).unwrap();
        game.register_player_as("a", "Mrs. White").unwrap();
        let snapshot = game.game_snapshot();

        assert_eq!(snapshot.phase, GamePhase::WaitingForPlayers);
        assert_eq!(snapshot.turn_number, 0);
        assert_eq!(snapshot.current_player, None);
        assert_eq!(snapshot.players[0].hand_size, 0);
        assert_eq!(snapshot.players[0].location_name, "Ballroom-Kitchen hallway");
    }

    #[test]
    fn test_snapshot_hides_hands() {
        let game = started();
        let snapshot = game.game_snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();

        assert_eq!(snapshot.players.len(), 3);
        assert_eq!(snapshot.players.iter().map(|p| p.hand_size).sum::<usize>(), 18);
        assert!(!json.contains("hand\""));
        assert_eq!(snapshot.eliminated().count(), 0);

        let tokens: usize = snapshot.spaces.iter().map(|s| s.occupants.len()).sum();
        assert_eq!(tokens, 3);
        let weapons: usize = snapshot.spaces.iter().map(|s| s.weapons.len()).sum();
        assert_eq!(weapons, 6);
    }

    #[test]
    fn test_snapshot_serde_round_trip() {
        let snapshot = started().game_snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
        assert_eq!(
            back.player(PlayerId::new(1)).map(|p| p.character),
            Some(Card::suspect("Mr. Green").unwrap())
        );
    }
}
