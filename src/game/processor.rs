//! The game processor: the single authority over one game's state.
//!
//! ## Lifecycle
//!
//! ```text
//! WaitingForPlayers --start()--> Initializing --> InProgress --> GameOver
//! ```
//!
//! Registration is only open while waiting. `start()` builds and shuffles the
//! deck, withdraws the case file, deals the rest round-robin from seat 0,
//! scatters the weapon tokens and opens seat 0's turn.
//!
//! ## Discipline
//!
//! Every submission names the acting player. Anything from a player other
//! than the current one fails with `NotYourTurn`. While a suggestion is
//! waiting on a disproof, only `respond_to_disproof` (from the pollee) and
//! `force_no_disproof` make progress. All checks run before any mutation,
//! so a failed call leaves the game exactly as it was.
//!
//! Log lines never carry card identities: hands and the case file are
//! private.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::{
    AccusationOutcome, Action, ActionOutcome, ActionRecord, ActionSummary, DisproofResolution,
    MoveOutcome, SuggestionProgress,
};
use super::disproof::{DisproofPoll, DisproofState};
use super::participant::Player;
use super::snapshot::{GameSnapshot, PlayerView, SpaceView};
use super::turn::{ActionKind, PlayerTurn};
use crate::board::{Board, SpaceId};
use crate::cards::{Card, CaseFile, Category, Deck, Hand, SUSPECTS, WEAPONS};
use crate::core::{ClueError, GameConfig, GameRng, PlayerId, Result};

/// Game lifecycle phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    WaitingForPlayers,
    Initializing,
    InProgress,
    GameOver,
}

/// One game of Clue-Less.
///
/// ```
/// use clueless_engine::core::GameConfig;
/// use clueless_engine::game::{ActionKind, GameProcessor, GamePhase};
///
/// let mut game = GameProcessor::new(GameConfig::new(7)).unwrap();
/// let alice = game.register_player_as("alice", "Miss Scarlet").unwrap();
/// game.register_player("bob").unwrap();
/// game.register_player("carol").unwrap();
/// game.start().unwrap();
///
/// assert_eq!(game.phase(), GamePhase::InProgress);
/// assert_eq!(game.current_player(), Some(alice));
/// assert!(game.legal_actions(alice).contains(&ActionKind::Move));
/// ```
#[derive(Clone, Debug)]
pub struct GameProcessor {
    config: GameConfig,
    phase: GamePhase,
    board: Board,
    players: Vec<Player>,
    /// Set by `start()`.
    case_file: Option<CaseFile>,
    /// Undealt cards. Empty once the game is running.
    deck: Deck,
    turn: Option<PlayerTurn>,
    disproof: Option<DisproofPoll>,
    winner: Option<PlayerId>,
    rng: GameRng,
    history: Vector<ActionRecord>,
}

impl GameProcessor {
    /// Create a game on the classic board.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let rng = GameRng::new(config.seed);
        Ok(Self {
            config,
            phase: GamePhase::WaitingForPlayers,
            board: Board::classic()?,
            players: Vec::new(),
            case_file: None,
            deck: Deck::new(),
            turn: None,
            disproof: None,
            winner: None,
            rng,
            history: Vector::new(),
        })
    }

    // === Registration ===

    /// Register a player with a randomly chosen free character.
    pub fn register_player(&mut self, name: impl Into<String>) -> Result<PlayerId> {
        self.require_registration_open()?;

        let free: SmallVec<[&str; 6]> = SUSPECTS
            .iter()
            .copied()
            .filter(|s| !self.players.iter().any(|p| p.character.name() == *s))
            .collect();
        let mut rng = self
            .rng
            .for_context(&format!("character-{}", self.players.len()));
        let character = rng
            .choose(&free)
            .copied()
            .ok_or(ClueError::GameFull(self.config.max_players))?;

        self.register_player_as(name, character)
    }

    /// Register a player as a specific character.
    pub fn register_player_as(
        &mut self,
        name: impl Into<String>,
        character: &str,
    ) -> Result<PlayerId> {
        self.require_registration_open()?;
        let character = Card::suspect(character)?;
        if self.players.iter().any(|p| p.character == character) {
            return Err(ClueError::CharacterTaken(character.name().to_string()));
        }

        let id = PlayerId::new(self.players.len() as u8);
        let home = self.board.home_space(character)?;
        self.board.occupy(home, id)?;

        let player = Player::new(id, name.into(), character, home);
        tracing::info!("{} registered as {} ({})", player.name, character, id);
        self.players.push(player);
        Ok(id)
    }

    fn require_registration_open(&self) -> Result<()> {
        if self.phase != GamePhase::WaitingForPlayers {
            return Err(ClueError::GameAlreadyStarted);
        }
        if self.players.len() >= self.config.max_players {
            return Err(ClueError::GameFull(self.config.max_players));
        }
        Ok(())
    }

    // === Setup ===

    /// Deal the cards and open the first turn.
    pub fn start(&mut self) -> Result<()> {
        if self.phase != GamePhase::WaitingForPlayers {
            return Err(ClueError::GameAlreadyStarted);
        }
        if self.players.len() < self.config.min_players {
            return Err(ClueError::NotEnoughPlayers {
                required: self.config.min_players,
                registered: self.players.len(),
            });
        }
        self.phase = GamePhase::Initializing;

        let mut deck = Deck::standard();
        deck.shuffle(&mut self.rng);
        let case_file = CaseFile::withdraw(&mut deck)?;

        let count = self.players.len();
        let mut seat = 0;
        while let Some(card) = deck.deal() {
            self.players[seat].hand.add(card)?;
            seat = (seat + 1) % count;
        }
        for player in &mut self.players {
            player.hand.sort();
        }

        let mut rooms: SmallVec<[Card; 9]> = Card::all_of(Category::Room).collect();
        self.rng.for_context("weapons").shuffle(&mut rooms);
        for (weapon, room) in WEAPONS.iter().zip(rooms) {
            let space = self
                .board
                .room(room)
                .ok_or_else(|| ClueError::InvalidTopology(format!("{room} is not on the board")))?;
            self.board.place_weapon(Card::weapon(weapon)?, space)?;
        }

        self.case_file = Some(case_file);
        self.deck = deck;
        self.turn = Some(PlayerTurn::new(PlayerId::new(0), 1, false));
        self.phase = GamePhase::InProgress;
        tracing::info!("game started with {} players", count);
        Ok(())
    }

    // === Turn actions ===

    /// Actions `player` may take now, in priority order. Empty for anyone
    /// but the current player, while a disproof is pending, or outside
    /// `InProgress`. Activates an idle turn.
    pub fn legal_actions(&mut self, player: PlayerId) -> Vec<ActionKind> {
        if self.phase != GamePhase::InProgress || self.disproof.is_some() {
            return Vec::new();
        }
        let (Some(turn), Some(p)) = (self.turn.as_mut(), self.players.get(player.index())) else {
            return Vec::new();
        };
        if turn.player() != player {
            return Vec::new();
        }
        let in_room = self.board.get(p.location).is_some_and(|s| s.is_room());
        let can_move = !self.board.valid_destinations(p.location).is_empty();
        turn.legal_actions(p, in_room, can_move)
    }

    /// Move the current player.
    pub fn submit_move(&mut self, player: PlayerId, destination: SpaceId) -> Result<MoveOutcome> {
        self.require_actor(player)?;
        if self.current_turn()?.has_moved() {
            return Err(ClueError::PreconditionUnmet(
                "already moved this turn".to_string(),
            ));
        }
        let from = self.players[player.index()].location;
        let entered_room = self.board.space(destination)?.is_room();
        if !self.board.valid_destinations(from).contains(&destination) {
            return Err(ClueError::IllegalMove(format!(
                "{} to {}",
                self.board.name_of(from),
                self.board.name_of(destination)
            )));
        }

        self.board.occupy(destination, player)?;
        self.board.vacate(from, player);
        self.players[player.index()].relocate(destination);
        let turn = self.current_turn_mut()?;
        turn.activate();
        turn.record_move(entered_room);
        let number = turn.number();

        tracing::debug!(
            "{} moved from {} to {}",
            player,
            self.board.name_of(from),
            self.board.name_of(destination)
        );
        self.history.push_back(ActionRecord::new(
            player,
            number,
            ActionSummary::Moved {
                from,
                to: destination,
            },
        ));
        Ok(MoveOutcome {
            from,
            to: destination,
            entered_room,
        })
    }

    /// Suggest `suspect` with `weapon` in the current player's room.
    ///
    /// The named suspect's token (if someone plays them) and the weapon token
    /// are brought into the room, then the other players are polled.
    pub fn submit_suggestion(
        &mut self,
        player: PlayerId,
        suspect: &str,
        weapon: &str,
    ) -> Result<SuggestionProgress> {
        self.require_actor(player)?;
        if !self.current_turn()?.entered_room() {
            return Err(ClueError::PreconditionUnmet(
                "must enter a room before suggesting".to_string(),
            ));
        }
        let room_space = self.players[player.index()].location;
        let room = self.board.space(room_space)?.room().ok_or_else(|| {
            ClueError::PreconditionUnmet("suggestions are made from a room".to_string())
        })?;
        let suspect = Card::suspect(suspect)
            .map_err(|_| ClueError::InvalidSuggestion(format!("{suspect} is not a suspect")))?;
        let weapon = Card::weapon(weapon)
            .map_err(|_| ClueError::InvalidSuggestion(format!("{weapon} is not a weapon")))?;

        if let Some(summoned) = self.players.iter().position(|p| p.character == suspect) {
            let from = self.players[summoned].location;
            if from != room_space {
                let summoned_id = self.players[summoned].id;
                self.board.occupy(room_space, summoned_id)?;
                self.board.vacate(from, summoned_id);
                let target = &mut self.players[summoned];
                target.relocate(room_space);
                target.summoned = true;
                tracing::debug!("{} summoned to {}", summoned_id, room);
            }
        }
        self.board.place_weapon(weapon, room_space)?;

        let turn = self.current_turn_mut()?;
        turn.activate();
        let number = turn.number();
        self.history.push_back(ActionRecord::new(
            player,
            number,
            ActionSummary::Suggested {
                suspect,
                weapon,
                room,
            },
        ));

        let poll = DisproofPoll::start(
            player,
            [suspect, weapon, room],
            &self.players,
            self.config.auto_reveal_single_match,
        );
        Ok(self.settle_poll(poll))
    }

    /// The pending pollee shows `card` to the suggester.
    pub fn respond_to_disproof(
        &mut self,
        player: PlayerId,
        card: Card,
    ) -> Result<DisproofResolution> {
        self.require_in_progress()?;
        self.require_known(player)?;
        let poll = self.disproof.as_mut().ok_or(ClueError::NoDisproofPending)?;
        let disproof = poll.respond(player, card, &self.players)?;
        let suggester = poll.suggester();

        self.disproof = None;
        tracing::debug!("{} disproved the suggestion by {}", player, suggester);
        self.record_disproof(suggester, Some(player));
        Ok(DisproofResolution {
            suggester,
            disproof,
        })
    }

    /// Treat the pending pollee as offering no card and poll the next seat.
    pub fn force_no_disproof(&mut self) -> Result<SuggestionProgress> {
        self.require_in_progress()?;
        let poll = self.disproof.as_mut().ok_or(ClueError::NoDisproofPending)?;
        if let Some(pollee) = poll.pollee() {
            tracing::warn!("forcing past {} with no disproof", pollee);
        }
        poll.pass(&self.players)?;

        let poll = self.disproof.take().ok_or(ClueError::NoDisproofPending)?;
        Ok(self.settle_poll(poll))
    }

    /// Accuse. Correct wins the game; wrong eliminates the accuser, and ends
    /// the game with no winner if too few players remain. Either way the
    /// caller still ends the turn.
    pub fn submit_accusation(
        &mut self,
        player: PlayerId,
        suspect: &str,
        weapon: &str,
        room: &str,
    ) -> Result<AccusationOutcome> {
        // An eliminated player has always accused already.
        self.require_turn(player)?;
        if self.players[player.index()].has_accused {
            return Err(ClueError::AlreadyAccused(player));
        }
        let invalid = |name: &str, category: &str| {
            ClueError::InvalidAccusation(format!("{name} is not a {category}"))
        };
        let suspect = Card::suspect(suspect).map_err(|_| invalid(suspect, "suspect"))?;
        let weapon = Card::weapon(weapon).map_err(|_| invalid(weapon, "weapon"))?;
        let room = Card::room(room).map_err(|_| invalid(room, "room"))?;
        let case_file = self.case_file.ok_or(ClueError::GameNotInProgress)?;

        let correct = case_file.matches(suspect, weapon, room);
        let turn = self.current_turn_mut()?;
        turn.activate();
        let number = turn.number();
        self.history.push_back(ActionRecord::new(
            player,
            number,
            ActionSummary::Accused { correct },
        ));

        let accuser = &mut self.players[player.index()];
        accuser.has_accused = true;
        if correct {
            tracing::info!("{} accused correctly and wins", player);
            self.winner = Some(player);
            self.finish();
            return Ok(AccusationOutcome::Win);
        }

        accuser.eliminated = true;
        let active = self.players.iter().filter(|p| !p.eliminated).count();
        tracing::info!("{} accused wrongly and is eliminated ({} active)", player, active);
        let game_over = active < self.config.min_active_players;
        if game_over {
            tracing::info!("too few players remain; game over with no winner");
            self.finish();
        }
        Ok(AccusationOutcome::Eliminated { game_over })
    }

    /// Dispatch a parsed request.
    pub fn submit(&mut self, player: PlayerId, action: Action) -> Result<ActionOutcome> {
        match action {
            Action::Move { destination } => self
                .submit_move(player, destination)
                .map(ActionOutcome::Moved),
            Action::Suggestion { suspect, weapon } => self
                .submit_suggestion(player, &suspect, &weapon)
                .map(ActionOutcome::Suggested),
            Action::Accusation {
                suspect,
                weapon,
                room,
            } => self
                .submit_accusation(player, &suspect, &weapon, &room)
                .map(ActionOutcome::Accused),
        }
    }

    /// End the current turn and hand it to the next uneliminated seat.
    ///
    /// Returns the new turn, or `None` once the game is over.
    pub fn end_turn(&mut self, player: PlayerId) -> Result<Option<PlayerTurn>> {
        if self.phase == GamePhase::GameOver {
            return Ok(None);
        }
        self.require_in_progress()?;
        self.require_known(player)?;
        let current = self.current_turn()?;
        if current.player() != player {
            return Err(ClueError::NotYourTurn(player));
        }
        if let Some(pollee) = self.disproof.as_ref().and_then(DisproofPoll::pollee) {
            return Err(ClueError::DisproofPending(pollee));
        }
        let number = current.number();
        if let Some(turn) = self.turn.as_mut() {
            turn.complete();
        }

        let next = player
            .seats_after(self.players.len())
            .chain(std::iter::once(player))
            .find(|p| !self.players[p.index()].eliminated);
        let Some(next) = next else {
            tracing::info!("no active players remain; game over");
            self.finish();
            return Ok(None);
        };

        self.history
            .push_back(ActionRecord::new(player, number, ActionSummary::TurnEnded));
        let summoned = std::mem::take(&mut self.players[next.index()].summoned);
        let turn = PlayerTurn::new(next, number + 1, summoned);
        tracing::debug!("turn {} passes to {}", number + 1, next);
        self.turn = Some(turn.clone());
        Ok(Some(turn))
    }

    // === Queries ===

    /// Lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Configuration the game was created with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Registered players in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// A registered player.
    pub fn player(&self, id: PlayerId) -> Result<&Player> {
        self.players.get(id.index()).ok_or(ClueError::UnknownPlayer(id))
    }

    /// A player's private hand, for that player's session only.
    pub fn hand(&self, id: PlayerId) -> Result<&Hand> {
        self.player(id).map(Player::hand)
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        match self.phase {
            GamePhase::InProgress => self.turn.as_ref().map(PlayerTurn::player),
            _ => None,
        }
    }

    /// The current turn.
    #[must_use]
    pub fn turn(&self) -> Option<&PlayerTurn> {
        self.turn.as_ref()
    }

    /// Player the pending disproof is waiting on.
    #[must_use]
    pub fn awaiting_disproof(&self) -> Option<PlayerId> {
        self.disproof.as_ref().and_then(DisproofPoll::pollee)
    }

    /// The pending disproof poll.
    #[must_use]
    pub fn pending_disproof(&self) -> Option<&DisproofPoll> {
        self.disproof.as_ref()
    }

    /// Cards `player` may show for the pending disproof. Only the pollee
    /// may ask.
    pub fn disproof_options(&self, player: PlayerId) -> Result<SmallVec<[Card; 3]>> {
        let poll = self.disproof.as_ref().ok_or(ClueError::NoDisproofPending)?;
        if poll.pollee() != Some(player) {
            return Err(ClueError::NotYourTurn(player));
        }
        poll.options(&self.players)
    }

    /// Winner, if someone accused correctly.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// The solution, once the game is over.
    #[must_use]
    pub fn revealed_solution(&self) -> Option<[Card; 3]> {
        match self.phase {
            GamePhase::GameOver => self.case_file.map(|c| c.reveal()),
            _ => None,
        }
    }

    /// Public history, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Public view for broadcasting. Contains no hand contents.
    #[must_use]
    pub fn game_snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase,
            turn_number: self.turn.as_ref().map_or(0, PlayerTurn::number),
            current_player: self.current_player(),
            awaiting_disproof: self.awaiting_disproof(),
            winner: self.winner,
            players: self
                .players
                .iter()
                .map(|p| PlayerView {
                    id: p.id,
                    name: p.name.clone(),
                    character: p.character,
                    location: p.location,
                    location_name: self.board.name_of(p.location),
                    eliminated: p.eliminated,
                    has_accused: p.has_accused,
                    hand_size: p.hand.len(),
                })
                .collect(),
            spaces: self
                .board
                .spaces()
                .filter(|s| !s.occupants().is_empty() || !s.weapons().is_empty())
                .map(|s| SpaceView {
                    id: s.id(),
                    name: self.board.name_of(s.id()),
                    occupants: s.occupants().to_vec(),
                    weapons: s.weapons().to_vec(),
                })
                .collect(),
            history: self.history.clone(),
        }
    }

    // === Internals ===

    fn require_in_progress(&self) -> Result<()> {
        match self.phase {
            GamePhase::InProgress => Ok(()),
            _ => Err(ClueError::GameNotInProgress),
        }
    }

    fn require_known(&self, player: PlayerId) -> Result<()> {
        self.player(player).map(|_| ())
    }

    /// Game running, `player` is the current player and no disproof is
    /// pending.
    fn require_turn(&self, player: PlayerId) -> Result<()> {
        self.require_in_progress()?;
        self.require_known(player)?;
        if self.current_turn()?.player() != player {
            return Err(ClueError::NotYourTurn(player));
        }
        if let Some(pollee) = self.awaiting_disproof() {
            return Err(ClueError::DisproofPending(pollee));
        }
        Ok(())
    }

    /// `require_turn`, and the player is still in the game.
    fn require_actor(&self, player: PlayerId) -> Result<()> {
        self.require_turn(player)?;
        if self.players[player.index()].eliminated {
            return Err(ClueError::PreconditionUnmet(format!(
                "{player} has been eliminated"
            )));
        }
        Ok(())
    }

    /// Enter `GameOver` and close the open turn.
    fn finish(&mut self) {
        self.phase = GamePhase::GameOver;
        if let Some(turn) = self.turn.as_mut() {
            turn.complete();
        }
    }

    fn current_turn(&self) -> Result<&PlayerTurn> {
        self.turn.as_ref().ok_or(ClueError::GameNotInProgress)
    }

    fn current_turn_mut(&mut self) -> Result<&mut PlayerTurn> {
        self.turn.as_mut().ok_or(ClueError::GameNotInProgress)
    }

    /// Store a poll that is still waiting, or log and drop a finished one.
    fn settle_poll(&mut self, poll: DisproofPoll) -> SuggestionProgress {
        match poll.state() {
            DisproofState::Polling(pollee) => {
                self.disproof = Some(poll);
                SuggestionProgress::AwaitingDisproof { pollee }
            }
            DisproofState::Resolved(disproof) => {
                match disproof {
                    Some(d) => tracing::debug!("{} disproved the suggestion", d.by),
                    None => tracing::debug!("no one could disprove the suggestion"),
                }
                self.record_disproof(poll.suggester(), disproof.map(|d| d.by));
                SuggestionProgress::Resolved(disproof)
            }
        }
    }

    fn record_disproof(&mut self, suggester: PlayerId, by: Option<PlayerId>) {
        let turn = self.turn.as_ref().map_or(0, PlayerTurn::number);
        self.history.push_back(ActionRecord::new(
            suggester,
            turn,
            ActionSummary::Disproved { by },
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::TurnPhase;

    fn lobby(count: usize) -> GameProcessor {
        let mut game = GameProcessor::new(GameConfig::new(11)).unwrap();
        for (i, name) in SUSPECTS.iter().take(count).enumerate() {
            game.register_player_as(format!("p{i}"), name).unwrap();
        }
        game
    }

    fn started(count: usize) -> GameProcessor {
        let mut game = lobby(count);
        game.start().unwrap();
        game
    }

    fn room(game: &GameProcessor, name: &str) -> SpaceId {
        game.board().room_named(name).unwrap()
    }

    #[test]
    fn test_registration_limits() {
        let mut game = lobby(6);
        assert_eq!(game.register_player("late"), Err(ClueError::GameFull(6)));

        let mut game = lobby(1);
        assert_eq!(
            game.register_player_as("dup", "Miss Scarlet"),
            Err(ClueError::CharacterTaken("Miss Scarlet".into()))
        );
        assert!(matches!(
            game.register_player_as("x", "Rope"),
            Err(ClueError::InvalidCard { .. })
        ));
        assert_eq!(
            game.start(),
            Err(ClueError::NotEnoughPlayers {
                required: 3,
                registered: 1
            })
        );
        assert_eq!(game.phase(), GamePhase::WaitingForPlayers);
    }

    #[test]
    fn test_random_characters_are_distinct() {
        let mut game = GameProcessor::new(GameConfig::new(3)).unwrap();
        for i in 0..6 {
            game.register_player(format!("p{i}")).unwrap();
        }
        let mut characters: Vec<_> = game.players().iter().map(Player::character).collect();
        characters.sort();
        characters.dedup();
        assert_eq!(characters.len(), 6);
    }

    #[test]
    fn test_players_start_in_home_hallways() {
        let game = lobby(3);
        for p in game.players() {
            let home = game.board().home_space(p.character()).unwrap();
            assert_eq!(p.location(), home);
            assert_eq!(game.board().space(home).unwrap().occupants(), &[p.id()]);
        }
    }

    #[test]
    fn test_start_deals_everything() {
        let mut game = started(4);
        let dealt: usize = game.players().iter().map(|p| p.hand().len()).sum();
        assert_eq!(dealt, 18);
        assert!(game.deck.is_empty());
        // 18 cards over 4 seats: seats 0 and 1 get the extras.
        let sizes: Vec<_> = game.players().iter().map(|p| p.hand().len()).collect();
        assert_eq!(sizes, vec![5, 5, 4, 4]);

        let weapons: usize = game.board().spaces().map(|s| s.weapons().len()).sum();
        assert_eq!(weapons, 6);
        assert!(game.board().spaces().all(|s| s.weapons().len() <= 1));

        assert_eq!(game.current_player(), Some(PlayerId::new(0)));
        assert_eq!(game.start(), Err(ClueError::GameAlreadyStarted));
        assert_eq!(game.clone().register_player("late"), Err(ClueError::GameAlreadyStarted));
    }

    #[test]
    fn test_move_into_room_allows_suggestion() {
        let mut game = started(3);
        let p0 = PlayerId::new(0);
        let lounge = room(&game, "Lounge");

        let outcome = game.submit_move(p0, lounge).unwrap();
        assert!(outcome.entered_room);
        assert_eq!(game.player(p0).unwrap().location(), lounge);
        assert_eq!(
            game.legal_actions(p0),
            vec![ActionKind::Suggestion, ActionKind::Accusation]
        );
        assert!(matches!(
            game.submit_move(p0, room(&game, "Hall")),
            Err(ClueError::PreconditionUnmet(_))
        ));
    }

    #[test]
    fn test_illegal_move_changes_nothing() {
        let mut game = started(3);
        let before = game.game_snapshot();
        assert!(matches!(
            game.submit_move(PlayerId::new(0), room(&game, "Kitchen")),
            Err(ClueError::IllegalMove(_))
        ));
        assert!(matches!(
            game.submit_move(PlayerId::new(0), SpaceId::new(200)),
            Err(ClueError::UnknownSpace(200))
        ));
        assert_eq!(game.game_snapshot(), before);
    }

    #[test]
    fn test_suggestion_requires_room_entry() {
        let mut game = started(3);
        assert!(matches!(
            game.submit_suggestion(PlayerId::new(0), "Mr. Green", "Rope"),
            Err(ClueError::PreconditionUnmet(_))
        ));
    }

    #[test]
    fn test_suggestion_summons_suspect_and_weapon() {
        let mut game = started(3);
        let p0 = PlayerId::new(0);
        let lounge = room(&game, "Lounge");
        game.submit_move(p0, lounge).unwrap();

        assert!(matches!(
            game.submit_suggestion(p0, "Mr. Nobody", "Rope"),
            Err(ClueError::InvalidSuggestion(_))
        ));

        // Seat 2 plays Mrs. White.
        let p2 = PlayerId::new(2);
        let white_home = game.player(p2).unwrap().location();
        game.submit_suggestion(p0, "Mrs. White", "Rope").unwrap();
        let white = game.player(p2).unwrap();
        assert_eq!(white.location(), lounge);
        assert_eq!(white.previous_location(), Some(white_home));
        assert!(white.was_summoned());
        assert!(game.board().space(white_home).unwrap().occupants().is_empty());
        let occupants = game.board().space(lounge).unwrap().occupants();
        assert!(occupants.contains(&p0) && occupants.contains(&p2));
        assert_eq!(
            game.board().weapon_location(Card::weapon("Rope").unwrap()),
            Some(lounge)
        );
    }

    #[test]
    fn test_summoned_player_may_suggest_next_turn() {
        let mut game = started(3);
        let p0 = PlayerId::new(0);
        game.submit_move(p0, room(&game, "Lounge")).unwrap();
        // Seat 1 plays Colonel Mustard.
        game.submit_suggestion(p0, "Colonel Mustard", "Rope").unwrap();
        while game.awaiting_disproof().is_some() {
            game.force_no_disproof().unwrap();
        }

        let next = game.end_turn(p0).unwrap().unwrap();
        assert_eq!(next.player(), PlayerId::new(1));
        assert!(next.entered_room());
        assert!(!game.player(PlayerId::new(1)).unwrap().was_summoned());
        assert_eq!(game.legal_actions(PlayerId::new(1))[0], ActionKind::Suggestion);
    }

    #[test]
    fn test_summoned_player_loses_suggestion_on_leaving_room() {
        let mut game = started(3);
        let (p0, p1) = (PlayerId::new(0), PlayerId::new(1));
        let lounge = room(&game, "Lounge");
        let mustard_home = game.player(p1).unwrap().location();
        game.submit_move(p0, lounge).unwrap();
        game.submit_suggestion(p0, "Colonel Mustard", "Rope").unwrap();
        while game.awaiting_disproof().is_some() {
            game.force_no_disproof().unwrap();
        }
        game.end_turn(p0).unwrap();

        // Back out to the hallway Mustard started in.
        let outcome = game.submit_move(p1, mustard_home).unwrap();
        assert_eq!(outcome.from, lounge);
        assert!(!outcome.entered_room);
        assert!(game.turn().unwrap().entered_room());

        assert_eq!(game.legal_actions(p1), vec![ActionKind::Accusation]);
        assert_eq!(
            game.submit_suggestion(p1, "Mr. Green", "Rope"),
            Err(ClueError::PreconditionUnmet(
                "suggestions are made from a room".into()
            ))
        );
    }

    #[test]
    fn test_disproof_blocks_other_actions() {
        let mut game = started(3);
        let p0 = PlayerId::new(0);
        game.submit_move(p0, room(&game, "Lounge")).unwrap();

        // Suggest two cards p0 does not hold so someone else must.
        let hand = game.hand(p0).unwrap().clone();
        let suspect = Card::all_of(Category::Suspect).find(|c| !hand.has(*c)).unwrap();
        let weapon = Card::all_of(Category::Weapon).find(|c| !hand.has(*c)).unwrap();
        let progress = game
            .submit_suggestion(p0, suspect.name(), weapon.name())
            .unwrap();

        if let SuggestionProgress::AwaitingDisproof { pollee } = progress {
            assert!(game.legal_actions(p0).is_empty());
            assert_eq!(game.end_turn(p0), Err(ClueError::DisproofPending(pollee)));
            assert_eq!(
                game.submit_accusation(p0, "Mr. Green", "Rope", "Hall"),
                Err(ClueError::DisproofPending(pollee))
            );

            let card = game.disproof_options(pollee).unwrap()[0];
            let resolution = game.respond_to_disproof(pollee, card).unwrap();
            assert_eq!(resolution.suggester, p0);
            assert_eq!(resolution.disproof.by, pollee);
            assert_eq!(game.awaiting_disproof(), None);
        }
        assert!(game.end_turn(p0).unwrap().is_some());
    }

    #[test]
    fn test_wrong_accusation_does_not_end_turn() {
        let mut game = started(4);
        let p0 = PlayerId::new(0);
        let [s, w, r] = game.case_file.unwrap().reveal();
        let wrong_room = Card::all_of(Category::Room).find(|c| *c != r).unwrap();

        let outcome = game
            .submit_accusation(p0, s.name(), w.name(), wrong_room.name())
            .unwrap();
        assert_eq!(outcome, AccusationOutcome::Eliminated { game_over: false });
        assert_eq!(game.current_player(), Some(p0));
        assert!(game.legal_actions(p0).is_empty());
        assert!(matches!(
            game.submit_move(p0, room(&game, "Lounge")),
            Err(ClueError::PreconditionUnmet(_))
        ));

        let next = game.end_turn(p0).unwrap().unwrap();
        assert_eq!(next.player(), PlayerId::new(1));
    }

    #[test]
    fn test_correct_accusation_wins() {
        let mut game = started(3);
        let p0 = PlayerId::new(0);
        assert_eq!(game.revealed_solution(), None);
        let [s, w, r] = game.case_file.unwrap().reveal();

        let outcome = game.submit_accusation(p0, s.name(), w.name(), r.name()).unwrap();
        assert_eq!(outcome, AccusationOutcome::Win);
        assert_eq!(game.phase(), GamePhase::GameOver);
        assert_eq!(game.winner(), Some(p0));
        assert_eq!(game.revealed_solution(), Some([s, w, r]));
        assert_eq!(game.turn().map(PlayerTurn::phase), Some(TurnPhase::Completed));
        assert_eq!(game.end_turn(p0), Ok(None));
        assert_eq!(game.current_player(), None);
    }

    #[test]
    fn test_only_one_accusation() {
        let mut game = GameProcessor::new(GameConfig::new(5).with_min_active_players(1)).unwrap();
        for name in ["Miss Scarlet", "Colonel Mustard", "Mrs. White"] {
            game.register_player_as(name, name).unwrap();
        }
        game.start().unwrap();
        let p0 = PlayerId::new(0);
        let [s, w, r] = game.case_file.unwrap().reveal();
        let wrong = Card::all_of(Category::Suspect).find(|c| *c != s).unwrap();

        game.submit_accusation(p0, wrong.name(), w.name(), r.name()).unwrap();
        assert_eq!(
            game.submit_accusation(p0, s.name(), w.name(), r.name()),
            Err(ClueError::AlreadyAccused(p0))
        );
    }

    #[test]
    fn test_not_your_turn() {
        let mut game = started(3);
        let p1 = PlayerId::new(1);
        assert_eq!(game.end_turn(p1), Err(ClueError::NotYourTurn(p1)));
        assert_eq!(
            game.submit_accusation(p1, "Mr. Green", "Rope", "Hall"),
            Err(ClueError::NotYourTurn(p1))
        );
        assert!(game.legal_actions(p1).is_empty());
        assert_eq!(
            game.end_turn(PlayerId::new(9)),
            Err(ClueError::UnknownPlayer(PlayerId::new(9)))
        );
    }

    #[test]
    fn test_actions_before_start() {
        let mut game = lobby(3);
        let p0 = PlayerId::new(0);
        assert!(game.legal_actions(p0).is_empty());
        assert_eq!(game.end_turn(p0), Err(ClueError::GameNotInProgress));
        assert_eq!(game.force_no_disproof(), Err(ClueError::GameNotInProgress));
    }

    #[test]
    fn test_submit_dispatches() {
        let mut game = started(3);
        let p0 = PlayerId::new(0);
        let lounge = room(&game, "Lounge");
        let outcome = game
            .submit(p0, Action::Move { destination: lounge })
            .unwrap();
        assert!(matches!(outcome, ActionOutcome::Moved(m) if m.to == lounge));
    }
}
