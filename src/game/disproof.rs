//! Suggestion disproof protocol.
//!
//! After a suggestion, the other players are polled one at a time in seat
//! order starting after the suggester. Eliminated players are skipped. A
//! polled player holding none of the three cards is passed over at once; a
//! player holding at least one must choose which card to show, so the poll
//! suspends in `Polling(pollee)` until `respond` (or `pass`, when the
//! transport gives up on them) is called. The poll ends `Resolved` with the
//! shown card, or with nothing once every eligible seat has been visited.
//!
//! Nothing here blocks: each call performs the steps it can and returns.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::participant::Player;
use crate::cards::Card;
use crate::core::{ClueError, PlayerId, Result};

/// A card shown to disprove a suggestion. Only ever given to the suggester.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Disproof {
    /// Who showed the card.
    pub by: PlayerId,
    /// The card shown.
    pub card: Card,
}

/// Where the poll stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisproofState {
    /// Waiting for this player to pick a card.
    Polling(PlayerId),
    /// Finished: the shown card, or `None` if nobody could disprove.
    Resolved(Option<Disproof>),
}

/// In-flight disproof poll for one suggestion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisproofPoll {
    suggester: PlayerId,
    cards: [Card; 3],
    /// Seats still to poll, next first.
    remaining: SmallVec<[PlayerId; 5]>,
    /// Seats polled so far, in order.
    visited: SmallVec<[PlayerId; 5]>,
    state: DisproofState,
    auto_reveal_single_match: bool,
}

impl DisproofPoll {
    /// Start polling for a suggestion of `cards` (suspect, weapon, room) by
    /// `suggester`, and run until the first player who must choose.
    pub fn start(
        suggester: PlayerId,
        cards: [Card; 3],
        players: &[Player],
        auto_reveal_single_match: bool,
    ) -> Self {
        let remaining = suggester
            .seats_after(players.len())
            .filter(|p| !players[p.index()].is_eliminated())
            .collect();
        let mut poll = Self {
            suggester,
            cards,
            remaining,
            visited: SmallVec::new(),
            state: DisproofState::Resolved(None),
            auto_reveal_single_match,
        };
        poll.advance(players);
        poll
    }

    /// Suggesting player.
    #[must_use]
    pub fn suggester(&self) -> PlayerId {
        self.suggester
    }

    /// Suggested cards: suspect, weapon, room.
    #[must_use]
    pub fn cards(&self) -> &[Card; 3] {
        &self.cards
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> DisproofState {
        self.state
    }

    /// Player being waited on, if any.
    #[must_use]
    pub fn pollee(&self) -> Option<PlayerId> {
        match self.state {
            DisproofState::Polling(p) => Some(p),
            DisproofState::Resolved(_) => None,
        }
    }

    /// Seats polled so far, in order.
    #[must_use]
    pub fn visited(&self) -> &[PlayerId] {
        &self.visited
    }

    /// Whether the poll has finished.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self.state, DisproofState::Resolved(_))
    }

    /// Cards the current pollee may show.
    pub fn options(&self, players: &[Player]) -> Result<SmallVec<[Card; 3]>> {
        let pollee = self.pollee().ok_or(ClueError::NoDisproofPending)?;
        Ok(players[pollee.index()].hand().matching(&self.cards))
    }

    /// The current pollee shows `card`.
    ///
    /// Fails without changing state if `responder` is not the pollee or the
    /// card is not one they hold among the suggested three.
    pub fn respond(
        &mut self,
        responder: PlayerId,
        card: Card,
        players: &[Player],
    ) -> Result<Disproof> {
        let pollee = self.pollee().ok_or(ClueError::NoDisproofPending)?;
        if responder != pollee {
            return Err(ClueError::NotYourTurn(responder));
        }
        if !self.cards.contains(&card) || !players[pollee.index()].hand().has(card) {
            return Err(ClueError::InvalidDisproof(card.name().to_string()));
        }

        let disproof = Disproof { by: pollee, card };
        self.state = DisproofState::Resolved(Some(disproof));
        Ok(disproof)
    }

    /// Treat the current pollee as offering nothing and keep polling.
    pub fn pass(&mut self, players: &[Player]) -> Result<DisproofState> {
        let pollee = self.pollee().ok_or(ClueError::NoDisproofPending)?;
        tracing::debug!("{} offered no card; continuing disproof poll", pollee);
        self.advance(players);
        Ok(self.state)
    }

    fn advance(&mut self, players: &[Player]) {
        while !self.remaining.is_empty() {
            let next = self.remaining.remove(0);
            self.visited.push(next);

            let matches = players[next.index()].hand().matching(&self.cards);
            match matches.len() {
                0 => continue,
                1 if self.auto_reveal_single_match => {
                    self.state = DisproofState::Resolved(Some(Disproof {
                        by: next,
                        card: matches[0],
                    }));
                    return;
                }
                _ => {
                    tracing::debug!("awaiting disproof from {}", next);
                    self.state = DisproofState::Polling(next);
                    return;
                }
            }
        }
        self.state = DisproofState::Resolved(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::SpaceId;
    use crate::cards::SUSPECTS;

    fn card(name: &str) -> Card {
        Card::suspect(name)
            .or_else(|_| Card::weapon(name))
            .or_else(|_| Card::room(name))
            .unwrap()
    }

    fn players(hands: &[&[&str]]) -> Vec<Player> {
        hands
            .iter()
            .enumerate()
            .map(|(i, names)| {
                let mut p = Player::new(
                    PlayerId::new(i as u8),
                    format!("p{i}"),
                    Card::suspect(SUSPECTS[i]).unwrap(),
                    SpaceId::new(0),
                );
                for name in *names {
                    p.hand.add(card(name)).unwrap();
                }
                p
            })
            .collect()
    }

    fn suggestion() -> [Card; 3] {
        [card("Mr. Green"), card("Rope"), card("Kitchen")]
    }

    #[test]
    fn test_stops_at_first_holder() {
        let roster = players(&[&[], &["Dagger"], &["Rope"], &["Kitchen"]]);
        let poll = DisproofPoll::start(PlayerId::new(0), suggestion(), &roster, false);

        assert_eq!(poll.state(), DisproofState::Polling(PlayerId::new(2)));
        assert_eq!(poll.visited(), &[PlayerId::new(1), PlayerId::new(2)]);
    }

    #[test]
    fn test_wraps_past_last_seat() {
        let roster = players(&[&["Rope"], &[], &[], &[]]);
        let poll = DisproofPoll::start(PlayerId::new(2), suggestion(), &roster, false);

        assert_eq!(poll.pollee(), Some(PlayerId::new(0)));
        assert_eq!(poll.visited(), &[PlayerId::new(3), PlayerId::new(0)]);
    }

    #[test]
    fn test_nobody_can_disprove() {
        let roster = players(&[&["Rope"], &["Dagger"], &["Hall"]]);
        let poll = DisproofPoll::start(PlayerId::new(0), suggestion(), &roster, false);

        // The suggester's own cards never count.
        assert_eq!(poll.state(), DisproofState::Resolved(None));
        assert_eq!(poll.visited(), &[PlayerId::new(1), PlayerId::new(2)]);
    }

    #[test]
    fn test_eliminated_players_are_skipped() {
        let mut roster = players(&[&[], &["Rope"], &["Kitchen"]]);
        roster[1].eliminated = true;
        let poll = DisproofPoll::start(PlayerId::new(0), suggestion(), &roster, false);

        assert_eq!(poll.pollee(), Some(PlayerId::new(2)));
        assert_eq!(poll.visited(), &[PlayerId::new(2)]);
    }

    #[test]
    fn test_pollee_chooses_among_matches() {
        let roster = players(&[&[], &["Rope", "Kitchen", "Hall"], &[]]);
        let mut poll = DisproofPoll::start(PlayerId::new(0), suggestion(), &roster, false);

        let options = poll.options(&roster).unwrap();
        assert_eq!(options.as_slice(), &[card("Rope"), card("Kitchen")]);

        // Holding a card that was not suggested is no disproof.
        assert_eq!(
            poll.respond(PlayerId::new(1), card("Hall"), &roster),
            Err(ClueError::InvalidDisproof("Hall".into()))
        );
        // Only the pollee may answer.
        assert_eq!(
            poll.respond(PlayerId::new(2), card("Rope"), &roster),
            Err(ClueError::NotYourTurn(PlayerId::new(2)))
        );
        assert_eq!(poll.pollee(), Some(PlayerId::new(1)));

        let shown = poll.respond(PlayerId::new(1), card("Kitchen"), &roster).unwrap();
        assert_eq!(shown, Disproof { by: PlayerId::new(1), card: card("Kitchen") });
        assert!(poll.is_resolved());
        assert_eq!(
            poll.respond(PlayerId::new(1), card("Rope"), &roster),
            Err(ClueError::NoDisproofPending)
        );
    }

    #[test]
    fn test_auto_reveal_single_match() {
        let roster = players(&[&[], &["Rope"], &["Kitchen", "Mr. Green"]]);
        let poll = DisproofPoll::start(PlayerId::new(0), suggestion(), &roster, true);
        assert_eq!(
            poll.state(),
            DisproofState::Resolved(Some(Disproof { by: PlayerId::new(1), card: card("Rope") }))
        );

        // Two matches still need a choice.
        let roster = players(&[&[], &[], &["Kitchen", "Mr. Green"]]);
        let poll = DisproofPoll::start(PlayerId::new(0), suggestion(), &roster, true);
        assert_eq!(poll.pollee(), Some(PlayerId::new(2)));
    }

    #[test]
    fn test_pass_moves_to_next_holder() {
        let roster = players(&[&[], &["Rope"], &[], &["Kitchen"]]);
        let mut poll = DisproofPoll::start(PlayerId::new(0), suggestion(), &roster, false);
        assert_eq!(poll.pollee(), Some(PlayerId::new(1)));

        assert_eq!(poll.pass(&roster).unwrap(), DisproofState::Polling(PlayerId::new(3)));
        assert_eq!(poll.pass(&roster).unwrap(), DisproofState::Resolved(None));
        assert_eq!(poll.pass(&roster), Err(ClueError::NoDisproofPending));
        assert_eq!(
            poll.visited(),
            &[PlayerId::new(1), PlayerId::new(2), PlayerId::new(3)]
        );
    }
}
