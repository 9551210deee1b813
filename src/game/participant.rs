//! Per-participant state.

use crate::board::SpaceId;
use crate::cards::{Card, Hand};
use crate::core::PlayerId;

/// A registered player.
///
/// The player refers to its position by `SpaceId`; the board records the
/// matching occupancy. Both `eliminated` and `has_accused` only ever go from
/// false to true.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub(crate) id: PlayerId,
    pub(crate) name: String,
    pub(crate) character: Card,
    pub(crate) hand: Hand,
    pub(crate) location: SpaceId,
    pub(crate) previous: Option<SpaceId>,
    pub(crate) eliminated: bool,
    pub(crate) has_accused: bool,
    /// Moved into a room by someone else's suggestion since their last turn.
    pub(crate) summoned: bool,
}

impl Player {
    pub(crate) fn new(id: PlayerId, name: String, character: Card, location: SpaceId) -> Self {
        Self {
            id,
            name,
            character,
            hand: Hand::new(),
            location,
            previous: None,
            eliminated: false,
            has_accused: false,
            summoned: false,
        }
    }

    /// Seat id.
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Display name supplied at registration.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Character (a suspect card).
    #[must_use]
    pub fn character(&self) -> Card {
        self.character
    }

    /// Private hand.
    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Current space.
    #[must_use]
    pub fn location(&self) -> SpaceId {
        self.location
    }

    /// Space occupied before the last move, if any.
    #[must_use]
    pub fn previous_location(&self) -> Option<SpaceId> {
        self.previous
    }

    /// Whether a failed accusation knocked this player out.
    #[must_use]
    pub fn is_eliminated(&self) -> bool {
        self.eliminated
    }

    /// Whether this player has used their accusation.
    #[must_use]
    pub fn has_accused(&self) -> bool {
        self.has_accused
    }

    /// Whether this player was moved by a suggestion since their last turn.
    #[must_use]
    pub fn was_summoned(&self) -> bool {
        self.summoned
    }

    pub(crate) fn relocate(&mut self, to: SpaceId) {
        self.previous = Some(self.location);
        self.location = to;
    }
}
