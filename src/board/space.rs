//! Board spaces: rooms, corner rooms and hallways.
//!
//! Spaces live in the `Board`'s arena and are addressed by `SpaceId`.
//! Neighbours and occupants are stored as ids, never as owning references:
//! a space knows *which* players stand on it, the processor owns the players.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::PlayerId;

/// Arena index of a space on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SpaceId(pub u8);

impl SpaceId {
    /// Create a new space ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for SpaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Space({})", self.0)
    }
}

/// Space variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpaceKind {
    /// A room. Any number of occupants.
    Room,
    /// A room in a board corner. May have a secret passage.
    CornerRoom,
    /// A connector between exactly two rooms. At most one occupant.
    Hallway,
}

impl SpaceKind {
    /// Rooms and corner rooms.
    #[must_use]
    pub const fn is_room(self) -> bool {
        matches!(self, SpaceKind::Room | SpaceKind::CornerRoom)
    }
}

/// One node of the board graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    pub(crate) id: SpaceId,
    pub(crate) kind: SpaceKind,
    /// Room card for rooms; `None` for hallways.
    pub(crate) room: Option<Card>,
    pub(crate) adjacent: SmallVec<[SpaceId; 4]>,
    pub(crate) secret_passage: Option<SpaceId>,
    pub(crate) occupants: SmallVec<[PlayerId; 6]>,
    /// Weapon tokens lying in this room.
    pub(crate) weapons: SmallVec<[Card; 6]>,
}

impl Space {
    pub(crate) fn new(id: SpaceId, kind: SpaceKind, room: Option<Card>) -> Self {
        Self {
            id,
            kind,
            room,
            adjacent: SmallVec::new(),
            secret_passage: None,
            occupants: SmallVec::new(),
            weapons: SmallVec::new(),
        }
    }

    /// Arena id.
    #[must_use]
    pub fn id(&self) -> SpaceId {
        self.id
    }

    /// Variant.
    #[must_use]
    pub fn kind(&self) -> SpaceKind {
        self.kind
    }

    /// Room card, for rooms and corner rooms.
    #[must_use]
    pub fn room(&self) -> Option<Card> {
        self.room
    }

    /// Rooms and corner rooms.
    #[must_use]
    pub fn is_room(&self) -> bool {
        self.kind.is_room()
    }

    /// Hallways.
    #[must_use]
    pub fn is_hallway(&self) -> bool {
        self.kind == SpaceKind::Hallway
    }

    /// Neighbours through adjacency (not including secret passages).
    #[must_use]
    pub fn adjacent(&self) -> &[SpaceId] {
        &self.adjacent
    }

    /// Secret passage destination, if any.
    #[must_use]
    pub fn secret_passage(&self) -> Option<SpaceId> {
        self.secret_passage
    }

    /// Players currently on this space.
    #[must_use]
    pub fn occupants(&self) -> &[PlayerId] {
        &self.occupants
    }

    /// A hallway with someone in it.
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.is_hallway() && !self.occupants.is_empty()
    }

    /// Weapon tokens in this room.
    #[must_use]
    pub fn weapons(&self) -> &[Card] {
        &self.weapons
    }
}
