//! The board graph.
//!
//! `Board` owns every `Space` in an arena and enforces the structural rules:
//!
//! - adjacency is symmetric
//! - a hallway connects exactly two rooms and never another hallway
//! - a hallway holds at most one player
//! - only corner rooms carry secret passages, at most one each
//!
//! Every mutating method checks its preconditions before touching the arena,
//! so a failed call leaves the board unchanged.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::space::{Space, SpaceId, SpaceKind};
use crate::cards::{Card, Category};
use crate::core::{ClueError, PlayerId, Result};

/// Candidate destinations from one space (at most four neighbours plus a
/// passage on the classic board).
pub type Destinations = SmallVec<[SpaceId; 5]>;

/// Board graph with occupancy.
#[derive(Clone, Debug, Default)]
pub struct Board {
    spaces: Vec<Space>,
    rooms: FxHashMap<Card, SpaceId>,
    /// Hallways keyed by their (smaller, larger) room pair.
    hallways: FxHashMap<(SpaceId, SpaceId), SpaceId>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Construction ===

    /// Add a room. `corner` rooms may later receive a secret passage.
    pub fn add_room(&mut self, room: Card, corner: bool) -> Result<SpaceId> {
        if room.category() != Category::Room {
            return Err(ClueError::InvalidTopology(format!("{room} is not a room")));
        }
        if self.rooms.contains_key(&room) {
            return Err(ClueError::InvalidTopology(format!("{room} is already on the board")));
        }
        let kind = if corner { SpaceKind::CornerRoom } else { SpaceKind::Room };
        let id = self.push_space(kind, Some(room));
        self.rooms.insert(room, id);
        Ok(id)
    }

    /// Add the hallway connecting rooms `a` and `b`.
    pub fn add_hallway(&mut self, a: SpaceId, b: SpaceId) -> Result<SpaceId> {
        let key = Self::pair_key(a, b);
        if self.hallways.contains_key(&key) {
            return Err(ClueError::InvalidTopology(format!(
                "hallway between {} and {} already exists",
                self.name_of(a),
                self.name_of(b)
            )));
        }
        if a == b || !self.space(a)?.is_room() || !self.space(b)?.is_room() {
            return Err(ClueError::InvalidTopology(
                "a hallway must join two distinct rooms".to_string(),
            ));
        }

        let id = self.push_space(SpaceKind::Hallway, None);
        // Both edges are valid for a fresh hallway.
        self.add_adjacent(id, a)?;
        self.add_adjacent(id, b)?;
        self.hallways.insert(key, id);
        Ok(id)
    }

    /// Add a symmetric adjacency edge between `a` and `b`.
    ///
    /// Exactly one endpoint must be a hallway, and that hallway may not gain
    /// a third neighbour. Re-adding an existing edge is a no-op.
    pub fn add_adjacent(&mut self, a: SpaceId, b: SpaceId) -> Result<()> {
        let (sa, sb) = (self.space(a)?, self.space(b)?);
        if a == b {
            return Err(ClueError::InvalidTopology("a space cannot neighbour itself".to_string()));
        }
        if sa.adjacent.contains(&b) {
            return Ok(());
        }
        match (sa.is_hallway(), sb.is_hallway()) {
            (true, true) => {
                return Err(ClueError::InvalidTopology(
                    "hallways cannot neighbour hallways".to_string(),
                ));
            }
            (false, false) => {
                return Err(ClueError::InvalidTopology(format!(
                    "{} and {} must be joined by a hallway",
                    self.name_of(a),
                    self.name_of(b)
                )));
            }
            _ => {}
        }
        let hallway = if sa.is_hallway() { sa } else { sb };
        if hallway.adjacent.len() >= 2 {
            return Err(ClueError::InvalidTopology(
                "a hallway connects exactly two rooms".to_string(),
            ));
        }

        self.spaces[a.index()].adjacent.push(b);
        self.spaces[b.index()].adjacent.push(a);
        Ok(())
    }

    /// Add a symmetric secret passage between two corner rooms.
    pub fn add_secret_passage(&mut self, a: SpaceId, b: SpaceId) -> Result<()> {
        let (sa, sb) = (self.space(a)?, self.space(b)?);
        if a == b || sa.kind != SpaceKind::CornerRoom || sb.kind != SpaceKind::CornerRoom {
            return Err(ClueError::InvalidTopology(
                "secret passages join two distinct corner rooms".to_string(),
            ));
        }
        for (space, other) in [(sa, b), (sb, a)] {
            if let Some(existing) = space.secret_passage {
                if existing != other {
                    return Err(ClueError::InvalidTopology(format!(
                        "{} already has a secret passage",
                        self.name_of(space.id)
                    )));
                }
            }
        }

        self.spaces[a.index()].secret_passage = Some(b);
        self.spaces[b.index()].secret_passage = Some(a);
        Ok(())
    }

    /// Check that every hallway joins exactly two rooms.
    pub fn validate(&self) -> Result<()> {
        for space in self.spaces.iter().filter(|s| s.is_hallway()) {
            let rooms = space
                .adjacent
                .iter()
                .filter(|&&n| self.spaces[n.index()].is_room())
                .count();
            if space.adjacent.len() != 2 || rooms != 2 {
                return Err(ClueError::InvalidTopology(format!(
                    "{} has {} neighbours",
                    self.name_of(space.id),
                    space.adjacent.len()
                )));
            }
        }
        Ok(())
    }

    // === Occupancy ===

    /// Place a player on a space. Hallways admit one player at a time.
    pub fn occupy(&mut self, id: SpaceId, player: PlayerId) -> Result<()> {
        let space = self.space(id)?;
        if space.occupants.contains(&player) {
            return Ok(());
        }
        if space.is_blocked() {
            return Err(ClueError::SpaceOccupied(self.name_of(id)));
        }
        self.spaces[id.index()].occupants.push(player);
        Ok(())
    }

    /// Remove a player from a space. Returns false if they were not there.
    pub fn vacate(&mut self, id: SpaceId, player: PlayerId) -> bool {
        let Some(space) = self.spaces.get_mut(id.index()) else {
            return false;
        };
        match space.occupants.iter().position(|&p| p == player) {
            Some(pos) => {
                space.occupants.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Spaces reachable in one move: neighbours plus any secret passage,
    /// excluding hallways that already hold a player.
    #[must_use]
    pub fn valid_destinations(&self, id: SpaceId) -> Destinations {
        let Some(space) = self.get(id) else {
            return Destinations::new();
        };
        space
            .adjacent
            .iter()
            .copied()
            .chain(space.secret_passage)
            .filter(|&dest| !self.spaces[dest.index()].is_blocked())
            .collect()
    }

    // === Weapons ===

    /// Put a weapon token in a room, taking it from wherever it was.
    pub fn place_weapon(&mut self, weapon: Card, room: SpaceId) -> Result<()> {
        if weapon.category() != Category::Weapon {
            return Err(ClueError::InvalidCard {
                name: weapon.name().to_string(),
                category: Category::Weapon.to_string(),
            });
        }
        if !self.space(room)?.is_room() {
            return Err(ClueError::InvalidTopology(format!(
                "weapons can only be placed in rooms, not {}",
                self.name_of(room)
            )));
        }
        if let Some(from) = self.weapon_location(weapon) {
            self.spaces[from.index()].weapons.retain(|w| *w != weapon);
        }
        self.spaces[room.index()].weapons.push(weapon);
        Ok(())
    }

    /// Room currently holding a weapon token.
    #[must_use]
    pub fn weapon_location(&self, weapon: Card) -> Option<SpaceId> {
        self.spaces
            .iter()
            .find(|s| s.weapons.contains(&weapon))
            .map(|s| s.id)
    }

    // === Lookup ===

    /// Get a space, failing for ids from another board.
    pub fn space(&self, id: SpaceId) -> Result<&Space> {
        self.get(id).ok_or(ClueError::UnknownSpace(id.0))
    }

    /// Get a space if it exists.
    #[must_use]
    pub fn get(&self, id: SpaceId) -> Option<&Space> {
        self.spaces.get(id.index())
    }

    /// All spaces in arena order.
    pub fn spaces(&self) -> impl Iterator<Item = &Space> {
        self.spaces.iter()
    }

    /// Number of spaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    /// Check if the board has no spaces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    /// Space for a room card.
    #[must_use]
    pub fn room(&self, room: Card) -> Option<SpaceId> {
        self.rooms.get(&room).copied()
    }

    /// Space for a room name.
    #[must_use]
    pub fn room_named(&self, name: &str) -> Option<SpaceId> {
        Card::room(name).ok().and_then(|card| self.room(card))
    }

    /// Hallway joining two rooms, in either order.
    #[must_use]
    pub fn hallway_between(&self, a: SpaceId, b: SpaceId) -> Option<SpaceId> {
        self.hallways.get(&Self::pair_key(a, b)).copied()
    }

    /// Human-readable name: the room name, or "A-B hallway".
    #[must_use]
    pub fn name_of(&self, id: SpaceId) -> String {
        let Some(space) = self.get(id) else {
            return id.to_string();
        };
        if let Some(room) = space.room {
            return room.name().to_string();
        }
        let ends: Vec<_> = space
            .adjacent
            .iter()
            .filter_map(|&n| self.get(n).and_then(Space::room))
            .map(|c| c.name())
            .collect();
        format!("{} hallway", ends.join("-"))
    }

    fn push_space(&mut self, kind: SpaceKind, room: Option<Card>) -> SpaceId {
        let id = SpaceId(self.spaces.len() as u8);
        self.spaces.push(Space::new(id, kind, room));
        id
    }

    fn pair_key(a: SpaceId, b: SpaceId) -> (SpaceId, SpaceId) {
        if a <= b { (a, b) } else { (b, a) }
    }
}
