//! Player identification and seat rotation.
//!
//! ## PlayerId
//!
//! A player's id is their seat: the 0-based position in join order.
//! Seats never change after registration, so the id doubles as the
//! turn-order key.
//!
//! ## Rotation
//!
//! Both turn rotation and disproof polling walk the seats after a given
//! player, wrapping around exactly once. `PlayerId::seats_after` provides
//! that walk.

use serde::{Deserialize, Serialize};

/// Player identifier (seat index in join order).
///
/// Player indices are 0-based: the first player to register is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over every other seat, starting with the one after `self`
    /// and wrapping around. `self` is not yielded.
    ///
    /// ```
    /// use clueless_engine::core::PlayerId;
    ///
    /// let order: Vec<_> = PlayerId::new(2).seats_after(4).collect();
    /// assert_eq!(order, vec![PlayerId::new(3), PlayerId::new(0), PlayerId::new(1)]);
    /// ```
    pub fn seats_after(self, player_count: usize) -> impl Iterator<Item = PlayerId> {
        let start = self.index();
        (1..player_count).map(move |offset| PlayerId(((start + offset) % player_count) as u8))
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}
