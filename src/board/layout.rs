//! The classic board layout.
//!
//! ```text
//!   Study ------- Hall ------- Lounge
//!     |            |             |
//!   Library -- Billiard Room -- Dining Room
//!     |            |             |
//!   Conservatory - Ballroom --- Kitchen
//! ```
//!
//! Every `-` / `|` run is a hallway. Study and Kitchen share a secret
//! passage, as do Lounge and Conservatory. Each character starts in its
//! home hallway on the board's edge.

use super::graph::Board;
use super::space::SpaceId;
use crate::cards::{Card, ROOMS};
use crate::core::{ClueError, Result};

/// Rooms that sit in the board's corners.
const CORNER_ROOMS: [&str; 4] = ["Study", "Lounge", "Conservatory", "Kitchen"];

/// Hallways as room-name pairs: six horizontal, then six vertical.
const HALLWAYS: [(&str, &str); 12] = [
    ("Study", "Hall"),
    ("Hall", "Lounge"),
    ("Library", "Billiard Room"),
    ("Billiard Room", "Dining Room"),
    ("Conservatory", "Ballroom"),
    ("Ballroom", "Kitchen"),
    ("Study", "Library"),
    ("Library", "Conservatory"),
    ("Hall", "Billiard Room"),
    ("Billiard Room", "Ballroom"),
    ("Lounge", "Dining Room"),
    ("Dining Room", "Kitchen"),
];

/// Secret passages between corner rooms.
const SECRET_PASSAGES: [(&str, &str); 2] = [("Study", "Kitchen"), ("Lounge", "Conservatory")];

/// Each character's starting hallway.
const HOME_HALLWAYS: [(&str, (&str, &str)); 6] = [
    ("Miss Scarlet", ("Hall", "Lounge")),
    ("Colonel Mustard", ("Lounge", "Dining Room")),
    ("Mrs. White", ("Ballroom", "Kitchen")),
    ("Mr. Green", ("Conservatory", "Ballroom")),
    ("Mrs. Peacock", ("Library", "Conservatory")),
    ("Professor Plum", ("Study", "Library")),
];

impl Board {
    /// Build the classic nine-room board.
    pub fn classic() -> Result<Self> {
        let mut board = Board::new();

        for name in ROOMS {
            let card = Card::room(name)?;
            board.add_room(card, CORNER_ROOMS.contains(&name))?;
        }
        for (a, b) in HALLWAYS {
            let (a, b) = (board.require_room(a)?, board.require_room(b)?);
            board.add_hallway(a, b)?;
        }
        for (a, b) in SECRET_PASSAGES {
            let (a, b) = (board.require_room(a)?, board.require_room(b)?);
            board.add_secret_passage(a, b)?;
        }

        board.validate()?;
        Ok(board)
    }

    /// Starting hallway for a character (a suspect card).
    pub fn home_space(&self, character: Card) -> Result<SpaceId> {
        let (_, (a, b)) = HOME_HALLWAYS
            .iter()
            .find(|(name, _)| *name == character.name())
            .ok_or_else(|| ClueError::InvalidCard {
                name: character.name().to_string(),
                category: "suspect".to_string(),
            })?;
        let (a, b) = (self.require_room(a)?, self.require_room(b)?);
        self.hallway_between(a, b).ok_or_else(|| {
            ClueError::InvalidTopology(format!("no home hallway for {character}"))
        })
    }

    fn require_room(&self, name: &str) -> Result<SpaceId> {
        self.room_named(name)
            .ok_or_else(|| ClueError::InvalidTopology(format!("{name} is not on the board")))
    }
}
