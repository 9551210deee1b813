//! The hidden solution.

use serde::{Deserialize, Serialize};

use super::card::{Card, Category};
use super::collection::Deck;
use crate::core::{ClueError, Result};

/// One suspect, one weapon and one room withdrawn from the deck at setup.
///
/// Game logic may only ask whether a triple equals the case file. The cards
/// themselves are readable through [`CaseFile::reveal`], which the processor
/// only calls once the game is over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseFile {
    suspect: Card,
    weapon: Card,
    room: Card,
}

impl CaseFile {
    /// Withdraw the first suspect, weapon and room (bottom up) from a
    /// shuffled deck.
    pub fn withdraw(deck: &mut Deck) -> Result<Self> {
        let first = |category: Category| {
            deck.cards()
                .iter()
                .copied()
                .find(|c| c.category() == category)
                .ok_or_else(|| ClueError::CardNotFound(format!("any {category}")))
        };
        let (suspect, weapon, room) = (
            first(Category::Suspect)?,
            first(Category::Weapon)?,
            first(Category::Room)?,
        );

        deck.remove(suspect)?;
        deck.remove(weapon)?;
        deck.remove(room)?;
        Ok(Self { suspect, weapon, room })
    }

    /// Whether the triple is exactly the solution.
    #[must_use]
    pub fn matches(&self, suspect: Card, weapon: Card, room: Card) -> bool {
        self.suspect == suspect && self.weapon == weapon && self.room == room
    }

    /// Whether a card is part of the solution.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.suspect == card || self.weapon == card || self.room == card
    }

    /// The solution as (suspect, weapon, room).
    #[must_use]
    pub fn reveal(&self) -> [Card; 3] {
        [self.suspect, self.weapon, self.room]
    }
}
