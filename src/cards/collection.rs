//! Ordered collections of unique cards: `Deck` and `Hand`.
//!
//! Both reject duplicate insertion with `DuplicateCard`. Together with the
//! case file they account for all 21 cards of a game, so a duplicate can only
//! come from a dealing bug and is reported as an integrity violation.
//!
//! The deck's top is the end of the vec; `deal` pops from there.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{Card, DECK_SIZE};
use crate::core::{ClueError, GameRng, Result};

/// Ordered, duplicate-free card storage shared by `Deck` and `Hand`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
struct CardPile {
    cards: SmallVec<[Card; DECK_SIZE]>,
}

impl CardPile {
    fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    fn push(&mut self, card: Card) -> Result<()> {
        if self.contains(card) {
            return Err(ClueError::DuplicateCard(card.name().to_string()));
        }
        self.cards.push(card);
        Ok(())
    }

    fn remove(&mut self, card: Card) -> Result<()> {
        let pos = self
            .cards
            .iter()
            .position(|&c| c == card)
            .ok_or_else(|| ClueError::CardNotFound(card.name().to_string()))?;
        self.cards.remove(pos);
        Ok(())
    }
}

/// A deck of cards.
///
/// ```
/// use clueless_engine::cards::Deck;
/// use clueless_engine::core::GameRng;
///
/// let mut deck = Deck::standard();
/// deck.shuffle(&mut GameRng::new(1));
///
/// let mut dealt = 0;
/// while deck.deal().is_some() {
///     dealt += 1;
/// }
/// assert_eq!(dealt, 21);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pile: CardPile,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the canonical 21-card deck, unshuffled.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            pile: CardPile {
                cards: Card::all().collect(),
            },
        }
    }

    /// Add a card to the top of the deck.
    pub fn add(&mut self, card: Card) -> Result<()> {
        self.pile.push(card)
    }

    /// Remove a specific card from anywhere in the deck.
    pub fn remove(&mut self, card: Card) -> Result<()> {
        self.pile.remove(card)
    }

    /// Check whether the deck holds a card.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.pile.contains(card)
    }

    /// Shuffle the deck in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.pile.cards);
    }

    /// Remove and return the top card, or `None` when empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.pile.cards.pop()
    }

    /// Cards from bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.pile.cards
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pile.cards.len()
    }

    /// Check if the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pile.cards.is_empty()
    }
}

/// A player's private hand.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    pile: CardPile,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether the hand holds a card.
    #[must_use]
    pub fn has(&self, card: Card) -> bool {
        self.pile.contains(card)
    }

    /// Add a card. Fails with `DuplicateCard` if already held.
    pub fn add(&mut self, card: Card) -> Result<()> {
        self.pile.push(card)
    }

    /// Remove a card. Fails with `CardNotFound` if not held.
    pub fn remove(&mut self, card: Card) -> Result<()> {
        self.pile.remove(card)
    }

    /// Drop every card.
    pub fn clear(&mut self) {
        self.pile.cards.clear();
    }

    /// Sort by category, then name.
    pub fn sort(&mut self) {
        self.pile.cards.sort();
    }

    /// Cards held, in insertion (or sorted) order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.pile.cards
    }

    /// The held cards that appear in `wanted`, in hand order.
    #[must_use]
    pub fn matching(&self, wanted: &[Card]) -> SmallVec<[Card; 3]> {
        self.pile
            .cards
            .iter()
            .copied()
            .filter(|c| wanted.contains(c))
            .collect()
    }

    /// Number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pile.cards.len()
    }

    /// Check if the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pile.cards.is_empty()
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<_> = self.pile.cards.iter().map(Card::name).collect();
        f.write_str(&names.join(", "))
    }
}
