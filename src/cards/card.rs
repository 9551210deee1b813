//! Card identity and vocabulary.
//!
//! A `Card` is a (category, name) pair where the name must come from the
//! fixed vocabulary of its category. Cards are `Copy` and carry only an index
//! into the vocabulary, so they can be hashed, sorted and compared cheaply.
//!
//! Ordering is by category first (Suspect < Weapon < Room) and by name within
//! a category.

use serde::{Deserialize, Serialize};

use crate::core::{ClueError, Result};

/// The six suspects. Each doubles as a playable character.
pub const SUSPECTS: [&str; 6] = [
    "Miss Scarlet",
    "Colonel Mustard",
    "Mrs. White",
    "Mr. Green",
    "Mrs. Peacock",
    "Professor Plum",
];

/// The six weapons.
pub const WEAPONS: [&str; 6] = [
    "Candlestick",
    "Dagger",
    "Lead Pipe",
    "Revolver",
    "Rope",
    "Wrench",
];

/// The nine rooms, listed row by row across the board.
pub const ROOMS: [&str; 9] = [
    "Study",
    "Hall",
    "Lounge",
    "Library",
    "Billiard Room",
    "Dining Room",
    "Conservatory",
    "Ballroom",
    "Kitchen",
];

/// Total number of cards in a full deck.
pub const DECK_SIZE: usize = SUSPECTS.len() + WEAPONS.len() + ROOMS.len();

/// Card category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Suspect,
    Weapon,
    Room,
}

impl Category {
    /// All categories in ordering order.
    pub const ALL: [Category; 3] = [Category::Suspect, Category::Weapon, Category::Room];

    /// The fixed vocabulary for this category.
    #[must_use]
    pub const fn vocabulary(self) -> &'static [&'static str] {
        match self {
            Category::Suspect => &SUSPECTS,
            Category::Weapon => &WEAPONS,
            Category::Room => &ROOMS,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Category::Suspect => "suspect",
            Category::Weapon => "weapon",
            Category::Room => "room",
        };
        f.write_str(label)
    }
}

/// An immutable card.
///
/// ```
/// use clueless_engine::cards::{Card, Category};
///
/// let rope = Card::new("Rope", Category::Weapon).unwrap();
/// assert_eq!(rope.name(), "Rope");
/// assert!(Card::new("Spoon", Category::Weapon).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CardRepr", into = "CardRepr")]
pub struct Card {
    category: Category,
    index: u8,
}

impl Card {
    /// Create a card, validating the name against the category vocabulary.
    pub fn new(name: &str, category: Category) -> Result<Self> {
        category
            .vocabulary()
            .iter()
            .position(|&n| n == name)
            .map(|i| Self {
                category,
                index: i as u8,
            })
            .ok_or_else(|| ClueError::InvalidCard {
                name: name.to_string(),
                category: category.to_string(),
            })
    }

    /// Create a suspect card.
    pub fn suspect(name: &str) -> Result<Self> {
        Self::new(name, Category::Suspect)
    }

    /// Create a weapon card.
    pub fn weapon(name: &str) -> Result<Self> {
        Self::new(name, Category::Weapon)
    }

    /// Create a room card.
    pub fn room(name: &str) -> Result<Self> {
        Self::new(name, Category::Room)
    }

    /// Every card of one category, in vocabulary order.
    pub fn all_of(category: Category) -> impl Iterator<Item = Card> {
        (0..category.vocabulary().len()).map(move |i| Card {
            category,
            index: i as u8,
        })
    }

    /// All 21 cards: suspects, then weapons, then rooms.
    pub fn all() -> impl Iterator<Item = Card> {
        Category::ALL.into_iter().flat_map(Card::all_of)
    }

    /// Card name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.category.vocabulary()[self.index as usize]
    }

    /// Card category.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| self.name().cmp(other.name()))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Debug for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({:?}, {:?})", self.category, self.name())
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Serialized form: names on the wire, validated on the way back in.
#[derive(Serialize, Deserialize)]
struct CardRepr {
    name: String,
    category: Category,
}

impl From<Card> for CardRepr {
    fn from(card: Card) -> Self {
        Self {
            name: card.name().to_string(),
            category: card.category,
        }
    }
}

impl TryFrom<CardRepr> for Card {
    type Error = ClueError;

    fn try_from(repr: CardRepr) -> Result<Self> {
        Card::new(&repr.name, repr.category)
    }
}
