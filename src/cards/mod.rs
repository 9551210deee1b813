//! Card system: card identity, decks, hands and the case file.
//!
//! ## Key Types
//!
//! - `Card`: an immutable (category, name) pair from a fixed vocabulary
//! - `Category`: Suspect, Weapon or Room
//! - `Deck`: shuffleable, dealable card stack
//! - `Hand`: a player's private cards
//! - `CaseFile`: the hidden solution, comparable but not readable

pub mod card;
pub mod case_file;
pub mod collection;

pub use card::{Card, Category, DECK_SIZE, ROOMS, SUSPECTS, WEAPONS};
pub use case_file::CaseFile;
pub use collection::{Deck, Hand};
