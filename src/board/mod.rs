//! Board graph: rooms, corner rooms, hallways and secret passages.
//!
//! ## Key Types
//!
//! - `SpaceId`: arena index of a space
//! - `Space`: one node, with its neighbours, occupants and weapon tokens
//! - `Board`: the graph, its structural rules and occupancy
//!
//! `Board::classic()` builds the standard nine-room layout.

pub mod graph;
pub mod layout;
pub mod space;

pub use graph::{Board, Destinations};
pub use space::{Space, SpaceId, SpaceKind};
