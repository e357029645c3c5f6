//! # Linked Deck
//!
//! A deck of integer-identified cards kept as a singly linked chain
//! inside an index arena.
//!
//! ## Design Principles
//!
//! - **Single Owner**: The deck owns every node; no shared references
//! - **O(1) Top Access**: Add and remove work on the head of the chain
//! - **Allocation-Free Rotation**: Moving a card between the ends
//!   rewrites link indices only
//! - **No Recursion**: Bottom-to-top traversal uses an explicit stack
//!
//! ## Layout
//!
//! ```text
//! top --> [id|next] --> [id|next] --> ... --> [id|NULL]   (bottom)
//!           \_______________ Arena slots _______________/
//! ```

pub mod arena;
pub mod command;
pub mod deck;
pub mod engine;
pub mod error;
pub mod script;

// Re-exports for convenience
pub use arena::{Arena, ArenaIndex, CardId, CardNode, MAX_RESERVE, NULL_INDEX};
pub use command::{Command, Direction, OutputEvent, RejectReason};
pub use deck::Deck;
pub use engine::Engine;
pub use error::DeckError;
pub use script::{parse_capacity, parse_count, read_script, run_script, Step};
