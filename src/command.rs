//! Command and Event types for driving a deck.
//!
//! Commands are the structural mutations a caller can request.
//! Events report what each command did.

use crate::arena::CardId;

/// Rotation direction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    /// Bottom card moves to the top
    BottomToTop = 0,
    /// Top card moves to the bottom
    TopToBottom = 1,
}

impl Direction {
    /// Returns the rotation that undoes this one
    #[inline]
    pub const fn inverse(self) -> Self {
        match self {
            Direction::BottomToTop => Direction::TopToBottom,
            Direction::TopToBottom => Direction::BottomToTop,
        }
    }
}

// ============================================================================
// Input Commands
// ============================================================================

/// A mutation to apply to the deck
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Put a new card on top
    Add(CardId),
    /// Take the top card off
    Remove,
    /// Move one card between the ends
    Rotate(Direction),
}

// ============================================================================
// Output Events
// ============================================================================

/// Why a command left the deck untouched
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum RejectReason {
    /// The deck had no cards
    Empty = 0,
}

/// Outcome of a single command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputEvent {
    /// A card was placed on top; `len` is the new deck size
    Added { id: CardId, len: usize },
    /// The top card was taken off
    Removed { id: CardId },
    /// The deck was rotated (a one-card deck rotates in place)
    Rotated { direction: Direction },
    /// Nothing changed
    Rejected { command: Command, reason: RejectReason },
}
