//! Engine - applies commands to an owned deck and reports events.
//!
//! This is the single-owner front end used by the binaries and the
//! randomized tests. The deck itself never logs; the engine traces each
//! command at debug level.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;
use tracing::debug;

use crate::arena::CardId;
use crate::command::{Command, Direction, OutputEvent, RejectReason};
use crate::deck::Deck;

/// Owns a deck and processes commands against it.
pub struct Engine {
    /// The underlying deck
    pub deck: Deck,
}

impl Engine {
    /// Create an engine around an empty deck with room for `capacity` cards.
    pub fn new(capacity: u32) -> Self {
        Self {
            deck: Deck::with_capacity(capacity),
        }
    }

    /// Seed the deck with `0..count`, so `count - 1` ends up on top.
    /// Counts beyond `CardId::MAX` stop at the largest representable id.
    pub fn seed(&mut self, count: u32) {
        debug!(count, "seeding deck");
        self.deck.extend((0..count).map_while(|i| CardId::try_from(i).ok()));
    }

    /// Process a single command and return its outcome.
    #[inline]
    pub fn process_command(&mut self, cmd: Command) -> OutputEvent {
        let event = match cmd {
            Command::Add(id) => {
                self.deck.add(id);
                OutputEvent::Added {
                    id,
                    len: self.deck.len(),
                }
            }
            Command::Remove => match self.deck.remove() {
                Some(id) => OutputEvent::Removed { id },
                None => Self::rejected(cmd),
            },
            Command::Rotate(direction) => {
                let rotated = match direction {
                    Direction::BottomToTop => self.deck.bottom_to_top(),
                    Direction::TopToBottom => self.deck.top_to_bottom(),
                };
                if rotated {
                    OutputEvent::Rotated { direction }
                } else {
                    Self::rejected(cmd)
                }
            }
        };
        debug!(?cmd, ?event, len = self.deck.len(), "processed command");
        event
    }

    /// Remove every card, returning the ids in the order they came off.
    pub fn drain(&mut self) -> Vec<CardId> {
        let mut removed = Vec::with_capacity(self.deck.len());
        while let Some(id) = self.deck.remove() {
            removed.push(id);
        }
        removed
    }

    /// Number of cards in the deck.
    #[inline]
    pub fn card_count(&self) -> usize {
        self.deck.len()
    }

    /// Hash of the deck's full top-to-bottom order.
    pub fn state_hash(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.deck.len().hash(&mut hasher);
        for (_, id) in self.deck.iter() {
            id.hash(&mut hasher);
        }
        hasher.finish()
    }

    fn rejected(command: Command) -> OutputEvent {
        OutputEvent::Rejected {
            command,
            reason: RejectReason::Empty,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(0)
    }
}
