//! Arena - slab storage for card nodes addressed by 32-bit indices.
//!
//! Nodes live in one contiguous `Vec`. Released slots are threaded onto
//! a free list through their `next` field and handed out again before
//! the arena grows, so a deck that churns cards settles into a fixed
//! footprint.

use std::fmt;

/// Sentinel value marking the end of a chain (like nullptr)
pub const NULL_INDEX: u32 = u32::MAX;

/// Type alias for arena indices - our "compressed pointers"
pub type ArenaIndex = u32;

/// Identifier carried by a card. Duplicates are allowed.
pub type CardId = i32;

/// Largest up-front reservation an arena makes (128 MiB of nodes).
/// Bigger capacity requests are treated as this hint; the arena still
/// grows past it on demand.
pub const MAX_RESERVE: u32 = 1 << 24;

/// A single card in the deck - exactly 8 bytes.
///
/// | Field | Type | Offset | Size |
/// |-------|------|--------|------|
/// | id    | i32  | 0      | 4    |
/// | next  | u32  | 4      | 4    |
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CardNode {
    /// The card's identifier
    pub id: CardId,

    /// Index of the card beneath this one, `NULL_INDEX` at the bottom.
    /// While the slot is free this links the free list instead.
    pub next: ArenaIndex,
}

const _: () = assert!(
    std::mem::size_of::<CardNode>() == 8,
    "CardNode must stay 8 bytes"
);

impl CardNode {
    /// Create an unlinked node carrying `id`
    #[inline]
    pub const fn new(id: CardId) -> Self {
        Self { id, next: NULL_INDEX }
    }
}

impl fmt::Debug for CardNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardNode")
            .field("id", &self.id)
            .field("next", &self.next)
            .finish()
    }
}

/// Growable node pool with O(1) allocation and release.
pub struct Arena {
    /// Every slot ever handed out, live or free
    nodes: Vec<CardNode>,

    /// Head of the free list (most recently freed slot)
    free_head: ArenaIndex,

    /// Number of live nodes
    allocated_count: u32,
}

impl Arena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty arena with room for `capacity` nodes before the
    /// backing storage has to reallocate, reserving at most `MAX_RESERVE`.
    pub fn with_capacity(capacity: u32) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity.min(MAX_RESERVE) as usize),
            free_head: NULL_INDEX,
            allocated_count: 0,
        }
    }

    /// Store a new unlinked node carrying `id` and return its index.
    ///
    /// # Panics
    /// Panics if the 32-bit index space is exhausted.
    ///
    /// # Complexity
    /// O(1) - pops the free list, or amortized O(1) push when it is empty
    #[inline]
    pub fn alloc(&mut self, id: CardId) -> ArenaIndex {
        let index = if self.free_head != NULL_INDEX {
            let index = self.free_head;
            self.free_head = self.nodes[index as usize].next;
            self.nodes[index as usize] = CardNode::new(id);
            index
        } else {
            let index = self.nodes.len();
            assert!(index < NULL_INDEX as usize, "Arena index space exhausted");
            self.nodes.push(CardNode::new(id));
            index as ArenaIndex
        };
        self.allocated_count += 1;
        index
    }

    /// Release a node back to the arena and return the id it carried.
    ///
    /// The caller must ensure the index is live: it was returned by
    /// `alloc` and has not been freed since.
    ///
    /// # Complexity
    /// O(1) - pushes to head of free list
    #[inline]
    pub fn free(&mut self, index: ArenaIndex) -> CardId {
        debug_assert!((index as usize) < self.nodes.len(), "Index out of bounds");
        debug_assert!(self.allocated_count > 0, "Double free detected");

        let node = &mut self.nodes[index as usize];
        let id = node.id;
        node.id = 0;
        node.next = self.free_head;
        self.free_head = index;
        self.allocated_count -= 1;
        id
    }

    /// Get an immutable reference to a node.
    #[inline]
    pub fn get(&self, index: ArenaIndex) -> &CardNode {
        debug_assert!((index as usize) < self.nodes.len(), "Index out of bounds");
        &self.nodes[index as usize]
    }

    /// Get a mutable reference to a node.
    #[inline]
    pub fn get_mut(&mut self, index: ArenaIndex) -> &mut CardNode {
        debug_assert!((index as usize) < self.nodes.len(), "Index out of bounds");
        &mut self.nodes[index as usize]
    }

    /// Returns the number of live nodes.
    #[inline]
    pub fn allocated(&self) -> u32 {
        self.allocated_count
    }

    /// Returns how many nodes fit before the backing storage reallocates.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Returns true if no node is live.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.allocated_count == 0
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Arena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("slots", &self.nodes.len())
            .field("allocated", &self.allocated_count)
            .field("free_head", &self.free_head)
            .finish()
    }
}
