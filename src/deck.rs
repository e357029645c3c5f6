//! Deck - a singly linked stack of cards threaded through an arena.
//!
//! Insertion and removal happen at the top in O(1). Rotations walk the
//! chain once to find the bottom and then rewrite at most three link
//! fields; no node is allocated or released while rotating.

use std::fmt;
use std::io::{self, Write};

use crate::arena::{Arena, ArenaIndex, CardId, NULL_INDEX};

/// An ordered deck of cards with a distinguished top.
///
/// The chain always runs from `top` to a node whose `next` is
/// `NULL_INDEX`; it is never circular. Dropping the deck releases every
/// remaining card with the arena.
pub struct Deck {
    arena: Arena,
    /// Index of the topmost card, `NULL_INDEX` when empty
    top: ArenaIndex,
    len: u32,
}

impl Deck {
    /// Create an empty deck
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty deck with room for `capacity` cards
    pub fn with_capacity(capacity: u32) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            top: NULL_INDEX,
            len: 0,
        }
    }

    /// Number of cards in the deck
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.top == NULL_INDEX
    }

    /// Place a new card carrying `id` on top of the deck.
    ///
    /// # Complexity
    /// O(1)
    #[inline]
    pub fn add(&mut self, id: CardId) {
        let index = self.arena.alloc(id);
        self.arena.get_mut(index).next = self.top;
        self.top = index;
        self.len += 1;
    }

    /// Take the top card off the deck and return its id.
    ///
    /// Returns `None` when the deck is empty; calling again stays `None`.
    ///
    /// # Complexity
    /// O(1)
    #[inline]
    pub fn remove(&mut self) -> Option<CardId> {
        if self.top == NULL_INDEX {
            return None;
        }

        let index = self.top;
        self.top = self.arena.get(index).next;
        self.len -= 1;
        Some(self.arena.free(index))
    }

    /// Move the bottom card to the top, keeping the order of the rest.
    ///
    /// Returns `false` on an empty deck, `true` otherwise. A single card
    /// is left where it is.
    ///
    /// # Complexity
    /// O(n) to find the second-to-last card, O(1) to relink
    pub fn bottom_to_top(&mut self) -> bool {
        if self.top == NULL_INDEX {
            return false;
        }

        let mut prev = self.top;
        let mut last = self.arena.get(prev).next;
        if last == NULL_INDEX {
            return true;
        }

        loop {
            let next = self.arena.get(last).next;
            if next == NULL_INDEX {
                break;
            }
            prev = last;
            last = next;
        }

        self.arena.get_mut(prev).next = NULL_INDEX;
        self.arena.get_mut(last).next = self.top;
        self.top = last;
        true
    }

    /// Move the top card to the bottom, keeping the order of the rest.
    ///
    /// Same return contract as [`Deck::bottom_to_top`]; the two are
    /// inverses of each other.
    ///
    /// # Complexity
    /// O(n) to find the bottom card, O(1) to relink
    pub fn top_to_bottom(&mut self) -> bool {
        if self.top == NULL_INDEX {
            return false;
        }

        let old_top = self.top;
        let second = self.arena.get(old_top).next;
        if second == NULL_INDEX {
            return true;
        }

        let mut last = second;
        loop {
            let next = self.arena.get(last).next;
            if next == NULL_INDEX {
                break;
            }
            last = next;
        }

        self.arena.get_mut(last).next = old_top;
        self.arena.get_mut(old_top).next = NULL_INDEX;
        self.top = second;
        true
    }

    /// Walk the deck from top to bottom, yielding `(ordinal, id)` with
    /// ordinals starting at 1.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            arena: &self.arena,
            cursor: self.top,
            ordinal: 0,
            remaining: self.len as usize,
        }
    }

    /// Walk the deck from bottom to top, yielding `(ordinal, id)` with
    /// ordinals starting at 1 from the bottom.
    ///
    /// Ids are stacked on the heap during one forward pass, so deep decks
    /// cost memory rather than call-stack depth.
    pub fn iter_rev(&self) -> RevIter {
        let mut stack = Vec::with_capacity(self.len());
        stack.extend(self.iter().map(|(_, id)| id));
        RevIter { stack, ordinal: 0 }
    }

    /// Write `"<ordinal>: <id>"` lines from top to bottom.
    pub fn print_top_to_bottom<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        for (ordinal, id) in self.iter() {
            writeln!(out, "{}: {}", ordinal, id)?;
        }
        Ok(())
    }

    /// Write `"<ordinal>: <id>"` lines from bottom to top.
    pub fn print_bottom_to_top<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        for (ordinal, id) in self.iter_rev() {
            writeln!(out, "{}: {}", ordinal, id)?;
        }
        Ok(())
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter().map(|(_, id)| id)).finish()
    }
}

/// Each id becomes the new top, so the last item ends up on top.
impl Extend<CardId> for Deck {
    fn extend<I: IntoIterator<Item = CardId>>(&mut self, iter: I) {
        for id in iter {
            self.add(id);
        }
    }
}

impl FromIterator<CardId> for Deck {
    fn from_iter<I: IntoIterator<Item = CardId>>(iter: I) -> Self {
        let mut deck = Deck::new();
        deck.extend(iter);
        deck
    }
}

/// Top-to-bottom traversal, see [`Deck::iter`].
pub struct Iter<'a> {
    arena: &'a Arena,
    cursor: ArenaIndex,
    ordinal: usize,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = (usize, CardId);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == NULL_INDEX {
            return None;
        }
        let node = self.arena.get(self.cursor);
        self.cursor = node.next;
        self.ordinal += 1;
        self.remaining -= 1;
        Some((self.ordinal, node.id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

/// Bottom-to-top traversal, see [`Deck::iter_rev`].
pub struct RevIter {
    stack: Vec<CardId>,
    ordinal: usize,
}

impl Iterator for RevIter {
    type Item = (usize, CardId);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.ordinal += 1;
        Some((self.ordinal, id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), Some(self.stack.len()))
    }
}

impl ExactSizeIterator for RevIter {}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(deck: &Deck) -> Vec<CardId> {
        deck.iter().map(|(_, id)| id).collect()
    }

    fn rev_ids(deck: &Deck) -> Vec<CardId> {
        deck.iter_rev().map(|(_, id)| id).collect()
    }

    /// Build a deck whose top-to-bottom order is `order`
    fn deck_of(order: &[CardId]) -> Deck {
        order.iter().rev().copied().collect()
    }

    #[test]
    fn test_empty_deck() {
        let deck = Deck::new();
        assert!(deck.is_empty());
        assert_eq!(deck.len(), 0);
        assert_eq!(deck.iter().count(), 0);
        assert_eq!(deck.iter_rev().count(), 0);
    }

    #[test]
    fn test_add_places_on_top() {
        let mut deck = Deck::new();
        deck.add(0);
        deck.add(1);
        deck.add(2);

        assert_eq!(deck.len(), 3);
        assert_eq!(ids(&deck), vec![2, 1, 0]);
    }

    #[test]
    fn test_duplicates_allowed() {
        let deck = deck_of(&[5, 5, 5]);
        assert_eq!(deck.len(), 3);
        assert_eq!(ids(&deck), vec![5, 5, 5]);
    }

    #[test]
    fn test_remove_drains_in_reverse_insertion_order() {
        let mut deck: Deck = (0..4).collect();

        assert_eq!(deck.remove(), Some(3));
        assert_eq!(deck.remove(), Some(2));
        assert_eq!(deck.remove(), Some(1));
        assert_eq!(deck.remove(), Some(0));
        assert_eq!(deck.remove(), None);
        assert_eq!(deck.remove(), None);
        assert!(deck.is_empty());
    }

    #[test]
    fn test_remove_reuses_slots() {
        let mut deck: Deck = (0..3).collect();
        deck.remove();
        deck.add(9);

        assert_eq!(deck.arena.allocated(), 3);
        assert_eq!(ids(&deck), vec![9, 1, 0]);
    }

    #[test]
    fn test_rotate_empty() {
        let mut deck = Deck::new();
        assert!(!deck.bottom_to_top());
        assert!(!deck.top_to_bottom());
        assert!(deck.is_empty());
    }

    #[test]
    fn test_rotate_single() {
        let mut deck = deck_of(&[7]);
        assert!(deck.bottom_to_top());
        assert_eq!(ids(&deck), vec![7]);
        assert!(deck.top_to_bottom());
        assert_eq!(ids(&deck), vec![7]);
    }

    #[test]
    fn test_rotate_two() {
        let mut deck = deck_of(&[1, 2]);
        assert!(deck.bottom_to_top());
        assert_eq!(ids(&deck), vec![2, 1]);
        assert!(deck.top_to_bottom());
        assert_eq!(ids(&deck), vec![1, 2]);
        assert!(deck.top_to_bottom());
        assert_eq!(ids(&deck), vec![2, 1]);
    }

    #[test]
    fn test_bottom_to_top() {
        let mut deck = deck_of(&[1, 2, 3]);

        assert!(deck.bottom_to_top());
        assert_eq!(ids(&deck), vec![3, 1, 2]);

        assert!(deck.bottom_to_top());
        assert_eq!(ids(&deck), vec![2, 3, 1]);
    }

    #[test]
    fn test_top_to_bottom() {
        let mut deck = deck_of(&[1, 2, 3]);

        assert!(deck.top_to_bottom());
        assert_eq!(ids(&deck), vec![2, 3, 1]);

        // Inverse of bottom_to_top
        assert!(deck.bottom_to_top());
        assert_eq!(ids(&deck), vec![1, 2, 3]);
    }

    #[test]
    fn test_rotation_keeps_chain_open() {
        let mut deck = deck_of(&[1, 2, 3, 4]);
        for _ in 0..5 {
            deck.bottom_to_top();
            deck.top_to_bottom();
            deck.top_to_bottom();
        }
        // A cycle would make the walk run past len
        assert_eq!(deck.iter().count(), 4);
        assert_eq!(deck.len(), 4);
    }

    #[test]
    fn test_full_rotation_restores_order() {
        let order = [4, 8, 15, 16, 23, 42];
        let mut deck = deck_of(&order);
        for _ in 0..order.len() {
            deck.bottom_to_top();
        }
        assert_eq!(ids(&deck), order);
    }

    #[test]
    fn test_iter_rev_mirrors_iter() {
        let deck = deck_of(&[3, 1, 4, 1, 5]);

        let mut forward = ids(&deck);
        forward.reverse();
        assert_eq!(rev_ids(&deck), forward);

        let ordinals: Vec<usize> = deck.iter_rev().map(|(n, _)| n).collect();
        assert_eq!(ordinals, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_iter_is_exact_size() {
        let deck = deck_of(&[1, 2, 3]);
        let mut iter = deck.iter();
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
        assert_eq!(deck.iter_rev().len(), 3);
    }

    #[test]
    fn test_print_top_to_bottom() {
        let deck = deck_of(&[2, 1, 0]);
        let mut out = Vec::new();
        deck.print_top_to_bottom(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1: 2\n2: 1\n3: 0\n");
    }

    #[test]
    fn test_print_bottom_to_top() {
        let deck = deck_of(&[2, 1, 0]);
        let mut out = Vec::new();
        deck.print_bottom_to_top(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1: 0\n2: 1\n3: 2\n");
    }

    #[test]
    fn test_print_empty_writes_nothing() {
        let deck = Deck::new();
        let mut out = Vec::new();
        deck.print_top_to_bottom(&mut out).unwrap();
        deck.print_bottom_to_top(&mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_debug_lists_top_first() {
        let deck = deck_of(&[3, -1]);
        assert_eq!(format!("{:?}", deck), "[3, -1]");
    }
}
