//! # Content Window
//!
//! The registry of which slots currently hold logical items: the inclusive
//! `[first, last]` index window and every quantity derived from it.
//!
//! A window is owned by exactly one capacity strategy, which is the only
//! code allowed to mutate it. The storage keeps its own copy of the same
//! bounds; the strategy updates both together so they never diverge.

/// Inclusive `[first, last]` slot window holding the logical items.
///
/// Invariant: `first <= last`. An empty storage has no window at all
/// (`Option<ContentWindow>`), never a degenerate one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentWindow {
    /// First slot holding an item (inclusive)
    first: usize,

    /// Last slot holding an item (inclusive)
    last: usize,
}

impl ContentWindow {
    /// Create a window spanning `[first, last]`.
    ///
    /// # Panics
    ///
    /// Panics if `first > last`; an empty window is represented as
    /// `None`, not as an inverted range.
    pub fn new(first: usize, last: usize) -> Self {
        assert!(first <= last, "inverted item window: [{}, {}]", first, last);

        Self { first, last }
    }

    /// First slot holding an item (inclusive)
    pub fn first(&self) -> usize {
        self.first
    }

    /// Last slot holding an item (inclusive)
    pub fn last(&self) -> usize {
        self.last
    }

    /// Number of items in the window
    pub fn len(&self) -> usize {
        self.last - self.first + 1
    }

    /// Free slots before the first item
    pub fn head_capacity(&self) -> usize {
        self.first
    }

    /// Free slots after the last item, given the total slot count
    pub fn tail_capacity(&self, capacity: usize) -> usize {
        capacity - self.last - 1
    }

    /// True if `index` lies inside the window
    pub fn contains(&self, index: usize) -> bool {
        self.first <= index && index <= self.last
    }

    /// Window translated right by `offset`, same length
    pub fn shifted_right(&self, offset: usize) -> Self {
        Self {
            first: self.first + offset,
            last: self.last + offset,
        }
    }

    /// Window with the same length starting at `first`
    pub fn moved_to(&self, first: usize) -> Self {
        Self {
            first,
            last: first + self.len() - 1,
        }
    }

    /// Window with `last` advanced by `extra` slots
    pub fn extended_by(&self, extra: usize) -> Self {
        Self {
            first: self.first,
            last: self.last + extra,
        }
    }
}
