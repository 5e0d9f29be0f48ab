//! # Minimal Capacity Strategy
//!
//! The engine wiring a storage adapter to the content-window registry.
//!
//! For each head, tail, or split capacity request it decides whether the
//! current storage suffices and, if not, issues exactly one relocation call
//! to the storage with the block-move descriptors that satisfy the request.
//! The policy is *minimal*: every reallocation grows to exactly the
//! capacity needed, never more. A geometric-growth strategy would implement
//! the same capability traits with a different sizing rule.
//!
//! All validation happens before the first mutating storage call, so a
//! failed request leaves the storage bit-for-bit unchanged.

use std::marker::PhantomData;

use crate::adapters::storage::LinearStorage;
use crate::core::{BlockMove, ContentWindow};
use crate::ports::{
    CapacityError, CapacityKind, CapacityResult, HeadCapacity, IndexedStorage, SplitCapacity,
    StorageResult, TailCapacity,
};

/// Reject negative partial-capacity requests, naming the request kind.
fn validate_partial_capacity(kind: CapacityKind, requested: isize) -> CapacityResult<usize> {
    usize::try_from(requested).map_err(|_| CapacityError::Negative { kind, requested })
}

/// Minimal-growth capacity strategy over an indexed storage adapter.
///
/// Owns the storage it governs and the [`ContentWindow`] registry tracking
/// the current item window; the two are updated together at the end of
/// every mutating operation and never diverge. Exactly one strategy governs
/// a given storage, which Rust ownership enforces directly.
pub struct MinimalCapacityStrategy<T, S = LinearStorage<T>>
where
    S: IndexedStorage<T>,
{
    /// The storage this strategy governs
    storage: S,

    /// Registry of the current item window, absent while empty
    window: Option<ContentWindow>,

    _item: PhantomData<T>,
}

impl<T> MinimalCapacityStrategy<T, LinearStorage<T>> {
    /// Create a strategy over fresh, empty linear storage of
    /// `initial_capacity` slots.
    pub fn new(initial_capacity: usize) -> Self {
        Self::with_storage(LinearStorage::with_capacity(initial_capacity))
    }

    /// Create a strategy over linear storage seeded with `items` starting
    /// at slot `first`.
    pub fn from_items(capacity: usize, first: usize, items: Vec<T>) -> StorageResult<Self> {
        Ok(Self::with_storage(LinearStorage::from_items(
            capacity, first, items,
        )?))
    }
}

impl<T, S: IndexedStorage<T>> MinimalCapacityStrategy<T, S> {
    /// Create a strategy governing `storage`, mirroring its current window
    /// into the registry.
    pub fn with_storage(storage: S) -> Self {
        let window = match (storage.first_index(), storage.last_index()) {
            (Some(first), Some(last)) => Some(ContentWindow::new(first, last)),
            _ => None,
        };

        Self {
            storage,
            window,
            _item: PhantomData,
        }
    }

    /// The governed storage
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Consume the strategy, returning the governed storage
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Registry view of the current item window, if any
    pub fn window(&self) -> Option<ContentWindow> {
        self.window
    }

    // ========================================================================
    // PASS-THROUGH QUERIES
    // ========================================================================

    /// Total number of addressable slots
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Number of items currently held
    pub fn items_count(&self) -> usize {
        self.window.map_or(0, |w| w.len())
    }

    /// Free slots before the first item (full capacity when empty)
    pub fn head_capacity(&self) -> usize {
        self.window
            .map_or(self.capacity(), |w| w.head_capacity())
    }

    /// Free slots after the last item (full capacity when empty)
    pub fn tail_capacity(&self) -> usize {
        self.window
            .map_or(self.capacity(), |w| w.tail_capacity(self.capacity()))
    }

    /// First slot holding an item, if any
    pub fn first_index(&self) -> Option<usize> {
        self.window.map(|w| w.first())
    }

    /// Last slot holding an item, if any
    pub fn last_index(&self) -> Option<usize> {
        self.window.map(|w| w.last())
    }

    /// Reference to the item at absolute slot `index`
    pub fn get(&self, index: usize) -> StorageResult<&T> {
        self.storage.get(index)
    }

    /// Put `item` into the slot at absolute slot `index`
    pub fn replace(&mut self, index: usize, item: T) -> StorageResult<()> {
        self.storage.replace(index, item)
    }

    // ========================================================================
    // INTERNAL
    // ========================================================================

    /// Handle a head or tail request against empty storage: every slot is
    /// free, so only the raw slot count can fall short.
    fn ensure_empty_capacity(&mut self, requested: usize) -> CapacityResult<()> {
        if requested > self.storage.capacity() {
            self.storage.reserve(requested)?;
        }

        Ok(())
    }
}

impl<T, S: IndexedStorage<T>> HeadCapacity for MinimalCapacityStrategy<T, S> {
    fn ensure_head_capacity(&mut self, capacity: isize) -> CapacityResult<()> {
        let requested = validate_partial_capacity(CapacityKind::Head, capacity)?;

        let Some(window) = self.window else {
            return self.ensure_empty_capacity(requested);
        };

        if requested <= window.head_capacity() {
            return Ok(());
        }

        // Grow by exactly the missing head room and move the whole window
        // right so the first item lands at slot `requested`
        let missing = requested - window.head_capacity();
        let moved = window.moved_to(requested);

        self.storage.initialize(
            self.storage.capacity() + missing,
            moved.first(),
            moved.last(),
            &[BlockMove::new(window.first(), window.last(), requested)],
        )?;
        self.window = Some(moved);

        Ok(())
    }
}

impl<T, S: IndexedStorage<T>> TailCapacity for MinimalCapacityStrategy<T, S> {
    fn ensure_tail_capacity(&mut self, capacity: isize) -> CapacityResult<()> {
        let requested = validate_partial_capacity(CapacityKind::Tail, capacity)?;

        let Some(window) = self.window else {
            return self.ensure_empty_capacity(requested);
        };

        if requested <= window.tail_capacity(self.storage.capacity()) {
            return Ok(());
        }

        // Pure growth: the window is copied onto its own position, head
        // alignment untouched, so only the slot count changes
        self.storage.initialize(
            window.last() + 1 + requested,
            window.first(),
            window.last(),
            &[BlockMove::new(window.first(), window.last(), window.first())],
        )?;

        Ok(())
    }
}

impl<T, S: IndexedStorage<T>> SplitCapacity for MinimalCapacityStrategy<T, S> {
    fn ensure_middle_capacity(
        &mut self,
        split_index: usize,
        capacity: isize,
    ) -> CapacityResult<()> {
        let requested = validate_partial_capacity(CapacityKind::Middle, capacity)?;

        let Some(window) = self.window else {
            return Err(CapacityError::SplitOnEmpty { index: split_index });
        };

        if !window.contains(split_index) {
            return Err(CapacityError::SplitOutOfWindow {
                index: split_index,
                first: window.first(),
                last: window.last(),
            });
        }

        if requested == 0 {
            return Ok(());
        }

        // The right-hand part [split_index, last] moves right by `requested`
        let right = BlockMove::new(split_index, window.last(), split_index + requested);

        // Existing tail room is used whenever it suffices: in-place shift,
        // no reallocation
        if requested <= window.tail_capacity(self.storage.capacity()) {
            self.storage.shift(&[right])?;

            let extended = window.extended_by(requested);
            self.storage.set_window(extended.first(), extended.last())?;
            self.window = Some(extended);

            return Ok(());
        }

        // Reallocate to exactly `len + requested` slots, repacking the
        // window to slot 0 so no head slack survives the minimal policy
        let repacked = ContentWindow::new(0, window.len() + requested - 1);
        let moves = if split_index > window.first() {
            vec![
                BlockMove::new(window.first(), split_index - 1, 0),
                BlockMove::new(
                    split_index,
                    window.last(),
                    split_index - window.first() + requested,
                ),
            ]
        } else {
            // Nothing left of the split to preserve
            vec![BlockMove::new(window.first(), window.last(), requested)]
        };

        self.storage.initialize(
            window.len() + requested,
            repacked.first(),
            repacked.last(),
            &moves,
        )?;
        self.window = Some(repacked);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::StorageError;

    fn seeded(capacity: usize, first: usize, items: &[char]) -> MinimalCapacityStrategy<char> {
        MinimalCapacityStrategy::from_items(capacity, first, items.to_vec()).unwrap()
    }

    fn contents(strategy: &MinimalCapacityStrategy<char>) -> Vec<char> {
        strategy.storage().iter().copied().collect()
    }

    /// Storage window and registry window must agree after every operation
    fn assert_lockstep(strategy: &MinimalCapacityStrategy<char>) {
        assert_eq!(strategy.storage().first_index(), strategy.first_index());
        assert_eq!(strategy.storage().last_index(), strategy.last_index());
        if let Some(window) = strategy.window() {
            assert!(window.last() < strategy.capacity());
            assert_eq!(strategy.items_count(), window.len());
        }
    }

    // ------------------------------------------------------------------
    // head capacity
    // ------------------------------------------------------------------

    #[test]
    fn test_head_request_within_existing_room_is_noop() {
        let mut strategy = seeded(5, 2, &['a', 'b']);

        strategy.ensure_head_capacity(2).unwrap();

        assert_eq!(strategy.capacity(), 5);
        assert_eq!(strategy.first_index(), Some(2));
        assert_eq!(strategy.last_index(), Some(3));
        assert_eq!(contents(&strategy), vec!['a', 'b']);
        assert_lockstep(&strategy);
    }

    #[test]
    fn test_head_growth_scenario() {
        // Capacity 5, window [1, 3] holding [A, B, C]; request head room 3
        let mut strategy = seeded(5, 1, &['A', 'B', 'C']);

        strategy.ensure_head_capacity(3).unwrap();

        // Reallocated to 3 + 5 - 1 = 7, window moved to [3, 5]
        assert_eq!(strategy.capacity(), 7);
        assert_eq!(strategy.first_index(), Some(3));
        assert_eq!(strategy.last_index(), Some(5));
        assert_eq!(contents(&strategy), vec!['A', 'B', 'C']);
        assert_lockstep(&strategy);
    }

    #[test]
    fn test_head_negative_request_leaves_storage_unchanged() {
        let mut strategy = seeded(5, 1, &['A', 'B', 'C']);
        let before = strategy.storage().clone();

        let result = strategy.ensure_head_capacity(-1);

        assert_eq!(
            result,
            Err(CapacityError::Negative {
                kind: CapacityKind::Head,
                requested: -1
            })
        );
        assert_eq!(strategy.capacity(), 5);
        assert_eq!(strategy.first_index(), before.first_index());
        assert_eq!(strategy.last_index(), before.last_index());
        assert_eq!(contents(&strategy), vec!['A', 'B', 'C']);
    }

    // ------------------------------------------------------------------
    // tail capacity
    // ------------------------------------------------------------------

    #[test]
    fn test_tail_request_within_existing_room_is_noop() {
        // Capacity 4, window [0, 1], tail room 2; request 1
        let mut strategy = seeded(4, 0, &['X', 'Y']);

        strategy.ensure_tail_capacity(1).unwrap();

        assert_eq!(strategy.capacity(), 4);
        assert_eq!(strategy.first_index(), Some(0));
        assert_eq!(strategy.last_index(), Some(1));
        assert_lockstep(&strategy);
    }

    #[test]
    fn test_tail_growth_is_exactly_minimal() {
        // Capacity 4, window [0, 1], tail room 2; request 3 forces growth
        let mut strategy = seeded(4, 0, &['X', 'Y']);

        strategy.ensure_tail_capacity(3).unwrap();

        // Exactly last + 1 + 3 = 5, no over-allocation
        assert_eq!(strategy.capacity(), 5);
        assert_eq!(strategy.first_index(), Some(0));
        assert_eq!(strategy.last_index(), Some(1));
        assert_eq!(strategy.tail_capacity(), 3);
        assert_eq!(contents(&strategy), vec!['X', 'Y']);
        assert_lockstep(&strategy);
    }

    #[test]
    fn test_tail_growth_keeps_head_alignment() {
        let mut strategy = seeded(5, 2, &['a', 'b', 'c']);

        strategy.ensure_tail_capacity(4).unwrap();

        assert_eq!(strategy.capacity(), 9);
        assert_eq!(strategy.first_index(), Some(2));
        assert_eq!(strategy.get(2), Ok(&'a'));
        assert_lockstep(&strategy);
    }

    #[test]
    fn test_tail_negative_request_fails() {
        let mut strategy = seeded(4, 0, &['X', 'Y']);

        assert_eq!(
            strategy.ensure_tail_capacity(-3),
            Err(CapacityError::Negative {
                kind: CapacityKind::Tail,
                requested: -3
            })
        );
    }

    // ------------------------------------------------------------------
    // middle capacity
    // ------------------------------------------------------------------

    #[test]
    fn test_middle_in_place_shift_scenario() {
        // Capacity 6, window [0, 3] holding [A, B, C, D], split at 2,
        // request 2 with sufficient tail room
        let mut strategy = seeded(6, 0, &['A', 'B', 'C', 'D']);

        strategy.ensure_middle_capacity(2, 2).unwrap();

        // In-place: [A, B, _, _, C, D], window [0, 5]
        assert_eq!(strategy.capacity(), 6);
        assert_eq!(strategy.first_index(), Some(0));
        assert_eq!(strategy.last_index(), Some(5));
        assert_eq!(strategy.get(0), Ok(&'A'));
        assert_eq!(strategy.get(1), Ok(&'B'));
        assert_eq!(strategy.get(2), Err(StorageError::VacantSlot { index: 2 }));
        assert_eq!(strategy.get(3), Err(StorageError::VacantSlot { index: 3 }));
        assert_eq!(strategy.get(4), Ok(&'C'));
        assert_eq!(strategy.get(5), Ok(&'D'));
        assert_eq!(contents(&strategy), vec!['A', 'B', 'C', 'D']);
        assert_lockstep(&strategy);
    }

    #[test]
    fn test_middle_uses_tail_room_when_exactly_sufficient() {
        // Tail room 2, request 2: existing capacity is used, no reallocation
        let mut strategy = seeded(6, 0, &['A', 'B', 'C', 'D']);

        strategy.ensure_middle_capacity(3, 2).unwrap();

        assert_eq!(strategy.capacity(), 6);
        assert_eq!(strategy.last_index(), Some(5));
        assert_lockstep(&strategy);
    }

    #[test]
    fn test_middle_reallocates_and_repacks() {
        // Capacity 6, window [2, 5] holding [a, b, c, d], split at 4,
        // request 3 with no tail room
        let mut strategy = seeded(6, 2, &['a', 'b', 'c', 'd']);

        strategy.ensure_middle_capacity(4, 3).unwrap();

        // Exactly 4 + 3 = 7 slots, window repacked to [0, 6]
        assert_eq!(strategy.capacity(), 7);
        assert_eq!(strategy.first_index(), Some(0));
        assert_eq!(strategy.last_index(), Some(6));
        assert_eq!(strategy.get(0), Ok(&'a'));
        assert_eq!(strategy.get(1), Ok(&'b'));
        assert_eq!(strategy.get(2), Err(StorageError::VacantSlot { index: 2 }));
        assert_eq!(strategy.get(5), Ok(&'c'));
        assert_eq!(strategy.get(6), Ok(&'d'));
        assert_eq!(contents(&strategy), vec!['a', 'b', 'c', 'd']);
        assert_lockstep(&strategy);
    }

    #[test]
    fn test_middle_split_at_first_index_uses_single_block() {
        let mut strategy = seeded(4, 1, &['a', 'b', 'c']);

        // Split at the very first index, no tail room: whole window moves
        strategy.ensure_middle_capacity(1, 2).unwrap();

        assert_eq!(strategy.capacity(), 5);
        assert_eq!(strategy.first_index(), Some(0));
        assert_eq!(strategy.last_index(), Some(4));
        assert_eq!(strategy.get(0), Err(StorageError::VacantSlot { index: 0 }));
        assert_eq!(strategy.get(1), Err(StorageError::VacantSlot { index: 1 }));
        assert_eq!(strategy.get(2), Ok(&'a'));
        assert_eq!(contents(&strategy), vec!['a', 'b', 'c']);
        assert_lockstep(&strategy);
    }

    #[test]
    fn test_middle_zero_request_is_noop_for_any_valid_split() {
        let mut strategy = seeded(6, 1, &['a', 'b', 'c']);

        for split in 1..=3 {
            strategy.ensure_middle_capacity(split, 0).unwrap();
            assert_eq!(strategy.capacity(), 6);
            assert_eq!(strategy.first_index(), Some(1));
            assert_eq!(strategy.last_index(), Some(3));
        }
        assert_eq!(contents(&strategy), vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_middle_split_outside_window_fails_unchanged() {
        let mut strategy = seeded(6, 2, &['a', 'b']);

        // One below first and one above last
        for split in [1, 4] {
            let result = strategy.ensure_middle_capacity(split, 1);
            assert_eq!(
                result,
                Err(CapacityError::SplitOutOfWindow {
                    index: split,
                    first: 2,
                    last: 3
                })
            );
        }

        assert_eq!(strategy.capacity(), 6);
        assert_eq!(strategy.first_index(), Some(2));
        assert_eq!(contents(&strategy), vec!['a', 'b']);
    }

    #[test]
    fn test_middle_negative_request_fails_before_split_validation() {
        let mut strategy = seeded(6, 2, &['a', 'b']);

        // Split index is also invalid; the negative capacity is reported
        assert_eq!(
            strategy.ensure_middle_capacity(0, -2),
            Err(CapacityError::Negative {
                kind: CapacityKind::Middle,
                requested: -2
            })
        );
    }

    // ------------------------------------------------------------------
    // empty storage
    // ------------------------------------------------------------------

    #[test]
    fn test_empty_storage_head_and_tail_requests() {
        let mut strategy: MinimalCapacityStrategy<char> = MinimalCapacityStrategy::new(2);

        // Within existing free slots: no-op
        strategy.ensure_head_capacity(2).unwrap();
        assert_eq!(strategy.capacity(), 2);

        // Beyond them: raw growth, still no window
        strategy.ensure_tail_capacity(5).unwrap();
        assert_eq!(strategy.capacity(), 5);
        assert_eq!(strategy.items_count(), 0);
        assert_eq!(strategy.first_index(), None);
    }

    #[test]
    fn test_empty_storage_middle_request_fails() {
        let mut strategy: MinimalCapacityStrategy<char> = MinimalCapacityStrategy::new(4);

        assert_eq!(
            strategy.ensure_middle_capacity(0, 1),
            Err(CapacityError::SplitOnEmpty { index: 0 })
        );
    }

    // ------------------------------------------------------------------
    // idempotence and content preservation
    // ------------------------------------------------------------------

    #[test]
    fn test_noop_paths_are_idempotent() {
        let mut strategy = seeded(8, 3, &['a', 'b', 'c']);

        for _ in 0..3 {
            strategy.ensure_head_capacity(3).unwrap();
            strategy.ensure_tail_capacity(2).unwrap();
            strategy.ensure_middle_capacity(4, 0).unwrap();

            assert_eq!(strategy.capacity(), 8);
            assert_eq!(strategy.first_index(), Some(3));
            assert_eq!(strategy.last_index(), Some(5));
            assert_eq!(contents(&strategy), vec!['a', 'b', 'c']);
        }
    }

    #[test]
    fn test_content_preserved_across_mixed_requests() {
        let mut strategy = seeded(6, 2, &['a', 'b', 'c', 'd']);

        strategy.ensure_head_capacity(4).unwrap();
        strategy.ensure_middle_capacity(5, 3).unwrap();
        strategy.ensure_tail_capacity(5).unwrap();
        strategy.ensure_head_capacity(1).unwrap();

        // Logical order survives every relocation; the window grew by the
        // spliced-in gap of 3
        assert_eq!(contents(&strategy), vec!['a', 'b', 'c', 'd']);
        assert_eq!(strategy.items_count(), 7);
        assert_lockstep(&strategy);
    }

    #[test]
    fn test_content_preserved_across_random_requests() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(0x11beef);

        for _ in 0..50 {
            let items: Vec<char> = ('a'..='f').collect();
            let mut strategy = seeded(10, 2, &items);

            for _ in 0..20 {
                match rng.gen_range(0..3) {
                    0 => strategy.ensure_head_capacity(rng.gen_range(0..6)).unwrap(),
                    1 => strategy.ensure_tail_capacity(rng.gen_range(0..6)).unwrap(),
                    _ => {
                        let window = strategy.window().unwrap();
                        let split = rng.gen_range(window.first()..=window.last());
                        strategy
                            .ensure_middle_capacity(split, rng.gen_range(0..4))
                            .unwrap();
                    }
                }

                // Gaps may appear anywhere, but item order never changes
                assert_eq!(contents(&strategy), items);
                assert_lockstep(&strategy);
            }
        }
    }
}
