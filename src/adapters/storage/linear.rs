//! # Linear Storage Adapter
//!
//! Array-backed storage addressed by an integer slot window.
//!
//! The backing buffer is a `Vec<Option<T>>`: occupied slots hold `Some`,
//! free slots hold `None`. Moving an item out of a slot with `Option::take`
//! clears the source slot in the same step, which is exactly the vacated-slot
//! clearing the contract demands - no stale item ever lingers behind a shift.

use crate::core::{BlockMove, ContentWindow};
use crate::ports::{IndexedStorage, StorageError, StorageResult};

/// Array-backed storage with an explicit `[first, last]` item window.
///
/// Invariant whenever items are held:
/// `first <= last <= capacity - 1` and `len == last - first + 1`.
#[derive(Debug, Clone)]
pub struct LinearStorage<T> {
    /// Backing buffer; `None` marks a free slot
    slots: Vec<Option<T>>,

    /// Current item window, absent while empty
    window: Option<ContentWindow>,
}

impl<T> LinearStorage<T> {
    /// Create empty storage with `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);

        Self {
            slots,
            window: None,
        }
    }

    /// Create storage of `capacity` slots seeded with `items` starting at
    /// slot `first`.
    ///
    /// The window becomes `[first, first + items.len() - 1]`; an empty
    /// `items` produces empty storage. Fails like
    /// [`initialize`](IndexedStorage::initialize) when the window does not
    /// fit.
    pub fn from_items(capacity: usize, first: usize, items: Vec<T>) -> StorageResult<Self> {
        if items.is_empty() {
            return Ok(Self::with_capacity(capacity));
        }

        let last = first + items.len() - 1;
        validate_window(first, last, capacity)?;

        let mut storage = Self::with_capacity(capacity);
        for (offset, item) in items.into_iter().enumerate() {
            storage.slots[first + offset] = Some(item);
        }
        storage.window = Some(ContentWindow::new(first, last));

        Ok(storage)
    }

    /// Current item window, if any
    pub fn window(&self) -> Option<ContentWindow> {
        self.window
    }

    /// Items in window order, for inspection and tests
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let range = match self.window {
            Some(window) => window.first()..window.last() + 1,
            None => 0..0,
        };

        self.slots[range].iter().filter_map(Option::as_ref)
    }

    /// Apply one block move inside `slots`, clearing vacated sources.
    ///
    /// Copy direction follows the overlap discipline: moving right runs from
    /// the high end down, moving left runs from the low end up, so a source
    /// slot is always read before anything overwrites it.
    fn apply_move(slots: &mut [Option<T>], mv: &BlockMove) {
        if mv.is_noop() {
            return;
        }

        if mv.target() > mv.source_begin() {
            for offset in (0..mv.len()).rev() {
                slots[mv.target() + offset] = slots[mv.source_begin() + offset].take();
            }
        } else {
            for offset in 0..mv.len() {
                slots[mv.target() + offset] = slots[mv.source_begin() + offset].take();
            }
        }
    }
}

/// Check that `[first, last]` is a valid window for `capacity` slots.
fn validate_window(first: usize, last: usize, capacity: usize) -> StorageResult<()> {
    if first > last {
        return Err(StorageError::InvalidWindow { first, last });
    }

    if last >= capacity {
        return Err(StorageError::WindowExceedsCapacity {
            first,
            last,
            capacity,
        });
    }

    Ok(())
}

/// Check that a move reads inside `source_capacity` and writes inside
/// `target_capacity`.
fn validate_move(
    mv: &BlockMove,
    source_capacity: usize,
    target_capacity: usize,
) -> StorageResult<()> {
    if mv.source_end() >= source_capacity || mv.target_end() >= target_capacity {
        return Err(StorageError::MoveOutOfBounds {
            source_begin: mv.source_begin(),
            source_end: mv.source_end(),
            target: mv.target(),
            capacity: source_capacity.min(target_capacity),
        });
    }

    Ok(())
}

impl<T> IndexedStorage<T> for LinearStorage<T> {
    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn first_index(&self) -> Option<usize> {
        self.window.map(|w| w.first())
    }

    fn last_index(&self) -> Option<usize> {
        self.window.map(|w| w.last())
    }

    fn len(&self) -> usize {
        self.window.map_or(0, |w| w.len())
    }

    fn tail_capacity(&self) -> usize {
        match self.window {
            Some(window) => window.tail_capacity(self.capacity()),
            None => self.capacity(),
        }
    }

    fn get(&self, index: usize) -> StorageResult<&T> {
        let slot = self
            .slots
            .get(index)
            .ok_or(StorageError::IndexOutOfBounds {
                index,
                capacity: self.capacity(),
            })?;

        slot.as_ref().ok_or(StorageError::VacantSlot { index })
    }

    fn replace(&mut self, index: usize, item: T) -> StorageResult<()> {
        let capacity = self.capacity();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(StorageError::IndexOutOfBounds { index, capacity })?;

        *slot = Some(item);
        Ok(())
    }

    fn initialize(
        &mut self,
        capacity: usize,
        first: usize,
        last: usize,
        moves: &[BlockMove],
    ) -> StorageResult<()> {
        // Validate everything before allocating or touching the buffer
        validate_window(first, last, capacity)?;
        for mv in moves {
            validate_move(mv, self.capacity(), capacity)?;
        }

        let mut fresh: Vec<Option<T>> = Vec::with_capacity(capacity);
        fresh.resize_with(capacity, || None);

        // Sources are read from the old buffer, destinations written to the
        // fresh one, so descriptors can never alias unread data
        for mv in moves {
            for offset in 0..mv.len() {
                fresh[mv.target() + offset] = self.slots[mv.source_begin() + offset].take();
            }
        }

        self.slots = fresh;
        self.window = Some(ContentWindow::new(first, last));

        Ok(())
    }

    fn shift(&mut self, moves: &[BlockMove]) -> StorageResult<()> {
        let capacity = self.capacity();
        for mv in moves {
            validate_move(mv, capacity, capacity)?;
        }

        for mv in moves {
            Self::apply_move(&mut self.slots, mv);
        }

        Ok(())
    }

    fn set_window(&mut self, first: usize, last: usize) -> StorageResult<()> {
        validate_window(first, last, self.capacity())?;
        self.window = Some(ContentWindow::new(first, last));

        Ok(())
    }

    fn reserve(&mut self, capacity: usize) -> StorageResult<()> {
        if capacity > self.slots.len() {
            self.slots.resize_with(capacity, || None);
        }

        Ok(())
    }
}
