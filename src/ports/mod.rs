//! # Ports
//!
//! Trait contracts between the engine and its adapters, plus the error
//! types flowing across them.
//!
//! Contracts:
//! - `IndexedStorage` - raw indexed access and bulk relocation
//! - `HeadCapacity`, `TailCapacity`, `SplitCapacity` - capacity capabilities
//!
//! The capacity capabilities are deliberately separate traits: a container
//! variant exposes exactly the mutation capabilities it supports by
//! implementing (or forwarding) the matching subset, instead of maintaining
//! one type per capability combination.

use thiserror::Error;

use crate::core::BlockMove;

/// Result of a storage operation
pub type StorageResult<T> = Result<T, StorageError>;

/// Result of a capacity request
pub type CapacityResult<T> = Result<T, CapacityError>;

/// Which partial capacity a request asked for.
///
/// Carried inside [`CapacityError::Negative`] so the message names the
/// request kind that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityKind {
    /// Free slots before the first item
    Head,
    /// Free slots after the last item
    Tail,
    /// Free slots spliced in at an interior split position
    Middle,
}

impl std::fmt::Display for CapacityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CapacityKind::Head => write!(f, "head"),
            CapacityKind::Tail => write!(f, "tail"),
            CapacityKind::Middle => write!(f, "middle"),
        }
    }
}

/// Errors raised by storage adapters.
///
/// All of these are raised before any mutation takes place; a failed
/// storage call leaves the buffer and window untouched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StorageError {
    /// Direct access outside `[0, capacity - 1]`
    #[error("index {index} out of bounds for capacity {capacity}")]
    IndexOutOfBounds {
        /// The offending index
        index: usize,
        /// Total slot count of the storage
        capacity: usize,
    },

    /// Read of a slot that holds no item
    #[error("slot {index} is vacant")]
    VacantSlot {
        /// The vacant slot
        index: usize,
    },

    /// Window bounds with `first > last`
    #[error("invalid item window [{first}, {last}]")]
    InvalidWindow {
        /// Requested first index
        first: usize,
        /// Requested last index
        last: usize,
    },

    /// Window that does not fit into the requested capacity
    #[error("item window [{first}, {last}] exceeds capacity {capacity}")]
    WindowExceedsCapacity {
        /// Requested first index
        first: usize,
        /// Requested last index
        last: usize,
        /// Requested capacity
        capacity: usize,
    },

    /// Block move touching slots outside a buffer
    #[error(
        "block move [{source_begin}, {source_end}] -> {target} \
         outside capacity {capacity}"
    )]
    MoveOutOfBounds {
        /// First source slot of the move
        source_begin: usize,
        /// Last source slot of the move
        source_end: usize,
        /// Destination of the first slot
        target: usize,
        /// Capacity the move was checked against
        capacity: usize,
    },
}

/// Errors raised by capacity strategies.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CapacityError {
    /// A requested partial capacity was negative
    #[error("negative {kind} capacity: {requested}")]
    Negative {
        /// Which request kind failed
        kind: CapacityKind,
        /// The rejected request value
        requested: isize,
    },

    /// Split index outside the current item window
    #[error("split index {index} outside item window [{first}, {last}]")]
    SplitOutOfWindow {
        /// The offending split index
        index: usize,
        /// First slot of the current window
        first: usize,
        /// Last slot of the current window
        last: usize,
    },

    /// Split request against a storage holding no items
    #[error("split index {index} but storage holds no items")]
    SplitOnEmpty {
        /// The offending split index
        index: usize,
    },

    /// Failure propagated from the underlying storage
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Storage contract consumed by capacity strategies.
///
/// Adapters own the backing buffer and perform raw indexed access and bulk
/// relocation. They have no opinion about *why* capacity changes, only how
/// to physically realize a requested capacity and set of relocations; the
/// policy lives in the engine.
pub trait IndexedStorage<T> {
    /// Total number of addressable slots
    fn capacity(&self) -> usize;

    /// First slot holding an item, if any
    fn first_index(&self) -> Option<usize>;

    /// Last slot holding an item, if any
    fn last_index(&self) -> Option<usize>;

    /// Number of items currently held
    fn len(&self) -> usize;

    /// True if no items are held
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Free slots after the last item (full capacity when empty)
    fn tail_capacity(&self) -> usize;

    /// Reference to the item at `index`.
    ///
    /// Fails with `IndexOutOfBounds` outside `[0, capacity - 1]` and with
    /// `VacantSlot` when the slot holds no item.
    fn get(&self, index: usize) -> StorageResult<&T>;

    /// Put `item` into the slot at `index`, dropping any previous item.
    ///
    /// Fails with `IndexOutOfBounds` outside `[0, capacity - 1]`.
    fn replace(&mut self, index: usize, item: T) -> StorageResult<()>;

    /// Reallocate to `capacity` slots, relocating blocks per `moves`, then
    /// set the item window to `[first, last]`.
    ///
    /// Items move from the old buffer into the fresh one, so descriptors
    /// never alias unread source data. Validation happens before the new
    /// buffer is allocated; on failure nothing has changed.
    fn initialize(
        &mut self,
        capacity: usize,
        first: usize,
        last: usize,
        moves: &[BlockMove],
    ) -> StorageResult<()>;

    /// Perform block moves within the existing buffer, no reallocation.
    ///
    /// Vacated source slots not overwritten by a destination are cleared so
    /// no stale item lingers. The window is not touched; callers follow up
    /// with [`set_window`](IndexedStorage::set_window).
    fn shift(&mut self, moves: &[BlockMove]) -> StorageResult<()>;

    /// Set the item window to `[first, last]` without moving any item.
    fn set_window(&mut self, first: usize, last: usize) -> StorageResult<()>;

    /// Grow the buffer to `capacity` slots without moving any item.
    ///
    /// A no-op when the buffer already has that many slots.
    fn reserve(&mut self, capacity: usize) -> StorageResult<()>;
}

/// Capability to guarantee free slots before the first item.
pub trait HeadCapacity {
    /// Ensure at least `capacity` free slots before the first item.
    ///
    /// Fails with [`CapacityError::Negative`] when `capacity < 0`; succeeds
    /// without touching anything when the existing head room suffices.
    fn ensure_head_capacity(&mut self, capacity: isize) -> CapacityResult<()>;
}

/// Capability to guarantee free slots after the last item.
pub trait TailCapacity {
    /// Ensure at least `capacity` free slots after the last item.
    ///
    /// Fails with [`CapacityError::Negative`] when `capacity < 0`; succeeds
    /// without touching anything when the existing tail room suffices.
    fn ensure_tail_capacity(&mut self, capacity: isize) -> CapacityResult<()>;
}

/// Capability to splice free slots into the middle of the item window.
pub trait SplitCapacity {
    /// Ensure `capacity` free slots directly before `split_index`, splitting
    /// the item window into two parts around the gap.
    ///
    /// Fails with [`CapacityError::Negative`] when `capacity < 0` and with a
    /// split-index error when `split_index` lies outside the current item
    /// window. Validation runs before any mutation; a failed call leaves the
    /// storage unchanged.
    fn ensure_middle_capacity(&mut self, split_index: usize, capacity: isize)
        -> CapacityResult<()>;
}
