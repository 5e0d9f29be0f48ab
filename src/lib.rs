//! # linestore - Linear Index-Backed Storage
//!
//! An array-backed item window with minimal-growth capacity management for
//! head, tail, and split insertion.
//!
//! Items live in a contiguous buffer inside an inclusive `[first, last]`
//! slot window, with free slots on either side. Capacity strategies decide
//! how much to grow the buffer and which blocks to relocate so that a
//! requested number of free slots appears before the first item, after the
//! last item, or at an arbitrary split point inside the window - with
//! minimal copying and reallocation, O(1) amortized per inserted slot.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       linestore                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                             │
//! │  CORE (pure values, no I/O)                                 │
//! │    BlockMove, ContentWindow                                 │
//! │                                                             │
//! │  PORTS (trait contracts)                                    │
//! │    IndexedStorage, HeadCapacity, TailCapacity,              │
//! │    SplitCapacity                                            │
//! │                                                             │
//! │  ADAPTERS (swappable implementations)                       │
//! │    Storage: LinearStorage                                   │
//! │                                                             │
//! │  ENGINE (orchestration)                                     │
//! │    MinimalCapacityStrategy - the main entry point           │
//! │                                                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use linestore::{MinimalCapacityStrategy, SplitCapacity, TailCapacity};
//!
//! // Storage with 4 slots, items [A, B] at slots [0, 1]
//! let mut seq = MinimalCapacityStrategy::from_items(4, 0, vec!['A', 'B']).unwrap();
//!
//! // Two free tail slots already exist: nothing happens
//! seq.ensure_tail_capacity(1).unwrap();
//! assert_eq!(seq.capacity(), 4);
//!
//! // Splice a free slot in before 'B' and fill it
//! seq.ensure_middle_capacity(1, 1).unwrap();
//! seq.replace(1, 'X').unwrap();
//! assert_eq!(seq.get(2), Ok(&'B'));
//! ```
//!
//! ## Minimal policy
//!
//! Every reallocation grows the buffer to exactly the capacity the request
//! needs, never more. Embedders wanting speculative growth implement the
//! same capability traits with a different sizing rule; the storage port
//! does not change.

// ============================================================================
// MODULES
// ============================================================================

/// Core domain - pure value types
/// Contains: BlockMove, ContentWindow
pub mod core;

/// Port definitions - trait contracts and error types
/// Contains: IndexedStorage, capacity capability traits, error enums
pub mod ports;

/// Adapter implementations - swappable components
/// Contains: storage submodule
pub mod adapters;

/// Engine - orchestration layer
/// Contains: MinimalCapacityStrategy
pub mod engine;

// ============================================================================
// RE-EXPORTS (public API)
// ============================================================================

// Core types
pub use crate::core::{BlockMove, ContentWindow};

// Port traits and errors
pub use crate::ports::{
    CapacityError, CapacityKind, CapacityResult, HeadCapacity, IndexedStorage, SplitCapacity,
    StorageError, StorageResult, TailCapacity,
};

// Adapters
pub use crate::adapters::storage::LinearStorage;

// Engine
pub use crate::engine::MinimalCapacityStrategy;
