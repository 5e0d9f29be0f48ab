//! # Block Move Descriptor
//!
//! An immutable description of one contiguous block relocation:
//! move the closed slot range `[source_begin, source_end]` so that it
//! starts at `target`.
//!
//! Descriptors are built fresh by capacity strategies for each request and
//! handed to the storage, which performs the physical copy. They carry no
//! reference to any buffer; they are pure coordinates.

/// A contiguous block relocation: `[source_begin, source_end]` -> `target`.
///
/// The range is inclusive on both ends. Descriptors passed together to a
/// single storage operation must not overlap in their destination ranges;
/// that contract is the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockMove {
    /// First slot of the source range (inclusive)
    source_begin: usize,

    /// Last slot of the source range (inclusive)
    source_end: usize,

    /// Slot the range starts at after the move
    target: usize,
}

impl BlockMove {
    /// Create a descriptor moving `[source_begin, source_end]` to `target`.
    ///
    /// # Panics
    ///
    /// Panics if `source_begin > source_end`; an empty or inverted range is
    /// never a meaningful relocation.
    pub fn new(source_begin: usize, source_end: usize, target: usize) -> Self {
        assert!(
            source_begin <= source_end,
            "inverted block range: [{}, {}]",
            source_begin,
            source_end
        );

        Self {
            source_begin,
            source_end,
            target,
        }
    }

    /// First slot of the source range (inclusive)
    pub fn source_begin(&self) -> usize {
        self.source_begin
    }

    /// Last slot of the source range (inclusive)
    pub fn source_end(&self) -> usize {
        self.source_end
    }

    /// Destination slot of the first item
    pub fn target(&self) -> usize {
        self.target
    }

    /// Number of slots moved
    pub fn len(&self) -> usize {
        self.source_end - self.source_begin + 1
    }

    /// Last destination slot (inclusive)
    pub fn target_end(&self) -> usize {
        self.target + self.len() - 1
    }

    /// True if the move leaves every item where it already is
    pub fn is_noop(&self) -> bool {
        self.target == self.source_begin
    }
}
