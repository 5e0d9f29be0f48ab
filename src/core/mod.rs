//! # Core
//!
//! Pure value types, no I/O, no allocation decisions.
//!
//! Contains:
//! - `BlockMove` - one contiguous block relocation descriptor
//! - `ContentWindow` - the tracked `[first, last]` item window

pub mod block;
pub mod window;

pub use block::BlockMove;
pub use window::ContentWindow;
