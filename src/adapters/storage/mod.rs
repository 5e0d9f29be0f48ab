//! # Storage Adapters
//!
//! Implementations of the `IndexedStorage` port.
//!
//! Available adapters:
//! - `LinearStorage` - contiguous `Vec<Option<T>>` buffer with an explicit
//!   item window

mod linear;

pub use linear::LinearStorage;
