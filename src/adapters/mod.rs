//! # Adapters
//!
//! Swappable implementations of port traits.
//!
//! Storage adapters own backing memory and realize relocation requests;
//! the capacity policy deciding *when* and *how much* to relocate lives in
//! the engine. Adapters can be swapped without changing policy logic.

pub mod storage;
