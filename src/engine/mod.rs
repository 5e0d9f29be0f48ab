//! # Engine
//!
//! The orchestration layer wiring a storage adapter to the content-window
//! registry under a capacity policy.

mod strategy;

pub use strategy::MinimalCapacityStrategy;
