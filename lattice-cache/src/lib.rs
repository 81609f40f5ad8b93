//! # lattice-cache
//!
//! Pure memoization: a bounded, time-expiring key/value store plus the
//! key-derivation functions the engine uses for its two cache instances.
//! This crate has no awareness of goals or concepts.

pub mod keys;
pub mod store;

pub use store::TtlCache;
