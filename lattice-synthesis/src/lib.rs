//! # lattice-synthesis
//!
//! The alternate generation strategy for users who have mastered most of
//! the corpus: instead of retrieving fresh concepts, it synthesizes
//! combination concepts from the user's strongest learned material plus
//! fixed meta-learning concepts.

pub mod strategy;

pub use strategy::SynthesisStrategy;
