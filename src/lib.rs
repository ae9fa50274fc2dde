//! Flavor Engine — seeded recursive flavor-text generation for tabletop games.
//!
//! Composes trees of literal text, producer closures, and embedded
//! sub-generators, then evaluates the tree deterministically from a
//! single seed into one output string.

pub mod content;
pub mod core;
