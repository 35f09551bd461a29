//! Foundation types for slidedeck.
//!
//! Shared by every slidedeck crate: the error type and `Result` alias, and
//! the platform-agnostic input events a host feeds into the deck controller.

pub mod error;
pub mod input;

/// Index into a document's node arena.
pub type NodeId = usize;
