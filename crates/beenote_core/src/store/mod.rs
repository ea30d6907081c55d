//! In-memory project collection layer.
//!
//! # Responsibility
//! - Hold the ordered project list with pure, storage-free state transitions.
//! - Own the encode/decode of the persisted project array.
//!
//! # Invariants
//! - New projects are prepended; updates keep their position.
//! - Collection order is the presentation order of the home screen.

pub mod project_store;
