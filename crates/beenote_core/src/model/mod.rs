//! Domain model for outline projects.
//!
//! # Responsibility
//! - Define the canonical project/block records shared by store, editor and
//!   viewer.
//! - Keep one flat, order-significant block sequence as the single source of
//!   document structure.
//!
//! # Invariants
//! - Every record is identified by a stable UUID.
//! - Nesting is encoded by `Block::level` relative to sequence position, never
//!   by links between records.

pub mod project;
