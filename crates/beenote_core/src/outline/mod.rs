//! Outline editing and viewing models.
//!
//! # Responsibility
//! - Manage the block sequence of one project being edited, including the
//!   active-block pointer and save validation.
//! - Compute the visible subsequence of a collapsible outline from the flat
//!   indent-annotated block list.
//!
//! # Invariants
//! - Both models operate on one flat ordered sequence; neither builds an
//!   explicit tree.
//! - The viewer's expanded set is per-session state and is never persisted.

pub mod editor;
pub mod viewer;
