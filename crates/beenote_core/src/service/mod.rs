//! Use-case services over the project collection.
//!
//! # Responsibility
//! - Bind pure collection transitions to the key-value adapter.
//! - Enforce save/delete policies the screens rely on.
//!
//! # Invariants
//! - Load failures degrade to an empty collection; they never surface.
//! - Every mutation schedules a best-effort persist of the full snapshot.

pub mod project_service;
