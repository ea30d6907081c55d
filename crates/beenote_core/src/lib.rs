//! Core domain logic for BeeNote, a hierarchical outline note-taking app.
//! This crate is the single source of truth for business invariants.
//!
//! Screens consume this crate as data plus callbacks: the home screen talks
//! to [`ProjectService`], the editor screen to [`OutlineEditor`], and the
//! read-only outline viewer to [`OutlineViewer`].

pub mod logging;
pub mod model;
pub mod outline;
pub mod service;
pub mod storage;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{
    block_has_children, Block, BlockId, Project, ProjectId, ProjectValidationError,
};
pub use outline::editor::{EditorError, IndentDirection, OutlineEditor, StyleFlag};
pub use outline::viewer::OutlineViewer;
pub use service::project_service::{
    DeleteDecision, ProjectService, ProjectServiceError, PROJECTS_STORAGE_KEY,
};
pub use storage::{open_kv, open_kv_in_memory, KvStore, SqliteKvStore, StorageError, StorageResult};
pub use store::project_store::ProjectStore;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
