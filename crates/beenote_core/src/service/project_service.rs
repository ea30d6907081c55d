//! Project list use-case service.
//!
//! # Responsibility
//! - Load the project collection once at startup from the key-value adapter.
//! - Validate saves, apply collection transitions and write back after every
//!   mutation.
//! - Keep the destructive-delete confirmation decision explicit.
//!
//! # Invariants
//! - A missing key, malformed payload or adapter failure loads as an empty
//!   collection; nothing panics on corrupt stored data.
//! - Persist is best-effort: failures are logged and swallowed, memory state
//!   stays authoritative.
//! - The full collection is serialized on every write; last write wins on the
//!   single storage key.

use crate::model::project::{Project, ProjectId, ProjectValidationError};
use crate::storage::{KvStore, StorageResult};
use crate::store::project_store::ProjectStore;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Single fixed key holding the serialized project array.
pub const PROJECTS_STORAGE_KEY: &str = "BEE_NOTE_PROJECTS_V1";

/// Outcome of the destructive-delete confirmation prompt.
///
/// The presentation layer asks the user before calling in; `Cancelled` must
/// remain a full no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteDecision {
    Confirmed,
    Cancelled,
}

/// Service error for project use-cases.
#[derive(Debug)]
pub enum ProjectServiceError {
    /// Save rejected before any state change; carries the user-facing reason.
    Validation(ProjectValidationError),
}

impl Display for ProjectServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ProjectServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
        }
    }
}

impl From<ProjectValidationError> for ProjectServiceError {
    fn from(value: ProjectValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Project list service over a key-value adapter.
pub struct ProjectService<S: KvStore> {
    kv: S,
    store: ProjectStore,
}

impl<S: KvStore> ProjectService<S> {
    /// Loads the collection from the adapter, degrading to empty on failure.
    ///
    /// One-shot read at startup; the adapter is not polled again.
    pub fn load(kv: S) -> Self {
        let store = match kv.get(PROJECTS_STORAGE_KEY) {
            Ok(Some(raw)) => match ProjectStore::decode(&raw) {
                Ok(store) => store,
                Err(err) => {
                    warn!(
                        "event=projects_load module=service status=degraded reason=malformed_payload error={err}"
                    );
                    ProjectStore::new()
                }
            },
            Ok(None) => ProjectStore::new(),
            Err(err) => {
                warn!(
                    "event=projects_load module=service status=degraded reason=adapter_error error={err}"
                );
                ProjectStore::new()
            }
        };

        info!(
            "event=projects_load module=service status=ok count={}",
            store.len()
        );
        Self { kv, store }
    }

    /// Returns all projects in presentation order.
    pub fn projects(&self) -> &[Project] {
        self.store.projects()
    }

    /// Returns one project by id.
    pub fn get(&self, id: &ProjectId) -> Option<&Project> {
        self.store.get(id)
    }

    /// Validates and upserts one project, then writes the collection back.
    ///
    /// # Errors
    /// - [`ProjectServiceError::Validation`] when the title is blank or block
    ///   ids collide; the collection is left untouched.
    pub fn save_project(&mut self, project: Project) -> Result<(), ProjectServiceError> {
        project.validate()?;
        self.store.upsert(project);
        self.persist_best_effort();
        Ok(())
    }

    /// Removes one project when the user confirmed the prompt.
    ///
    /// Returns whether a record was removed. `Cancelled` and absent ids are
    /// no-ops.
    pub fn delete_project(&mut self, id: &ProjectId, decision: DeleteDecision) -> bool {
        if decision == DeleteDecision::Cancelled {
            return false;
        }

        let removed = self.store.remove(id);
        if removed {
            self.persist_best_effort();
        }
        removed
    }

    /// Serializes the current snapshot to the adapter.
    ///
    /// Exposed so callers (and tests) can force a write independently of the
    /// auto-persisting mutations.
    pub fn persist(&self) -> StorageResult<()> {
        let payload = self.store.encode()?;
        self.kv.set(PROJECTS_STORAGE_KEY, &payload)
    }

    fn persist_best_effort(&self) {
        if let Err(err) = self.persist() {
            warn!("event=projects_persist module=service status=dropped error={err}");
        }
    }
}
