//! Ordered project collection with pure state transitions.
//!
//! # Responsibility
//! - Implement upsert/remove/list semantics over the project list.
//! - Serialize the full collection to and from the stored JSON array.
//!
//! # Invariants
//! - `upsert` of an unknown id prepends; a known id is replaced in place.
//! - `remove` of an absent id is a no-op.
//! - No method here touches storage; persistence is orchestrated by the
//!   service layer.

use crate::model::project::{Project, ProjectId};

/// Ordered, in-memory collection of project records.
///
/// Most recently created projects come first; updating an existing project
/// does not move it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectStore {
    projects: Vec<Project>,
}

impl ProjectStore {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a collection from the stored JSON array.
    pub fn decode(raw: &str) -> Result<Self, serde_json::Error> {
        let projects: Vec<Project> = serde_json::from_str(raw)?;
        Ok(Self { projects })
    }

    /// Serializes the full collection to the stored JSON array.
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.projects)
    }

    /// Inserts or replaces one project record.
    ///
    /// Unknown ids are prepended so the newest project leads the home list;
    /// known ids are replaced in place, keeping their position.
    pub fn upsert(&mut self, project: Project) {
        match self.projects.iter_mut().find(|p| p.id == project.id) {
            Some(existing) => *existing = project,
            None => self.projects.insert(0, project),
        }
    }

    /// Removes the record with the given id.
    ///
    /// Returns whether a record was removed; removing an absent id is a
    /// no-op.
    pub fn remove(&mut self, id: &ProjectId) -> bool {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != *id);
        self.projects.len() != before
    }

    /// Returns the record with the given id, if present.
    pub fn get(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == *id)
    }

    /// Returns all records in presentation order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
