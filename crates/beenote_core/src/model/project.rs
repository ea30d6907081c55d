//! Project and block domain model.
//!
//! # Responsibility
//! - Define the persisted record shapes for projects and outline blocks.
//! - Provide the child-run rule shared by viewer visibility and toggling.
//! - Validate records before they reach persistence.
//!
//! # Invariants
//! - `Block::id` values are unique within one project.
//! - `level` 0 is the root depth; negative depths cannot be represented.
//! - Block order in `boxes` is authoritative document order. `level` only
//!   encodes nesting depth at a position; reordering never renumbers levels.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a project.
pub type ProjectId = Uuid;

/// Stable identifier for one outline block.
pub type BlockId = Uuid;

/// One line of outline content: text, indent depth and style flags.
///
/// Serialized shape matches the stored project array:
/// `{id, text, level, bold, italic, underline}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Stable id, immutable once created.
    pub id: BlockId,
    /// Free-form content.
    pub text: String,
    /// Indent depth; 0 is a root line.
    pub level: u32,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl Block {
    /// Creates an empty block at the given depth with all styles off.
    pub fn new(level: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: String::new(),
            level,
            bold: false,
            italic: false,
            underline: false,
        }
    }
}

/// A named, ordered collection of blocks; the unit of save/load/delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Stable id, assigned at creation.
    pub id: ProjectId,
    /// User-provided title. May be blank while editing; must be non-blank to
    /// persist (see [`Project::validate`]).
    pub title: String,
    /// Ordered block sequence. Order plus `level` encodes tree structure.
    pub boxes: Vec<Block>,
}

impl Project {
    /// Creates an empty project with a generated stable id.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            boxes: Vec::new(),
        }
    }

    /// Returns whether the block at `index` has children.
    ///
    /// See [`block_has_children`] for the rule.
    pub fn has_children_at(&self, index: usize) -> bool {
        block_has_children(&self.boxes, index)
    }

    /// Checks the persistence preconditions for this record.
    ///
    /// # Errors
    /// - [`ProjectValidationError::BlankTitle`] when the title trims to empty.
    /// - [`ProjectValidationError::DuplicateBlockId`] when two blocks share an
    ///   id.
    pub fn validate(&self) -> Result<(), ProjectValidationError> {
        if self.title.trim().is_empty() {
            return Err(ProjectValidationError::BlankTitle);
        }

        let mut seen = HashSet::with_capacity(self.boxes.len());
        for block in &self.boxes {
            if !seen.insert(block.id) {
                return Err(ProjectValidationError::DuplicateBlockId(block.id));
            }
        }
        Ok(())
    }
}

/// Returns whether the block at `index` of a flat sequence has children.
///
/// A block's children are the maximal contiguous run of following blocks with
/// strictly greater level, so it has children exactly when the next block in
/// sequence sits deeper. Out-of-range indices have no children.
pub fn block_has_children(boxes: &[Block], index: usize) -> bool {
    match (boxes.get(index), boxes.get(index + 1)) {
        (Some(block), Some(next)) => next.level > block.level,
        _ => false,
    }
}

/// Validation failure for a project record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectValidationError {
    /// Title is empty after trimming whitespace.
    BlankTitle,
    /// Two blocks in the sequence share the same id.
    DuplicateBlockId(BlockId),
}

impl Display for ProjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "project title must not be blank"),
            Self::DuplicateBlockId(id) => write!(f, "duplicate block id in project: {id}"),
        }
    }
}

impl Error for ProjectValidationError {}

#[cfg(test)]
mod tests {
    use super::{Block, Project, ProjectValidationError};

    #[test]
    fn new_block_starts_unstyled_at_requested_level() {
        let block = Block::new(3);
        assert_eq!(block.level, 3);
        assert!(block.text.is_empty());
        assert!(!block.bold && !block.italic && !block.underline);
    }

    #[test]
    fn has_children_follows_next_block_level() {
        let mut project = Project::new("Trip");
        project.boxes.push(Block::new(0));
        project.boxes.push(Block::new(1));
        project.boxes.push(Block::new(0));

        assert!(project.has_children_at(0));
        assert!(!project.has_children_at(1));
        assert!(!project.has_children_at(2));
        assert!(!project.has_children_at(99));
    }

    #[test]
    fn validate_rejects_whitespace_only_title() {
        let project = Project::new("   ");
        assert_eq!(
            project.validate().unwrap_err(),
            ProjectValidationError::BlankTitle
        );
    }

    #[test]
    fn validate_rejects_duplicate_block_ids() {
        let mut project = Project::new("Dup");
        let block = Block::new(0);
        project.boxes.push(block.clone());
        project.boxes.push(block.clone());

        assert_eq!(
            project.validate().unwrap_err(),
            ProjectValidationError::DuplicateBlockId(block.id)
        );
    }

    #[test]
    fn project_serializes_to_stored_shape() {
        let mut project = Project::new("Shape");
        project.boxes.push(Block::new(1));

        let value = serde_json::to_value(&project).unwrap();
        assert!(value.get("id").is_some());
        assert_eq!(value["title"], "Shape");
        let block = &value["boxes"][0];
        for field in ["id", "text", "level", "bold", "italic", "underline"] {
            assert!(block.get(field).is_some(), "missing field {field}");
        }
    }
}
