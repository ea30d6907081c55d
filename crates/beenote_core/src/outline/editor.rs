//! Outline editor model for one project being edited.
//!
//! # Responsibility
//! - Track the block sequence, title and active-block pointer for the editor
//!   screen.
//! - Apply toolbar mutations (insert, indent, styles, delete) to the active
//!   block.
//! - Gate saving behind the non-blank-title precondition.
//!
//! # Invariants
//! - New blocks inherit the active block's level and land right after it.
//! - Indent changes never cascade to descendants; deleting a block keeps its
//!   descendants at their original levels. Both are intentional semantics of
//!   the flat sequence, not defects.
//! - `active_id` is cleared when the active block is deleted.

use crate::model::project::{Block, BlockId, Project, ProjectId};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Direction for a one-step indent change of the active block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentDirection {
    /// One level deeper.
    Indent,
    /// One level shallower, floored at the root depth.
    Outdent,
}

/// One of the three independent style flags on a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleFlag {
    Bold,
    Italic,
    Underline,
}

/// Save rejection from the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorError {
    /// Title trims to empty; the user must add one before saving.
    BlankTitle,
}

impl Display for EditorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "please add a title to save"),
        }
    }
}

impl Error for EditorError {}

/// Editing state for one project: title, block sequence and focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineEditor {
    project_id: Option<ProjectId>,
    title: String,
    boxes: Vec<Block>,
    active_id: Option<BlockId>,
}

impl OutlineEditor {
    /// Starts a fresh project draft with one empty root block focused.
    pub fn new() -> Self {
        let seed = Block::new(0);
        let active_id = Some(seed.id);
        Self {
            project_id: None,
            title: String::new(),
            boxes: vec![seed],
            active_id,
        }
    }

    /// Starts editing an existing project.
    ///
    /// An empty project is seeded with one root block so the editor always
    /// has something to type into; the first block becomes active.
    pub fn from_project(project: &Project) -> Self {
        let mut boxes = project.boxes.clone();
        if boxes.is_empty() {
            boxes.push(Block::new(0));
        }
        let active_id = boxes.first().map(|block| block.id);
        Self {
            project_id: Some(project.id),
            title: project.title.clone(),
            boxes,
            active_id,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn boxes(&self) -> &[Block] {
        &self.boxes
    }

    pub fn active_id(&self) -> Option<BlockId> {
        self.active_id
    }

    /// Inserts a new empty block right after the active one and focuses it.
    ///
    /// The block inherits the active block's level. With no active block the
    /// insertion lands at index 0 with level 0.
    pub fn add_block_after_active(&mut self) -> BlockId {
        let active_index = self.active_index();
        let level = active_index.map_or(0, |index| self.boxes[index].level);
        let insert_at = active_index.map_or(0, |index| index + 1);

        let block = Block::new(level);
        let id = block.id;
        self.boxes.insert(insert_at, block);
        self.active_id = Some(id);
        id
    }

    /// Shifts the active block's level by one step, floored at 0.
    ///
    /// Descendants are not adjusted; a resulting level gap is accepted.
    /// No-op without an active block.
    pub fn change_indent(&mut self, direction: IndentDirection) {
        let Some(index) = self.active_index() else {
            return;
        };
        let block = &mut self.boxes[index];
        block.level = match direction {
            IndentDirection::Indent => block.level + 1,
            IndentDirection::Outdent => block.level.saturating_sub(1),
        };
    }

    /// Flips one style flag on the active block. No-op without one.
    pub fn toggle_style(&mut self, flag: StyleFlag) {
        let Some(index) = self.active_index() else {
            return;
        };
        let block = &mut self.boxes[index];
        match flag {
            StyleFlag::Bold => block.bold = !block.bold,
            StyleFlag::Italic => block.italic = !block.italic,
            StyleFlag::Underline => block.underline = !block.underline,
        }
    }

    /// Removes one block by id.
    ///
    /// Descendants are neither deleted nor re-leveled; they attach to
    /// whatever block now precedes them. Clears the focus pointer when the
    /// removed block was active. Returns whether a block was removed.
    pub fn delete_block(&mut self, id: BlockId) -> bool {
        let before = self.boxes.len();
        self.boxes.retain(|block| block.id != id);
        if self.active_id == Some(id) {
            self.active_id = None;
        }
        self.boxes.len() != before
    }

    /// Moves focus; no side effects beyond the pointer update.
    pub fn set_active(&mut self, id: Option<BlockId>) {
        self.active_id = id;
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Replaces the text of one block. Returns whether the id was found.
    pub fn set_text(&mut self, id: BlockId, text: impl Into<String>) -> bool {
        match self.boxes.iter_mut().find(|block| block.id == id) {
            Some(block) => {
                block.text = text.into();
                true
            }
            None => false,
        }
    }

    /// Produces the project record to save.
    ///
    /// The first successful save allocates the project id; later saves reuse
    /// it so the store replaces the record in place.
    ///
    /// # Errors
    /// - [`EditorError::BlankTitle`] when the title trims to empty; no state
    ///   changes and nothing is produced.
    pub fn finish(&mut self) -> Result<Project, EditorError> {
        if self.title.trim().is_empty() {
            return Err(EditorError::BlankTitle);
        }

        let id = *self.project_id.get_or_insert_with(Uuid::new_v4);
        Ok(Project {
            id,
            title: self.title.clone(),
            boxes: self.boxes.clone(),
        })
    }

    fn active_index(&self) -> Option<usize> {
        let active_id = self.active_id?;
        self.boxes.iter().position(|block| block.id == active_id)
    }
}

impl Default for OutlineEditor {
    fn default() -> Self {
        Self::new()
    }
}
