//! Collapsible outline viewer model.
//!
//! # Responsibility
//! - Compute the visible subsequence of a flat indent-annotated block list
//!   from the per-session expanded set.
//! - Apply toggle requests, ignoring blocks that cannot expand.
//!
//! # Invariants
//! - The visible output is an order-preserving subsequence of the input.
//! - A block is visible iff every strict ancestor on its path is expanded;
//!   root blocks are always visible.
//! - The expanded set is transient view state and is never persisted.

use crate::model::project::{block_has_children, Block, BlockId, Project};
use std::collections::HashSet;

/// Viewing state for one project's outline: the block snapshot plus the set
/// of expanded block ids.
#[derive(Debug, Clone, Default)]
pub struct OutlineViewer {
    boxes: Vec<Block>,
    expanded: HashSet<BlockId>,
}

impl OutlineViewer {
    /// Creates a viewer over a flat block sequence with everything collapsed.
    pub fn new(boxes: Vec<Block>) -> Self {
        Self {
            boxes,
            expanded: HashSet::new(),
        }
    }

    /// Creates a viewer over a project's block sequence.
    pub fn for_project(project: &Project) -> Self {
        Self::new(project.boxes.clone())
    }

    /// Returns the currently visible blocks in document order.
    ///
    /// Single left-to-right pass over the sequence. `open_at_level[d]` tracks
    /// whether the ancestor at depth `d` is currently propagating visibility
    /// downward; the stack is truncated to the block's depth before the
    /// visibility test and its own open state is pushed after it,
    /// unconditionally, so later deeper blocks always test against the
    /// freshest ancestor chain.
    pub fn visible(&self) -> Vec<&Block> {
        let mut out = Vec::new();
        let mut open_at_level: Vec<bool> = Vec::new();

        for (index, block) in self.boxes.iter().enumerate() {
            let lvl = block.level as usize;
            open_at_level.truncate(lvl);

            if lvl == 0 || open_at_level.iter().all(|&open| open) {
                out.push(block);
            }

            let open = block_has_children(&self.boxes, index) && self.expanded.contains(&block.id);
            // Depths skipped by an indent gap count as open: only the
            // ancestors actually present in the sequence gate visibility.
            open_at_level.resize(lvl, true);
            open_at_level.push(open);
        }

        out
    }

    /// Flips the expanded state of one block.
    ///
    /// Blocks without children (and unknown ids) are left untouched so the
    /// expanded set only ever names expandable blocks. Returns whether the
    /// set changed.
    pub fn toggle(&mut self, id: BlockId) -> bool {
        let Some(index) = self.boxes.iter().position(|block| block.id == id) else {
            return false;
        };
        if !block_has_children(&self.boxes, index) {
            return false;
        }

        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
        true
    }

    /// Returns whether a block id is currently expanded.
    pub fn is_expanded(&self, id: &BlockId) -> bool {
        self.expanded.contains(id)
    }

    /// Returns whether the block with `id` has children.
    pub fn has_children(&self, id: &BlockId) -> bool {
        self.boxes
            .iter()
            .position(|block| block.id == *id)
            .is_some_and(|index| block_has_children(&self.boxes, index))
    }

    pub fn boxes(&self) -> &[Block] {
        &self.boxes
    }
}
