//! Tile tree container and mutation operations
//!
//! The `TileTree` owns the root node and provides the operations the rest
//! of the application calls:
//! - Splitting a pane into a two-child split
//! - Closing a pane (promoting the surviving sibling)
//! - Navigating a pane to a new path
//! - Switching a pane's projection
//! - Writing adjacent child sizes during divider drags
//!
//! Operations on ids that no longer resolve are silent no-ops; async loads
//! and rapid double-fired UI events routinely race ahead of the tree, and
//! the caller is not expected to care.

use filedeck_config::PaneId;

use super::types::{SplitDirection, TileNode};

/// Owns the tile tree and the id counter
pub struct TileTree {
    root: TileNode,
    next_id: PaneId,
    focused: Option<PaneId>,
}

impl TileTree {
    /// Create a tree with a single root pane at the given path
    pub fn new(start_path: impl Into<String>) -> Self {
        Self {
            root: TileNode::pane(1, start_path, None),
            next_id: 2,
            focused: Some(1),
        }
    }

    fn alloc_id(&mut self) -> PaneId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// The root node
    pub fn root(&self) -> &TileNode {
        &self.root
    }

    /// Find a node by id anywhere in the tree
    pub fn find(&self, id: PaneId) -> Option<&TileNode> {
        self.root.find(id)
    }

    /// Find the parent split of a node, as (parent id, child index)
    pub fn find_parent(&self, id: PaneId) -> Option<(PaneId, usize)> {
        self.root.parent_of(id)
    }

    /// All pane ids in document order
    pub fn pane_ids(&self) -> Vec<PaneId> {
        self.root.pane_ids()
    }

    /// Number of leaf panes
    pub fn pane_count(&self) -> usize {
        self.root.pane_count()
    }

    /// The focused pane id, falling back to the first pane in document
    /// order when nothing is focused
    pub fn active_pane_id(&self) -> Option<PaneId> {
        self.focused
            .filter(|id| self.find(*id).is_some_and(TileNode::is_pane))
            .or_else(|| self.pane_ids().first().copied())
    }

    /// Focus a pane by id; ignored if the id is not a live pane
    pub fn focus(&mut self, id: PaneId) {
        if self.find(id).is_some_and(TileNode::is_pane) {
            self.focused = Some(id);
        }
    }

    /// Path and projection of a pane, if the id is a live pane
    pub fn pane_state(&self, id: PaneId) -> Option<(String, Option<String>)> {
        match self.find(id)? {
            TileNode::Pane {
                path, projection, ..
            } => Some((path.clone(), projection.clone())),
            TileNode::Split { .. } => None,
        }
    }

    /// Split a pane into a two-child split along `direction`
    ///
    /// The target pane is transmuted in place into a split (fresh id); its
    /// identity, path and projection move to the split's *first* child, and
    /// the second child is a fresh pane at the same path with the default
    /// projection. Returns the new pane's id, or None (no-op) when the
    /// target is missing or already a split.
    pub fn split_pane(&mut self, id: PaneId, direction: SplitDirection) -> Option<PaneId> {
        if !self.find(id).is_some_and(TileNode::is_pane) {
            log::debug!("split_pane: {id} is not a live pane, ignoring");
            return None;
        }

        let split_id = self.alloc_id();
        let new_pane_id = self.alloc_id();

        let node = self.root.find_mut(id)?;
        let (path, projection) = match node {
            TileNode::Pane {
                path, projection, ..
            } => (path.clone(), projection.take()),
            TileNode::Split { .. } => return None,
        };

        let share = 100.0 / 2.0;
        *node = TileNode::Split {
            id: split_id,
            direction,
            children: vec![
                TileNode::Pane {
                    id,
                    path: path.clone(),
                    projection,
                },
                TileNode::pane(new_pane_id, path, None),
            ],
            sizes: vec![share, share],
        };

        self.focused = Some(new_pane_id);
        log::info!("split pane {id} {direction:?}; new pane {new_pane_id} under split {split_id}");
        Some(new_pane_id)
    }

    /// Close a pane
    ///
    /// With a two-child parent the parent split is replaced wholesale by the
    /// surviving sibling subtree (the sibling keeps its own identity; any
    /// reference to the old parent id is stale afterwards and must be
    /// re-resolved). With more children the split survives and the closed
    /// child's share is redistributed pro rata. Closing the last remaining
    /// pane is refused. Returns whether the tree changed.
    pub fn close_pane(&mut self, id: PaneId) -> bool {
        if self.root.is_pane() {
            log::debug!("close_pane: root is the sole pane, refusing");
            return false;
        }
        if !self.find(id).is_some_and(TileNode::is_pane) {
            log::debug!("close_pane: {id} is not a live pane, ignoring");
            return false;
        }
        let Some((parent_id, index)) = self.find_parent(id) else {
            return false;
        };

        let Some(parent) = self.root.find_mut(parent_id) else {
            return false;
        };
        let TileNode::Split {
            children, sizes, ..
        } = parent
        else {
            return false;
        };

        children.remove(index);
        let removed_share = sizes.remove(index);

        if children.len() == 1 {
            // Promote the survivor into the parent's position
            if let Some(survivor) = children.pop() {
                *parent = survivor;
            }
        } else {
            let remaining: f32 = sizes.iter().sum();
            if remaining > 0.0 {
                for size in sizes.iter_mut() {
                    *size += removed_share * (*size / remaining);
                }
            }
        }

        if self.focused == Some(id) {
            self.focused = self.pane_ids().first().copied();
        }
        log::info!("closed pane {id} (parent split {parent_id})");
        true
    }

    /// Navigate a pane to a new path, resetting its projection
    ///
    /// Switching location never preserves the prior projection choice; the
    /// server may not offer the same projection for the new resource.
    pub fn navigate_pane(&mut self, id: PaneId, path: impl Into<String>) -> bool {
        match self.root.find_mut(id) {
            Some(TileNode::Pane {
                path: pane_path,
                projection,
                ..
            }) => {
                *pane_path = path.into();
                *projection = None;
                true
            }
            _ => {
                log::debug!("navigate_pane: {id} is not a live pane, ignoring");
                false
            }
        }
    }

    /// Switch a pane's projection, leaving its path unchanged
    pub fn switch_projection(&mut self, id: PaneId, projection_id: impl Into<String>) -> bool {
        match self.root.find_mut(id) {
            Some(TileNode::Pane { projection, .. }) => {
                *projection = Some(projection_id.into());
                true
            }
            _ => {
                log::debug!("switch_projection: {id} is not a live pane, ignoring");
                false
            }
        }
    }

    /// Write the two sizes adjacent to divider `handle_index` of a split
    ///
    /// Called live on every pointer move of a divider drag; the values are
    /// already clamped by the resize controller.
    pub fn resize_children(&mut self, split_id: PaneId, handle_index: usize, first: f32, second: f32) {
        if let Some(TileNode::Split { sizes, .. }) = self.root.find_mut(split_id)
            && handle_index + 1 < sizes.len()
        {
            sizes[handle_index] = first;
            sizes[handle_index + 1] = second;
        }
    }
}
