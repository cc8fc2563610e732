//! Core types for the tile tree
//!
//! This module defines the fundamental data structures for split panes:
//! - A recursive node enum for arbitrary nesting
//! - Per-pane navigation state (path + projection)
//! - Recursive lookup helpers used by every tree operation

use filedeck_config::PaneId;

/// Direction of a split
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitDirection {
    /// Children are laid out left to right (divider is vertical)
    Horizontal,
    /// Children are stacked top to bottom (divider is horizontal)
    Vertical,
}

/// Tree node for the pane layout
///
/// The tile tree is an unbalanced recursive tree where:
/// - `Pane` leaves show one resource at one path through one projection
/// - `Split` nodes divide space among two or more children along a direction
///
/// A node is exactly one of the two variants; `split_pane` transmutes a
/// `Pane` into a `Split` in place, and `close_pane` replaces a `Split` with
/// a surviving child wholesale. Every node carries a tree-unique id.
#[derive(Debug, Clone, PartialEq)]
pub enum TileNode {
    /// A leaf showing one resource
    Pane {
        /// Unique identifier, stable for the pane's lifetime
        id: PaneId,
        /// Workspace-relative resource path ("" = root)
        path: String,
        /// Selected projection id (None = server default)
        projection: Option<String>,
    },
    /// An interior node dividing space among its children
    Split {
        /// Unique identifier for the split itself
        id: PaneId,
        /// Layout direction of the children
        direction: SplitDirection,
        /// Ordered children, always at least two
        children: Vec<TileNode>,
        /// Percentage of the split's extent per child; parallel to
        /// `children`, each entry >= the configured floor, summing to ~100
        sizes: Vec<f32>,
    },
}

impl TileNode {
    /// Create a leaf pane
    pub fn pane(id: PaneId, path: impl Into<String>, projection: Option<String>) -> Self {
        TileNode::Pane {
            id,
            path: path.into(),
            projection,
        }
    }

    /// The node's identity
    pub fn id(&self) -> PaneId {
        match self {
            TileNode::Pane { id, .. } | TileNode::Split { id, .. } => *id,
        }
    }

    /// Check if this is a leaf pane
    pub fn is_pane(&self) -> bool {
        matches!(self, TileNode::Pane { .. })
    }

    /// Find a node by id (depth-first)
    pub fn find(&self, target: PaneId) -> Option<&TileNode> {
        if self.id() == target {
            return Some(self);
        }
        match self {
            TileNode::Pane { .. } => None,
            TileNode::Split { children, .. } => {
                children.iter().find_map(|child| child.find(target))
            }
        }
    }

    /// Find a node by id, mutably
    pub fn find_mut(&mut self, target: PaneId) -> Option<&mut TileNode> {
        if self.id() == target {
            return Some(self);
        }
        match self {
            TileNode::Pane { .. } => None,
            TileNode::Split { children, .. } => {
                children.iter_mut().find_map(|child| child.find_mut(target))
            }
        }
    }

    /// Find the parent split of a node, as (parent id, child index)
    ///
    /// Returns None for the root and for ids not present in this subtree.
    pub fn parent_of(&self, target: PaneId) -> Option<(PaneId, usize)> {
        if let TileNode::Split { id, children, .. } = self {
            for (index, child) in children.iter().enumerate() {
                if child.id() == target {
                    return Some((*id, index));
                }
                if let Some(found) = child.parent_of(target) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// All pane ids in this subtree, in document order
    pub fn pane_ids(&self) -> Vec<PaneId> {
        let mut ids = Vec::new();
        self.collect_pane_ids(&mut ids);
        ids
    }

    fn collect_pane_ids(&self, ids: &mut Vec<PaneId>) {
        match self {
            TileNode::Pane { id, .. } => ids.push(*id),
            TileNode::Split { children, .. } => {
                for child in children {
                    child.collect_pane_ids(ids);
                }
            }
        }
    }

    /// Count leaf panes in this subtree
    pub fn pane_count(&self) -> usize {
        match self {
            TileNode::Pane { .. } => 1,
            TileNode::Split { children, .. } => children.iter().map(TileNode::pane_count).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> TileNode {
        TileNode::Split {
            id: 10,
            direction: SplitDirection::Horizontal,
            children: vec![
                TileNode::pane(1, "a", None),
                TileNode::Split {
                    id: 11,
                    direction: SplitDirection::Vertical,
                    children: vec![TileNode::pane(2, "b", None), TileNode::pane(3, "c", None)],
                    sizes: vec![50.0, 50.0],
                },
            ],
            sizes: vec![50.0, 50.0],
        }
    }

    #[test]
    fn find_resolves_nested_nodes() {
        let tree = sample_tree();
        assert!(tree.find(3).is_some_and(TileNode::is_pane));
        assert!(tree.find(11).is_some_and(|n| !n.is_pane()));
        assert!(tree.find(99).is_none());
    }

    #[test]
    fn parent_of_reports_split_and_index() {
        let tree = sample_tree();
        assert_eq!(tree.parent_of(1), Some((10, 0)));
        assert_eq!(tree.parent_of(3), Some((11, 1)));
        assert_eq!(tree.parent_of(10), None); // root has no parent
        assert_eq!(tree.parent_of(99), None);
    }

    #[test]
    fn pane_ids_are_document_order() {
        assert_eq!(sample_tree().pane_ids(), vec![1, 2, 3]);
        assert_eq!(sample_tree().pane_count(), 3);
    }
}
