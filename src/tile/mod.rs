//! Tile tree: the recursive pane/split layout model.
//!
//! `types` defines the node structure, `tree` the owning container and its
//! mutation operations (split, close, navigate, resize).

pub mod tree;
pub mod types;

pub use tree::TileTree;
pub use types::{SplitDirection, TileNode};

// Re-export PaneId from filedeck-config for shared access across crates
pub use filedeck_config::PaneId;
