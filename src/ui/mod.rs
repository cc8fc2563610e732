//! Visual tree: projecting the tile tree onto egui
//!
//! Drawing never mutates the tree. Every interaction (breadcrumb click,
//! projection switch, divider drag, split/close button) is collected as a
//! [`Command`] and applied by the app after the walk, so structural
//! mutation can never interleave with rendering.

pub mod layout;
pub mod pane_ui;
pub mod views;

use filedeck_config::PaneId;

use crate::tile::SplitDirection;

/// A deferred mutation produced by the draw pass or the keyboard layer
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Focus(PaneId),
    Split(PaneId, SplitDirection),
    Close(PaneId),
    Navigate(PaneId, String),
    SwitchProjection(PaneId, String),
    Resize {
        split_id: PaneId,
        handle_index: usize,
        first: f32,
        second: f32,
    },
}
