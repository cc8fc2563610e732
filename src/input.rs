//! Keyboard shortcuts and directional focus navigation
//!
//! Shortcuts operate on the active pane: the focused pane, else the first
//! pane in document order. Everything is emitted as commands, applied by
//! the app after the draw pass.

use std::collections::HashMap;

use egui::{Key, Modifiers, Rect};

use filedeck_config::PaneId;

use crate::tile::{SplitDirection, TileTree};
use crate::ui::Command;

/// Direction for pane-to-pane focus movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Collect commands for this frame's key presses
pub fn handle_shortcuts(
    ctx: &egui::Context,
    tree: &TileTree,
    pane_rects: &HashMap<PaneId, Rect>,
) -> Vec<Command> {
    let mut commands = Vec::new();
    let Some(active) = tree.active_pane_id() else {
        return commands;
    };

    ctx.input_mut(|input| {
        if input.consume_key(Modifiers::CTRL | Modifiers::SHIFT, Key::D) {
            commands.push(Command::Split(active, SplitDirection::Vertical));
        } else if input.consume_key(Modifiers::CTRL, Key::D) {
            commands.push(Command::Split(active, SplitDirection::Horizontal));
        }
        if input.consume_key(Modifiers::CTRL, Key::W) {
            commands.push(Command::Close(active));
        }

        let moves = [
            (Key::ArrowLeft, NavigationDirection::Left),
            (Key::ArrowRight, NavigationDirection::Right),
            (Key::ArrowUp, NavigationDirection::Up),
            (Key::ArrowDown, NavigationDirection::Down),
        ];
        for (key, direction) in moves {
            if input.consume_key(Modifiers::ALT, key)
                && let Some(target) = pane_in_direction(pane_rects, active, direction)
            {
                commands.push(Command::Focus(target));
            }
        }
    });

    commands
}

/// Find the closest pane in a given direction from the active pane
///
/// Uses center points with Manhattan distance, weighting the off-axis
/// component double so grid-like layouts pick the visually nearest pane.
pub fn pane_in_direction(
    pane_rects: &HashMap<PaneId, Rect>,
    from: PaneId,
    direction: NavigationDirection,
) -> Option<PaneId> {
    let from_center = pane_rects.get(&from)?.center();

    let mut best: Option<(PaneId, f32)> = None;
    for (id, rect) in pane_rects {
        if *id == from {
            continue;
        }
        let center = rect.center();
        let is_in_direction = match direction {
            NavigationDirection::Left => center.x < from_center.x,
            NavigationDirection::Right => center.x > from_center.x,
            NavigationDirection::Up => center.y < from_center.y,
            NavigationDirection::Down => center.y > from_center.y,
        };
        if !is_in_direction {
            continue;
        }
        let dx = (center.x - from_center.x).abs();
        let dy = (center.y - from_center.y).abs();
        let distance = match direction {
            NavigationDirection::Left | NavigationDirection::Right => dx + dy * 2.0,
            NavigationDirection::Up | NavigationDirection::Down => dy + dx * 2.0,
        };
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((*id, distance));
        }
    }
    best.map(|(id, _)| id)
}
