//! Recursive tree layout and the divider resize controller
//!
//! Each frame walks the tile tree, allocating a rect per child from the
//! split's percentage sizes and drawing a draggable divider between
//! adjacent children. Dragging writes the two adjacent sizes through a
//! [`Command::Resize`]; nothing else is rebuilt and no fetch is issued, so
//! the per-move cost is bounded regardless of tree depth.

use std::collections::HashMap;

use egui::{CursorIcon, Pos2, Rect, Sense, UiBuilder, Vec2};

use filedeck_config::PaneId;
use filedeck_protocol::ApiClient;

use crate::registry::PaneRegistry;
use crate::tile::{SplitDirection, TileNode};
use crate::ui::{Command, pane_ui};

/// Layout knobs sourced from the config
#[derive(Debug, Clone, Copy)]
pub struct LayoutParams {
    /// Visual width of dividers between panes, in points
    pub divider_width: f32,
    /// Width of the hit area for divider drag detection
    pub divider_hit_width: f32,
    /// Smallest share (percent) a pane can be resized down to
    pub min_pane_percent: f32,
}

/// Read-only context threaded through the draw pass
pub struct TreeView<'a> {
    pub registry: &'a PaneRegistry,
    pub client: &'a ApiClient,
    pub params: LayoutParams,
    pub active: Option<PaneId>,
}

/// State captured when a divider drag starts
///
/// `start_sizes` snapshots the two adjacent shares; every pointer move is
/// computed against the snapshot, not the current sizes, so the drag is
/// stable under repeated clamping.
#[derive(Debug, Clone, Copy)]
pub struct ResizeDrag {
    pub split_id: PaneId,
    pub handle_index: usize,
    /// Pointer coordinate along the split's primary axis at drag start
    pub start_coord: f32,
    /// Container extent along that axis, in points
    pub total_extent: f32,
    pub start_sizes: (f32, f32),
}

/// The two adjacent shares for a pointer position during a drag
///
/// Both sides clamp independently at `floor`; when only one side hits the
/// floor the pair may no longer sum to its pre-drag total. That drift is
/// accepted and deliberately not redistributed.
pub fn resized_sizes(drag: &ResizeDrag, coord: f32, floor: f32) -> (f32, f32) {
    let delta_percent = (coord - drag.start_coord) / drag.total_extent * 100.0;
    (
        (drag.start_sizes.0 + delta_percent).max(floor),
        (drag.start_sizes.1 - delta_percent).max(floor),
    )
}

/// Walk the tree, drawing panes and dividers into `rect`
///
/// Pane rects are recorded into `pane_rects` for directional focus
/// navigation; all interactions land in `commands`.
pub fn draw_node(
    ui: &mut egui::Ui,
    view: &TreeView<'_>,
    node: &TileNode,
    rect: Rect,
    drag: &mut Option<ResizeDrag>,
    pane_rects: &mut HashMap<PaneId, Rect>,
    commands: &mut Vec<Command>,
) {
    match node {
        TileNode::Pane { id, .. } => {
            pane_rects.insert(*id, rect);

            let clicked_inside = ui.input(|i| {
                i.pointer.primary_pressed()
                    && i.pointer.interact_pos().is_some_and(|p| rect.contains(p))
            });
            if clicked_inside && view.active != Some(*id) {
                commands.push(Command::Focus(*id));
            }

            ui.scope_builder(UiBuilder::new().max_rect(rect), |ui| {
                pane_ui::draw_pane(ui, view, *id, commands);
            });
        }
        TileNode::Split {
            id: split_id,
            direction,
            children,
            sizes,
        } => {
            let axis_extent = match direction {
                SplitDirection::Horizontal => rect.width(),
                SplitDirection::Vertical => rect.height(),
            };
            let divider_total = view.params.divider_width * (children.len() - 1) as f32;
            let content_extent = (axis_extent - divider_total).max(0.0);

            let mut cursor = match direction {
                SplitDirection::Horizontal => rect.left(),
                SplitDirection::Vertical => rect.top(),
            };

            for (index, child) in children.iter().enumerate() {
                let length = content_extent * sizes[index] / 100.0;
                let child_rect = match direction {
                    SplitDirection::Horizontal => Rect::from_min_size(
                        Pos2::new(cursor, rect.top()),
                        Vec2::new(length, rect.height()),
                    ),
                    SplitDirection::Vertical => Rect::from_min_size(
                        Pos2::new(rect.left(), cursor),
                        Vec2::new(rect.width(), length),
                    ),
                };
                draw_node(ui, view, child, child_rect, drag, pane_rects, commands);
                cursor += length;

                if index + 1 < children.len() {
                    handle_divider(
                        ui,
                        view,
                        *split_id,
                        *direction,
                        index,
                        (sizes[index], sizes[index + 1]),
                        rect,
                        cursor,
                        axis_extent,
                        drag,
                        commands,
                    );
                    cursor += view.params.divider_width;
                }
            }
        }
    }
}

/// Draw one divider and run its drag protocol
#[allow(clippy::too_many_arguments)]
fn handle_divider(
    ui: &mut egui::Ui,
    view: &TreeView<'_>,
    split_id: PaneId,
    direction: SplitDirection,
    handle_index: usize,
    adjacent_sizes: (f32, f32),
    split_rect: Rect,
    cursor: f32,
    axis_extent: f32,
    drag: &mut Option<ResizeDrag>,
    commands: &mut Vec<Command>,
) {
    let params = view.params;
    let hit_padding = (params.divider_hit_width - params.divider_width).max(0.0) / 2.0;

    let (divider_rect, hit_rect, cursor_icon) = match direction {
        SplitDirection::Horizontal => {
            let divider = Rect::from_min_size(
                Pos2::new(cursor, split_rect.top()),
                Vec2::new(params.divider_width, split_rect.height()),
            );
            (
                divider,
                divider.expand2(Vec2::new(hit_padding, 0.0)),
                CursorIcon::ResizeHorizontal,
            )
        }
        SplitDirection::Vertical => {
            let divider = Rect::from_min_size(
                Pos2::new(split_rect.left(), cursor),
                Vec2::new(split_rect.width(), params.divider_width),
            );
            (
                divider,
                divider.expand2(Vec2::new(0.0, hit_padding)),
                CursorIcon::ResizeVertical,
            )
        }
    };

    let response = ui
        .interact(
            hit_rect,
            ui.id().with(("divider", split_id, handle_index)),
            Sense::drag(),
        )
        .on_hover_cursor(cursor_icon);

    let color = if response.hovered() || response.dragged() {
        ui.visuals().widgets.hovered.bg_stroke.color
    } else {
        ui.visuals().widgets.noninteractive.bg_stroke.color
    };
    ui.painter().rect_filled(divider_rect, 0, color);

    let axis_coord = |pos: Pos2| match direction {
        SplitDirection::Horizontal => pos.x,
        SplitDirection::Vertical => pos.y,
    };

    if response.drag_started()
        && let Some(pos) = response.interact_pointer_pos()
    {
        *drag = Some(ResizeDrag {
            split_id,
            handle_index,
            start_coord: axis_coord(pos),
            total_extent: axis_extent,
            start_sizes: adjacent_sizes,
        });
    }

    if response.dragged()
        && let Some(active) = drag.as_ref()
        && active.split_id == split_id
        && active.handle_index == handle_index
        && let Some(pos) = response.interact_pointer_pos()
    {
        let (first, second) = resized_sizes(active, axis_coord(pos), params.min_pane_percent);
        commands.push(Command::Resize {
            split_id,
            handle_index,
            first,
            second,
        });
    }

    if response.drag_stopped() {
        // Sizes were written live on every move; nothing left to commit
        *drag = None;
    }
}
