//! Per-pane chrome: breadcrumb, projection selector, content area
//!
//! All of this draws from the pane's registry surface. A pane whose fetch
//! failed shows the failure message inline; an unknown output type shows
//! an inline error; neither disturbs any other pane.

use egui::{Color32, Frame, RichText, ScrollArea, Stroke};

use filedeck_config::PaneId;
use filedeck_protocol::{FileDocument, ProjectionOutput};

use crate::registry::{PaneSurface, SurfaceState};
use crate::tile::SplitDirection;
use crate::ui::layout::TreeView;
use crate::ui::{Command, views};

/// Draw one pane's full chrome inside the current (rect-scoped) ui
pub fn draw_pane(ui: &mut egui::Ui, view: &TreeView<'_>, id: PaneId, commands: &mut Vec<Command>) {
    let is_active = view.active == Some(id);
    let border = if is_active {
        Stroke::new(1.0, ui.visuals().selection.bg_fill)
    } else {
        Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color)
    };

    Frame::new()
        .fill(ui.visuals().panel_fill)
        .stroke(border)
        .inner_margin(4)
        .show(ui, |ui| {
            ui.set_min_size(ui.available_size());

            let Some(surface) = view.registry.get(id) else {
                // Surface not yet registered; the next sync will fill it in
                ui.spinner();
                return;
            };

            header_row(ui, id, surface, commands);

            if let SurfaceState::Ready(document) = &surface.state {
                projection_row(ui, id, document, commands);
            }
            ui.separator();

            match &surface.state {
                SurfaceState::Loading => {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(RichText::new("loading…").weak());
                    });
                }
                SurfaceState::Failed(message) => {
                    ui.colored_label(Color32::LIGHT_RED, message);
                }
                SurfaceState::Ready(document) => {
                    content_area(ui, view, id, document, commands);
                }
            }
        });
}

/// Breadcrumb plus split/close controls
fn header_row(ui: &mut egui::Ui, id: PaneId, surface: &PaneSurface, commands: &mut Vec<Command>) {
    ui.horizontal(|ui| {
        breadcrumb(ui, id, &surface.path, commands);

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .small_button("✕")
                .on_hover_text("Close pane (Ctrl+W)")
                .clicked()
            {
                commands.push(Command::Close(id));
            }
            if ui
                .small_button("⬍")
                .on_hover_text("Split top/bottom (Ctrl+Shift+D)")
                .clicked()
            {
                commands.push(Command::Split(id, SplitDirection::Vertical));
            }
            if ui
                .small_button("⬌")
                .on_hover_text("Split side by side (Ctrl+D)")
                .clicked()
            {
                commands.push(Command::Split(id, SplitDirection::Horizontal));
            }
        });
    });
}

/// One clickable segment per path component; the leading "root" segment
/// navigates to the empty path
fn breadcrumb(ui: &mut egui::Ui, id: PaneId, path: &str, commands: &mut Vec<Command>) {
    ui.spacing_mut().item_spacing.x = 2.0;

    if ui.small_button("root").clicked() {
        commands.push(Command::Navigate(id, String::new()));
    }

    if path.is_empty() {
        return;
    }

    let segments: Vec<&str> = path.split('/').collect();
    for (index, segment) in segments.iter().enumerate() {
        ui.label(RichText::new("/").weak());
        let prefix = segments[..=index].join("/");
        if ui.small_button(*segment).clicked() {
            commands.push(Command::Navigate(id, prefix));
        }
    }
}

/// One selectable button per available projection, the active one marked
fn projection_row(
    ui: &mut egui::Ui,
    id: PaneId,
    document: &FileDocument,
    commands: &mut Vec<Command>,
) {
    if document.projections.is_empty() {
        return;
    }
    ui.horizontal_wrapped(|ui| {
        for projection in &document.projections {
            let active = projection.id == document.active_projection;
            if ui.selectable_label(active, &projection.name).clicked() && !active {
                commands.push(Command::SwitchProjection(id, projection.id.clone()));
            }
        }
    });
}

/// Dispatch the content area on the output's type tag
fn content_area(
    ui: &mut egui::Ui,
    view: &TreeView<'_>,
    id: PaneId,
    document: &FileDocument,
    commands: &mut Vec<Command>,
) {
    ScrollArea::vertical()
        .id_salt(("pane-content", id))
        .auto_shrink([false, false])
        .show(ui, |ui| match &document.output {
            ProjectionOutput::DirectoryList { entries } => {
                views::dir_list::draw(ui, id, &document.path, entries, commands);
            }
            ProjectionOutput::Text {
                content,
                language,
                line_count,
            } => {
                views::text::draw(ui, content, language.as_deref(), *line_count);
            }
            ProjectionOutput::Markdown { raw, toc } => {
                views::markdown::draw(ui, raw, toc);
            }
            ProjectionOutput::Image { mime_type, url } => {
                views::image::draw(ui, view.client, mime_type, url);
            }
            ProjectionOutput::Unknown => {
                ui.colored_label(
                    Color32::LIGHT_RED,
                    "unsupported output type for this projection",
                );
            }
        });
}
