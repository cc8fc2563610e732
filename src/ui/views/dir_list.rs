//! Directory listing view

use egui::RichText;

use filedeck_config::PaneId;
use filedeck_protocol::DirectoryEntry;

use crate::ui::Command;
use crate::ui::views::format_size;

/// Join a directory path and an entry name into a workspace-relative path
fn child_path(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        name.to_string()
    } else {
        format!("{dir}/{name}")
    }
}

/// One clickable row per entry; clicking navigates this pane into it
pub fn draw(
    ui: &mut egui::Ui,
    id: PaneId,
    dir_path: &str,
    entries: &[DirectoryEntry],
    commands: &mut Vec<Command>,
) {
    if entries.is_empty() {
        ui.label(RichText::new("(empty directory)").weak());
        return;
    }

    for entry in entries {
        ui.horizontal(|ui| {
            let icon = if entry.is_dir { "🗀" } else { "🗎" };
            ui.label(icon);
            if ui.link(&entry.name).clicked() {
                commands.push(Command::Navigate(id, child_path(dir_path, &entry.name)));
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if !entry.is_dir {
                    ui.label(RichText::new(format_size(entry.size)).weak());
                }
            });
        });
    }
}
