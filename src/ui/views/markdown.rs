//! Markdown view
//!
//! Full markdown layout is a collaborator concern; this view shows the
//! server-extracted table of contents as an indented outline above the raw
//! source.

use egui::{Label, RichText};

use filedeck_protocol::TocEntry;

pub fn draw(ui: &mut egui::Ui, raw: &str, toc: &[TocEntry]) {
    if !toc.is_empty() {
        for entry in toc {
            let indent = "    ".repeat(entry.level.saturating_sub(1) as usize);
            ui.label(RichText::new(format!("{indent}{}", entry.text)).strong());
        }
        ui.separator();
    }
    ui.add(Label::new(RichText::new(raw).monospace()));
}
