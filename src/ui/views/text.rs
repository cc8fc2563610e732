//! Plain text view

use egui::{Label, RichText};

/// Monospace text with a dim metadata line
pub fn draw(ui: &mut egui::Ui, content: &str, language: Option<&str>, line_count: usize) {
    let meta = match language {
        Some(lang) => format!("{lang} · {line_count} lines"),
        None => format!("{line_count} lines"),
    };
    ui.label(RichText::new(meta).weak().small());
    ui.add(Label::new(RichText::new(content).monospace()));
}
