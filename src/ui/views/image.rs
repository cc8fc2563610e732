//! Image preview view
//!
//! The server hands back a server-relative raw-bytes URL; it is resolved
//! against the client base and handed to egui's installed image loaders.

use egui::{Color32, Image, RichText};

use filedeck_protocol::ApiClient;

pub fn draw(ui: &mut egui::Ui, client: &ApiClient, mime_type: &str, url: &str) {
    match client.absolute(url) {
        Ok(absolute) => {
            ui.label(RichText::new(mime_type).weak().small());
            ui.add(
                Image::from_uri(absolute.to_string())
                    .max_size(ui.available_size())
                    .maintain_aspect_ratio(true),
            );
        }
        Err(error) => {
            ui.colored_label(Color32::LIGHT_RED, format!("bad image url: {error}"));
        }
    }
}
