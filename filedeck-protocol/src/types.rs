//! Serde mirror of the server's document shape.
//!
//! Field names and the `type` tag values must stay in lockstep with the
//! server's serialization; they are asserted by the tests at the bottom.

use serde::{Deserialize, Serialize};

/// A resource rendered through one projection, as served by
/// `GET /api/files/{path}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileDocument {
    /// Workspace-relative path of the resource ("" = root).
    pub path: String,
    /// Whether the resource is a directory.
    pub is_dir: bool,
    /// Projections available for this resource, best first.
    pub projections: Vec<ProjectionInfo>,
    /// Id of the projection that produced `output`.
    pub active_projection: String,
    /// The projected content.
    pub output: ProjectionOutput,
}

/// One available projection for a resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionInfo {
    pub id: String,
    pub name: String,
    pub confidence: f32,
}

/// Tagged projection output.
///
/// The `Unknown` fallback absorbs tags this client does not recognize so a
/// newer server cannot break deserialization of the whole document; the UI
/// renders it as an inline error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ProjectionOutput {
    DirectoryList {
        entries: Vec<DirectoryEntry>,
    },
    Text {
        content: String,
        language: Option<String>,
        line_count: usize,
    },
    Markdown {
        raw: String,
        toc: Vec<TocEntry>,
    },
    Image {
        mime_type: String,
        url: String,
    },
    #[serde(other)]
    Unknown,
}

/// One row of a directory listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub name: String,
    pub is_dir: bool,
    pub size: u64,
    pub extension: Option<String>,
}

/// One heading in a markdown table of contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TocEntry {
    pub level: u8,
    pub text: String,
    pub slug: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_document_deserializes() {
        let json = r#"{
            "path": "",
            "is_dir": true,
            "projections": [{"id": "dir.list", "name": "Directory Listing", "confidence": 1.0}],
            "active_projection": "dir.list",
            "output": {
                "type": "DirectoryList",
                "entries": [
                    {"name": "src", "is_dir": true, "size": 0, "extension": null},
                    {"name": "main.rs", "is_dir": false, "size": 512, "extension": "rs"}
                ]
            }
        }"#;
        let doc: FileDocument = serde_json::from_str(json).unwrap();
        assert!(doc.is_dir);
        assert_eq!(doc.active_projection, "dir.list");
        match doc.output {
            ProjectionOutput::DirectoryList { entries } => {
                assert_eq!(entries.len(), 2);
                assert_eq!(entries[1].extension.as_deref(), Some("rs"));
            }
            other => panic!("expected DirectoryList, got {other:?}"),
        }
    }

    #[test]
    fn text_output_deserializes() {
        let json = r#"{"type": "Text", "content": "fn main() {}", "language": "rust", "line_count": 1}"#;
        let output: ProjectionOutput = serde_json::from_str(json).unwrap();
        match output {
            ProjectionOutput::Text {
                content,
                language,
                line_count,
            } => {
                assert_eq!(content, "fn main() {}");
                assert_eq!(language.as_deref(), Some("rust"));
                assert_eq!(line_count, 1);
            }
            other => panic!("expected Text, got {other:?}"),
        }
    }

    #[test]
    fn markdown_output_deserializes() {
        let json = r##"{"type": "Markdown", "raw": "# Hi", "toc": [{"level": 1, "text": "Hi", "slug": "hi"}]}"##;
        let output: ProjectionOutput = serde_json::from_str(json).unwrap();
        match output {
            ProjectionOutput::Markdown { toc, .. } => assert_eq!(toc[0].slug, "hi"),
            other => panic!("expected Markdown, got {other:?}"),
        }
    }

    #[test]
    fn image_output_deserializes() {
        let json =
            r#"{"type": "Image", "mime_type": "image/png", "url": "/api/files/raw/logo.png"}"#;
        let output: ProjectionOutput = serde_json::from_str(json).unwrap();
        match output {
            ProjectionOutput::Image { url, .. } => assert_eq!(url, "/api/files/raw/logo.png"),
            other => panic!("expected Image, got {other:?}"),
        }
    }

    #[test]
    fn unrecognized_output_type_falls_back_to_unknown() {
        let json = r#"{"type": "Hexdump", "bytes": "00ff"}"#;
        let output: ProjectionOutput = serde_json::from_str(json).unwrap();
        assert!(matches!(output, ProjectionOutput::Unknown));
    }
}
