//! Wire types and async client for the filedeck file projection API.
//!
//! The server exposes one document endpoint:
//!
//! ```text
//! GET {base}/api/files/{path}?projection={id}
//! ```
//!
//! returning a [`FileDocument`] describing the resource at `path` rendered
//! through one projection, plus the list of other projections available for
//! it. Errors come back as non-2xx statuses with an `{ "error": "..." }`
//! body. Raw file bytes (used by the image projection) are served from
//! `{base}/api/files/raw/{path}`.

pub mod client;
pub mod error;
mod types;

pub use client::ApiClient;
pub use error::ApiError;
pub use types::{DirectoryEntry, FileDocument, ProjectionInfo, ProjectionOutput, TocEntry};
