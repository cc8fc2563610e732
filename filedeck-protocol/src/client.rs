//! Async HTTP client for the file projection API.

use serde::Deserialize;
use url::Url;

use crate::error::ApiError;
use crate::types::FileDocument;

/// Shape of the server's error body.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Client for one projection server.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: Url,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client for the given base URL (scheme + host + port).
    pub fn new(base: Url) -> Self {
        Self {
            base,
            http: reqwest::Client::new(),
        }
    }

    /// The server base URL.
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Build the document URL for a path, percent-encoding each segment.
    ///
    /// The root resource is addressed as `/api/files/` (trailing slash),
    /// matching the server's route table.
    fn document_url(&self, path: &str, projection: Option<&str>) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?;
            segments.pop_if_empty().push("api").push("files");
            if path.is_empty() {
                segments.push("");
            } else {
                for part in path.split('/') {
                    segments.push(part);
                }
            }
        }
        if let Some(id) = projection {
            url.query_pairs_mut().append_pair("projection", id);
        }
        Ok(url)
    }

    /// URL of the raw-bytes endpoint for a path (used for image previews).
    pub fn raw_url(&self, path: &str) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?;
            segments.pop_if_empty().push("api").push("files").push("raw");
            for part in path.split('/') {
                segments.push(part);
            }
        }
        Ok(url)
    }

    /// Resolve a server-relative URL (e.g. an image `url` field) against
    /// the base.
    pub fn absolute(&self, relative: &str) -> Result<Url, ApiError> {
        Ok(self.base.join(relative)?)
    }

    /// Fetch the document for `(path, projection)`.
    ///
    /// A non-success status is turned into [`ApiError::Server`] carrying
    /// the server's error message when the body decodes, or the HTTP
    /// status line otherwise.
    pub async fn fetch_document(
        &self,
        path: &str,
        projection: Option<&str>,
    ) -> Result<FileDocument, ApiError> {
        let url = self.document_url(path, projection)?;
        log::debug!("fetching {url}");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => status.to_string(),
            };
            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<FileDocument>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new(Url::parse("http://127.0.0.1:3000").unwrap())
    }

    #[test]
    fn root_document_url_has_trailing_slash() {
        let url = client().document_url("", None).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:3000/api/files/");
    }

    #[test]
    fn nested_path_and_projection() {
        let url = client()
            .document_url("docs/readme.md", Some("text.raw"))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:3000/api/files/docs/readme.md?projection=text.raw"
        );
    }

    #[test]
    fn path_segments_are_percent_encoded() {
        let url = client().document_url("my docs/a b.txt", None).unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:3000/api/files/my%20docs/a%20b.txt"
        );
    }

    #[test]
    fn raw_url_points_at_raw_endpoint() {
        let url = client().raw_url("img/logo.png").unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:3000/api/files/raw/img/logo.png"
        );
    }

    #[test]
    fn absolute_resolves_server_relative_urls() {
        let url = client().absolute("/api/files/raw/logo.png").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:3000/api/files/raw/logo.png");
    }
}
