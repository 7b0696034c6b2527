//! Profile document loading.
//!
//! The document is fetched once per page lifetime from a location relative
//! to the page: an HTTP(S) URL or a local file. Every failure is logged and
//! turned into an absent document; there are no retries.

use std::path::{Path, PathBuf};

use url::Url;

use crate::error::FetchError;
use crate::model::ProfileDocument;

/// Where the profile document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Http(Url),
    File(PathBuf),
}

impl DataSource {
    /// Resolve `data_path` against the page location.
    ///
    /// - absolute `http(s)://` or `file://` paths are used as-is
    /// - a URL `base` is joined like a browser resolves a relative href
    /// - any other `base` is a directory on disk
    /// - no `base`: `data_path` is a file relative to the working directory
    pub fn resolve(base: Option<&str>, data_path: &str) -> Result<Self, FetchError> {
        if let Some(url) = parse_absolute(data_path) {
            return Self::from_url(url, data_path);
        }

        match base {
            Some(base) => match parse_absolute(base) {
                Some(base_url) => {
                    let joined = base_url
                        .join(data_path)
                        .map_err(|e| FetchError::InvalidSource(data_path.to_string(), e.to_string()))?;
                    Self::from_url(joined, data_path)
                }
                None => Ok(DataSource::File(Path::new(base).join(data_path))),
            },
            None => Ok(DataSource::File(PathBuf::from(data_path))),
        }
    }

    fn from_url(url: Url, raw: &str) -> Result<Self, FetchError> {
        match url.scheme() {
            "http" | "https" => Ok(DataSource::Http(url)),
            "file" => url
                .to_file_path()
                .map(DataSource::File)
                .map_err(|_| FetchError::InvalidSource(raw.to_string(), "not a local path".into())),
            other => Err(FetchError::InvalidSource(
                raw.to_string(),
                format!("unsupported scheme `{}`", other),
            )),
        }
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::Http(url) => write!(f, "{}", url),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Parse as an absolute URL. Single-letter schemes are Windows drive
/// letters, not URLs.
fn parse_absolute(raw: &str) -> Option<Url> {
    Url::parse(raw).ok().filter(|u| u.scheme().len() > 1)
}

/// Load and parse the document, reporting why it failed.
pub async fn load_profile(source: &DataSource) -> Result<ProfileDocument, FetchError> {
    let bytes = match source {
        DataSource::Http(url) => fetch_http(url).await?,
        DataSource::File(path) => tokio::fs::read(path).await.map_err(|source| FetchError::Io {
            path: path.display().to_string(),
            source,
        })?,
    };
    let document = serde_json::from_slice(&bytes)?;
    Ok(document)
}

#[cfg(feature = "http")]
async fn fetch_http(url: &Url) -> Result<Vec<u8>, FetchError> {
    let transport = |source| FetchError::Transport {
        url: url.to_string(),
        source,
    };

    let resp = reqwest::get(url.clone()).await.map_err(transport)?;
    if !resp.status().is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: resp.status().as_u16(),
        });
    }
    let body = resp.bytes().await.map_err(transport)?;
    Ok(body.to_vec())
}

#[cfg(not(feature = "http"))]
async fn fetch_http(url: &Url) -> Result<Vec<u8>, FetchError> {
    Err(FetchError::HttpDisabled(url.to_string()))
}

/// Load the document, or log the failure and return `None`.
pub async fn fetch_profile(source: &DataSource) -> Option<ProfileDocument> {
    match load_profile(source).await {
        Ok(document) => {
            tracing::debug!("Profile document read from {}", source);
            Some(document)
        }
        Err(e) => {
            tracing::error!("Error loading profile data: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_resolve_relative_to_url() {
        let source = DataSource::resolve(Some("https://ada.example/site/index.html"), "data/profile.json").unwrap();
        assert_eq!(
            source,
            DataSource::Http(Url::parse("https://ada.example/site/data/profile.json").unwrap())
        );
    }

    #[test]
    fn test_resolve_absolute_url_ignores_base() {
        let source = DataSource::resolve(Some("/srv/site"), "http://cdn.example/profile.json").unwrap();
        assert!(matches!(source, DataSource::Http(url) if url.host_str() == Some("cdn.example")));
    }

    #[test]
    fn test_resolve_file_paths() {
        assert_eq!(
            DataSource::resolve(Some("/srv/site"), "data/profile.json").unwrap(),
            DataSource::File(PathBuf::from("/srv/site/data/profile.json"))
        );
        assert_eq!(
            DataSource::resolve(None, "data/profile.json").unwrap(),
            DataSource::File(PathBuf::from("data/profile.json"))
        );
    }

    #[test]
    fn test_unsupported_scheme() {
        let err = DataSource::resolve(None, "ftp://ada.example/profile.json").unwrap_err();
        assert!(matches!(err, FetchError::InvalidSource(..)));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "profile": {{ "name": "Ada" }} }}"#).unwrap();

        let source = DataSource::File(file.path().to_path_buf());
        let document = load_profile(&source).await.unwrap();
        assert_eq!(document.profile.unwrap().name.as_deref(), Some("Ada"));
    }

    #[tokio::test]
    async fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let source = DataSource::File(dir.path().join("absent.json"));
        assert!(matches!(load_profile(&source).await, Err(FetchError::Io { .. })));
        assert!(fetch_profile(&source).await.is_none());
    }

    #[tokio::test]
    async fn test_malformed_json_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "projects": {{ "not": "a list" }} }}"#).unwrap();
        let source = DataSource::File(file.path().to_path_buf());
        assert!(matches!(load_profile(&source).await, Err(FetchError::Parse(_))));
    }
}
