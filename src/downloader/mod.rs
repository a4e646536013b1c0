mod fetcher;
mod naming;

use std::collections::HashMap;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};
use url::Url;

use crate::settings::Settings;

pub use fetcher::UReqFetcher;
pub use naming::{fallback_name, resolve_file_name};

#[cfg(test)]
pub(crate) use fetcher::MockFetcher;

/// What came back from a GET, whatever the status.
///
/// Header names are stored lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body,
        }
    }

    pub fn ok(body: Vec<u8>, content_type: Option<&str>) -> Self {
        let response = Self::new(200, body);

        match content_type {
            Some(content_type) => response.with_header("Content-Type", content_type),
            None => response,
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers
            .insert(name.to_ascii_lowercase(), value.to_string());
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn content_type(&self) -> Option<&str> {
        self.header("Content-Type")
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{0}")]
    Transport(String),

    #[error("failed to read response body: {0}")]
    Body(#[from] io::Error),
}

pub trait FileDownloader {
    /// GET `url`. Non-2xx statuses come back as `Ok` with the status set.
    fn fetch(&self, url: &str) -> Result<Response, FetchError>;
}

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("HTTP status {status}")]
    HttpStatus { status: u16 },

    #[error("not an image, got {content_type}")]
    NotAnImage { content_type: String },

    #[error("duplicate file: {file_name}")]
    Duplicate { file_name: String },

    #[error("failed to save {}: {source}", path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DownloadError {
    /// Only storage failures abort a batch; everything else is per-URL.
    pub fn is_fatal(&self) -> bool {
        matches!(self, DownloadError::Storage { .. })
    }
}

#[derive(Debug, PartialEq)]
pub struct Download {
    pub source: String,
    pub file: PathBuf,
    pub content: Vec<u8>,
}

impl Download {
    pub fn new(source: String, file: PathBuf, content: Vec<u8>) -> Self {
        Self {
            source,
            file,
            content,
        }
    }
}

pub struct Downloader<T: FileDownloader> {
    fetcher: T,
    path: PathBuf,
}

impl<T> Downloader<T>
where
    T: FileDownloader,
{
    /// Creates the output directory if it is missing.
    pub fn with_fetcher(path: impl AsRef<Path>, fetcher: T) -> io::Result<Self> {
        let path = Self::create_path(path.as_ref())?;

        Ok(Downloader { path, fetcher })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn fetcher(&self) -> &T {
        &self.fetcher
    }

    pub fn download(&self, input: &str) -> Result<Download, DownloadError> {
        let url = Url::parse(input)?;

        debug!(%url, "fetching");

        let response = self.fetcher.fetch(url.as_str())?;

        if !response.is_success() {
            return Err(DownloadError::HttpStatus {
                status: response.status,
            });
        }

        let content_type = response.content_type().unwrap_or_default();

        if !content_type.contains("image") {
            return Err(DownloadError::NotAnImage {
                content_type: content_type.to_string(),
            });
        }

        let file_name = resolve_file_name(input, &response.body);
        let file_path = self.path.join(&file_name);

        if file_path.exists() {
            return Err(DownloadError::Duplicate { file_name });
        }

        fs::write(&file_path, &response.body).map_err(|source| DownloadError::Storage {
            path: file_path.clone(),
            source,
        })?;

        info!(
            %url,
            file = %file_path.display(),
            bytes = response.body.len(),
            "saved image"
        );

        Ok(Download::new(url.to_string(), file_path, response.body))
    }

    fn create_path(path: &Path) -> io::Result<PathBuf> {
        let absolute_path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            env::current_dir()?.join(path)
        };

        fs::create_dir_all(&absolute_path)?;

        Ok(absolute_path)
    }
}

impl Downloader<UReqFetcher> {
    pub fn new(settings: &Settings) -> io::Result<Self> {
        let fetcher = UReqFetcher::with_timeout(settings.timeout);
        Downloader::with_fetcher(&settings.output_dir, fetcher)
    }
}
