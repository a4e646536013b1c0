//! Fetch images from user-supplied URLs into a flat output directory,
//! skipping non-image responses and names that already exist.

mod batch;
mod downloader;
pub mod logging;
pub mod prompt;
mod settings;

pub use batch::{run_batch, BatchSummary};
pub use downloader::{
    fallback_name, resolve_file_name, Download, DownloadError, Downloader, FetchError,
    FileDownloader, Response, UReqFetcher,
};
pub use settings::{Settings, DEFAULT_OUTPUT_DIR, DEFAULT_TIMEOUT};
