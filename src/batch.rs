//! Sequential processing of a URL list with one console notice per outcome.

use std::io::Write;

use anyhow::Result;
use tracing::warn;

use crate::downloader::{DownloadError, Downloader, FileDownloader};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub saved: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Download every URL in order, writing notices to `out`.
///
/// Per-URL failures are reported and counted. A storage failure stops the
/// batch and is returned.
pub fn run_batch<T, W>(downloader: &Downloader<T>, urls: &[String], out: &mut W) -> Result<BatchSummary>
where
    T: FileDownloader,
    W: Write,
{
    let mut summary = BatchSummary::default();

    for url in urls {
        writeln!(out, "\n🔗 Connecting to: {url}")?;

        match downloader.download(url) {
            Ok(download) => {
                writeln!(out, "✅ Saved: {}", download.file.display())?;
                summary.saved += 1;
            }

            Err(DownloadError::NotAnImage { content_type }) => {
                writeln!(out, "⚠️ Skipping: {url} (not an image, got {content_type})")?;
                summary.skipped += 1;
            }

            Err(DownloadError::Duplicate { file_name }) => {
                writeln!(out, "🟡 Skipped (duplicate): {file_name}")?;
                summary.skipped += 1;
            }

            Err(err) if err.is_fatal() => return Err(err.into()),

            Err(err) => {
                warn!(url = %url, error = %err, "fetch failed");
                writeln!(out, "❌ Failed to fetch {url}: {err}")?;
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}
