use std::io;

use anyhow::{Context, Result};
use image_fetcher::{logging, prompt, run_batch, Downloader, Settings};
use tracing::info;

fn main() -> Result<()> {
    logging::init_logging();

    let settings = Settings::default();

    let mut stdout = io::stdout();

    let urls = prompt::prompt_for_urls(&mut io::stdin().lock(), &mut stdout)
        .context("failed to read URLs from standard input")?;

    let downloader = Downloader::new(&settings).with_context(|| {
        format!(
            "failed to create output directory {}",
            settings.output_dir.display()
        )
    })?;

    let summary = run_batch(&downloader, &urls, &mut stdout)?;

    info!(
        saved = summary.saved,
        skipped = summary.skipped,
        failed = summary.failed,
        "batch finished"
    );

    Ok(())
}
