//! Downloads the IBTrACS best-track CSV from NOAA NCEI.

use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Error, Result};
use clap::ValueEnum;
use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

const ROOT: &str =
    "https://www.ncei.noaa.gov/data/international-best-track-archive-for-climate-stewardship-ibtracs/v04r01/access/csv";

/// Subsets of the IBTrACS archive published as separate files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Period {
    /// Storms from the last three years
    #[value(name = "last3years")]
    Last3Years,
    /// Storms since 1980
    #[value(name = "since1980")]
    Since1980,
    /// Storms currently active
    #[value(name = "ACTIVE")]
    Active,
    /// The full record
    #[value(name = "ALL")]
    All,
}

impl Period {
    fn as_str(&self) -> &'static str {
        match self {
            Period::Last3Years => "last3years",
            Period::Since1980 => "since1980",
            Period::Active => "ACTIVE",
            Period::All => "ALL",
        }
    }

    pub fn file_name(&self) -> String {
        format!("ibtracs.{}.list.v04r01.csv", self.as_str())
    }

    pub fn url(&self) -> String {
        format!("{}/{}", ROOT, self.file_name())
    }
}

/// Downloads `period` into `dir`, returning the saved file path.
pub async fn download_ibtracs(
    period: Period,
    dir: &Path,
    progress_bar: ProgressBar,
) -> Result<PathBuf> {
    let file_path = dir.join(period.file_name());
    download_with_progress(&period.url(), &file_path, progress_bar).await?;

    Ok(file_path)
}

/// Downloads with progress bar based on content length
pub async fn download_with_progress(
    url: &str,
    file_path: &Path,
    progress_bar: ProgressBar,
) -> Result<()> {
    info!(url, "downloading");
    let response = reqwest::get(url)
        .await
        .map_err(|e| Error::msg(format!("Failed to download file: {}", e)))?;

    if !response.status().is_success() {
        return Err(Error::msg(format!("Failed to download file: {}", response.status())));
    }

    // Switch from spinner to a byte bar when the size is known
    let total_size = response.content_length().unwrap_or(0);
    if total_size > 0 {
        progress_bar.set_length(total_size);
        let template = "{msg} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({percent}%) {eta}";
        progress_bar.set_style(ProgressStyle::with_template(template)?.progress_chars("=> "));
    }

    let mut file = File::create(file_path)?;
    let mut downloaded = 0u64;
    let mut stream = response.bytes_stream();

    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result.map_err(|e| Error::msg(format!("Error reading chunk: {}", e)))?;
        file.write_all(&chunk)?;
        downloaded += chunk.len() as u64;
        progress_bar.set_position(downloaded);
    }

    info!(bytes = downloaded, path = %file_path.display(), "download complete");

    Ok(())
}

// -- Tests -------------------------------------------------------------------
