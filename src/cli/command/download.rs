//! Download an IBTrACS file and save it to the home directory.

use anyhow::Result;
use cyclone_tracks::download::{download_ibtracs, Period};

use super::home_dir;
use crate::cli::create_spinner;

pub async fn download(period: Period) -> Result<String> {
    let dir = home_dir()?;

    let bar = create_spinner(format!("Downloading {}...", period.file_name()));
    let file_path = download_ibtracs(period, &dir, bar.clone()).await?;
    bar.finish_with_message("IBTrACS file downloaded");

    Ok(file_path.to_string_lossy().to_string())
}
