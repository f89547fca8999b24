pub mod download;
pub mod legend;
pub mod run;

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use chrono::{Datelike, Local};
pub use download::download;
pub use legend::legend;
pub use run::run;

pub fn make_parquet_file_name(basin: &str, year: i32) -> Result<PathBuf> {
    let today = Local::now();
    let file_name = format!(
        "cyclone-tracks-{}-{}-{}-{:02}-{:02}.parquet",
        basin.to_lowercase(),
        year,
        today.year(),
        today.month(),
        today.day()
    );

    Ok(home_dir()?.join(file_name))
}

pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| anyhow!("cannot locate the home directory"))
}

// -- Tests -------------------------------------------------------------------
