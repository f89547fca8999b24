//! Select, classify and save the tracks of one basin and season.

use std::{collections::BTreeMap, path::Path};

use anyhow::Result;
use cyclone_tracks::{
    config::Config,
    dataset::{ibtracs, Dataset},
    download::{download_ibtracs, Period},
    emitter::{render, StormTrack, TrackRenderer},
    extract_tracks,
    intensity::Category,
    parquet::ParquetTrackWriter,
};
use tempfile::TempDir;

use super::make_parquet_file_name;
use crate::cli::{create_spinner, RunArgs};

pub async fn run(args: &RunArgs) -> Result<String> {
    let config = Config {
        unit_conversion_factor: args.conversion_factor,
        ..Config::new(args.year, &args.basin)
    };
    config.validate()?;

    let dataset = match &args.input {
        Some(path) => read_dataset(path)?,
        None => {
            let tmp_dir = TempDir::new()?;
            let bar = create_spinner("Downloading IBTrACS...".to_string());
            let path = download_ibtracs(Period::Last3Years, tmp_dir.path(), bar.clone()).await?;
            bar.finish_with_message("IBTrACS downloaded");
            read_dataset(&path)?
        }
    };

    let bar = create_spinner("Classifying tracks...".to_string());
    let tracks = extract_tracks(&dataset, &config)?;
    bar.finish_with_message(format!("{} tracks classified", tracks.len()));

    let parquet_file_name = match &args.output {
        Some(path) => path.clone(),
        None => make_parquet_file_name(&config.target_basin, config.target_year)?,
    };

    let mut summary = Summary::default();
    render(&tracks, &mut summary)?;
    render(&tracks, &mut ParquetTrackWriter::new(&parquet_file_name))?;
    summary.print(&config);

    Ok(parquet_file_name.to_string_lossy().to_string())
}

fn read_dataset(path: &Path) -> Result<Dataset> {
    let bar = create_spinner(format!("Reading {}...", path.display()));
    let dataset = ibtracs::read_csv(path)?;
    bar.finish_with_message(format!("{} storms read", dataset.storm_count()));

    Ok(dataset)
}

/// Tallies storms and markers per category.
#[derive(Debug, Default)]
struct Summary {
    storms: usize,
    markers: BTreeMap<Category, usize>,
}

impl TrackRenderer for Summary {
    fn track(&mut self, track: &StormTrack) -> Result<()> {
        self.storms += 1;
        for marker in &track.markers {
            *self.markers.entry(marker.category).or_default() += 1;
        }
        Ok(())
    }
}

impl Summary {
    fn print(&self, config: &Config) {
        println!(
            "{} storms in {} during {}",
            self.storms, config.target_basin, config.target_year
        );
        for category in Category::ALL {
            let count = self.markers.get(&category).copied().unwrap_or(0);
            println!("  {:<8} {:>6}", category.code(), count);
        }
    }
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod test {

    use cyclone_tracks::{intensity::Classifier, track::AlignedTrack};

    use super::*;

    #[test]
    fn should_tally_markers() {
        let aligned = AlignedTrack {
            lat: vec![10.0, 11.0, 12.0],
            lon: vec![130.0, 129.0, 128.0],
            wind: vec![Some(20.0), Some(25.0), Some(70.0)],
        };
        let track = cyclone_tracks::emitter::emit(0, "", "", &aligned, &Classifier::default());
        let mut summary = Summary::default();

        render(&[track.clone(), track], &mut summary).unwrap();

        assert_eq!(summary.storms, 2);
        assert_eq!(summary.markers.get(&Category::TD), Some(&4));
        assert_eq!(summary.markers.get(&Category::TY), Some(&2));
    }
}
