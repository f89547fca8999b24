//! Save emitted storm tracks to a parquet file.
//!
//! One row per aligned step. Rows with a `category` are markers; all rows of a
//! storm in `step` order make up its path.

use std::{
    fs::File,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context, Result};
use arrow::{
    array::{ArrayRef, Float64Array, RecordBatch, StringArray, UInt32Array},
    datatypes::{DataType, Field, Schema},
};
use parquet::{arrow::ArrowWriter, file::properties::WriterProperties};
use tracing::info;

use crate::emitter::{StormTrack, TrackRenderer};

fn schema() -> Schema {
    Schema::new(vec![
        Field::new("storm", DataType::UInt32, false),
        Field::new("sid", DataType::Utf8, false),
        Field::new("name", DataType::Utf8, false),
        Field::new("step", DataType::UInt32, false),
        Field::new("lat", DataType::Float64, false),
        Field::new("lon", DataType::Float64, false),
        Field::new("wind_kmh", DataType::Float64, true),
        Field::new("category", DataType::Utf8, true),
        Field::new("color", DataType::Utf8, true),
    ])
}

pub fn save_tracks(tracks: &[StormTrack], file_path: &Path) -> Result<()> {
    let num_rows: usize = tracks.iter().map(|t| t.path.len()).sum();

    let mut storms = Vec::with_capacity(num_rows);
    let mut sids = Vec::with_capacity(num_rows);
    let mut names = Vec::with_capacity(num_rows);
    let mut steps = Vec::with_capacity(num_rows);
    let mut lats = Vec::with_capacity(num_rows);
    let mut lons = Vec::with_capacity(num_rows);
    let mut winds = Vec::with_capacity(num_rows);
    let mut categories = Vec::with_capacity(num_rows);
    let mut colors = Vec::with_capacity(num_rows);

    for t in tracks {
        let mut markers = t.markers.iter().peekable();

        for (step, position) in t.path.iter().enumerate() {
            storms.push(t.storm as u32);
            sids.push(t.sid.as_str());
            names.push(t.name.as_str());
            steps.push(step as u32);
            lats.push(position.lat);
            lons.push(position.lon);
            winds.push(t.wind_kmh.get(step).copied().flatten());

            match markers.next_if(|m| m.step == step) {
                Some(m) => {
                    categories.push(Some(m.category.code()));
                    colors.push(Some(m.color()));
                }
                None => {
                    categories.push(None);
                    colors.push(None);
                }
            }
        }
    }

    let columns: Vec<ArrayRef> = vec![
        Arc::new(UInt32Array::from(storms)) as ArrayRef,
        Arc::new(StringArray::from(sids)) as ArrayRef,
        Arc::new(StringArray::from(names)) as ArrayRef,
        Arc::new(UInt32Array::from(steps)) as ArrayRef,
        Arc::new(Float64Array::from(lats)) as ArrayRef,
        Arc::new(Float64Array::from(lons)) as ArrayRef,
        Arc::new(Float64Array::from(winds)) as ArrayRef,
        Arc::new(StringArray::from(categories)) as ArrayRef,
        Arc::new(StringArray::from(colors)) as ArrayRef,
    ];

    let schema = Arc::new(schema());
    let batch = RecordBatch::try_new(schema.clone(), columns)?;

    let file = File::create(file_path)
        .with_context(|| format!("cannot create {}", file_path.display()))?;
    let props = WriterProperties::builder()
        .set_compression(parquet::basic::Compression::SNAPPY)
        .build();

    let mut writer = ArrowWriter::try_new(file, schema, Some(props))?;
    writer.write(&batch)?;
    writer.close()?;

    info!(rows = num_rows, path = %file_path.display(), "tracks saved");

    Ok(())
}

/// Renderer that collects every track and writes them to one parquet file when
/// finished.
#[derive(Debug)]
pub struct ParquetTrackWriter {
    path: PathBuf,
    tracks: Vec<StormTrack>,
}

impl ParquetTrackWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ParquetTrackWriter {
            path: path.into(),
            tracks: Vec::new(),
        }
    }
}

impl TrackRenderer for ParquetTrackWriter {
    fn track(&mut self, track: &StormTrack) -> Result<()> {
        self.tracks.push(track.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        save_tracks(&self.tracks, &self.path)
    }
}

// -- Tests -------------------------------------------------------------------
