//! In-memory (storm, step) table of track observations.
//!
//! Every field is indexed first by storm and then by observation step. All storms
//! share the same declared step count; shorter tracks are padded with `None`.

pub mod ibtracs;

use chrono::NaiveDateTime;

use crate::error::DatasetError;

/// Raw basin codes as they come out of the source file.
#[derive(Debug, Clone, PartialEq)]
pub enum BasinField {
    /// Two single-byte characters per step, `0` marking an empty character.
    ///
    /// This is the layout of the IBTrACS NetCDF `basin` variable (`S1` characters
    /// over storm, step and two chars). The CSV reader yields `Decoded` instead.
    Packed(Vec<Vec<u8>>),
    /// Already decoded strings, one per step.
    Decoded(Vec<Vec<Option<String>>>),
}

impl BasinField {
    fn storm_count(&self) -> usize {
        match self {
            BasinField::Packed(rows) => rows.len(),
            BasinField::Decoded(rows) => rows.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    steps: usize,
    sids: Vec<String>,
    names: Vec<String>,
    time: Vec<Vec<Option<NaiveDateTime>>>,
    basin: BasinField,
    lat: Vec<Vec<Option<f64>>>,
    lon: Vec<Vec<Option<f64>>>,
    usa_wind: Vec<Vec<Option<f64>>>,
}

impl Dataset {
    /// Builds a dataset, checking that every field has the same storm count and
    /// every row the same step count as the first `time` row.
    pub fn new(
        time: Vec<Vec<Option<NaiveDateTime>>>,
        basin: BasinField,
        lat: Vec<Vec<Option<f64>>>,
        lon: Vec<Vec<Option<f64>>>,
        usa_wind: Vec<Vec<Option<f64>>>,
    ) -> Result<Self, DatasetError> {
        let storms = time.len();
        let steps = time.first().map_or(0, Vec::len);

        check_storms("basin", storms, basin.storm_count())?;
        check_storms("lat", storms, lat.len())?;
        check_storms("lon", storms, lon.len())?;
        check_storms("usa_wind", storms, usa_wind.len())?;

        check_steps("time", steps, time.iter().map(Vec::len))?;
        check_steps("lat", steps, lat.iter().map(Vec::len))?;
        check_steps("lon", steps, lon.iter().map(Vec::len))?;
        check_steps("usa_wind", steps, usa_wind.iter().map(Vec::len))?;

        match &basin {
            // Odd rows are reported by the basin decoder, which owns the byte layout.
            BasinField::Packed(rows) => check_steps(
                "basin",
                steps,
                rows.iter()
                    .map(|row| if row.len() % 2 == 0 { row.len() / 2 } else { steps }),
            )?,
            BasinField::Decoded(rows) => check_steps("basin", steps, rows.iter().map(Vec::len))?,
        }

        Ok(Dataset {
            steps,
            sids: (0..storms).map(|i| i.to_string()).collect(),
            names: vec![String::new(); storms],
            time,
            basin,
            lat,
            lon,
            usa_wind,
        })
    }

    /// Attaches storm identifiers and names. Both must have one entry per storm.
    pub fn with_metadata(
        mut self,
        sids: Vec<String>,
        names: Vec<String>,
    ) -> Result<Self, DatasetError> {
        check_storms("sid", self.storm_count(), sids.len())?;
        check_storms("name", self.storm_count(), names.len())?;
        self.sids = sids;
        self.names = names;

        Ok(self)
    }

    pub fn storm_count(&self) -> usize {
        self.time.len()
    }

    pub fn step_count(&self) -> usize {
        self.steps
    }

    pub fn sid(&self, storm: usize) -> &str {
        &self.sids[storm]
    }

    pub fn name(&self, storm: usize) -> &str {
        &self.names[storm]
    }

    pub fn time(&self, storm: usize) -> &[Option<NaiveDateTime>] {
        &self.time[storm]
    }

    pub fn basin(&self) -> &BasinField {
        &self.basin
    }

    pub fn lat(&self, storm: usize) -> &[Option<f64>] {
        &self.lat[storm]
    }

    pub fn lon(&self, storm: usize) -> &[Option<f64>] {
        &self.lon[storm]
    }

    pub fn usa_wind(&self, storm: usize) -> &[Option<f64>] {
        &self.usa_wind[storm]
    }
}

fn check_storms(field: &'static str, expected: usize, found: usize) -> Result<(), DatasetError> {
    if found != expected {
        return Err(DatasetError::StormCount {
            field,
            expected,
            found,
        });
    }

    Ok(())
}

fn check_steps(
    field: &'static str,
    expected: usize,
    lengths: impl Iterator<Item = usize>,
) -> Result<(), DatasetError> {
    for (storm, found) in lengths.enumerate() {
        if found != expected {
            return Err(DatasetError::StepCount {
                field,
                storm,
                expected,
                found,
            });
        }
    }

    Ok(())
}

// -- Tests -------------------------------------------------------------------
