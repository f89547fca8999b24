//! Reads the IBTrACS "list" CSV into a [`Dataset`].
//!
//! See the IBTrACS v04 column documentation for the file layout. The row after the
//! header holds units and carries no `SID`; it is skipped along with any other row
//! without a storm identifier.

use std::{collections::HashMap, fs::File, io::Read, path::Path};

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDateTime;
use csv::StringRecord;
use tracing::{debug, warn};

use super::{BasinField, Dataset};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Column positions of the fields the engine uses.
#[derive(Debug)]
struct Columns {
    sid: usize,
    name: usize,
    basin: usize,
    time: usize,
    lat: usize,
    lon: usize,
    usa_wind: usize,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
                .ok_or_else(|| anyhow!("IBTrACS file has no `{}` column", name))
        };

        Ok(Columns {
            sid: find("SID")?,
            name: find("NAME")?,
            basin: find("BASIN")?,
            time: find("ISO_TIME")?,
            lat: find("LAT")?,
            lon: find("LON")?,
            usa_wind: find("USA_WIND")?,
        })
    }
}

/// One line of the file: a single observation step of a single storm.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub sid: String,
    pub name: String,
    pub basin: Option<String>,
    pub time: Option<NaiveDateTime>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub usa_wind: Option<f64>,
}

impl Observation {
    fn from_record(record: &StringRecord, columns: &Columns) -> Result<Self> {
        let field = |idx: usize| record.get(idx).map(str::trim).unwrap_or_default();

        let time = match field(columns.time) {
            "" => None,
            s => Some(
                NaiveDateTime::parse_from_str(s, TIME_FORMAT)
                    .with_context(|| format!("invalid ISO_TIME `{}`", s))?,
            ),
        };

        Ok(Observation {
            sid: field(columns.sid).to_string(),
            name: field(columns.name).to_string(),
            basin: parse_str(field(columns.basin)),
            time,
            lat: parse_f64(field(columns.lat), "LAT")?,
            lon: parse_f64(field(columns.lon), "LON")?,
            usa_wind: parse_f64(field(columns.usa_wind), "USA_WIND")?,
        })
    }
}

#[derive(Debug, Default)]
struct Track {
    sid: String,
    name: String,
    observations: Vec<Observation>,
}

/// Reads an IBTrACS CSV file from disk.
pub fn read_csv(path: &Path) -> Result<Dataset> {
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;

    from_reader(file)
}

/// Reads IBTrACS CSV data, grouping rows into storms by `SID` in order of first
/// appearance.
pub fn from_reader<R: Read>(reader: R) -> Result<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns = Columns::from_headers(rdr.headers()?)?;

    let mut tracks: Vec<Track> = Vec::new();
    let mut lookup: HashMap<String, usize> = HashMap::new();

    for record in rdr.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());

        if record.get(columns.sid).map_or(true, |s| s.trim().is_empty()) {
            debug!(line, "skipping row without SID");
            continue;
        }

        let observation = Observation::from_record(&record, &columns)
            .with_context(|| format!("line {}", line))?;

        let idx = *lookup.entry(observation.sid.clone()).or_insert_with(|| {
            tracks.push(Track {
                sid: observation.sid.clone(),
                name: observation.name.clone(),
                observations: Vec::new(),
            });
            tracks.len() - 1
        });
        tracks[idx].observations.push(observation);
    }

    if tracks.is_empty() {
        warn!("IBTrACS input contains no storms");
    }

    into_dataset(tracks)
}

fn into_dataset(tracks: Vec<Track>) -> Result<Dataset> {
    let steps = tracks
        .iter()
        .map(|t| t.observations.len())
        .max()
        .unwrap_or(0);

    let storms = tracks.len();
    let mut sids = Vec::with_capacity(storms);
    let mut names = Vec::with_capacity(storms);
    let mut times = Vec::with_capacity(storms);
    let mut basins = Vec::with_capacity(storms);
    let mut lats = Vec::with_capacity(storms);
    let mut lons = Vec::with_capacity(storms);
    let mut winds = Vec::with_capacity(storms);

    for track in tracks {
        let mut time = vec![None; steps];
        let mut basin = vec![None; steps];
        let mut lat = vec![None; steps];
        let mut lon = vec![None; steps];
        let mut wind = vec![None; steps];

        for (step, obs) in track.observations.into_iter().enumerate() {
            time[step] = obs.time;
            basin[step] = obs.basin;
            lat[step] = obs.lat;
            lon[step] = obs.lon;
            wind[step] = obs.usa_wind;
        }

        sids.push(track.sid);
        names.push(track.name);
        times.push(time);
        basins.push(basin);
        lats.push(lat);
        lons.push(lon);
        winds.push(wind);
    }

    let dataset = Dataset::new(times, BasinField::Decoded(basins), lats, lons, winds)?
        .with_metadata(sids, names)?;

    Ok(dataset)
}

fn parse_f64(s: &str, column: &str) -> Result<Option<f64>> {
    if s.is_empty() {
        return Ok(None);
    }

    let value = s
        .parse::<f64>()
        .with_context(|| format!("invalid {} value `{}`", column, s))?;

    Ok(Some(value).filter(|v| v.is_finite()))
}

fn parse_str(s: &str) -> Option<String> {
    Some(s.to_string()).filter(|v| !v.is_empty())
}

// -- Tests -------------------------------------------------------------------
