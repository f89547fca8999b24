//! Basin decoding.
//!
//! A storm gets exactly one basin label: the first non-empty code found when
//! scanning its steps in order. Later codes are ignored even when they differ, so
//! a storm that drifts from "WP" into "NI" is still labelled "WP" at every step.

use crate::{dataset::BasinField, error::DecodeError};

/// IBTrACS basin codes.
pub const KNOWN_BASINS: [&str; 8] = ["NA", "SA", "EP", "WP", "SP", "SI", "NI", "MM"];

pub fn is_known_basin(code: &str) -> bool {
    KNOWN_BASINS.contains(&code)
}

/// One label per storm, broadcast across the storm's steps.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedBasins {
    labels: Vec<String>,
    steps: usize,
}

impl DecodedBasins {
    pub fn storm_count(&self) -> usize {
        self.labels.len()
    }

    /// The storm's label, or `""` when no step carried a code.
    pub fn label(&self, storm: usize) -> &str {
        &self.labels[storm]
    }

    /// The label seen at each step of the storm.
    pub fn steps(&self, storm: usize) -> impl Iterator<Item = &str> + '_ {
        std::iter::repeat(self.label(storm)).take(self.steps)
    }
}

/// Decodes the raw basin field of a dataset with `steps` steps per storm.
pub fn decode(field: &BasinField, steps: usize) -> Result<DecodedBasins, DecodeError> {
    let labels = match field {
        BasinField::Packed(rows) => rows
            .iter()
            .enumerate()
            .map(|(storm, row)| decode_packed(storm, row))
            .collect::<Result<Vec<_>, _>>()?,
        BasinField::Decoded(rows) => rows
            .iter()
            .enumerate()
            .map(|(storm, row)| first_decoded(storm, row))
            .collect::<Result<Vec<_>, _>>()?,
    };

    Ok(DecodedBasins { labels, steps })
}

fn decode_packed(storm: usize, row: &[u8]) -> Result<String, DecodeError> {
    if row.len() % 2 != 0 {
        return Err(DecodeError::OddPackedRow {
            storm,
            len: row.len(),
        });
    }

    for (step, pair) in row.chunks_exact(2).enumerate() {
        let (first, second) = (pair[0], pair[1]);
        if first == 0 {
            continue;
        }
        if second == 0 {
            return Err(DecodeError::TruncatedCode { storm, step });
        }
        if let Some(&byte) = pair.iter().find(|b| !b.is_ascii()) {
            return Err(DecodeError::NonAscii { storm, step, byte });
        }

        let code = String::from_utf8_lossy(pair).into_owned();
        return known(storm, code);
    }

    Ok(String::new())
}

fn first_decoded(storm: usize, row: &[Option<String>]) -> Result<String, DecodeError> {
    match row.iter().flatten().find(|code| !code.is_empty()) {
        Some(code) => known(storm, code.clone()),
        None => Ok(String::new()),
    }
}

fn known(storm: usize, code: String) -> Result<String, DecodeError> {
    if is_known_basin(&code) {
        Ok(code)
    } else {
        Err(DecodeError::UnknownBasin { storm, code })
    }
}

// -- Tests -------------------------------------------------------------------
