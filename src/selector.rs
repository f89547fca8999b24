//! Storm selection by season year and basin.

use chrono::{Datelike, NaiveDateTime};

use crate::{basin::DecodedBasins, dataset::Dataset};

/// True when any valid timestamp falls in `year`.
pub fn has_year(times: &[Option<NaiveDateTime>], year: i32) -> bool {
    times.iter().flatten().any(|t| t.year() == year)
}

/// Indices, ascending, of storms with at least one timestamp in `year` and at
/// least one step labelled `basin`. The two conditions need not hold at the same
/// step.
pub fn select(dataset: &Dataset, basins: &DecodedBasins, year: i32, basin: &str) -> Vec<usize> {
    (0..dataset.storm_count())
        .filter(|&storm| {
            let in_year = has_year(dataset.time(storm), year);
            let in_basin = basins.steps(storm).any(|label| label == basin);
            in_year && in_basin
        })
        .collect()
}

// -- Tests -------------------------------------------------------------------
