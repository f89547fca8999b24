//! Decode, select, align, classify, emit.

use tracing::{debug, info};

use crate::{
    basin,
    config::Config,
    dataset::Dataset,
    emitter::{emit, StormTrack},
    error::Result,
    selector::select,
    track::align,
};

/// Runs the engine over `dataset`, returning one track per selected storm that has
/// usable wind and positions, in ascending storm index order.
pub fn extract_tracks(dataset: &Dataset, config: &Config) -> Result<Vec<StormTrack>> {
    config.validate()?;

    let basins = basin::decode(dataset.basin(), dataset.step_count())?;
    let selected = select(dataset, &basins, config.target_year, &config.target_basin);
    info!(
        year = config.target_year,
        basin = %config.target_basin,
        storms = dataset.storm_count(),
        selected = selected.len(),
        "storms selected"
    );

    let classifier = config.classifier();
    let mut tracks = Vec::with_capacity(selected.len());

    for storm in selected {
        let span = tracing::debug_span!("storm", storm, sid = dataset.sid(storm));
        let _enter = span.enter();

        let Some(aligned) = align(
            dataset.lat(storm),
            dataset.lon(storm),
            dataset.usa_wind(storm),
        ) else {
            debug!("storm skipped");
            continue;
        };

        tracks.push(emit(
            storm,
            dataset.sid(storm),
            dataset.name(storm),
            &aligned,
            &classifier,
        ));
    }

    Ok(tracks)
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {

    use super::*;
    use crate::{
        dataset::BasinField,
        error::{ConfigError, DecodeError, Error},
    };

    fn single_storm(basin: &[u8]) -> Dataset {
        Dataset::new(
            vec![vec![None]],
            BasinField::Packed(vec![basin.to_vec()]),
            vec![vec![Some(1.0)]],
            vec![vec![Some(1.0)]],
            vec![vec![Some(1.0)]],
        )
        .unwrap()
    }

    #[test]
    fn should_fail_on_malformed_basin() {
        let err = extract_tracks(&single_storm(b"W\0"), &Config::default()).unwrap_err();

        assert_eq!(
            err,
            Error::Decode(DecodeError::TruncatedCode { storm: 0, step: 0 })
        );
    }

    #[test]
    fn should_fail_on_bad_config() {
        let config = Config::new(2024, "XX");

        let err = extract_tracks(&single_storm(b"WP"), &config).unwrap_err();

        assert_eq!(err, Error::Config(ConfigError::UnknownBasin("XX".to_string())));
    }

    #[test]
    fn should_return_nothing_without_matches() {
        let tracks = extract_tracks(&single_storm(b"WP"), &Config::default()).unwrap();

        assert!(tracks.is_empty());
    }
}
