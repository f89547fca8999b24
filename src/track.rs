//! Per-storm alignment of position and wind series.

use tracing::debug;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub lat: f64,
    pub lon: f64,
}

/// Position and wind series of one storm cut to a common length.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedTrack {
    pub lat: Vec<f64>,
    pub lon: Vec<f64>,
    /// Wind in knots; `None` where the sample is undefined.
    pub wind: Vec<Option<f64>>,
}

impl AlignedTrack {
    pub fn len(&self) -> usize {
        self.wind.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wind.is_empty()
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.lat
            .iter()
            .zip(&self.lon)
            .map(|(&lat, &lon)| Position { lat, lon })
    }
}

/// Aligns one storm's raw rows.
///
/// Latitude and longitude keep their defined values in step order. Wind keeps its
/// populated prefix, up to the last defined sample, with gaps left as `None`. All
/// three are then cut to the shortest length from the start.
///
/// Returns `None` when no defined wind sample survives the cut or the common
/// length is zero.
pub fn align(
    lat: &[Option<f64>],
    lon: &[Option<f64>],
    wind: &[Option<f64>],
) -> Option<AlignedTrack> {
    let lat: Vec<f64> = lat.iter().copied().filter_map(defined).collect();
    let lon: Vec<f64> = lon.iter().copied().filter_map(defined).collect();

    let populated = match wind.iter().rposition(|w| defined(*w).is_some()) {
        Some(last) => last + 1,
        None => {
            debug!("no wind samples");
            return None;
        }
    };

    let len = lat.len().min(lon.len()).min(populated);
    if len == 0 {
        debug!("no aligned positions");
        return None;
    }

    let wind: Vec<Option<f64>> = wind[..len].iter().copied().map(defined).collect();
    if !wind.iter().any(Option::is_some) {
        debug!(len, "no wind samples within aligned positions");
        return None;
    }

    Some(AlignedTrack {
        lat: lat[..len].to_vec(),
        lon: lon[..len].to_vec(),
        wind,
    })
}

/// NaN counts as undefined.
fn defined(sample: Option<f64>) -> Option<f64> {
    sample.filter(|v| !v.is_nan())
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn should_cut_to_shortest() {
        let lat = [Some(10.0), Some(11.0), Some(12.0), None];
        let lon = [Some(130.0), Some(129.0), None, None];
        let wind = [Some(20.0), Some(25.0), Some(30.0), None];

        let track = align(&lat, &lon, &wind).unwrap();

        assert_eq!(track.lat, vec![10.0, 11.0]);
        assert_eq!(track.lon, vec![130.0, 129.0]);
        assert_eq!(track.wind, vec![Some(20.0), Some(25.0)]);
    }

    #[test]
    fn should_keep_equal_lengths() {
        let lat = [Some(1.0), None, Some(2.0), Some(3.0), Some(4.0)];
        let lon = [Some(5.0), Some(6.0), Some(7.0), None, None];
        let wind = [None, Some(10.0), None, Some(12.0), None];

        let track = align(&lat, &lon, &wind).unwrap();

        assert_eq!(track.lat.len(), track.lon.len());
        assert_eq!(track.lon.len(), track.wind.len());
        assert_eq!(track.len(), 3);
    }

    #[test]
    fn should_keep_interior_wind_gaps() {
        let lat = [Some(10.0), Some(11.0), Some(12.0)];
        let lon = [Some(130.0), Some(129.0), Some(128.0)];
        let wind = [Some(20.0), None, Some(30.0)];

        let track = align(&lat, &lon, &wind).unwrap();

        assert_eq!(track.wind, vec![Some(20.0), None, Some(30.0)]);
        assert_eq!(track.positions().count(), 3);
    }

    #[test]
    fn should_drop_trailing_wind_padding() {
        let lat = [Some(10.0), Some(11.0), Some(12.0)];
        let lon = [Some(130.0), Some(129.0), Some(128.0)];
        let wind = [Some(20.0), Some(f64::NAN), None];

        let track = align(&lat, &lon, &wind).unwrap();

        assert_eq!(track.wind, vec![Some(20.0)]);
        assert_eq!(
            track.positions().collect::<Vec<_>>(),
            vec![Position {
                lat: 10.0,
                lon: 130.0
            }]
        );
    }

    #[test]
    fn should_skip_storm_without_wind() {
        let lat = [Some(10.0), Some(11.0)];
        let lon = [Some(130.0), Some(129.0)];

        assert_eq!(align(&lat, &lon, &[None, None]), None);
        assert_eq!(align(&lat, &lon, &[Some(f64::NAN), None]), None);
        assert_eq!(align(&lat, &lon, &[]), None);
    }

    #[test]
    fn should_skip_storm_without_positions() {
        let wind = [Some(20.0), Some(25.0)];

        assert_eq!(align(&[None, None], &[Some(1.0), Some(2.0)], &wind), None);
    }

    #[test]
    fn should_skip_storm_without_aligned_wind() {
        let lat = [Some(10.0), Some(11.0), None, None];
        let lon = [Some(130.0), Some(129.0), None, None];
        let wind = [None, None, None, Some(50.0)];

        assert_eq!(align(&lat, &lon, &wind), None);
    }

    #[test]
    fn should_drop_nan_positions() {
        let lat = [Some(f64::NAN), Some(11.0), Some(12.0)];
        let lon = [Some(130.0), Some(129.0), Some(128.0)];
        let wind = [Some(20.0), Some(25.0), Some(30.0)];

        let track = align(&lat, &lon, &wind).unwrap();

        assert_eq!(track.lat, vec![11.0, 12.0]);
        assert_eq!(track.lon, vec![130.0, 129.0]);
        assert_eq!(track.wind, vec![Some(20.0), Some(25.0)]);
    }
}
