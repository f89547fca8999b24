//! Turns aligned storms into the marker and path sequences handed to a renderer.

use anyhow::Result;

use crate::{
    intensity::{Category, Classifier},
    track::{AlignedTrack, Position},
};

/// A classified sample drawn as a coloured point.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub step: usize,
    pub position: Position,
    pub wind_kmh: f64,
    pub category: Category,
}

impl Marker {
    pub fn color(&self) -> &'static str {
        self.category.color()
    }
}

/// Everything a renderer needs to draw one storm.
#[derive(Debug, Clone, PartialEq)]
pub struct StormTrack {
    pub storm: usize,
    pub sid: String,
    pub name: String,
    /// Every aligned position, drawn as one connecting line.
    pub path: Vec<Position>,
    /// Wind per path position in km/h.
    pub wind_kmh: Vec<Option<f64>>,
    /// Positions with a defined category, in step order.
    pub markers: Vec<Marker>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendEntry {
    pub category: Category,
    pub label: &'static str,
    pub color: &'static str,
}

pub fn legend() -> Vec<LegendEntry> {
    Category::ALL
        .iter()
        .map(|&category| LegendEntry {
            category,
            label: category.label(),
            color: category.color(),
        })
        .collect()
}

/// Output collaborator. Receives the legend once, then every storm in ascending
/// storm index order.
pub trait TrackRenderer {
    fn legend(&mut self, _entries: &[LegendEntry]) -> Result<()> {
        Ok(())
    }

    fn track(&mut self, track: &StormTrack) -> Result<()>;

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

pub fn emit(
    storm: usize,
    sid: &str,
    name: &str,
    aligned: &AlignedTrack,
    classifier: &Classifier,
) -> StormTrack {
    let path: Vec<Position> = aligned.positions().collect();

    let markers = path
        .iter()
        .zip(&aligned.wind)
        .enumerate()
        .filter_map(|(step, (&position, &knots))| {
            let category = classifier.classify(knots)?;
            Some(Marker {
                step,
                position,
                wind_kmh: classifier.to_kmh(knots?),
                category,
            })
        })
        .collect();

    StormTrack {
        storm,
        sid: sid.to_string(),
        name: name.to_string(),
        wind_kmh: aligned.wind.iter().map(|w| w.map(|k| classifier.to_kmh(k))).collect(),
        path,
        markers,
    }
}

/// Hands the legend and every track to `renderer`.
pub fn render<R: TrackRenderer + ?Sized>(tracks: &[StormTrack], renderer: &mut R) -> Result<()> {
    renderer.legend(&legend())?;
    for track in tracks {
        renderer.track(track)?;
    }
    renderer.finish()
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {

    use super::*;

    #[derive(Default)]
    struct Recorder {
        legend: usize,
        storms: Vec<usize>,
        finished: bool,
    }

    impl TrackRenderer for Recorder {
        fn legend(&mut self, entries: &[LegendEntry]) -> Result<()> {
            self.legend = entries.len();
            Ok(())
        }

        fn track(&mut self, track: &StormTrack) -> Result<()> {
            self.storms.push(track.storm);
            Ok(())
        }

        fn finish(&mut self) -> Result<()> {
            self.finished = true;
            Ok(())
        }
    }

    fn aligned() -> AlignedTrack {
        AlignedTrack {
            lat: vec![10.0, 11.0, 12.0],
            lon: vec![130.0, 129.0, 128.0],
            wind: vec![Some(20.0), None, Some(70.0)],
        }
    }

    #[test]
    fn should_emit_markers_for_defined_wind() {
        let track = emit(4, "SID", "NAME", &aligned(), &Classifier::default());

        assert_eq!(track.storm, 4);
        assert_eq!(track.path.len(), 3);
        assert_eq!(track.markers.len(), 2);
        assert_eq!(track.markers[0].step, 0);
        assert_eq!(track.markers[0].category, Category::TD);
        assert_eq!(track.markers[1].step, 2);
        assert_eq!(track.markers[1].category, Category::TY);
        assert_eq!(track.markers[1].color(), "red");
        assert_eq!(
            track.markers[1].position,
            Position {
                lat: 12.0,
                lon: 128.0
            }
        );
        assert_eq!(track.wind_kmh[1], None);
    }

    #[test]
    fn should_keep_full_path() {
        let track = emit(0, "", "", &aligned(), &Classifier::default());

        assert_eq!(
            track.path[1],
            Position {
                lat: 11.0,
                lon: 129.0
            }
        );
    }

    #[test]
    fn should_build_legend_in_band_order() {
        let entries = legend();

        assert_eq!(entries.len(), 6);
        assert_eq!(entries[0].color, "black");
        assert_eq!(entries[5].category, Category::SuperTY);
        assert_eq!(entries[5].label, "Super Typhoon (≥185 km/h)");
    }

    #[test]
    fn should_render_every_track() {
        let classifier = Classifier::default();
        let tracks = vec![
            emit(1, "a", "", &aligned(), &classifier),
            emit(3, "b", "", &aligned(), &classifier),
        ];
        let mut recorder = Recorder::default();

        render(&tracks, &mut recorder).unwrap();

        assert_eq!(recorder.legend, 6);
        assert_eq!(recorder.storms, vec![1, 3]);
        assert!(recorder.finished);
    }
}
