//! Print the intensity categories with their colours and km/h bands.

use cyclone_tracks::{emitter, intensity::IntensityScale};

pub fn legend() {
    let scale = IntensityScale::default();

    for entry in emitter::legend() {
        let band = scale
            .bands()
            .iter()
            .position(|b| b.category == entry.category)
            .map(|i| describe_band(&scale, i))
            .unwrap_or_default();

        println!(
            "{:<8} {:<7} {:<14} {}",
            entry.category.code(),
            entry.color,
            band,
            entry.label
        );
    }
}

fn describe_band(scale: &IntensityScale, idx: usize) -> String {
    let bands = scale.bands();
    let lower = idx.checked_sub(1).and_then(|i| bands[i].upper_kmh);

    match (lower, bands[idx].upper_kmh) {
        (None, Some(upper)) => format!("< {} km/h", upper),
        (Some(lower), Some(upper)) => format!("{}-{} km/h", lower, upper),
        (Some(lower), None) => format!(">= {} km/h", lower),
        (None, None) => "any".to_string(),
    }
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn should_describe_bands() {
        let scale = IntensityScale::default();

        assert_eq!(describe_band(&scale, 0), "< 63 km/h");
        assert_eq!(describe_band(&scale, 1), "63-88 km/h");
        assert_eq!(describe_band(&scale, 5), ">= 185 km/h");
    }
}
