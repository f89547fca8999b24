//! Engine configuration.

use crate::{
    basin::is_known_basin,
    error::ConfigError,
    intensity::{Classifier, IntensityScale, KNOTS_TO_KMH},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub target_year: i32,
    pub target_basin: String,
    /// Multiplier from the dataset's wind unit to km/h.
    pub unit_conversion_factor: f64,
    pub intensity_bands: IntensityScale,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            target_year: 2024,
            target_basin: "WP".to_string(),
            unit_conversion_factor: KNOTS_TO_KMH,
            intensity_bands: IntensityScale::default(),
        }
    }
}

impl Config {
    pub fn new(target_year: i32, target_basin: &str) -> Self {
        Config {
            target_year,
            target_basin: target_basin.to_string(),
            ..Config::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_known_basin(&self.target_basin) {
            return Err(ConfigError::UnknownBasin(self.target_basin.clone()));
        }

        let factor = self.unit_conversion_factor;
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ConfigError::ConversionFactor(factor));
        }

        Ok(())
    }

    pub fn classifier(&self) -> Classifier {
        Classifier::new(self.unit_conversion_factor, self.intensity_bands.clone())
    }
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn should_default_to_western_pacific_2024() {
        let config = Config::default();

        assert_eq!(config.target_year, 2024);
        assert_eq!(config.target_basin, "WP");
        assert_eq!(config.unit_conversion_factor, 1.852);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_reject_unknown_basin() {
        let config = Config::new(2024, "wp");

        assert_eq!(
            config.validate(),
            Err(ConfigError::UnknownBasin("wp".to_string()))
        );
    }

    #[test]
    fn should_reject_bad_factor() {
        let mut config = Config::default();

        config.unit_conversion_factor = 0.0;
        assert_eq!(config.validate(), Err(ConfigError::ConversionFactor(0.0)));

        config.unit_conversion_factor = f64::INFINITY;
        assert!(config.validate().is_err());
    }
}
