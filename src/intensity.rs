//! Wind speed to intensity category.
//!
//! Bands are contiguous: each covers `[previous upper bound, upper bound)` in km/h,
//! and the last one is open ended. A value of 62.5 km/h is therefore a tropical
//! depression and 184.999 km/h a severe typhoon.

use std::fmt;

use crate::error::ConfigError;

/// Knots to km/h.
pub const KNOTS_TO_KMH: f64 = 1.852;

/// Storm intensity, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Tropical depression
    TD,
    /// Tropical storm
    TS,
    /// Severe tropical storm
    STS,
    /// Typhoon
    TY,
    /// Severe typhoon
    STY,
    /// Super typhoon
    SuperTY,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::TD,
        Category::TS,
        Category::STS,
        Category::TY,
        Category::STY,
        Category::SuperTY,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Category::TD => "TD",
            Category::TS => "TS",
            Category::STS => "STS",
            Category::TY => "TY",
            Category::STY => "STY",
            Category::SuperTY => "SuperTY",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Category::TD => "black",
            Category::TS => "green",
            Category::STS => "blue",
            Category::TY => "red",
            Category::STY => "pink",
            Category::SuperTY => "purple",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::TD => "Tropical Depression (41-62 km/h)",
            Category::TS => "Tropical Storm (63-87 km/h)",
            Category::STS => "Severe Tropical Storm (88-117 km/h)",
            Category::TY => "Typhoon (118-149 km/h)",
            Category::STY => "Severe Typhoon (150-184 km/h)",
            Category::SuperTY => "Super Typhoon (≥185 km/h)",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One row of the band table. `upper_kmh` is exclusive; `None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub upper_kmh: Option<f64>,
    pub category: Category,
}

const DEFAULT_BANDS: [Band; 6] = [
    Band {
        upper_kmh: Some(63.0),
        category: Category::TD,
    },
    Band {
        upper_kmh: Some(88.0),
        category: Category::TS,
    },
    Band {
        upper_kmh: Some(118.0),
        category: Category::STS,
    },
    Band {
        upper_kmh: Some(150.0),
        category: Category::TY,
    },
    Band {
        upper_kmh: Some(185.0),
        category: Category::STY,
    },
    Band {
        upper_kmh: None,
        category: Category::SuperTY,
    },
];

/// Ordered band table, evaluated first to last.
#[derive(Debug, Clone, PartialEq)]
pub struct IntensityScale {
    bands: Vec<Band>,
}

impl Default for IntensityScale {
    fn default() -> Self {
        IntensityScale {
            bands: DEFAULT_BANDS.to_vec(),
        }
    }
}

impl IntensityScale {
    /// Builds a scale from bands ordered by strictly increasing upper bound. Only
    /// the final band may be unbounded.
    pub fn new(bands: Vec<Band>) -> Result<Self, ConfigError> {
        let (last, bounded) = bands.split_last().ok_or(ConfigError::EmptyScale)?;
        let mut previous = f64::NEG_INFINITY;
        for band in bounded {
            let upper = band.upper_kmh.ok_or(ConfigError::UnboundedBand)?;
            if upper.is_nan() || upper <= previous {
                return Err(ConfigError::UnorderedScale);
            }
            previous = upper;
        }
        if let Some(upper) = last.upper_kmh {
            if upper.is_nan() || upper <= previous {
                return Err(ConfigError::UnorderedScale);
            }
        }

        Ok(IntensityScale { bands })
    }

    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// Category for a speed in km/h. `None` for NaN, and for values at or above
    /// the last upper bound of a scale whose final band is bounded.
    pub fn categorize(&self, kmh: f64) -> Option<Category> {
        if kmh.is_nan() {
            return None;
        }

        self.bands
            .iter()
            .find(|band| band.upper_kmh.map_or(true, |upper| kmh < upper))
            .map(|band| band.category)
    }
}

/// Converts wind speeds and classifies them against a scale.
#[derive(Debug, Clone, PartialEq)]
pub struct Classifier {
    factor: f64,
    scale: IntensityScale,
}

impl Default for Classifier {
    fn default() -> Self {
        Classifier::new(KNOTS_TO_KMH, IntensityScale::default())
    }
}

impl Classifier {
    pub fn new(factor: f64, scale: IntensityScale) -> Self {
        Classifier { factor, scale }
    }

    pub fn to_kmh(&self, knots: f64) -> f64 {
        knots * self.factor
    }

    /// Classifies one wind sample in knots. Absent or NaN samples abstain.
    pub fn classify(&self, knots: Option<f64>) -> Option<Category> {
        let knots = knots?;

        self.scale.categorize(self.to_kmh(knots))
    }
}

// -- Tests -------------------------------------------------------------------
