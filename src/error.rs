//! Error types for the track engine.

use thiserror::Error;

/// Failure while turning raw basin codes into per-storm labels.
#[derive(Debug, Error, PartialEq)]
pub enum DecodeError {
    #[error("storm {storm}: packed basin row has odd length {len}")]
    OddPackedRow { storm: usize, len: usize },

    #[error("storm {storm}, step {step}: basin code is missing its second character")]
    TruncatedCode { storm: usize, step: usize },

    #[error("storm {storm}, step {step}: basin code byte {byte:#04x} is not ASCII")]
    NonAscii { storm: usize, step: usize, byte: u8 },

    #[error("storm {storm}: unknown basin code `{code}`")]
    UnknownBasin { storm: usize, code: String },
}

/// The dataset does not have the (storm, step) shape the engine expects.
#[derive(Debug, Error, PartialEq)]
pub enum DatasetError {
    #[error("field `{field}` has {found} storms, expected {expected}")]
    StormCount {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("field `{field}`, storm {storm}: {found} steps, expected {expected}")]
    StepCount {
        field: &'static str,
        storm: usize,
        expected: usize,
        found: usize,
    },
}

/// Invalid engine configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unit conversion factor must be finite and positive, got {0}")]
    ConversionFactor(f64),

    #[error("unknown target basin `{0}`")]
    UnknownBasin(String),

    #[error("intensity scale must not be empty")]
    EmptyScale,

    #[error("intensity band upper bounds must be strictly increasing")]
    UnorderedScale,

    #[error("only the last intensity band may be unbounded")]
    UnboundedBand,
}

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
