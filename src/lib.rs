//! Tropical cyclone track selection and intensity classification.
//!
//! Storms are picked from a (storm, step) [`dataset::Dataset`] by season year and
//! basin, their position and wind series are aligned, and every wind sample is
//! mapped to an intensity [`intensity::Category`]. The result is a list of
//! [`emitter::StormTrack`]s for a [`emitter::TrackRenderer`] to draw.

pub mod basin;
pub mod config;
pub mod dataset;
pub mod download;
pub mod emitter;
pub mod error;
pub mod intensity;
pub mod parquet;
pub mod pipeline;
pub mod selector;
pub mod track;

pub use config::Config;
pub use emitter::{render, StormTrack, TrackRenderer};
pub use pipeline::extract_tracks;
