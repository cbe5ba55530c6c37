//! # Terrain
//!
//! `terrain` builds elevation profiles between two points: samples
//! a linear lat/lon path, looks up each sample's elevation, and
//! applies the conditional zero level and forest canopy corrections.

pub mod constants;
mod elevation_source;
mod error;
mod forest;
pub mod math;
mod profile;
mod summary;

/// Base floating point type used for all coordinates and calculations.
pub type C = f64;

pub use crate::{
    elevation_source::ElevationSource,
    error::TerrainError,
    forest::{apply_forest_offset, ForestZones, DEFAULT_CANOPY_M},
    profile::{
        apply_corrections, build_distance_series, build_sample_points, run_profile, Profile,
        ProfileBuilder,
    },
    summary::Summary,
};
pub use geo;
