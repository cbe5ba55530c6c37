/// Earth radius, in meters, used for haversine distances.
pub const MEAN_EARTH_RADIUS: f64 = 6_371_000.0;

/// Earth radius, in kilometers, used by the conditional zero level
/// formula.
///
/// Note: this does not agree with [`MEAN_EARTH_RADIUS`]. Both values
/// are kept as-is until someone can confirm which one the zero level
/// tables were derived with.
pub const ZERO_LEVEL_EARTH_RADIUS_KM: f64 = 6_379.0;

/// Default number of steps between start and end (yields 100 samples).
pub const DEFAULT_SAMPLES: usize = 99;
