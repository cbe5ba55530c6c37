use crate::{
    constants::{DEFAULT_SAMPLES, MEAN_EARTH_RADIUS, ZERO_LEVEL_EARTH_RADIUS_KM},
    forest::{apply_forest_offset, ForestZones},
    math::{conditional_zero_level_series, haversine_distance, linspace},
    ElevationSource, TerrainError, C,
};
use geo::geometry::Coord;
use log::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    /// Sample locations, linearly interpolated from `start` to `end`.
    pub points: Vec<Coord<C>>,

    /// Distance (km) of each sample along the path; starts at 0.
    pub distances_km: Vec<C>,

    /// Elevation of each sample as reported by the elevation source.
    pub raw_elev_m: Vec<C>,

    /// Conditional zero level at each sample (all 0 when disabled).
    pub zero_level_m: Vec<C>,

    /// `raw_elev_m + zero_level_m`.
    pub corrected_elev_m: Vec<C>,

    /// `corrected_elev_m` plus canopy height over forest zones.
    pub forest_elev_m: Vec<C>,
}

impl Profile {
    pub fn builder() -> ProfileBuilder {
        ProfileBuilder {
            start: None,
            end: None,
            samples: DEFAULT_SAMPLES,
            zero_level: false,
            forest: ForestZones::default(),
        }
    }

    /// Total path length in km.
    pub fn distance_km(&self) -> C {
        self.distances_km.last().copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

pub struct ProfileBuilder {
    start: Option<Coord<C>>,

    end: Option<Coord<C>>,

    /// Number of steps between `start` and `end`.
    samples: usize,

    /// Add conditional zero level.
    zero_level: bool,

    /// Where to add canopy height.
    forest: ForestZones,
}

impl ProfileBuilder {
    #[must_use]
    pub fn start(mut self, coord: Coord<C>) -> Self {
        self.start = Some(coord);
        self
    }

    #[must_use]
    pub fn end(mut self, coord: Coord<C>) -> Self {
        self.end = Some(coord);
        self
    }

    /// Number of steps between start and end (defaults to 99).
    #[must_use]
    pub fn samples(mut self, count: usize) -> Self {
        self.samples = count;
        self
    }

    #[must_use]
    pub fn zero_level(mut self, enabled: bool) -> Self {
        self.zero_level = enabled;
        self
    }

    #[must_use]
    pub fn forest(mut self, zones: ForestZones) -> Self {
        self.forest = zones;
        self
    }

    pub fn build<S>(&self, source: &S) -> Result<Profile, TerrainError>
    where
        S: ElevationSource + ?Sized,
    {
        let (Some(start), Some(end)) = (self.start, self.end) else {
            return Err(TerrainError::Builder);
        };

        let (points, distances_km, path_runtime) = {
            let now = std::time::Instant::now();
            let points = build_sample_points(start, end, self.samples)?;
            let distances_km = build_distance_series(&points);
            (points, distances_km, now.elapsed())
        };

        let (raw_elev_m, lookup_runtime) = {
            let now = std::time::Instant::now();
            let raw_elev_m = source.elevations(&points)?;
            (raw_elev_m, now.elapsed())
        };
        if raw_elev_m.len() != points.len() {
            return Err(TerrainError::ElevationCount {
                expected: points.len(),
                got: raw_elev_m.len(),
            });
        }

        let zero_level_m =
            conditional_zero_level_series(&distances_km, self.zero_level, ZERO_LEVEL_EARTH_RADIUS_KM);
        let corrected_elev_m = apply_corrections(&raw_elev_m, &zero_level_m);
        let forest_elev_m = apply_forest_offset(&corrected_elev_m, &self.forest);

        debug!(
            "profile; len: {}, distance: {:.3} km, zero_level: {}, path_exec: {:?}, lookup_exec: {:?}",
            points.len(),
            distances_km.last().copied().unwrap_or_default(),
            self.zero_level,
            path_runtime,
            lookup_runtime
        );

        Ok(Profile {
            points,
            distances_km,
            raw_elev_m,
            zero_level_m,
            corrected_elev_m,
            forest_elev_m,
        })
    }
}

/// Builds a profile with the default forest zones.
pub fn run_profile<S>(
    start: Coord<C>,
    end: Coord<C>,
    count: usize,
    apply_zero_level: bool,
    source: &S,
) -> Result<Profile, TerrainError>
where
    S: ElevationSource + ?Sized,
{
    Profile::builder()
        .start(start)
        .end(end)
        .samples(count)
        .zero_level(apply_zero_level)
        .build(source)
}

/// Returns `count + 1` points evenly spaced, in coordinate space,
/// from `start` to `end`.
pub fn build_sample_points(
    start: Coord<C>,
    end: Coord<C>,
    count: usize,
) -> Result<Vec<Coord<C>>, TerrainError> {
    if count == 0 {
        return Err(TerrainError::SampleCount);
    }
    Ok(linspace(start.x, end.x, count + 1)
        .zip(linspace(start.y, end.y, count + 1))
        .map(|(x, y)| Coord { x, y })
        .collect())
}

/// Returns the haversine distance (km) between the last point and
/// every point, in reverse order.
///
/// For a linear path this puts 0 first and the total length last,
/// i.e. index `i` is roughly the distance of `points[i]` from the
/// start.
pub fn build_distance_series(points: &[Coord<C>]) -> Vec<C> {
    let Some(&reference) = points.last() else {
        return Vec::new();
    };
    points
        .iter()
        .rev()
        .map(|point| {
            haversine_distance(reference.y, reference.x, point.y, point.x, MEAN_EARTH_RADIUS)
                / 1000.0
        })
        .collect()
}

/// Element-wise `raw + zero_level`.
///
/// # Panics
///
/// If the two series differ in length.
pub fn apply_corrections(raw_elev_m: &[C], zero_level_m: &[C]) -> Vec<C> {
    assert_eq!(
        raw_elev_m.len(),
        zero_level_m.len(),
        "elevation and zero level series must be the same length"
    );
    raw_elev_m
        .iter()
        .zip(zero_level_m)
        .map(|(elev, zero)| elev + zero)
        .collect()
}
