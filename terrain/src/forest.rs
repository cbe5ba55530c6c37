use log::warn;
use std::ops::Range;

/// Canopy height, in meters, added over forested samples.
pub const DEFAULT_CANOPY_M: f64 = 20.0;

/// Sample index ranges covered by forest.
///
/// The defaults were surveyed against the 100 point (99 step) grid
/// and mean nothing for other sample counts.
#[derive(Debug, Clone, PartialEq)]
pub struct ForestZones {
    /// Half-open sample index ranges.
    pub ranges: Vec<Range<usize>>,

    /// Height added to every sample inside `ranges`.
    pub canopy_m: f64,
}

impl Default for ForestZones {
    fn default() -> Self {
        Self {
            ranges: vec![34..43, 56..86],
            canopy_m: DEFAULT_CANOPY_M,
        }
    }
}

impl ForestZones {
    /// No forest at all.
    pub fn none() -> Self {
        Self {
            ranges: Vec::new(),
            canopy_m: DEFAULT_CANOPY_M,
        }
    }

    pub fn contains(&self, idx: usize) -> bool {
        self.ranges.iter().any(|range| range.contains(&idx))
    }
}

/// Returns a copy of `elevations` with `zones.canopy_m` added to each
/// sample inside a forest zone.
///
/// Overlapping zones do not stack.
pub fn apply_forest_offset(elevations: &[f64], zones: &ForestZones) -> Vec<f64> {
    for range in &zones.ranges {
        if range.end > elevations.len() {
            warn!(
                "forest zone {range:?} extends past the last sample ({}), ignoring the excess",
                elevations.len()
            );
        }
    }
    elevations
        .iter()
        .enumerate()
        .map(|(idx, &elev)| {
            if zones.contains(idx) {
                elev + zones.canopy_m
            } else {
                elev
            }
        })
        .collect()
}
