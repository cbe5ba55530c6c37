use crate::Profile;

/// Reference values drawn on profile charts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub min_m: f64,
    pub mean_m: f64,
    pub max_m: f64,

    /// Index of the first sample holding `max_m`.
    pub max_idx: usize,

    /// Distance (km) of the highest sample.
    pub max_distance_km: f64,

    /// `max_distance_km` as a fraction of the total path length.
    pub max_ratio: f64,
}

impl Summary {
    /// Returns `None` for empty or mismatched series.
    pub fn new(elevations_m: &[f64], distances_km: &[f64]) -> Option<Self> {
        if elevations_m.is_empty() || elevations_m.len() != distances_km.len() {
            return None;
        }

        let (mut min_m, mut max_m, mut max_idx) = (f64::INFINITY, f64::NEG_INFINITY, 0);
        for (idx, &elev) in elevations_m.iter().enumerate() {
            min_m = min_m.min(elev);
            if elev > max_m {
                max_m = elev;
                max_idx = idx;
            }
        }

        #[allow(clippy::cast_precision_loss)]
        let mean_m = elevations_m.iter().sum::<f64>() / elevations_m.len() as f64;

        let max_distance_km = distances_km[max_idx];
        let total_km = distances_km[distances_km.len() - 1];
        let max_ratio = if total_km == 0.0 {
            0.0
        } else {
            max_distance_km / total_km
        };

        Some(Self {
            min_m,
            mean_m,
            max_m,
            max_idx,
            max_distance_km,
            max_ratio,
        })
    }
}

impl Profile {
    /// Summary of the forest adjusted elevations.
    pub fn summary(&self) -> Option<Summary> {
        Summary::new(&self.forest_elev_m, &self.distances_km)
    }
}

#[cfg(test)]
mod tests {
    use super::Summary;
    use approx::assert_relative_eq;

    #[test]
    fn test_summary() {
        let elevations = [140.0, 162.5, 150.0, 162.5];
        let distances = [0.0, 10.0, 20.0, 40.0];
        let summary = Summary::new(&elevations, &distances).unwrap();
        assert_eq!(summary.min_m, 140.0);
        assert_eq!(summary.max_m, 162.5);
        assert_relative_eq!(summary.mean_m, 153.75);
        // First occurrence wins.
        assert_eq!(summary.max_idx, 1);
        assert_eq!(summary.max_distance_km, 10.0);
        assert_relative_eq!(summary.max_ratio, 0.25);
    }

    #[test]
    fn test_zero_length_path() {
        let summary = Summary::new(&[5.0, 5.0], &[0.0, 0.0]).unwrap();
        assert_eq!(summary.max_ratio, 0.0);
    }

    #[test]
    fn test_degenerate_input() {
        assert_eq!(Summary::new(&[], &[]), None);
        assert_eq!(Summary::new(&[1.0], &[0.0, 1.0]), None);
    }
}
