use num_traits::{Float, FromPrimitive};

/// Returns the conditional zero level (meters) at distance `r_i` km
/// along a path of total length `r_0` km.
///
/// The curve is 0 at both ends and peaks at the midpoint. A zero
/// length path has no curvature, so `r_0 == 0` yields 0.
pub fn conditional_zero_level<T>(r_i: T, r_0: T, earth_radius_km: T) -> T
where
    T: Float + FromPrimitive,
{
    if r_0.is_zero() {
        return T::zero();
    }
    let two = T::one() + T::one();
    let km_to_m = T::from_f64(1000.0).unwrap();
    let k = r_i / r_0;
    (r_0 * r_0) / (two * earth_radius_km) * k * (T::one() - k) * km_to_m
}

/// Maps a distance series (km) to its zero level corrections.
///
/// The last element of `distances_km` is used as the total path
/// length. When `enabled` is false the result is all zeros.
pub fn conditional_zero_level_series<T>(distances_km: &[T], enabled: bool, earth_radius_km: T) -> Vec<T>
where
    T: Float + FromPrimitive,
{
    match (enabled, distances_km.last()) {
        (true, Some(&r_0)) => distances_km
            .iter()
            .map(|&r_i| conditional_zero_level(r_i, r_0, earth_radius_km))
            .collect(),
        _ => vec![T::zero(); distances_km.len()],
    }
}

#[cfg(test)]
mod tests {
    use super::{conditional_zero_level, conditional_zero_level_series};
    use crate::constants::ZERO_LEVEL_EARTH_RADIUS_KM as R;
    use approx::assert_relative_eq;

    #[test]
    fn test_midpoint() {
        // (100² / (2·6379)) · 0.5 · 0.5 · 1000
        assert_relative_eq!(
            195.955_478_915_190_47,
            conditional_zero_level(50.0, 100.0, R),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_ends_are_zero() {
        assert_eq!(0.0, conditional_zero_level(0.0, 44.13, R));
        assert_eq!(0.0, conditional_zero_level(44.13, 44.13, R));
    }

    #[test]
    fn test_zero_length_path() {
        assert_eq!(0.0, conditional_zero_level(0.0, 0.0, R));
        assert_eq!(
            vec![0.0, 0.0, 0.0],
            conditional_zero_level_series(&[0.0, 0.0, 0.0], true, R)
        );
    }

    #[test]
    fn test_series_enabled() {
        let distances = [0.0, 22.046_303_230_609_485, 44.130_255_805_565_575];
        let series = conditional_zero_level_series(&distances, true, R);
        assert_eq!(series.len(), 3);
        assert_eq!(series[0], 0.0);
        assert_relative_eq!(series[1], 38.161_899_592_246_51, epsilon = 1e-6);
        assert_eq!(series[2], 0.0);
        assert!(series.iter().all(|&z| z >= 0.0));
    }

    #[test]
    fn test_series_disabled() {
        let distances = [0.0, 22.0, 44.0, 66.0];
        assert_eq!(
            vec![0.0; 4],
            conditional_zero_level_series(&distances, false, R)
        );
    }

    #[test]
    fn test_series_empty() {
        assert!(conditional_zero_level_series::<f64>(&[], true, R).is_empty());
    }
}
