use num_traits::{Float, FromPrimitive};

/// Returns the great circle distance, in meters, between two
/// lat/lon pairs (degrees) on a sphere of radius `earth_radius_m`.
///
/// Inputs are not range checked.
pub fn haversine_distance<T>(lat1: T, lon1: T, lat2: T, lon2: T, earth_radius_m: T) -> T
where
    T: Float + FromPrimitive,
{
    let two = T::one() + T::one();

    let lat1 = lat1.to_radians();
    let lat2 = lat2.to_radians();
    let delta_lat = lat2 - lat1;
    let delta_lon = lon2.to_radians() - lon1.to_radians();

    let a = {
        let a = ((delta_lat / two).sin().powi(2)
            + lat1.cos() * lat2.cos() * (delta_lon / two).sin().powi(2))
        .sqrt();
        // Rounding can push `a` just past 1 for antipodal points.
        a.max(-T::one()).min(T::one())
    };

    two * earth_radius_m * a.asin()
}
