/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in kilometers
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// True when both components are finite and inside the WGS84 ranges
pub fn is_valid_coordinate(lat: f64, lon: f64) -> bool {
    lat.is_finite() && lon.is_finite() && (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_distance() {
        // Cebu City to Lapu-Lapu City (approximately 7 km)
        let cebu_lat = 10.3157;
        let cebu_lon = 123.8854;
        let lapu_lat = 10.3103;
        let lapu_lon = 123.9494;

        let distance = haversine_distance(cebu_lat, cebu_lon, lapu_lat, lapu_lon);
        assert!((distance - 7.0).abs() < 1.0, "Distance should be ~7km, got {}", distance);
    }

    #[test]
    fn test_haversine_same_point() {
        assert_eq!(haversine_distance(10.3, 123.9, 10.3, 123.9), 0.0);
    }

    #[test]
    fn test_haversine_is_symmetric() {
        let there = haversine_distance(51.5074, -0.1278, 48.8566, 2.3522);
        let back = haversine_distance(48.8566, 2.3522, 51.5074, -0.1278);
        assert!((there - back).abs() < 1e-9);
        assert!((there - 344.0).abs() < 10.0, "London-Paris should be ~344km, got {}", there);
    }

    #[test]
    fn test_coordinate_validation() {
        assert!(is_valid_coordinate(10.3, 123.9));
        assert!(!is_valid_coordinate(f64::NAN, 123.9));
        assert!(!is_valid_coordinate(10.3, f64::INFINITY));
        assert!(!is_valid_coordinate(91.0, 0.0));
        assert!(!is_valid_coordinate(0.0, -181.0));
    }
}
