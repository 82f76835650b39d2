use std::f64::consts::PI;

use super::coordinate::Coordinate;

/// Coefficient to translate from degrees to radians
pub const DEGREE_RAD: f64 = PI / 180.0;

/// Earth radius in meters
pub const EARTH_R_M: f64 = 6_371_000.0;

/// Calculates great-circle distance with the haversine formula
///
/// Spherical earth, no ellipsoid correction. Good enough at city scale.
///
/// # Returns
///
/// Distance in meters
pub fn distance_haversine(a: &Coordinate, b: &Coordinate) -> f64 {
    let d_lat = (b.latitude - a.latitude) * DEGREE_RAD;
    let d_lon = (b.longitude - a.longitude) * DEGREE_RAD;

    let s_lat = (d_lat / 2.0).sin();
    let s_lon = (d_lon / 2.0).sin();

    let h = s_lat * s_lat
        + (a.latitude * DEGREE_RAD).cos() * (b.latitude * DEGREE_RAD).cos() * s_lon * s_lon;

    2.0 * EARTH_R_M * h.sqrt().atan2((1.0 - h).sqrt())
}
