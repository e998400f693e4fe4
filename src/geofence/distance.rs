use crate::domain::GeoCoordinate;
use std::f64::consts::PI;

/// Mean radius of the spherical Earth model, in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Returns the great-circle distance in meters between `a` and `b` using the haversine formula.
///
/// Coordinates are not range checked and non-finite values propagate into the result.
pub fn distance_meters(a: GeoCoordinate, b: GeoCoordinate) -> f64 {
    let lat_a = radians(a.latitude);
    let lat_b = radians(b.latitude);
    let delta_lat = radians(b.latitude - a.latitude);
    let delta_lon = radians(b.longitude - a.longitude);

    let sin_lat = (delta_lat / 2.0).sin();
    let sin_lon = (delta_lon / 2.0).sin();
    let haversine = sin_lat * sin_lat + lat_a.cos() * lat_b.cos() * sin_lon * sin_lon;
    let central_angle = 2.0 * haversine.sqrt().atan2((1.0 - haversine).sqrt());

    EARTH_RADIUS_METERS * central_angle
}

// Must stay `degrees * PI / 180`, `f64::to_radians` rounds differently for some inputs.
fn radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}
