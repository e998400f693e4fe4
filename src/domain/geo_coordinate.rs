use serde::Serialize;

#[derive(Clone, Copy, Default, Debug, PartialEq, Serialize)]
pub struct GeoCoordinate {
    pub latitude: f64,  // In degrees
    pub longitude: f64, // In degrees
}

impl GeoCoordinate {
    /// Creates a coordinate without range checks, out of range values are passed through as-is.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeoCoordinate { latitude, longitude }
    }
}
