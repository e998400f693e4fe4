use crate::domain::GeoCoordinate;
use crate::geofence::GeofenceSpec;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSession {
    pub id: String,
    pub title: String,
    pub course_name: String,
    pub location: GeoCoordinate,
    #[serde(rename = "radius")]
    pub radius_meters: f64,
    pub session_code: String,
    pub is_active: bool,
}

impl ClassSession {
    pub fn fence(&self) -> GeofenceSpec {
        GeofenceSpec::new(self.location, self.radius_meters)
    }
}
