use crate::domain::GeoCoordinate;
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRequest {
    pub session_code: String,
    pub student_name: String,
    pub index_number: String,
    pub location: GeoCoordinate,
}
