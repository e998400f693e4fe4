use crate::domain::GeoCoordinate;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: String,
    pub session_id: String,
    pub student_name: String,
    pub index_number: String,
    pub timestamp: DateTime<Utc>,
    pub location: GeoCoordinate,
    pub is_valid: bool,
}
