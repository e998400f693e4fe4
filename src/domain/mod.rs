mod attendance_record;
mod attendance_request;
mod class_session;
mod geo_coordinate;

pub use attendance_record::AttendanceRecord;
pub use attendance_request::AttendanceRequest;
pub use class_session::ClassSession;
pub use geo_coordinate::GeoCoordinate;
