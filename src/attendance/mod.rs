mod register;
mod session_directory;

pub use register::{AttendanceRegister, MarkedAttendance};
pub use session_directory::{InMemorySessions, SessionDirectory};
