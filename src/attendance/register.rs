use crate::attendance::SessionDirectory;
use crate::domain::{AttendanceRecord, AttendanceRequest, ClassSession};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, instrument, warn};

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkedAttendance {
    pub record: AttendanceRecord,
    pub distance_meters: u64,
}

/// Records attendance submissions against the sessions of a [`SessionDirectory`].
#[derive(Debug)]
pub struct AttendanceRegister<S: SessionDirectory> {
    sessions: S,
    records: Vec<AttendanceRecord>,
    next_id: u64,
}

impl<S: SessionDirectory> AttendanceRegister<S> {
    pub fn new(sessions: S) -> Self {
        AttendanceRegister {
            sessions,
            records: Vec::new(),
            next_id: 1,
        }
    }

    #[instrument(skip(self, request), fields(session_code = %request.session_code, index_number = %request.index_number))]
    pub fn mark(&mut self, request: AttendanceRequest, now: DateTime<Utc>) -> Result<MarkedAttendance, AttendanceError> {
        let session = self
            .sessions
            .find_by_code(&request.session_code)
            .ok_or_else(|| AttendanceError::SessionNotFound(request.session_code.clone()))?;

        if !session.is_active {
            return Err(AttendanceError::SessionInactive(request.session_code));
        }

        let already_marked = self
            .records
            .iter()
            .any(|record| record.session_id == session.id && record.index_number == request.index_number);
        if already_marked {
            return Err(AttendanceError::AlreadyMarked {
                index_number: request.index_number,
                session_code: request.session_code,
            });
        }

        let check = session.fence().check(request.location);
        if check.is_valid() {
            info!(distance_meters = check.distance_meters(), "🟢 '{}' marked present for '{}', {}", request.student_name, session.title, check);
        } else {
            warn!(distance_meters = check.distance_meters(), "⚠️ '{}' marked outside the fence of '{}', {}", request.student_name, session.title, check);
        }

        let record = AttendanceRecord {
            id: self.next_id.to_string(),
            session_id: session.id.clone(),
            student_name: request.student_name,
            index_number: request.index_number,
            timestamp: now,
            location: request.location,
            is_valid: check.is_valid(),
        };
        self.next_id += 1;
        self.records.push(record.clone());

        Ok(MarkedAttendance {
            record,
            distance_meters: check.rounded_distance(),
        })
    }

    pub fn session(&self, code: &str) -> Result<&ClassSession, AttendanceError> {
        self.sessions
            .find_by_code(code)
            .ok_or_else(|| AttendanceError::SessionNotFound(code.to_string()))
    }

    /// Opens a closed session or closes an open one.
    #[instrument(skip(self))]
    pub fn toggle_session(&mut self, code: &str) -> Result<&ClassSession, AttendanceError> {
        let session = self
            .sessions
            .find_by_code_mut(code)
            .ok_or_else(|| AttendanceError::SessionNotFound(code.to_string()))?;

        session.is_active = !session.is_active;
        info!("🔵 Session '{}' is now {}", session.title, if session.is_active { "open" } else { "closed" });
        Ok(&*session)
    }

    /// Returns the records of a session, newest first.
    pub fn records_for(&self, session_id: &str) -> Result<Vec<&AttendanceRecord>, AttendanceError> {
        if self.sessions.find_by_id(session_id).is_none() {
            return Err(AttendanceError::SessionNotFound(session_id.to_string()));
        }

        let mut records: Vec<_> = self.records.iter().rev().filter(|record| record.session_id == session_id).collect();
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(records)
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum AttendanceError {
    #[error("session '{0}' not found")]
    SessionNotFound(String),
    #[error("session '{0}' is not active")]
    SessionInactive(String),
    #[error("attendance already marked for '{index_number}' in session '{session_code}'")]
    AlreadyMarked { index_number: String, session_code: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attendance::InMemorySessions;
    use crate::domain::{ClassSession, GeoCoordinate};
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    const CLASSROOM: GeoCoordinate = GeoCoordinate { latitude: 6.6745, longitude: -1.5716 };

    fn session(id: &str, code: &str, radius_meters: f64, is_active: bool) -> ClassSession {
        ClassSession {
            id: id.to_string(),
            title: format!("Lecture {}", id),
            course_name: "Data Structures".to_string(),
            location: CLASSROOM,
            radius_meters,
            session_code: code.to_string(),
            is_active,
        }
    }

    fn request(code: &str, index_number: &str, location: GeoCoordinate) -> AttendanceRequest {
        AttendanceRequest {
            session_code: code.to_string(),
            student_name: "Ama Owusu".to_string(),
            index_number: index_number.to_string(),
            location,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 4, 9, 15, 0).unwrap()
    }

    #[fixture]
    fn register() -> AttendanceRegister<InMemorySessions> {
        let sessions = InMemorySessions::new(vec![
            session("1", "ACTIVE", 50.0, true),
            session("2", "CLOSED", 50.0, false),
            session("3", "TINY", 5.0, true),
        ]);
        AttendanceRegister::new(sessions)
    }

    #[rstest]
    fn marks_a_student_inside_the_fence_as_valid(mut register: AttendanceRegister<InMemorySessions>) {
        let marked = register.mark(request("ACTIVE", "0001", GeoCoordinate::new(6.6746, -1.5717)), now()).unwrap();

        assert_eq!(marked.distance_meters, 16);
        assert_eq!(
            marked.record,
            AttendanceRecord {
                id: "1".to_string(),
                session_id: "1".to_string(),
                student_name: "Ama Owusu".to_string(),
                index_number: "0001".to_string(),
                timestamp: now(),
                location: GeoCoordinate::new(6.6746, -1.5717),
                is_valid: true,
            }
        );
    }

    #[rstest]
    fn records_a_student_outside_the_fence_as_invalid(mut register: AttendanceRegister<InMemorySessions>) {
        let marked = register.mark(request("ACTIVE", "0002", GeoCoordinate::new(6.68, -1.58)), now()).unwrap();

        assert_eq!(marked.distance_meters, 1111);
        assert!(!marked.record.is_valid);
        assert_eq!(register.records_for("1").unwrap().len(), 1);
    }

    #[rstest]
    fn marks_a_student_at_the_center_of_a_small_fence_as_valid(mut register: AttendanceRegister<InMemorySessions>) {
        let marked = register.mark(request("TINY", "0001", CLASSROOM), now()).unwrap();

        assert_eq!(marked.distance_meters, 0);
        assert!(marked.record.is_valid);
    }

    #[rstest]
    #[case::unknown_session("NOPE", AttendanceError::SessionNotFound("NOPE".to_string()))]
    #[case::inactive_session("CLOSED", AttendanceError::SessionInactive("CLOSED".to_string()))]
    fn rejects_submissions_that_cannot_be_recorded(
        mut register: AttendanceRegister<InMemorySessions>,
        #[case] code: &str,
        #[case] expected: AttendanceError,
    ) {
        let result = register.mark(request(code, "0001", CLASSROOM), now());

        assert_eq!(result, Err(expected));
        assert!(register.records.is_empty());
    }

    #[rstest]
    fn rejects_a_second_submission_for_the_same_index_number(mut register: AttendanceRegister<InMemorySessions>) {
        register.mark(request("ACTIVE", "0001", CLASSROOM), now()).unwrap();

        let result = register.mark(request("ACTIVE", "0001", CLASSROOM), now());

        assert_eq!(
            result,
            Err(AttendanceError::AlreadyMarked {
                index_number: "0001".to_string(),
                session_code: "ACTIVE".to_string()
            })
        );
        assert_eq!(register.records_for("1").unwrap().len(), 1);
    }

    #[rstest]
    fn assigns_sequential_ids(mut register: AttendanceRegister<InMemorySessions>) {
        let first = register.mark(request("ACTIVE", "0001", CLASSROOM), now()).unwrap();
        let second = register.mark(request("ACTIVE", "0002", CLASSROOM), now()).unwrap();

        assert_eq!(first.record.id, "1");
        assert_eq!(second.record.id, "2");
    }

    #[rstest]
    fn records_for_returns_the_newest_record_first(mut register: AttendanceRegister<InMemorySessions>) {
        register.mark(request("ACTIVE", "0001", CLASSROOM), now()).unwrap();
        register.mark(request("ACTIVE", "0002", CLASSROOM), now() + Duration::minutes(5)).unwrap();
        register.mark(request("ACTIVE", "0003", CLASSROOM), now() - Duration::minutes(5)).unwrap();

        let index_numbers: Vec<_> = register
            .records_for("1")
            .unwrap()
            .iter()
            .map(|record| record.index_number.as_str())
            .collect();

        assert_eq!(index_numbers, vec!["0002", "0001", "0003"]);
        assert!(register.records_for("2").unwrap().is_empty());
    }

    #[rstest]
    fn records_for_an_unknown_session_fails(register: AttendanceRegister<InMemorySessions>) {
        assert_eq!(register.records_for("42"), Err(AttendanceError::SessionNotFound("42".to_string())));
    }

    #[rstest]
    fn toggle_session_closes_and_reopens_a_session(mut register: AttendanceRegister<InMemorySessions>) {
        assert!(!register.toggle_session("ACTIVE").unwrap().is_active);
        assert_eq!(
            register.mark(request("ACTIVE", "0001", CLASSROOM), now()),
            Err(AttendanceError::SessionInactive("ACTIVE".to_string()))
        );

        assert!(register.toggle_session("ACTIVE").unwrap().is_active);
        assert!(register.mark(request("ACTIVE", "0001", CLASSROOM), now()).is_ok());
    }

    #[rstest]
    fn toggle_session_fails_for_an_unknown_code(mut register: AttendanceRegister<InMemorySessions>) {
        assert_eq!(register.toggle_session("NOPE"), Err(AttendanceError::SessionNotFound("NOPE".to_string())));
    }

    #[rstest]
    fn session_returns_the_session_for_a_code(register: AttendanceRegister<InMemorySessions>) {
        assert_eq!(register.session("CLOSED").unwrap().id, "2");
        assert_eq!(register.session("NOPE"), Err(AttendanceError::SessionNotFound("NOPE".to_string())));
    }
}
