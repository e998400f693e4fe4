use crate::attendance::{AttendanceRegister, MarkedAttendance, SessionDirectory};
use crate::domain::{AttendanceRecord, AttendanceRequest, ClassSession};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Display;
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::LinesStream;
use tracing::{debug, info, instrument, warn};

/// Lines carrying a `command` field, every other line is an attendance request.
#[derive(Debug, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
enum Command {
    Attendance {
        #[serde(rename = "sessionId")]
        session_id: String,
    },
    Session {
        #[serde(rename = "sessionCode")]
        session_code: String,
    },
    Toggle {
        #[serde(rename = "sessionCode")]
        session_code: String,
    },
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum SubmissionResponse<'a> {
    Marked(MarkedResponse),
    Session(&'a ClassSession),
    Records(Vec<&'a AttendanceRecord>),
    Rejected { message: String },
}

#[derive(Debug, Serialize)]
struct MarkedResponse {
    message: &'static str,
    #[serde(flatten)]
    marked: MarkedAttendance,
}

/// Reads one JSON request per line and writes one JSON response per line.
#[instrument(skip_all)]
pub async fn process_submissions<S, R, W>(register: &mut AttendanceRegister<S>, reader: R, mut writer: W) -> io::Result<usize>
where
    S: SessionDirectory,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = LinesStream::new(reader.lines());
    let mut processed = 0;

    while let Some(line) = lines.next().await {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        debug!("🔹 Received line: {}", line);
        let response = handle_line(register, &line);

        let mut json = serde_json::to_string(&response)?;
        json.push('\n');
        writer.write_all(json.as_bytes()).await?;
        processed += 1;
    }

    writer.flush().await?;
    info!("✅  Processed {} line(s)", processed);
    Ok(processed)
}

fn handle_line<'a, S: SessionDirectory>(register: &'a mut AttendanceRegister<S>, line: &str) -> SubmissionResponse<'a> {
    let value = match serde_json::from_str::<Value>(line) {
        Ok(value) => value,
        Err(err) => return malformed(err),
    };

    if value.get("command").is_none() {
        return match serde_json::from_value::<AttendanceRequest>(value) {
            Ok(request) => match register.mark(request, Utc::now()) {
                Ok(marked) => SubmissionResponse::Marked(MarkedResponse {
                    message: "Attendance marked successfully",
                    marked,
                }),
                Err(err) => rejected(err),
            },
            Err(err) => malformed(err),
        };
    }

    match serde_json::from_value::<Command>(value) {
        Ok(Command::Attendance { session_id }) => match register.records_for(&session_id) {
            Ok(records) => SubmissionResponse::Records(records),
            Err(err) => rejected(err),
        },
        Ok(Command::Session { session_code }) => match register.session(&session_code) {
            Ok(session) => SubmissionResponse::Session(session),
            Err(err) => rejected(err),
        },
        Ok(Command::Toggle { session_code }) => match register.toggle_session(&session_code) {
            Ok(session) => SubmissionResponse::Session(session),
            Err(err) => rejected(err),
        },
        Err(err) => malformed(err),
    }
}

fn rejected<'a>(err: impl Display) -> SubmissionResponse<'a> {
    warn!("⚠️ Rejected: {}", err);
    SubmissionResponse::Rejected { message: err.to_string() }
}

fn malformed<'a>(err: serde_json::Error) -> SubmissionResponse<'a> {
    warn!("⚠️ Malformed line: {}", err);
    SubmissionResponse::Rejected {
        message: format!("malformed submission: {}", err),
    }
}
