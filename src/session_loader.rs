use crate::domain::ClassSession;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tokio::fs;
use tracing::{info, instrument};

/// Bounds every session radius must fall within.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadiusLimits {
    pub min_meters: f64,
    pub max_meters: f64,
}

impl RadiusLimits {
    pub fn contains(&self, radius_meters: f64) -> bool {
        radius_meters > 0.0 && radius_meters >= self.min_meters && radius_meters <= self.max_meters
    }
}

impl Default for RadiusLimits {
    fn default() -> Self {
        RadiusLimits {
            min_meters: 10.0,
            max_meters: 500.0,
        }
    }
}

#[instrument]
pub async fn load_sessions_from(path: &str, radius_limits: RadiusLimits) -> Result<Vec<ClassSession>, SessionLoadError> {
    info!("📁 Loading sessions...");
    let content = fs::read_to_string(path).await.map_err(|e| SessionLoadError::Io {
        source: e,
        path: PathBuf::from(path),
    })?;

    let sessions: Vec<ClassSession> = serde_json::from_str(&content).map_err(|e| SessionLoadError::Json {
        source: e,
        path: PathBuf::from(path),
    })?;

    if let Some(session) = sessions.iter().find(|session| !radius_limits.contains(session.radius_meters)) {
        return Err(SessionLoadError::InvalidRadius {
            session_code: session.session_code.clone(),
            radius_meters: session.radius_meters,
            limits: radius_limits,
            path: PathBuf::from(path),
        });
    }

    info!("📁 Loading sessions... OK, {} loaded", sessions.len());
    Ok(sessions)
}

#[derive(Error, Debug)]
pub enum SessionLoadError {
    #[error("failed to read '{}': {}", path.display(), source)]
    Io { source: io::Error, path: PathBuf },
    #[error("failed to parse '{}': {}", path.display(), source)]
    Json { source: serde_json::Error, path: PathBuf },
    #[error("session '{session_code}' in '{}' has radius {radius_meters}m, must be between {}m and {}m", .path.display(), .limits.min_meters, .limits.max_meters)]
    InvalidRadius {
        session_code: String,
        radius_meters: f64,
        limits: RadiusLimits,
        path: PathBuf,
    },
}
