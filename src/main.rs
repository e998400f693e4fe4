use crate::app_config::AppConfig;
use crate::attendance::{AttendanceRegister, InMemorySessions};
use crate::session_loader::load_sessions_from;
use crate::submissions::process_submissions;
use tokio::io::{self, BufReader};
use tracing::{info, warn};

mod app_config;
mod attendance;
mod domain;
mod geo_coordinate_deserializer;
mod geofence;
mod session_loader;
mod submissions;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).with_writer(std::io::stderr).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let attendance = config.attendance();
    let sessions = InMemorySessions::new(load_sessions_from(attendance.sessions_file(), attendance.radius_limits()).await?);
    if sessions.is_empty() {
        warn!("⚠️ No sessions loaded, every submission will be rejected");
    }
    info!("✅  Registered {} session(s)", sessions.len());

    let mut register = AttendanceRegister::new(sessions);
    info!("🔥 {} is up and running, reading submissions from stdin", env!("CARGO_PKG_NAME"));

    process_submissions(&mut register, BufReader::new(io::stdin()), io::stdout()).await?;

    Ok(())
}
