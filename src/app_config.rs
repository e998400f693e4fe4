use crate::session_loader::RadiusLimits;
use config::{Config, ConfigError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    attendance: Attendance,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default().separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn attendance(&self) -> &Attendance {
        &self.attendance
    }
}

#[derive(Debug, Deserialize)]
pub struct Attendance {
    sessions_file: String,
    min_radius_m: f64,
    max_radius_m: f64,
}

impl Attendance {
    pub fn sessions_file(&self) -> &str {
        &self.sessions_file
    }

    pub fn radius_limits(&self) -> RadiusLimits {
        RadiusLimits {
            min_meters: self.min_radius_m,
            max_meters: self.max_radius_m,
        }
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                attendance: Attendance {
                    sessions_file: "sessions.json".to_string(),
                    min_radius_m: 10.0,
                    max_radius_m: 500.0,
                },
            },
        }
    }

    pub fn sessions_file(mut self, path: String) -> Self {
        self.config.attendance.sessions_file = path;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
