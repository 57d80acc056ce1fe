use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::time::Duration;

use super::alerts::FeedConfig;

/// Environment variable overriding where settings.json lives
pub const CONFIG_DIR_ENV: &str = "VIGIL_CONFIG_DIR";

/// Application settings with feed and monitor configuration.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub feed: FeedConfig,
    /// How often displayed time-ago labels are recomputed
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_seconds: u64,
    #[serde(default)]
    pub monitors: MonitorSettings,
    #[serde(default)]
    pub baseline: Baseline,
}

fn default_refresh_interval() -> u64 {
    60
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            feed: FeedConfig::default(),
            refresh_interval_seconds: default_refresh_interval(),
            monitors: MonitorSettings::default(),
            baseline: Baseline::default(),
        }
    }
}

impl Settings {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_seconds)
    }
}

/// Tick periods for each simulated monitor, in milliseconds
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct MonitorSettings {
    pub location_period_ms: u64,
    pub noise_period_ms: u64,
    pub temporal_period_ms: u64,
    /// Also drives the baseline comparison chart
    pub anomaly_period_ms: u64,
    pub learning_period_ms: u64,
    pub data_point_period_ms: u64,
    /// Delay before the welcome alert is posted
    pub welcome_delay_ms: u64,
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self {
            location_period_ms: 3000,
            noise_period_ms: 2000,
            temporal_period_ms: 1000,
            anomaly_period_ms: 5000,
            learning_period_ms: 2000,
            data_point_period_ms: 1000,
            welcome_delay_ms: 1000,
        }
    }
}

/// "Normal" readings the monitors jitter around
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Baseline {
    pub latitude: f64,
    pub longitude: f64,
    pub noise_level_db: f64,
}

impl Default for Baseline {
    fn default() -> Self {
        Self {
            latitude: 37.7749,
            longitude: -122.4194,
            noise_level_db: 45.0,
        }
    }
}

pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(app_config_dir: PathBuf) -> Self {
        Self {
            config_path: app_config_dir.join("settings.json"),
        }
    }

    /// Config dir from the environment, falling back to the working directory
    pub fn from_env() -> Self {
        let dir = std::env::var(CONFIG_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));
        Self::new(dir)
    }

    pub fn path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Settings {
        if !self.config_path.exists() {
            return Settings::default();
        }
        match fs::read_to_string(&self.config_path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("Ignoring malformed {:?}: {}", self.config_path, e);
                    Settings::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {:?}: {}", self.config_path, e);
                Settings::default()
            }
        }
    }

    pub fn save(&self, settings: &Settings) -> io::Result<()> {
        // Ensure directory exists
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(settings)?;
        fs::write(&self.config_path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::new(dir.path().to_path_buf());

        let default = manager.load();
        assert_eq!(default.refresh_interval_seconds, 60);
        assert_eq!(default.feed.capacity, 10);

        let mut new_settings = Settings::default();
        new_settings.refresh_interval_seconds = 30;
        new_settings.monitors.noise_period_ms = 500;

        manager.save(&new_settings).unwrap();
        let loaded = manager.load();

        assert_eq!(loaded, new_settings);
        assert_eq!(loaded.refresh_interval(), Duration::from_secs(30));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::new(dir.path().to_path_buf());
        fs::write(manager.path(), r#"{"monitors": {"noise_period_ms": 250}}"#).unwrap();

        let loaded = manager.load();
        assert_eq!(loaded.monitors.noise_period_ms, 250);
        assert_eq!(loaded.monitors.location_period_ms, 3000);
        assert_eq!(loaded.monitors.learning_period_ms, 2000);
        assert_eq!(loaded.baseline, Baseline::default());
        assert_eq!(loaded.feed.dedup_window, 5);
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::new(dir.path().to_path_buf());
        fs::write(manager.path(), "{ not json").unwrap();

        assert_eq!(manager.load(), Settings::default());
    }
}
