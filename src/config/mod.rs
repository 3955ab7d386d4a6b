use crate::errors::{AppError, AppResult};
use crate::render::ChartFormat;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default)]
    pub default_format: ChartFormat,
    /// Width in points of svg/pdf charts
    #[serde(default = "default_chart_width")]
    pub chart_width: u32,
    /// Height in points of svg/pdf charts; 0 sizes it from the number of attendees
    #[serde(default)]
    pub chart_height: u32,
    /// Width in columns of the time axis of terminal charts
    #[serde(default = "default_text_width")]
    pub text_width: u32,
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_data_dir() -> String {
    "datafiles".to_string()
}
fn default_chart_width() -> u32 {
    1000
}
fn default_text_width() -> u32 {
    60
}
fn default_title() -> String {
    "Attendance Over Time".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            default_format: ChartFormat::default(),
            chart_width: default_chart_width(),
            chart_height: 0,
            text_width: default_text_width(),
            title: default_title(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rattendance")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rattendance")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rattendance.conf")
    }

    /// Data directory with `~/` expanded
    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))
    }

    /// Write these settings to the config file, creating its directory
    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)
    }

    /// Write the configuration file (unless in test mode) and create the data directory
    pub fn init_all(&self, is_test: bool) -> AppResult<()> {
        if !is_test {
            self.save()?;
            success(format!("Config file:    {}", Self::config_file().display()));
        }

        let data = self.data_path();
        fs::create_dir_all(&data)?;
        success(format!("Data directory: {}", data.display()));

        Ok(())
    }
}
