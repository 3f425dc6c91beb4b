use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::core::map::{DEFAULT_CENTER_LAT, DEFAULT_CENTER_LNG};
use crate::places::client::DEFAULT_SEARCH_TIMEOUT_SECS;

pub const SEARCH_KEY_ENV: &str = "KAKAO_REST_API_KEY";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_search_base_url")]
    pub search_base_url: String,
    /// REST credential for place search. The environment variable wins
    /// over this field; empty means unconfigured.
    #[serde(default)]
    pub search_api_key: String,
    #[serde(default = "default_search_limit")]
    pub search_limit: u32,
    #[serde(default = "default_search_timeout")]
    pub search_timeout_secs: u64,
    #[serde(default = "default_center_lat")]
    pub center_lat: f64,
    #[serde(default = "default_center_lng")]
    pub center_lng: f64,
}

fn default_search_base_url() -> String {
    "https://dapi.kakao.com/v2/local/search/keyword.json".to_string()
}
fn default_search_limit() -> u32 {
    5
}
fn default_search_timeout() -> u64 {
    DEFAULT_SEARCH_TIMEOUT_SECS
}
fn default_center_lat() -> f64 {
    DEFAULT_CENTER_LAT
}
fn default_center_lng() -> f64 {
    DEFAULT_CENTER_LNG
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            search_base_url: default_search_base_url(),
            search_api_key: String::new(),
            search_limit: default_search_limit(),
            search_timeout_secs: default_search_timeout(),
            center_lat: default_center_lat(),
            center_lng: default_center_lng(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("openspot")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".openspot")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("openspot.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("openspot.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// The effective search credential: environment first, then config.
    pub fn search_key(&self) -> String {
        match env::var(SEARCH_KEY_ENV) {
            Ok(v) if !v.trim().is_empty() => v,
            _ => self.search_api_key.clone(),
        }
    }

    /// Report config-file keys that are absent (filled from defaults).
    pub fn missing_fields() -> Vec<String> {
        let path = Self::config_file();
        let Ok(content) = fs::read_to_string(&path) else {
            return vec!["<config file not found>".to_string()];
        };
        let Ok(value) = serde_yaml::from_str::<serde_yaml::Value>(&content) else {
            return vec!["<config file not parseable>".to_string()];
        };

        [
            "database",
            "search_base_url",
            "search_api_key",
            "search_limit",
            "search_timeout_secs",
            "center_lat",
            "center_lng",
        ]
        .into_iter()
        .filter(|k| value.get(*k).is_none())
        .map(String::from)
        .collect()
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).expect("serializable config");
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }
}
