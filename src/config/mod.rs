use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::errors::StoreError;

const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Timing and routing knobs for the submission flow.
///
/// Durations are stored in milliseconds so the config file stays flat and
/// hand-editable. `request_timeout_ms` bounds how long a submission may sit
/// in the loading state before it is failed; unset means wait forever.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignupConfig {
    pub status_clear_ms: u64,
    pub settle_delay_ms: u64,
    pub redirect_delay_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_ms: Option<u64>,
    pub login_route: String,
}

impl Default for SignupConfig {
    fn default() -> Self {
        Self {
            status_clear_ms: 3000,
            settle_delay_ms: 1500,
            redirect_delay_ms: 1500,
            request_timeout_ms: None,
            login_route: "/".into(),
        }
    }
}

impl SignupConfig {
    /// Zero-delay profile used by tests and scripted runs.
    pub fn immediate() -> Self {
        Self {
            status_clear_ms: 0,
            settle_delay_ms: 0,
            redirect_delay_ms: 0,
            request_timeout_ms: None,
            login_route: "/".into(),
        }
    }

    pub fn status_clear(&self) -> Duration {
        Duration::from_millis(self.status_clear_ms)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }
}

/// Loads and saves the configuration file under a base directory.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(base: &Path) -> Result<Self, StoreError> {
        ensure_dir(base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    pub fn load(&self) -> Result<SignupConfig, StoreError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(SignupConfig::default())
        }
    }

    pub fn save(&self, config: &SignupConfig) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let temp = TempDir::new().expect("temp dir");
        let manager = ConfigManager::new(temp.path()).expect("config manager");
        let config = manager.load().expect("load config");
        assert_eq!(config, SignupConfig::default());
        assert_eq!(config.status_clear(), Duration::from_millis(3000));
        assert_eq!(config.settle_delay(), Duration::from_millis(1500));
    }

    #[test]
    fn save_then_load_roundtrip() {
        let temp = TempDir::new().expect("temp dir");
        let manager = ConfigManager::new(temp.path()).expect("config manager");
        let config = SignupConfig {
            request_timeout_ms: Some(10_000),
            login_route: "/login".into(),
            ..SignupConfig::default()
        };
        manager.save(&config).expect("save config");
        assert_eq!(manager.load().expect("load config"), config);
    }
}
