use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::LocaleSyncError;
use crate::retry::RetryPolicy;


/// Top-level localesync configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sync: SyncConfig,
    #[serde(default)]
    pub translate: TranslateConfig,
    /// Extra manual translations, layered over the built-in table.
    #[serde(default)]
    pub overrides: BTreeMap<String, String>,
    /// Directory relative locale paths resolve against. Not read from TOML.
    #[serde(skip)]
    pub base_dir: PathBuf,
    /// File this config was read from; `None` when running on defaults.
    #[serde(skip)]
    pub origin: Option<PathBuf>,
}

/// Document locations and engine pacing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_locales_dir")]
    pub locales_dir: String,
    #[serde(default = "default_source_file")]
    pub source_file: String,
    #[serde(default = "default_target_file")]
    pub target_file: String,
    #[serde(default = "default_snapshot_file")]
    pub snapshot_file: String,
    /// Pause after each live translation call, in milliseconds.
    #[serde(default = "default_pace_ms")]
    pub pace_ms: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            locales_dir: default_locales_dir(),
            source_file: default_source_file(),
            target_file: default_target_file(),
            snapshot_file: default_snapshot_file(),
            pace_ms: default_pace_ms(),
        }
    }
}

/// Translation endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_client")]
    pub client: String,
    #[serde(default = "default_source_lang")]
    pub source_lang: String,
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
    /// Per-attempt request timeout in seconds (default: 15).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Total attempts per text, including the first (default: 3).
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Backoff step in milliseconds; attempt `n` waits `n * backoff_ms`.
    #[serde(default = "default_backoff_ms")]
    pub backoff_ms: u64,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            client: default_client(),
            source_lang: default_source_lang(),
            target_lang: default_target_lang(),
            timeout_secs: default_timeout_secs(),
            max_attempts: default_max_attempts(),
            backoff_ms: default_backoff_ms(),
        }
    }
}

impl TranslateConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_attempts, Duration::from_millis(self.backoff_ms))
    }
}

impl Config {
    /// Resolved path of the source-language document.
    pub fn source_path(&self) -> PathBuf {
        self.locale_path(&self.sync.source_file)
    }

    /// Resolved path of the target-language document.
    pub fn target_path(&self) -> PathBuf {
        self.locale_path(&self.sync.target_file)
    }

    /// Resolved path of the snapshot document.
    pub fn snapshot_path(&self) -> PathBuf {
        self.locale_path(&self.sync.snapshot_file)
    }

    pub fn pace(&self) -> Duration {
        Duration::from_millis(self.sync.pace_ms)
    }

    fn locale_path(&self, file: &str) -> PathBuf {
        let dir = Path::new(&self.sync.locales_dir);
        let dir = if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            self.base_dir.join(dir)
        };
        dir.join(file)
    }
}

// --- Default value functions ---

fn default_log_level() -> String {
    "info".to_string()
}
fn default_locales_dir() -> String {
    "web/src/locales".to_string()
}
fn default_source_file() -> String {
    "en.json".to_string()
}
fn default_target_file() -> String {
    "zh-CN.json".to_string()
}
fn default_snapshot_file() -> String {
    ".zh-sync-meta.json".to_string()
}
fn default_pace_ms() -> u64 {
    60
}
fn default_endpoint() -> String {
    "https://translate.googleapis.com/translate_a/single".to_string()
}
fn default_client() -> String {
    "gtx".to_string()
}
fn default_source_lang() -> String {
    "en".to_string()
}
fn default_target_lang() -> String {
    "zh-CN".to_string()
}
fn default_timeout_secs() -> u64 {
    15
}
fn default_max_attempts() -> u32 {
    3
}
fn default_backoff_ms() -> u64 {
    200
}

/// Load configuration from a TOML file.
///
/// A missing file yields defaults rooted at the working directory. Relative
/// locale paths resolve against the directory holding the config file.
/// Nothing is logged here; callers report `origin` once logging is up.
pub fn load(path: &str) -> Result<Config, LocaleSyncError> {
    let path = Path::new(path);
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| LocaleSyncError::Config(format!("failed to read {}: {e}", path.display())))?;

    let mut config: Config = toml::from_str(&content)
        .map_err(|e| LocaleSyncError::Config(format!("failed to parse {}: {e}", path.display())))?;

    config.base_dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    config.origin = Some(path.to_path_buf());

    Ok(config)
}

/// Like [`load`], but an unreadable or unparsable file falls back to
/// defaults. The error is handed back so the caller can report it.
pub fn load_or_default(path: &str) -> (Config, Option<LocaleSyncError>) {
    match load(path) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    }
}
