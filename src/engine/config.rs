//! # Settings Module / 设置模块
//!
//! Process-wide settings loaded from a TOML file: the UI language and how the
//! log subscriber is set up. A missing file is not an error; every field has
//! a default.
//!
//! 从 TOML 文件加载的进程级设置：界面语言以及日志订阅器的配置方式。
//! 文件不存在并不是错误；每个字段都有默认值。
//!
//! ```toml
//! language = "en"
//!
//! [logging]
//! level = "info"
//! format = "full"
//! file = "casework.log"
//! ```

use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Default location of the settings file, relative to the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = "Casework.toml";

/// Errors raised while loading the settings file.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Single-line human-readable records.
    #[default]
    Full,
    /// Multi-line, indented records for reading at a terminal.
    Pretty,
    /// One JSON object per line.
    Json,
}

/// The `[logging]` section.
/// `[logging]` 配置节。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// An `EnvFilter` directive such as `"info"` or `"casework=debug"`.
    /// `RUST_LOG` takes precedence when set.
    /// 一个 `EnvFilter` 指令，例如 `"info"` 或 `"casework=debug"`。
    /// 设置了 `RUST_LOG` 时以其为准。
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,

    /// Log file to append to. Logs go to stderr when absent.
    /// 要追加写入的日志文件。未设置时日志输出到 stderr。
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
            file: None,
        }
    }
}

/// Represents the whole settings file.
/// 代表整个设置文件。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// The language for console and log messages (e.g., "en", "zh-CN").
    /// Falls back to the system locale when not specified.
    ///
    /// 控制台和日志消息的语言（例如 "en", "zh-CN"）。
    /// 如果未指定，则回退到系统语言。
    #[serde(default)]
    pub language: Option<String>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Settings {
    /// Parses settings from TOML text.
    pub fn from_toml(content: &str, origin: &Path) -> Result<Self, SettingsError> {
        toml::from_str(content).map_err(|source| SettingsError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Loads settings from `path`, or returns the defaults if the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, SettingsError> {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content, path),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(SettingsError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}
