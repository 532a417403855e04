//! # Logging Setup Module / 日志初始化模块
//!
//! Configures the global `tracing-subscriber` from the `[logging]` section of
//! the settings file. Supports single-line, pretty and JSON output, written to
//! stderr or appended to a log file.
//!
//! 根据设置文件中的 `[logging]` 配置节配置全局 `tracing-subscriber`。
//! 支持单行、美化和 JSON 输出，可写入 stderr 或追加到日志文件。

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::engine::config::{LogFormat, LoggingConfig};

/// Initialize the global tracing subscriber.
///
/// Must be called once, before any test case is constructed.
///
/// # Arguments
///
/// * `config` - Logging configuration (level, format, optional file)
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let (writer, ansi) = match &config.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        None => (BoxMakeWriter::new(std::io::stderr), true),
    };

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi);

    let installed = match config.format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(layer.json())
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(env_filter)
            .with(layer.pretty())
            .try_init(),
        LogFormat::Full => tracing_subscriber::registry()
            .with(env_filter)
            .with(layer)
            .try_init(),
    };

    installed.map_err(|e| anyhow::anyhow!("failed to initialize tracing subscriber: {}", e))
}
