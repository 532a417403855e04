//! # Casework Library / Casework 库
//!
//! This library provides the core functionality for the `casework` tool:
//! a lifecycle-driven test case runtime plus two small file utilities,
//! an XML-configured file copier and a checksum verifier.
//!
//! 此库为 `casework` 工具提供核心功能：
//! 一个基于生命周期的测试用例运行时，以及两个小型文件工具，
//! 即 XML 配置驱动的文件复制器和校验和验证器。
//!
//! ## Modules / 模块
//!
//! - `engine` - Test case lifecycle, log sinks, probes, reference cases and settings
//! - `tools` - The file copier and the checksum verifier
//! - `infra` - Infrastructure services like hashing, file system helpers and logging setup
//! - `reporting` - Console output for the file utilities
//! - `cli` - Command-line interface and commands
//!
//! - `engine` - 测试用例生命周期、日志接收器、探针、参考用例和设置
//! - `tools` - 文件复制器和校验和验证器
//! - `infra` - 基础设施服务，如哈希计算、文件系统辅助函数和日志初始化
//! - `reporting` - 文件工具的控制台输出
//! - `cli` - 命令行接口和命令

pub mod engine;
pub mod tools;
pub mod infra;
pub mod reporting;
pub mod cli;

// Re-export commonly used items
pub use engine::lifecycle::{Lifecycle, Outcome, Phase, PhaseFault, State, TestCase};
pub use engine::sink::{LogRecord, LogSink, RecordingSink, TracingSink};

/// Selects the UI language for console and log messages.
///
/// An explicitly requested language wins; otherwise the system locale is used.
/// It attempts to match the full locale (e.g., "zh-CN"), then just the
/// language code (e.g., "en"), and finally falls back to "en".
/// Returns the locale that was applied.
pub fn init_locale(requested: Option<&str>) -> String {
    let locale = requested
        .map(str::to_string)
        .or_else(sys_locale::get_locale)
        .unwrap_or_else(|| "en".to_string());
    let available_locales = rust_i18n::available_locales!();

    let lang = if available_locales.contains(&locale.as_str()) {
        locale.as_str()
    } else {
        locale
            .split('-')
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .unwrap_or("en")
    };

    rust_i18n::set_locale(lang);
    lang.to_string()
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
