//! # Engine Module / 引擎模块
//!
//! This module contains the test case runtime of Casework,
//! including the lifecycle contract, log sinks, system probes,
//! the reference test cases and the settings file.
//!
//! 此模块包含 Casework 的测试用例运行时，
//! 包括生命周期约定、日志接收器、系统探针、参考测试用例和设置文件。

pub mod cases;
pub mod config;
pub mod lifecycle;
pub mod probes;
pub mod sink;

// Re-exports
pub use config::Settings;
pub use lifecycle::TestCase;
pub use sink::LogSink;
