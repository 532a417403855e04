//! # Reporting Module / 报告模块
//!
//! This module prints the per-item results of the file utilities to the console.
//! Test case runs report through the log sink instead and need nothing here.
//!
//! 此模块将文件工具的逐项结果打印到控制台。
//! 测试用例的运行通过日志接收器报告，不需要此模块。

pub mod console;

// Re-export common reporting functions
pub use console::{copy_line, print_check_outcome, print_copy_outcome, print_error};
