//! # Console Reporting Module / 控制台报告模块
//!
//! Formats and prints one line per copied or checked file. Checksum lines
//! follow a fixed `<file> <STATUS>` layout and stay uncolored so they can be
//! compared or piped as-is; copier lines and errors are localized.
//!
//! 为每个被复制或被检查的文件格式化并打印一行。校验和行遵循固定的
//! `<file> <STATUS>` 格式且不着色，以便原样比较或通过管道传递；
//! 复制器的行和错误信息则经过本地化。

use colored::*;

use crate::infra::t;
use crate::tools::checksum::CheckOutcome;
use crate::tools::copier::CopyOutcome;

/// Renders the console line for a copy outcome.
///
/// # Output Format / 输出格式
/// ```text
/// File /var/log/server.log was copied to /srv/backup.
/// There is no file /var/log/missing.log.
/// Failed to copy /var/log/locked.log to /srv/backup/locked.log: Permission denied (os error 13)
/// ```
pub fn copy_line(outcome: &CopyOutcome) -> String {
    match outcome {
        CopyOutcome::Copied {
            source,
            destination,
        } => t!(
            "copy.copied",
            src = source.display(),
            dst = destination.display()
        )
        .to_string(),
        CopyOutcome::Missing { source } => t!("copy.no_file", src = source.display()).to_string(),
        CopyOutcome::Failed { error, .. } => format!("{error:#}"),
    }
}

pub fn print_copy_outcome(outcome: &CopyOutcome) {
    let line = copy_line(outcome);
    match outcome {
        CopyOutcome::Failed { .. } => println!("{}", line.red()),
        _ => println!("{line}"),
    }
}

/// Prints `<file> OK`, `<file> FAIL` or `<file> NOT FOUND`.
pub fn print_check_outcome(outcome: &CheckOutcome) {
    println!("{outcome}");
}

/// Prints an error that ended a command, including its cause chain.
/// Goes to stdout, next to the results it interrupted.
pub fn print_error(error: &anyhow::Error) {
    println!("{}", format!("{error:#}").red());
}
