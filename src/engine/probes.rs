//! # System Probes Module / 系统探针模块
//!
//! Thin capabilities over the system clock and the machine's memory, read by
//! the reference test cases in their `prepare` phase. Keeping them behind
//! traits lets a deterministic fake stand in for the real system.
//!
//! 对系统时钟和机器内存的轻量能力封装，供参考测试用例在 `prepare` 阶段读取。
//! 将其置于 trait 之后，可以用确定性的伪实现替代真实系统。

use anyhow::{Context, Result};
use std::time::{SystemTime, UNIX_EPOCH};
use sysinfo::System;

/// One gibibyte, in bytes.
pub const GIB: u64 = 1024 * 1024 * 1024;

/// Source of the current wall-clock time.
pub trait Clock {
    /// Seconds since the Unix epoch, rounded to the nearest whole second.
    fn unix_seconds(&self) -> Result<u64>;
}

/// Source of the machine's memory size.
pub trait MemoryProbe {
    /// Total physical memory in bytes.
    fn total_memory(&self) -> Result<u64>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_seconds(&self) -> Result<u64> {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .context("System clock is set before the Unix epoch")?;
        Ok(elapsed.as_secs_f64().round() as u64)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemMemory;

impl MemoryProbe for SystemMemory {
    fn total_memory(&self) -> Result<u64> {
        let mut system = System::new();
        system.refresh_memory();
        match system.total_memory() {
            0 => anyhow::bail!("Unable to determine the amount of system memory"),
            bytes => Ok(bytes),
        }
    }
}
