//! # Reference Test Cases Module / 参考测试用例模块
//!
//! Two concrete cases that show how the lifecycle contract is meant to be used:
//!
//! - `ListFiles` - runs only on even seconds and prints the regular files of
//!   the home directory.
//! - `RandomFile` - runs only on machines with at least 1 GiB of memory,
//!   writes a 1 MiB file of random printable characters and removes it again.
//!
//! 两个具体用例，展示生命周期约定的用法：
//!
//! - `ListFiles` - 仅在偶数秒运行，打印主目录中的普通文件。
//! - `RandomFile` - 仅在内存不少于 1 GiB 的机器上运行，
//!   写入一个 1 MiB 的随机可打印字符文件，并在之后将其删除。

use anyhow::{Context, Result};
use rand::Rng;
use rand::seq::SliceRandom;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::engine::lifecycle::Lifecycle;
use crate::engine::probes::{Clock, GIB, MemoryProbe, SystemClock, SystemMemory};
use crate::infra::fs;

/// Default name of the file written by [`RandomFile`].
pub const RANDOM_FILE_NAME: &str = "test";

/// Number of characters written by [`RandomFile`].
pub const RANDOM_FILE_LEN: usize = 1024 * 1024;

/// ASCII letters, digits and punctuation.
pub const RANDOM_ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Lists the regular files of a directory, the user's home by default.
///
/// Preparation passes only when the clock reads an even number of seconds.
pub struct ListFiles<C: Clock = SystemClock> {
    clock: C,
    dir: Option<PathBuf>,
    out: Box<dyn Write>,
}

impl ListFiles<SystemClock> {
    /// Lists the home directory to stdout, using the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for ListFiles<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ListFiles<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            dir: None,
            out: Box::new(io::stdout()),
        }
    }

    /// Lists `dir` instead of the home directory.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    /// Sends the listing to `out` instead of stdout.
    pub fn writing_to(mut self, out: impl Write + 'static) -> Self {
        self.out = Box::new(out);
        self
    }

    fn target_dir(&self) -> Result<PathBuf> {
        match &self.dir {
            Some(dir) => Ok(dir.clone()),
            None => fs::home_dir(),
        }
    }
}

impl<C: Clock> Lifecycle for ListFiles<C> {
    fn prepare(&mut self) -> Result<bool> {
        Ok(self.clock.unix_seconds()? % 2 == 0)
    }

    fn run(&mut self) -> Result<()> {
        let dir = self.target_dir()?;
        for name in fs::list_regular_files(&dir)? {
            writeln!(self.out, "{name}")?;
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Writes a file of random printable characters and removes it on cleanup.
///
/// Preparation passes only when the machine has at least 1 GiB of memory.
pub struct RandomFile<M: MemoryProbe = SystemMemory> {
    memory: M,
    path: PathBuf,
}

impl RandomFile<SystemMemory> {
    /// Writes [`RANDOM_FILE_NAME`] in the working directory.
    pub fn new() -> Self {
        Self::with_probe(SystemMemory)
    }
}

impl Default for RandomFile<SystemMemory> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: MemoryProbe> RandomFile<M> {
    pub fn with_probe(memory: M) -> Self {
        Self {
            memory,
            path: PathBuf::from(RANDOM_FILE_NAME),
        }
    }

    /// Writes to `path` instead of the default file name.
    pub fn at(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<M: MemoryProbe> Lifecycle for RandomFile<M> {
    fn prepare(&mut self) -> Result<bool> {
        Ok(self.memory.total_memory()? >= GIB)
    }

    fn run(&mut self) -> Result<()> {
        let file = File::create(&self.path)
            .with_context(|| format!("Failed to create {}", self.path.display()))?;
        let mut writer = BufWriter::new(file);
        write_random_chars(&mut writer, &mut rand::thread_rng(), RANDOM_FILE_LEN)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        writer
            .into_inner()
            .map_err(|e| e.into_error())
            .with_context(|| format!("Failed to flush {}", self.path.display()))?;
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        fs::remove_if_present(&self.path)?;
        Ok(())
    }
}

/// Writes `len` characters drawn uniformly from [`RANDOM_ALPHABET`].
pub fn write_random_chars<W: Write, R: Rng + ?Sized>(
    out: &mut W,
    rng: &mut R,
    len: usize,
) -> io::Result<()> {
    let mut chunk = [0u8; 4096];
    let mut remaining = len;
    while remaining > 0 {
        let n = remaining.min(chunk.len());
        for byte in &mut chunk[..n] {
            // The alphabet is a non-empty constant.
            *byte = *RANDOM_ALPHABET.choose(rng).unwrap_or(&b'?');
        }
        out.write_all(&chunk[..n])?;
        remaining -= n;
    }
    Ok(())
}
