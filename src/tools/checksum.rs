//! # Checksum Verifier Module / 校验和验证模块
//!
//! Reads a checksum list where every line names a file, a hash algorithm and
//! the expected hex digest:
//!
//! ```text
//! file_01.bin md5 aaeab83fcc93cd3ab003fa8bfd8d8906
//! file_04.txt sha1 da39a3ee5e6b4b0d3255bfef95601890afd80709
//! ```
//!
//! and checks each listed file in a directory, reporting `OK`, `FAIL` or
//! `NOT FOUND`.
//!
//! 读取校验和列表，每行包含文件名、哈希算法和期望的十六进制摘要，
//! 并在目录中逐一检查所列文件，报告 `OK`、`FAIL` 或 `NOT FOUND`。

use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::infra::hashing::{HashAlgorithm, UnknownAlgorithm};

/// Errors raised by a malformed checksum list.
/// 校验和列表格式错误时产生的错误。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChecksumError {
    #[error("line {line}: expected `file_name algorithm hash-sum`, got {found:?}")]
    MalformedLine { line: usize, found: String },

    #[error("line {line}: {source}")]
    UnknownAlgorithm {
        line: usize,
        #[source]
        source: UnknownAlgorithm,
    },
}

/// One line of the checksum list.
///
/// The algorithm name is kept as written and resolved when the entry is
/// checked, so an unknown name only stops the run once earlier entries have
/// been reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecksumEntry {
    /// 1-based line number in the list.
    pub line: usize,
    pub file_name: String,
    pub algorithm: String,
    /// Recorded digest, compared verbatim against the lowercase hex digest.
    pub digest: String,
}

/// A parsed checksum list, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChecksumList {
    pub entries: Vec<ChecksumEntry>,
}

/// Result of checking one file.
/// 检查单个文件的结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Ok,
    Fail,
    NotFound,
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Part of the output contract; never translated.
        let token = match self {
            CheckStatus::Ok => "OK",
            CheckStatus::Fail => "FAIL",
            CheckStatus::NotFound => "NOT FOUND",
        };
        f.write_str(token)
    }
}

/// A file name together with its check status. Displays as `<file> <STATUS>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub file_name: String,
    pub status: CheckStatus,
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.file_name, self.status)
    }
}

impl ChecksumList {
    /// Parses the text of a checksum list. Blank lines are ignored, extra
    /// whitespace between fields is allowed and fields after the third are
    /// ignored. A line with fewer than three fields rejects the whole list.
    pub fn parse(text: &str) -> std::result::Result<Self, ChecksumError> {
        let mut entries = Vec::new();
        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let fields: Vec<&str> = raw.split_whitespace().collect();
            match fields.as_slice() {
                [] => continue,
                [file_name, algorithm, digest, ..] => entries.push(ChecksumEntry {
                    line,
                    file_name: file_name.to_string(),
                    algorithm: algorithm.to_string(),
                    digest: digest.to_string(),
                }),
                _ => {
                    return Err(ChecksumError::MalformedLine {
                        line,
                        found: raw.to_string(),
                    });
                }
            }
        }
        Ok(Self { entries })
    }

    /// Reads and parses the checksum list at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Self::parse(&text)?)
    }
}

impl ChecksumEntry {
    /// Checks this entry against the file of the same name inside `dir`.
    ///
    /// A missing file is a `NotFound` status, not an error. An unknown
    /// algorithm or failing to read an existing file is an error.
    pub fn check(&self, dir: &Path) -> Result<CheckOutcome> {
        let path = dir.join(&self.file_name);
        let status = if !path.exists() {
            CheckStatus::NotFound
        } else if self.hash_algorithm()?.digest_file(&path)? == self.digest {
            CheckStatus::Ok
        } else {
            CheckStatus::Fail
        };
        Ok(CheckOutcome {
            file_name: self.file_name.clone(),
            status,
        })
    }

    /// Resolves the recorded algorithm name.
    pub fn hash_algorithm(&self) -> std::result::Result<HashAlgorithm, ChecksumError> {
        self.algorithm
            .parse::<HashAlgorithm>()
            .map_err(|source| ChecksumError::UnknownAlgorithm {
                line: self.line,
                source,
            })
    }
}
