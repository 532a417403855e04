//! # Hashing Module / 哈希模块
//!
//! Streaming digests over files and readers for the algorithms the checksum
//! verifier understands. Input is consumed in fixed-size chunks, so memory use
//! does not grow with the file.
//!
//! 为校验和验证器所支持的算法提供基于文件和读取器的流式摘要。
//! 输入以固定大小的块读取，因此内存占用不会随文件大小增长。

use anyhow::{Context, Result};
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256};
use std::fmt;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use std::str::FromStr;

/// Size of each read while hashing.
pub const CHUNK_SIZE: usize = 64 * 1024;

/// Supported hash algorithms.
/// 支持的哈希算法。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha256,
}

impl HashAlgorithm {
    pub const ALL: [HashAlgorithm; 3] = [HashAlgorithm::Md5, HashAlgorithm::Sha1, HashAlgorithm::Sha256];

    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha256 => "sha256",
        }
    }

    /// Hashes everything `reader` yields and returns the lowercase hex digest.
    pub fn digest_reader<R: Read>(&self, reader: R) -> std::io::Result<String> {
        match self {
            HashAlgorithm::Md5 => stream_digest::<Md5, R>(reader),
            HashAlgorithm::Sha1 => stream_digest::<Sha1, R>(reader),
            HashAlgorithm::Sha256 => stream_digest::<Sha256, R>(reader),
        }
    }

    /// Hashes the file at `path` and returns the lowercase hex digest.
    pub fn digest_file(&self, path: &Path) -> Result<String> {
        let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
        self.digest_reader(file)
            .with_context(|| format!("Failed to read {}", path.display()))
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when an algorithm name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported hash algorithm '{0}', expected one of md5, sha1, sha256")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for HashAlgorithm {
    type Err = UnknownAlgorithm;

    /// Matches the algorithm name case-insensitively.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        HashAlgorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

fn stream_digest<D: Digest, R: Read>(mut reader: R) -> std::io::Result<String> {
    let mut hasher = D::new();
    let mut buffer = vec![0u8; CHUNK_SIZE];
    loop {
        match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => hasher.update(&buffer[..n]),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(hex_encode(&hasher.finalize()))
}

/// Encodes bytes as a lowercase hex string.
fn hex_encode(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push(HEX[(byte >> 4) as usize] as char);
        out.push(HEX[(byte & 0x0f) as usize] as char);
    }
    out
}
