//! # File Copier Module / 文件复制器模块
//!
//! Copies files as described by an XML document of the form:
//!
//! ```xml
//! <config>
//!     <file source_path="/var/log" destination_path="/srv/backup" file_name="server.log"/>
//! </config>
//! ```
//!
//! Each entry is handled on its own. A missing source, an entry without one
//! of its attributes and a failed copy are all reported, and the remaining
//! entries still run. Only a document that is not well-formed XML is rejected
//! as a whole.
//!
//! 按照上述形式的 XML 文档复制文件。
//! 每个条目独立处理：源文件不存在、条目缺少属性以及复制失败都会被报告，
//! 其余条目仍会继续执行。只有格式不正确的 XML 文档才会被整体拒绝。

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::infra::fs::copy_into_dir;

/// The root `<config>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CopyConfig {
    #[serde(rename = "file", default)]
    pub files: Vec<FileEntry>,
}

/// A single `<file .../>` element.
///
/// Attributes are optional at parse time; an incomplete entry fails on its
/// own when it is copied.
///
/// 单个 `<file .../>` 元素。
/// 属性在解析时是可选的；不完整的条目会在复制时单独失败。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FileEntry {
    #[serde(rename = "@source_path")]
    pub source_path: Option<PathBuf>,
    #[serde(rename = "@destination_path")]
    pub destination_path: Option<PathBuf>,
    #[serde(rename = "@file_name")]
    pub file_name: Option<String>,
}

/// What happened to one entry.
/// 单个条目的处理结果。
#[derive(Debug)]
pub enum CopyOutcome {
    Copied { source: PathBuf, destination: PathBuf },
    /// The source file does not exist; nothing was created.
    Missing { source: PathBuf },
    /// `source` is absent when the entry does not name one.
    Failed {
        source: Option<PathBuf>,
        error: anyhow::Error,
    },
}

impl CopyOutcome {
    pub fn is_copied(&self) -> bool {
        matches!(self, CopyOutcome::Copied { .. })
    }

    pub fn source(&self) -> Option<&Path> {
        match self {
            CopyOutcome::Copied { source, .. } | CopyOutcome::Missing { source } => Some(source),
            CopyOutcome::Failed { source, .. } => source.as_deref(),
        }
    }
}

impl CopyConfig {
    /// Parses the XML text of a copy configuration.
    pub fn from_xml(xml: &str) -> Result<Self> {
        quick_xml::de::from_str(xml).context("Malformed copy configuration")
    }

    /// Reads and parses the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let xml = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_xml(&xml).with_context(|| format!("Invalid configuration in {}", path.display()))
    }
}

impl FileEntry {
    pub fn new(
        source_path: impl Into<PathBuf>,
        destination_path: impl Into<PathBuf>,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            source_path: Some(source_path.into()),
            destination_path: Some(destination_path.into()),
            file_name: Some(file_name.into()),
        }
    }

    /// Full path of the file to copy, if the entry names one.
    pub fn source(&self) -> Option<PathBuf> {
        match (&self.source_path, &self.file_name) {
            (Some(dir), Some(name)) => Some(dir.join(name)),
            _ => None,
        }
    }

    /// Names of the attributes this entry lacks, in document order.
    pub fn missing_attributes(&self) -> Vec<&'static str> {
        [
            ("source_path", self.source_path.is_none()),
            ("destination_path", self.destination_path.is_none()),
            ("file_name", self.file_name.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, missing)| missing.then_some(name))
        .collect()
    }

    /// Copies this entry. Never returns an error: failures are part of the outcome.
    pub fn copy(&self) -> CopyOutcome {
        let (Some(source), Some(destination)) = (self.source(), &self.destination_path) else {
            return CopyOutcome::Failed {
                source: self.source(),
                error: anyhow::anyhow!(
                    "Incomplete <file> entry, missing: {}",
                    self.missing_attributes().join(", ")
                ),
            };
        };
        if !source.exists() {
            return CopyOutcome::Missing { source };
        }
        match copy_into_dir(&source, destination) {
            Ok(_) => CopyOutcome::Copied {
                source,
                destination: destination.clone(),
            },
            Err(error) => CopyOutcome::Failed {
                source: Some(source),
                error,
            },
        }
    }
}

/// Copies every entry in document order, calling `report` after each one.
pub fn copy_all(config: &CopyConfig, mut report: impl FnMut(&CopyOutcome)) -> Vec<CopyOutcome> {
    config
        .files
        .iter()
        .map(|entry| {
            let outcome = entry.copy();
            report(&outcome);
            outcome
        })
        .collect()
}
