//! # Copier Module Unit Tests / Copier 模块单元测试
//!
//! This module tests XML parsing of the copy configuration and the per-entry
//! copy behavior, including the console lines produced for each outcome.
//!
//! 此模块测试复制配置的 XML 解析以及逐条目的复制行为，
//! 包括为每种结果生成的控制台输出行。

mod common;

use casework::reporting::console::copy_line;
use casework::tools::copier::{CopyConfig, CopyOutcome, FileEntry, copy_all};
use common::{dir_listing, write_file};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn entry(source: &Path, destination: &Path, file_name: &str) -> FileEntry {
    FileEntry::new(source, destination, file_name)
}

#[cfg(test)]
mod parse_tests {
    use super::*;

    #[test]
    fn test_parse_multiline_config() {
        let xml = r#"
<config>
    <file
            source_path="C:\Windows\system32"
            destination_path="C:\Program files"
            file_name="kernel32.dll"
    />
    <file
            source_path="/var/log"
            destination_path="/etc"
            file_name="server.log"
    />
</config>
"#;

        let config = CopyConfig::from_xml(xml).unwrap();

        assert_eq!(config.files.len(), 2);
        assert_eq!(
            config.files[0],
            FileEntry::new(r"C:\Windows\system32", r"C:\Program files", "kernel32.dll")
        );
        assert_eq!(config.files[1].source(), Some(PathBuf::from("/var/log").join("server.log")));
    }

    #[test]
    fn test_parse_empty_config() {
        let config = CopyConfig::from_xml("<config></config>").unwrap();
        assert!(config.files.is_empty());
    }

    #[test]
    fn test_missing_attribute_is_kept_for_the_entry() {
        let xml = r#"<config><file source_path="/a" file_name="x"/></config>"#;

        let config = CopyConfig::from_xml(xml).unwrap();

        assert_eq!(config.files[0].destination_path, None);
        assert_eq!(config.files[0].missing_attributes(), vec!["destination_path"]);
        assert_eq!(config.files[0].source(), Some(PathBuf::from("/a").join("x")));
    }

    #[test]
    fn test_malformed_xml_is_rejected() {
        assert!(CopyConfig::from_xml("<config><file").is_err());
    }

    #[test]
    fn test_load_reports_missing_file() {
        let temp_dir = tempdir().unwrap();
        let err = CopyConfig::load(&temp_dir.path().join("copy.xml")).unwrap_err();
        assert!(err.to_string().contains("copy.xml"));
    }
}

#[cfg(test)]
mod copy_tests {
    use super::*;

    #[test]
    fn test_copy_creates_nested_destination() {
        let temp_dir = tempdir().unwrap();
        let source_dir = temp_dir.path().join("src");
        let destination = temp_dir.path().join("out").join("deeper");
        write_file(&source_dir, "server.log", b"log line");

        let outcome = entry(&source_dir, &destination, "server.log").copy();

        assert!(outcome.is_copied());
        assert_eq!(fs::read(destination.join("server.log")).unwrap(), b"log line");
        // The source is left in place.
        assert!(source_dir.join("server.log").exists());
    }

    #[test]
    fn test_copy_overwrites_existing_destination_file() {
        let temp_dir = tempdir().unwrap();
        let source_dir = temp_dir.path().join("src");
        let destination = temp_dir.path().join("out");
        write_file(&source_dir, "a.txt", b"new");
        write_file(&destination, "a.txt", b"old");

        assert!(entry(&source_dir, &destination, "a.txt").copy().is_copied());
        assert_eq!(fs::read(destination.join("a.txt")).unwrap(), b"new");
    }

    #[test]
    fn test_missing_source_creates_nothing() {
        let temp_dir = tempdir().unwrap();
        let source_dir = temp_dir.path().join("src");
        fs::create_dir(&source_dir).unwrap();
        let destination = temp_dir.path().join("out");

        let outcome = entry(&source_dir, &destination, "ghost.txt").copy();

        assert!(matches!(outcome, CopyOutcome::Missing { .. }));
        assert_eq!(outcome.source(), Some(source_dir.join("ghost.txt").as_path()));
        assert!(!destination.exists());
        assert_eq!(dir_listing(temp_dir.path()), vec!["src".to_string()]);
    }

    #[test]
    fn test_failed_entry_does_not_stop_the_rest() {
        let temp_dir = tempdir().unwrap();
        let source_dir = temp_dir.path().join("src");
        write_file(&source_dir, "one.txt", b"1");
        write_file(&source_dir, "two.txt", b"2");
        // A regular file where a destination directory is expected.
        let blocked = write_file(temp_dir.path(), "blocked", b"not a directory");
        let good = temp_dir.path().join("good");

        let config = CopyConfig {
            files: vec![
                entry(&source_dir, &blocked, "one.txt"),
                entry(&source_dir, &good, "missing.txt"),
                entry(&source_dir, &good, "two.txt"),
            ],
        };

        let mut seen = Vec::new();
        let outcomes = copy_all(&config, |outcome| seen.push(outcome.source().map(Path::to_path_buf)));

        assert!(matches!(outcomes[0], CopyOutcome::Failed { .. }));
        assert!(matches!(outcomes[1], CopyOutcome::Missing { .. }));
        assert!(outcomes[2].is_copied());
        assert_eq!(fs::read(good.join("two.txt")).unwrap(), b"2");
        assert_eq!(
            seen,
            vec![
                Some(source_dir.join("one.txt")),
                Some(source_dir.join("missing.txt")),
                Some(source_dir.join("two.txt")),
            ]
        );
    }

    #[test]
    fn test_incomplete_entry_fails_alone() {
        let temp_dir = tempdir().unwrap();
        let source_dir = temp_dir.path().join("src");
        write_file(&source_dir, "bad.txt", b"bad");
        write_file(&source_dir, "good.txt", b"good");
        let destination = temp_dir.path().join("out");
        let xml = format!(
            r#"<config>
    <file source_path="{src}" file_name="bad.txt"/>
    <file source_path="{src}" destination_path="{dst}" file_name="good.txt"/>
</config>"#,
            src = source_dir.display(),
            dst = destination.display()
        );

        let config = CopyConfig::from_xml(&xml).unwrap();
        let outcomes = copy_all(&config, |_| {});

        match &outcomes[0] {
            CopyOutcome::Failed { source, error } => {
                assert_eq!(source.as_deref(), Some(source_dir.join("bad.txt").as_path()));
                assert!(error.to_string().contains("destination_path"));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(outcomes[1].is_copied());
        assert_eq!(dir_listing(&destination), vec!["good.txt".to_string()]);
    }

    #[test]
    fn test_entry_without_source_has_no_source_path() {
        let outcome = FileEntry {
            destination_path: Some(PathBuf::from("/tmp/out")),
            ..FileEntry::default()
        }
        .copy();

        assert!(outcome.source().is_none());
        assert_eq!(
            copy_line(&outcome),
            "Incomplete <file> entry, missing: source_path, file_name"
        );
    }
}

#[cfg(test)]
mod console_line_tests {
    use super::*;

    #[test]
    fn test_copied_line() {
        let outcome = CopyOutcome::Copied {
            source: PathBuf::from("/var/log/server.log"),
            destination: PathBuf::from("/srv/backup"),
        };
        assert_eq!(
            copy_line(&outcome),
            "File /var/log/server.log was copied to /srv/backup."
        );
    }

    #[test]
    fn test_missing_line() {
        let outcome = CopyOutcome::Missing {
            source: PathBuf::from("/var/log/ghost.log"),
        };
        assert_eq!(copy_line(&outcome), "There is no file /var/log/ghost.log.");
    }

    #[test]
    fn test_failed_line_shows_error_chain() {
        let outcome = CopyOutcome::Failed {
            source: Some(PathBuf::from("/a")),
            error: anyhow::anyhow!("disk full").context("Failed to copy /a to /b/a"),
        };
        assert_eq!(copy_line(&outcome), "Failed to copy /a to /b/a: disk full");
    }
}
