//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides utilities for file system operations,
//! such as resolving the home directory, copying a file into a directory
//! and removing a file that may or may not exist.
//!
//! 此模块提供文件系统操作的实用功能，
//! 如解析主目录、将文件复制到目录中，以及删除可能存在也可能不存在的文件。

use anyhow::{Context, Result};
use fs_extra::file::{copy, CopyOptions};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Resolves the home directory of the invoking user.
///
/// # Returns
/// The home directory, or an error if it cannot be determined
pub fn home_dir() -> Result<PathBuf> {
    let expanded = shellexpand::tilde("~");
    if expanded == "~" {
        anyhow::bail!("Unable to determine the home directory of the current user");
    }
    Ok(PathBuf::from(expanded.as_ref()))
}

/// Copies `file` into the directory `dir`, keeping its file name.
/// The directory is created, including parents, if it doesn't exist.
/// An existing file with the same name is overwritten.
///
/// # Arguments
/// * `file` - Source file path
/// * `dir` - Destination directory path
///
/// # Returns
/// The path of the copied file
pub fn copy_into_dir(file: &Path, dir: &Path) -> Result<PathBuf> {
    let file_name = file
        .file_name()
        .with_context(|| format!("Source path has no file name: {}", file.display()))?;

    if !is_directory(dir) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }

    let target = dir.join(file_name);
    let mut options = CopyOptions::new();
    options.overwrite = true;
    copy(file, &target, &options).with_context(|| {
        format!("Failed to copy {} to {}", file.display(), target.display())
    })?;
    Ok(target)
}

/// Removes a file, treating a missing file as success.
///
/// # Returns
/// `true` if a file was removed, `false` if there was nothing to remove
pub fn remove_if_present(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e).with_context(|| format!("Failed to remove file: {}", path.display())),
    }
}

/// Lists the names of the regular files directly inside `dir`, sorted.
/// Subdirectories are skipped, symlinks are followed.
pub fn list_regular_files(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        if entry.path().is_file() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

/// Checks if a path exists and is a directory.
///
/// # Arguments
/// * `path` - Path to check
///
/// # Returns
/// `true` if the path exists and is a directory, `false` otherwise
pub fn is_directory(path: &Path) -> bool {
    path.exists() && path.is_dir()
}
