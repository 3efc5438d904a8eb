//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides utilities for locating catalog files on disk.
//!
//! 此模块提供在磁盘上定位目录文件的实用功能。

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// File extensions recognised as catalog files.
pub const CATALOG_EXTENSIONS: [&str; 2] = ["toml", "json"];

/// Resolves a named file under a fixed directory, e.g. `fixture_path("tests/fixtures", "catalogs/en.toml")`.
/// Subdirectories are allowed; the name may not escape `root`.
///
/// # Arguments
/// * `root` - The fixed directory files are looked up in
/// * `name` - Relative file name, possibly with subdirectories
///
/// # Returns
/// The joined path, or an error if `name` is absolute or climbs out of `root`
pub fn fixture_path(root: &Path, name: &str) -> Result<PathBuf> {
    let relative = Path::new(name);
    if relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
    {
        bail!("Fixture name must be a relative path inside {}: {}", root.display(), name);
    }
    Ok(root.join(relative))
}

/// Lists the catalog files directly inside `dir`, sorted lexically by file name.
/// Prefix files with numbers (`01-base.toml`, `02-admin.toml`) to control the order.
///
/// 列出 `dir` 中直接包含的目录文件，按文件名字典序排序。
/// 可以用数字前缀（`01-base.toml`、`02-admin.toml`）控制顺序。
///
/// # Returns
/// `(catalog files, skipped files)`; skipped files have an unknown extension
pub fn list_catalog_files(dir: &Path) -> Result<(Vec<PathBuf>, Vec<PathBuf>)> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read catalog directory: {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to read entry in {}", dir.display()))?
            .path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files.into_iter().partition(|path| is_catalog_file(path)))
}

/// Checks whether `path` has a catalog file extension.
pub fn is_catalog_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| CATALOG_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}
