//! # Catalog Loader / 目录加载器
//!
//! Builds a [`MessageCatalog`] from the TOML and JSON files of one or more
//! directories. Files are applied in lexical order, directory by directory,
//! and later files override earlier ones key by key.
//!
//! 从一个或多个目录中的 TOML 和 JSON 文件构建 [`MessageCatalog`]。
//! 文件按目录逐个、按字典序应用，后面的文件按键覆盖前面的文件。

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::core::catalog::{MessageCatalog, SharedCatalog};
use crate::core::config::EngineConfig;
use crate::infra::fs::list_catalog_files;

/// Parses one catalog file, choosing the format by extension.
pub fn load_catalog_file(path: &Path) -> Result<MessageCatalog> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let catalog = if is_json {
        MessageCatalog::from_json_str(&content)
    } else {
        MessageCatalog::from_toml_str(&content)
    };
    catalog.with_context(|| format!("Failed to parse catalog file: {}", path.display()))
}

/// Loads and merges every catalog file of `dirs`, applying the label scopes of `config`.
///
/// 加载并合并 `dirs` 中的所有目录文件，并应用 `config` 中的标签作用域。
pub fn load_catalog_dirs(dirs: &[PathBuf], config: &EngineConfig) -> Result<MessageCatalog> {
    let mut catalog = MessageCatalog::new().with_label_scopes(config.label_scopes.iter().map(String::as_str));

    for dir in dirs {
        let (files, skipped) = list_catalog_files(dir)?;
        for path in skipped {
            warn!(file = %path.display(), "skipping file with unknown catalog extension");
        }
        for path in files {
            let loaded = load_catalog_file(&path)?;
            debug!(file = %path.display(), entries = loaded.len(), "loaded catalog file");
            catalog.merge(loaded);
        }
    }

    info!(dirs = dirs.len(), entries = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Loads the directories named in `config`.
pub fn load_configured_catalog(config: &EngineConfig) -> Result<MessageCatalog> {
    load_catalog_dirs(&config.catalog_dirs, config)
}

/// Reloads the configured directories and publishes the result through `shared`.
/// On failure the published snapshot is left untouched.
///
/// 重新加载配置中的目录并通过 `shared` 发布结果。失败时已发布的快照保持不变。
///
/// # Returns
/// The snapshot that was replaced
pub fn reload(shared: &SharedCatalog, config: &EngineConfig) -> Result<Arc<MessageCatalog>> {
    let fresh = load_configured_catalog(config)?;
    Ok(shared.replace(fresh))
}
