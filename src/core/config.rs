use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::candidates::DEFAULT_ROOT;
use crate::core::catalog::DEFAULT_LABEL_SCOPES;

/// The configuration file looked up when none is given explicitly.
pub const DEFAULT_CONFIG_FILE: &str = "Flash.toml";

/// Resolver configuration, loaded from a TOML file.
/// Every field has a default, so an empty file is a valid configuration.
///
/// 解析器配置，从 TOML 文件加载。
/// 每个字段都有默认值，因此空文件也是有效配置。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EngineConfig {
    /// The root segment of every generated key.
    /// 所有生成键的根段。
    #[serde(default = "default_root")]
    pub root: String,

    /// The placeholder filled with the resource label, e.g. `%{resourceName}`.
    /// 用资源标签填充的占位符，例如 `%{resourceName}`。
    #[serde(default = "default_resource_placeholder")]
    pub resource_placeholder: String,

    /// Scopes the model label of a resource is looked up under, in order.
    /// Used by the engine for every label lookup and by the loader for the
    /// catalogs it builds.
    /// 按顺序查找资源模型标签的作用域。引擎的每次标签查找以及加载器构建的目录都会使用它。
    #[serde(default = "default_label_scopes")]
    pub label_scopes: Vec<String>,

    /// Directories catalog files are loaded from.
    /// 加载目录文件的目录。
    #[serde(default = "default_catalog_dirs")]
    pub catalog_dirs: Vec<PathBuf>,

    /// The language of the command-line interface itself (e.g. "en", "zh-CN").
    /// Detected from the system when not set.
    ///
    /// 命令行界面自身的语言（例如 "en", "zh-CN"）。未设置时从系统检测。
    #[serde(default)]
    pub language: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            resource_placeholder: default_resource_placeholder(),
            label_scopes: default_label_scopes(),
            catalog_dirs: default_catalog_dirs(),
            language: None,
        }
    }
}

fn default_root() -> String {
    DEFAULT_ROOT.to_string()
}

fn default_resource_placeholder() -> String {
    "resourceName".to_string()
}

fn default_label_scopes() -> Vec<String> {
    DEFAULT_LABEL_SCOPES.iter().map(|s| s.to_string()).collect()
}

fn default_catalog_dirs() -> Vec<PathBuf> {
    vec![PathBuf::from("config/locales")]
}

impl EngineConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse resolver configuration")
    }

    /// Reads the configuration at `path`.
    ///
    /// When `path` is `None` the default `Flash.toml` in the current directory is
    /// used if present, otherwise defaults apply. An explicitly given path must exist.
    ///
    /// 读取 `path` 处的配置。
    /// `path` 为 `None` 时，若当前目录存在默认的 `Flash.toml` 则使用之，否则使用默认值。
    /// 显式给出的路径必须存在。
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        if !required && !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
        let mut config = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;

        // Relative catalog directories are relative to the configuration file.
        if let Some(base) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            for dir in &mut config.catalog_dirs {
                if dir.is_relative() {
                    *dir = base.join(&*dir);
                }
            }
        }

        Ok(config)
    }
}
