//! # Init Command Module / 初始化命令模块
//!
//! This module implements the `init` command, which writes a starter
//! configuration file and message catalog.
//!
//! 此模块实现了 `init` 命令，用于写入初始配置文件和消息目录。

use anyhow::{Context, Result};
use colored::*;
use std::{fs, path::Path, process::ExitCode};

use crate::core::config::DEFAULT_CONFIG_FILE;
use crate::infra::t;

const DEFAULT_CONFIG: &str = r#"# Flash Resolver Configuration / Flash 解析器配置

# Root segment of every generated key / 所有生成键的根段
root = "flash"

# Placeholder filled with the resource label / 用资源标签填充的占位符
resource_placeholder = "resourceName"

# Where resource labels are looked up, in order / 按顺序查找资源标签的位置
label_scopes = ["activerecord.models", "activemodel.models", "models"]

# Catalog directories, relative to this file / 目录文件夹，相对于此文件
catalog_dirs = ["config/locales"]

# Language of the command-line output (optional) / 命令行输出的语言（可选）
# language = "en"
"#;

const DEFAULT_CATALOG: &str = r#"# Flash messages, most specific first / Flash 消息，从最具体到最通用
#   flash.<namespace>.<component>.<action>.<status>
#   flash.<component>.<action>.<status>
#   flash.<action>.<status>
#   flash.<status>

[flash]
success = "Done."
failure = "Something went wrong."

[flash.create]
success = "%{resourceName} was successfully created."
failure = "%{resourceName} could not be created."

[flash.update]
success = "%{resourceName} was successfully updated."
failure = "%{resourceName} could not be updated."

[flash.destroy]
success = "%{resourceName} was successfully deleted."
failure = "%{resourceName} could not be deleted."

# Resource labels / 资源标签
[activerecord.models]
products = "Product"
"#;

/// Writes `content` to `path` unless it exists and `force` is not set.
///
/// # Returns
/// `false` if the file was left untouched
fn write_starter_file(path: &Path, content: &str, force: bool) -> Result<bool> {
    if path.exists() && !force {
        println!("{}", t!("init.file_exists", path = path.display()).red());
        return Ok(false);
    }

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).with_context(|| {
                t!("init.create_parent_dir_failed", path = parent.display()).to_string()
            })?;
        }
    }

    fs::write(path, content)
        .with_context(|| t!("init.write_failed", path = path.display()).to_string())?;
    println!("{}", t!("init.success", path = path.display()).green());
    Ok(true)
}

/// Executes the init command.
///
/// # Arguments
/// * `dir` - Directory the starter files are written into
/// * `force` - Whether to overwrite existing files
/// * `locale` - Language of the command's own output
pub fn execute(dir: &Path, force: bool, locale: &str) -> Result<ExitCode> {
    rust_i18n::set_locale(locale);

    let config_written = write_starter_file(&dir.join(DEFAULT_CONFIG_FILE), DEFAULT_CONFIG, force)?;
    let catalog_written = write_starter_file(
        &dir.join("config").join("locales").join("en.toml"),
        DEFAULT_CATALOG,
        force,
    )?;

    if config_written || catalog_written {
        println!("{}", t!("init.next_steps"));
    } else {
        println!("{}", t!("init.use_force").yellow());
    }
    Ok(ExitCode::SUCCESS)
}
